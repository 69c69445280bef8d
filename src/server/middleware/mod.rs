//! Request guards and session wrappers.
//!
//! `AuthGuard` resolves the session principal and checks route permissions before a
//! controller touches any data. `AuthSession` is the typed view of the session.

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;
