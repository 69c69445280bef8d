//! Small helpers shared across layers.

pub mod id;
pub mod password;
