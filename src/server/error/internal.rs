use thiserror::Error;

/// Internal issues indicating unexpected stored data or library failures.
#[derive(Error, Debug)]
pub enum InternalError {
    /// Stored role id has no matching `Role`.
    #[error("Unknown role id {0} stored in database")]
    UnknownRole(i32),

    /// Stored status id has no matching status for the record kind.
    #[error("Unknown {kind} status id {value} stored in database")]
    UnknownStatus {
        /// Record kind, `account` or `content`
        kind: &'static str,
        value: i32,
    },

    /// Stored test questions do not deserialize.
    #[error("Failed to decode questions of test {test_id}: {source}")]
    InvalidQuestions {
        test_id: String,
        #[source]
        source: serde_json::Error,
    },

    /// Argon2 failed to hash or parse a password hash.
    #[error("Password hash error: {0}")]
    PasswordHash(String),
}
