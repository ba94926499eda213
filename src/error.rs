use thiserror::Error;

/// Closed set of failure kinds surfaced to the chat loop. Callers match on
/// the variant instead of inspecting message text.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("unsupported database kind: {0}")]
    UnsupportedDatabaseKind(String),

    #[error("required field is empty: {0}")]
    MissingField(&'static str),

    #[error("failed to connect: {0}")]
    ConnectionFailure(#[source] anyhow::Error),

    #[error("agent turn failed: {0}")]
    TurnFailure(#[source] anyhow::Error),

    #[error("not connected to a database, use /connect first")]
    NotConnected,
}
