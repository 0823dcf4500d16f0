use thiserror::Error;

/// Errors raised at the edges of the mixer contract.
///
/// The seven mixer operations themselves never fail — an unimplemented
/// capability falls back to a documented default instead. These variants
/// cover caller-programming-error conditions: malformed entities at
/// construction time and handles a device did not issue.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MixerError {
    #[error("invalid track: {0}")]
    InvalidTrack(String),

    #[error("invalid options group: {0}")]
    InvalidOptions(String),

    #[error("unknown handle: {0}")]
    UnknownHandle(String),

    #[error("expected {expected} channel values, got {got}")]
    ChannelMismatch { expected: u16, got: usize },
}
