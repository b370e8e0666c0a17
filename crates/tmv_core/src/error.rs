use thiserror::Error;

/// Errors raised by the statistics engine and the artifact loader.
///
/// Engine errors identify the offending position in the input so the caller
/// can report it; a failed computation never returns a partial model.
#[derive(Error, Debug)]
pub enum MatchError {
    #[error("point {index}: invalid {field} value {value} (expected 1 or 2)")]
    InvalidPlayer {
        index: usize,
        field: &'static str,
        value: u8,
    },

    #[error("game {index}: tied at {p1_points}-{p2_points}, no winner derivable")]
    TiedGame {
        index: usize,
        p1_points: u32,
        p2_points: u32,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),
}

impl MatchError {
    /// True for errors caused by malformed input data rather than the
    /// environment. Data errors are fatal to the single computation only.
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            MatchError::InvalidPlayer { .. }
                | MatchError::TiedGame { .. }
                | MatchError::Deserialization(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, MatchError>;
