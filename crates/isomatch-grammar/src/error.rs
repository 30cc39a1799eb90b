use thiserror::Error;

/// Matching errors
#[derive(Error, Debug)]
pub enum GrammarError {
    #[error("No match: {input:?} is not an ISO 8601 datetime")]
    NoMatch { input: String },

    #[error("Input too long: {len} bytes exceeds the limit of {max}")]
    InputTooLong { len: usize, max: usize },
}

pub type GrammarResult<T> = std::result::Result<T, GrammarError>;
