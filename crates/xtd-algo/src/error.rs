#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid delimiter pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
