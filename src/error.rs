#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("randomness unavailable: {0}")]
    RandomnessUnavailable(String),
}

impl From<rand::Error> for Error {
    fn from(err: rand::Error) -> Self {
        Error::RandomnessUnavailable(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
