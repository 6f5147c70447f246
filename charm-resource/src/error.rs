use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("resource missing name")]
    MissingName,
    #[error("resource missing type")]
    MissingType,
    #[error("unsupported resource type {0:?}")]
    UnsupportedType(String),
    #[error("resource missing filename")]
    MissingFilename,
    #[error("filename cannot contain \"/\" (got {0:?})")]
    FilenameContainsSlash(String),
    #[error("cannot decode resource metadata")]
    Decode(#[from] json::Error),
}

impl Error {
    /// Whether this error reports structurally unacceptable resource data,
    /// as opposed to a failure to obtain the data in the first place.
    pub fn is_not_valid(&self) -> bool {
        matches!(
            self,
            Error::MissingName
                | Error::MissingType
                | Error::UnsupportedType(_)
                | Error::MissingFilename
                | Error::FilenameContainsSlash(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
