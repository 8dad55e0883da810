use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum JobTipError {
    #[error("unknown status '{0}'")]
    UnknownStatus(String),
}

pub type Result<T> = std::result::Result<T, JobTipError>;
