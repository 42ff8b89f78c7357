use thiserror::Error;

#[derive(Error, Debug)]
pub enum FingerprintError {
    #[error("Invalid arguments: {0}")]
    InvalidArgument(String),

    #[error("Type constraint violated: {0}")]
    TypeConstraintViolation(String),
}
