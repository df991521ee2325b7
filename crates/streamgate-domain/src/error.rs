use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Payload decode error: {0}")]
    PayloadDecode(String),

    #[error("Invalid delivery stream ARN: {0}")]
    InvalidStreamArn(String),

    #[error("Could not put records after {attempts} attempts. {message}")]
    RetriesExhausted { attempts: u32, message: String },

    #[error("Sink error: {0}")]
    Sink(#[from] anyhow::Error),
}
