use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CarouselError {
    #[error("Invalid carousel configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, CarouselError>;
