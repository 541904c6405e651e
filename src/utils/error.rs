use thiserror::Error;

#[derive(Error, Debug)]
pub enum CakeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CakeError>;
