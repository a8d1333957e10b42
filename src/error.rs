use thiserror::Error;

pub type Result<T> = std::result::Result<T, EqError>;

#[derive(Debug, Error)]
pub enum EqError {
    #[error("parse error: {0}")]
    Parse(String),
    #[error("evaluation error: {0}")]
    Eval(String),
    #[error("singular coefficient matrix")]
    Singular,
}
