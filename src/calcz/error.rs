use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalczError {
    #[error("Overflow: {expression} does not fit in {ty}")]
    Overflow {
        expression: String,
        ty: &'static str,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CalczError>;
