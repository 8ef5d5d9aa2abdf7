use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AuthUiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Response error: {0}")]
    Decode(String),

    #[error("Invalid endpoint url: {0}")]
    Url(#[from] url::ParseError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Unknown form: {0}")]
    UnknownForm(String),
}

pub type Result<T> = std::result::Result<T, AuthUiError>;
