use thiserror::Error;

pub type GoldResult<T> = Result<T, GoldError>;

#[derive(Debug, Error)]
pub enum GoldError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("{component} is missing required integration point `{target}`")]
    MissingIntegrationPoint {
        component: &'static str,
        target: String,
    },

    #[error("unsupported language code: {0}")]
    UnsupportedLanguage(String),

    #[error("invalid theme preference: {0}")]
    InvalidTheme(String),

    #[error("invalid config: {0}")]
    Config(String),
}
