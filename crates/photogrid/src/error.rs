#[derive(thiserror::Error, Debug, serde::Deserialize, serde::Serialize)]
pub enum Error {
    #[error("Missing API key")]
    MissingKey,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
