use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("archive request failed: {0}")]
    Request(String),

    #[error("archive returned HTTP {0}")]
    Status(u16),

    #[error("failed to decode archive response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid archive URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("invalid archive configuration: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ArchiveError>;
