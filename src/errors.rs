#[derive(Debug, thiserror::Error)]
pub enum InvokerError {
    #[error("Target URL is empty")]
    EmptyUrl,

    #[error("Invalid header {name:?}: {reason}")]
    InvalidHeader { name: String, reason: String },

    #[error("Invalid cookie {name:?}: {reason}")]
    InvalidCookie { name: String, reason: String },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}
