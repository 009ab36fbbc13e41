#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A non-success response from either service, with the server's error
    /// message when one was provided.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// A protected call was attempted with no stored access token and no
    /// refresh token to fall back on.
    #[error("Not authenticated")]
    NotAuthenticated,
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
