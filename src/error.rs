use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unknown experience level: {value:?}")]
    InvalidEnumValue { value: String },

    #[error("No {what} named {name:?} in the remote list")]
    NotFound { what: &'static str, name: String },

    /// The server answered, but not with a 2xx.
    #[error("{url} responded with HTTP {status}: {body}")]
    Status { url: String, status: u16, body: String },

    /// Transport failure or an undecodable body.
    #[error("Reqwest Error: {0}")]
    Remote(#[from] reqwest::Error),

    #[error("Io Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Json Error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True for failures that came from talking to the API.
    pub fn is_remote(&self) -> bool {
        matches!(self, Error::Status { .. } | Error::Remote(_))
    }
}
