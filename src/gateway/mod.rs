mod client;
mod video;

pub use client::*;
pub use video::*;

use crate::edit::EditBuffer;

/// The network boundary of the edit view. Implementations block, callers are
/// expected to run them off the UI thread.
pub trait Gateway: core::fmt::Debug + Send + Sync {
    /// Fetch a single video by its id.
    ///
    /// # Errors
    /// `NotFound` for an unknown id, `Network` when the call fails.
    fn fetch_by_id(&self, video_id: &str) -> Result<VideoEntity, Error>;

    /// Replace the editable fields of a video, returns the confirmation message.
    ///
    /// # Errors
    /// `Validation` for a rejected payload, `Forbidden` or `Network` otherwise.
    fn update(&self, user_id: &str, video_id: &str, fields: &EditBuffer) -> Result<String, Error>;

    /// Delete a video, returns the confirmation message.
    ///
    /// # Errors
    /// `Forbidden` when the user does not own the video, `Network` otherwise.
    fn remove(&self, user_id: &str, video_id: &str) -> Result<String, Error>;
}

/// Errors that may occur while talking to the video backend.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorKind {
    NotFound,
    Network,
    Validation,
    Forbidden,
    Parsing,
}

impl Error {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {}

impl ErrorKind {
    pub const fn from_status(status: u16) -> Self {
        match status {
            404 => Self::NotFound,
            401 | 403 => Self::Forbidden,
            400 | 422 => Self::Validation,
            _ => Self::Network,
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Self::new(ErrorKind::Parsing, e.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::new(ErrorKind::Parsing, e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_map_to_kinds() {
        assert_eq!(ErrorKind::from_status(404), ErrorKind::NotFound);
        assert_eq!(ErrorKind::from_status(403), ErrorKind::Forbidden);
        assert_eq!(ErrorKind::from_status(401), ErrorKind::Forbidden);
        assert_eq!(ErrorKind::from_status(422), ErrorKind::Validation);
        assert_eq!(ErrorKind::from_status(500), ErrorKind::Network);
    }

    #[test]
    fn display_is_the_verbatim_message() {
        let error = Error::new(ErrorKind::Forbidden, "Forbidden");

        assert_eq!(error.to_string(), "Forbidden");
    }
}
