use thiserror::Error;

/// Errors produced while loading the beer list or rendering a record.
///
/// `EmptyCollection`, and `Network`/`Decode` raised by the collection
/// fetch, are fatal at startup. `InvalidImage` and `Network` raised by the
/// image fetch only degrade the image region.
#[derive(Error, Debug)]
pub enum BrowseError {
    /// The collection had no records, so no cursor position can exist.
    #[error("the beer list is empty")]
    EmptyCollection,

    /// The decoded image reported a zero dimension.
    #[error("invalid image dimensions {width}x{height}")]
    InvalidImage { width: u32, height: u32 },

    /// A remote fetch failed.
    #[error("request to `{url}` failed: {message}")]
    Network { url: String, message: String },

    /// A payload could not be decoded (JSON list, image bytes).
    #[error("decode error: {0}")]
    Decode(String),

    /// `render` was called before the cursor was positioned.
    #[error("cursor is not positioned")]
    Unpositioned,

    /// Terminal I/O failure.
    #[error("terminal I/O error: {0}")]
    Terminal(#[from] std::io::Error),
}

impl BrowseError {
    pub(crate) fn network(url: &str, err: impl std::fmt::Display) -> Self {
        BrowseError::Network {
            url: url.to_string(),
            message: err.to_string(),
        }
    }
}
