//! Error types for the Parley core.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Dialog not found: {0}")]
    DialogNotFound(String),

    #[error("Pin limit reached: at most {0} dialogs may be pinned")]
    PinLimitReached(usize),

    #[error("Backend rejected the request: {0}")]
    Backend(String),

    #[error("Transport unavailable: {0}")]
    Transport(String),
}

impl serde::Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
