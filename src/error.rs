use thiserror::Error;

/// Errors raised while attaching an overlay to a container
#[derive(Debug, Error)]
pub enum Error {
    /// The container has no designated scrollable child
    #[error("container has no scrolling area")]
    MissingScrollArea,
    /// A data attribute holds a value that cannot be used
    #[error("invalid value {value:?} for option `{key}`")]
    InvalidOption { key: String, value: String },
}

pub type Result<T> = std::result::Result<T, Error>;
