#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Payload does not fit the frame's 16-bit length field.
    #[error("payload too long: {actual} exceeds {max}")]
    PayloadTooLong { actual: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
