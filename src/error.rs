use thiserror::Error;

/// All errors that the crate can generate. The layout algorithms themselves
/// are total and never fail; only reading input and writing rendered lines
/// can go wrong.
#[derive(Error, Debug)]
pub enum TypesetError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),
}
