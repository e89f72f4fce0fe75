use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FxError {
    #[error("invalid color token `{0}`")]
    InvalidColor(String),
    #[error("unknown background mode `{0}`")]
    UnknownBackground(String),
    #[error("unknown pointer response `{0}`")]
    UnknownPointerResponse(String),
}
