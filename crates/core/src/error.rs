#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Unknown field: {0}")]
    UnknownField(String),
}
