pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("an alluvial diagram needs at least 2 columns, got {count}")]
    InvalidColumnCount { count: usize },

    #[error("records aggregate to a total count of zero")]
    EmptyInput,

    #[error("no color resolved for {column}={value}")]
    UnresolvedColorKey { column: String, value: String },

    #[error("unknown column: {column}")]
    UnknownColumn { column: String },

    #[error("unknown palette: {name}")]
    UnknownPalette { name: String },

    #[error("invalid records: {message}")]
    InvalidRecords { message: String },

    #[error("records JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
