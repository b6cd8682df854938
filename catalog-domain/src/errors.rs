use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("item not found")]
    NotFound,
    #[error("{context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("{context}: {source}")]
    Serialization {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    pub fn io(context: &'static str, source: std::io::Error) -> Self {
        StoreError::Io { context, source }
    }

    pub fn serialization(context: &'static str, source: serde_json::Error) -> Self {
        StoreError::Serialization { context, source }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound)
    }
}
