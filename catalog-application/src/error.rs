use catalog_domain::StoreError;
use thiserror::Error;

use crate::AppState;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<StoreError> for AppError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::NotFound => AppError::NotFound(value.to_string()),
            other => AppError::Internal(other.into()),
        }
    }
}

/// Maps a store failure, counting it unless it is a plain missing item.
pub(crate) fn store_failure(state: &AppState, err: StoreError) -> AppError {
    if !err.is_not_found() {
        state.metrics.record_store_error();
    }
    AppError::from(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::memory_state;

    #[test]
    fn store_not_found_stays_distinguishable() {
        match AppError::from(StoreError::NotFound) {
            AppError::NotFound(message) => assert_eq!(message, "item not found"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn store_io_failure_is_internal_with_context() {
        let err = AppError::from(StoreError::io(
            "failed to read file",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        ));
        match err {
            AppError::Internal(inner) => {
                assert!(inner.to_string().starts_with("failed to read file"))
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn store_failure_counts_only_real_failures() {
        let (state, _, _) = memory_state();
        assert!(matches!(
            store_failure(&state, StoreError::NotFound),
            AppError::NotFound(_)
        ));
        assert_eq!(state.metrics.store_errors(), 0);

        let err = store_failure(
            &state,
            StoreError::io(
                "failed to write file",
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            ),
        );
        assert!(matches!(err, AppError::Internal(_)));
        assert_eq!(state.metrics.store_errors(), 1);
    }
}
