//! Database interaction adapter.
//!
//! Wraps the common "query resolves to an ordered row set; caller wants the
//! first row or the whole set" pattern under the [`ApiResult`] contract.
//! Execution faults are captured as values at this boundary — they never
//! unwind the call stack — and the empty-result ambiguity is classified by
//! [`InteractionKind`].
//!
//! The adapter is generic over the pending query's error type, so it
//! classifies driver faults without depending on any particular driver.
//! It never retries and never cancels; it classifies whatever outcome it is
//! handed exactly once.

use std::fmt::Display;
use std::future::Future;

use tracing::error;

use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::result::ApiResult;

/// Row-count policy for single-row reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionKind {
    /// Zero rows is a normal, user-facing not-found.
    #[default]
    Default,
    /// Zero rows is an internal inconsistency: a prior step guaranteed the
    /// row exists. The caller asserts that precondition; this layer only
    /// classifies the outcome.
    Sequential,
}

/// Execute a pending query and return its first row.
///
/// Rows beyond the first are dropped per contract. An empty row set is
/// classified by `kind`; an execution fault is logged and returned as an
/// internal-server error.
pub async fn fetch_first<T, E, F>(query: F, kind: InteractionKind) -> ApiResult<T>
where
    F: Future<Output = Result<Vec<T>, E>>,
    E: Display,
{
    let mut rows = match query.await {
        Ok(rows) => rows,
        Err(cause) => {
            error!(cause = %cause, "database query failed");
            return Err(ApiError::internal("Database operation failed"));
        }
    };

    if rows.is_empty() {
        return Err(match kind {
            InteractionKind::Default => ApiError::not_found("No results found"),
            InteractionKind::Sequential => {
                ApiError::sequential_failure("Results should Exist but were not found")
            }
        });
    }

    Ok(ApiResponse::success(rows.swap_remove(0)))
}

/// Execute a pending query and return all of its rows.
///
/// An empty row set is valid data, not an error. An execution fault is
/// logged and returned as an internal-server error.
pub async fn fetch_all<T, E, F>(query: F) -> ApiResult<Vec<T>>
where
    F: Future<Output = Result<Vec<T>, E>>,
    E: Display,
{
    match query.await {
        Ok(rows) => Ok(ApiResponse::success(rows)),
        Err(cause) => {
            error!(cause = %cause, "database query failed");
            Err(ApiError::internal("Database operation failed"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorDetail;
    use futures::future;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Row {
        id: &'static str,
    }

    fn rows(ids: &[&'static str]) -> Result<Vec<Row>, String> {
        Ok(ids.iter().copied().map(|id| Row { id }).collect())
    }

    #[tokio::test]
    async fn test_first_row_wins_regardless_of_length_and_kind() {
        for kind in [InteractionKind::Default, InteractionKind::Sequential] {
            for ids in [vec!["a"], vec!["a", "b"], vec!["a", "b", "c"]] {
                let result = fetch_first(future::ready(rows(&ids)), kind).await;
                match result {
                    Ok(ApiResponse::Success { data, .. }) => assert_eq!(data.id, "a"),
                    other => panic!("expected Success, got {other:?}"),
                }
            }
        }
    }

    #[tokio::test]
    async fn test_fetch_all_always_succeeds_with_full_sequence() {
        for ids in [vec![], vec!["a"], vec!["a", "b"]] {
            let result = fetch_all(future::ready(rows(&ids))).await;
            match result {
                Ok(ApiResponse::Success { data, .. }) => assert_eq!(data.len(), ids.len()),
                other => panic!("expected Success, got {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn test_empty_default_is_not_found() {
        let result = fetch_first(future::ready(rows(&[])), InteractionKind::Default).await;
        let err = result.unwrap_err();
        assert_eq!(err.detail, ErrorDetail::NotFound);
        assert_eq!(err.message, "No results found");
    }

    #[tokio::test]
    async fn test_empty_sequential_is_sequential_failure() {
        let result = fetch_first(future::ready(rows(&[])), InteractionKind::Sequential).await;
        let err = result.unwrap_err();
        assert_eq!(err.detail, ErrorDetail::SequentialOperationFailure);
        assert_eq!(err.message, "Results should Exist but were not found");
    }

    #[tokio::test]
    async fn test_execution_fault_is_internal_error_for_both_operations() {
        let failing = || future::ready(Err::<Vec<Row>, String>("connection reset".to_string()));

        for kind in [InteractionKind::Default, InteractionKind::Sequential] {
            let err = fetch_first(failing(), kind).await.unwrap_err();
            assert_eq!(err.detail, ErrorDetail::InternalServerError);
            assert_eq!(err.message, "Database operation failed");
        }

        let err = fetch_all(failing()).await.unwrap_err();
        assert_eq!(err.detail, ErrorDetail::InternalServerError);
        assert_eq!(err.message, "Database operation failed");
    }

    #[tokio::test]
    async fn test_idempotent_classification_for_pure_queries() {
        let first = fetch_first(future::ready(rows(&["a"])), InteractionKind::Default).await;
        let second = fetch_first(future::ready(rows(&["a"])), InteractionKind::Default).await;
        assert_eq!(first.unwrap().into_data(), second.unwrap().into_data());

        let first = fetch_first(future::ready(rows(&[])), InteractionKind::Default).await;
        let second = fetch_first(future::ready(rows(&[])), InteractionKind::Default).await;
        assert_eq!(
            first.unwrap_err().detail,
            second.unwrap_err().detail
        );
    }

    #[tokio::test]
    async fn test_not_found_scenario_with_defaults() {
        let result = fetch_first(
            future::ready(rows(&[])),
            InteractionKind::default(),
        )
        .await;
        let err = result.unwrap_err();
        assert_eq!(err.kind().to_string(), "NotFound");
        assert_eq!(err.code(), "NotFound");
        assert_eq!(err.message, "No results found");
    }

    #[tokio::test]
    async fn test_single_row_scenario_with_defaults() {
        let result = fetch_first(
            future::ready(rows(&["a"])),
            InteractionKind::default(),
        )
        .await;
        match result {
            Ok(response) => {
                assert_eq!(response.code(), "Success");
                assert_eq!(response.into_data(), Some(Row { id: "a" }));
            }
            Err(err) => panic!("expected response, got error {err}"),
        }
    }

    #[tokio::test]
    async fn test_faulted_query_never_produces_a_response() {
        let result = fetch_first(
            future::ready(Err::<Vec<Row>, String>("boom".to_string())),
            InteractionKind::default(),
        )
        .await;
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.code(), "BadRequest.InternalServerError");
        assert_eq!(err.message, "Database operation failed");
    }
}
