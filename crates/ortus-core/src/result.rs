//! Convenience result type alias for the Ortus platform.

use crate::error::ApiError;
use crate::response::ApiResponse;

/// The outcome of any server-side operation: exactly one of a typed
/// response or a typed error, never both, never neither.
pub type ApiResult<T> = Result<ApiResponse<T>, ApiError>;
