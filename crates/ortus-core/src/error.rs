//! Unified API error types for the Ortus platform.
//!
//! Every server-side operation reports failure as an [`ApiError`]. The error
//! carries a fine-grained [`ErrorDetail`]; the coarse [`ErrorKind`] is always
//! derived from it, so a detail that does not belong to its category is
//! unrepresentable.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Coarse error categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// The requested resource does not exist.
    NotFound,
    /// The caller is not allowed to perform the action.
    Forbidden,
    /// The request could not be processed.
    BadRequest,
    /// The request conflicts with existing state.
    Conflict,
    /// The target is missing information required to proceed.
    Incomplete,
    /// Input validation failed.
    Validation,
    /// The operation failed outright.
    Failed,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "NotFound"),
            Self::Forbidden => write!(f, "Forbidden"),
            Self::BadRequest => write!(f, "BadRequest"),
            Self::Conflict => write!(f, "Conflict"),
            Self::Incomplete => write!(f, "Incomplete"),
            Self::Validation => write!(f, "ValidationError"),
            Self::Failed => write!(f, "Failed"),
        }
    }
}

/// Fine-grained error classification.
///
/// Each detail belongs to exactly one [`ErrorKind`], returned by
/// [`ErrorDetail::kind`]. Wire codes are dotted strings, returned by
/// [`ErrorDetail::code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorDetail {
    /// The requested resource does not exist.
    NotFound,

    /// Generic forbidden.
    Forbidden,
    /// The caller lacks the required authorisation.
    ForbiddenAuthorisation,
    /// The caller does not own the targeted resource.
    ForbiddenInvalidOwnership,
    /// The caller's activity does not match the targeted resource.
    ForbiddenActivityMismatch,

    /// Unclassified bad request.
    BadRequestUnknown,
    /// An internal fault occurred while processing the request.
    InternalServerError,
    /// A dependent step found nothing where a prior step guaranteed
    /// existence.
    SequentialOperationFailure,
    /// Stored data is inconsistent with its own invariants.
    Corrupted,

    /// The resource already exists.
    ConflictDuplicate,
    /// The request is invalid against current state.
    ConflictInvalid,
    /// The resource is in a state that does not admit the operation.
    ConflictInvalidState,
    /// The resource is mid-transfer between storage providers.
    ConflictDataTranscending,

    /// Scheduling information is missing.
    IncompleteScheduling,
    /// A scheduled operation has no start date.
    IncompleteMissingStartDate,
    /// The storage provider for the data cannot be identified.
    IncompleteProviderIdentification,

    /// Schema validation rejected the input.
    ValidationSchema,
    /// Validation failed for an unknown reason.
    ValidationUnknown,

    /// The operation failed.
    Failed,
    /// The operation failed for an unknown reason.
    FailedUnknown,
}

impl ErrorDetail {
    /// Return the coarse category this detail belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound => ErrorKind::NotFound,
            Self::Forbidden
            | Self::ForbiddenAuthorisation
            | Self::ForbiddenInvalidOwnership
            | Self::ForbiddenActivityMismatch => ErrorKind::Forbidden,
            Self::BadRequestUnknown
            | Self::InternalServerError
            | Self::SequentialOperationFailure
            | Self::Corrupted => ErrorKind::BadRequest,
            Self::ConflictDuplicate
            | Self::ConflictInvalid
            | Self::ConflictInvalidState
            | Self::ConflictDataTranscending => ErrorKind::Conflict,
            Self::IncompleteScheduling
            | Self::IncompleteMissingStartDate
            | Self::IncompleteProviderIdentification => ErrorKind::Incomplete,
            Self::ValidationSchema | Self::ValidationUnknown => ErrorKind::Validation,
            Self::Failed | Self::FailedUnknown => ErrorKind::Failed,
        }
    }

    /// Return the dotted wire code for this detail.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound => "NotFound",
            Self::Forbidden => "Forbidden",
            Self::ForbiddenAuthorisation => "Forbidden.Authorisation",
            Self::ForbiddenInvalidOwnership => "Forbidden.InvalidOwnership",
            Self::ForbiddenActivityMismatch => "Forbidden.ActivityMismatch",
            Self::BadRequestUnknown => "BadRequest.Unknown",
            Self::InternalServerError => "BadRequest.InternalServerError",
            Self::SequentialOperationFailure => "BadRequest.SequentialOperationFailure",
            Self::Corrupted => "BadRequest.Corrupted",
            Self::ConflictDuplicate => "Conflict.Duplicate",
            Self::ConflictInvalid => "Conflict.Invalid",
            Self::ConflictInvalidState => "Conflict.InvalidState",
            Self::ConflictDataTranscending => "Conflict.DataIsTranscending",
            Self::IncompleteScheduling => "Incomplete.Scheduling",
            Self::IncompleteMissingStartDate => "Incomplete.Scheduling.MissingStartDate",
            Self::IncompleteProviderIdentification => "Incomplete.ProviderIdentification",
            Self::ValidationSchema => "ValidationError.Schema",
            Self::ValidationUnknown => "ValidationError.Unknown",
            Self::Failed => "Failed",
            Self::FailedUnknown => "Failed.Unknown",
        }
    }
}

/// A single field-level validation violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// The offending field.
    pub field: String,
    /// Machine-readable violation code.
    pub code: String,
    /// Human-readable description, when available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// The unified API error used throughout the Ortus platform.
///
/// Carries the fine [`ErrorDetail`], a human-readable message, and — for the
/// validation category — the structured field violations that triggered it.
#[derive(Debug, Clone, Error)]
#[error("{}: {}", .detail.code(), .message)]
pub struct ApiError {
    /// Fine-grained classification. The coarse kind is derived from it.
    pub detail: ErrorDetail,
    /// Human-readable error message.
    pub message: String,
    /// Field violations, populated for validation errors.
    pub violations: Vec<FieldViolation>,
}

impl ApiError {
    /// Create a new error from a detail and message.
    pub fn new(detail: ErrorDetail, message: impl Into<String>) -> Self {
        Self {
            detail,
            message: message.into(),
            violations: Vec::new(),
        }
    }

    /// Return the coarse category of this error.
    pub fn kind(&self) -> ErrorKind {
        self.detail.kind()
    }

    /// Return the dotted wire code of this error.
    pub fn code(&self) -> &'static str {
        self.detail.code()
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorDetail::NotFound, message)
    }

    /// Create an authorisation error.
    pub fn authorisation(message: impl Into<String>) -> Self {
        Self::new(ErrorDetail::ForbiddenAuthorisation, message)
    }

    /// Create an invalid-ownership error.
    pub fn invalid_ownership(message: impl Into<String>) -> Self {
        Self::new(ErrorDetail::ForbiddenInvalidOwnership, message)
    }

    /// Create an activity-mismatch error.
    pub fn activity_mismatch(message: impl Into<String>) -> Self {
        Self::new(ErrorDetail::ForbiddenActivityMismatch, message)
    }

    /// Create an internal-server error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorDetail::InternalServerError, message)
    }

    /// Create a sequential-operation failure.
    pub fn sequential_failure(message: impl Into<String>) -> Self {
        Self::new(ErrorDetail::SequentialOperationFailure, message)
    }

    /// Create a corrupted-data error.
    pub fn corrupted(message: impl Into<String>) -> Self {
        Self::new(ErrorDetail::Corrupted, message)
    }

    /// Create a duplicate-conflict error.
    pub fn duplicate(message: impl Into<String>) -> Self {
        Self::new(ErrorDetail::ConflictDuplicate, message)
    }

    /// Create an invalid-state conflict error.
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::new(ErrorDetail::ConflictInvalidState, message)
    }

    /// Create a data-transcending conflict error.
    pub fn data_transcending(message: impl Into<String>) -> Self {
        Self::new(ErrorDetail::ConflictDataTranscending, message)
    }

    /// Create a missing-start-date error.
    pub fn missing_start_date(message: impl Into<String>) -> Self {
        Self::new(ErrorDetail::IncompleteMissingStartDate, message)
    }

    /// Create a provider-identification error.
    pub fn provider_identification(message: impl Into<String>) -> Self {
        Self::new(ErrorDetail::IncompleteProviderIdentification, message)
    }

    /// Create a schema-validation error with field violations.
    pub fn validation(message: impl Into<String>, violations: Vec<FieldViolation>) -> Self {
        Self {
            detail: ErrorDetail::ValidationSchema,
            message: message.into(),
            violations,
        }
    }

    /// Create a failed error.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::new(ErrorDetail::Failed, message)
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let violations = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| FieldViolation {
                    field: field.to_string(),
                    code: e.code.to_string(),
                    message: e.message.as_ref().map(|m| m.to_string()),
                })
            })
            .collect();
        Self::validation("Request validation failed", violations)
    }
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        Self::failed(format!("Configuration error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_kind_is_consistent_with_code_prefix() {
        let details = [
            ErrorDetail::NotFound,
            ErrorDetail::Forbidden,
            ErrorDetail::ForbiddenAuthorisation,
            ErrorDetail::ForbiddenInvalidOwnership,
            ErrorDetail::ForbiddenActivityMismatch,
            ErrorDetail::BadRequestUnknown,
            ErrorDetail::InternalServerError,
            ErrorDetail::SequentialOperationFailure,
            ErrorDetail::Corrupted,
            ErrorDetail::ConflictDuplicate,
            ErrorDetail::ConflictInvalid,
            ErrorDetail::ConflictInvalidState,
            ErrorDetail::ConflictDataTranscending,
            ErrorDetail::IncompleteScheduling,
            ErrorDetail::IncompleteMissingStartDate,
            ErrorDetail::IncompleteProviderIdentification,
            ErrorDetail::ValidationSchema,
            ErrorDetail::ValidationUnknown,
            ErrorDetail::Failed,
            ErrorDetail::FailedUnknown,
        ];

        for detail in details {
            let kind = detail.kind().to_string();
            let code = detail.code();
            assert!(
                code == kind || code.starts_with(&format!("{kind}.")),
                "code '{code}' does not belong to kind '{kind}'"
            );
        }
    }

    #[test]
    fn test_display_uses_dotted_code() {
        let err = ApiError::internal("Database operation failed");
        assert_eq!(
            err.to_string(),
            "BadRequest.InternalServerError: Database operation failed"
        );
    }

    #[test]
    fn test_validation_errors_are_flattened() {
        use validator::Validate;

        #[derive(Validate)]
        struct Probe {
            #[validate(length(min = 3))]
            slug: String,
        }

        let errors = Probe {
            slug: "x".to_string(),
        }
        .validate()
        .unwrap_err();

        let err = ApiError::from(errors);
        assert_eq!(err.detail, ErrorDetail::ValidationSchema);
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.violations.len(), 1);
        assert_eq!(err.violations[0].field, "slug");
        assert_eq!(err.violations[0].code, "length");
    }
}
