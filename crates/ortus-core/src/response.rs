//! Non-failure outcome vocabulary for server-side operations.
//!
//! [`ApiResponse`] describes every outcome that is not a hard failure.
//! Data presence is fixed per variant by construction: [`ApiResponse::NoData`]
//! cannot carry data, [`ApiResponse::FailForward`] must.

use serde::{Deserialize, Serialize};

/// Why a partial response withholds or annotates its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartialReason {
    /// Data withheld because the target has not been published yet.
    Private,
    /// The operation completed but follow-up work is still pending.
    PostCompletion,
    /// The target has been archived.
    Archived,
}

impl PartialReason {
    /// Return the dotted wire code for this reason.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Private => "PartialSuccess.Private",
            Self::PostCompletion => "PartialSuccess.PostCompletion",
            Self::Archived => "PartialSuccess.Archived",
        }
    }
}

/// How a caller should treat a fail-forward message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailForwardDirective {
    /// Replace any existing message with this one.
    OverwriteMessage,
    /// Append this message to any existing one.
    AppendMessage,
    /// Force the given response status at the boundary.
    ForceStatus(u16),
}

impl FailForwardDirective {
    /// Return the dotted wire code for this directive.
    pub fn code(&self) -> &'static str {
        match self {
            Self::OverwriteMessage => "FailForward.OverwriteMessage",
            Self::AppendMessage => "FailForward.AppendMessage",
            Self::ForceStatus(_) => "FailForward.ForceStatus",
        }
    }
}

/// Outcome of a server-side operation that did not hard-fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResponse<T> {
    /// The operation succeeded and produced data.
    Success {
        /// The produced data.
        data: T,
        /// Optional annotation.
        message: Option<String>,
    },
    /// The operation succeeded without producing data.
    NoData {
        /// Optional annotation.
        message: Option<String>,
    },
    /// The operation succeeded but the data is partial or redacted.
    Partial {
        /// The partial or redacted data.
        data: T,
        /// Why the data is partial.
        reason: PartialReason,
        /// Optional annotation.
        message: Option<String>,
    },
    /// A soft failure that still carries usable data.
    FailForward {
        /// The carried data.
        data: T,
        /// How the caller should merge the message or shape the status.
        directive: FailForwardDirective,
        /// The fail-forward message.
        message: String,
    },
    /// The operation had no meaningful effect.
    Inconsequential {
        /// Data, when echoing it is useful to the caller.
        data: Option<T>,
        /// Optional annotation.
        message: Option<String>,
    },
}

impl<T> ApiResponse<T> {
    /// Create a success response.
    pub fn success(data: T) -> Self {
        Self::Success {
            data,
            message: None,
        }
    }

    /// Create a success response with an annotation.
    pub fn success_with(data: T, message: impl Into<String>) -> Self {
        Self::Success {
            data,
            message: Some(message.into()),
        }
    }

    /// Create a dataless success response.
    pub fn no_data() -> Self {
        Self::NoData { message: None }
    }

    /// Create a dataless success response with an annotation.
    pub fn no_data_with(message: impl Into<String>) -> Self {
        Self::NoData {
            message: Some(message.into()),
        }
    }

    /// Create a partial response.
    pub fn partial(data: T, reason: PartialReason, message: impl Into<String>) -> Self {
        Self::Partial {
            data,
            reason,
            message: Some(message.into()),
        }
    }

    /// Create a fail-forward response.
    pub fn fail_forward(
        data: T,
        directive: FailForwardDirective,
        message: impl Into<String>,
    ) -> Self {
        Self::FailForward {
            data,
            directive,
            message: message.into(),
        }
    }

    /// Create an inconsequential response.
    pub fn inconsequential(message: impl Into<String>) -> Self {
        Self::Inconsequential {
            data: None,
            message: Some(message.into()),
        }
    }

    /// Create an inconsequential response echoing data.
    pub fn inconsequential_with(data: T, message: impl Into<String>) -> Self {
        Self::Inconsequential {
            data: Some(data),
            message: Some(message.into()),
        }
    }

    /// Return the dotted wire code of this variant.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Success { .. } => "Success",
            Self::NoData { .. } => "Success.NoData",
            Self::Partial { reason, .. } => reason.code(),
            Self::FailForward { directive, .. } => directive.code(),
            Self::Inconsequential { .. } => "Inconsequential",
        }
    }

    /// Return a reference to the carried data, if any.
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success { data, .. }
            | Self::Partial { data, .. }
            | Self::FailForward { data, .. } => Some(data),
            Self::Inconsequential { data, .. } => data.as_ref(),
            Self::NoData { .. } => None,
        }
    }

    /// Consume the response and return the carried data, if any.
    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Success { data, .. }
            | Self::Partial { data, .. }
            | Self::FailForward { data, .. } => Some(data),
            Self::Inconsequential { data, .. } => data,
            Self::NoData { .. } => None,
        }
    }

    /// Consume the response, returning its data or a corrupted-data error.
    ///
    /// For call sites whose contract guarantees a data-carrying variant;
    /// a dataless response there means the producer broke its contract.
    pub fn require_data(self, context: &str) -> Result<T, crate::error::ApiError> {
        self.into_data().ok_or_else(|| {
            crate::error::ApiError::corrupted(format!("Expected data from {context}"))
        })
    }

    /// Transform the carried data while preserving the variant.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        match self {
            Self::Success { data, message } => ApiResponse::Success {
                data: f(data),
                message,
            },
            Self::NoData { message } => ApiResponse::NoData { message },
            Self::Partial {
                data,
                reason,
                message,
            } => ApiResponse::Partial {
                data: f(data),
                reason,
                message,
            },
            Self::FailForward {
                data,
                directive,
                message,
            } => ApiResponse::FailForward {
                data: f(data),
                directive,
                message,
            },
            Self::Inconsequential { data, message } => ApiResponse::Inconsequential {
                data: data.map(f),
                message,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_presence_matches_variant() {
        assert!(ApiResponse::success(1).data().is_some());
        assert!(ApiResponse::<i32>::no_data().data().is_none());
        assert!(
            ApiResponse::partial(1, PartialReason::Private, "withheld")
                .data()
                .is_some()
        );
        assert!(
            ApiResponse::fail_forward(1, FailForwardDirective::AppendMessage, "degraded")
                .data()
                .is_some()
        );
        assert!(ApiResponse::<i32>::inconsequential("no-op").data().is_none());
    }

    #[test]
    fn test_variant_codes() {
        assert_eq!(ApiResponse::success(()).code(), "Success");
        assert_eq!(ApiResponse::<()>::no_data().code(), "Success.NoData");
        assert_eq!(
            ApiResponse::partial((), PartialReason::Archived, "archived").code(),
            "PartialSuccess.Archived"
        );
        assert_eq!(
            ApiResponse::fail_forward((), FailForwardDirective::ForceStatus(503), "forced").code(),
            "FailForward.ForceStatus"
        );
        assert_eq!(
            ApiResponse::<()>::inconsequential("no-op").code(),
            "Inconsequential"
        );
    }

    #[test]
    fn test_map_preserves_variant() {
        let partial = ApiResponse::partial(2, PartialReason::Private, "withheld").map(|n| n * 10);
        match partial {
            ApiResponse::Partial { data, reason, .. } => {
                assert_eq!(data, 20);
                assert_eq!(reason, PartialReason::Private);
            }
            other => panic!("unexpected variant: {}", other.code()),
        }
    }
}
