// ABOUTME: Error types for the interval engine's request validation surface
// ABOUTME: Reduced from the platform-wide error module; the engine never escalates further
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SwimLab

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes produced by the engine
///
/// The engine degrades malformed *time input* to the "unknown" sentinel rather
/// than erroring, so the only codes left are for requests that are structurally
/// unusable (`InvalidInput`) and for arithmetic that should be unreachable
/// (`InternalError`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Request parameters are outside the usable range
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    /// Engine-internal invariant violation
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

/// Engine error type
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
pub enum AppError {
    /// The request cannot be processed as supplied
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Human-readable description of the rejected parameter
        message: String,
    },

    /// An internal computation invariant was violated
    #[error("Internal error: {message}")]
    Internal {
        /// Human-readable description of the failure
        message: String,
    },
}

impl AppError {
    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the error code for this error
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidInput { .. } => ErrorCode::InvalidInput,
            Self::Internal { .. } => ErrorCode::InternalError,
        }
    }
}

/// Convenience result alias used throughout the engine
pub type AppResult<T> = Result<T, AppError>;
