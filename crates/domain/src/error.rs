// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for vacation plan validation.
//!
//! Policy violations are never errors; they are collected into an
//! [`ErrorReport`](crate::ErrorReport). The types here cover the only
//! hard failure: a collaborator that cannot answer.

use crate::types::UserId;
use thiserror::Error;

/// Errors returned by an [`EmployeeDirectory`](crate::EmployeeDirectory).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DirectoryError {
    /// No employee is registered under the identifier.
    #[error("No employee with id {0}")]
    UnknownEmployee(UserId),

    /// The directory backend could not be queried.
    #[error("Employee directory unavailable: {0}")]
    Unavailable(String),
}

/// Errors that abort a validation run.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A request references an employee the directory cannot resolve.
    #[error("Unresolvable reference to user {user_id}: {source}")]
    UnresolvableReference {
        /// The employee that could not be resolved.
        user_id: UserId,
        /// The underlying directory failure.
        source: DirectoryError,
    },
}
