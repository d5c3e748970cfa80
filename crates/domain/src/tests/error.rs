// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DirectoryError, UserId, ValidationError};
use std::error::Error;

#[test]
fn test_directory_error_display() {
    let err: DirectoryError = DirectoryError::UnknownEmployee(UserId::new(12));
    assert_eq!(format!("{err}"), "No employee with id 12");

    let err: DirectoryError = DirectoryError::Unavailable(String::from("connection reset"));
    assert_eq!(
        format!("{err}"),
        "Employee directory unavailable: connection reset"
    );
}

#[test]
fn test_validation_error_display() {
    let err: ValidationError = ValidationError::UnresolvableReference {
        user_id: UserId::new(12),
        source: DirectoryError::UnknownEmployee(UserId::new(12)),
    };

    assert_eq!(
        format!("{err}"),
        "Unresolvable reference to user 12: No employee with id 12"
    );
}

#[test]
fn test_validation_error_exposes_directory_source() {
    let err: ValidationError = ValidationError::UnresolvableReference {
        user_id: UserId::new(3),
        source: DirectoryError::Unavailable(String::from("timeout")),
    };

    let source: &dyn Error = err.source().unwrap();
    assert_eq!(source.to_string(), "Employee directory unavailable: timeout");
}
