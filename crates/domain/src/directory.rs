// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Employee name lookup.
//!
//! Validation only needs employees to phrase messages. The lookup is
//! synchronous from the engine's point of view; how it is backed is up
//! to the caller.

use crate::error::DirectoryError;
use crate::types::UserId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Read-only source of employee display names.
pub trait EmployeeDirectory {
    /// Resolves the full display name of an employee.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::UnknownEmployee` if no employee is
    /// registered under `user_id`, or `DirectoryError::Unavailable` if
    /// the backend cannot be queried.
    fn resolve_full_name(&self, user_id: UserId) -> Result<String, DirectoryError>;
}

impl<D: EmployeeDirectory + ?Sized> EmployeeDirectory for &D {
    fn resolve_full_name(&self, user_id: UserId) -> Result<String, DirectoryError> {
        (**self).resolve_full_name(user_id)
    }
}

/// An employee as known to the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// The employee identifier referenced by vacation requests.
    pub id: UserId,
    /// The name shown in violation messages.
    pub full_name: String,
}

impl Employee {
    /// Creates a new `Employee`.
    #[must_use]
    pub fn new(id: UserId, full_name: impl Into<String>) -> Self {
        Self {
            id,
            full_name: full_name.into(),
        }
    }
}

/// Directory held entirely in memory.
///
/// Registering an identifier twice keeps the most recent entry.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    employees: HashMap<UserId, Employee>,
}

impl InMemoryDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an employee, replacing any previous entry with the same id.
    pub fn insert(&mut self, employee: Employee) {
        self.employees.insert(employee.id, employee);
    }

    /// Returns the employee registered under `user_id`.
    #[must_use]
    pub fn get(&self, user_id: UserId) -> Option<&Employee> {
        self.employees.get(&user_id)
    }

    /// Number of registered employees.
    #[must_use]
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns whether no employee is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

impl FromIterator<Employee> for InMemoryDirectory {
    fn from_iter<I: IntoIterator<Item = Employee>>(iter: I) -> Self {
        let mut directory: Self = Self::new();
        for employee in iter {
            directory.insert(employee);
        }
        directory
    }
}

impl EmployeeDirectory for InMemoryDirectory {
    fn resolve_full_name(&self, user_id: UserId) -> Result<String, DirectoryError> {
        self.get(user_id)
            .map(|employee| employee.full_name.clone())
            .ok_or(DirectoryError::UnknownEmployee(user_id))
    }
}
