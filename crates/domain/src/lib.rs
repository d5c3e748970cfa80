// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Vacation plan validation.
//!
//! A plan is an ordered list of rows, each a [`VacationRequest`], an
//! unfilled slot, or something foreign. The
//! [`VacationRequestValidationEngine`] checks the plan against the
//! scheduling policy and reports every violation at once:
//!
//! - every filled row must be a vacation request
//! - no two vacations may share more than one week
//! - an employee's vacations must be spread apart
//! - every employee needs at least one vacation of two weeks or more
//! - every employee plans exactly four weeks per year

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod directory;
mod engine;
mod error;
mod policy;
mod report;
mod rules;
mod types;

#[cfg(test)]
mod tests;

pub use directory::{Employee, EmployeeDirectory, InMemoryDirectory};
pub use engine::{UserRequests, VacationRequestValidationEngine};
pub use error::{DirectoryError, ValidationError};
pub use policy::{
    MIN_WEEKS_BETWEEN_VACATIONS, MIN_WEEKS_DURATION_FOR_LONGEST_VACATION, WEEKS_IN_YEAR,
    WEEKS_OF_VACATION_PER_YEAR,
};
pub use report::{ErrorReport, VACATION_REQUESTS_FIELD};
pub use rules::{
    non_request_elements, only_short_vacations, overlapping_vacations, vacations_too_close,
    wrong_annual_total,
};
pub use types::{RequestId, RequestSlot, UserId, VacationRequest};
