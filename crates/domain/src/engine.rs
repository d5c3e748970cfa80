// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Vacation plan validation.
//!
//! The engine owns one submitted plan and evaluates every scheduling
//! rule against it, collecting all violations into a single
//! [`ErrorReport`]. Evaluation is a pure function of the plan and the
//! employee names; nothing is stored between runs.

use crate::directory::EmployeeDirectory;
use crate::error::ValidationError;
use crate::report::{ErrorReport, VACATION_REQUESTS_FIELD};
use crate::rules;
use crate::types::{RequestSlot, UserId, VacationRequest};
use std::collections::HashMap;
use tracing::{debug, info};

/// The requests of one employee, in plan order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRequests<'a> {
    /// The owning employee.
    pub user_id: UserId,
    /// The employee's requests. Never empty.
    pub requests: Vec<&'a VacationRequest>,
}

/// Validates a submitted vacation plan against the scheduling policy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VacationRequestValidationEngine {
    slots: Vec<RequestSlot>,
}

impl VacationRequestValidationEngine {
    /// Creates an engine over the given plan rows.
    #[must_use]
    pub const fn new(slots: Vec<RequestSlot>) -> Self {
        Self { slots }
    }

    /// The plan rows exactly as submitted, empty slots included.
    #[must_use]
    pub fn slots(&self) -> &[RequestSlot] {
        &self.slots
    }

    /// Gives the plan rows back to the caller.
    #[must_use]
    pub fn into_slots(self) -> Vec<RequestSlot> {
        self.slots
    }

    /// Iterates the vacation requests of the plan, skipping empty and
    /// foreign slots.
    pub fn requests(&self) -> impl Iterator<Item = &VacationRequest> {
        self.slots.iter().filter_map(RequestSlot::as_request)
    }

    /// Partitions the requests by owner.
    ///
    /// Groups are ordered by the first appearance of each employee and
    /// keep the plan order of their requests.
    #[must_use]
    pub fn group_by_user(&self) -> Vec<UserRequests<'_>> {
        let mut positions: HashMap<UserId, usize> = HashMap::new();
        let mut groups: Vec<UserRequests<'_>> = Vec::new();

        for request in self.requests() {
            if let Some(&position) = positions.get(&request.user_id) {
                groups[position].requests.push(request);
            } else {
                positions.insert(request.user_id, groups.len());
                groups.push(UserRequests {
                    user_id: request.user_id,
                    requests: vec![request],
                });
            }
        }

        groups
    }

    /// Runs every rule and returns the collected violations.
    ///
    /// Rules are reported in a fixed order: element types, overlaps,
    /// distance between vacations, longest vacation, annual total. An
    /// empty report means the plan satisfies the policy.
    ///
    /// # Arguments
    ///
    /// * `directory` - Resolves employee names for the messages
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::UnresolvableReference` if a violation
    /// must name an employee the directory cannot resolve. Policy
    /// violations are never returned as errors.
    pub fn validate<D>(&self, directory: &D) -> Result<ErrorReport, ValidationError>
    where
        D: EmployeeDirectory + ?Sized,
    {
        let requests: Vec<&VacationRequest> = self.requests().collect();
        let groups: Vec<UserRequests<'_>> = self.group_by_user();
        let mut report: ErrorReport = ErrorReport::new();

        record(
            &mut report,
            "element_types",
            rules::non_request_elements(&self.slots),
        );
        record(
            &mut report,
            "overlap",
            rules::overlapping_vacations(&requests),
        );
        record(
            &mut report,
            "distance",
            rules::vacations_too_close(&groups, directory)?,
        );
        record(
            &mut report,
            "longest_vacation",
            rules::only_short_vacations(&groups, directory)?,
        );
        record(
            &mut report,
            "annual_total",
            rules::wrong_annual_total(&groups, directory)?,
        );

        info!(
            requests = requests.len(),
            users = groups.len(),
            violations = report.len(),
            "Validated vacation requests"
        );

        Ok(report)
    }

    /// Returns whether the plan satisfies every rule.
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as [`Self::validate`].
    pub fn is_valid<D>(&self, directory: &D) -> Result<bool, ValidationError>
    where
        D: EmployeeDirectory + ?Sized,
    {
        Ok(self.validate(directory)?.is_empty())
    }
}

fn record(report: &mut ErrorReport, rule: &'static str, messages: Vec<String>) {
    debug!(rule, violations = messages.len(), "Evaluated rule");
    report.extend(VACATION_REQUESTS_FIELD, messages);
}

impl From<Vec<RequestSlot>> for VacationRequestValidationEngine {
    fn from(slots: Vec<RequestSlot>) -> Self {
        Self::new(slots)
    }
}

impl From<Vec<VacationRequest>> for VacationRequestValidationEngine {
    fn from(requests: Vec<VacationRequest>) -> Self {
        requests.into_iter().map(RequestSlot::Request).collect()
    }
}

impl FromIterator<RequestSlot> for VacationRequestValidationEngine {
    fn from_iter<I: IntoIterator<Item = RequestSlot>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
