// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Vacation scheduling rules.
//!
//! Each rule is a pure function returning the messages it produces, in
//! discovery order. An empty vector means the rule passed. Rules never
//! depend on one another's outcome.
//!
//! The per-user rules receive the grouping computed once by
//! [`VacationRequestValidationEngine::group_by_user`](crate::VacationRequestValidationEngine::group_by_user)
//! and only consult the directory when they have something to report.

use crate::directory::EmployeeDirectory;
use crate::engine::UserRequests;
use crate::error::ValidationError;
use crate::policy::{
    MIN_WEEKS_BETWEEN_VACATIONS, MIN_WEEKS_DURATION_FOR_LONGEST_VACATION,
    WEEKS_OF_VACATION_PER_YEAR,
};
use crate::types::{RequestSlot, UserId, VacationRequest};
use tracing::warn;

/// Reports every slot that holds something other than a vacation request.
///
/// Empty slots are not reported. One message is produced per foreign
/// element.
#[must_use]
pub fn non_request_elements(slots: &[RequestSlot]) -> Vec<String> {
    slots
        .iter()
        .filter(|slot| matches!(slot, RequestSlot::Foreign(_)))
        .map(|_| String::from("Contains non-request elements"))
        .collect()
}

/// Reports every pair of requests sharing more than one week.
///
/// Pairs are drawn from all requests regardless of owner. Touching
/// ranges (one ends in the week the other starts) are allowed.
#[must_use]
pub fn overlapping_vacations(requests: &[&VacationRequest]) -> Vec<String> {
    pairs(requests)
        .filter(|(first, second)| first.shared_weeks(second) > 1)
        .map(|(first, second)| {
            format!(
                "Vacations with ids {} are overlapping",
                format_ids(first, second)
            )
        })
        .collect()
}

/// Reports pairs of one employee's requests that sit too close together.
///
/// Two gaps are measured: from the end of the first request to the start
/// of the second, and from the end of the second to the start of the
/// first. The pair is accepted as soon as either gap exceeds
/// [`MIN_WEEKS_BETWEEN_VACATIONS`].
///
/// # Errors
///
/// Returns `ValidationError::UnresolvableReference` if the owner of a
/// reported pair is unknown to the directory.
pub fn vacations_too_close<D>(
    groups: &[UserRequests<'_>],
    directory: &D,
) -> Result<Vec<String>, ValidationError>
where
    D: EmployeeDirectory + ?Sized,
{
    let mut messages: Vec<String> = Vec::new();

    for group in groups {
        for (first, second) in pairs(&group.requests) {
            if are_distanced(first, second) {
                continue;
            }

            messages.push(format!(
                "Vacations with ids {} of user {} are planned to close",
                format_ids(first, second),
                full_name(directory, group.user_id)?
            ));
        }
    }

    Ok(messages)
}

/// Reports employees none of whose vacations reaches
/// [`MIN_WEEKS_DURATION_FOR_LONGEST_VACATION`] weeks.
///
/// # Errors
///
/// Returns `ValidationError::UnresolvableReference` if a reported
/// employee is unknown to the directory.
pub fn only_short_vacations<D>(
    groups: &[UserRequests<'_>],
    directory: &D,
) -> Result<Vec<String>, ValidationError>
where
    D: EmployeeDirectory + ?Sized,
{
    let mut messages: Vec<String> = Vec::new();

    for group in groups {
        let longest: u32 = group
            .requests
            .iter()
            .map(|request| request.length_in_weeks())
            .max()
            .unwrap_or_default();

        if longest >= MIN_WEEKS_DURATION_FOR_LONGEST_VACATION {
            continue;
        }

        messages.push(format!(
            "User {} has many small vacations (< 14 days)",
            full_name(directory, group.user_id)?
        ));
    }

    Ok(messages)
}

/// Reports employees whose planned weeks do not add up to exactly
/// [`WEEKS_OF_VACATION_PER_YEAR`].
///
/// Planning too little and planning too much are both violations.
///
/// # Errors
///
/// Returns `ValidationError::UnresolvableReference` if a reported
/// employee is unknown to the directory.
pub fn wrong_annual_total<D>(
    groups: &[UserRequests<'_>],
    directory: &D,
) -> Result<Vec<String>, ValidationError>
where
    D: EmployeeDirectory + ?Sized,
{
    let mut messages: Vec<String> = Vec::new();

    for group in groups {
        let total: u32 = group
            .requests
            .iter()
            .fold(0_u32, |acc, request| {
                acc.saturating_add(request.length_in_weeks())
            });

        if total == WEEKS_OF_VACATION_PER_YEAR {
            continue;
        }

        messages.push(format!(
            "User {} have planned vacation other than for a 28 days in a year",
            full_name(directory, group.user_id)?
        ));
    }

    Ok(messages)
}

fn are_distanced(first: &VacationRequest, second: &VacationRequest) -> bool {
    first.ends_at_week.abs_diff(second.starts_at_week) > MIN_WEEKS_BETWEEN_VACATIONS
        || second.ends_at_week.abs_diff(first.starts_at_week) > MIN_WEEKS_BETWEEN_VACATIONS
}

/// Every unordered pair of distinct positions, in enumeration order.
fn pairs<T>(items: &[T]) -> impl Iterator<Item = (&T, &T)> {
    items
        .iter()
        .enumerate()
        .flat_map(move |(index, first)| items[index + 1..].iter().map(move |second| (first, second)))
}

fn format_ids(first: &VacationRequest, second: &VacationRequest) -> String {
    format!("[{}, {}]", first.id, second.id)
}

fn full_name<D>(directory: &D, user_id: UserId) -> Result<String, ValidationError>
where
    D: EmployeeDirectory + ?Sized,
{
    directory.resolve_full_name(user_id).map_err(|source| {
        warn!(user_id = %user_id, error = %source, "Employee lookup failed");
        ValidationError::UnresolvableReference { user_id, source }
    })
}
