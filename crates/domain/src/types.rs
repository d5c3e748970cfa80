// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// Opaque identifier of a vacation request.
///
/// Only used to name requests in violation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(u64);

impl RequestId {
    /// Creates a new `RequestId`.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque identifier of the employee owning a vacation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Creates a new `UserId`.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One employee's proposed absence.
///
/// The absence covers the closed week range
/// `starts_at_week..=ends_at_week`. Callers are expected to hand over
/// well-formed ranges (`ends_at_week >= starts_at_week`); nothing here
/// checks that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationRequest {
    /// The request identifier.
    pub id: RequestId,
    /// The employee this request belongs to.
    pub user_id: UserId,
    /// First week of the vacation (1-based, inclusive).
    pub starts_at_week: u32,
    /// Last week of the vacation (inclusive).
    pub ends_at_week: u32,
}

impl VacationRequest {
    /// Creates a new `VacationRequest`.
    ///
    /// # Arguments
    ///
    /// * `id` - The request identifier
    /// * `user_id` - The owning employee
    /// * `starts_at_week` - First week of the vacation
    /// * `ends_at_week` - Last week of the vacation
    #[must_use]
    pub const fn new(id: RequestId, user_id: UserId, starts_at_week: u32, ends_at_week: u32) -> Self {
        Self {
            id,
            user_id,
            starts_at_week,
            ends_at_week,
        }
    }

    /// Number of weeks covered, counting both boundary weeks.
    ///
    /// A reversed range counts as a single week.
    #[must_use]
    pub const fn length_in_weeks(&self) -> u32 {
        self.ends_at_week
            .saturating_sub(self.starts_at_week)
            .saturating_add(1)
    }

    /// Number of week numbers covered by both `self` and `other`.
    #[must_use]
    pub fn shared_weeks(&self, other: &Self) -> u32 {
        let first: u32 = self.starts_at_week.max(other.starts_at_week);
        let last: u32 = self.ends_at_week.min(other.ends_at_week);

        if last < first { 0 } else { last - first + 1 }
    }
}

/// One row of a vacation plan as submitted by the form layer.
///
/// Plans are fixed-size forms, so rows may be left unfilled, and the
/// submitted payload is not guaranteed to contain requests only. Both
/// situations are represented explicitly instead of being rejected
/// while decoding.
///
/// On the wire an empty slot is `null`, a request is an object with
/// the [`VacationRequest`] fields, and anything else is kept verbatim
/// as a foreign element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestSlot {
    /// An unfilled row.
    Empty,
    /// A well-formed vacation request.
    Request(VacationRequest),
    /// An element that is not a vacation request.
    Foreign(serde_json::Value),
}

impl RequestSlot {
    /// Returns the request held by this slot, if any.
    #[must_use]
    pub const fn as_request(&self) -> Option<&VacationRequest> {
        match self {
            Self::Request(request) => Some(request),
            Self::Empty | Self::Foreign(_) => None,
        }
    }

    /// Returns whether this slot is an unfilled row.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl From<VacationRequest> for RequestSlot {
    fn from(request: VacationRequest) -> Self {
        Self::Request(request)
    }
}

impl From<Option<VacationRequest>> for RequestSlot {
    fn from(request: Option<VacationRequest>) -> Self {
        request.map_or(Self::Empty, Self::Request)
    }
}
