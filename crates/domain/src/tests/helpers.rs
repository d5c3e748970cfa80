// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared fixtures for domain tests.

use crate::{Employee, InMemoryDirectory, RequestId, RequestSlot, UserId, VacationRequest};

pub const JANE: u64 = 1;
pub const JOHN: u64 = 2;

/// Builds a request from raw identifiers.
pub fn create_test_request(id: u64, user: u64, starts_at_week: u32, ends_at_week: u32) -> VacationRequest {
    VacationRequest::new(RequestId::new(id), UserId::new(user), starts_at_week, ends_at_week)
}

/// Builds a plan row holding a request.
pub fn slot(id: u64, user: u64, starts_at_week: u32, ends_at_week: u32) -> RequestSlot {
    RequestSlot::Request(create_test_request(id, user, starts_at_week, ends_at_week))
}

/// Directory knowing Jane Doe and John Roe.
pub fn create_test_directory() -> InMemoryDirectory {
    vec![
        Employee::new(UserId::new(JANE), "Jane Doe"),
        Employee::new(UserId::new(JOHN), "John Roe"),
    ]
    .into_iter()
    .collect()
}
