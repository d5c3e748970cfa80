// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Scheduling policy constants.
//!
//! These are fixed organisational rules, not runtime configuration.

/// Two vacations of the same employee must be further apart than this
/// many weeks in at least one direction.
pub const MIN_WEEKS_BETWEEN_VACATIONS: u32 = 8;

/// At least one of an employee's vacations must last this many weeks.
pub const MIN_WEEKS_DURATION_FOR_LONGEST_VACATION: u32 = 2;

/// Exact number of vacation weeks every employee must plan per year.
pub const WEEKS_OF_VACATION_PER_YEAR: u32 = 4;

/// Number of plannable weeks in a year.
pub const WEEKS_IN_YEAR: u32 = 51;
