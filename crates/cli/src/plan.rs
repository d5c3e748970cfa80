// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plan documents.
//!
//! A plan document bundles the employees referenced by a plan with the
//! plan rows themselves:
//!
//! ```json
//! {
//!   "employees": [{ "id": 1, "full_name": "Jane Doe" }],
//!   "vacation_requests": [
//!     { "id": 1, "user_id": 1, "starts_at_week": 1, "ends_at_week": 2 },
//!     null
//!   ]
//! }
//! ```

use crate::error::CliError;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::debug;
use vacation_plan_domain::{
    Employee, InMemoryDirectory, RequestSlot, VacationRequestValidationEngine,
};

/// Path that selects standard input.
pub const STDIN_PATH: &str = "-";

/// A vacation plan together with its employee directory.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Plan {
    /// Employees referenced by the plan.
    #[serde(default)]
    pub employees: Vec<Employee>,
    /// Plan rows in submission order.
    #[serde(default)]
    pub vacation_requests: Vec<RequestSlot>,
}

impl Plan {
    /// Parses a plan document from a reader.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Parse` if the input is not a plan document.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CliError> {
        serde_json::from_reader(reader).map_err(CliError::Parse)
    }

    /// Loads a plan document from `path`, or from standard input when
    /// `path` is [`STDIN_PATH`].
    ///
    /// # Errors
    ///
    /// Returns `CliError::Read` if the file cannot be opened and
    /// `CliError::Parse` if its content is not a plan document.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let plan: Self = if path.as_os_str() == STDIN_PATH {
            Self::from_reader(std::io::stdin().lock())?
        } else {
            let file: std::fs::File =
                std::fs::File::open(path).map_err(|source| CliError::Read {
                    path: path.display().to_string(),
                    source,
                })?;
            Self::from_reader(std::io::BufReader::new(file))?
        };

        debug!(
            employees = plan.employees.len(),
            rows = plan.vacation_requests.len(),
            "Loaded plan"
        );

        Ok(plan)
    }

    /// Splits the plan into a validation engine and a directory.
    #[must_use]
    pub fn into_parts(self) -> (VacationRequestValidationEngine, InMemoryDirectory) {
        (
            VacationRequestValidationEngine::new(self.vacation_requests),
            self.employees.into_iter().collect(),
        )
    }
}
