// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;
use vacation_plan_domain::ValidationError;

/// Failures that stop the checker before a report can be produced.
#[derive(Debug, Error)]
pub enum CliError {
    /// The plan file could not be read.
    #[error("Failed to read plan from {path}: {source}")]
    Read {
        /// Where the plan was read from.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The plan is not a valid plan document.
    #[error("Invalid plan document: {0}")]
    Parse(#[source] serde_json::Error),

    /// The report could not be rendered.
    #[error("Failed to render report: {0}")]
    Render(#[source] serde_json::Error),

    /// Validation aborted.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
