// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors from reading and writing time-series text files.

use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadSignalError {
    #[error("Signal file '{0}' doesn't exist")]
    DoesntExist(Box<Path>),

    #[error("Couldn't read signal file '{file}': {err}")]
    Read { file: Box<Path>, err: std::io::Error },

    #[error("{file}:{line}: couldn't parse '{token}' as a number")]
    ParseFloat {
        file: String,
        line: usize,
        token: String,
    },

    #[error("{file}:{line}: expected {expected} columns (like the first row), but found {got}")]
    ColumnCountChanged {
        file: String,
        line: usize,
        expected: usize,
        got: usize,
    },
}
