// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors from generating synthetic signals.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("The {name} must be {requirement}, but got {value}")]
    InvalidParameter {
        name: &'static str,
        requirement: &'static str,
        value: f64,
    },

    #[error(transparent)]
    IO(#[from] std::io::Error),
}
