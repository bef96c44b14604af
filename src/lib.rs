// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Synthetic accelerometer event generation and empirical filter-response
estimation.
 */

mod cli;
pub mod constants;
pub mod generator;
pub mod response;
pub mod signal;
pub mod spectrum;

// Re-exports.
pub use cli::{AccelError, FilterResponseCli, GenerateEventCli};
pub use generator::{generate, transient, EventParams, GenerateError};
pub use response::{estimate_response, FilterResponse, ResponseBin, ResponseError, ResponseParams};
pub use signal::{read_signal_file, write_signal_file, ReadSignalError};
