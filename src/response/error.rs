// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors from estimating filter responses.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResponseError {
    #[error("The sampling rate must be a positive number of Hz, but got {0}")]
    InvalidSamplingRate(f64),

    #[error("The frequency band {low} Hz to {high} Hz is invalid; both edges must be finite and the low edge can't be above the high edge")]
    InvalidBand { low: f64, high: f64 },

    #[error("The threshold fraction must be a non-negative number, but got {0}")]
    InvalidThresholdFraction(f64),

    #[error("FFT error: {0}")]
    Fft(#[from] realfft::FftError),

    #[error(transparent)]
    IO(#[from] std::io::Error),
}
