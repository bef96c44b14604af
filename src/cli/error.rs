// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for all errors seen by users of the binaries. This should be the
//! *only* error enum that is publicly visible from the CLI.

use thiserror::Error;

use crate::{generator::GenerateError, response::ResponseError, signal::ReadSignalError};

/// The *only* publicly visible CLI error. The `Display` of each variant is
/// what users see.
#[derive(Error, Debug)]
pub enum AccelError {
    /// An error related to estimating a filter response.
    #[error("{0}")]
    Response(String),

    /// An error related to generating a synthetic signal.
    #[error("{0}")]
    Generate(String),

    /// An error related to reading signal files.
    #[error("{0}\n\nSignal files are whitespace-delimited numeric text; the last column holds the samples")]
    SignalRead(String),

    /// An error related to argument files.
    #[error("{0}\n\nArgument files are TOML or JSON, with the same keys as the long options (e.g. band_high)")]
    ArgFile(String),

    /// A generic error that can't be clarified further, e.g. IO errors.
    #[error("{0}")]
    Generic(String),
}

// When changing the error propagation below, ensure `Self::from(e)` uses the
// correct `e`!

impl From<ReadSignalError> for AccelError {
    fn from(e: ReadSignalError) -> Self {
        let s = e.to_string();
        match e {
            ReadSignalError::DoesntExist(_) | ReadSignalError::Read { .. } => Self::Generic(s),
            ReadSignalError::ParseFloat { .. } | ReadSignalError::ColumnCountChanged { .. } => {
                Self::SignalRead(s)
            }
        }
    }
}

impl From<ResponseError> for AccelError {
    fn from(e: ResponseError) -> Self {
        let s = e.to_string();
        match e {
            ResponseError::InvalidSamplingRate(_)
            | ResponseError::InvalidBand { .. }
            | ResponseError::InvalidThresholdFraction(_)
            | ResponseError::Fft(_) => Self::Response(s),
            ResponseError::IO(e) => Self::from(e),
        }
    }
}

impl From<GenerateError> for AccelError {
    fn from(e: GenerateError) -> Self {
        let s = e.to_string();
        match e {
            GenerateError::InvalidParameter { .. } => Self::Generate(s),
            GenerateError::IO(e) => Self::from(e),
        }
    }
}

impl From<std::io::Error> for AccelError {
    fn from(e: std::io::Error) -> Self {
        Self::Generic(e.to_string())
    }
}

impl From<toml::ser::Error> for AccelError {
    fn from(e: toml::ser::Error) -> Self {
        Self::Generic(format!("Couldn't serialise arguments as toml: {e}"))
    }
}

impl From<log::SetLoggerError> for AccelError {
    fn from(e: log::SetLoggerError) -> Self {
        Self::Generic(format!("Failed to initialise logging: {e}"))
    }
}
