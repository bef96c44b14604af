// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Estimate the response of a filter from an original signal file and a
//! filtered signal file.

use std::path::PathBuf;

use clap::Parser;
use log::{debug, info, trace, warn};
use serde::{Deserialize, Serialize};

use super::common::{InfoPrinter, ARG_FILE_HELP};
use crate::{
    constants::{
        DEFAULT_BAND_HIGH_HZ, DEFAULT_BAND_LOW_HZ, DEFAULT_RESPONSE_OUTPUT_FILENAME,
        DEFAULT_THRESHOLD_FRACTION,
    },
    response::{estimate_response, ResponseError, ResponseParams},
    signal::read_signal_file,
    AccelError,
};

lazy_static::lazy_static! {
    static ref BAND_LOW_HELP: String =
        format!("The lowest frequency analysed [Hz]. Negative frequencies are never analysed. Default: {DEFAULT_BAND_LOW_HZ}");

    static ref BAND_HIGH_HELP: String =
        format!("The highest frequency analysed [Hz]. Default: {DEFAULT_BAND_HIGH_HZ}");

    static ref THRESHOLD_FRACTION_HELP: String =
        format!("Frequencies where the original signal's magnitude is at or below this fraction of its in-band peak have no response. Default: {DEFAULT_THRESHOLD_FRACTION}");

    static ref OUTPUT_HELP: String =
        format!("The file to write the response to. Default: {DEFAULT_RESPONSE_OUTPUT_FILENAME}");
}

/// The options of `filter-response` that may also come from an arguments file.
#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
pub(super) struct ResponseCliArgs {
    #[clap(long, help = BAND_LOW_HELP.as_str(), allow_hyphen_values = true, help_heading = "FREQUENCY BAND")]
    pub(super) band_low: Option<f64>,

    #[clap(long, help = BAND_HIGH_HELP.as_str(), allow_hyphen_values = true, help_heading = "FREQUENCY BAND")]
    pub(super) band_high: Option<f64>,

    #[clap(long, help = THRESHOLD_FRACTION_HELP.as_str(), allow_hyphen_values = true, help_heading = "FREQUENCY BAND")]
    pub(super) threshold_fraction: Option<f64>,

    #[clap(short, long, help = OUTPUT_HELP.as_str(), parse(from_os_str), help_heading = "OUTPUT FILES")]
    pub(super) output: Option<PathBuf>,
}

impl ResponseCliArgs {
    fn merge(self, other: Self) -> Self {
        Self {
            band_low: self.band_low.or(other.band_low),
            band_high: self.band_high.or(other.band_high),
            threshold_fraction: self.threshold_fraction.or(other.threshold_fraction),
            output: self.output.or(other.output),
        }
    }
}

#[derive(Parser, Debug, Clone)]
pub(super) struct FilterResponseArgs {
    /// Path to the original (unfiltered) signal file.
    #[clap(name = "ORIGINAL_FILE", parse(from_os_str))]
    pub(super) original_file: PathBuf,

    /// Path to the filtered signal file.
    #[clap(name = "FILTERED_FILE", parse(from_os_str))]
    pub(super) filtered_file: PathBuf,

    /// The sampling rate of both signals [Hz].
    #[clap(name = "SAMPLING_RATE_HZ", allow_hyphen_values = true)]
    pub(super) sampling_rate_hz: f64,

    #[clap(long, help = ARG_FILE_HELP.as_str(), parse(from_os_str))]
    pub(super) args_file: Option<PathBuf>,

    #[clap(flatten)]
    pub(super) options: ResponseCliArgs,
}

impl FilterResponseArgs {
    /// Both command-line and file arguments overlap in terms of what is
    /// available; this function consolidates everything that was specified into
    /// a single struct. Where applicable, it will prefer CLI parameters over
    /// those in the file.
    ///
    /// This function should only ever merge arguments, and not try to make
    /// sense of them.
    pub(super) fn merge(self) -> Result<FilterResponseArgs, AccelError> {
        debug!("Merging command-line arguments with the argument file");

        let FilterResponseArgs {
            original_file,
            filtered_file,
            sampling_rate_hz,
            args_file,
            options,
        } = self;

        let options = match args_file {
            Some(arg_file) => {
                let file_options: ResponseCliArgs = unpack_arg_file!(arg_file);
                options.merge(file_options)
            }
            None => options,
        };

        Ok(FilterResponseArgs {
            original_file,
            filtered_file,
            sampling_rate_hz,
            args_file: None,
            options,
        })
    }

    /// The options that can be saved to (and read from) an arguments file.
    pub(super) fn options(&self) -> &ResponseCliArgs {
        &self.options
    }

    fn parse(self) -> Result<FilterResponseParams, AccelError> {
        // Expose all the struct fields to ensure they're all used.
        let FilterResponseArgs {
            original_file,
            filtered_file,
            sampling_rate_hz,
            args_file: _,
            options:
                ResponseCliArgs {
                    band_low,
                    band_high,
                    threshold_fraction,
                    output,
                },
        } = self;

        if !sampling_rate_hz.is_finite() || sampling_rate_hz <= 0.0 {
            return Err(ResponseError::InvalidSamplingRate(sampling_rate_hz).into());
        }
        let response_params = ResponseParams {
            band_low_hz: band_low.unwrap_or(DEFAULT_BAND_LOW_HZ),
            band_high_hz: band_high.unwrap_or(DEFAULT_BAND_HIGH_HZ),
            threshold_fraction: threshold_fraction.unwrap_or(DEFAULT_THRESHOLD_FRACTION),
        };
        response_params.validate()?;
        let output = output.unwrap_or_else(|| PathBuf::from(DEFAULT_RESPONSE_OUTPUT_FILENAME));

        let mut printer = InfoPrinter::new("Estimating a filter response".into());
        printer.push_block(vec![
            format!("Original: {}", original_file.display()).into(),
            format!("Filtered: {}", filtered_file.display()).into(),
        ]);
        printer.push_line(format!("Sampling rate: {sampling_rate_hz} Hz").into());
        printer.push_block(vec![
            format!(
                "Band: {} Hz to {} Hz",
                response_params.band_low_hz, response_params.band_high_hz
            )
            .into(),
            format!(
                "Threshold: {} of the in-band peak",
                response_params.threshold_fraction
            )
            .into(),
        ]);
        printer.push_line(format!("Output: {}", output.display()).into());
        printer.display();

        Ok(FilterResponseParams {
            original_file,
            filtered_file,
            sampling_rate_hz,
            response_params,
            output,
        })
    }

    pub(super) fn run(self, dry_run: bool) -> Result<(), AccelError> {
        debug!("Converting arguments into parameters");
        trace!("{:#?}", self);
        let params = self.parse()?;

        if dry_run {
            info!("Dry run -- exiting now.");
            return Ok(());
        }

        params.run()
    }
}

struct FilterResponseParams {
    original_file: PathBuf,
    filtered_file: PathBuf,
    sampling_rate_hz: f64,
    response_params: ResponseParams,
    output: PathBuf,
}

impl FilterResponseParams {
    fn run(self) -> Result<(), AccelError> {
        let original = read_signal_file(&self.original_file)?;
        let filtered = read_signal_file(&self.filtered_file)?;
        if original.is_empty() || filtered.is_empty() {
            warn!("At least one of the signals has no samples; the response will be empty");
        }

        let response = estimate_response(
            original.view(),
            filtered.view(),
            self.sampling_rate_hz,
            &self.response_params,
        )?;
        response.write(&self.output)?;

        let mut printer = InfoPrinter::new("Filter response".into());
        printer.push_line(format!("Used {} samples of each signal", response.num_samples).into());
        printer.push_line(
            format!(
                "{} of {} in-band frequencies have a response",
                response.rows().count(),
                response.bins.len()
            )
            .into(),
        );
        if let Some(dominant) = response.dominant().filter(|d| d.ratio > 0.0) {
            printer.push_line(
                format!(
                    "Strongest original frequency: {:.4} Hz (response {:.6})",
                    dominant.freq_hz, dominant.ratio
                )
                .into(),
            );
        }
        printer.display();

        info!("Wrote {}", self.output.display());
        Ok(())
    }
}
