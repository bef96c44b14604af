// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Generate a synthetic accelerometer signal and write it to a file.

use std::path::PathBuf;

use clap::Parser;
use log::{debug, info, trace};
use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::common::{InfoPrinter, ARG_FILE_HELP};
use crate::{
    constants::*,
    generator::{generate, EventParams},
    signal::write_signal_file,
    AccelError,
};

lazy_static::lazy_static! {
    static ref SAMPLING_RATE_HELP: String =
        format!("The sampling rate [Hz]. Default: {DEFAULT_SAMPLING_RATE_HZ}");

    static ref DURATION_HELP: String =
        format!("The length of the signal [seconds]. Default: {DEFAULT_DURATION_S}");

    static ref NOISE_STD_HELP: String =
        format!("The standard deviation of the Gaussian noise. Default: {DEFAULT_NOISE_STD}");

    static ref EVENT_TIME_HELP: String =
        format!("When the event starts [seconds]. Default: {DEFAULT_EVENT_TIME_S}");

    static ref EVENT_NUM_SAMPLES_HELP: String =
        format!("How many samples the event lasts. Default: {DEFAULT_EVENT_NUM_SAMPLES}");

    static ref EVENT_AMPLITUDE_HELP: String =
        format!("The peak amplitude of the event. Default: {DEFAULT_EVENT_AMPLITUDE}");

    static ref ENVELOPE_WIDTH_HELP: String =
        format!("The width of the event's Gaussian envelope exp(-dt^2 / width) [seconds^2]. Default: {DEFAULT_ENVELOPE_WIDTH_S2}");

    static ref CARRIER_FREQ_HELP: String =
        format!("The frequency of the event's sinusoid [Hz]. Default: {DEFAULT_CARRIER_FREQ_HZ}");

    static ref OUTPUT_HELP: String =
        format!("The file to write the signal to. Default: {DEFAULT_EVENT_OUTPUT_FILENAME}");
}

#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
pub(super) struct GenerateArgs {
    #[clap(name = "ARGUMENTS_FILE", help = ARG_FILE_HELP.as_str(), parse(from_os_str))]
    pub(super) args_file: Option<PathBuf>,

    #[clap(long, help = SAMPLING_RATE_HELP.as_str(), help_heading = "SIGNAL")]
    pub(super) sampling_rate: Option<f64>,

    #[clap(long, help = DURATION_HELP.as_str(), help_heading = "SIGNAL")]
    pub(super) duration: Option<f64>,

    #[clap(long, help = NOISE_STD_HELP.as_str(), help_heading = "SIGNAL")]
    pub(super) noise_std: Option<f64>,

    /// Seed the noise generator with this, making the signal reproducible. If
    /// this isn't specified, the signal is different every time.
    #[clap(long, help_heading = "SIGNAL")]
    pub(super) seed: Option<u64>,

    #[clap(long, help = EVENT_TIME_HELP.as_str(), help_heading = "EVENT")]
    pub(super) event_time: Option<f64>,

    #[clap(long, help = EVENT_NUM_SAMPLES_HELP.as_str(), help_heading = "EVENT")]
    pub(super) event_num_samples: Option<usize>,

    #[clap(long, help = EVENT_AMPLITUDE_HELP.as_str(), allow_hyphen_values = true, help_heading = "EVENT")]
    pub(super) event_amplitude: Option<f64>,

    #[clap(long, help = ENVELOPE_WIDTH_HELP.as_str(), help_heading = "EVENT")]
    pub(super) envelope_width: Option<f64>,

    #[clap(long, help = CARRIER_FREQ_HELP.as_str(), allow_hyphen_values = true, help_heading = "EVENT")]
    pub(super) carrier_freq: Option<f64>,

    #[clap(short, long, help = OUTPUT_HELP.as_str(), parse(from_os_str), help_heading = "OUTPUT FILES")]
    pub(super) output: Option<PathBuf>,
}

impl GenerateArgs {
    /// Consolidate the command-line arguments with those in the arguments file
    /// (if any), preferring the command-line arguments.
    pub(super) fn merge(self) -> Result<GenerateArgs, AccelError> {
        debug!("Merging command-line arguments with the argument file");

        let cli_args = self;

        if let Some(arg_file) = cli_args.args_file {
            // Ensure all of the file args are accounted for by pattern
            // matching.
            let GenerateArgs {
                args_file: _,
                sampling_rate,
                duration,
                noise_std,
                seed,
                event_time,
                event_num_samples,
                event_amplitude,
                envelope_width,
                carrier_freq,
                output,
            } = unpack_arg_file!(arg_file);

            Ok(GenerateArgs {
                args_file: None,
                sampling_rate: cli_args.sampling_rate.or(sampling_rate),
                duration: cli_args.duration.or(duration),
                noise_std: cli_args.noise_std.or(noise_std),
                seed: cli_args.seed.or(seed),
                event_time: cli_args.event_time.or(event_time),
                event_num_samples: cli_args.event_num_samples.or(event_num_samples),
                event_amplitude: cli_args.event_amplitude.or(event_amplitude),
                envelope_width: cli_args.envelope_width.or(envelope_width),
                carrier_freq: cli_args.carrier_freq.or(carrier_freq),
                output: cli_args.output.or(output),
            })
        } else {
            Ok(cli_args)
        }
    }

    fn parse(self) -> Result<GenerateParams, AccelError> {
        let GenerateArgs {
            args_file: _,
            sampling_rate,
            duration,
            noise_std,
            seed,
            event_time,
            event_num_samples,
            event_amplitude,
            envelope_width,
            carrier_freq,
            output,
        } = self;

        let event_params = EventParams {
            sampling_rate_hz: sampling_rate.unwrap_or(DEFAULT_SAMPLING_RATE_HZ),
            duration_s: duration.unwrap_or(DEFAULT_DURATION_S),
            noise_std: noise_std.unwrap_or(DEFAULT_NOISE_STD),
            event_time_s: event_time.unwrap_or(DEFAULT_EVENT_TIME_S),
            event_num_samples: event_num_samples.unwrap_or(DEFAULT_EVENT_NUM_SAMPLES),
            event_amplitude: event_amplitude.unwrap_or(DEFAULT_EVENT_AMPLITUDE),
            envelope_width_s2: envelope_width.unwrap_or(DEFAULT_ENVELOPE_WIDTH_S2),
            carrier_freq_hz: carrier_freq.unwrap_or(DEFAULT_CARRIER_FREQ_HZ),
        };
        event_params.validate()?;
        let output = output.unwrap_or_else(|| PathBuf::from(DEFAULT_EVENT_OUTPUT_FILENAME));

        let mut printer = InfoPrinter::new("Generating a synthetic signal".into());
        printer.push_block(vec![
            format!(
                "{} samples at {} Hz ({} s)",
                event_params.num_samples(),
                event_params.sampling_rate_hz,
                event_params.duration_s
            )
            .into(),
            format!("Noise standard deviation: {}", event_params.noise_std).into(),
            match seed {
                Some(seed) => format!("Seed: {seed}").into(),
                None => "Seed: <random>".into(),
            },
        ]);
        printer.push_block(vec![
            format!(
                "Event at {} s (sample {}) for {} samples",
                event_params.event_time_s,
                event_params.event_index(),
                event_params.event_num_samples
            )
            .into(),
            format!(
                "Amplitude {}, {} Hz carrier, envelope width {} s^2",
                event_params.event_amplitude,
                event_params.carrier_freq_hz,
                event_params.envelope_width_s2
            )
            .into(),
        ]);
        printer.push_line(format!("Output: {}", output.display()).into());
        printer.display();

        Ok(GenerateParams {
            event_params,
            seed,
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

struct GenerateParams {
    event_params: EventParams,
    seed: Option<u64>,
    output: PathBuf,
}

impl GenerateParams {
    fn run(self) -> Result<(), AccelError> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let signal = generate(&self.event_params, &mut rng)?;
        write_signal_file(&self.output, signal.view())?;

        info!("Generated {}", self.output.display());
        Ok(())
    }
}
