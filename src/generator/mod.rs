// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Synthetic accelerometer signals.
//!
//! A generated signal is zero-mean Gaussian noise with a weak transient event
//! on top: a sinusoid under a Gaussian envelope that peaks at the start of the
//! event and decays over the following event window.

mod error;

pub use error::GenerateError;

use log::trace;
use ndarray::Array1;
use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::constants::*;

/// Everything that describes a synthetic signal, bar its noise realisation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventParams {
    pub sampling_rate_hz: f64,
    pub duration_s: f64,
    pub noise_std: f64,

    /// When the event starts [seconds].
    pub event_time_s: f64,
    pub event_num_samples: usize,
    pub event_amplitude: f64,

    /// The envelope is exp(-dt^2 / envelope_width_s2), with dt the time since
    /// the start of the event [seconds^2].
    pub envelope_width_s2: f64,
    pub carrier_freq_hz: f64,
}

impl Default for EventParams {
    fn default() -> Self {
        Self {
            sampling_rate_hz: DEFAULT_SAMPLING_RATE_HZ,
            duration_s: DEFAULT_DURATION_S,
            noise_std: DEFAULT_NOISE_STD,
            event_time_s: DEFAULT_EVENT_TIME_S,
            event_num_samples: DEFAULT_EVENT_NUM_SAMPLES,
            event_amplitude: DEFAULT_EVENT_AMPLITUDE,
            envelope_width_s2: DEFAULT_ENVELOPE_WIDTH_S2,
            carrier_freq_hz: DEFAULT_CARRIER_FREQ_HZ,
        }
    }
}

impl EventParams {
    pub fn validate(&self) -> Result<(), GenerateError> {
        fn check(
            name: &'static str,
            value: f64,
            requirement: &'static str,
            ok: bool,
        ) -> Result<(), GenerateError> {
            if value.is_finite() && ok {
                Ok(())
            } else {
                Err(GenerateError::InvalidParameter {
                    name,
                    requirement,
                    value,
                })
            }
        }

        let positive = "a positive number";
        let non_negative = "a non-negative number";
        check(
            "sampling rate",
            self.sampling_rate_hz,
            positive,
            self.sampling_rate_hz > 0.0,
        )?;
        check("duration", self.duration_s, positive, self.duration_s > 0.0)?;
        check(
            "noise standard deviation",
            self.noise_std,
            non_negative,
            self.noise_std >= 0.0,
        )?;
        check(
            "event time",
            self.event_time_s,
            non_negative,
            self.event_time_s >= 0.0,
        )?;
        check(
            "event amplitude",
            self.event_amplitude,
            "a finite number",
            true,
        )?;
        check(
            "envelope width",
            self.envelope_width_s2,
            positive,
            self.envelope_width_s2 > 0.0,
        )?;
        check(
            "carrier frequency",
            self.carrier_freq_hz,
            "a finite number",
            true,
        )?;
        Ok(())
    }

    /// The number of samples in a generated signal.
    pub fn num_samples(&self) -> usize {
        (self.sampling_rate_hz * self.duration_s) as usize
    }

    /// The index of the first sample of the event.
    pub fn event_index(&self) -> usize {
        (self.event_time_s * self.sampling_rate_hz) as usize
    }

    /// Add the event to a signal. Event samples beyond the end of the signal
    /// are dropped.
    fn add_event(&self, signal: &mut Array1<f64>) {
        let start = self.event_index();
        let end = start
            .saturating_add(self.event_num_samples)
            .min(signal.len());
        trace!("Adding the event to samples {start}..{end}");
        for i in start..end {
            let dt = (i - start) as f64 / self.sampling_rate_hz;
            let envelope = (-dt * dt / self.envelope_width_s2).exp();
            signal[i] +=
                self.event_amplitude * envelope * (TAU * self.carrier_freq_hz * dt).sin();
        }
    }
}

/// The noise-free part of a synthetic signal, i.e. zeros everywhere but the
/// event.
pub fn transient(params: &EventParams) -> Result<Array1<f64>, GenerateError> {
    params.validate()?;
    let mut signal = Array1::zeros(params.num_samples());
    params.add_event(&mut signal);
    Ok(signal)
}

/// Generate a synthetic signal, drawing its noise from `rng`.
pub fn generate<R: Rng + ?Sized>(
    params: &EventParams,
    rng: &mut R,
) -> Result<Array1<f64>, GenerateError> {
    params.validate()?;
    let normal =
        Normal::new(0.0, params.noise_std).map_err(|_| GenerateError::InvalidParameter {
            name: "noise standard deviation",
            requirement: "a non-negative number",
            value: params.noise_std,
        })?;

    let mut signal = Array1::from_iter((0..params.num_samples()).map(|_| normal.sample(rng)));
    params.add_event(&mut signal);
    Ok(signal)
}
