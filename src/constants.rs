// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Useful constants.

These are the defaults of the configurable parameters. All constants *must* be
double precision.
 */

pub use std::f64::consts::TAU;

/// The sampling rate of generated signals [Hz].
pub const DEFAULT_SAMPLING_RATE_HZ: f64 = 100.0;

/// The length of generated signals [seconds].
pub const DEFAULT_DURATION_S: f64 = 30.0;

/// The standard deviation of the zero-mean Gaussian noise on generated
/// signals.
pub const DEFAULT_NOISE_STD: f64 = 0.0005;

/// The start of the transient event from the start of the signal [seconds].
pub const DEFAULT_EVENT_TIME_S: f64 = 10.0;

/// The number of samples the transient event is added to.
pub const DEFAULT_EVENT_NUM_SAMPLES: usize = 150;

/// The peak amplitude of the transient event.
pub const DEFAULT_EVENT_AMPLITUDE: f64 = 0.01;

/// The denominator of the Gaussian envelope exponent, i.e. the envelope is
/// exp(-dt^2 / width) [seconds^2].
pub const DEFAULT_ENVELOPE_WIDTH_S2: f64 = 0.5;

/// The frequency of the transient's carrier sinusoid [Hz].
pub const DEFAULT_CARRIER_FREQ_HZ: f64 = 2.0;

/// Where generated signals are written.
pub const DEFAULT_EVENT_OUTPUT_FILENAME: &str = "evento_molto_debole.txt";

/// The lower edge of the analysed frequency band [Hz].
pub const DEFAULT_BAND_LOW_HZ: f64 = 0.0;

/// The upper edge of the analysed frequency band [Hz].
pub const DEFAULT_BAND_HIGH_HZ: f64 = 5.0;

/// Bins whose original magnitude is at or below this fraction of the in-band
/// peak magnitude have no response ratio.
pub const DEFAULT_THRESHOLD_FRACTION: f64 = 0.01;

/// Where filter responses are written.
pub const DEFAULT_RESPONSE_OUTPUT_FILENAME: &str = "filter_response.txt";
