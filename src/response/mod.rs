// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Empirical filter responses.
//!
//! Given an "original" signal and a "filtered" version of it, the response of
//! the filter at frequency f is estimated as |F_filt(f)| / |F_orig(f)|, where F
//! is the DFT of a signal. Only a low-frequency band is analysed, and bins
//! where the original spectrum is too weak (relative to its in-band peak) have
//! no response, as the ratio there is dominated by noise.

mod error;

pub use error::ResponseError;

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use log::{debug, trace};
use ndarray::{s, ArrayView1};

use crate::{
    constants::{DEFAULT_BAND_HIGH_HZ, DEFAULT_BAND_LOW_HZ, DEFAULT_THRESHOLD_FRACTION},
    spectrum::{fft_frequencies, real_fft},
};

/// Tunables of [`estimate_response`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResponseParams {
    /// The lowest frequency analysed [Hz]. Negative frequencies are never
    /// analysed, whatever this is.
    pub band_low_hz: f64,

    /// The highest frequency analysed [Hz].
    pub band_high_hz: f64,

    /// A bin only gets a response if its original magnitude is greater than
    /// this fraction of the largest original magnitude in the band.
    pub threshold_fraction: f64,
}

impl Default for ResponseParams {
    fn default() -> Self {
        Self {
            band_low_hz: DEFAULT_BAND_LOW_HZ,
            band_high_hz: DEFAULT_BAND_HIGH_HZ,
            threshold_fraction: DEFAULT_THRESHOLD_FRACTION,
        }
    }
}

impl ResponseParams {
    pub fn validate(&self) -> Result<(), ResponseError> {
        let ResponseParams {
            band_low_hz: low,
            band_high_hz: high,
            threshold_fraction,
        } = *self;
        if !low.is_finite() || !high.is_finite() || low > high {
            return Err(ResponseError::InvalidBand { low, high });
        }
        if !threshold_fraction.is_finite() || threshold_fraction < 0.0 {
            return Err(ResponseError::InvalidThresholdFraction(threshold_fraction));
        }
        Ok(())
    }

    fn contains(&self, freq_hz: f64) -> bool {
        freq_hz >= 0.0 && freq_hz >= self.band_low_hz && freq_hz <= self.band_high_hz
    }
}

/// A single in-band DFT bin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResponseBin {
    pub freq_hz: f64,
    pub original_magnitude: f64,
    pub filtered_magnitude: f64,

    /// 0 if the original magnitude is not above the threshold.
    pub ratio: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterResponse {
    /// The number of samples used from each signal.
    pub num_samples: usize,

    /// Original magnitudes must be above this for a bin to have a response.
    pub threshold: f64,

    /// Every bin in the band, in ascending frequency.
    pub bins: Vec<ResponseBin>,
}

impl FilterResponse {
    /// The (frequency [Hz], ratio) pairs of the bins that have a response.
    pub fn rows(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.bins
            .iter()
            .filter(|b| b.ratio > 0.0)
            .map(|b| (b.freq_hz, b.ratio))
    }

    /// The bin where the original signal is strongest.
    pub fn dominant(&self) -> Option<&ResponseBin> {
        self.bins
            .iter()
            .max_by(|a, b| a.original_magnitude.total_cmp(&b.original_magnitude))
    }

    /// Write the response rows to a file as "<freq>  <ratio>", with 4 and 6
    /// decimal places, respectively. Any existing file is overwritten.
    pub fn write<P: AsRef<Path>>(&self, file: P) -> Result<(), std::io::Error> {
        let mut out = BufWriter::new(File::create(file)?);
        for (freq_hz, ratio) in self.rows() {
            writeln!(&mut out, "{freq_hz:.4}  {ratio:.6}")?;
        }
        out.flush()?;
        Ok(())
    }
}

/// Estimate the response of whatever filter turned `original` into
/// `filtered`. Both signals must be sampled at `sampling_rate_hz`; if their
/// lengths differ, only the overlapping prefix is used.
pub fn estimate_response(
    original: ArrayView1<f64>,
    filtered: ArrayView1<f64>,
    sampling_rate_hz: f64,
    params: &ResponseParams,
) -> Result<FilterResponse, ResponseError> {
    if !sampling_rate_hz.is_finite() || sampling_rate_hz <= 0.0 {
        return Err(ResponseError::InvalidSamplingRate(sampling_rate_hz));
    }
    params.validate()?;

    let n = original.len().min(filtered.len());
    if original.len() != filtered.len() {
        debug!(
            "Signal lengths differ ({} vs. {}); using the first {n} samples of each",
            original.len(),
            filtered.len()
        );
    }
    let original = original.slice(s![..n]);
    let filtered = filtered.slice(s![..n]);

    let original_spectrum = real_fft(original)?;
    let filtered_spectrum = real_fft(filtered)?;
    let freqs = fft_frequencies(n, sampling_rate_hz);

    // The real FFT only has non-negative bins, and at even lengths its last
    // bin has the (negative) Nyquist frequency, which the band excludes.
    let mut bins: Vec<ResponseBin> = freqs
        .iter()
        .zip(original_spectrum.iter().zip(filtered_spectrum.iter()))
        .filter(|(&freq_hz, _)| params.contains(freq_hz))
        .map(|(&freq_hz, (o, f))| ResponseBin {
            freq_hz,
            original_magnitude: o.norm(),
            filtered_magnitude: f.norm(),
            ratio: 0.0,
        })
        .collect();
    trace!("{} of {} bins are in the band", bins.len(), freqs.len());

    // The threshold comes from the band, not the whole spectrum.
    let peak = bins
        .iter()
        .map(|b| b.original_magnitude)
        .fold(0.0, f64::max);
    let threshold = params.threshold_fraction * peak;
    for bin in bins.iter_mut() {
        if bin.original_magnitude > threshold {
            bin.ratio = bin.filtered_magnitude / bin.original_magnitude;
        }
    }
    debug!(
        "Peak in-band magnitude {peak:e}, threshold {threshold:e}; {} bins have a response",
        bins.iter().filter(|b| b.ratio > 0.0).count()
    );

    Ok(FilterResponse {
        num_samples: n,
        threshold,
        bins,
    })
}
