// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Discrete Fourier transforms of real signals.


use ndarray::{Array1, ArrayView1};
use num_complex::Complex64;
use realfft::{FftError, RealFftPlanner};

/// Compute the unnormalised forward DFT of a real signal. Only the bins with
/// non-negative frequency are returned (`n / 2 + 1` of them); the rest are the
/// complex conjugates of these. An empty signal has an empty spectrum.
pub fn real_fft(signal: ArrayView1<f64>) -> Result<Array1<Complex64>, FftError> {
    let n = signal.len();
    if n == 0 {
        return Ok(Array1::zeros(0));
    }

    let fft = RealFftPlanner::<f64>::new().plan_fft_forward(n);
    let mut input = signal.to_vec();
    let mut output = fft.make_output_vec();
    fft.process(&mut input, &mut output)?;
    Ok(Array1::from(output))
}

/// The frequency of each of the `n` bins of a DFT of a signal sampled at
/// `sampling_rate_hz` [Hz]. Bins below `n / 2` have positive frequencies; the
/// rest are negative, e.g. for `n = 4` and 1 Hz the frequencies are
/// `[0, 0.25, -0.5, -0.25]`.
pub fn fft_frequencies(n: usize, sampling_rate_hz: f64) -> Array1<f64> {
    if n == 0 {
        return Array1::zeros(0);
    }

    let bin_width = 1.0 / (n as f64 * (1.0 / sampling_rate_hz));
    let num_non_negative = (n - 1) / 2 + 1;
    Array1::from_iter((0..n).map(|k| {
        let k = if k < num_non_negative {
            k as f64
        } else {
            k as f64 - n as f64
        };
        k * bin_width
    }))
}
