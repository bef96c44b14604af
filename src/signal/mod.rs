// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to read and write time series as plain text.
//!
//! A signal file is a whitespace-delimited numeric table. It may have a single
//! column of samples, or several columns (e.g. a leading timestamp column), in
//! which case only the last column holds the samples. Anything after a '#' is
//! a comment.

mod error;

pub use error::ReadSignalError;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use log::{debug, trace};
use ndarray::{Array1, ArrayView1};

/// Read the samples of a signal file. If the file has more than one column,
/// the last column is returned.
pub fn read_signal_file<P: AsRef<Path>>(file: P) -> Result<Array1<f64>, ReadSignalError> {
    let file = file.as_ref();
    if !file.exists() {
        return Err(ReadSignalError::DoesntExist(file.into()));
    }
    debug!("Reading signal file {}", file.display());

    let fh = File::open(file).map_err(|err| ReadSignalError::Read {
        file: file.into(),
        err,
    })?;
    let samples = parse_signal(BufReader::new(fh), file)?;
    debug!("Read {} samples from {}", samples.len(), file.display());
    Ok(samples)
}

fn parse_signal<R: BufRead>(reader: R, file: &Path) -> Result<Array1<f64>, ReadSignalError> {
    let mut samples = vec![];
    let mut num_columns: Option<usize> = None;
    let mut row = vec![];

    for (i_line, line) in reader.lines().enumerate() {
        let line = line.map_err(|err| ReadSignalError::Read {
            file: file.into(),
            err,
        })?;
        let data = match line.find('#') {
            Some(i) => &line[..i],
            None => line.as_str(),
        };

        row.clear();
        for token in data.split_ascii_whitespace() {
            let value: f64 = token.parse().map_err(|_| ReadSignalError::ParseFloat {
                file: file.display().to_string(),
                line: i_line + 1,
                token: token.to_string(),
            })?;
            row.push(value);
        }
        // Blank and comment-only lines.
        let Some(&last) = row.last() else {
            continue;
        };

        match num_columns {
            None => {
                trace!("{} has {} column(s)", file.display(), row.len());
                num_columns = Some(row.len());
            }
            Some(n) if n != row.len() => {
                return Err(ReadSignalError::ColumnCountChanged {
                    file: file.display().to_string(),
                    line: i_line + 1,
                    expected: n,
                    got: row.len(),
                })
            }
            Some(_) => (),
        }
        samples.push(last);
    }

    Ok(Array1::from(samples))
}

/// Write samples to a file, one per line, in the format of
/// [`format_scientific`]. Any existing file is overwritten.
pub fn write_signal_file<P: AsRef<Path>>(
    file: P,
    samples: ArrayView1<f64>,
) -> Result<(), std::io::Error> {
    let mut out = BufWriter::new(File::create(file)?);
    for &sample in samples {
        writeln!(&mut out, "{}", format_scientific(sample))?;
    }
    out.flush()?;
    Ok(())
}

/// Format a number in scientific notation with six digits after the decimal
/// point and a signed exponent of at least two digits, e.g. `1.234568e-04`.
pub fn format_scientific(x: f64) -> String {
    let s = format!("{x:.6e}");
    match s.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        // inf and NaN have no exponent.
        None => s,
    }
}
