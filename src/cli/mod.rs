// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Command-line interface code for the `filter-response` and `generate-event`
//! binaries.
//!
//! Options that can be given on the command line must be optional, so that
//! they can also come from an arguments file. Positional arguments are only
//! accepted on the command line.
//!
//! Only a few things should be public in this module: the top-level parsers,
//! their `run` methods, and `AccelError`.

#[macro_use]
mod common;
mod error;
mod generate;
mod response;

pub use error::AccelError;

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use clap::{AppSettings, Args, Parser};
use log::{debug, info};
use serde::Serialize;

// Add build-time information from the "built" crate.
include!(concat!(env!("OUT_DIR"), "/built.rs"));

#[derive(Debug, Parser)]
#[clap(
    name = "filter-response",
    version,
    author,
    about = r#"Estimate the magnitude response of a filter from an original signal and its filtered version.
The response is written as "<frequency [Hz]>  <ratio>" lines."#
)]
#[clap(global_setting(AppSettings::DeriveDisplayOrder))]
#[clap(global_setting(AppSettings::AllowNegativeNumbers))]
#[clap(infer_long_args = true)]
pub struct FilterResponseCli {
    #[clap(flatten)]
    args: response::FilterResponseArgs,

    #[clap(flatten)]
    global_opts: GlobalArgs,
}

#[derive(Debug, Parser)]
#[clap(
    name = "generate-event",
    version,
    author,
    about = "Generate a synthetic accelerometer signal: Gaussian noise with a weak transient event."
)]
#[clap(global_setting(AppSettings::DeriveDisplayOrder))]
#[clap(infer_long_args = true)]
pub struct GenerateEventCli {
    #[clap(flatten)]
    args: generate::GenerateArgs,

    #[clap(flatten)]
    global_opts: GlobalArgs,
}

#[derive(Debug, Args)]
struct GlobalArgs {
    /// The verbosity of the program. Increase by specifying multiple times
    /// (e.g. -vv). The default is to print only high-level information.
    #[clap(short, long, parse(from_occurrences))]
    verbosity: u8,

    /// Only verify that arguments were correctly ingested and print out
    /// high-level information.
    #[clap(long)]
    dry_run: bool,

    /// Save the input arguments into a new TOML file that can be used to
    /// reproduce this run.
    #[clap(long, parse(from_os_str))]
    save_toml: Option<PathBuf>,
}

impl FilterResponseCli {
    pub fn run(self) -> Result<(), AccelError> {
        let GlobalArgs {
            verbosity,
            dry_run,
            save_toml,
        } = self.global_opts;
        setup_logging(verbosity)?;
        info!("filter-response {}", env!("CARGO_PKG_VERSION"));
        display_build_info();

        let args = self.args.merge()?;
        if let Some(toml) = save_toml {
            save_args_toml(&toml, args.options())?;
        }
        args.run(dry_run)?;

        info!("filter-response complete.");
        Ok(())
    }
}

impl GenerateEventCli {
    pub fn run(self) -> Result<(), AccelError> {
        let GlobalArgs {
            verbosity,
            dry_run,
            save_toml,
        } = self.global_opts;
        setup_logging(verbosity)?;
        info!("generate-event {}", env!("CARGO_PKG_VERSION"));
        display_build_info();

        let args = self.args.merge()?;
        if let Some(toml) = save_toml {
            save_args_toml(&toml, &args)?;
        }
        args.run(dry_run)?;

        info!("generate-event complete.");
        Ok(())
    }
}

/// Write (merged) arguments out as TOML, such that the file can be used as an
/// arguments file.
fn save_args_toml<T: Serialize>(file: &Path, args: &T) -> Result<(), AccelError> {
    debug!("Saving arguments to {}", file.display());
    let toml_str = toml::to_string(args)?;
    let mut f = BufWriter::new(File::create(file)?);
    f.write_all(toml_str.as_bytes())?;
    f.flush()?;
    Ok(())
}

/// Activate a logger. All log messages are put onto `stdout`. `env_logger`
/// automatically only uses colours and fancy symbols if we're on a tty (e.g. a
/// terminal); piped output will be formatted sensibly. Source code lines are
/// displayed in log messages when verbosity >= 3.
fn setup_logging(verbosity: u8) -> Result<(), log::SetLoggerError> {
    let mut builder = env_logger::Builder::from_default_env();
    builder.target(env_logger::Target::Stdout);
    builder.format_target(false);
    match verbosity {
        0 => builder.filter_level(log::LevelFilter::Info),
        1 => builder.filter_level(log::LevelFilter::Debug),
        2 => builder.filter_level(log::LevelFilter::Trace),
        _ => {
            builder.filter_level(log::LevelFilter::Trace);
            builder.format(|buf, record| {
                let timestamp = buf.timestamp();
                let level = record.level();
                let target = record.target();
                let line = record.line().unwrap_or(0);
                let message = record.args();

                writeln!(buf, "[{timestamp} {level} {target}:{line}] {message}")
            })
        }
    };
    builder.try_init()
}

/// Write many info-level log lines of how this executable was compiled.
fn display_build_info() {
    let dirty = match GIT_DIRTY {
        Some(true) => " (dirty)",
        _ => "",
    };
    match GIT_COMMIT_HASH_SHORT {
        Some(hash) => {
            info!("Compiled on git commit hash: {hash}{dirty}");
        }
        None => info!("Compiled on git commit hash: <no git info>"),
    }
    if let Some(hr) = GIT_HEAD_REF {
        info!("            git head ref: {}", hr);
    }
    info!("            {}", BUILT_TIME_UTC);
    info!("         with compiler {}", RUSTC_VERSION);
    info!("");
}
