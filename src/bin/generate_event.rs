// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The generate-event binary. Writes a synthetic accelerometer signal.

use clap::Parser;

use accel_response::{AccelError, GenerateEventCli};

fn main() {
    // Usage errors exit with 1, not clap's default of 2. Help and version
    // requests are "errors" too, but aren't printed to stderr.
    let args = match GenerateEventCli::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            // If printing fails there is nothing left to report to.
            let _ = e.print();
            std::process::exit(code);
        }
    };

    // Stolen from BurntSushi. We don't return Result from main because it
    // prints the debug representation of the error. The code below prints the
    // "display" or human readable representation of the error.
    if let Err(e) = try_main(args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn try_main(args: GenerateEventCli) -> Result<(), AccelError> {
    args.run()
}
