// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Tests to ensure there is no stderr output for successful commands.

use tempfile::TempDir;

use crate::{filter_response, generate_event, get_cmd_output};

#[test]
fn test_generate_and_estimate_no_stderr() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");

    let cmd = generate_event()
        .current_dir(tmp_dir.path())
        .args(["--seed", "1", "-o", "event.txt", "-vvv"])
        .ok();
    assert!(
        cmd.is_ok(),
        "generate-event failed on default parameters: {}",
        cmd.err().unwrap()
    );
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.is_empty(), "stderr wasn't empty: {stderr}");

    let cmd = filter_response()
        .current_dir(tmp_dir.path())
        .args(["event.txt", "event.txt", "100", "-vvv"])
        .ok();
    assert!(
        cmd.is_ok(),
        "filter-response failed on generated data: {}",
        cmd.err().unwrap()
    );
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.is_empty(), "stderr wasn't empty: {stderr}");

    // A signal compared with itself has a flat response.
    let response = std::fs::read_to_string(tmp_dir.path().join("filter_response.txt")).unwrap();
    assert!(!response.is_empty());
    assert!(response.lines().all(|l| l.ends_with("  1.000000")), "{response}");
}
