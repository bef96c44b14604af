// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::{fmt::Write as _, fs::read_to_string};

use tempfile::TempDir;

use crate::{filter_response, get_cmd_output, sine, write_signal};

#[test]
fn test_wrong_number_of_arguments() {
    for args in [&[][..], &["orig.txt"][..], &["orig.txt", "filt.txt"][..]] {
        let output = filter_response().args(args).output().unwrap();
        assert_eq!(output.status.code(), Some(1), "args: {args:?}");
        assert!(!output.stderr.is_empty());
    }

    let output = filter_response()
        .args(["orig.txt", "filt.txt", "100", "extra"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_help() {
    let cmd = filter_response().arg("--help").ok();
    assert!(cmd.is_ok());
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(stdout.contains("SAMPLING_RATE_HZ"), "{stdout}");
    assert!(stderr.is_empty());
}

#[test]
fn test_half_gain_sine() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let original = sine(3000, 2.0, 1.0);
    write_signal(&tmp_dir.path().join("orig.txt"), &original);
    write_signal(&tmp_dir.path().join("filt.txt"), &(&original * 0.5));

    let cmd = filter_response()
        .current_dir(tmp_dir.path())
        .args(["orig.txt", "filt.txt", "100"])
        .ok();
    assert!(cmd.is_ok(), "filter-response failed: {}", cmd.err().unwrap());

    let response = read_to_string(tmp_dir.path().join("filter_response.txt")).unwrap();
    assert_eq!(response, "2.0000  0.500000\n");
}

#[test]
fn test_last_column_is_used() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let original = sine(1000, 2.0, 1.0) + sine(1000, 3.5, 0.5);
    let filtered = sine(1000, 2.0, 0.8) + sine(1000, 3.5, 0.1);
    write_signal(&tmp_dir.path().join("orig.txt"), &original);

    // The same filtered samples, with and without a leading time column.
    let mut one_column = String::new();
    let mut two_columns = String::new();
    for (i, x) in filtered.iter().enumerate() {
        writeln!(&mut one_column, "{x:e}").unwrap();
        writeln!(&mut two_columns, "{:.2} {x:e}", i as f64 / 100.0).unwrap();
    }
    std::fs::write(tmp_dir.path().join("filt.txt"), one_column).unwrap();
    std::fs::write(tmp_dir.path().join("filt_2col.txt"), two_columns).unwrap();

    for (filtered_file, output) in [("filt.txt", "one.txt"), ("filt_2col.txt", "two.txt")] {
        let cmd = filter_response()
            .current_dir(tmp_dir.path())
            .args(["orig.txt", filtered_file, "100", "-o", output])
            .ok();
        assert!(cmd.is_ok(), "filter-response failed: {}", cmd.err().unwrap());
    }

    let one = read_to_string(tmp_dir.path().join("one.txt")).unwrap();
    let two = read_to_string(tmp_dir.path().join("two.txt")).unwrap();
    assert!(!one.is_empty());
    assert_eq!(one, two);
}

#[test]
fn test_rows_are_in_band_and_ascending() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let original = sine(2000, 1.0, 1.0) + sine(2000, 4.0, 1.0) + sine(2000, 20.0, 1.0);
    let filtered = sine(2000, 1.0, 0.9) + sine(2000, 4.0, 0.3) + sine(2000, 20.0, 0.01);
    write_signal(&tmp_dir.path().join("orig.txt"), &original);
    write_signal(&tmp_dir.path().join("filt.txt"), &filtered);

    let cmd = filter_response()
        .current_dir(tmp_dir.path())
        .args(["orig.txt", "filt.txt", "100"])
        .ok();
    assert!(cmd.is_ok(), "filter-response failed: {}", cmd.err().unwrap());

    let response = read_to_string(tmp_dir.path().join("filter_response.txt")).unwrap();
    let rows: Vec<(f64, f64)> = response
        .lines()
        .map(|l| {
            let (f, r) = l.split_once("  ").unwrap();
            (f.parse().unwrap(), r.parse().unwrap())
        })
        .collect();
    // 20 Hz is out of the band.
    assert_eq!(rows, vec![(1.0, 0.9), (4.0, 0.3)]);
}

#[test]
fn test_non_numeric_input() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    std::fs::write(tmp_dir.path().join("orig.txt"), "1.0\n2.0\nthree\n").unwrap();
    write_signal(&tmp_dir.path().join("filt.txt"), &sine(3, 2.0, 1.0));

    let cmd = filter_response()
        .current_dir(tmp_dir.path())
        .args(["orig.txt", "filt.txt", "100"])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.starts_with("Error:"), "{stderr}");
    assert!(stderr.contains("three"), "{stderr}");
    assert!(!tmp_dir.path().join("filter_response.txt").exists());
}

#[test]
fn test_missing_input() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    write_signal(&tmp_dir.path().join("filt.txt"), &sine(3, 2.0, 1.0));

    let output = filter_response()
        .current_dir(tmp_dir.path())
        .args(["nope.txt", "filt.txt", "100"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("nope.txt"), "{stderr}");
}

#[test]
fn test_bad_sampling_rates() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let signal = sine(300, 2.0, 1.0);
    write_signal(&tmp_dir.path().join("orig.txt"), &signal);
    write_signal(&tmp_dir.path().join("filt.txt"), &signal);

    for fs in ["0", "-100", "abc"] {
        let output = filter_response()
            .current_dir(tmp_dir.path())
            .args(["orig.txt", "filt.txt", fs])
            .output()
            .unwrap();
        assert_eq!(output.status.code(), Some(1), "fs: {fs}");
        assert!(!output.stderr.is_empty());
    }
    assert!(!tmp_dir.path().join("filter_response.txt").exists());
}

#[test]
fn test_empty_input_gives_empty_output() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    std::fs::write(tmp_dir.path().join("orig.txt"), "").unwrap();
    write_signal(&tmp_dir.path().join("filt.txt"), &sine(300, 2.0, 1.0));

    let cmd = filter_response()
        .current_dir(tmp_dir.path())
        .args(["orig.txt", "filt.txt", "100"])
        .ok();
    assert!(cmd.is_ok(), "filter-response failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("WARN"), "{stdout}");

    let response = read_to_string(tmp_dir.path().join("filter_response.txt")).unwrap();
    assert!(response.is_empty());
}

#[test]
fn test_args_file_and_save_toml() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let original = sine(3000, 2.0, 1.0) + sine(3000, 8.0, 1.0);
    write_signal(&tmp_dir.path().join("orig.txt"), &original);
    write_signal(&tmp_dir.path().join("filt.txt"), &(&original * 0.25));
    std::fs::write(
        tmp_dir.path().join("args.toml"),
        "band_high = 10.0\noutput = \"from_file.txt\"\n",
    )
    .unwrap();

    let cmd = filter_response()
        .current_dir(tmp_dir.path())
        .args([
            "orig.txt",
            "filt.txt",
            "100",
            "--args-file",
            "args.toml",
            "-o",
            "from_cli.txt",
            "--save-toml",
            "saved.toml",
        ])
        .ok();
    assert!(cmd.is_ok(), "filter-response failed: {}", cmd.err().unwrap());
    assert!(!tmp_dir.path().join("from_file.txt").exists());
    let response = read_to_string(tmp_dir.path().join("from_cli.txt")).unwrap();
    assert_eq!(response, "2.0000  0.250000\n8.0000  0.250000\n");

    // The saved options reproduce the run.
    std::fs::remove_file(tmp_dir.path().join("from_cli.txt")).unwrap();
    let cmd = filter_response()
        .current_dir(tmp_dir.path())
        .args(["orig.txt", "filt.txt", "100", "--args-file", "saved.toml"])
        .ok();
    assert!(cmd.is_ok(), "filter-response failed: {}", cmd.err().unwrap());
    let reproduced = read_to_string(tmp_dir.path().join("from_cli.txt")).unwrap();
    assert_eq!(reproduced, response);
}

#[test]
fn test_dry_run() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let cmd = filter_response()
        .current_dir(tmp_dir.path())
        .args(["orig.txt", "filt.txt", "100", "--dry-run"])
        .ok();
    assert!(cmd.is_ok(), "filter-response failed: {}", cmd.err().unwrap());
    assert!(!tmp_dir.path().join("filter_response.txt").exists());
}
