#![allow(missing_docs, clippy::tests_outside_test_module)]

use std::process::Command;

use assert_cmd::{
    assert::{Assert, OutputAssertExt},
    cargo::CommandCargoExt,
};
use image::GenericImageView;
use tempfile::tempdir;

#[allow(deprecated)]
fn sc() -> Command {
    Command::cargo_bin("sc").expect("binary exists")
}

fn run(args: &[&str]) -> Assert {
    sc().args(args).assert()
}

fn stdout_of(assert: &Assert) -> String {
    String::from_utf8_lossy(&assert.get_output().stdout).into_owned()
}

fn stderr_of(assert: &Assert) -> String {
    String::from_utf8_lossy(&assert.get_output().stderr).into_owned()
}

#[test]
fn xy2d_defaults_to_order_64() {
    run(&["xy2d", "5", "9"]).success().stdout("120\n");
    run(&["xy2d", "63", "0"]).success().stdout("4095\n");
}

#[test]
fn xy2d_with_order() {
    run(&["xy2d", "-n", "4", "3", "3"]).success().stdout("10\n");
    run(&["xy2d", "--order", "4", "1", "1"]).success().stdout("2\n");
}

#[test]
fn xy2d_verbose_prints_trace() {
    let assert = run(&["-v", "xy2d", "5", "9"]).success().stdout("120\n");
    let stderr = stderr_of(&assert);
    assert_eq!(stderr.matches("iteration s:").count(), 6, "{stderr}");
    assert!(stderr.contains("iteration s: 4\trx: 1\try: 0\td: 112"), "{stderr}");
}

#[test]
fn missing_or_bad_arguments_fail() {
    run(&["xy2d"]).failure();
    run(&["xy2d", "1"]).failure();
    run(&["xy2d", "one", "2"]).failure();
    run(&["xy2d", "-1", "2"]).failure();
    run(&[]).failure();
}

#[test]
fn invalid_order_fails_with_message() {
    let assert = run(&["xy2d", "-n", "6", "0", "0"]).failure();
    assert!(stderr_of(&assert).contains("power of two"));

    let assert = run(&["xy2d", "-n", "4", "4", "0"]).failure();
    assert!(stderr_of(&assert).contains("outside a 4x4 grid"));

    run(&["d2xy", "-n", "4", "16"]).failure();
}

#[test]
fn d2xy_prints_cell() {
    run(&["d2xy", "-n", "4", "10"]).success().stdout("3 3\n");
    run(&["d2xy", "100"]).success().stdout("4 14\n");
}

#[test]
fn encode_then_decode_round_trips() {
    let assert = run(&["encode", "-n", "8", "hi"]).success();
    let out = stdout_of(&assert);
    assert_eq!(out, "0,0\n1,0\n3,0\n3,1\n2,3\n1,2\n0,2\n");

    let cells: Vec<&str> = out.lines().collect();
    let mut args = vec!["decode", "-n", "8"];
    args.extend(cells);
    run(&args).success().stdout("hi\n");
}

#[test]
#[allow(deprecated)]
fn decode_reads_stdin() {
    assert_cmd::Command::cargo_bin("sc")
        .expect("binary exists")
        .args(["decode", "-n", "8", "--len", "2"])
        .write_stdin("0,0 1,0 3,0\n3,1 2,3 1,2 0,2\n")
        .assert()
        .success()
        .stdout("hi\n");
}

#[test]
fn decode_hex_and_errors() {
    run(&["decode", "-n", "8", "--hex", "0,0", "1,0"])
        .success()
        .stdout("09\n");
    run(&["decode", "-n", "8", "9,0"]).failure();
    run(&["decode", "-n", "8", "--len", "1", "0,2"]).failure();
    run(&["decode", "-n", "8", "zero"]).failure();
}

#[test]
fn decode_rejects_huge_len() {
    let assert = run(&["decode", "-n", "4", "--len", "100000000000000", "0,0"])
        .failure()
        .code(1);
    assert!(stderr_of(&assert).contains("too large"), "{}", stderr_of(&assert));
}

#[test]
fn encode_warns_when_input_does_not_fit() {
    let assert = run(&["encode", "-n", "2", "hello"]).success();
    assert!(stderr_of(&assert).contains("warning"));
    // Only the low nibble of 'o' (0x6f) survives: bits 0..4.
    assert_eq!(stdout_of(&assert).lines().count(), 4);
}

#[test]
fn grid_prints_table() {
    run(&["grid", "-n", "4"])
        .success()
        .stdout(" 5  6  9 10\n 4  7  8 11\n 3  2 13 12\n 0  1 14 15\n");
    run(&["grid", "-n", "3"]).failure();
}

#[test]
fn iterator_prints_base_table() {
    run(&["iterator", "4"])
        .success()
        .stdout("0 0 0\n1 0 1\n2 1 1\n3 1 0\n");
}

#[test]
fn map_writes_png() {
    let td = tempdir().expect("tmp");
    let output = td.path().join("map.png");
    let out = output.to_str().expect("utf-8 path");

    run(&["map", "-n", "8", "-s", "128", "--data", "hi", out])
        .success()
        .stdout("OK!\n");

    let img = image::open(&output).expect("image decodes");
    assert_eq!(img.dimensions(), (128, 128));
}

#[test]
fn map_rejects_bad_options() {
    let td = tempdir().expect("tmp");
    let output = td.path().join("map.png");
    let out = output.to_str().expect("utf-8 path");

    run(&["map", "-n", "12", out]).failure();
    run(&["map", "--fg", "notacolor", out]).failure();
    run(&["map", "-w", "0", out]).failure();
    assert!(!output.exists());
}
