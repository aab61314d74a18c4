//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use std::process::{Command, Output};

use bess_sizing::sizing::types::SizingInputs;

/// The calculator's reference case (0.99 MW for 8 h at 90 % DoD, 88.65 % RTE).
pub fn reference_inputs() -> SizingInputs {
    SizingInputs::default()
}

/// Reference inputs with a different load and duration.
pub fn inputs_with_load(load_mw: f64, discharge_h: f64) -> SizingInputs {
    SizingInputs {
        load_mw,
        discharge_h,
        ..SizingInputs::default()
    }
}

/// Runs the built binary with `args` and returns its output.
pub fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bess-sizing"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("bess-sizing process should run")
}

/// Runs the binary, asserts success, and returns stdout.
pub fn run_cli_ok(args: &[&str]) -> String {
    let output = run_cli(args);
    assert!(
        output.status.success(),
        "bess-sizing {args:?} failed: stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout should be valid UTF-8")
}
