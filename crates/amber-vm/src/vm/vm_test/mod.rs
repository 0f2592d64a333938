// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Tests for the dispatch loop, split by concern.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod arithmetic_test;

use crate::console::MockConsole;
use crate::machine::Machine;
use crate::vm::{Fault, run};

/// Run a program to completion, returning the final machine state and
/// everything it printed.
fn run_program(code: &[u8], constants: &[&str]) -> (Machine, String) {
    let mut machine = Machine::new(constants.iter().map(|s| (*s).to_owned()).collect());
    let mut console = MockConsole::new();
    run(&mut machine, code, &mut console).expect("program faulted");
    (machine, console.output().to_owned())
}

/// Run a program that must fault, returning the fault.
fn run_fault(code: &[u8], constants: &[&str]) -> Fault {
    let mut machine = Machine::new(constants.iter().map(|s| (*s).to_owned()).collect());
    let mut console = MockConsole::new();
    run(&mut machine, code, &mut console).expect_err("program completed")
}
