// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Tests for the arithmetic and comparison opcodes.

use super::{run_fault, run_program};
use crate::bytecode::op;
use crate::vm::RuntimeError;

#[test]
fn subtract_and_print() {
    // PUSH 5; PUSH 3; SUB; PRINT; HALT
    let code = [
        op::PUSH, 0x05, 0x00, 0x00, 0x00,
        op::PUSH, 0x03, 0x00, 0x00, 0x00,
        op::SUB,
        op::PRINT,
        op::HALT,
    ];
    let (machine, output) = run_program(&code, &[]);
    assert_eq!(output, "2\n");
    assert_eq!(machine.stack_len(), 0);
}

#[test]
fn add_integers() {
    let code = [
        op::PUSH, 0x20, 0x00, 0x00, 0x00, // 32
        op::PUSH, 0x0A, 0x00, 0x00, 0x00, // 10
        op::ADD,
        op::PRINT,
        op::HALT,
    ];
    let (_, output) = run_program(&code, &[]);
    assert_eq!(output, "42\n");
}

#[test]
fn add_wraps_on_overflow() {
    let max = i32::MAX.to_le_bytes();
    let mut code = vec![op::PUSH];
    code.extend_from_slice(&max);
    code.extend_from_slice(&[op::PUSH, 0x01, 0x00, 0x00, 0x00]);
    code.extend_from_slice(&[op::ADD, op::PRINT, op::HALT]);

    let (_, output) = run_program(&code, &[]);
    assert_eq!(output, format!("{}\n", i32::MIN));
}

#[test]
fn subtract_below_zero_stays_integer() {
    // 3 - 5 = -2: representable in the tagged form even though the packed
    // form has no negative integers
    let code = [
        op::PUSH, 0x03, 0x00, 0x00, 0x00,
        op::PUSH, 0x05, 0x00, 0x00, 0x00,
        op::SUB,
        op::PRINT,
        op::HALT,
    ];
    let (_, output) = run_program(&code, &[]);
    assert_eq!(output, "-2\n");
}

#[test]
fn multiply() {
    let code = [
        op::PUSH, 0x06, 0x00, 0x00, 0x00,
        op::PUSH, 0x07, 0x00, 0x00, 0x00,
        op::MUL,
        op::PRINT,
        op::HALT,
    ];
    let (_, output) = run_program(&code, &[]);
    assert_eq!(output, "42\n");
}

#[test]
fn divide_truncates() {
    let code = [
        op::PUSH, 0x07, 0x00, 0x00, 0x00,
        op::PUSH, 0x02, 0x00, 0x00, 0x00,
        op::DIV,
        op::PRINT,
        op::HALT,
    ];
    let (_, output) = run_program(&code, &[]);
    assert_eq!(output, "3\n");
}

#[test]
fn divide_by_zero_faults_with_offset() {
    // PUSH 1; PUSH 0; DIV; HALT - DIV sits at offset 10
    let code = [
        op::PUSH, 0x01, 0x00, 0x00, 0x00,
        op::PUSH, 0x00, 0x00, 0x00, 0x00,
        op::DIV,
        op::HALT,
    ];
    let fault = run_fault(&code, &[]);
    assert_eq!(fault.error, RuntimeError::DivideByZero);
    assert_eq!(fault.offset, 10);
}

#[test]
fn less_pushes_one_or_zero() {
    let code = [
        op::PUSH, 0x03, 0x00, 0x00, 0x00,
        op::PUSH, 0x05, 0x00, 0x00, 0x00,
        op::LESS,
        op::PRINT,
        op::PUSH, 0x05, 0x00, 0x00, 0x00,
        op::PUSH, 0x03, 0x00, 0x00, 0x00,
        op::LESS,
        op::PRINT,
        op::HALT,
    ];
    let (_, output) = run_program(&code, &[]);
    assert_eq!(output, "1\n0\n");
}

#[test]
fn less_on_equal_is_zero() {
    let code = [
        op::PUSH, 0x04, 0x00, 0x00, 0x00,
        op::PUSH, 0x04, 0x00, 0x00, 0x00,
        op::LESS,
        op::PRINT,
        op::HALT,
    ];
    let (_, output) = run_program(&code, &[]);
    assert_eq!(output, "0\n");
}

#[test]
fn sub_requires_integers() {
    // A pool reference is not a SUB operand
    let code = [
        op::LOAD_CONST, 0x00, 0x00, 0x00, 0x00,
        op::PUSH, 0x01, 0x00, 0x00, 0x00,
        op::SUB,
        op::HALT,
    ];
    let fault = run_fault(&code, &["foo"]);
    assert_eq!(
        fault.error,
        RuntimeError::TypeMismatch {
            expected: "integer",
            found: "string",
        }
    );
}

#[test]
fn arithmetic_underflow() {
    let code = [op::PUSH, 0x01, 0x00, 0x00, 0x00, op::ADD, op::HALT];
    let fault = run_fault(&code, &[]);
    assert_eq!(fault.error, RuntimeError::StackUnderflow);
    assert_eq!(fault.offset, 5);
}
