// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Bytecode disassembler for debugging.

use super::{IMMEDIATE_SIZE, immediate_count, mnemonic, op, read_i32};
use std::fmt::Write;

/// Debug helper: disassemble a code section to a listing.
///
/// One line per instruction, prefixed with the byte offset. Stops at the
/// first unknown opcode or truncated immediate, reporting it in the
/// listing rather than failing.
#[must_use]
pub fn disassemble(code: &[u8], constants: &[String]) -> String {
    let mut out = String::new();

    if !constants.is_empty() {
        let _ = writeln!(out, "Constants:");
        for (i, text) in constants.iter().enumerate() {
            let _ = writeln!(out, "  [{i}] {text:?}");
        }
        let _ = writeln!(out);
    }

    let mut ip = 0usize;
    while ip < code.len() {
        let opcode = code[ip];
        let _ = write!(out, "{ip:04x}: ");

        let Some(name) = mnemonic(opcode) else {
            let _ = writeln!(out, "??? (0x{opcode:02x})");
            break;
        };

        let Some(count) = immediate_count(opcode) else {
            let _ = writeln!(out, "??? (0x{opcode:02x})");
            break;
        };

        let mut operands = [0i32; 2];
        let mut truncated = false;
        for (slot, operand) in operands.iter_mut().enumerate().take(count) {
            match read_i32(code, ip + 1 + slot * IMMEDIATE_SIZE) {
                Some(value) => *operand = value,
                None => {
                    truncated = true;
                    break;
                }
            }
        }
        if truncated {
            let _ = writeln!(out, "{name} <truncated immediate>");
            break;
        }

        match count {
            1 => {
                let _ = write!(out, "{name} {}", operands[0]);
            }
            2 => {
                let _ = write!(out, "{name} {}, {}", operands[0], operands[1]);
            }
            _ => {
                let _ = write!(out, "{name}");
            }
        }

        // Relative jumps also get the resolved absolute target
        if opcode == op::JUMP || opcode == op::JUMP_IF_FALSE {
            let after = ip as i64 + 1 + IMMEDIATE_SIZE as i64;
            let _ = write!(out, "  ; -> {:04x}", after + i64::from(operands[0]));
        }
        let _ = writeln!(out);

        ip += 1 + count * IMMEDIATE_SIZE;
    }

    out
}
