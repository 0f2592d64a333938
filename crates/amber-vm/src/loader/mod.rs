// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Loader for the `AMBR` bytecode container.
//!
//! Container layout, little-endian throughout:
//!
//! ```text
//! offset  size  field
//! 0       4     magic "AMBR"
//! 4       2     version
//! 6       4     entry-point offset (parsed, currently ignored)
//! 10      4     constant pool count P
//! 14      ...   P entries: 4-byte length, then UTF-8 bytes
//! ...     4     code length C
//! ...     C     opcode bytes
//! ```
//!
//! Parsing is fail-fast: a short read anywhere is `TruncatedFile`, bytes
//! left over after the code section are `TrailingBytes`.

#[cfg(test)]
mod loader_test;

use log::debug;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// The four magic bytes opening every container.
pub const MAGIC: [u8; 4] = *b"AMBR";

/// Error while loading a bytecode container.
#[derive(Debug)]
pub enum LoadError {
    /// The file does not start with the `AMBR` magic.
    BadMagic,
    /// The file ends before a declared section is complete.
    TruncatedFile,
    /// A constant pool entry is not valid UTF-8.
    BadConstant,
    /// Bytes remain after the code section.
    TrailingBytes,
    /// Filesystem error reading the container.
    Io(io::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadMagic => write!(f, "not an AMBR bytecode file"),
            Self::TruncatedFile => write!(f, "truncated bytecode file"),
            Self::BadConstant => write!(f, "constant pool entry is not valid UTF-8"),
            Self::TrailingBytes => write!(f, "trailing bytes after code section"),
            Self::Io(e) => write!(f, "{e}"),
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// A loaded bytecode module: what the VM needs to start executing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    /// Container format version.
    pub version: u16,
    /// Entry-point offset. Execution currently always starts at 0.
    pub entry: u32,
    /// Initial constant pool contents, in container order.
    pub constants: Vec<String>,
    /// Opcode bytes.
    pub code: Vec<u8>,
}

impl Module {
    /// Read and parse a container from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is malformed.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let bytes = fs::read(path)?;
        Self::parse(&bytes)
    }

    /// Parse a container from bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not a well-formed container.
    pub fn parse(bytes: &[u8]) -> Result<Self, LoadError> {
        let mut cursor = Cursor::new(bytes);

        if cursor.take(4)? != MAGIC {
            return Err(LoadError::BadMagic);
        }

        let version = cursor.read_u16()?;
        let entry = cursor.read_u32()?;

        let pool_count = cursor.read_u32()? as usize;
        let mut constants = Vec::with_capacity(pool_count.min(bytes.len()));
        for _ in 0..pool_count {
            let len = cursor.read_u32()? as usize;
            let data = cursor.take(len)?;
            let text = std::str::from_utf8(data).map_err(|_| LoadError::BadConstant)?;
            constants.push(text.to_owned());
        }

        let code_len = cursor.read_u32()? as usize;
        let code = cursor.take(code_len)?.to_vec();

        if !cursor.is_at_end() {
            return Err(LoadError::TrailingBytes);
        }

        debug!(
            "loaded module: version {version}, {} constant(s), {} code byte(s)",
            constants.len(),
            code.len()
        );
        if entry != 0 {
            debug!("module declares entry point {entry}, ignored (execution starts at 0)");
        }

        Ok(Self {
            version,
            entry,
            constants,
            code,
        })
    }
}

/// Byte cursor over the container, tracking the read position.
struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn is_at_end(&self) -> bool {
        self.pos == self.bytes.len()
    }

    /// Consume exactly `len` bytes.
    fn take(&mut self, len: usize) -> Result<&'a [u8], LoadError> {
        let end = self.pos.checked_add(len).ok_or(LoadError::TruncatedFile)?;
        let slice = self
            .bytes
            .get(self.pos..end)
            .ok_or(LoadError::TruncatedFile)?;
        self.pos = end;
        Ok(slice)
    }

    fn read_u16(&mut self) -> Result<u16, LoadError> {
        let bytes = self.take(2)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    fn read_u32(&mut self) -> Result<u32, LoadError> {
        let bytes = self.take(4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }
}
