// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Delimiter-driven token lexer. Never allocates or copies: every parsed
//! field is a `&[u8]` slice view into the caller's input.

use crate::consts::DELIM;
use crate::error::Fe26Error;

/// How far a field parse is allowed to scan before it must find a
/// delimiter.
#[derive(Debug, Clone, Copy)]
pub(crate) enum ParseBound {
    /// Scan to the end of the input looking for a delimiter.
    Delim,
    /// The field must be exactly this many bytes, followed by a delimiter
    /// at exactly that position.
    Fixed(usize),
    /// Scan for a delimiter within the first `max_len + 1` bytes.
    AtMost(usize),
}

fn parse_field<'a>(data: &'a [u8], bound: ParseBound) -> Result<&'a [u8], Fe26Error> {
    match bound {
        ParseBound::Delim => {
            let pos = data
                .iter()
                .position(|&b| b == DELIM)
                .ok_or(Fe26Error::TokenParse)?;
            Ok(&data[..pos])
        }
        ParseBound::Fixed(expected_len) => {
            if expected_len > data.len() {
                return Err(Fe26Error::TokenParse);
            }
            let scan_end = expected_len.min(data.len().saturating_sub(1));
            for pos in 0..=scan_end {
                if data[pos] == DELIM {
                    if pos != expected_len {
                        return Err(Fe26Error::TokenParse);
                    }
                    return Ok(&data[..pos]);
                }
            }
            Err(Fe26Error::TokenParse)
        }
        ParseBound::AtMost(max_len) => {
            if max_len > data.len() {
                return Err(Fe26Error::TokenParse);
            }
            let scan_end = max_len.min(data.len().saturating_sub(1));
            for pos in 0..=scan_end {
                if data[pos] == DELIM {
                    return Ok(&data[..pos]);
                }
            }
            Err(Fe26Error::TokenParse)
        }
    }
}

/// A read cursor over a token, handing out field slices and advancing past
/// the delimiter that follows each one.
pub(crate) struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Byte offset into the original input the reader has advanced to.
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    /// Parses the next field under `bound`, then advances past it and the
    /// delimiter that terminated it.
    pub(crate) fn field(&mut self, bound: ParseBound) -> Result<&'a [u8], Fe26Error> {
        let previous_pos = self.pos;
        let field = parse_field(self.remaining(), bound)?;
        self.pos += field.len() + 1;
        debug_assert!(self.pos > previous_pos);
        Ok(field)
    }

    /// Consumes and returns everything left, without requiring a trailing
    /// delimiter. Used for the last field of a token.
    pub(crate) fn tail(&mut self) -> &'a [u8] {
        let tail = self.remaining();
        self.pos = self.data.len();
        tail
    }
}
