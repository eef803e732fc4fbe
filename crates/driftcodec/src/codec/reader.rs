// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Forward-only binary reader.

use crate::error::{CodecError, Result};

/// Byte order of a serialized stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endian {
    #[default]
    Little,
    Big,
}

/// Bounds-checked reader over a byte slice.
///
/// The cursor advances strictly monotonically; there is no seek-backward.
/// `skip` and `align` move the cursor without touching the bytes, which is
/// how unknown layout subtrees are passed over.
#[derive(Debug)]
pub struct ByteReader<'a> {
    buffer: &'a [u8],
    offset: usize,
    endian: Endian,
}

impl<'a> ByteReader<'a> {
    /// Create a reader over `buffer`.
    pub fn new(buffer: &'a [u8], endian: Endian) -> Self {
        Self {
            buffer,
            offset: 0,
            endian,
        }
    }

    /// Current cursor position.
    pub fn position(&self) -> usize {
        self.offset
    }

    /// Bytes left before the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.offset)
    }

    /// Skip exactly `count` bytes.
    pub fn skip(&mut self, count: usize) -> Result<()> {
        if count > self.remaining() {
            return Err(CodecError::OutOfBytes {
                need: count,
                have: self.remaining(),
            });
        }
        self.offset += count;
        Ok(())
    }

    /// Advance the cursor to the next multiple of `alignment`.
    ///
    /// May land past the end of the buffer; the next read reports the
    /// shortfall. Streams are allowed to end on an unpadded tail.
    pub fn align(&mut self, alignment: usize) {
        self.offset = (self.offset + alignment - 1) & !(alignment - 1);
    }

    /// Read `count` raw bytes.
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8]> {
        if self.offset + count > self.buffer.len() {
            return Err(CodecError::OutOfBytes {
                need: count,
                have: self.remaining(),
            });
        }
        let slice = &self.buffer[self.offset..self.offset + count];
        self.offset += count;
        Ok(slice)
    }

    /// Read a bool (one byte, non-zero is true).
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_bytes(1)?[0] != 0)
    }

    /// Read a u8.
    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_bytes(1)?[0])
    }

    /// Read an i8.
    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.read_bytes(1)?[0] as i8)
    }

    /// Read a u16.
    pub fn read_u16(&mut self) -> Result<u16> {
        let b = self.read_bytes(2)?;
        Ok(match self.endian {
            Endian::Little => u16::from_le_bytes([b[0], b[1]]),
            Endian::Big => u16::from_be_bytes([b[0], b[1]]),
        })
    }

    /// Read an i16.
    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(self.read_u16()? as i16)
    }

    /// Read a u32.
    pub fn read_u32(&mut self) -> Result<u32> {
        let b = self.read_bytes(4)?;
        Ok(match self.endian {
            Endian::Little => u32::from_le_bytes([b[0], b[1], b[2], b[3]]),
            Endian::Big => u32::from_be_bytes([b[0], b[1], b[2], b[3]]),
        })
    }

    /// Read an i32.
    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(self.read_u32()? as i32)
    }

    /// Read a u64.
    pub fn read_u64(&mut self) -> Result<u64> {
        let b = self.read_bytes(8)?;
        Ok(match self.endian {
            Endian::Little => {
                u64::from_le_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]])
            }
            Endian::Big => u64::from_be_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]]),
        })
    }

    /// Read an i64.
    pub fn read_i64(&mut self) -> Result<i64> {
        Ok(self.read_u64()? as i64)
    }

    /// Read an f32.
    pub fn read_f32(&mut self) -> Result<f32> {
        Ok(f32::from_bits(self.read_u32()?))
    }

    /// Read an f64.
    pub fn read_f64(&mut self) -> Result<f64> {
        Ok(f64::from_bits(self.read_u64()?))
    }

    /// Read a length-prefixed UTF-8 string, then align to 4.
    pub fn read_string(&mut self) -> Result<String> {
        let length = self.read_u32()? as usize;
        if length > self.remaining() {
            return Err(CodecError::LengthOutOfRange {
                length,
                remaining: self.remaining(),
            });
        }
        let bytes = self.read_bytes(length)?;
        let text = String::from_utf8(bytes.to_vec())?;
        self.align(4);
        Ok(text)
    }
}
