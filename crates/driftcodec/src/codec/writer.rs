// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Append-only binary writer.

use crate::codec::Endian;

/// Growable buffer writer, mirror image of [`crate::ByteReader`].
#[derive(Debug)]
pub struct ByteWriter {
    buffer: Vec<u8>,
    endian: Endian,
}

impl ByteWriter {
    /// Create a writer.
    pub fn new(endian: Endian) -> Self {
        Self {
            buffer: Vec::new(),
            endian,
        }
    }

    /// Bytes written so far.
    pub fn position(&self) -> usize {
        self.buffer.len()
    }

    /// Consume the writer, returning the buffer.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }

    /// Zero-pad to the next multiple of `alignment`.
    pub fn align(&mut self, alignment: usize) {
        let padding = (alignment - (self.buffer.len() % alignment)) % alignment;
        self.buffer.extend(std::iter::repeat_n(0, padding));
    }

    /// Append raw bytes.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    /// Write a bool as one byte.
    pub fn write_bool(&mut self, v: bool) {
        self.buffer.push(u8::from(v));
    }

    /// Write a u8.
    pub fn write_u8(&mut self, v: u8) {
        self.buffer.push(v);
    }

    /// Write an i8.
    pub fn write_i8(&mut self, v: i8) {
        self.buffer.push(v as u8);
    }

    /// Write a u16.
    pub fn write_u16(&mut self, v: u16) {
        match self.endian {
            Endian::Little => self.buffer.extend_from_slice(&v.to_le_bytes()),
            Endian::Big => self.buffer.extend_from_slice(&v.to_be_bytes()),
        }
    }

    /// Write an i16.
    pub fn write_i16(&mut self, v: i16) {
        self.write_u16(v as u16);
    }

    /// Write a u32.
    pub fn write_u32(&mut self, v: u32) {
        match self.endian {
            Endian::Little => self.buffer.extend_from_slice(&v.to_le_bytes()),
            Endian::Big => self.buffer.extend_from_slice(&v.to_be_bytes()),
        }
    }

    /// Write an i32.
    pub fn write_i32(&mut self, v: i32) {
        self.write_u32(v as u32);
    }

    /// Write a u64.
    pub fn write_u64(&mut self, v: u64) {
        match self.endian {
            Endian::Little => self.buffer.extend_from_slice(&v.to_le_bytes()),
            Endian::Big => self.buffer.extend_from_slice(&v.to_be_bytes()),
        }
    }

    /// Write an i64.
    pub fn write_i64(&mut self, v: i64) {
        self.write_u64(v as u64);
    }

    /// Write an f32.
    pub fn write_f32(&mut self, v: f32) {
        self.write_u32(v.to_bits());
    }

    /// Write an f64.
    pub fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    /// Write a length-prefixed UTF-8 string, then pad to 4.
    pub fn write_string(&mut self, v: &str) {
        self.write_u32(v.len() as u32);
        self.buffer.extend_from_slice(v.as_bytes());
        self.align(4);
    }
}
