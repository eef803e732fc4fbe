// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Binary wire codec.
//!
//! [`ByteReader`] and [`ByteWriter`] are the forward-only stream
//! primitives; [`field`] is the leaf field codec that decodes, encodes,
//! exports and walks one field value, recursing into nested structures.
//!
//! Wire format: fixed-width scalars in the stream's endianness, strings as
//! u32 length + UTF-8 bytes padded to 4, arrays as u32 count + elements
//! padded to 4. The stream cursor only ever moves forward.

pub mod field;
mod reader;
mod writer;

pub use reader::{ByteReader, Endian};
pub use writer::ByteWriter;
