// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # driftcodec - Schema-Tolerant Structural Codec
//!
//! Reads and writes instances of a runtime-known composite type from a
//! binary stream whose on-disk layout may have drifted from the current
//! type definition: fields added, removed or reordered across format
//! versions. Decoding reconciles the [`SchemaDescriptor`] against a
//! flattened [`LayoutNode`] sequence describing the actual serialized
//! shape; encoding always emits the canonical current layout.
//!
//! # Features
//!
//! - **SchemaDescriptor**: immutable, `Arc`-shared runtime type description
//! - **Structure**: per-value decode/encode/export/dependency walks
//! - **Reconciliation**: forward-scanning name+depth matching with exact
//!   byte-size skips for unknown fields
//! - **Depth guard**: recursive type graphs bounded by a depth ceiling
//!   with a configurable engine-struct whitelist
//!
//! # Example
//!
//! ```rust
//! use driftcodec::{
//!     ByteReader, ByteWriter, Endian, PrimitiveKind, SchemaDescriptorBuilder, Structure, Value,
//! };
//! use std::sync::Arc;
//!
//! // Current type definition, built at runtime.
//! let descriptor = Arc::new(
//!     SchemaDescriptorBuilder::new("SensorReading")
//!         .field("id", PrimitiveKind::U32)
//!         .field("value", PrimitiveKind::F32)
//!         .build(),
//! );
//!
//! // A stream shaped like the descriptor.
//! let mut writer = ByteWriter::new(Endian::Little);
//! writer.write_u32(7);
//! writer.write_f32(1.5);
//! let bytes = writer.into_bytes();
//!
//! let mut instance = Structure::new(Arc::clone(&descriptor), 0);
//! let mut reader = ByteReader::new(&bytes, Endian::Little);
//! instance.decode(&mut reader)?;
//!
//! assert_eq!(instance.field_value("id"), Some(&Value::U32(7)));
//! # Ok::<(), driftcodec::CodecError>(())
//! ```
//!
//! # Modules Overview
//!
//! - [`schema`] - runtime type descriptors and the fluent builder
//! - [`structure`] - the structural instance and reconciliation (start here)
//! - [`layout`] - flattened layout metadata for one serialized value
//! - [`codec`] - forward-only reader/writer and the leaf field codec
//! - [`policy`] - recursion-depth guard and whitelist configuration
//! - [`document`] - ordered document model for export
//!
//! Decoding is synchronous and single-pass: either a value completes or
//! the error propagates and the partially populated instance is discarded.

/// Binary wire codec (reader, writer, leaf field codec).
pub mod codec;
/// Ordered document model for human-readable export.
pub mod document;
/// Error types.
pub mod error;
/// Flattened layout metadata.
pub mod layout;
/// Recursion-depth availability policy and whitelist configuration.
pub mod policy;
/// Cross-object references.
pub mod refs;
/// Runtime schema descriptors.
pub mod schema;
/// Structural instances and reconciliation.
pub mod structure;
/// Field slot values.
pub mod value;


pub use codec::{ByteReader, ByteWriter, Endian};
pub use document::{DocValue, Document};
#[cfg(feature = "config-loaders")]
pub use error::ConfigError;
pub use error::{CodecError, Result};
pub use layout::{LayoutNode, LayoutWindow};
pub use policy::{
    availability, is_engine_struct, set_availability, AvailabilityConfig, EngineStruct,
    MAX_DEPTH_LEVEL,
};
pub use refs::ObjectRef;
pub use schema::{
    FieldDescriptor, FieldKind, PrimitiveKind, SchemaDescriptor, SchemaDescriptorBuilder,
};
pub use structure::Structure;
pub use value::Value;
