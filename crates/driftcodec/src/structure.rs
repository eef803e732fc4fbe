// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Structural instances and the schema reconciliation algorithm.
//!
//! A [`Structure`] decodes one composite value against its current
//! [`SchemaDescriptor`], tolerating drift between the descriptor and the
//! serialized layout: fields added since the file was written stay at
//! their default, fields removed from the descriptor are skipped by their
//! recorded byte size, and reordered fields are found by forward name
//! search. Encoding always emits the canonical current layout, so no
//! reconciliation happens on write.

use crate::codec::{field, ByteReader, ByteWriter};
use crate::document::Document;
use crate::error::Result;
use crate::layout::{LayoutNode, LayoutWindow};
use crate::policy::{self, MAX_DEPTH_LEVEL};
use crate::refs::ObjectRef;
use crate::schema::{FieldDescriptor, FieldKind, SchemaDescriptor};
use crate::value::Value;
use std::fmt;
use std::sync::Arc;

/// One composite value being decoded, encoded, exported or walked.
///
/// The slot array is positionally aligned 1:1 with the descriptor's field
/// list and its length never changes. Instances are created fresh per
/// decoded value (one per nested composite, recursively) and discarded
/// after use; a failed decode leaves the instance partially populated and
/// it must be thrown away.
#[derive(Debug, Clone, PartialEq)]
pub struct Structure {
    depth: u32,
    descriptor: Arc<SchemaDescriptor>,
    fields: Vec<Value>,
}

impl Structure {
    /// Create an instance with every slot at its default.
    ///
    /// `depth` is fixed for the instance's lifetime; nested instances are
    /// created one level deeper by the field codec.
    pub fn new(descriptor: Arc<SchemaDescriptor>, depth: u32) -> Self {
        let fields = vec![Value::Null; descriptor.field_count()];
        Self {
            depth,
            descriptor,
            fields,
        }
    }

    /// Nesting depth assigned at construction.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// The shared schema descriptor.
    pub fn descriptor(&self) -> &Arc<SchemaDescriptor> {
        &self.descriptor
    }

    /// Decoded field slots, positionally aligned with the descriptor.
    pub fn fields(&self) -> &[Value] {
        &self.fields
    }

    /// Slot lookup by field name.
    pub fn field_value(&self, name: &str) -> Option<&Value> {
        self.descriptor.field_index(name).map(|i| &self.fields[i])
    }

    /// `"{namespace}.{name}"`, or `"{name}"` for an empty namespace.
    pub fn display_name(&self) -> String {
        self.descriptor.display_name()
    }

    /// Decode positionally, without layout metadata.
    ///
    /// The stream is assumed to be shaped exactly like the descriptor;
    /// only the depth policy can exclude fields.
    pub fn decode(&mut self, reader: &mut ByteReader<'_>) -> Result<()> {
        let descriptor = Arc::clone(&self.descriptor);
        for (i, field) in descriptor.fields().iter().enumerate() {
            if self.is_available(field) {
                self.fields[i] = field::decode(reader, self.depth, field, None)?;
            }
        }
        Ok(())
    }

    /// Decode with layout metadata, reconciling descriptor and layout.
    ///
    /// `cursor` indexes into `nodes` and is local to this call. For each
    /// descriptor field, the first node at `depth + 1` matching its name
    /// is searched forward from the cursor:
    ///
    /// - no match: the field is absent from this serialized value; the
    ///   slot stays default, no bytes are consumed and the cursor does not
    ///   move;
    /// - match: unknown sibling nodes before it are skipped by their
    ///   recorded subtree byte size, the field decodes with its node
    ///   window, and the cursor steps past the matched subtree.
    ///
    /// Forward-only matching means duplicate sibling names resolve to the
    /// first match from the cursor and the cursor never backtracks.
    pub fn decode_with_layout(
        &mut self,
        reader: &mut ByteReader<'_>,
        nodes: &[LayoutNode],
        mut cursor: usize,
    ) -> Result<()> {
        let descriptor = Arc::clone(&self.descriptor);
        let child_depth = self.depth + 1;
        for (i, field) in descriptor.fields().iter().enumerate() {
            if !self.is_available(field) {
                continue;
            }
            let start = cursor.min(nodes.len());
            let found = nodes[start..]
                .iter()
                .position(|n| n.depth == child_depth && n.name == field.name)
                .map(|p| p + start);
            let Some(found) = found else {
                log::debug!(
                    "[Structure::decode_with_layout] {}: field '{}' absent from layout, default retained",
                    self.descriptor.display_name(),
                    field.name
                );
                continue;
            };
            while cursor < found {
                if nodes[cursor].depth == child_depth {
                    // Subtree size includes the descendants; skip once.
                    log::debug!(
                        "[Structure::decode_with_layout] {}: skipping unknown field '{}' ({} bytes)",
                        self.descriptor.display_name(),
                        nodes[cursor].name,
                        nodes[cursor].byte_size
                    );
                    reader.skip(nodes[cursor].byte_size as usize)?;
                }
                cursor += 1;
            }
            self.fields[i] =
                field::decode(reader, self.depth, field, Some(LayoutWindow::new(nodes, cursor)))?;
            // Step past the matched subtree.
            cursor += 1;
            while cursor < nodes.len() && nodes[cursor].depth > child_depth {
                cursor += 1;
            }
        }
        Ok(())
    }

    /// Encode in the canonical current layout.
    ///
    /// Unpopulated slots write their zero/default wire shape; the depth
    /// policy excludes exactly the fields it excluded on decode, keeping
    /// writer and reader consistent.
    pub fn encode(&self, writer: &mut ByteWriter) -> Result<()> {
        for (i, field) in self.descriptor.fields().iter().enumerate() {
            if self.is_available(field) {
                field::encode(writer, self.depth, field, &self.fields[i])?;
            }
        }
        Ok(())
    }

    /// Export available fields into an ordered document.
    ///
    /// A slot whose export is the omit sentinel contributes no key.
    pub fn export(&self) -> Document {
        let mut document = Document::new();
        for (i, field) in self.descriptor.fields().iter().enumerate() {
            if self.is_available(field) {
                if let Some(value) = field::export(&self.fields[i]) {
                    document.add(field.name.clone(), value);
                }
            }
        }
        document
    }

    /// Collect every cross-object reference reachable from this value,
    /// depth-first in field order.
    pub fn collect_dependencies(&self, out: &mut Vec<ObjectRef>) {
        for (i, field) in self.descriptor.fields().iter().enumerate() {
            if self.is_available(field) {
                field::collect_dependencies(&self.fields[i], out);
            }
        }
    }

    /// Collect dependencies into a fresh vector.
    ///
    /// Pure function of the current slot contents; repeatable.
    pub fn dependencies(&self) -> Vec<ObjectRef> {
        let mut out = Vec::new();
        self.collect_dependencies(&mut out);
        out
    }

    /// Extract the reference held by a pointer-typed structure.
    pub fn as_reference(&self) -> Option<ObjectRef> {
        if !self.descriptor.is_reference() {
            return None;
        }
        let file_id = self.field_value("m_FileID")?.as_i32()?;
        let path = self.field_value("m_PathID")?;
        let path_id = path.as_i64().or_else(|| path.as_i32().map(i64::from))?;
        Some(ObjectRef::new(file_id, path_id))
    }

    /// Depth-guard availability, applied identically in decode, encode,
    /// export and dependency walks.
    fn is_available(&self, field: &FieldDescriptor) -> bool {
        if self.depth < MAX_DEPTH_LEVEL {
            return true;
        }
        if field.is_array {
            return false;
        }
        match &field.kind {
            FieldKind::Complex(nested) => {
                policy::is_engine_struct(nested.namespace(), nested.name())
            }
            FieldKind::Primitive(_) => true,
        }
    }
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
