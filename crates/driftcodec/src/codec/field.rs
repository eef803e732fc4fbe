// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Leaf field codec.
//!
//! Decodes, encodes, exports and walks one field value. Dispatch happens
//! once per field on the array flag and the [`FieldKind`] variant; nested
//! composites construct a child [`Structure`] one level deeper and recurse
//! through the same reconciliation the parent used.

use crate::codec::{ByteReader, ByteWriter};
use crate::document::DocValue;
use crate::error::{CodecError, Result};
use crate::layout::LayoutWindow;
use crate::refs::ObjectRef;
use crate::schema::{FieldDescriptor, FieldKind, PrimitiveKind};
use crate::structure::Structure;
use crate::value::Value;
use std::sync::Arc;

/// Decode one field value.
///
/// `depth` is the depth of the *owning* structure; nested composites are
/// created at `depth + 1`. When a layout window is given it points at the
/// field's own node, so nested decodes reconcile against that subtree.
pub fn decode(
    reader: &mut ByteReader<'_>,
    depth: u32,
    field: &FieldDescriptor,
    layout: Option<LayoutWindow<'_>>,
) -> Result<Value> {
    if field.is_array {
        decode_array(reader, depth, field, layout)
    } else {
        decode_scalar(reader, depth, &field.kind, layout)
    }
}

fn decode_array(
    reader: &mut ByteReader<'_>,
    depth: u32,
    field: &FieldDescriptor,
    layout: Option<LayoutWindow<'_>>,
) -> Result<Value> {
    let count = reader.read_u32()? as usize;
    if count > reader.remaining() {
        return Err(CodecError::LengthOutOfRange {
            length: count,
            remaining: reader.remaining(),
        });
    }
    // Array layouts are flat: the element's field nodes are direct
    // children of the array node, written once. Every element reconciles
    // against a window positioned at the first of them.
    let element_layout = layout.and_then(|w| w.first_child());
    let mut items = Vec::with_capacity(count);
    for _ in 0..count {
        items.push(decode_scalar(reader, depth, &field.kind, element_layout)?);
    }
    reader.align(4);
    Ok(Value::Array(items))
}

fn decode_scalar(
    reader: &mut ByteReader<'_>,
    depth: u32,
    kind: &FieldKind,
    layout: Option<LayoutWindow<'_>>,
) -> Result<Value> {
    match kind {
        FieldKind::Primitive(p) => decode_primitive(reader, *p),
        FieldKind::Complex(descriptor) => {
            let mut nested = Structure::new(Arc::clone(descriptor), depth + 1);
            match layout {
                Some(window) => nested.decode_with_layout(reader, window.nodes, window.index)?,
                None => nested.decode(reader)?,
            }
            Ok(Value::Struct(Box::new(nested)))
        }
    }
}

fn decode_primitive(reader: &mut ByteReader<'_>, kind: PrimitiveKind) -> Result<Value> {
    Ok(match kind {
        PrimitiveKind::Bool => Value::Bool(reader.read_bool()?),
        PrimitiveKind::U8 => Value::U8(reader.read_u8()?),
        PrimitiveKind::U16 => Value::U16(reader.read_u16()?),
        PrimitiveKind::U32 => Value::U32(reader.read_u32()?),
        PrimitiveKind::U64 => Value::U64(reader.read_u64()?),
        PrimitiveKind::I8 => Value::I8(reader.read_i8()?),
        PrimitiveKind::I16 => Value::I16(reader.read_i16()?),
        PrimitiveKind::I32 => Value::I32(reader.read_i32()?),
        PrimitiveKind::I64 => Value::I64(reader.read_i64()?),
        PrimitiveKind::F32 => Value::F32(reader.read_f32()?),
        PrimitiveKind::F64 => Value::F64(reader.read_f64()?),
        PrimitiveKind::String => Value::String(reader.read_string()?),
    })
}

/// Encode one field slot in the canonical layout.
///
/// A `Null` slot writes the field's zero/default wire shape so the output
/// is always shaped exactly like the descriptor.
pub fn encode(
    writer: &mut ByteWriter,
    depth: u32,
    field: &FieldDescriptor,
    value: &Value,
) -> Result<()> {
    if field.is_array {
        match value {
            Value::Array(items) => {
                writer.write_u32(items.len() as u32);
                for item in items {
                    encode_scalar(writer, depth, &field.kind, item)?;
                }
            }
            Value::Null => writer.write_u32(0),
            other => {
                return Err(CodecError::TypeMismatch {
                    expected: "array".into(),
                    found: other.kind_name().into(),
                });
            }
        }
        writer.align(4);
        Ok(())
    } else {
        encode_scalar(writer, depth, &field.kind, value)
    }
}

fn encode_scalar(
    writer: &mut ByteWriter,
    depth: u32,
    kind: &FieldKind,
    value: &Value,
) -> Result<()> {
    match kind {
        FieldKind::Primitive(p) => encode_primitive(writer, *p, value),
        FieldKind::Complex(descriptor) => match value {
            Value::Struct(nested) => nested.encode(writer),
            Value::Null => Structure::new(Arc::clone(descriptor), depth + 1).encode(writer),
            other => Err(CodecError::TypeMismatch {
                expected: descriptor.display_name(),
                found: other.kind_name().into(),
            }),
        },
    }
}

fn encode_primitive(writer: &mut ByteWriter, kind: PrimitiveKind, value: &Value) -> Result<()> {
    match (kind, value) {
        (PrimitiveKind::Bool, Value::Bool(v)) => writer.write_bool(*v),
        (PrimitiveKind::U8, Value::U8(v)) => writer.write_u8(*v),
        (PrimitiveKind::U16, Value::U16(v)) => writer.write_u16(*v),
        (PrimitiveKind::U32, Value::U32(v)) => writer.write_u32(*v),
        (PrimitiveKind::U64, Value::U64(v)) => writer.write_u64(*v),
        (PrimitiveKind::I8, Value::I8(v)) => writer.write_i8(*v),
        (PrimitiveKind::I16, Value::I16(v)) => writer.write_i16(*v),
        (PrimitiveKind::I32, Value::I32(v)) => writer.write_i32(*v),
        (PrimitiveKind::I64, Value::I64(v)) => writer.write_i64(*v),
        (PrimitiveKind::F32, Value::F32(v)) => writer.write_f32(*v),
        (PrimitiveKind::F64, Value::F64(v)) => writer.write_f64(*v),
        (PrimitiveKind::String, Value::String(v)) => writer.write_string(v),
        (_, Value::Null) => encode_default(writer, kind),
        (kind, other) => {
            return Err(CodecError::TypeMismatch {
                expected: format!("{:?}", kind),
                found: other.kind_name().into(),
            });
        }
    }
    Ok(())
}

fn encode_default(writer: &mut ByteWriter, kind: PrimitiveKind) {
    match kind {
        PrimitiveKind::Bool => writer.write_bool(false),
        PrimitiveKind::U8 => writer.write_u8(0),
        PrimitiveKind::U16 => writer.write_u16(0),
        PrimitiveKind::U32 => writer.write_u32(0),
        PrimitiveKind::U64 => writer.write_u64(0),
        PrimitiveKind::I8 => writer.write_i8(0),
        PrimitiveKind::I16 => writer.write_i16(0),
        PrimitiveKind::I32 => writer.write_i32(0),
        PrimitiveKind::I64 => writer.write_i64(0),
        PrimitiveKind::F32 => writer.write_f32(0.0),
        PrimitiveKind::F64 => writer.write_f64(0.0),
        PrimitiveKind::String => writer.write_string(""),
    }
}

/// Export one slot for the document model.
///
/// `None` is the omit sentinel: the key is left out of the exported
/// document entirely.
pub fn export(value: &Value) -> Option<DocValue> {
    match value {
        Value::Null => None,
        Value::Bool(v) => Some(DocValue::Bool(*v)),
        Value::U8(v) => Some(DocValue::UInt(u64::from(*v))),
        Value::U16(v) => Some(DocValue::UInt(u64::from(*v))),
        Value::U32(v) => Some(DocValue::UInt(u64::from(*v))),
        Value::U64(v) => Some(DocValue::UInt(*v)),
        Value::I8(v) => Some(DocValue::Int(i64::from(*v))),
        Value::I16(v) => Some(DocValue::Int(i64::from(*v))),
        Value::I32(v) => Some(DocValue::Int(i64::from(*v))),
        Value::I64(v) => Some(DocValue::Int(*v)),
        Value::F32(v) => Some(DocValue::Float(f64::from(*v))),
        Value::F64(v) => Some(DocValue::Float(*v)),
        Value::String(v) => Some(DocValue::Str(v.clone())),
        Value::Struct(nested) => Some(DocValue::Map(nested.export())),
        Value::Array(items) => Some(DocValue::Seq(items.iter().filter_map(export).collect())),
    }
}

/// Push every cross-object reference reachable from this slot, depth-first.
pub fn collect_dependencies(value: &Value, out: &mut Vec<ObjectRef>) {
    match value {
        Value::Struct(nested) => {
            if let Some(reference) = nested.as_reference() {
                out.push(reference);
            } else {
                nested.collect_dependencies(out);
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_dependencies(item, out);
            }
        }
        _ => {}
    }
}
