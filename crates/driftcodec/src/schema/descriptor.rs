// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Schema descriptors for runtime-known composite types.

use std::sync::Arc;

/// Primitive type kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Bool,
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
    String,
}

impl PrimitiveKind {
    /// Get the fixed wire size in bytes (None for strings).
    pub fn size(&self) -> Option<usize> {
        match self {
            Self::Bool | Self::U8 | Self::I8 => Some(1),
            Self::U16 | Self::I16 => Some(2),
            Self::U32 | Self::I32 | Self::F32 => Some(4),
            Self::U64 | Self::I64 | Self::F64 => Some(8),
            Self::String => None,
        }
    }
}

/// Field element kind: a closed variant, dispatched once per field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// Scalar primitive.
    Primitive(PrimitiveKind),
    /// Nested composite with its own descriptor.
    Complex(Arc<SchemaDescriptor>),
}

/// Field descriptor for one member of a composite type.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    /// Field name, matched against layout node names during reconciliation.
    pub name: String,
    /// Array flag. The element shape is given by `kind`.
    pub is_array: bool,
    /// Element kind.
    pub kind: FieldKind,
}

impl FieldDescriptor {
    /// Create a scalar field descriptor.
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            is_array: false,
            kind,
        }
    }

    /// Mark as array.
    pub fn array(mut self) -> Self {
        self.is_array = true;
        self
    }

    /// Check if this field nests a composite.
    pub fn is_complex(&self) -> bool {
        matches!(self.kind, FieldKind::Complex(_))
    }
}

/// An immutable, ordered field list for one composite type.
///
/// Many structural instances reference one descriptor over a decode
/// session; share it with `Arc`, never mutate after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaDescriptor {
    namespace: String,
    name: String,
    fields: Vec<FieldDescriptor>,
}

impl SchemaDescriptor {
    /// Create a new descriptor.
    pub fn new(
        namespace: impl Into<String>,
        name: impl Into<String>,
        fields: Vec<FieldDescriptor>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            fields,
        }
    }

    /// Type namespace (may be empty).
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of fields.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// All fields, in declaration order.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Get field by index.
    pub fn field(&self, index: usize) -> Option<&FieldDescriptor> {
        self.fields.get(index)
    }

    /// Get field index by name.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// `"{namespace}.{name}"`, or just `"{name}"` when the namespace is empty.
    pub fn display_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }

    /// Check if this type is a cross-object pointer (`PPtr<...>` shape).
    ///
    /// Pointer structures decode like any other composite; dependency
    /// enumeration extracts an [`crate::ObjectRef`] from them.
    pub fn is_reference(&self) -> bool {
        self.name.starts_with("PPtr<") && self.name.ends_with('>')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_size() {
        assert_eq!(PrimitiveKind::Bool.size(), Some(1));
        assert_eq!(PrimitiveKind::U32.size(), Some(4));
        assert_eq!(PrimitiveKind::F64.size(), Some(8));
        assert_eq!(PrimitiveKind::String.size(), None);
    }

    #[test]
    fn test_field_lookup() {
        let desc = SchemaDescriptor::new(
            "",
            "Point",
            vec![
                FieldDescriptor::new("x", FieldKind::Primitive(PrimitiveKind::F32)),
                FieldDescriptor::new("y", FieldKind::Primitive(PrimitiveKind::F32)),
            ],
        );
        assert_eq!(desc.field_count(), 2);
        assert_eq!(desc.field_index("y"), Some(1));
        assert!(desc.field(2).is_none());
        assert!(!desc.field(0).unwrap().is_complex());
    }

    #[test]
    fn test_display_name() {
        let plain = SchemaDescriptor::new("", "Health", vec![]);
        assert_eq!(plain.display_name(), "Health");

        let namespaced = SchemaDescriptor::new("UnityEngine", "Vector3", vec![]);
        assert_eq!(namespaced.display_name(), "UnityEngine.Vector3");
    }

    #[test]
    fn test_is_reference() {
        let pointer = SchemaDescriptor::new("UnityEngine", "PPtr<Material>", vec![]);
        assert!(pointer.is_reference());

        let plain = SchemaDescriptor::new("UnityEngine", "Material", vec![]);
        assert!(!plain.is_reference());
    }
}
