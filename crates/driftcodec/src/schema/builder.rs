// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Fluent builder API for SchemaDescriptor.

use crate::schema::{FieldDescriptor, FieldKind, PrimitiveKind, SchemaDescriptor};
use std::sync::Arc;

/// Builder for creating SchemaDescriptor instances.
#[derive(Debug)]
pub struct SchemaDescriptorBuilder {
    namespace: String,
    name: String,
    fields: Vec<FieldDescriptor>,
}

impl SchemaDescriptorBuilder {
    /// Create a new builder for a composite type.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            namespace: String::new(),
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Set the type namespace.
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Add a primitive scalar field.
    pub fn field(mut self, name: impl Into<String>, kind: PrimitiveKind) -> Self {
        self.fields
            .push(FieldDescriptor::new(name, FieldKind::Primitive(kind)));
        self
    }

    /// Add a string field.
    pub fn string_field(self, name: impl Into<String>) -> Self {
        self.field(name, PrimitiveKind::String)
    }

    /// Add an array-of-primitive field.
    pub fn array_field(mut self, name: impl Into<String>, kind: PrimitiveKind) -> Self {
        self.fields
            .push(FieldDescriptor::new(name, FieldKind::Primitive(kind)).array());
        self
    }

    /// Add a nested composite field.
    pub fn complex_field(
        mut self,
        name: impl Into<String>,
        nested: Arc<SchemaDescriptor>,
    ) -> Self {
        self.fields
            .push(FieldDescriptor::new(name, FieldKind::Complex(nested)));
        self
    }

    /// Add an array-of-composite field.
    pub fn complex_array_field(
        mut self,
        name: impl Into<String>,
        nested: Arc<SchemaDescriptor>,
    ) -> Self {
        self.fields
            .push(FieldDescriptor::new(name, FieldKind::Complex(nested)).array());
        self
    }

    /// Build the SchemaDescriptor.
    pub fn build(self) -> SchemaDescriptor {
        SchemaDescriptor::new(self.namespace, self.name, self.fields)
    }
}
