// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Runtime schema descriptors.
//!
//! A [`SchemaDescriptor`] is the *current* definition of a composite type:
//! an ordered, immutable field list shared (via `Arc`) by every structural
//! instance of that type. The serialized stream may have been produced
//! against an older or newer definition; reconciling the two is the job of
//! [`crate::structure::Structure`].

mod builder;
mod descriptor;

pub use builder::SchemaDescriptorBuilder;
pub use descriptor::{FieldDescriptor, FieldKind, PrimitiveKind, SchemaDescriptor};
