// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Ordered document model for human-readable export.

use std::fmt;

/// An exported value.
#[derive(Debug, Clone, PartialEq)]
pub enum DocValue {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(String),
    Seq(Vec<DocValue>),
    Map(Document),
}

/// An insertion-ordered key-to-value mapping.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    entries: Vec<(String, DocValue)>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a key. Order of insertion is preserved on iteration.
    pub fn add(&mut self, key: impl Into<String>, value: DocValue) {
        self.entries.push((key.into(), value));
    }

    /// Look up the first entry with this key.
    pub fn get(&self, key: &str) -> Option<&DocValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the document has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DocValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

fn fmt_value(value: &DocValue, indent: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match value {
        DocValue::Bool(v) => write!(f, "{}", v),
        DocValue::Int(v) => write!(f, "{}", v),
        DocValue::UInt(v) => write!(f, "{}", v),
        DocValue::Float(v) => write!(f, "{}", v),
        DocValue::Str(v) => write!(f, "{}", v),
        DocValue::Seq(items) => {
            for item in items {
                writeln!(f)?;
                write!(f, "{:width$}- ", "", width = indent)?;
                fmt_value(item, indent + 2, f)?;
            }
            Ok(())
        }
        DocValue::Map(doc) => {
            for (key, item) in doc.iter() {
                writeln!(f)?;
                write!(f, "{:width$}{}: ", "", key, width = indent)?;
                fmt_value(item, indent + 2, f)?;
            }
            Ok(())
        }
    }
}

impl fmt::Display for Document {
    /// YAML-flavored rendering, for diagnostics only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: ", key)?;
            fmt_value(value, 2, f)?;
        }
        Ok(())
    }
}
