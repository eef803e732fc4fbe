// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Cross-object references.

use std::fmt;

/// A reference to another serialized object.
///
/// `file_id` selects the containing file (0 = same file), `path_id` the
/// object within it. A zero `path_id` is the null reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ObjectRef {
    pub file_id: i32,
    pub path_id: i64,
}

impl ObjectRef {
    /// Create a reference.
    pub fn new(file_id: i32, path_id: i64) -> Self {
        Self { file_id, path_id }
    }

    /// Check for the null reference.
    pub fn is_null(&self) -> bool {
        self.path_id == 0
    }
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}]", self.file_id, self.path_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_reference() {
        assert!(ObjectRef::default().is_null());
        assert!(ObjectRef::new(2, 0).is_null());
        assert!(!ObjectRef::new(0, 17).is_null());
    }

    #[test]
    fn test_display() {
        assert_eq!(ObjectRef::new(1, 42).to_string(), "[1:42]");
    }
}
