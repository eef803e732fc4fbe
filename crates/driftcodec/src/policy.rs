// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Recursion-depth availability policy.
//!
//! Recursive or self-referential type graphs are bounded by depth alone:
//! no cycle detection, just a depth counter compared against
//! [`MAX_DEPTH_LEVEL`]. At or beyond the ceiling, array fields and
//! non-whitelisted composite fields stop being read (and, symmetrically,
//! written and exported). Small fixed-shape engine value types may
//! legitimately nest past the guard, so they stay available via a
//! whitelist.
//!
//! Whitelist membership is configuration, not hard-coded policy: the
//! active [`AvailabilityConfig`] lives behind a lock-free `ArcSwap` and can
//! be replaced at runtime or loaded from YAML (feature `config-loaders`).
//!
//! # Example YAML
//!
//! ```yaml
//! # availability.yaml
//! engine_structs:
//!   - { namespace: UnityEngine, name: Vector3 }
//!   - { namespace: UnityEngine, name: Quaternion }
//! ```

use arc_swap::ArcSwap;
use std::sync::{Arc, OnceLock};

/// Depth ceiling for the availability guard.
pub const MAX_DEPTH_LEVEL: u32 = 8;

/// One whitelisted engine value type, identified by namespace + name.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config-loaders", derive(serde::Deserialize))]
pub struct EngineStruct {
    pub namespace: String,
    pub name: String,
}

impl EngineStruct {
    /// Create a whitelist entry.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

/// Whitelist of composite types that stay available past the depth ceiling.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config-loaders", derive(serde::Deserialize))]
#[cfg_attr(feature = "config-loaders", serde(default))]
pub struct AvailabilityConfig {
    pub engine_structs: Vec<EngineStruct>,
}

impl Default for AvailabilityConfig {
    /// The small, non-recursive engine value types of the original system.
    fn default() -> Self {
        const ENGINE_NAMESPACE: &str = "UnityEngine";
        let names = [
            "Vector2",
            "Vector2Int",
            "Vector3",
            "Vector3Int",
            "Vector4",
            "Rect",
            "RectInt",
            "RectOffset",
            "Quaternion",
            "Matrix4x4",
            "Bounds",
            "BoundsInt",
            "Color",
            "Color32",
            "LayerMask",
            "PropertyName",
        ];
        Self {
            engine_structs: names
                .iter()
                .map(|n| EngineStruct::new(ENGINE_NAMESPACE, *n))
                .collect(),
        }
    }
}

impl AvailabilityConfig {
    /// A config with nothing whitelisted.
    pub fn empty() -> Self {
        Self {
            engine_structs: Vec::new(),
        }
    }

    /// Check whitelist membership. The list is small; linear scan.
    pub fn is_engine_struct(&self, namespace: &str, name: &str) -> bool {
        self.engine_structs
            .iter()
            .any(|e| e.namespace == namespace && e.name == name)
    }

    /// Load a config from a YAML file.
    #[cfg(feature = "config-loaders")]
    pub fn from_yaml_file(path: impl AsRef<std::path::Path>) -> Result<Self, crate::ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    /// Parse a config from YAML text.
    #[cfg(feature = "config-loaders")]
    pub fn from_yaml_str(text: &str) -> Result<Self, crate::ConfigError> {
        Ok(serde_yaml::from_str(text)?)
    }
}

static ACTIVE: OnceLock<ArcSwap<AvailabilityConfig>> = OnceLock::new();

fn active_cell() -> &'static ArcSwap<AvailabilityConfig> {
    ACTIVE.get_or_init(|| ArcSwap::from_pointee(AvailabilityConfig::default()))
}

/// Snapshot of the active availability config.
pub fn availability() -> Arc<AvailabilityConfig> {
    active_cell().load_full()
}

/// Replace the active availability config (atomic swap, no lock).
pub fn set_availability(config: AvailabilityConfig) {
    active_cell().store(Arc::new(config));
}

/// Check the active whitelist.
pub fn is_engine_struct(namespace: &str, name: &str) -> bool {
    active_cell().load().is_engine_struct(namespace, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_whitelist() {
        let config = AvailabilityConfig::default();
        assert!(config.is_engine_struct("UnityEngine", "Vector3"));
        assert!(config.is_engine_struct("UnityEngine", "Quaternion"));
        assert!(!config.is_engine_struct("UnityEngine", "GameObject"));
        assert!(!config.is_engine_struct("MyGame", "Vector3"));
    }

    #[test]
    fn test_empty_config() {
        let config = AvailabilityConfig::empty();
        assert!(!config.is_engine_struct("UnityEngine", "Vector3"));
    }

    #[cfg(feature = "config-loaders")]
    #[test]
    fn test_yaml_parse() {
        let text = "engine_structs:\n  - { namespace: Engine, name: Vec3 }\n";
        let config = AvailabilityConfig::from_yaml_str(text).expect("parse");
        assert!(config.is_engine_struct("Engine", "Vec3"));
        assert!(!config.is_engine_struct("UnityEngine", "Vector3"));
    }
}
