//! Common types used throughout the SDK
//!
//! This module contains shared type definitions, type aliases,
//! and utility types used across multiple modules.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// One raw item from a page envelope's `data` array
pub type Record = JsonObject;

// ============================================================================
// Resources
// ============================================================================

/// Top-level API resource, i.e. the `{resourceType}` path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Cards,
    Sets,
    Types,
    Subtypes,
    Supertypes,
    Rarities,
}

impl Resource {
    /// Path segment under the base URL
    pub fn path(self) -> &'static str {
        match self {
            Resource::Cards => "cards",
            Resource::Sets => "sets",
            Resource::Types => "types",
            Resource::Subtypes => "subtypes",
            Resource::Supertypes => "supertypes",
            Resource::Rarities => "rarities",
        }
    }

    /// Whether this resource answers with page envelopes
    pub fn is_paginated(self) -> bool {
        matches!(self, Resource::Cards | Resource::Sets)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
