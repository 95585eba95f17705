// Copyright 2025 Cowboy AI, LLC.

//! Configuration for the operator façade

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::PredicateResult;

/// Meaning of the `xor` operator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum XorSemantics {
    /// True when exactly one operand is true
    #[default]
    Exclusive,
    /// Same as `or`: true when at least one operand is true.
    ///
    /// Kept for callers that depend on the historical behavior of `xor`.
    InclusiveLegacy,
}

/// Settings for [`PredicateOperations`](crate::PredicateOperations)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OperationsConfig {
    /// How `xor` combines its operands
    pub xor_semantics: XorSemantics,
}

impl OperationsConfig {
    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> PredicateResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the `xor` semantics
    pub fn with_xor_semantics(mut self, xor_semantics: XorSemantics) -> Self {
        self.xor_semantics = xor_semantics;
        self
    }

    /// JSON schema describing this configuration
    pub fn json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(OperationsConfig)
    }
}
