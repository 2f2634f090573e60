//! # Field Attribute Expansion
//!
//! Converts OpenAPI request-body properties into console field metadata.
//!
//! The backend describes each writable field as an OpenAPI property
//! (`type`, `format`, `description`, `enum`, ...). The console renders
//! fields from a flat attribute record per property. The rules here are the
//! ones the console has always applied: `format: seconds` becomes a `ttl`
//! editor, arrays get a compound edit type from their item type, and labels
//! fall back to a humanized form of the wire name.

use heck::{ToTitleCase, ToUpperCamelCase};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Console metadata for one writable field
///
/// Serialized field names are camelCase to match what the console's form
/// layer consumes. Map keys keep the wire name of the property so callers
/// can post values back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldAttr {
    /// Editor widget selector (`string`, `ttl`, `stringKeys`, ...)
    pub edit_type: String,
    /// Raw OpenAPI `type` of the property, when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
    /// Display label, from the backend's display name or derived from the wire name
    pub label: String,
    /// Field description shown as inline help
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    /// Closed set of allowed values, when the property is an enum
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub possible_values: Vec<Value>,
    /// Backend-declared default value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
    /// Property is returned but not writable
    pub read_only: bool,
    /// Property is deprecated by the backend
    pub deprecated: bool,
}

impl FieldAttr {
    /// Minimal attribute for a property whose definition is not an object
    fn string_fallback(name: &str) -> Self {
        Self {
            edit_type: "string".to_string(),
            value_type: None,
            label: name.to_title_case(),
            help_text: None,
            possible_values: Vec::new(),
            default_value: None,
            read_only: false,
            deprecated: false,
        }
    }
}

/// Expands OpenAPI properties into field metadata
///
/// The default implementation is [`OpenApiExpander`]. Consoles with custom
/// form widgets can substitute their own expansion.
pub trait SchemaExpander: Send + Sync {
    /// Expand a `properties` mapping into per-field metadata
    ///
    /// Never fails: odd property shapes degrade to plain string attributes.
    fn expand(&self, props: &Map<String, Value>) -> BTreeMap<String, FieldAttr>;
}

/// Default expansion rules for OpenAPI help fragments
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenApiExpander;

impl SchemaExpander for OpenApiExpander {
    fn expand(&self, props: &Map<String, Value>) -> BTreeMap<String, FieldAttr> {
        props
            .iter()
            .map(|(name, details)| (name.clone(), expand_property(name, details)))
            .collect()
    }
}

/// Expand a single OpenAPI property into a field attribute
fn expand_property(name: &str, details: &Value) -> FieldAttr {
    let Some(details) = details.as_object() else {
        return FieldAttr::string_fallback(name);
    };

    let value_type = details
        .get("type")
        .and_then(Value::as_str)
        .map(str::to_string);

    // Duration fields get the ttl editor; array fields get a compound edit
    // type built from the item type and the capitalized field name
    let edit_type = if details.get("format").and_then(Value::as_str) == Some("seconds") {
        "ttl".to_string()
    } else if let Some(items) = details.get("items") {
        let item_type = items.get("type").and_then(Value::as_str).unwrap_or("string");
        format!("{item_type}{}", name.to_upper_camel_case())
    } else {
        value_type.clone().unwrap_or_else(|| "string".to_string())
    };

    let label = details
        .get("x-vault-displayName")
        .and_then(Value::as_str)
        .map_or_else(|| name.to_title_case(), str::to_string);

    FieldAttr {
        edit_type,
        value_type,
        label,
        help_text: details
            .get("description")
            .and_then(Value::as_str)
            .map(str::to_string),
        possible_values: details
            .get("enum")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default(),
        default_value: details.get("default").cloned(),
        read_only: details
            .get("readOnly")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        deprecated: details
            .get("deprecated")
            .and_then(Value::as_bool)
            .unwrap_or(false),
    }
}
