//! JSON Schema the merged manifest document must satisfy

use crate::error::{Error, Result};

pub const MANIFEST_SCHEMA: &str = r##"{
  "$schema": "http://json-schema.org/draft-07/schema#",
  "type": "object",
  "required": ["project", "properties", "assets"],
  "properties": {
    "project": { "type": "string", "minLength": 1 },
    "bundles": { "$ref": "#/definitions/identifiers" },
    "filters": { "$ref": "#/definitions/identifiers" },
    "shortcodes": { "$ref": "#/definitions/identifiers" },
    "collections": { "$ref": "#/definitions/identifiers" },
    "plugins": { "$ref": "#/definitions/identifiers" },
    "markdownPlugins": { "$ref": "#/definitions/identifiers" },
    "properties": {
      "type": "object",
      "required": ["input", "output", "data", "includes", "configFile"],
      "properties": {
        "input": { "$ref": "#/definitions/segment" },
        "output": { "$ref": "#/definitions/segment" },
        "data": { "$ref": "#/definitions/segment" },
        "includes": { "$ref": "#/definitions/segment" },
        "configFile": { "$ref": "#/definitions/segment" }
      }
    },
    "assets": {
      "type": "object",
      "required": ["css", "js", "img"],
      "properties": {
        "parent": { "type": "string" },
        "css": { "$ref": "#/definitions/segment" },
        "js": { "$ref": "#/definitions/segment" },
        "img": { "$ref": "#/definitions/segment" }
      }
    }
  },
  "definitions": {
    "identifiers": {
      "type": "array",
      "items": { "type": "string", "minLength": 1 }
    },
    "segment": { "type": "string", "minLength": 1 }
  }
}"##;

/// Validate a value against a JSON schema.
pub fn validate_with_schema(value: &serde_json::Value, schema: &str) -> Result<()> {
    let schema_value: serde_json::Value = serde_json::from_str(schema)?;

    let validator = jsonschema::validator_for(&schema_value).map_err(|e| {
        Error::Other(anyhow::anyhow!("Invalid JSON schema: {}", e))
    })?;

    let errors: Vec<String> =
        validator.iter_errors(value).map(|error| error.to_string()).collect();

    if !errors.is_empty() {
        return Err(Error::InvalidManifest(errors.join("; ")));
    }

    Ok(())
}

/// Validate a manifest document against the embedded manifest schema.
pub fn validate_manifest_document(value: &serde_json::Value) -> Result<()> {
    validate_with_schema(value, MANIFEST_SCHEMA)
}
