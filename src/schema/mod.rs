//! # Help Document Navigation
//!
//! Extracts request-body properties from an OpenAPI help fragment.
//!
//! The backend's help endpoints return a document shaped like
//! `{ openapi: { paths: { "<key>": { post: { requestBody: ... } } } } }`.
//! Navigation follows one fixed path through that tree; the first absent
//! segment fails the whole operation, there is no fallback schema.

pub mod attrs;

pub use attrs::{FieldAttr, OpenApiExpander, SchemaExpander};

use crate::error::{Error, Result};
use serde_json::{Map, Value};

/// Step one segment into the document, failing with the segment name
fn navigate<'a>(value: &'a Value, segment: &str, path_key: &str) -> Result<&'a Value> {
    value
        .get(segment)
        .ok_or_else(|| Error::schema_not_found(path_key, segment))
}

/// Extract the request-body properties for `path_key` from a help document
///
/// Navigates the fixed path
/// `openapi.paths[path_key].post.requestBody.content["application/json"].schema.properties`
/// and returns the properties mapping by reference. The document is not
/// mutated and nothing is cached.
///
/// # Errors
///
/// Returns [`Error::SchemaNotFound`] naming the first absent segment when
/// any step of the fixed path is missing, including `path_key` itself, or
/// when `properties` is not an object.
pub fn request_properties<'a>(
    document: &'a Value,
    path_key: &str,
) -> Result<&'a Map<String, Value>> {
    let openapi = navigate(document, "openapi", path_key)?;
    let paths = navigate(openapi, "paths", path_key)?;
    let path_item = navigate(paths, path_key, path_key)?;
    let post = navigate(path_item, "post", path_key)?;
    let request_body = navigate(post, "requestBody", path_key)?;
    let content = navigate(request_body, "content", path_key)?;
    let media = navigate(content, "application/json", path_key)?;
    let schema = navigate(media, "schema", path_key)?;
    let properties = navigate(schema, "properties", path_key)?;

    properties
        .as_object()
        .ok_or_else(|| Error::schema_not_found(path_key, "properties"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn help_document() -> Value {
        json!({
            "openapi": {
                "openapi": "3.0.2",
                "paths": {
                    "/roles/{role}": {
                        "post": {
                            "requestBody": {
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "properties": {
                                                "key_type": { "type": "string" },
                                                "ttl": { "type": "integer", "format": "seconds" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        })
    }

    #[test]
    fn test_extracts_properties_for_path_key() {
        let document = help_document();
        let props = request_properties(&document, "/roles/{role}")
            .expect("Navigation should succeed for a well-formed document");

        assert_eq!(props.len(), 2);
        assert!(props.contains_key("key_type"));
        assert!(props.contains_key("ttl"));
    }

    #[test]
    fn test_missing_path_key_fails() {
        let document = help_document();
        let err = request_properties(&document, "/roles/{name}").unwrap_err();

        assert!(
            matches!(
                &err,
                Error::SchemaNotFound { path_key, missing }
                    if path_key == "/roles/{name}" && missing == "/roles/{name}"
            ),
            "Expected a schema-not-found error for the absent key, got: {:?}",
            err
        );
    }

    #[test]
    fn test_each_missing_segment_is_named() {
        // (document, expected missing segment)
        let cases = vec![
            (json!({}), "openapi"),
            (json!({ "openapi": {} }), "paths"),
            (json!({ "openapi": { "paths": {} } }), "/roles/{role}"),
            (
                json!({ "openapi": { "paths": { "/roles/{role}": {} } } }),
                "post",
            ),
            (
                json!({ "openapi": { "paths": { "/roles/{role}": { "post": {} } } } }),
                "requestBody",
            ),
            (
                json!({ "openapi": { "paths": { "/roles/{role}": { "post": { "requestBody": {} } } } } }),
                "content",
            ),
            (
                json!({ "openapi": { "paths": { "/roles/{role}": { "post": { "requestBody": { "content": {} } } } } } }),
                "application/json",
            ),
            (
                json!({ "openapi": { "paths": { "/roles/{role}": { "post": { "requestBody": { "content": { "application/json": {} } } } } } } }),
                "schema",
            ),
            (
                json!({ "openapi": { "paths": { "/roles/{role}": { "post": { "requestBody": { "content": { "application/json": { "schema": {} } } } } } } } }),
                "properties",
            ),
        ];

        for (document, expected_missing) in cases {
            let err = request_properties(&document, "/roles/{role}").unwrap_err();
            assert!(
                matches!(&err, Error::SchemaNotFound { missing, .. } if missing == expected_missing),
                "Document missing '{}' should name it, got: {:?}",
                expected_missing,
                err
            );
        }
    }

    #[test]
    fn test_malformed_intermediate_fails() {
        // "post" is a string instead of an object; the next step has nothing to read
        let document = json!({
            "openapi": { "paths": { "/config": { "post": "not an object" } } }
        });

        let err = request_properties(&document, "/config").unwrap_err();
        assert!(
            matches!(&err, Error::SchemaNotFound { missing, .. } if missing == "requestBody"),
            "Expected navigation past a malformed segment to fail, got: {:?}",
            err
        );
    }

    #[test]
    fn test_non_object_properties_fails() {
        let document = json!({
            "openapi": {
                "paths": {
                    "/config": {
                        "post": {
                            "requestBody": {
                                "content": {
                                    "application/json": { "schema": { "properties": [1, 2, 3] } }
                                }
                            }
                        }
                    }
                }
            }
        });

        let err = request_properties(&document, "/config").unwrap_err();
        assert!(matches!(&err, Error::SchemaNotFound { missing, .. } if missing == "properties"));
    }

    #[test]
    fn test_document_is_borrowed_not_consumed() {
        let document = help_document();
        let _ = request_properties(&document, "/roles/{role}").expect("first read");
        // Still usable afterwards
        let props = request_properties(&document, "/roles/{role}").expect("second read");
        assert_eq!(props.len(), 2);
    }
}
