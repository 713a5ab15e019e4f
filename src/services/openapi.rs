//! OpenAPI document
//!
//! Hand-built OpenAPI 3 spec for the classifier endpoints, served as JSON.
//! Properties guarded by a uniqueness rule are marked with an
//! `isUnique: true` extension so generated clients can surface the
//! constraint.

use crate::core::UniqueRule;
use crate::dtos::LanguageDTO;
use axum::Json;
use serde_json::{Value, json};

/// GET /api-docs/openapi.json
pub async fn openapi_document() -> Json<Value> {
    Json(build_document())
}

/// snake_case column name to the camelCase property name used on the wire.
fn camel(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;

    for ch in field.chars() {
        if ch == '_' {
            upper_next = true;
            continue;
        }
        out.push(if upper_next {
            ch.to_ascii_uppercase()
        } else {
            ch
        });
        upper_next = false;
    }

    out
}

/// Marks every property guarded by a uniqueness rule.
fn mark_unique_fields<D>(schema: &mut Value, rules: &[UniqueRule<D>]) {
    let Some(properties) = schema
        .get_mut("properties")
        .and_then(Value::as_object_mut)
    else {
        return;
    };

    for rule in rules {
        if let Some(Value::Object(property)) = properties.get_mut(&camel(rule.field)) {
            property.insert("isUnique".to_string(), json!(true));
        }
    }
}

fn language_schema() -> Value {
    let mut schema = json!({
        "type": "object",
        "required": ["name", "alpha2"],
        "properties": {
            "id": {
                "type": "integer",
                "description": "ID"
            },
            "name": {
                "type": "string",
                "maxLength": 50,
                "description": "ISO language name"
            },
            "alpha2": {
                "type": "string",
                "pattern": "^[a-z]{2}$",
                "description": "ISO 639-1 alpha-2 code"
            },
            "notes": {
                "type": ["string", "null"],
                "description": "Language notes"
            },
            "digitalCode": {
                "type": ["string", "null"],
                "pattern": "^$|^[0-9]{3}$",
                "description": "The digital code consisting of 3 Arabic numerals"
            }
        }
    });

    mark_unique_fields(&mut schema, LanguageDTO::UNIQUE_RULES);

    schema
}

fn build_document() -> Value {
    let id_parameter = json!({
        "name": "id",
        "in": "path",
        "required": true,
        "schema": { "type": "integer" }
    });
    let schema_ref = json!({ "$ref": "#/components/schemas/LanguageDTO" });

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "RoboSvc classifiers API",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "Generic CRUD over classifier tables"
        },
        "paths": {
            "/api/Languages": {
                "get": {
                    "operationId": "listLanguages",
                    "tags": ["Languages"],
                    "responses": {
                        "200": {
                            "description": "All Languages rows",
                            "content": { "application/json": {
                                "schema": { "type": "array", "items": schema_ref.clone() }
                            } }
                        }
                    }
                },
                "post": {
                    "operationId": "createLanguage",
                    "tags": ["Languages"],
                    "requestBody": {
                        "required": true,
                        "content": { "application/json": { "schema": schema_ref.clone() } }
                    },
                    "responses": {
                        "201": {
                            "description": "Created; Location points at the new row",
                            "content": { "application/json": { "schema": schema_ref.clone() } }
                        },
                        "400": { "description": "Validation failure with per-field messages" }
                    }
                }
            },
            "/api/Languages/{id}": {
                "get": {
                    "operationId": "getLanguage",
                    "tags": ["Languages"],
                    "parameters": [id_parameter.clone()],
                    "responses": {
                        "200": {
                            "description": "The Languages row with the given ID",
                            "content": { "application/json": { "schema": schema_ref.clone() } }
                        },
                        "404": { "description": "No row with the given ID" }
                    }
                },
                "put": {
                    "operationId": "updateLanguage",
                    "tags": ["Languages"],
                    "parameters": [id_parameter.clone()],
                    "requestBody": {
                        "required": true,
                        "content": { "application/json": { "schema": schema_ref.clone() } }
                    },
                    "responses": {
                        "204": { "description": "Replaced" },
                        "400": { "description": "ID mismatch or validation failure" },
                        "404": { "description": "No row with the given ID" }
                    }
                },
                "delete": {
                    "operationId": "deleteLanguage",
                    "tags": ["Languages"],
                    "parameters": [id_parameter.clone()],
                    "responses": {
                        "204": { "description": "Deleted" },
                        "404": { "description": "No row with the given ID" }
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "LanguageDTO": language_schema()
            }
        }
    })
}
