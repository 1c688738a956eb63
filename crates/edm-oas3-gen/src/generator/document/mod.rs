//! The produced OpenAPI description object.
//!
//! This is the artifact handed to the rendering collaborator: everything
//! implements [`serde::Serialize`] with OpenAPI field spellings, and the
//! path/schema/parameter maps preserve insertion order so rendered output is
//! stable across runs.

mod operations;
mod schema;
mod security;

use indexmap::IndexMap;
use serde::Serialize;

pub use operations::{MediaType, Operation, Parameter, ParameterIn, PathItem, RequestBody, Response};
pub use schema::{ObjectOrReference, SchemaObject, SchemaRef};
pub use security::SecurityScheme;

pub(crate) const JSON_MEDIA_TYPE: &str = "application/json";
pub(crate) const OPENAPI_VERSION: &str = "3.0.3";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Info {
  pub title: String,
  pub version: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Server {
  pub url: String,
}

/// Deduplicated reusable component definitions.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Components {
  #[serde(skip_serializing_if = "IndexMap::is_empty")]
  pub schemas: IndexMap<String, SchemaObject>,
  #[serde(skip_serializing_if = "IndexMap::is_empty")]
  pub parameters: IndexMap<String, Parameter>,
  #[serde(rename = "securitySchemes", skip_serializing_if = "IndexMap::is_empty")]
  pub security_schemes: IndexMap<String, SecurityScheme>,
}

/// A security requirement: scheme name to required scopes.
pub type SecurityRequirement = IndexMap<String, Vec<String>>;

/// The complete generated API description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpenApiDocument {
  pub openapi: String,
  pub info: Info,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub servers: Vec<Server>,
  pub paths: IndexMap<String, PathItem>,
  pub components: Components,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub security: Vec<SecurityRequirement>,
}

impl OpenApiDocument {
  pub(crate) fn new(title: impl Into<String>, base_url: impl Into<String>) -> Self {
    Self {
      openapi: OPENAPI_VERSION.to_string(),
      info: Info {
        title: title.into(),
        version: "1.0.0".to_string(),
        description: None,
      },
      servers: vec![Server { url: base_url.into() }],
      paths: IndexMap::new(),
      components: Components::default(),
      security: Vec::new(),
    }
  }
}
