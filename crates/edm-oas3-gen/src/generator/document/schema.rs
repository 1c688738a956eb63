use indexmap::IndexMap;
use serde::Serialize;

const SCHEMA_REF_PREFIX: &str = "#/components/schemas/";

/// Either an inline object or a `$ref` to a registered component.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ObjectOrReference<T> {
  Ref {
    #[serde(rename = "$ref")]
    ref_path: String,
  },
  Object(T),
}

impl<T> ObjectOrReference<T> {
  pub fn reference(ref_path: impl Into<String>) -> Self {
    Self::Ref {
      ref_path: ref_path.into(),
    }
  }

  pub fn ref_path(&self) -> Option<&str> {
    match self {
      Self::Ref { ref_path } => Some(ref_path),
      Self::Object(_) => None,
    }
  }
}

pub type SchemaRef = ObjectOrReference<SchemaObject>;

impl SchemaRef {
  /// A `$ref` into the component schema registry.
  pub fn schema_component(key: &str) -> Self {
    Self::reference(format!("{SCHEMA_REF_PREFIX}{key}"))
  }
}

/// An output schema fragment.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SchemaObject {
  #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
  pub schema_type: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub format: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub title: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(rename = "maxLength", skip_serializing_if = "Option::is_none")]
  pub max_length: Option<u32>,
  #[serde(rename = "enum", skip_serializing_if = "Vec::is_empty")]
  pub enum_values: Vec<String>,
  #[serde(skip_serializing_if = "IndexMap::is_empty")]
  pub properties: IndexMap<String, SchemaRef>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub required: Vec<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub items: Option<Box<SchemaRef>>,
}

impl SchemaObject {
  pub fn typed(schema_type: &str, format: Option<&str>) -> Self {
    Self {
      schema_type: Some(schema_type.to_string()),
      format: format.map(str::to_string),
      ..Self::default()
    }
  }

  pub fn string() -> Self {
    Self::typed("string", None)
  }

  pub fn object() -> Self {
    Self::typed("object", None)
  }

  pub fn array(items: SchemaRef) -> Self {
    Self {
      schema_type: Some("array".to_string()),
      items: Some(Box::new(items)),
      ..Self::default()
    }
  }

  pub fn enumeration(members: &[String]) -> Self {
    Self {
      schema_type: Some("string".to_string()),
      enum_values: members.to_vec(),
      ..Self::default()
    }
  }

  #[must_use]
  pub fn with_description(mut self, description: impl Into<String>) -> Self {
    self.description = Some(description.into());
    self
  }
}
