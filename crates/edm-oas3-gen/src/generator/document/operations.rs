use http::Method;
use indexmap::IndexMap;
use serde::Serialize;

use super::schema::{ObjectOrReference, SchemaObject, SchemaRef};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterIn {
  Path,
  Query,
  Header,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameter {
  pub name: String,
  #[serde(rename = "in")]
  pub location: ParameterIn,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(skip_serializing_if = "std::ops::Not::not")]
  pub required: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub schema: Option<SchemaObject>,
}

impl Parameter {
  pub fn path(name: impl Into<String>, schema: SchemaObject) -> Self {
    Self {
      name: name.into(),
      location: ParameterIn::Path,
      description: None,
      required: true,
      schema: Some(schema),
    }
  }

  pub fn query(name: impl Into<String>, schema: SchemaObject, required: bool) -> Self {
    Self {
      name: name.into(),
      location: ParameterIn::Query,
      description: None,
      required,
      schema: Some(schema),
    }
  }

  pub fn header(name: impl Into<String>, schema: SchemaObject, required: bool) -> Self {
    Self {
      name: name.into(),
      location: ParameterIn::Header,
      description: None,
      required,
      schema: Some(schema),
    }
  }

  #[must_use]
  pub fn with_description(mut self, description: impl Into<String>) -> Self {
    self.description = Some(description.into());
    self
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaType {
  pub schema: SchemaRef,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestBody {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(skip_serializing_if = "std::ops::Not::not")]
  pub required: bool,
  pub content: IndexMap<String, MediaType>,
}

impl RequestBody {
  pub fn json(schema: SchemaRef) -> Self {
    let mut content = IndexMap::new();
    content.insert(super::JSON_MEDIA_TYPE.to_string(), MediaType { schema });
    Self {
      description: None,
      required: true,
      content,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
  pub description: String,
  #[serde(skip_serializing_if = "IndexMap::is_empty")]
  pub content: IndexMap<String, MediaType>,
}

impl Response {
  pub fn plain(description: impl Into<String>) -> Self {
    Self {
      description: description.into(),
      content: IndexMap::new(),
    }
  }

  pub fn json(description: impl Into<String>, schema: SchemaRef) -> Self {
    let mut content = IndexMap::new();
    content.insert(super::JSON_MEDIA_TYPE.to_string(), MediaType { schema });
    Self {
      description: description.into(),
      content,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Operation {
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub tags: Vec<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub summary: Option<String>,
  #[serde(rename = "operationId", skip_serializing_if = "Option::is_none")]
  pub operation_id: Option<String>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub parameters: Vec<ObjectOrReference<Parameter>>,
  #[serde(rename = "requestBody", skip_serializing_if = "Option::is_none")]
  pub request_body: Option<RequestBody>,
  pub responses: IndexMap<String, Response>,
}

impl Operation {
  pub fn new(summary: impl Into<String>, operation_id: impl Into<String>) -> Self {
    Self {
      tags: Vec::new(),
      summary: Some(summary.into()),
      operation_id: Some(operation_id.into()),
      parameters: Vec::new(),
      request_body: None,
      responses: IndexMap::new(),
    }
  }

  pub(crate) fn add_response(&mut self, status: &str, response: Response) {
    self.responses.insert(status.to_string(), response);
  }
}

/// The set of operations synthesized for one path template.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PathItem {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub get: Option<Operation>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub post: Option<Operation>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub patch: Option<Operation>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub delete: Option<Operation>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub parameters: Vec<ObjectOrReference<Parameter>>,
}

impl PathItem {
  pub(crate) fn insert(&mut self, method: &Method, operation: Operation) {
    match *method {
      Method::GET => self.get = Some(operation),
      Method::POST => self.post = Some(operation),
      Method::PATCH => self.patch = Some(operation),
      Method::DELETE => self.delete = Some(operation),
      _ => {}
    }
  }

  pub fn operations(&self) -> impl Iterator<Item = (Method, &Operation)> {
    [
      (Method::GET, self.get.as_ref()),
      (Method::POST, self.post.as_ref()),
      (Method::PATCH, self.patch.as_ref()),
      (Method::DELETE, self.delete.as_ref()),
    ]
    .into_iter()
    .filter_map(|(method, op)| op.map(|op| (method, op)))
  }
}
