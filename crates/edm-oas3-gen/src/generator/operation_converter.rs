//! Synthesis of individual operation descriptors.
//!
//! One method per access shape: collection list/create, item read/update/
//! delete, related-item read, bound and unbound callables, and the token
//! acquisition utility operation. Capability gating happens in the walker;
//! this module only builds descriptors.

use crate::generator::{
  document::{ObjectOrReference, Operation, Parameter, RequestBody, Response, SchemaObject, SchemaRef},
  edm::{Callable, CallableKind},
  metrics::GenerationStats,
  parameter_registry::ParameterRegistry,
  schema_converter::SchemaConverter,
  utils::path_operation_id,
};

pub(crate) const STATUS_OK: &str = "200";
pub(crate) const STATUS_CREATED: &str = "201";
pub(crate) const STATUS_NO_CONTENT: &str = "204";
pub(crate) const STATUS_BAD_REQUEST: &str = "400";
pub(crate) const STATUS_NOT_FOUND: &str = "404";
pub(crate) const STATUS_CONFLICT: &str = "409";
pub(crate) const STATUS_DEFAULT: &str = "default";

/// Everything the converter needs to describe one collection or item path.
pub(crate) struct OperationContext<'a> {
  pub set_name: &'a str,
  pub type_key: &'a str,
  pub path: &'a str,
  pub schema: SchemaRef,
}

#[derive(Debug, Default)]
pub(crate) struct OperationConverter;

impl OperationConverter {
  pub(crate) fn list_operation(&self, ctx: &OperationContext<'_>) -> Operation {
    let mut op = Operation::new(
      format!("Returns a list of {}", ctx.set_name),
      path_operation_id("list", ctx.path),
    );
    op.tags = vec![ctx.set_name.to_string()];
    op.parameters = collection_query_controls();
    op.add_response(
      STATUS_OK,
      Response::json("Succeeded", SchemaRef::Object(collection_schema(ctx.type_key, ctx.schema.clone()))),
    );
    op.add_response(STATUS_DEFAULT, error_response());
    op
  }

  pub(crate) fn create_operation(&self, ctx: &OperationContext<'_>) -> Operation {
    let mut op = Operation::new(
      format!("Creates an object of type {} in {}", ctx.type_key, ctx.set_name),
      path_operation_id("create", ctx.path),
    );
    op.tags = vec![ctx.set_name.to_string()];
    op.request_body = Some(RequestBody::json(ctx.schema.clone()));
    op.add_response(STATUS_CREATED, Response::json("A new object has been created", ctx.schema.clone()));
    op.add_response(STATUS_DEFAULT, error_response());
    op
  }

  pub(crate) fn read_operation(&self, ctx: &OperationContext<'_>) -> Operation {
    let mut op = Operation::new(
      format!("Retrieve the object of type {} in {}", ctx.type_key, ctx.set_name),
      path_operation_id("get", ctx.path),
    );
    op.tags = vec![ctx.set_name.to_string()];
    op.parameters = item_query_controls();
    op.add_response(STATUS_OK, Response::json("Succeeded", ctx.schema.clone()));
    op.add_response(STATUS_DEFAULT, error_response());
    op
  }

  pub(crate) fn update_operation(&self, ctx: &OperationContext<'_>, concurrency_header: &str) -> Operation {
    let mut op = Operation::new(
      format!("Updates an object of type {} in {}", ctx.type_key, ctx.set_name),
      path_operation_id("update", ctx.path),
    );
    op.tags = vec![ctx.set_name.to_string()];
    op.parameters = vec![ParameterRegistry::reference(concurrency_header)];
    op.request_body = Some(RequestBody::json(ctx.schema.clone()));
    op.add_response(STATUS_OK, Response::json("Succeeded", ctx.schema.clone()));
    op.add_response(STATUS_BAD_REQUEST, Response::plain("Malformed request"));
    op.add_response(STATUS_NOT_FOUND, Response::plain("The object was not found"));
    op.add_response(STATUS_CONFLICT, Response::plain("The object has been modified since it was read"));
    op.add_response(STATUS_DEFAULT, error_response());
    op
  }

  pub(crate) fn delete_operation(&self, ctx: &OperationContext<'_>, concurrency_header: &str) -> Operation {
    let mut op = Operation::new(
      format!("Deletes an object of type {} in {}", ctx.type_key, ctx.set_name),
      path_operation_id("delete", ctx.path),
    );
    op.tags = vec![ctx.set_name.to_string()];
    op.parameters = vec![ParameterRegistry::reference(concurrency_header)];
    op.add_response(STATUS_NO_CONTENT, Response::plain("Succeeded"));
    op.add_response(STATUS_NOT_FOUND, Response::plain("The object was not found"));
    op.add_response(STATUS_CONFLICT, Response::plain("The object has been modified since it was read"));
    op.add_response(STATUS_DEFAULT, error_response());
    op
  }

  /// Read-only access to a single related object reached through a
  /// one-multiplicity navigation.
  pub(crate) fn related_read_operation(&self, ctx: &OperationContext<'_>, navigation: &str) -> Operation {
    let mut op = Operation::new(
      format!("Retrieve the related {navigation} object"),
      path_operation_id("get", ctx.path),
    );
    op.tags = vec![ctx.set_name.to_string()];
    op.parameters = item_query_controls();
    op.add_response(STATUS_OK, Response::json("Succeeded", ctx.schema.clone()));
    op.add_response(STATUS_DEFAULT, error_response());
    op
  }

  /// Builds the operation for a callable procedure.
  ///
  /// Actions carry their non-binding parameters in a request body; functions
  /// expose them as query parameters. A declared return type maps through the
  /// schema synthesizer; an action without one succeeds with no content.
  pub(crate) fn callable_operation(
    &self,
    callable: &Callable,
    path: &str,
    schemas: &mut SchemaConverter<'_>,
    stats: &mut GenerationStats,
  ) -> Operation {
    let mut op = Operation::new(
      format!("Invoke {} {}", callable_kind_word(callable.kind), callable.name),
      path_operation_id("invoke", path),
    );

    match callable.kind {
      CallableKind::Action => {
        if !callable.invocation_parameters().is_empty() {
          let mut body_schema = SchemaObject::object();
          for param in callable.invocation_parameters() {
            let schema = schemas.property_schema(&param.ty, stats);
            body_schema.properties.insert(param.name.clone(), schema);
            if !param.nullable {
              body_schema.required.push(param.name.clone());
            }
          }
          op.request_body = Some(RequestBody::json(SchemaRef::Object(body_schema)));
        }
      }
      CallableKind::Function => {
        for param in callable.invocation_parameters() {
          let schema = match schemas.property_schema(&param.ty, stats) {
            SchemaRef::Object(schema) => schema,
            // Structured query parameters degrade to their serialized form.
            SchemaRef::Ref { .. } => SchemaObject::string(),
          };
          op.parameters
            .push(ObjectOrReference::Object(Parameter::query(
              &param.name,
              schema,
              !param.nullable,
            )));
        }
      }
    }

    match &callable.return_type {
      Some(return_type) => {
        let schema = schemas.property_schema(return_type, stats);
        op.add_response(STATUS_OK, Response::json("Succeeded", schema));
      }
      None => {
        op.add_response(STATUS_NO_CONTENT, Response::plain("Succeeded"));
      }
    }
    op.add_response(STATUS_DEFAULT, error_response());
    op
  }

  /// The synthesized token acquisition operation injected for bearer security.
  pub(crate) fn token_operation(&self) -> Operation {
    let mut op = Operation::new("Requests an authorization token", "getAuthorizationToken".to_string());
    for name in ["clientId", "clientSecret", "tenantId", "grant_type", "scope"] {
      op.parameters
        .push(ObjectOrReference::Object(Parameter::query(
          name,
          SchemaObject::string(),
          true,
        )));
    }
    op.add_response(
      STATUS_OK,
      Response::json("Succeeded", SchemaRef::Object(SchemaObject::string().with_description("The access token"))),
    );
    op.add_response(STATUS_DEFAULT, error_response());
    op
  }
}

/// Inline wrapper schema for a collection read: `{ "value": [ ...items ] }`.
fn collection_schema(type_key: &str, item: SchemaRef) -> SchemaObject {
  let mut schema = SchemaObject::object();
  schema.title = Some(format!("Collection of {type_key}"));
  schema.properties.insert("value".to_string(), SchemaRef::Object(SchemaObject::array(item)));
  schema
}

fn error_response() -> Response {
  Response::plain("Unexpected error")
}

fn callable_kind_word(kind: CallableKind) -> &'static str {
  match kind {
    CallableKind::Action => "action",
    CallableKind::Function => "function",
  }
}

fn query_parameter(name: &str, schema: SchemaObject, description: &str) -> ObjectOrReference<Parameter> {
  ObjectOrReference::Object(
    Parameter::query(name, schema, false).with_description(description),
  )
}

/// The standard query controls for a collection read.
fn collection_query_controls() -> Vec<ObjectOrReference<Parameter>> {
  vec![
    query_parameter("$top", SchemaObject::typed("integer", None), "Show only the first n items"),
    query_parameter("$skip", SchemaObject::typed("integer", None), "Skip the first n items"),
    query_parameter("$filter", SchemaObject::string(), "Filter items by property values"),
    query_parameter("$select", SchemaObject::string(), "Select properties to be returned"),
    query_parameter("$orderby", SchemaObject::string(), "Order items by property values"),
    query_parameter("$expand", SchemaObject::string(), "Expand related entities"),
  ]
}

/// The query controls legal on a single-item read.
fn item_query_controls() -> Vec<ObjectOrReference<Parameter>> {
  vec![
    query_parameter("$select", SchemaObject::string(), "Select properties to be returned"),
    query_parameter("$expand", SchemaObject::string(), "Expand related entities"),
  ]
}
