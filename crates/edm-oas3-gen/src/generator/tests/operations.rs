use super::support::{basic_config, company_model, entity, generate, model_with, path_names};
use crate::generator::{
  capabilities::CapabilityKind,
  document::{ObjectOrReference, Operation, Parameter},
  edm::{Annotation, Callable, CallableKind, CallableParameter, EntitySet, PrimitiveKind, PropertyType},
};

fn parameter_names(parameters: &[ObjectOrReference<Parameter>]) -> Vec<&str> {
  parameters
    .iter()
    .filter_map(|p| match p {
      ObjectOrReference::Object(param) => Some(param.name.as_str()),
      ObjectOrReference::Ref { .. } => None,
    })
    .collect()
}

fn restricted_set(kind: CapabilityKind) -> EntitySet {
  EntitySet::new("companies", "NAV.company")
    .with_annotation(Annotation::new(kind.term()).with_field(kind.record_field(), false))
}

#[test]
fn unannotated_set_gets_full_crud() {
  let output = generate(company_model(), basic_config());

  let collection = &output.document.paths["/companies"];
  assert!(collection.get.is_some());
  assert!(collection.post.is_some());

  let item = &output.document.paths["/companies({companyId})"];
  assert!(item.get.is_some());
  assert!(item.patch.is_some());
  assert!(item.delete.is_some());
}

#[test]
fn insert_restriction_removes_create_but_keeps_list() {
  let model = model_with(
    vec![entity("NAV.company", "companyId")],
    vec![restricted_set(CapabilityKind::Insert)],
  );
  let output = generate(model, basic_config());

  let collection = &output.document.paths["/companies"];
  assert!(collection.get.is_some());
  assert!(collection.post.is_none());
}

#[test]
fn update_and_delete_restrictions_gate_the_item_path() {
  let model = model_with(
    vec![entity("NAV.company", "companyId")],
    vec![restricted_set(CapabilityKind::Update)],
  );
  let output = generate(model, basic_config());
  let item = &output.document.paths["/companies({companyId})"];
  assert!(item.patch.is_none());
  assert!(item.delete.is_some());

  let model = model_with(
    vec![entity("NAV.company", "companyId")],
    vec![restricted_set(CapabilityKind::Delete)],
  );
  let output = generate(model, basic_config());
  let item = &output.document.paths["/companies({companyId})"];
  assert!(item.patch.is_some());
  assert!(item.delete.is_none());
}

#[test]
fn list_operation_carries_query_controls_and_a_derived_id() {
  let output = generate(company_model(), basic_config());
  let list = output.document.paths["/companies"].get.as_ref().expect("list operation");

  assert_eq!(list.operation_id.as_deref(), Some("listCompanies"));
  assert_eq!(
    parameter_names(&list.parameters),
    vec!["$top", "$skip", "$filter", "$select", "$orderby", "$expand"]
  );
  assert!(list.responses.contains_key("200"));
}

#[test]
fn nested_list_operation_id_joins_the_ancestry() {
  let output = generate(company_model(), basic_config());
  let nested = &output.document.paths["/companies({companyId})/items"];
  let list = nested.get.as_ref().expect("nested list operation");
  assert_eq!(list.operation_id.as_deref(), Some("listCompaniesItems"));
}

#[test]
fn update_references_the_shared_concurrency_header() {
  let output = generate(company_model(), basic_config());
  let item = &output.document.paths["/companies({companyId})"];

  let patch = item.patch.as_ref().expect("update operation");
  let refs: Vec<_> = patch.parameters.iter().filter_map(|p| p.ref_path()).collect();
  assert_eq!(refs, vec!["#/components/parameters/If-Match"]);

  let delete = item.delete.as_ref().expect("delete operation");
  let refs: Vec<_> = delete.parameters.iter().filter_map(|p| p.ref_path()).collect();
  assert_eq!(refs, vec!["#/components/parameters/If-Match"]);

  let header = &output.document.components.parameters["If-Match"];
  assert_eq!(header.name, "If-Match");
  assert!(header.required);
}

#[test]
fn every_operation_ends_with_a_default_error_response() {
  let output = generate(company_model(), basic_config());
  for (path, item) in &output.document.paths {
    for (method, operation) in item.operations() {
      assert!(
        operation.responses.contains_key("default"),
        "{method} {path} is missing the default response"
      );
    }
  }
}

#[test]
fn delete_succeeds_with_no_content() {
  let output = generate(company_model(), basic_config());
  let delete = output.document.paths["/companies({companyId})"]
    .delete
    .as_ref()
    .expect("delete operation");
  assert!(delete.responses.contains_key("204"));
  assert!(delete.responses.contains_key("404"));
  assert!(delete.responses.contains_key("409"));
}

fn action_bound_to(binding: PropertyType) -> Callable {
  Callable {
    name: "NAV.post".to_string(),
    kind: CallableKind::Action,
    parameters: vec![
      CallableParameter::new("bindingParameter", binding, false),
      CallableParameter::new("invoiceDate", PropertyType::primitive(PrimitiveKind::Date), false),
      CallableParameter::new("comment", PropertyType::primitive(PrimitiveKind::String), true),
    ],
    bound: true,
    return_type: None,
  }
}

#[test]
fn item_bound_action_posts_under_the_item_path() {
  let mut model = company_model();
  model.callables.push(action_bound_to(PropertyType::Complex("NAV.company".to_string())));

  let output = generate(model, basic_config());
  let item = &output.document.paths["/companies({companyId})/NAV.post"];
  let action = item.post.as_ref().expect("action should use POST");
  assert!(item.get.is_none());

  // Non-binding parameters form the body; only non-nullable ones are required.
  let body = action.request_body.as_ref().expect("action body");
  let schema = &body.content["application/json"].schema;
  let crate::generator::document::SchemaRef::Object(body_schema) = schema else {
    panic!("action body schema should inline");
  };
  assert_eq!(
    body_schema.properties.keys().collect::<Vec<_>>(),
    vec!["invoiceDate", "comment"]
  );
  assert_eq!(body_schema.required, vec!["invoiceDate"]);

  // No declared return type succeeds with no content.
  assert!(action.responses.contains_key("204"));
  assert_eq!(output.stats.callables_converted, 1);
}

#[test]
fn collection_bound_function_queries_under_the_collection_path() {
  let mut model = company_model();
  model.callables.push(Callable {
    name: "NAV.topCustomers".to_string(),
    kind: CallableKind::Function,
    parameters: vec![
      CallableParameter::new(
        "bindingParameter",
        PropertyType::collection_of(PropertyType::Complex("NAV.company".to_string())),
        false,
      ),
      CallableParameter::new("count", PropertyType::primitive(PrimitiveKind::Int32), false),
    ],
    bound: true,
    return_type: Some(PropertyType::primitive(PrimitiveKind::String)),
  });

  let output = generate(model, basic_config());
  let item = &output.document.paths["/companies/NAV.topCustomers"];
  let function = item.get.as_ref().expect("function should use GET");
  assert!(item.post.is_none());

  assert_eq!(parameter_names(&function.parameters), vec!["count"]);
  assert!(function.responses.contains_key("200"));
}

#[test]
fn unbound_callable_surfaces_at_the_root() {
  let mut model = company_model();
  model.callables.push(Callable {
    name: "NAV.recalculate".to_string(),
    kind: CallableKind::Action,
    parameters: Vec::new(),
    bound: false,
    return_type: None,
  });

  let output = generate(model, basic_config());
  assert!(path_names(&output).contains(&"/NAV.recalculate"));
  let item = &output.document.paths["/NAV.recalculate"];
  let action: &Operation = item.post.as_ref().expect("unbound action should use POST");
  assert!(action.request_body.is_none());
}
