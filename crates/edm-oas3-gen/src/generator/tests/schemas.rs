use super::support::{basic_config, entity, generate, model_with};
use crate::generator::{
  document::SchemaRef,
  edm::{EdmModel, EntitySet, PrimitiveKind, Property, PropertyType, StructuredType},
  metrics::{GenerationStats, GenerationWarning},
  schema_converter::SchemaConverter,
};

fn single_type_model(ty: StructuredType) -> EdmModel {
  EdmModel {
    types: vec![ty],
    container: None,
    callables: Vec::new(),
  }
}

#[test]
fn schema_registration_is_idempotent() {
  let model = single_type_model(entity("NAV.customer", "customerId"));
  let mut converter = SchemaConverter::new(&model);
  let mut stats = GenerationStats::default();

  let first = converter.schema_for("NAV.customer", &mut stats);
  let second = converter.schema_for("NAV.customer", &mut stats);

  assert_eq!(first, second);
  assert_eq!(first.ref_path(), Some("#/components/schemas/customer"));
  assert_eq!(stats.schemas_generated, 1);
  assert_eq!(converter.into_components().len(), 1);
}

#[test]
fn self_referencing_type_resolves_to_a_reference() {
  let mut category = StructuredType::new("NAV.category");
  category
    .properties
    .push(Property::new("displayName", PropertyType::primitive(PrimitiveKind::String), true));
  category
    .properties
    .push(Property::new("parent", PropertyType::Complex("NAV.category".to_string()), true));

  let model = single_type_model(category);
  let mut converter = SchemaConverter::new(&model);
  let mut stats = GenerationStats::default();

  converter.schema_for("NAV.category", &mut stats);
  let schemas = converter.into_components();
  assert_eq!(schemas.len(), 1);

  let parent = &schemas["category"].properties["parent"];
  assert_eq!(parent.ref_path(), Some("#/components/schemas/category"));
}

#[test]
fn mutually_referencing_types_both_register() {
  let mut order = StructuredType::new("NAV.order");
  order
    .properties
    .push(Property::new("line", PropertyType::Complex("NAV.orderLine".to_string()), true));
  let mut line = StructuredType::new("NAV.orderLine");
  line
    .properties
    .push(Property::new("order", PropertyType::Complex("NAV.order".to_string()), true));

  let model = EdmModel {
    types: vec![order, line],
    container: None,
    callables: Vec::new(),
  };
  let mut converter = SchemaConverter::new(&model);
  let mut stats = GenerationStats::default();

  converter.schema_for("NAV.order", &mut stats);
  let schemas = converter.into_components();
  assert_eq!(schemas.len(), 2);
  assert_eq!(
    schemas["orderLine"].properties["order"].ref_path(),
    Some("#/components/schemas/order")
  );
}

#[test]
fn keys_and_non_nullable_properties_are_required() {
  let mut customer = StructuredType::new("NAV.customer");
  customer.keys = vec!["customerId".to_string()];
  customer.properties = vec![
    // A nullable key stays required regardless.
    Property::new("customerId", PropertyType::primitive(PrimitiveKind::Guid), true),
    Property::new("number", PropertyType::primitive(PrimitiveKind::String), false),
    Property::new("displayName", PropertyType::primitive(PrimitiveKind::String), true),
  ];

  let model = single_type_model(customer);
  let mut converter = SchemaConverter::new(&model);
  let mut stats = GenerationStats::default();
  converter.schema_for("NAV.customer", &mut stats);

  let schemas = converter.into_components();
  assert_eq!(schemas["customer"].required, vec!["customerId", "number"]);
}

#[test]
fn enum_property_lists_member_names() {
  let mut invoice = StructuredType::new("NAV.invoice");
  invoice.properties.push(Property::new(
    "status",
    PropertyType::Enum {
      name: "NAV.invoiceStatus".to_string(),
      members: vec!["Draft".to_string(), "Open".to_string(), "Paid".to_string()],
    },
    true,
  ));

  let model = single_type_model(invoice);
  let mut converter = SchemaConverter::new(&model);
  let mut stats = GenerationStats::default();
  converter.schema_for("NAV.invoice", &mut stats);

  let schemas = converter.into_components();
  let SchemaRef::Object(status) = &schemas["invoice"].properties["status"] else {
    panic!("enum property should inline");
  };
  assert_eq!(status.schema_type.as_deref(), Some("string"));
  assert_eq!(status.enum_values, vec!["Draft", "Open", "Paid"]);
}

#[test]
fn collection_property_becomes_an_array_of_items() {
  let mut order = StructuredType::new("NAV.order");
  order.properties.push(Property::new(
    "tags",
    PropertyType::collection_of(PropertyType::primitive(PrimitiveKind::String)),
    true,
  ));

  let model = single_type_model(order);
  let mut converter = SchemaConverter::new(&model);
  let mut stats = GenerationStats::default();
  converter.schema_for("NAV.order", &mut stats);

  let schemas = converter.into_components();
  let SchemaRef::Object(tags) = &schemas["order"].properties["tags"] else {
    panic!("collection property should inline");
  };
  assert_eq!(tags.schema_type.as_deref(), Some("array"));
  let SchemaRef::Object(items) = tags.items.as_deref().expect("array items") else {
    panic!("string items should inline");
  };
  assert_eq!(items.schema_type.as_deref(), Some("string"));
}

#[test]
fn undeclared_property_type_degrades_with_diagnostic() {
  let mut order = StructuredType::new("NAV.order");
  order
    .properties
    .push(Property::new("mystery", PropertyType::Complex("NAV.missing".to_string()), true));

  let model = single_type_model(order);
  let mut converter = SchemaConverter::new(&model);
  let mut stats = GenerationStats::default();
  converter.schema_for("NAV.order", &mut stats);

  assert!(stats.has_warning(|w| matches!(
    w,
    GenerationWarning::UnknownType { type_name } if type_name == "NAV.missing"
  )));
}

#[test]
fn string_max_length_survives_into_the_document() {
  let mut company = entity("NAV.company", "companyId");
  company
    .properties
    .push(Property::new("name", PropertyType::string_with_max_length(100), true));
  let model = model_with(vec![company], vec![EntitySet::new("companies", "NAV.company")]);

  let output = generate(model, basic_config());
  let SchemaRef::Object(name) = &output.document.components.schemas["company"].properties["name"] else {
    panic!("string property should inline");
  };
  assert_eq!(name.max_length, Some(100));
}
