//! Recursive synthesis of component schemas from structured types.

use std::collections::BTreeSet;

use indexmap::IndexMap;

use crate::generator::{
  document::{SchemaObject, SchemaRef},
  edm::{EdmModel, PrimitiveKind, Property, PropertyType, StructuredType},
  metrics::{GenerationStats, GenerationWarning},
  type_mapper,
};

/// Turns structured types into registered, deduplicated output schemas.
///
/// Registration is idempotent per canonical type key. The key is entered into
/// the registry *before* the type's properties are visited, so a property
/// that refers back to the type under construction (directly or through a
/// mutual reference) resolves to the in-progress entry instead of recursing
/// forever.
#[derive(Debug)]
pub(crate) struct SchemaConverter<'a> {
  model: &'a EdmModel,
  schemas: IndexMap<String, SchemaObject>,
  registered: BTreeSet<String>,
}

impl<'a> SchemaConverter<'a> {
  pub(crate) fn new(model: &'a EdmModel) -> Self {
    Self {
      model,
      schemas: IndexMap::new(),
      registered: BTreeSet::new(),
    }
  }

  /// Returns a reference to the registered schema for a structured type,
  /// synthesizing and registering it on first use.
  pub(crate) fn schema_for(&mut self, type_name: &str, stats: &mut GenerationStats) -> SchemaRef {
    let model = self.model;
    let Some(ty) = model.structured_type(type_name) else {
      stats.record_warning(GenerationWarning::UnknownType {
        type_name: type_name.to_string(),
      });
      return SchemaRef::Object(SchemaObject::string().with_description(format!("Undeclared type '{type_name}'")));
    };

    let key = ty.local_name().to_string();
    if self.registered.contains(&key) {
      return SchemaRef::schema_component(&key);
    }

    // Placeholder before recursing into properties: self-references below
    // must find the key already present.
    self.registered.insert(key.clone());
    self.schemas.insert(key.clone(), SchemaObject::object());

    let schema = self.build_object_schema(ty, stats);
    self.schemas.insert(key.clone(), schema);
    stats.record_schema();

    SchemaRef::schema_component(&key)
  }

  /// Schema for one declared property or callable parameter type.
  pub(crate) fn property_schema(&mut self, ty: &PropertyType, stats: &mut GenerationStats) -> SchemaRef {
    match ty {
      PropertyType::Primitive { kind, max_length } => {
        SchemaRef::Object(type_mapper::primitive_schema(kind, *max_length, stats))
      }
      PropertyType::Enum { members, .. } => SchemaRef::Object(SchemaObject::enumeration(members)),
      PropertyType::Complex(name) => self.schema_for(name, stats),
      PropertyType::Collection(item) => {
        let items = self.property_schema(item, stats);
        SchemaRef::Object(SchemaObject::array(items))
      }
    }
  }

  /// Scalar schema for a key property, or `None` when the key cannot be
  /// represented as a path parameter.
  pub(crate) fn key_parameter_schema(property: &Property) -> Option<SchemaObject> {
    match &property.ty {
      PropertyType::Primitive { kind, max_length } => {
        let mapped = type_mapper::scalar_mapping(kind)?;
        let mut schema = SchemaObject::typed(mapped.schema_type, mapped.format);
        if matches!(kind, PrimitiveKind::String) {
          schema.max_length = *max_length;
        }
        Some(schema)
      }
      PropertyType::Enum { members, .. } => Some(SchemaObject::enumeration(members)),
      PropertyType::Complex(_) | PropertyType::Collection(_) => None,
    }
  }

  pub(crate) fn into_components(self) -> IndexMap<String, SchemaObject> {
    self.schemas
  }

  fn build_object_schema(&mut self, ty: &StructuredType, stats: &mut GenerationStats) -> SchemaObject {
    let mut schema = SchemaObject::object();
    schema.title = Some(ty.local_name().to_string());

    for property in &ty.properties {
      let property_schema = self.property_schema(&property.ty, stats);
      schema.properties.insert(property.name.clone(), property_schema);
    }

    // Entity keys are unconditionally required; non-nullable properties
    // follow in declaration order.
    let mut required = ty.keys.clone();
    for property in &ty.properties {
      if !property.nullable && !required.contains(&property.name) {
        required.push(property.name.clone());
      }
    }
    schema.required = required;

    schema
  }
}
