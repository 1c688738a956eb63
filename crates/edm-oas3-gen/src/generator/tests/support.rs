use crate::generator::{
  config::GeneratorConfig,
  edm::{
    EdmModel, EntityContainer, EntitySet, Multiplicity, NavigationProperty, PrimitiveKind, Property, PropertyType,
    StructuredType,
  },
  orchestrator::{GenerationOutput, Orchestrator},
};

pub(super) fn guid_property(name: &str) -> Property {
  Property::new(name, PropertyType::primitive(PrimitiveKind::Guid), false)
}

/// An entity type with a single non-nullable GUID key.
pub(super) fn entity(name: &str, key: &str) -> StructuredType {
  let mut ty = StructuredType::new(name);
  ty.keys = vec![key.to_string()];
  ty.properties.push(guid_property(key));
  ty
}

pub(super) fn many_nav(name: &str, target: &str) -> NavigationProperty {
  NavigationProperty::new(name, target, Multiplicity::Many)
}

pub(super) fn model_with(types: Vec<StructuredType>, sets: Vec<EntitySet>) -> EdmModel {
  let mut container = EntityContainer::new("NAV");
  for set in sets {
    container = container.with_entity_set(set);
  }
  EdmModel {
    types,
    container: Some(container),
    callables: Vec::new(),
  }
}

/// `companies(companyId)` with an owned many-navigation to `items(itemId)`.
pub(super) fn company_model() -> EdmModel {
  let mut company = entity("NAV.company", "companyId");
  company.navigations.push(many_nav("items", "NAV.item"));
  let item = entity("NAV.item", "itemId");
  model_with(
    vec![company, item],
    vec![
      EntitySet::new("companies", "NAV.company"),
      EntitySet::new("items", "NAV.item"),
    ],
  )
}

pub(super) fn basic_config() -> GeneratorConfig {
  GeneratorConfig::new("https://api.example.invalid/v2.0", "Basic")
}

pub(super) fn generate(model: EdmModel, config: GeneratorConfig) -> GenerationOutput {
  Orchestrator::new(model, config)
    .generate()
    .expect("generation should succeed")
}

pub(super) fn path_names(output: &GenerationOutput) -> Vec<&str> {
  output.document.paths.keys().map(String::as_str).collect()
}
