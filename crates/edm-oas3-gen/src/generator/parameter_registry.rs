use indexmap::IndexMap;

use crate::generator::document::{ObjectOrReference, Parameter};

const PARAMETER_REF_PREFIX: &str = "#/components/parameters/";

/// Deduplicated reusable parameter definitions.
///
/// Registration is keyed by a stable scope key (for entity keys,
/// `SetName_PropertyName`); repeated registration under the same key is a
/// silent no-op and returns the existing component id, so every path that
/// needs the parameter references one stored definition.
#[derive(Debug, Default)]
pub(crate) struct ParameterRegistry {
  parameters: IndexMap<String, Parameter>,
}

impl ParameterRegistry {
  pub(crate) fn new() -> Self {
    Self::default()
  }

  pub(crate) fn register(&mut self, scope_key: &str, build: impl FnOnce() -> Parameter) -> String {
    let component_id = Self::component_id(scope_key);
    self.parameters.entry(component_id.clone()).or_insert_with(build);
    component_id
  }

  pub(crate) fn reference(component_id: &str) -> ObjectOrReference<Parameter> {
    ObjectOrReference::reference(format!("{PARAMETER_REF_PREFIX}{component_id}"))
  }

  pub(crate) fn into_components(self) -> IndexMap<String, Parameter> {
    self.parameters
  }

  pub(crate) fn len(&self) -> usize {
    self.parameters.len()
  }

  fn component_id(scope_key: &str) -> String {
    scope_key
      .chars()
      .map(|c| if c.is_ascii_alphanumeric() || c == '.' || c == '-' { c } else { '_' })
      .collect()
  }
}
