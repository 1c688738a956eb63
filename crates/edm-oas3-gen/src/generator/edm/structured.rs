use super::types::PropertyType;

/// A declared structural property.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
  pub name: String,
  pub ty: PropertyType,
  pub nullable: bool,
}

impl Property {
  pub fn new(name: impl Into<String>, ty: PropertyType, nullable: bool) -> Self {
    Self {
      name: name.into(),
      ty,
      nullable,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Multiplicity {
  One,
  Many,
}

/// A navigation edge from one structured type to another.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationProperty {
  pub name: String,
  /// Qualified name of the target structured type.
  pub target_type: String,
  pub multiplicity: Multiplicity,
  /// Name of the reverse navigation declared on the target type, if any.
  pub partner: Option<String>,
}

impl NavigationProperty {
  pub fn new(name: impl Into<String>, target_type: impl Into<String>, multiplicity: Multiplicity) -> Self {
    Self {
      name: name.into(),
      target_type: target_type.into(),
      multiplicity,
      partner: None,
    }
  }

  #[must_use]
  pub fn with_partner(mut self, partner: impl Into<String>) -> Self {
    self.partner = Some(partner.into());
    self
  }
}

/// An entity type or complex type.
///
/// Entity types carry an ordered set of key property names; complex types
/// have none. Key properties are always marked required in derived schemas,
/// regardless of their declared nullability.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StructuredType {
  /// Qualified name, e.g. `NAV.customer`.
  pub name: String,
  pub base_type: Option<String>,
  pub properties: Vec<Property>,
  /// Ordered key property names; empty for complex types.
  pub keys: Vec<String>,
  pub navigations: Vec<NavigationProperty>,
}

impl StructuredType {
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      ..Self::default()
    }
  }

  /// The unqualified trailing segment of the type name.
  pub fn local_name(&self) -> &str {
    self.name.rsplit('.').next().unwrap_or(&self.name)
  }

  pub fn is_entity(&self) -> bool {
    !self.keys.is_empty()
  }

  pub fn property(&self, name: &str) -> Option<&Property> {
    self.properties.iter().find(|p| p.name == name)
  }

  pub fn navigation(&self, name: &str) -> Option<&NavigationProperty> {
    self.navigations.iter().find(|n| n.name == name)
  }
}
