use std::collections::BTreeMap;

use super::{
  structured::{NavigationProperty, StructuredType},
  types::PropertyType,
};

/// A declarative annotation attached to an entity set.
///
/// The value is a record of named fields; the capability resolver only ever
/// inspects boolean fields, everything else is carried opaquely.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
  pub term: String,
  pub record: BTreeMap<String, serde_json::Value>,
}

impl Annotation {
  pub fn new(term: impl Into<String>) -> Self {
    Self {
      term: term.into(),
      record: BTreeMap::new(),
    }
  }

  #[must_use]
  pub fn with_field(mut self, name: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
    self.record.insert(name.into(), value.into());
    self
  }
}

/// A named, queryable collection of one entity type.
#[derive(Debug, Clone, PartialEq)]
pub struct EntitySet {
  pub name: String,
  /// Qualified name of the element entity type.
  pub entity_type: String,
  pub annotations: Vec<Annotation>,
}

impl EntitySet {
  pub fn new(name: impl Into<String>, entity_type: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      entity_type: entity_type.into(),
      annotations: Vec::new(),
    }
  }

  #[must_use]
  pub fn with_annotation(mut self, annotation: Annotation) -> Self {
    self.annotations.push(annotation);
    self
  }

  pub fn annotation(&self, term: &str) -> Option<&Annotation> {
    self.annotations.iter().find(|a| a.term == term)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallableKind {
  /// Side-effecting, invoked with a body-carrying verb.
  Action,
  /// Side-effect free, invoked with a query-parameterized verb.
  Function,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallableParameter {
  pub name: String,
  pub ty: PropertyType,
  pub nullable: bool,
}

impl CallableParameter {
  pub fn new(name: impl Into<String>, ty: PropertyType, nullable: bool) -> Self {
    Self {
      name: name.into(),
      ty,
      nullable,
    }
  }
}

/// A server-side procedure, optionally bound to a structured type.
///
/// For a bound callable the first parameter is the binding parameter: its
/// type names the structured type the callable attaches to, and a
/// `Collection` binding type attaches the callable to the collection path
/// rather than the item path.
#[derive(Debug, Clone, PartialEq)]
pub struct Callable {
  /// Qualified name as it appears in the URL segment, e.g. `NAV.post`.
  pub name: String,
  pub kind: CallableKind,
  pub parameters: Vec<CallableParameter>,
  pub bound: bool,
  pub return_type: Option<PropertyType>,
}

impl Callable {
  pub fn binding_parameter(&self) -> Option<&CallableParameter> {
    if self.bound { self.parameters.first() } else { None }
  }

  /// Parameters the caller supplies; excludes the binding parameter.
  pub fn invocation_parameters(&self) -> &[CallableParameter] {
    if self.bound && !self.parameters.is_empty() {
      &self.parameters[1..]
    } else {
      &self.parameters
    }
  }

  /// Whether the binding parameter attaches to the collection form.
  pub fn is_collection_bound(&self) -> bool {
    matches!(
      self.binding_parameter(),
      Some(param) if matches!(param.ty, PropertyType::Collection(_))
    )
  }

  fn binds_to(&self, type_name: &str) -> bool {
    let Some(param) = self.binding_parameter() else {
      return false;
    };
    let bound_type = match &param.ty {
      PropertyType::Complex(name) => Some(name.as_str()),
      PropertyType::Collection(item) => match item.as_ref() {
        PropertyType::Complex(name) => Some(name.as_str()),
        _ => None,
      },
      _ => None,
    };
    bound_type == Some(type_name)
  }
}

/// The container that lists the model's entity sets.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityContainer {
  pub name: String,
  pub entity_sets: Vec<EntitySet>,
}

impl EntityContainer {
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      entity_sets: Vec::new(),
    }
  }

  #[must_use]
  pub fn with_entity_set(mut self, set: EntitySet) -> Self {
    self.entity_sets.push(set);
    self
  }
}

/// The parsed entity-relationship graph one generation run consumes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdmModel {
  pub types: Vec<StructuredType>,
  pub container: Option<EntityContainer>,
  pub callables: Vec<Callable>,
}

impl EdmModel {
  pub fn structured_type(&self, name: &str) -> Option<&StructuredType> {
    self
      .types
      .iter()
      .find(|t| t.name == name)
      .or_else(|| self.types.iter().find(|t| t.local_name() == name))
  }

  pub fn entity_sets(&self) -> &[EntitySet] {
    self.container.as_ref().map(|c| c.entity_sets.as_slice()).unwrap_or(&[])
  }

  /// Looks up an entity set by name, falling back to a case-insensitive match.
  pub fn entity_set(&self, name: &str) -> Option<&EntitySet> {
    let sets = self.entity_sets();
    sets
      .iter()
      .find(|s| s.name == name)
      .or_else(|| sets.iter().find(|s| s.name.eq_ignore_ascii_case(name)))
  }

  /// Whether `ty` is `ancestor` or transitively derives from it.
  pub fn derives_from(&self, ty: &StructuredType, ancestor: &str) -> bool {
    if ty.name == ancestor || ty.local_name() == ancestor {
      return true;
    }
    let mut current = ty.base_type.as_deref();
    while let Some(base_name) = current {
      if base_name == ancestor {
        return true;
      }
      current = self.structured_type(base_name).and_then(|b| b.base_type.as_deref());
    }
    false
  }

  /// Resolves the entity set backing a navigation edge.
  ///
  /// Resolution is by navigation name first, then the first set whose element
  /// type matches or derives from the edge's target type. `None` means the
  /// model declares a relationship with no concrete backing collection.
  pub fn resolve_navigation_target(&self, nav: &NavigationProperty) -> Option<&EntitySet> {
    if let Some(set) = self.entity_set(&nav.name) {
      return Some(set);
    }
    self.entity_sets().iter().find(|set| {
      self
        .structured_type(&set.entity_type)
        .is_some_and(|element| self.derives_from(element, &nav.target_type))
    })
  }

  /// Whether an edge is a logical jump: its declared partner navigation on
  /// the target type points back at a type other than the edge's owner.
  pub fn is_logical_jump(&self, owner: &StructuredType, nav: &NavigationProperty) -> bool {
    let Some(partner_name) = nav.partner.as_deref() else {
      return false;
    };
    let Some(reverse) = self
      .structured_type(&nav.target_type)
      .and_then(|target| target.navigation(partner_name))
    else {
      return false;
    };
    reverse.target_type != owner.name && reverse.target_type != owner.local_name()
  }

  pub fn bound_callables<'a>(&'a self, type_name: &'a str) -> impl Iterator<Item = &'a Callable> {
    self.callables.iter().filter(move |c| c.bound && c.binds_to(type_name))
  }

  pub fn unbound_callables(&self) -> impl Iterator<Item = &Callable> {
    self.callables.iter().filter(|c| !c.bound)
  }
}
