//! Typed lookup of declarative capability annotations.
//!
//! The asymmetric default is load-bearing: a missing annotation, a missing
//! record field, or a field that is not a boolean all mean **permitted**, so
//! an unannotated model exposes full CRUD.

use serde_json::Value;
use strum::{Display, EnumIter};

use crate::generator::edm::EntitySet;

/// The closed set of recognized capability kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum CapabilityKind {
  Insert,
  Update,
  Delete,
}

impl CapabilityKind {
  /// The well-known vocabulary term carrying this capability.
  pub fn term(self) -> &'static str {
    match self {
      Self::Insert => "Org.OData.Capabilities.V1.InsertRestrictions",
      Self::Update => "Org.OData.Capabilities.V1.UpdateRestrictions",
      Self::Delete => "Org.OData.Capabilities.V1.DeleteRestrictions",
    }
  }

  /// The boolean field inside the annotation record.
  pub fn record_field(self) -> &'static str {
    match self {
      Self::Insert => "Insertable",
      Self::Update => "Updatable",
      Self::Delete => "Deletable",
    }
  }
}

/// Whether the operation kind is permitted on the entity set.
pub fn resolve(set: &EntitySet, kind: CapabilityKind) -> bool {
  let Some(annotation) = set.annotation(kind.term()) else {
    return true;
  };
  match annotation.record.get(kind.record_field()) {
    Some(Value::Bool(allowed)) => *allowed,
    _ => true,
  }
}
