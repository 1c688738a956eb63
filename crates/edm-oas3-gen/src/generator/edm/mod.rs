//! Read-only views over the parsed entity data model.
//!
//! Instances of these types are produced by a metadata-parsing collaborator;
//! the generator only traverses them. Everything here is plain data plus the
//! lookup helpers the path walker needs (root collection resolution,
//! navigation target resolution, logical-jump classification).

mod model;
mod structured;
mod types;

pub use model::{Annotation, Callable, CallableKind, CallableParameter, EdmModel, EntityContainer, EntitySet};
pub use structured::{Multiplicity, NavigationProperty, Property, StructuredType};
pub use types::{PrimitiveKind, PropertyType};
