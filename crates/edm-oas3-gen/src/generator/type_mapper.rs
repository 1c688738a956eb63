//! Fixed mapping from primitive scalar kinds to output schema fragments.

use crate::generator::{
  document::SchemaObject,
  edm::PrimitiveKind,
  metrics::{GenerationStats, GenerationWarning},
};

/// The (type, format) pair a recognized scalar maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MappedScalar {
  pub schema_type: &'static str,
  pub format: Option<&'static str>,
}

/// Returns the table entry for a scalar kind, or `None` for unmapped kinds.
pub(crate) fn scalar_mapping(kind: &PrimitiveKind) -> Option<MappedScalar> {
  let (schema_type, format) = match kind {
    PrimitiveKind::Boolean => ("boolean", None),
    PrimitiveKind::Byte | PrimitiveKind::SByte | PrimitiveKind::Int16 | PrimitiveKind::Int32 => {
      ("integer", Some("int32"))
    }
    PrimitiveKind::Int64 => ("integer", Some("int64")),
    PrimitiveKind::Decimal | PrimitiveKind::Double => ("number", Some("double")),
    PrimitiveKind::Single => ("number", Some("float")),
    PrimitiveKind::Date => ("string", Some("date")),
    PrimitiveKind::DateTimeOffset => ("string", Some("date-time")),
    PrimitiveKind::Duration => ("string", Some("duration")),
    PrimitiveKind::Guid => ("string", Some("uuid")),
    PrimitiveKind::String => ("string", None),
    PrimitiveKind::Binary => ("string", Some("byte")),
    PrimitiveKind::Stream => ("string", Some("binary")),
    PrimitiveKind::Other(_) => return None,
  };
  Some(MappedScalar { schema_type, format })
}

/// Builds the schema for a primitive property.
///
/// An unmapped kind degrades to a plain string schema tagged with a
/// diagnostic description; the run never fails on it.
pub(crate) fn primitive_schema(kind: &PrimitiveKind, max_length: Option<u32>, stats: &mut GenerationStats) -> SchemaObject {
  let Some(mapped) = scalar_mapping(kind) else {
    stats.record_warning(GenerationWarning::UnmappedPrimitive {
      primitive: kind.to_string(),
    });
    return SchemaObject::string().with_description(format!("Unmapped primitive type '{kind}'"));
  };

  let mut schema = SchemaObject::typed(mapped.schema_type, mapped.format);
  if matches!(kind, PrimitiveKind::String) {
    schema.max_length = max_length;
  }
  schema
}
