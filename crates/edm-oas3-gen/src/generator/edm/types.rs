use strum::Display;

/// Primitive scalar kinds of the entity data model.
///
/// The `Other` variant carries the raw kind token for scalars outside the
/// recognized set; the type mapper degrades those to a plain string schema
/// instead of failing the run.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum PrimitiveKind {
  #[strum(to_string = "Edm.Boolean")]
  Boolean,
  #[strum(to_string = "Edm.Byte")]
  Byte,
  #[strum(to_string = "Edm.SByte")]
  SByte,
  #[strum(to_string = "Edm.Int16")]
  Int16,
  #[strum(to_string = "Edm.Int32")]
  Int32,
  #[strum(to_string = "Edm.Int64")]
  Int64,
  #[strum(to_string = "Edm.Decimal")]
  Decimal,
  #[strum(to_string = "Edm.Double")]
  Double,
  #[strum(to_string = "Edm.Single")]
  Single,
  #[strum(to_string = "Edm.Date")]
  Date,
  #[strum(to_string = "Edm.DateTimeOffset")]
  DateTimeOffset,
  #[strum(to_string = "Edm.Duration")]
  Duration,
  #[strum(to_string = "Edm.Guid")]
  Guid,
  #[strum(to_string = "Edm.String")]
  String,
  #[strum(to_string = "Edm.Binary")]
  Binary,
  #[strum(to_string = "Edm.Stream")]
  Stream,
  #[strum(to_string = "{0}")]
  Other(std::string::String),
}

/// The declared type of a structural property or callable parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyType {
  Primitive {
    kind: PrimitiveKind,
    max_length: Option<u32>,
  },
  /// An enumeration type with its literal member names.
  Enum { name: String, members: Vec<String> },
  /// A reference to another structured (entity or complex) type by name.
  Complex(String),
  Collection(Box<PropertyType>),
}

impl PropertyType {
  pub fn primitive(kind: PrimitiveKind) -> Self {
    Self::Primitive { kind, max_length: None }
  }

  pub fn string_with_max_length(max_length: u32) -> Self {
    Self::Primitive {
      kind: PrimitiveKind::String,
      max_length: Some(max_length),
    }
  }

  pub fn collection_of(item: PropertyType) -> Self {
    Self::Collection(Box::new(item))
  }
}
