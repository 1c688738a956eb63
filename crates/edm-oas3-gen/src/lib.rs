//! OpenAPI v3 description generation for OData-style entity data models.
//!
//! The crate takes an already-parsed entity-relationship graph (an
//! [`generator::edm::EdmModel`]) and transforms it into an
//! [`generator::document::OpenApiDocument`]: path templates for every
//! reachable collection and item, the HTTP operations legal on each path,
//! deduplicated component schemas and parameters, and security schemes.
//!
//! Metadata parsing and document rendering are deliberately left to
//! collaborators: the input model is plain data, and the output document
//! implements [`serde::Serialize`].
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]

pub mod generator;
