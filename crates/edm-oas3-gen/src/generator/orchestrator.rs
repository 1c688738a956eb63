//! Public entry point for one generation run.
//!
//! An `Orchestrator` owns the parsed model and the run configuration, and a
//! single `generate()` call produces the output document plus statistics.
//! Runs are fully independent: every invocation builds its own walker,
//! registries, and guard sets, so concurrent or repeated runs never share
//! mutable state.

use thiserror::Error;

use crate::generator::{
  config::GeneratorConfig, document::OpenApiDocument, edm::EdmModel, metrics::GenerationStats, path_walker::PathWalker,
};

/// Conditions the whole traversal depends on; everything else degrades to a
/// warning instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
  #[error("model has no entity container")]
  MissingEntityContainer,
  #[error("root entity set '{name}' was not found in the entity container")]
  MissingRootCollection { name: String },
}

/// The artifact of one run.
#[derive(Debug)]
pub struct GenerationOutput {
  pub document: OpenApiDocument,
  pub stats: GenerationStats,
}

/// High-level driver for model-to-document generation.
///
/// ```
/// use edm_oas3_gen::generator::{
///   GeneratorConfig, Orchestrator,
///   edm::{EdmModel, EntityContainer, EntitySet, PrimitiveKind, Property, PropertyType, StructuredType},
/// };
///
/// let mut company = StructuredType::new("NAV.company");
/// company.keys = vec!["id".to_string()];
/// company
///   .properties
///   .push(Property::new("id", PropertyType::primitive(PrimitiveKind::Guid), false));
///
/// let model = EdmModel {
///   types: vec![company],
///   container: Some(EntityContainer::new("NAV").with_entity_set(EntitySet::new("companies", "NAV.company"))),
///   callables: Vec::new(),
/// };
///
/// let config = GeneratorConfig::new("https://example.invalid/api/v2.0", "Basic");
/// let output = Orchestrator::new(model, config).generate()?;
/// assert!(output.document.paths.contains_key("/companies"));
/// # Ok::<(), edm_oas3_gen::generator::GeneratorError>(())
/// ```
#[derive(Debug)]
pub struct Orchestrator {
  model: EdmModel,
  config: GeneratorConfig,
}

impl Orchestrator {
  pub fn new(model: EdmModel, config: GeneratorConfig) -> Self {
    Self { model, config }
  }

  /// Runs the traversal and returns the accumulated document and stats.
  ///
  /// # Errors
  ///
  /// Fails only when the model lacks the structural prerequisites of the
  /// traversal: the entity container, or the designated root entity set.
  pub fn generate(&self) -> Result<GenerationOutput, GeneratorError> {
    let walker = PathWalker::new(&self.model, &self.config);
    let (document, stats) = walker.walk()?;
    Ok(GenerationOutput { document, stats })
  }
}
