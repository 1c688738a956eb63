//! Depth-first traversal of the relationship graph into path templates.

use std::collections::BTreeSet;

use http::Method;
use indexmap::IndexMap;
use itertools::Itertools;

use crate::generator::{
  capabilities::{self, CapabilityKind},
  config::{AUTH_BASIC, AUTH_OAUTH2, GeneratorConfig},
  document::{ObjectOrReference, OpenApiDocument, Parameter, PathItem, SchemaObject, SecurityRequirement, SecurityScheme},
  edm::{CallableKind, EdmModel, EntitySet, Multiplicity, StructuredType},
  metrics::{GenerationStats, GenerationWarning},
  model_graph,
  operation_converter::{OperationContext, OperationConverter},
  orchestrator::GeneratorError,
  parameter_registry::ParameterRegistry,
  schema_converter::SchemaConverter,
};

const CONCURRENCY_HEADER: &str = "If-Match";
const TOKEN_PATH: &str = "/GetAuthorizationToken";
const BEARER_SCHEME_ID: &str = "bearerAuth";
const BASIC_SCHEME_ID: &str = "basicAuth";

/// One registered key parameter of an entity on the current ancestry.
#[derive(Debug, Clone, PartialEq, Eq)]
struct KeyParameter {
  component_id: String,
  placeholder: String,
}

/// Walks the relationship graph from the root collection and accumulates the
/// output document.
///
/// All mutable state (paths, schema registry, parameter registry, stats) is
/// owned by the walker for exactly one run; the per-branch cycle guard is an
/// owned set cloned into each recursive call, so sibling branches never see
/// each other's ancestry.
pub(crate) struct PathWalker<'a> {
  model: &'a EdmModel,
  config: &'a GeneratorConfig,
  operations: OperationConverter,
  schemas: SchemaConverter<'a>,
  parameters: ParameterRegistry,
  paths: IndexMap<String, PathItem>,
  stats: GenerationStats,
}

impl<'a> PathWalker<'a> {
  pub(crate) fn new(model: &'a EdmModel, config: &'a GeneratorConfig) -> Self {
    Self {
      model,
      config,
      operations: OperationConverter,
      schemas: SchemaConverter::new(model),
      parameters: ParameterRegistry::new(),
      paths: IndexMap::new(),
      stats: GenerationStats::default(),
    }
  }

  pub(crate) fn walk(mut self) -> Result<(OpenApiDocument, GenerationStats), GeneratorError> {
    let model = self.model;
    let container = model.container.as_ref().ok_or(GeneratorError::MissingEntityContainer)?;
    let root = model
      .entity_set(&self.config.root_collection)
      .ok_or_else(|| GeneratorError::MissingRootCollection {
        name: self.config.root_collection.clone(),
      })?;

    self.stats.record_cycles(model_graph::detect_navigation_cycles(model));

    let (schemes, security) = self.configure_security();
    self.visit_collection(root, "", &[], BTreeSet::new(), true);
    self.emit_unbound_callables();

    let mut document = OpenApiDocument::new(container.name.clone(), self.config.base_url.clone());
    document.paths = self.paths;
    document.components.schemas = self.schemas.into_components();
    document.components.parameters = self.parameters.into_components();
    document.components.security_schemes = schemes;
    document.security = security;

    Ok((document, self.stats))
  }

  /// Synthesizes the collection and item paths for one entity set and
  /// recurses into its navigation edges.
  ///
  /// `visited` carries the ancestry of the current branch only: a set reached
  /// again within its own ancestry chain is a true cycle and terminates that
  /// branch, while the same set reached through a sibling branch is visited
  /// independently. `descend` is cleared when the set was reached through a
  /// logical jump.
  fn visit_collection(
    &mut self,
    set: &'a EntitySet,
    prefix: &str,
    inherited: &[KeyParameter],
    mut visited: BTreeSet<String>,
    descend: bool,
  ) {
    if !visited.insert(set.name.clone()) {
      return;
    }
    let collection_path = format!("{prefix}/{}", set.name);

    let model = self.model;
    let Some(element) = model.structured_type(&set.entity_type) else {
      self.stats.record_warning(GenerationWarning::UnknownType {
        type_name: set.entity_type.clone(),
      });
      return;
    };

    let Some(keys) = self.register_key_parameters(set, element) else {
      // Unmappable key: the whole subtree is skipped.
      return;
    };

    let schema = self.schemas.schema_for(&element.name, &mut self.stats);
    let type_key = element.local_name().to_string();

    // Collection-level path.
    let ctx = OperationContext {
      set_name: &set.name,
      type_key: &type_key,
      path: &collection_path,
      schema: schema.clone(),
    };
    let mut collection_item = PathItem {
      parameters: Self::parameter_refs(inherited),
      ..PathItem::default()
    };
    collection_item.insert(&Method::GET, self.operations.list_operation(&ctx));
    if capabilities::resolve(set, CapabilityKind::Insert) {
      collection_item.insert(&Method::POST, self.operations.create_operation(&ctx));
    }
    self.insert_path(collection_path.clone(), collection_item);

    // Item-level path.
    let item_path = format!("{collection_path}{}", Self::key_segment(&keys));
    let item_parameters: Vec<KeyParameter> = inherited
      .iter()
      .chain(&keys)
      .unique_by(|key| key.component_id.clone())
      .cloned()
      .collect();

    let ctx = OperationContext {
      set_name: &set.name,
      type_key: &type_key,
      path: &item_path,
      schema: schema.clone(),
    };
    let mut item = PathItem {
      parameters: Self::parameter_refs(&item_parameters),
      ..PathItem::default()
    };
    item.insert(&Method::GET, self.operations.read_operation(&ctx));
    if capabilities::resolve(set, CapabilityKind::Update) {
      let header = self.register_concurrency_header();
      item.insert(&Method::PATCH, self.operations.update_operation(&ctx, &header));
    }
    if capabilities::resolve(set, CapabilityKind::Delete) {
      let header = self.register_concurrency_header();
      item.insert(&Method::DELETE, self.operations.delete_operation(&ctx, &header));
    }
    self.insert_path(item_path.clone(), item);

    self.emit_bound_callables(element, &collection_path, inherited, &item_path, &item_parameters);

    if !descend {
      return;
    }

    for nav in &element.navigations {
      let Some(target) = model.resolve_navigation_target(nav) else {
        self.stats.record_warning(GenerationWarning::UnresolvedRelationship {
          type_name: element.name.clone(),
          navigation: nav.name.clone(),
        });
        continue;
      };

      match nav.multiplicity {
        Multiplicity::Many => {
          // A logical jump emits the nested paths but does not descend,
          // otherwise the whole target subtree would be duplicated under
          // every cross-referencing parent.
          let keep_descending = !model.is_logical_jump(element, nav);
          self.visit_collection(target, &item_path, &item_parameters, visited.clone(), keep_descending);
        }
        Multiplicity::One => {
          self.emit_related_item(set, target, nav.name.as_str(), &item_path, &item_parameters);
        }
      }
    }
  }

  /// A single related object read through a one-multiplicity edge: GET only,
  /// no key segment, no further recursion.
  fn emit_related_item(
    &mut self,
    parent_set: &EntitySet,
    target: &'a EntitySet,
    navigation: &str,
    item_path: &str,
    item_parameters: &[KeyParameter],
  ) {
    let model = self.model;
    let Some(target_element) = model.structured_type(&target.entity_type) else {
      self.stats.record_warning(GenerationWarning::UnknownType {
        type_name: target.entity_type.clone(),
      });
      return;
    };

    let related_path = format!("{item_path}/{navigation}");
    let schema = self.schemas.schema_for(&target_element.name, &mut self.stats);
    let type_key = target_element.local_name().to_string();
    let ctx = OperationContext {
      set_name: &parent_set.name,
      type_key: &type_key,
      path: &related_path,
      schema,
    };

    let mut item = PathItem {
      parameters: Self::parameter_refs(item_parameters),
      ..PathItem::default()
    };
    item.insert(&Method::GET, self.operations.related_read_operation(&ctx, navigation));
    self.insert_path(related_path, item);
  }

  fn emit_bound_callables(
    &mut self,
    element: &'a StructuredType,
    collection_path: &str,
    collection_parameters: &[KeyParameter],
    item_path: &str,
    item_parameters: &[KeyParameter],
  ) {
    let model = self.model;
    for callable in model.bound_callables(&element.name) {
      let (base, parameters) = if callable.is_collection_bound() {
        (collection_path, collection_parameters)
      } else {
        (item_path, item_parameters)
      };
      let path = format!("{base}/{}", callable.name);

      let operation = self
        .operations
        .callable_operation(callable, &path, &mut self.schemas, &mut self.stats);
      let method = callable_method(callable.kind);

      let mut item = PathItem {
        parameters: Self::parameter_refs(parameters),
        ..PathItem::default()
      };
      item.insert(&method, operation);
      self.insert_path(path, item);
      self.stats.record_callable();
    }
  }

  /// Unbound callables surface at the document root with no binding context.
  fn emit_unbound_callables(&mut self) {
    let model = self.model;
    for callable in model.unbound_callables() {
      let path = format!("/{}", callable.name);
      let operation = self
        .operations
        .callable_operation(callable, &path, &mut self.schemas, &mut self.stats);

      let mut item = PathItem::default();
      item.insert(&callable_method(callable.kind), operation);
      self.insert_path(path, item);
      self.stats.record_callable();
    }
  }

  /// Registers one path parameter per key property of the element type.
  ///
  /// Returns `None` when any key cannot be represented as a scalar path
  /// parameter, which skips the entire subtree.
  fn register_key_parameters(&mut self, set: &EntitySet, element: &StructuredType) -> Option<Vec<KeyParameter>> {
    if element.keys.is_empty() {
      self.stats.record_warning(GenerationWarning::UnmappableKeyType {
        type_name: element.name.clone(),
        property: "(no key declared)".to_string(),
      });
      return None;
    }

    let mut keys = Vec::with_capacity(element.keys.len());
    for key_name in &element.keys {
      let schema = element.property(key_name).and_then(SchemaConverter::key_parameter_schema);
      let Some(schema) = schema else {
        self.stats.record_warning(GenerationWarning::UnmappableKeyType {
          type_name: element.name.clone(),
          property: key_name.clone(),
        });
        return None;
      };

      let scope_key = format!("{}_{}", set.name, key_name);
      let component_id = self.parameters.register(&scope_key, || {
        Parameter::path(key_name.clone(), schema).with_description(format!("The {key_name} of the {}", set.name))
      });
      keys.push(KeyParameter {
        component_id,
        placeholder: key_name.clone(),
      });
    }
    Some(keys)
  }

  fn register_concurrency_header(&mut self) -> String {
    self.parameters.register(CONCURRENCY_HEADER, || {
      Parameter::header(CONCURRENCY_HEADER, SchemaObject::string(), true)
        .with_description("The version of the object to act on, as retrieved in an ETag")
    })
  }

  /// Document mutation is idempotent: converging traversal branches re-insert
  /// the same path as a silent no-op.
  fn insert_path(&mut self, path: String, item: PathItem) {
    if self.paths.contains_key(&path) {
      return;
    }
    self.stats.record_path();
    self.stats.record_operations(item.operations().count());
    self.paths.insert(path, item);
  }

  fn configure_security(&mut self) -> (IndexMap<String, SecurityScheme>, Vec<SecurityRequirement>) {
    let mut schemes = IndexMap::new();
    let mut requirements = Vec::new();

    match self.config.authentication.as_str() {
      AUTH_OAUTH2 => {
        let mut token_item = PathItem::default();
        token_item.insert(&Method::GET, self.operations.token_operation());
        self.insert_path(TOKEN_PATH.to_string(), token_item);

        schemes.insert(BEARER_SCHEME_ID.to_string(), SecurityScheme::bearer());
        requirements.push(SecurityRequirement::from_iter([(BEARER_SCHEME_ID.to_string(), Vec::new())]));
      }
      AUTH_BASIC => {
        schemes.insert(BASIC_SCHEME_ID.to_string(), SecurityScheme::basic());
        requirements.push(SecurityRequirement::from_iter([(BASIC_SCHEME_ID.to_string(), Vec::new())]));
      }
      other => {
        self.stats.record_warning(GenerationWarning::UnrecognizedAuthentication {
          value: other.to_string(),
        });
      }
    }

    (schemes, requirements)
  }

  fn parameter_refs(keys: &[KeyParameter]) -> Vec<ObjectOrReference<Parameter>> {
    keys
      .iter()
      .unique_by(|key| key.component_id.as_str())
      .map(|key| ParameterRegistry::reference(&key.component_id))
      .collect()
  }

  /// `({id})` for single keys, `(k1={k1},k2={k2})` for composite keys.
  fn key_segment(keys: &[KeyParameter]) -> String {
    match keys {
      [single] => format!("({{{}}})", single.placeholder),
      _ => {
        let pairs = keys
          .iter()
          .map(|key| format!("{}={{{}}}", key.placeholder, key.placeholder))
          .join(",");
        format!("({pairs})")
      }
    }
  }
}

fn callable_method(kind: CallableKind) -> Method {
  match kind {
    CallableKind::Action => Method::POST,
    CallableKind::Function => Method::GET,
  }
}
