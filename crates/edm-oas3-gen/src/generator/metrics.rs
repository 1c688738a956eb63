use strum::Display;

/// Counters and advisory diagnostics collected over one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationStats {
  pub paths_generated: usize,
  pub operations_generated: usize,
  pub schemas_generated: usize,
  pub callables_converted: usize,
  pub cycles_detected: usize,
  pub cycle_details: Vec<Vec<String>>,
  pub warnings: Vec<GenerationWarning>,
}

impl GenerationStats {
  pub fn record_path(&mut self) {
    self.paths_generated += 1;
  }

  pub fn record_operations(&mut self, count: usize) {
    self.operations_generated += count;
  }

  pub fn record_schema(&mut self) {
    self.schemas_generated += 1;
  }

  pub fn record_callable(&mut self) {
    self.callables_converted += 1;
  }

  pub fn record_cycle(&mut self, cycle: Vec<String>) {
    self.cycles_detected += 1;
    self.cycle_details.push(cycle);
  }

  pub fn record_cycles(&mut self, cycles: Vec<Vec<String>>) {
    for cycle in cycles {
      self.record_cycle(cycle);
    }
  }

  pub fn record_warning(&mut self, warning: GenerationWarning) {
    self.warnings.push(warning);
  }

  pub fn has_warning(&self, predicate: impl Fn(&GenerationWarning) -> bool) -> bool {
    self.warnings.iter().any(predicate)
  }
}

/// Advisory conditions that degrade output without failing the run.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GenerationWarning {
  #[strum(to_string = "Navigation '{navigation}' on '{type_name}' has no backing entity set")]
  UnresolvedRelationship { type_name: String, navigation: String },
  #[strum(to_string = "Key property '{property}' of '{type_name}' cannot be represented as a path parameter")]
  UnmappableKeyType { type_name: String, property: String },
  #[strum(to_string = "Primitive type '{primitive}' has no schema mapping, defaulting to string")]
  UnmappedPrimitive { primitive: String },
  #[strum(to_string = "Type '{type_name}' is not declared in the model")]
  UnknownType { type_name: String },
  #[strum(to_string = "Authentication type '{value}' is not recognized, no security scheme emitted")]
  UnrecognizedAuthentication { value: String },
}
