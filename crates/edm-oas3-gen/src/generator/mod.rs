pub mod capabilities;
pub mod config;
pub mod document;
pub mod edm;
pub(crate) mod metrics;
pub(crate) mod model_graph;
pub(crate) mod operation_converter;
pub mod orchestrator;
pub(crate) mod parameter_registry;
pub(crate) mod path_walker;
pub(crate) mod schema_converter;
pub(crate) mod type_mapper;
pub(crate) mod utils;

pub use config::GeneratorConfig;
pub use metrics::{GenerationStats, GenerationWarning};
pub use orchestrator::{GenerationOutput, GeneratorError, Orchestrator};

#[cfg(test)]
mod tests;
