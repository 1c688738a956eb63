/// Authentication token value that selects the bearer scheme and the
/// synthesized token acquisition path.
pub const AUTH_OAUTH2: &str = "OAuth2.0";
/// Authentication token value that selects the basic-credentials scheme.
pub const AUTH_BASIC: &str = "Basic";

pub(crate) const DEFAULT_ROOT_COLLECTION: &str = "companies";

/// Inputs that configure a single generation run.
///
/// Two strings drive generation: the externally visible base address embedded
/// in the document's server list, and the authentication-type token that
/// selects a security scheme. The root collection name defaults to
/// `companies` and can be overridden for models that designate a different
/// traversal root.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
  pub base_url: String,
  pub authentication: String,
  pub root_collection: String,
}

impl GeneratorConfig {
  pub fn new(base_url: impl Into<String>, authentication: impl Into<String>) -> Self {
    Self {
      base_url: base_url.into(),
      authentication: authentication.into(),
      root_collection: DEFAULT_ROOT_COLLECTION.to_string(),
    }
  }

  #[must_use]
  pub fn with_root_collection(mut self, name: impl Into<String>) -> Self {
    self.root_collection = name.into();
    self
  }
}
