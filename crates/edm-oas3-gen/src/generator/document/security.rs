use serde::Serialize;

/// An HTTP authentication scheme entry for the component registry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SecurityScheme {
  #[serde(rename = "type")]
  pub scheme_type: String,
  pub scheme: String,
  #[serde(rename = "bearerFormat", skip_serializing_if = "Option::is_none")]
  pub bearer_format: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
}

impl SecurityScheme {
  pub fn bearer() -> Self {
    Self {
      scheme_type: "http".to_string(),
      scheme: "bearer".to_string(),
      bearer_format: Some("JWT".to_string()),
      description: Some("Access token acquired via the GetAuthorizationToken utility path".to_string()),
    }
  }

  pub fn basic() -> Self {
    Self {
      scheme_type: "http".to_string(),
      scheme: "basic".to_string(),
      bearer_format: None,
      description: None,
    }
  }
}
