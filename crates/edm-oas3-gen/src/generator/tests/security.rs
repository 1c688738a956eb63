use super::support::{company_model, generate, path_names};
use crate::generator::{
  config::{AUTH_OAUTH2, GeneratorConfig},
  document::ObjectOrReference,
  metrics::GenerationWarning,
};

fn config_with(authentication: &str) -> GeneratorConfig {
  GeneratorConfig::new("https://api.example.invalid/v2.0", authentication)
}

#[test]
fn bearer_security_injects_the_token_acquisition_path() {
  let output = generate(company_model(), config_with(AUTH_OAUTH2));

  let schemes = &output.document.components.security_schemes;
  assert_eq!(schemes.len(), 1);
  let bearer = &schemes["bearerAuth"];
  assert_eq!(bearer.scheme_type, "http");
  assert_eq!(bearer.scheme, "bearer");
  assert_eq!(bearer.bearer_format.as_deref(), Some("JWT"));

  assert_eq!(output.document.security.len(), 1);
  assert!(output.document.security[0].contains_key("bearerAuth"));

  let token = &output.document.paths["/GetAuthorizationToken"];
  let operation = token.get.as_ref().expect("token acquisition is a GET");
  assert_eq!(operation.operation_id.as_deref(), Some("getAuthorizationToken"));

  let names: Vec<_> = operation
    .parameters
    .iter()
    .filter_map(|p| match p {
      ObjectOrReference::Object(param) => Some(param.name.as_str()),
      ObjectOrReference::Ref { .. } => None,
    })
    .collect();
  assert_eq!(names, vec!["clientId", "clientSecret", "tenantId", "grant_type", "scope"]);
}

#[test]
fn basic_security_emits_a_scheme_without_a_token_path() {
  let output = generate(company_model(), config_with("Basic"));

  let schemes = &output.document.components.security_schemes;
  assert_eq!(schemes.len(), 1);
  let basic = &schemes["basicAuth"];
  assert_eq!(basic.scheme, "basic");
  assert!(basic.bearer_format.is_none());

  assert!(output.document.security[0].contains_key("basicAuth"));
  assert!(!path_names(&output).contains(&"/GetAuthorizationToken"));
}

#[test]
fn unrecognized_authentication_degrades_with_a_diagnostic() {
  let output = generate(company_model(), config_with("Kerberos"));

  assert!(output.document.components.security_schemes.is_empty());
  assert!(output.document.security.is_empty());
  assert!(!path_names(&output).contains(&"/GetAuthorizationToken"));
  assert!(output.stats.has_warning(|w| matches!(
    w,
    GenerationWarning::UnrecognizedAuthentication { value } if value == "Kerberos"
  )));
}
