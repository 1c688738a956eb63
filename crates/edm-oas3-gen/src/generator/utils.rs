pub(crate) fn capitalize(value: &str) -> String {
  let mut chars = value.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    None => String::new(),
  }
}

/// Derives an operation id from a verb prefix and the literal path segments.
///
/// Key placeholders and namespace qualifiers are dropped, so
/// `("list", "/companies({companyId})/items")` becomes `listCompaniesItems`.
pub(crate) fn path_operation_id(prefix: &str, path: &str) -> String {
  let mut id = String::from(prefix);
  for segment in path.split('/').filter(|s| !s.is_empty()) {
    let literal = segment.split('(').next().unwrap_or(segment);
    let literal = literal.rsplit('.').next().unwrap_or(literal);
    id.push_str(&capitalize(literal));
  }
  id
}
