//! Query parameter assembly and sanitization
//!
//! Every endpoint builds a [`ParamSet`] and turns it into the final list of
//! query pairs with [`ParamSet::into_query`]. Entries that are absent or empty
//! never reach the wire: the service treats a missing parameter
//! differently from an explicitly empty one.

/// Join currency or metal codes into the single comma separated value the
/// service expects. Order is preserved and nothing is trimmed.
pub fn csv<I, S>(codes: I) -> String
where
  I: IntoIterator<Item = S>,
  S: AsRef<str>,
{
  codes.into_iter().map(|c| c.as_ref().to_string()).collect::<Vec<_>>().join(",")
}

/// Drop every entry whose value is `None` or the empty string.
///
/// Everything else is kept untouched and in order, including values such as
/// `"0"` or `"false"`.
pub fn sanitize<I, K>(entries: I) -> Vec<(String, String)>
where
  I: IntoIterator<Item = (K, Option<String>)>,
  K: Into<String>,
{
  entries
    .into_iter()
    .filter_map(|(key, value)| match value {
      Some(v) if !v.is_empty() => Some((key.into(), v)),
      _ => None,
    })
    .collect()
}

/// Ordered set of query parameters for a single request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamSet {
  entries: Vec<(String, Option<String>)>,
}

impl ParamSet {
  pub fn new() -> Self {
    Self::default()
  }

  /// Add a mandatory parameter. Numbers always survive sanitization (`0`
  /// renders as `"0"`); an empty string is still dropped.
  pub fn required(mut self, key: &str, value: impl ToString) -> Self {
    self.entries.push((key.to_string(), Some(value.to_string())));
    self
  }

  /// Add an optional parameter; dropped later if `None` or empty
  pub fn optional<V: ToString>(mut self, key: &str, value: Option<V>) -> Self {
    self.entries.push((key.to_string(), value.map(|v| v.to_string())));
    self
  }

  /// Add a list parameter as CSV. An empty list becomes `""` and is dropped.
  pub fn list<S: AsRef<str>>(mut self, key: &str, values: &[S]) -> Self {
    self.entries.push((key.to_string(), Some(csv(values))));
    self
  }

  /// Number of entries before sanitization
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Final query pairs, in insertion order, with every absent or empty
  /// entry removed.
  pub fn into_query(self) -> Vec<(String, String)> {
    sanitize(self.entries)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn pairs(query: &[(String, String)]) -> Vec<(&str, &str)> {
    query.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
  }

  #[test]
  fn test_sanitize_drops_absent_and_empty() {
    let result = sanitize(vec![
      ("base", Some("USD".to_string())),
      ("currencies", Some(String::new())),
      ("unit", None),
      ("amount", Some("0".to_string())),
    ]);
    assert_eq!(pairs(&result), vec![("base", "USD"), ("amount", "0")]);
  }

  #[test]
  fn test_sanitize_keeps_whitespace_values() {
    let result = sanitize(vec![("q", Some(" ".to_string()))]);
    assert_eq!(result.len(), 1);
  }

  #[test]
  fn test_csv_preserves_order() {
    assert_eq!(csv(["XAU", "XAG", "XPD", "XPT"]), "XAU,XAG,XPD,XPT");
    assert_eq!(csv(vec!["XPT".to_string(), "XAU".to_string()]), "XPT,XAU");
    assert_eq!(csv([" XAU", "XAG "]), " XAU,XAG ");
    assert_eq!(csv(Vec::<String>::new()), "");
  }

  #[test]
  fn test_empty_list_is_dropped() {
    let empty: [&str; 0] = [];
    let query = ParamSet::new().optional("base", Some("USD")).list("currencies", &empty).into_query();
    assert_eq!(pairs(&query), vec![("base", "USD")]);
  }

  #[test]
  fn test_list_is_comma_joined() {
    let query = ParamSet::new().list("currencies", &["XAU", "XAG"]).into_query();
    assert_eq!(pairs(&query), vec![("currencies", "XAU,XAG")]);
  }

  #[test]
  fn test_empty_required_value_is_dropped_but_zero_is_kept() {
    let query = ParamSet::new()
      .required("from", "")
      .required("to", "EUR")
      .required("amount", 0.0_f64)
      .optional::<&str>("date", None)
      .into_query();
    assert_eq!(pairs(&query), vec![("to", "EUR"), ("amount", "0")]);
  }

  #[test]
  fn test_numbers_format_without_trailing_zero() {
    let query = ParamSet::new().required("amount", 100.0_f64).required("half", 2.5_f64).into_query();
    assert_eq!(pairs(&query), vec![("amount", "100"), ("half", "2.5")]);
  }

  #[test]
  fn test_len_counts_unsanitized_entries() {
    let set = ParamSet::new().optional::<&str>("a", None).optional("b", Some(""));
    assert_eq!(set.len(), 2);
    assert!(set.into_query().is_empty());
  }
}
