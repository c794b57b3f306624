//! Assertions shared by tests across the mp-* crates

use std::collections::BTreeMap;

/// Default tolerance for floating-point comparisons
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Assert that two floating-point numbers are approximately equal
pub fn assert_approx_eq(actual: f64, expected: f64, tolerance: f64) {
  assert!(
    (actual - expected).abs() < tolerance,
    "Values not approximately equal:\n  actual:   {}\n  expected: {}\n  diff:     {}\n  tolerance: {}",
    actual,
    expected,
    (actual - expected).abs(),
    tolerance
  );
}

/// Assert that a rate map has exactly `expected` codes with matching values
pub fn assert_rates_eq(actual: &BTreeMap<String, f64>, expected: &[(&str, f64)]) {
  assert_eq!(
    actual.len(),
    expected.len(),
    "rate maps differ in size: {:?} vs {:?}",
    actual.keys().collect::<Vec<_>>(),
    expected.iter().map(|(k, _)| *k).collect::<Vec<_>>()
  );
  for (code, value) in expected {
    let got = actual.get(*code).unwrap_or_else(|| panic!("missing rate for {}", code));
    assert_approx_eq(*got, *value, DEFAULT_TOLERANCE);
  }
}
