use std::collections::BTreeMap;

/// Named numeric parameters for building a model's transfer function.
///
/// Names are case-sensitive and must match the model's `args` exactly
/// (`Tau`, not `tau`). Order does not matter.
///
/// # Example
///
/// ```
/// use pidsim_models::models::Params;
///
/// let params = Params::new().with("k", 2.0).with("Tau", 5.0);
/// assert_eq!(params, Params::from([("Tau", 5.0), ("k", 2.0)]));
/// assert_eq!(params.get("Tau"), Some(5.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    values: BTreeMap<String, f64>,
}

impl Params {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the parameter set with `name` set to `value`.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets `name` to `value`, returning the previous value if there was one.
    pub fn insert(&mut self, name: impl Into<String>, value: f64) -> Option<f64> {
        self.values.insert(name.into(), value)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Returns the supplied parameter names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }
}

impl<K: Into<String>, const N: usize> From<[(K, f64); N]> for Params {
    fn from(values: [(K, f64); N]) -> Self {
        values.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_values_replace_earlier_ones() {
        let mut params = Params::from([("n", 2.0)]);
        assert_eq!(params.insert("n", 3.0), Some(2.0));
        assert_eq!(params.get("n"), Some(3.0));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn names_are_case_sensitive() {
        let params = Params::new().with("Tau", 1.0);
        assert_eq!(params.get("tau"), None);
        assert_eq!(params.names().collect::<Vec<_>>(), ["Tau"]);
    }

    #[test]
    fn collects_from_owned_names() {
        let params: Params = vec![(String::from("Omega"), 2.0), (String::from("Zeta"), 0.1)]
            .into_iter()
            .collect();
        assert_eq!(params.get("Zeta"), Some(0.1));
        assert!(!params.is_empty());
        assert!(Params::new().is_empty());
    }
}
