use serde::{Deserialize, Serialize};

/// Ordered income cut-points the income table is coarsened to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Thresholds(Vec<i64>);

impl Default for Thresholds {
    fn default() -> Self {
        Self(default_income_thresholds())
    }
}

impl Thresholds {
    /// Build a threshold set, rejecting unsorted or repeated cut-points.
    pub fn new(values: Vec<i64>) -> Result<Self, String> {
        let thresholds = Self(values);
        thresholds.validate()?;
        Ok(thresholds)
    }

    pub fn validate(&self) -> Result<(), String> {
        match self.0.windows(2).find(|pair| pair[0] >= pair[1]) {
            Some(pair) => Err(format!(
                "thresholds must be strictly ascending ({} is followed by {})",
                pair[0], pair[1]
            )),
            None => Ok(()),
        }
    }

    pub fn contains(&self, value: i64) -> bool {
        self.0.binary_search(&value).is_ok()
    }

    pub fn values(&self) -> &[i64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Annual household income cut-points in steps of $26,000 ($500 a week).
pub fn default_income_thresholds() -> Vec<i64> {
    (1..=9).map(|step| step * 26_000).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let thresholds = Thresholds::default();
        assert_eq!(thresholds.len(), 9);
        assert_eq!(thresholds.values().first(), Some(&26_000));
        assert_eq!(thresholds.values().last(), Some(&234_000));
        assert!(thresholds.validate().is_ok());
    }

    #[test]
    fn test_rejects_unsorted() {
        let err = Thresholds::new(vec![52_000, 26_000]).unwrap_err();
        assert!(err.contains("52000 is followed by 26000"));
    }

    #[test]
    fn test_rejects_duplicates() {
        assert!(Thresholds::new(vec![0, 0]).is_err());
    }

    #[test]
    fn test_contains() {
        let thresholds = Thresholds::new(vec![0, 78_000]).unwrap();
        assert!(thresholds.contains(0));
        assert!(thresholds.contains(78_000));
        assert!(!thresholds.contains(-1));
        assert!(!thresholds.contains(12_999));
    }

    #[test]
    fn test_deserializes_from_plain_array() {
        #[derive(Deserialize)]
        struct Wrapper {
            thresholds: Thresholds,
        }
        let wrapper: Wrapper = toml::from_str("thresholds = [0, 78000]").unwrap();
        assert_eq!(wrapper.thresholds.values(), &[0, 78_000]);
    }
}
