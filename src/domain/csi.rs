// ============================================================
// Layer 3 — CSI Sample and Feature Vector
// ============================================================
// CsiSample:     one reading, one f64 per subcarrier
// FeatureVector: the fixed-size vector an extractor derives
//                from a CsiSample
//
// Both are newtypes over Vec<f64> so the type system keeps
// raw measurements and features apart. Both guarantee that
// they are non-empty and contain only finite values.
//
// Reference: Rust Book §19 (Newtype pattern)

use serde::{Deserialize, Serialize};

use crate::domain::error::{LocalizationError, Result};

/// Anything with a fixed number of components.
/// LabeledSet uses this to check every sample has the same shape.
pub trait Dimensioned {
    fn dim(&self) -> usize;
}

fn check_values(values: &[f64], what: &str) -> Result<()> {
    if values.is_empty() {
        return Err(LocalizationError::InvalidInput(format!("{what} must not be empty")));
    }
    if let Some(index) = values.iter().position(|v| !v.is_finite()) {
        return Err(LocalizationError::NonFinite { index });
    }
    Ok(())
}

/// Per-subcarrier channel measurements for a single packet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsiSample {
    values: Vec<f64>,
}

impl CsiSample {
    pub fn new(values: Vec<f64>) -> Result<Self> {
        check_values(&values, "CSI sample")?;
        Ok(Self { values })
    }

    pub fn num_subcarriers(&self) -> usize {
        self.values.len()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

impl Dimensioned for CsiSample {
    fn dim(&self) -> usize {
        self.values.len()
    }
}

/// Features derived from one CsiSample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    values: Vec<f64>,
}

impl FeatureVector {
    pub fn new(values: Vec<f64>) -> Result<Self> {
        check_values(&values, "feature vector")?;
        Ok(Self { values })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn get(&self, feature: usize) -> f64 {
        self.values[feature]
    }
}

impl Dimensioned for FeatureVector {
    fn dim(&self) -> usize {
        self.values.len()
    }
}
