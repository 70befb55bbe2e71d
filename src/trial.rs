use crate::error::{IfResult, InkForgeError};
use crate::geometry::Curve;
use crate::matcher::ReferenceSet;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A recorded practice run: the character's reference strokes, every
/// captured attempt in the order it was drawn, and the total time taken.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialFile {
    pub strokes: Vec<Curve>,
    pub attempts: Vec<Curve>,
    #[serde(default)]
    pub elapsed_secs: Option<f64>,
}

impl TrialFile {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> IfResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> IfResult<Self> {
        let trial: TrialFile = serde_json::from_str(content)?;
        if let Some(secs) = trial.elapsed_secs {
            if !secs.is_finite() || secs < 0.0 {
                return Err(InkForgeError::Validation(format!(
                    "elapsed_secs must be a non-negative number, got {}",
                    secs
                )));
            }
        }
        Ok(trial)
    }

    pub fn reference_set(&self) -> IfResult<ReferenceSet> {
        ReferenceSet::from_curves(self.strokes.clone())
    }
}
