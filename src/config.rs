use crate::error::{IfResult, InkForgeError};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub matching: MatchConfig,
    #[command(flatten)]
    pub session: SessionPolicy,
}

/// Thresholds for the stroke matcher.
///
/// Distance thresholds are in the caller's coordinate space; scale them with
/// the drawing (the defaults assume a 1024-unit character box).
#[derive(Args, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    // === DIRECTION ===
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub cosine_similarity_threshold: f64,

    // === ENDPOINTS & SHAPE ===
    #[arg(long, default_value_t = 250.0)]
    pub start_end_threshold: f64,
    /// Compared in normalized (unit box) space.
    #[arg(long, default_value_t = 0.5)]
    pub frechet_threshold: f64,

    // === LENGTH ===
    #[arg(long, default_value_t = 0.35)]
    pub min_length_ratio: f64,
    #[arg(long, default_value_t = 2.5)]
    pub max_length_ratio: f64,

    // === PRE-FILTER ===
    #[arg(long, default_value_t = 350.0)]
    pub average_distance_threshold: f64,

    /// Multiplies every threshold; > 1 is more forgiving.
    #[arg(long, default_value_t = 1.0)]
    pub leniency: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            cosine_similarity_threshold: 0.0,
            start_end_threshold: 250.0,
            frechet_threshold: 0.5,
            min_length_ratio: 0.35,
            max_length_ratio: 2.5,
            average_distance_threshold: 350.0,
            leniency: 1.0,
        }
    }
}

/// Per-call threshold replacements. Absent fields keep the configured value.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdOverrides {
    pub start_end_threshold: Option<f64>,
    pub frechet_threshold: Option<f64>,
    pub min_length_ratio: Option<f64>,
    pub max_length_ratio: Option<f64>,
}

impl MatchConfig {
    pub fn with_overrides(mut self, overrides: &ThresholdOverrides) -> Self {
        if let Some(v) = overrides.start_end_threshold {
            self.start_end_threshold = v;
        }
        if let Some(v) = overrides.frechet_threshold {
            self.frechet_threshold = v;
        }
        if let Some(v) = overrides.min_length_ratio {
            self.min_length_ratio = v;
        }
        if let Some(v) = overrides.max_length_ratio {
            self.max_length_ratio = v;
        }
        self
    }

    /// Rescales the distance thresholds for a drawing scaled by `scale`.
    /// The Fréchet threshold is unit-free and is left alone.
    pub fn scaled(mut self, scale: f64) -> Self {
        self.start_end_threshold *= scale;
        self.average_distance_threshold *= scale;
        self
    }

    pub fn validate(&self) -> IfResult<()> {
        if !(self.leniency.is_finite() && self.leniency > 0.0) {
            return Err(InkForgeError::Config(format!(
                "leniency must be a positive number, got {}",
                self.leniency
            )));
        }

        let non_negative = [
            ("start_end_threshold", self.start_end_threshold),
            ("frechet_threshold", self.frechet_threshold),
            ("min_length_ratio", self.min_length_ratio),
            ("max_length_ratio", self.max_length_ratio),
            ("average_distance_threshold", self.average_distance_threshold),
        ];
        for (name, value) in non_negative {
            if value.is_nan() || value < 0.0 {
                return Err(InkForgeError::Config(format!(
                    "{} must be >= 0, got {}",
                    name, value
                )));
            }
        }

        if self.min_length_ratio > self.max_length_ratio {
            return Err(InkForgeError::Config(format!(
                "min_length_ratio ({}) exceeds max_length_ratio ({})",
                self.min_length_ratio, self.max_length_ratio
            )));
        }
        if !self.cosine_similarity_threshold.is_finite() {
            return Err(InkForgeError::Config(
                "cosine_similarity_threshold must be finite".to_string(),
            ));
        }
        Ok(())
    }
}

/// How a session treats repeated misses and what counts as a good pace.
#[derive(Args, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionPolicy {
    /// 0 disables hints.
    #[arg(long, default_value_t = 3)]
    pub show_hint_after_misses: u32,
    /// 0 disables auto-accept.
    #[arg(long, default_value_t = 0)]
    pub mark_correct_after_misses: u32,
    #[arg(long, default_value_t = 4.0)]
    pub seconds_per_stroke: f64,
}

impl Default for SessionPolicy {
    fn default() -> Self {
        Self {
            show_hint_after_misses: 3,
            mark_correct_after_misses: 0,
            seconds_per_stroke: 4.0,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> IfResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> IfResult<()> {
        if let Err(e) = self.matching.validate() {
            warn!("Rejected match configuration: {}", e);
            return Err(e);
        }
        if !(self.session.seconds_per_stroke.is_finite() && self.session.seconds_per_stroke > 0.0)
        {
            return Err(InkForgeError::Config(format!(
                "seconds_per_stroke must be positive, got {}",
                self.session.seconds_per_stroke
            )));
        }
        Ok(())
    }

    /// Copies values the user typed on the command line over `self`,
    /// leaving file-provided values in place for flags left at their default.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($section:ident, $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$section.$field = cli.$section.$field;
                }
            };
        }

        update_if_present!(matching, cosine_similarity_threshold);
        update_if_present!(matching, start_end_threshold);
        update_if_present!(matching, frechet_threshold);
        update_if_present!(matching, min_length_ratio);
        update_if_present!(matching, max_length_ratio);
        update_if_present!(matching, average_distance_threshold);
        update_if_present!(matching, leniency);

        update_if_present!(session, show_hint_after_misses);
        update_if_present!(session, mark_correct_after_misses);
        update_if_present!(session, seconds_per_stroke);
    }
}
