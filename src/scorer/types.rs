use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter, Serialize, Deserialize,
)]
pub enum Grade {
    S,
    #[strum(serialize = "A+")]
    #[serde(rename = "A+")]
    APlus,
    A,
    #[strum(serialize = "A-")]
    #[serde(rename = "A-")]
    AMinus,
    #[strum(serialize = "B+")]
    #[serde(rename = "B+")]
    BPlus,
    B,
    #[strum(serialize = "B-")]
    #[serde(rename = "B-")]
    BMinus,
    #[strum(serialize = "C+")]
    #[serde(rename = "C+")]
    CPlus,
    C,
    #[strum(serialize = "C-")]
    #[serde(rename = "C-")]
    CMinus,
    D,
    F,
}

impl Grade {
    /// Lowest total that still earns this grade.
    pub fn floor(self) -> f64 {
        match self {
            Grade::S => 95.0,
            Grade::APlus => 90.0,
            Grade::A => 85.0,
            Grade::AMinus => 80.0,
            Grade::BPlus => 75.0,
            Grade::B => 70.0,
            Grade::BMinus => 65.0,
            Grade::CPlus => 60.0,
            Grade::C => 55.0,
            Grade::CMinus => 50.0,
            Grade::D => 40.0,
            Grade::F => f64::NEG_INFINITY,
        }
    }

    pub fn from_total(total: f64) -> Self {
        use strum::IntoEnumIterator;
        Grade::iter()
            .find(|g| total >= g.floor())
            .unwrap_or(Grade::F)
    }
}

/// Session result. Weighted 40% accuracy, 40% quality, 20% speed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinalScore {
    pub total_score: f64,
    pub accuracy_score: f64,
    pub quality_score: f64,
    pub speed_score: f64,
    pub grade: Grade,
}
