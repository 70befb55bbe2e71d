pub mod final_score;
pub mod quality;
pub mod types;

pub use self::final_score::final_score;
pub use self::quality::stroke_quality;
pub use self::types::{FinalScore, Grade};
