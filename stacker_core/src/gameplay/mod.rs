pub mod round;

pub use round::{row_score, AlignmentWindow, RoundEngine, RoundPhase, Row};
