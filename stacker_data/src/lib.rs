pub mod model;
pub mod profile;
pub mod result;

pub use model::{DifficultyLevel, GameStats, ParseLevelError, WinLoss, ROWS_PER_ROUND, TRACK_COLUMNS};
pub use profile::{is_valid_name, BlankName, PlayerRecord};
pub use result::{RoundEvent, RoundOutcome};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serialization_uses_legacy_field_names() {
        let mut record = PlayerRecord::new("Ada").unwrap();
        record.award(50);
        record.record_win(DifficultyLevel::Hard);
        record.record_loss(DifficultyLevel::Easy);

        let json = serde_json::to_value(&record).expect("Failed to serialize record");

        assert_eq!(json["Name"], "Ada");
        assert_eq!(json["Score"], 50);
        assert_eq!(json["CombinedScore"], 50);
        assert_eq!(json["GameStats"]["Easy"], serde_json::json!([0, 1]));
        assert_eq!(json["GameStats"]["Hard"], serde_json::json!([1, 0]));
        assert_eq!(json["GameStats"]["Impossible"], serde_json::json!([0, 0]));
    }

    #[test]
    fn test_legacy_record_parses() {
        let json = r#"{
            "Name": "Grace",
            "Score": 116,
            "CombinedScore": 2400,
            "GameStats": {
                "Easy": [3, 1],
                "Normal": [0, 2],
                "Hard": [0, 0],
                "Impossible": [0, 7]
            }
        }"#;

        let record: PlayerRecord = serde_json::from_str(json).expect("Failed to parse record");

        assert_eq!(record.name(), "Grace");
        assert_eq!(record.session_score(), 116);
        assert_eq!(record.lifetime_score(), 2400);
        assert_eq!(record.stats_for(DifficultyLevel::Easy), WinLoss { wins: 3, losses: 1 });
        assert_eq!(record.stats_for(DifficultyLevel::Impossible).losses, 7);
    }

    #[test]
    fn test_missing_level_is_rejected() {
        let json = r#"{"Name":"Grace","Score":0,"CombinedScore":0,
            "GameStats":{"Easy":[0,0],"Normal":[0,0],"Hard":[0,0]}}"#;

        assert!(serde_json::from_str::<PlayerRecord>(json).is_err());
    }

    #[test]
    fn test_blank_name_is_rejected() {
        assert_eq!(PlayerRecord::new(""), Err(BlankName));
        assert_eq!(PlayerRecord::new("   "), Err(BlankName));
    }

    #[test]
    fn test_fresh_record_has_every_level_zeroed() {
        let record = PlayerRecord::new("Ada").unwrap();
        let tallies: Vec<_> = record.stats().iter().collect();

        assert_eq!(tallies.len(), DifficultyLevel::ALL.len());
        assert!(tallies.iter().all(|(_, tally)| *tally == WinLoss::default()));
        assert_eq!(record.session_score(), 0);
        assert_eq!(record.lifetime_score(), 0);
    }

    #[test]
    fn test_reset_keeps_lifetime_score() {
        let mut record = PlayerRecord::new("Ada").unwrap();
        record.award(50);
        record.award(57);
        record.reset_session_score();
        record.award(60);

        assert_eq!(record.session_score(), 60);
        assert_eq!(record.lifetime_score(), 167);
    }

    #[test]
    fn test_board_is_one_row_per_decay_step() {
        assert_eq!(ROWS_PER_ROUND * TRACK_COLUMNS, 56);
    }

    #[test]
    fn test_level_parsing_is_case_insensitive() {
        assert_eq!("easy".parse::<DifficultyLevel>(), Ok(DifficultyLevel::Easy));
        assert_eq!("IMPOSSIBLE".parse::<DifficultyLevel>(), Ok(DifficultyLevel::Impossible));
        assert_eq!(" Hard ".parse::<DifficultyLevel>(), Ok(DifficultyLevel::Hard));
        assert!("medium".parse::<DifficultyLevel>().is_err());
        assert_eq!(DifficultyLevel::Normal.to_string(), "Normal");
    }
}
