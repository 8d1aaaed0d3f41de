use stacker_data::DifficultyLevel;

/// Decoded player intent, as delivered by the input layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    SubmitIdentity(String),
    ChooseDifficulty(DifficultyLevel),
    /// Stop the moving marker where it currently is.
    Stop { position: i32 },
}
