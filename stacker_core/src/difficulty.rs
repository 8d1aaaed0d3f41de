use stacker_data::{DifficultyLevel, ROWS_PER_ROUND};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyEntry {
    pub level: DifficultyLevel,
    pub initial_speed_ms: u32,
}

impl DifficultyEntry {
    /// Amount the sweep duration shrinks after every stop.
    pub const fn decay_ms(self) -> u32 {
        self.initial_speed_ms / ROWS_PER_ROUND
    }
}

/// Initial sweep duration per difficulty.
pub struct DifficultyTable;

impl DifficultyTable {
    /// Indexed by `DifficultyLevel as usize`.
    pub const ENTRIES: [DifficultyEntry; 4] = [
        DifficultyEntry { level: DifficultyLevel::Easy, initial_speed_ms: 4800 },
        DifficultyEntry { level: DifficultyLevel::Normal, initial_speed_ms: 4000 },
        DifficultyEntry { level: DifficultyLevel::Hard, initial_speed_ms: 3200 },
        DifficultyEntry { level: DifficultyLevel::Impossible, initial_speed_ms: 2400 },
    ];

    pub const fn entry(level: DifficultyLevel) -> DifficultyEntry {
        Self::ENTRIES[level as usize]
    }

    pub const fn speed_for(level: DifficultyLevel) -> u32 {
        Self::entry(level).initial_speed_ms
    }

    pub const fn decay_for(level: DifficultyLevel) -> u32 {
        Self::entry(level).decay_ms()
    }
}

// Every speed must reach exactly zero after ROWS_PER_ROUND decrements.
const _: () = {
    let mut i = 0;
    while i < DifficultyTable::ENTRIES.len() {
        let entry = DifficultyTable::ENTRIES[i];
        assert!(entry.level as usize == i);
        assert!(entry.initial_speed_ms > 0);
        assert!(entry.initial_speed_ms % ROWS_PER_ROUND == 0);
        i += 1;
    }
};
