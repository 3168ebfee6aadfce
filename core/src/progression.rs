#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgressionGate {
    levels_beaten: usize,
    total_levels: usize,
}

impl ProgressionGate {
    pub fn new(total_levels: usize) -> Self {
        Self::with_levels_beaten(total_levels, 0)
    }

    /// Seeds the gate with a count the host restored on its own.
    pub fn with_levels_beaten(total_levels: usize, levels_beaten: usize) -> Self {
        Self {
            levels_beaten: levels_beaten.min(total_levels),
            total_levels,
        }
    }

    pub fn is_playable(&self, level_index: usize) -> bool {
        level_index < self.total_levels && level_index <= self.levels_beaten
    }

    pub fn record_level_beaten(&mut self) {
        if self.levels_beaten < self.total_levels {
            self.levels_beaten += 1;
        }
    }

    pub fn levels_beaten(&self) -> usize {
        self.levels_beaten
    }

    pub fn total_levels(&self) -> usize {
        self.total_levels
    }
}
