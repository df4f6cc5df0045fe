use serde::{Deserialize, Serialize};

/// Plain view of a game for display layers
///
/// Cells are `0` (empty), `1` or `2` (player numbers), rows top to bottom.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub width: usize,
    pub height: usize,
    pub connect: usize,
    pub cells: Vec<Vec<u8>>,
    pub current_player: u8,
    pub winner: Option<u8>,
    pub tie: bool,
    pub move_count: usize,
    pub episode_id: u32,
    /// `[row, col]` pairs of the winning run, empty unless someone won
    pub winning_cells: Vec<[usize; 2]>,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn playable(&self) -> bool {
        self.winner.is_none() && !self.tie
    }
}
