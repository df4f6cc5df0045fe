//! Game state module - owns one game's board, turn, and outcome
//!
//! Every drop runs to completion before the next is accepted:
//! placement, win check, tie check, then the turn flips. Rejected drops leave
//! the state untouched.

use crate::board::Board;
use crate::config::GridConfig;
use crate::snapshot::GameSnapshot;
use crate::types::*;
use crate::win::{find_win, find_win_through, WinScan};

/// Complete state of a single game
#[derive(Debug, Clone)]
pub struct GameState {
    config: GridConfig,
    board: Board,
    current: Player,
    outcome: Outcome,
    winning_run: Option<WinningRun>,
    /// Successful placements in order
    moves: Vec<Placement>,
    /// Monotonic id, incremented on reset and reconfigure
    episode_id: u32,
    scan: WinScan,
}

impl GameState {
    /// Create a new game; Player 1 moves first
    pub fn new(config: GridConfig) -> Self {
        Self {
            config,
            board: Board::for_config(&config),
            current: Player::Player1,
            outcome: Outcome::InProgress,
            winning_run: None,
            moves: Vec::with_capacity(config.cell_count()),
            episode_id: 0,
            scan: WinScan::default(),
        }
    }

    /// Select the win detector used after each placement
    pub fn with_scan(mut self, scan: WinScan) -> Self {
        self.scan = scan;
        self
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    pub fn winning_run(&self) -> Option<WinningRun> {
        self.winning_run
    }

    pub fn moves(&self) -> &[Placement] {
        &self.moves
    }

    pub fn last_move(&self) -> Option<Placement> {
        self.moves.last().copied()
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn scan(&self) -> WinScan {
        self.scan
    }

    /// Columns that would accept a drop right now
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_over() {
            return Vec::new();
        }
        self.board.open_columns().collect()
    }

    /// Drop the current player's piece into `column`
    pub fn attempt_drop(&mut self, column: usize) -> DropResult {
        if self.is_over() {
            log::trace!("drop into column {} ignored: game is over", column);
            return DropResult::Rejected(Rejection::GameOver);
        }
        if column >= self.board.width() {
            log::trace!(
                "drop into column {} ignored: grid is {} wide",
                column,
                self.board.width()
            );
            return DropResult::Rejected(Rejection::ColumnOutOfRange);
        }
        let Some(row) = self.board.landing_row(column) else {
            log::trace!("drop into column {} ignored: column is full", column);
            return DropResult::Rejected(Rejection::ColumnFull);
        };

        let player = self.current;
        let placed = self.board.place(row, column, player);
        debug_assert!(placed, "landing row {} of column {} was occupied", row, column);
        let placement = Placement {
            row,
            column,
            player,
        };
        self.moves.push(placement);
        log::debug!("{} dropped into column {}, landed on row {}", player.name(), column, row);

        if let Some(run) = self.detect_win(placement) {
            self.winning_run = Some(run);
            self.outcome = Outcome::Win(player);
            log::info!(
                "{} wins after {} moves ({} run from {:?})",
                player.name(),
                self.moves.len(),
                run.direction.as_str(),
                run.start
            );
            return DropResult::Won(placement);
        }

        if self.board.is_full() {
            self.outcome = Outcome::Tie;
            log::info!("board full after {} moves: tie", self.moves.len());
            return DropResult::Tied(placement);
        }

        self.current = player.other();
        DropResult::Placed(placement)
    }

    fn detect_win(&self, placement: Placement) -> Option<WinningRun> {
        let connect = self.config.connect();
        match self.scan {
            WinScan::FullBoard => find_win(&self.board, placement.player, connect),
            WinScan::LastMove => {
                find_win_through(&self.board, placement.row, placement.column, connect)
            }
        }
    }

    /// Discard the board and start over with the same configuration
    pub fn reset(&mut self) {
        self.board.clear();
        self.current = Player::Player1;
        self.outcome = Outcome::InProgress;
        self.winning_run = None;
        self.moves.clear();
        self.episode_id = self.episode_id.wrapping_add(1);
        log::info!("game reset (episode {})", self.episode_id);
    }

    /// Start over on a freshly sized board
    pub fn reconfigure(&mut self, config: GridConfig) {
        self.config = config;
        self.board = Board::for_config(&config);
        self.moves = Vec::with_capacity(config.cell_count());
        self.reset();
    }

    /// Capture a plain view of the game for display
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snapshot = GameSnapshot::default();
        self.snapshot_into(&mut snapshot);
        snapshot
    }

    /// Fill an existing snapshot, reusing its buffers
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.connect = self.config.connect();

        out.cells.resize_with(self.board.height(), Vec::new);
        for (dst, src) in out.cells.iter_mut().zip(self.board.rows()) {
            dst.clear();
            dst.extend(src.iter().map(|&cell| cell_number(cell)));
        }

        out.current_player = self.current.number();
        out.winner = self.outcome.winner().map(Player::number);
        out.tie = self.outcome == Outcome::Tie;
        out.move_count = self.moves.len();
        out.episode_id = self.episode_id;

        out.winning_cells.clear();
        if let Some(run) = self.winning_run {
            out.winning_cells.extend(run.cells().map(|(r, c)| [r, c]));
        }
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}
