//! Game session - the state machine that owns all play state
//!
//! A [`Session`] ties the board, the current and next pieces, the randomizer
//! and the score/pacing state together. It is driven from outside:
//!
//! - the tick source calls [`Session::tick`] every [`Session::interval_ms`];
//! - the input adapter calls [`Session::command`];
//! - the renderer reads [`Session::snapshot`].
//!
//! Nothing here blocks, sleeps or reads a clock. Time only advances through
//! `tick()`, which also makes the placement-time bonus reproducible.

use crate::board::Board;
use crate::config::{check_board_size, ConfigError, SessionConfig};
use crate::piece::Piece;
use crate::rng::{Randomizer, UniformRandomizer};
use crate::scoring::{Pacer, ScoreResult};
use crate::snapshot::{GameSnapshot, PieceSnapshot};
use crate::types::{Command, PieceKind, MAX_BOARD_SIDE, MIN_BOARD_SIDE};

/// Lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    Playing,
    GameOver,
}

/// Emitted after a piece locks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub lines_cleared: u32,
    pub score: ScoreResult,
    /// The replacement piece could not spawn.
    pub game_over: bool,
}

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Game is over; nothing happened.
    Ignored,
    /// The current piece moved down one row.
    Fell,
    /// The current piece locked into the board.
    Locked(LockEvent),
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Session<R = UniformRandomizer> {
    config: SessionConfig,
    board: Board,
    current: Piece,
    next: PieceKind,
    pacer: Pacer,
    randomizer: R,
    state: SessionState,
    /// Simulated time since the current piece spawned.
    piece_elapsed_ms: u32,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
    /// Monotonic episode id (increments on restart).
    episode: u32,
    /// Pieces spawned this episode, including one that failed to fit.
    pieces_spawned: u32,
}

impl Session<UniformRandomizer> {
    /// Create a new game from a configuration
    ///
    /// Uses `config.seed` when set, OS entropy otherwise.
    pub fn new(config: SessionConfig) -> Self {
        let randomizer = config
            .seed
            .map_or_else(UniformRandomizer::from_entropy, UniformRandomizer::new);
        Self::with_randomizer(config, randomizer)
    }
}

impl<R: Randomizer> Session<R> {
    /// Create a new game with an explicit piece source
    ///
    /// Board sides outside the supported range are clamped; use
    /// [`SessionConfig::validate`] to reject them instead.
    pub fn with_randomizer(config: SessionConfig, randomizer: R) -> Self {
        let config = clamp_config(config);
        let board = Board::new(config.width, config.height);
        Self::start(config, board, randomizer)
    }

    /// Start a game on a pre-filled board
    ///
    /// The board's own dimensions take precedence over `config` and must lie
    /// in `MIN_BOARD_SIDE..=MAX_BOARD_SIDE`. If the first piece cannot spawn
    /// the session starts in [`SessionState::GameOver`].
    pub fn with_board(
        config: SessionConfig,
        board: Board,
        randomizer: R,
    ) -> Result<Self, ConfigError> {
        check_board_size(board.width() as usize, board.height() as usize)?;
        Ok(Self::start(config, board, randomizer))
    }

    fn start(config: SessionConfig, board: Board, randomizer: R) -> Self {
        let config = SessionConfig {
            width: board.width(),
            height: board.height(),
            ..config
        };
        let mut session = Self {
            config,
            board,
            current: Piece::spawn(PieceKind::I, config.width),
            next: PieceKind::I,
            pacer: Pacer::new(config.policy, config.initial_interval_ms),
            randomizer,
            state: SessionState::Playing,
            piece_elapsed_ms: 0,
            last_event: None,
            episode: 0,
            pieces_spawned: 0,
        };
        session.next = session.randomizer.next_kind();
        session.spawn_next();
        session
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn game_over(&self) -> bool {
        self.state == SessionState::GameOver
    }

    pub fn score(&self) -> u32 {
        self.pacer.score()
    }

    pub fn level(&self) -> u32 {
        self.pacer.level()
    }

    pub fn lines(&self) -> u32 {
        self.pacer.lines()
    }

    /// How long the host should wait between ticks
    pub fn interval_ms(&self) -> u32 {
        self.pacer.interval_ms()
    }

    pub fn current(&self) -> Piece {
        self.current
    }

    pub fn next_kind(&self) -> PieceKind {
        self.next
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn episode(&self) -> u32 {
        self.episode
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        self.board.write_rows(&mut out.grid);
        out.current = PieceSnapshot::from(self.current);
        out.next = self.next;
        out.score = self.pacer.score();
        out.level = self.pacer.level();
        out.lines = self.pacer.lines();
        out.interval_ms = self.pacer.interval_ms();
        out.game_over = self.game_over();
        out.episode = self.episode;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot {
            width: 0,
            height: 0,
            grid: Vec::new(),
            current: PieceSnapshot::from(self.current),
            next: self.next,
            score: 0,
            level: 0,
            lines: 0,
            interval_ms: 0,
            game_over: false,
            episode: 0,
        };
        self.snapshot_into(&mut s);
        s
    }

    /// Advance the simulation by one step
    ///
    /// Moves the current piece down a row if it fits; otherwise locks it,
    /// clears full rows, scores, and spawns the next piece.
    pub fn tick(&mut self) -> TickOutcome {
        if self.game_over() {
            return TickOutcome::Ignored;
        }

        self.piece_elapsed_ms = self
            .piece_elapsed_ms
            .saturating_add(self.pacer.interval_ms());

        if self.try_move(0, 1) {
            return TickOutcome::Fell;
        }

        TickOutcome::Locked(self.lock_current())
    }

    /// Apply an input command
    ///
    /// Returns whether the state changed. Illegal moves and rotations are
    /// rejected silently.
    pub fn command(&mut self, command: Command) -> bool {
        match (self.state, command) {
            (SessionState::GameOver, Command::Restart) => {
                self.restart();
                true
            }
            (SessionState::GameOver, _) | (SessionState::Playing, Command::Restart) => false,
            (SessionState::Playing, Command::MoveLeft) => self.try_move(-1, 0),
            (SessionState::Playing, Command::MoveRight) => self.try_move(1, 0),
            // Never locks; locking only happens on tick.
            (SessionState::Playing, Command::SoftDrop) => self.try_move(0, 1),
            (SessionState::Playing, Command::Rotate) => self.try_rotate(),
        }
    }

    /// Try to move the current piece
    fn try_move(&mut self, dcol: i8, drow: i8) -> bool {
        let moved = self.current.moved(dcol, drow);
        if !self.board.can_place(&moved.shape, moved.col, moved.row) {
            return false;
        }
        self.current = moved;
        true
    }

    /// Try to rotate the current piece in place (no kicks)
    fn try_rotate(&mut self) -> bool {
        let shape = self.current.rotated();
        if !self.board.can_place(&shape, self.current.col, self.current.row) {
            return false;
        }
        self.current = self.current.with_shape(shape);
        true
    }

    /// Lock the current piece onto the board and handle line clears
    fn lock_current(&mut self) -> LockEvent {
        let piece = self.current;
        self.board
            .lock(&piece.shape, piece.col, piece.row, piece.kind);

        let lines_cleared = self.board.clear_full_rows() as u32;
        let score = self.pacer.apply(lines_cleared, self.piece_elapsed_ms);

        let spawned = self.spawn_next();

        let event = LockEvent {
            kind: piece.kind,
            lines_cleared,
            score,
            game_over: !spawned,
        };
        self.last_event = Some(event);
        event
    }

    /// Promote the next piece to current and draw a new next
    ///
    /// Returns false (and ends the game) if the new piece does not fit.
    fn spawn_next(&mut self) -> bool {
        let kind = self.next;
        self.next = self.randomizer.next_kind();
        self.current = Piece::spawn(kind, self.board.width());
        self.piece_elapsed_ms = 0;
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);

        if !self
            .board
            .can_place(&self.current.shape, self.current.col, self.current.row)
        {
            self.state = SessionState::GameOver;
            return false;
        }
        true
    }

    /// Reset to a fresh game, keeping the randomizer stream going
    fn restart(&mut self) {
        self.board.clear();
        self.pacer = Pacer::new(self.config.policy, self.config.initial_interval_ms);
        self.state = SessionState::Playing;
        self.last_event = None;
        self.episode = self.episode.wrapping_add(1);
        self.pieces_spawned = 0;
        self.next = self.randomizer.next_kind();
        self.spawn_next();
    }
}

fn clamp_config(config: SessionConfig) -> SessionConfig {
    SessionConfig {
        width: config.width.clamp(MIN_BOARD_SIDE, MAX_BOARD_SIDE),
        height: config.height.clamp(MIN_BOARD_SIDE, MAX_BOARD_SIDE),
        initial_interval_ms: config.initial_interval_ms.max(1),
        ..config
    }
}
