//! Game orchestration: alternating moves, history and terminal detection.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "logging")]
use log::{debug, info};

use super::error::{GameError, MoveError};
use super::moves::{Move, SquareSpec};
use super::player::Player;
use super::state::Board;
use super::types::{Color, Coord, PieceId, PieceKind, PlayerId};

/// Game progression status. Both terminal states are absorbing.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    InProgress,
    Stalemate,
    Checkmate,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In Progress"),
            GameStatus::Stalemate => write!(f, "Stalemate"),
            GameStatus::Checkmate => write!(f, "Checkmate"),
        }
    }
}

/// A full two-player game: one board, two players, a move history and a
/// round counter. The game ends when a king is captured; there is no
/// attack-based check detection.
#[derive(Clone, Debug)]
pub struct Game {
    round: u32,
    board: Board,
    players: [Player; 2],
    moves: Vec<Move>,
    status: GameStatus,
    winner: Option<PlayerId>,
    over: bool,
}

impl Game {
    /// Start a game with players named after their colors.
    #[must_use]
    pub fn new() -> Self {
        Game::with_names("White", "Black")
    }

    /// Start a game with custom player names.
    #[must_use]
    pub fn with_names(white: impl Into<String>, black: impl Into<String>) -> Self {
        let mut board = Board::new();
        let players = [
            Player::named(Color::White, white),
            Player::named(Color::Black, black),
        ];
        for player in &players {
            player.setup(&mut board);
        }

        Game {
            round: 1,
            board,
            players,
            moves: Vec::new(),
            status: GameStatus::InProgress,
            winner: None,
            over: false,
        }
    }

    /// Validate and apply one move for `player`.
    ///
    /// Fails with [`GameError::Over`] once checkmate has been reached, and
    /// propagates any validation failure without touching the board. On a
    /// king capture the game becomes Checkmate and the capturing side wins.
    pub fn make_move<'a>(
        &mut self,
        player: PlayerId,
        piece: PieceId,
        from: impl Into<SquareSpec<'a>>,
        to: impl Into<SquareSpec<'a>>,
    ) -> Result<(), GameError> {
        if self.status == GameStatus::Checkmate {
            return Err(GameError::Over);
        }

        let mut mv = Move::new(&self.board, &self.players[player.as_usize()], piece, from, to)?;
        mv.make(&mut self.board);
        #[cfg(feature = "logging")]
        debug!("round {}: {} played {}", self.round, self.players[player.as_usize()].name(), mv);

        let captured_king = mv
            .captured()
            .map(|id| self.board.piece(id).kind() == PieceKind::King)
            .unwrap_or(false);
        let captured_color = mv.captured().map(|id| self.board.piece(id).color());
        self.moves.push(mv);

        if captured_king {
            self.status = GameStatus::Checkmate;
            self.over = true;
            // The surviving side wins.
            if let Some(color) = captured_color {
                self.winner = Some(PlayerId::for_color(color.opponent()));
            }
            #[cfg(feature = "logging")]
            info!(
                "checkmate: {} wins in round {}",
                self.winner().map(Player::name).unwrap_or("nobody"),
                self.round
            );
        } else if self
            .opponent_of(player)
            .has_no_legal_move(&self.board)
        {
            // Unreachable while has_no_legal_move always reports false.
            self.status = GameStatus::Stalemate;
            self.over = true;
        }

        Ok(())
    }

    /// Apply one move for each player (White first) and advance the round
    /// counter. The moving piece is read off each start square; turn
    /// ownership is enforced only by the per-move checks.
    pub fn play_round<'a>(
        &mut self,
        white_from: impl Into<SquareSpec<'a>>,
        white_to: impl Into<SquareSpec<'a>>,
        black_from: impl Into<SquareSpec<'a>>,
        black_to: impl Into<SquareSpec<'a>>,
    ) -> Result<(), GameError> {
        let white_from = white_from.into().resolve().map_err(GameError::Move)?;
        let white_to = white_to.into().resolve().map_err(GameError::Move)?;
        let black_from = black_from.into().resolve().map_err(GameError::Move)?;
        let black_to = black_to.into().resolve().map_err(GameError::Move)?;

        let white_piece = self.occupant_or_err(white_from)?;
        self.make_move(self.players[0].id(), white_piece, white_from, white_to)?;

        let black_piece = self.occupant_or_err(black_from)?;
        self.make_move(self.players[1].id(), black_piece, black_from, black_to)?;

        self.round += 1;
        Ok(())
    }

    fn occupant_or_err(&self, coord: Coord) -> Result<PieceId, GameError> {
        self.board
            .occupant(coord)
            .ok_or(GameError::Move(MoveError::EmptySquare { coord }))
    }

    fn opponent_of(&self, player: PlayerId) -> &Player {
        &self.players[1 - player.as_usize()]
    }

    /// Current round number, starting at 1.
    #[inline]
    #[must_use]
    pub const fn round(&self) -> u32 {
        self.round
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Whether the game has reached a terminal status.
    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.over
    }

    /// The winning player, once a king has been captured.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        self.winner.map(|id| &self.players[id.as_usize()])
    }

    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// All applied moves, oldest first.
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    #[must_use]
    pub fn white(&self) -> &Player {
        &self.players[0]
    }

    #[must_use]
    pub fn black(&self) -> &Player {
        &self.players[1]
    }

    /// Look up a player by handle.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.as_usize()]
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
