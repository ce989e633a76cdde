/// The type of tiles that can be on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TileType {
    Player1,
    Player2,
    Empty,
}

impl TileType {
    /// Character drawn for this tile on the board.
    pub(crate) fn symbol(self) -> char {
        match self {
            Self::Player1 => 'o',
            Self::Player2 => '*',
            Self::Empty => ' ',
        }
    }
}

impl Default for TileType {
    fn default() -> Self {
        Self::Empty
    }
}

/// If there has been a winner or a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Check4 {
    Win,
    Draw,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ActivePlayer {
    Player1,
    Player2,
}

/// A single player
#[derive(Debug, Clone)]
pub(super) struct Player {
    pub name: String,
    pub score: usize,
    pub tile: TileType,
}

/// Struct containing the players.
#[derive(Debug)]
pub(super) struct Players {
    pub player1: Player,
    pub player2: Player,
    active: ActivePlayer,
}

impl Players {
    /// Create a new players. Player 1 moves first.
    pub(super) fn new(player1: Player, player2: Player) -> Self {
        Self {
            player1,
            player2,
            active: ActivePlayer::Player1,
        }
    }

    /// Get the current active player.
    pub(super) fn active(&self) -> &Player {
        match self.active {
            ActivePlayer::Player1 => &self.player1,
            ActivePlayer::Player2 => &self.player2,
        }
    }

    /// Add two points to the active player after a won game.
    pub(super) fn scored(&mut self) {
        match self.active {
            ActivePlayer::Player1 => self.player1.score += 2,
            ActivePlayer::Player2 => self.player2.score += 2,
        }
    }

    /// Add one point to each player after a drawn game.
    pub(super) fn drew(&mut self) {
        self.player1.score += 1;
        self.player2.score += 1;
    }

    pub(super) fn swap(&mut self) {
        self.active = match self.active {
            ActivePlayer::Player1 => ActivePlayer::Player2,
            ActivePlayer::Player2 => ActivePlayer::Player1,
        }
    }
}
