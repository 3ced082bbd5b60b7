use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Human,
    Computer,
}

impl Player {
    pub fn opponent(&self) -> Player {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Player::Human => 'X',
            Player::Computer => 'O',
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Human,
    Computer,
}

impl Cell {
    pub fn player(&self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Human => Some(Player::Human),
            Cell::Computer => Some(Player::Computer),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Cell::Empty
    }

    pub fn symbol(&self) -> char {
        self.player().map_or('.', |player| player.symbol())
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Human => Cell::Human,
            Player::Computer => Cell::Computer,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    HumanWin,
    ComputerWin,
    Tie,
}

impl GameOutcome {
    pub fn is_over(&self) -> bool {
        *self != GameOutcome::InProgress
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            GameOutcome::HumanWin => Some(Player::Human),
            GameOutcome::ComputerWin => Some(Player::Computer),
            GameOutcome::InProgress | GameOutcome::Tie => None,
        }
    }
}

impl From<Player> for GameOutcome {
    fn from(winner: Player) -> Self {
        match winner {
            Player::Human => GameOutcome::HumanWin,
            Player::Computer => GameOutcome::ComputerWin,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub player: Player,
    pub cells: [usize; 3],
}

impl WinningLine {
    pub fn new(player: Player, cells: [usize; 3]) -> Self {
        Self { player, cells }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }
}

/// Who places the first mark of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstPlayerMode {
    #[default]
    Human,
    Computer,
    Random,
}
