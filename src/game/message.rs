use super::board::{DEFAULT_COLUMNS, DEFAULT_ROWS, MAX_DIMENSION, MIN_DIMENSION};

/// Catalog of every piece of text the game prints.
///
/// Keeping the templates in one place makes the console output easy to
/// audit; variants carry the values substituted into the template.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Message<'a> {
    GameTitle,
    FirstPlayerName,
    SecondPlayerName,
    SetBoardDimensions,
    PlayerVsPlayer(&'a str, &'a str),
    BoardSize(usize, usize),
    PlayersTurn(&'a str),
    GameOver,
    ColumnOutOfRange(usize, usize),
    IncorrectColumn,
    ColumnIsFull(usize),
    InvalidRows,
    InvalidColumns,
    InvalidInput,
    ItIsDraw,
    PlayerWon(&'a str),
    SingleOrMultipleGames,
    SingleGame,
    TotalGames(usize),
    GameNumber(usize),
    Score {
        first: &'a str,
        first_score: usize,
        second: &'a str,
        second_score: usize,
    },
}

impl std::fmt::Display for Message<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::GameTitle => write!(f, "Connect Four"),
            Self::FirstPlayerName => write!(f, "First player's name:"),
            Self::SecondPlayerName => write!(f, "Second player's name:"),
            Self::SetBoardDimensions => write!(
                f,
                "Set the board dimensions (Rows x Columns)\nPress Enter for default ({DEFAULT_ROWS} x {DEFAULT_COLUMNS})"
            ),
            Self::PlayerVsPlayer(first, second) => write!(f, "{first} VS {second}"),
            Self::BoardSize(rows, columns) => write!(f, "{rows} X {columns} board"),
            Self::PlayersTurn(name) => write!(f, "{name}'s turn:"),
            Self::GameOver => write!(f, "Game over!"),
            Self::ColumnOutOfRange(min, max) => {
                write!(f, "The column number is out of range ({min} - {max})")
            }
            Self::IncorrectColumn => write!(f, "Incorrect column number"),
            Self::ColumnIsFull(column) => write!(f, "Column {column} is full"),
            Self::InvalidRows => write!(
                f,
                "Board rows should be from {MIN_DIMENSION} to {MAX_DIMENSION}"
            ),
            Self::InvalidColumns => write!(
                f,
                "Board columns should be from {MIN_DIMENSION} to {MAX_DIMENSION}"
            ),
            Self::InvalidInput => write!(f, "Invalid input"),
            Self::ItIsDraw => write!(f, "It is a draw"),
            Self::PlayerWon(name) => write!(f, "Player {name} won"),
            Self::SingleOrMultipleGames => write!(
                f,
                "Do you want to play single or multiple games?\nFor a single game, input 1 or press Enter\nInput a number of games:"
            ),
            Self::SingleGame => write!(f, "Single game"),
            Self::TotalGames(total) => write!(f, "Total {total} games"),
            Self::GameNumber(number) => write!(f, "Game #{number}"),
            Self::Score {
                first,
                first_score,
                second,
                second_score,
            } => write!(f, "Score\n{first}: {first_score} {second}: {second_score}"),
        }
    }
}
