use crate::game::{
    board::{Board, DEFAULT_COLUMNS, DEFAULT_ROWS},
    components::{Check4, Player, Players, TileType},
    error::Error,
    input::{self, Dimensions, TurnInput},
    message::Message,
};

/// Game manager struct.
///
/// Runs one match: a sequence of one or more games between two players,
/// with scores carried across games.
pub struct Game {
    board: Board,
    players: Players,
    games_total: usize,
}

impl Game {
    /// Create a new game manager instance, running the setup prompts for
    /// player names, board dimensions and the number of games.
    pub fn new() -> Self {
        println!("{}", Message::GameTitle);
        let player1 = Player {
            name: read_name(Message::FirstPlayerName),
            score: 0,
            tile: TileType::Player1,
        };
        let player2 = Player {
            name: read_name(Message::SecondPlayerName),
            score: 0,
            tile: TileType::Player2,
        };
        let board = read_board();
        let games_total = read_games_total();
        log::debug!(
            "match set up: {} vs {}, {}x{} board, {} game(s)",
            player1.name,
            player2.name,
            board.rows(),
            board.columns(),
            games_total
        );
        Self {
            board,
            players: Players::new(player1, player2),
            games_total,
        }
    }

    /// Play the match until every game has been played or a player types
    /// the end command.
    pub fn start(&mut self) {
        println!(
            "{}",
            Message::PlayerVsPlayer(&self.players.player1.name, &self.players.player2.name)
        );
        println!(
            "{}",
            Message::BoardSize(self.board.rows(), self.board.columns())
        );
        if self.games_total == 1 {
            println!("{}", Message::SingleGame);
        } else {
            println!("{}", Message::TotalGames(self.games_total));
        }

        let mut game_count = 1;
        'match_loop: loop {
            if self.games_total > 1 {
                println!("{}", Message::GameNumber(game_count));
            }
            println!("{}", self.board);
            loop {
                println!("{}", Message::PlayersTurn(&self.players.active().name));
                let line = match input::read_line() {
                    Some(line) => line,
                    None => break 'match_loop,
                };
                let col = match line.parse::<TurnInput>() {
                    Ok(TurnInput::End) => break 'match_loop,
                    Ok(TurnInput::Col(col)) => col,
                    Err(_) => {
                        println!("{}", Message::IncorrectColumn);
                        continue;
                    }
                };
                if col < 1 || col > self.board.columns() {
                    println!("{}", Message::ColumnOutOfRange(1, self.board.columns()));
                    continue;
                }
                let tile = self.players.active().tile;
                let row = match self.board.place(col - 1, tile) {
                    Ok(row) => row,
                    Err(Error::ColumnFull) => {
                        println!("{}", Message::ColumnIsFull(col));
                        continue;
                    }
                    Err(_) => {
                        println!("{}", Message::ColumnOutOfRange(1, self.board.columns()));
                        continue;
                    }
                };
                println!("{}", self.board);
                match self.board.check4(tile, (col - 1, row)) {
                    Check4::Win => {
                        println!("{}", Message::PlayerWon(&self.players.active().name));
                        self.finish_game(Check4::Win);
                        game_count += 1;
                        break;
                    }
                    Check4::Draw => {
                        println!("{}", Message::ItIsDraw);
                        self.finish_game(Check4::Draw);
                        game_count += 1;
                        break;
                    }
                    Check4::None => self.players.swap(),
                }
            }
            if game_count > self.games_total {
                break;
            }
        }
        println!("{}", Message::GameOver);
    }

    /// Book-keeping after a won or drawn game: update and print scores in
    /// multi game mode, alternate the starting player, clear the board.
    fn finish_game(&mut self, outcome: Check4) {
        if self.games_total > 1 {
            match outcome {
                Check4::Win => self.players.scored(),
                Check4::Draw => self.players.drew(),
                Check4::None => (),
            }
            println!(
                "{}",
                Message::Score {
                    first: &self.players.player1.name,
                    first_score: self.players.player1.score,
                    second: &self.players.player2.name,
                    second_score: self.players.player2.score,
                }
            );
        }
        self.players.swap();
        self.board.reset();
        log::debug!(
            "game finished, score {} - {}",
            self.players.player1.score,
            self.players.player2.score
        );
    }
}

fn read_name(prompt: Message<'_>) -> String {
    println!("{prompt}");
    input::read_line().unwrap_or_default()
}

/// Prompt for board dimensions until a valid pair is entered. Enter keeps
/// the defaults.
fn read_board() -> Board {
    loop {
        println!("{}", Message::SetBoardDimensions);
        let line = input::read_line().unwrap_or_default();
        let line = line.trim();
        if line.is_empty() {
            return Board::new(DEFAULT_ROWS, DEFAULT_COLUMNS).expect("default dimensions are valid");
        }
        match line
            .parse::<Dimensions>()
            .and_then(|dims| Board::new(dims.rows, dims.columns))
        {
            Ok(board) => return board,
            Err(Error::InvalidRows) => println!("{}", Message::InvalidRows),
            Err(Error::InvalidColumns) => println!("{}", Message::InvalidColumns),
            Err(_) => println!("{}", Message::InvalidInput),
        }
    }
}

/// Prompt for the number of games until a valid count is entered. Enter
/// selects a single game.
fn read_games_total() -> usize {
    loop {
        println!("{}", Message::SingleOrMultipleGames);
        let line = input::read_line().unwrap_or_default();
        if line.is_empty() {
            return 1;
        }
        match input::parse_game_total(&line) {
            Ok(total) => return total,
            Err(_) => println!("{}", Message::InvalidInput),
        }
    }
}
