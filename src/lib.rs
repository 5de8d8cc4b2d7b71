pub mod board;
pub mod config;
mod interaction;

use color_eyre::Result;

use board::{Board, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Open(Point),
    Flag(Point),
}

impl Action {
    fn point(&self) -> Point {
        match *self {
            Action::Open(point) | Action::Flag(point) => point,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    InvalidCoordinate,
    Playing,
    Won,
    Lost,
}

pub fn apply_action(board: &mut Board, action: Action) -> TurnOutcome {
    let point = action.point();
    if !board.contains(&point) {
        return TurnOutcome::InvalidCoordinate;
    }
    match action {
        Action::Flag(point) => {
            board.toggle_flag(&point);
            TurnOutcome::Playing
        }
        Action::Open(point) => {
            // The mine check must come first: `Board::open` has no mine
            // handling of its own and is only ever reached with a safe
            // coordinate.
            if board.cell(&point).is_mine() {
                board.reveal_all();
                return TurnOutcome::Lost;
            }
            board.open(&point);
            if board.is_won() {
                board.reveal_all();
                TurnOutcome::Won
            } else {
                TurnOutcome::Playing
            }
        }
    }
}

pub fn game_loop(board: &mut Board) -> Result<Outcome> {
    loop {
        println!("{}", board);
        let action = match interaction::prompt_action()? {
            Some(action) => action,
            None => {
                println!("Invalid coordinate. Try again.");
                continue;
            }
        };
        match apply_action(board, action) {
            TurnOutcome::InvalidCoordinate => println!("Invalid coordinate. Try again."),
            TurnOutcome::Playing => {}
            TurnOutcome::Lost => {
                interaction::print_loss();
                println!("{}", board);
                return Ok(Outcome::Lost);
            }
            TurnOutcome::Won => {
                interaction::print_win();
                println!("{}", board);
                return Ok(Outcome::Won);
            }
        }
    }
}

pub fn run() -> Result<Outcome> {
    let config = interaction::read_config()?;
    let mut board = Board::new(&config);
    interaction::print_welcome();
    game_loop(&mut board)
}
