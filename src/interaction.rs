use color_eyre::eyre::{bail, Result};
use regex::Regex;
use std::io::{self, Write};

use super::board::Point;
use super::config::GameConfig;
use super::Action;

pub fn read_config() -> Result<GameConfig> {
    let size = prompt_number("Enter the size of the board (n x n, n >= 9): ")?;
    let mine_count = prompt_number("Enter the number of mines: ")?;
    GameConfig::new(size, mine_count)
}

// None for a line that doesn't match the grammar; the caller re-prompts
pub fn prompt_action() -> Result<Option<Action>> {
    print!("Enter the coordinates (x, y): ");
    io::stdout().flush()?;
    let line = read_line()?;
    Ok(action_from_string(&line))
}

fn prompt_number(prompt: &str) -> Result<usize> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let line = read_line()?;
    match line.trim().parse() {
        Ok(value) => Ok(value),
        Err(_) => bail!("expected a number, got {:?}", line.trim()),
    }
}

fn read_line() -> Result<String> {
    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        bail!("unexpected end of input");
    }
    Ok(input)
}

// "x y" opens, "f x y" or "flag x y" toggles a flag
fn action_from_string(input: &str) -> Option<Action> {
    let re = Regex::new(r"^\s*(?:(f|flag)\s+)?(\d+)\s+(\d+)\s*$").unwrap();
    let cap = re.captures(input)?;
    let x = cap[2].parse().ok()?;
    let y = cap[3].parse().ok()?;
    let point = Point(x, y);
    match cap.get(1) {
        Some(_) => Some(Action::Flag(point)),
        None => Some(Action::Open(point)),
    }
}

pub fn print_welcome() {
    println!("**********************************");
    println!("* Welcome to Minesweeper!        *");
    println!("* Uncover all the cells that     *");
    println!("* don't contain mines to win     *");
    println!("* the game.                      *");
    println!("* Enter the coordinates (x, y)   *");
    println!("* to open a cell, or f x y to    *");
    println!("* flag a suspected mine.         *");
    println!("* Be careful not to hit a mine!  *");
    println!("* Good luck!                     *");
    println!("**********************************");
    println!();
}

pub fn print_loss() {
    println!("*****************************");
    println!("* Boom! You hit a mine. Game Over! *");
    println!("*****************************");
}

pub fn print_win() {
    println!("*******************************");
    println!("* Congratulations! You won the game! *");
    println!("*******************************");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_bare_coordinate_pair_as_open() {
        assert_eq!(action_from_string("3 4\n"), Some(Action::Open(Point(3, 4))));
    }

    #[test]
    fn parses_flag_commands() {
        assert_eq!(action_from_string("f 1 2"), Some(Action::Flag(Point(1, 2))));
        assert_eq!(
            action_from_string("flag 0 7\n"),
            Some(Action::Flag(Point(0, 7)))
        );
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        assert_eq!(
            action_from_string("  5   6  \n"),
            Some(Action::Open(Point(5, 6)))
        );
    }

    #[test]
    fn rejects_malformed_lines() {
        assert_eq!(action_from_string(""), None);
        assert_eq!(action_from_string("3"), None);
        assert_eq!(action_from_string("a b"), None);
        assert_eq!(action_from_string("1 2 3"), None);
        assert_eq!(action_from_string("open 1 2"), None);
        assert_eq!(action_from_string("-1 2"), None);
    }

    #[test]
    fn rejects_coordinates_that_overflow() {
        assert_eq!(action_from_string("99999999999999999999 0"), None);
    }
}
