use std::collections::HashMap;

use crate::parser::{parse_games, Bag, Color, ParseError};

/// Bag contents given by the puzzle statement.
pub fn reference_bag() -> Bag {
    HashMap::from([
        (Color::new("red"), 12),
        (Color::new("green"), 13),
        (Color::new("blue"), 14),
    ])
}

/// Sum of ids of games whose every draw fits in `bag`.
#[tracing::instrument(skip(input, bag))]
pub fn sum_possible_game_ids(input: &str, bag: &Bag) -> Result<u32, ParseError> {
    let games = parse_games(input)?;
    Ok(games
        .iter()
        .filter(|game| game.is_possible(bag))
        .map(|game| game.id)
        .sum())
}

#[tracing::instrument]
pub fn process(input: &str) -> miette::Result<String> {
    let total = sum_possible_game_ids(input, &reference_bag())?;
    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green";

    #[test]
    fn test_process() -> miette::Result<()> {
        assert_eq!("8", process(SAMPLE)?);
        Ok(())
    }

    #[test]
    fn test_unknown_color_is_impossible() -> miette::Result<()> {
        let input = "Game 1: 1 yellow\nGame 2: 1 red";
        assert_eq!(2, sum_possible_game_ids(input, &reference_bag())?);
        Ok(())
    }

    #[test]
    fn test_no_possible_games() -> miette::Result<()> {
        let input = "Game 1: 20 red";
        assert_eq!(0, sum_possible_game_ids(input, &reference_bag())?);
        Ok(())
    }

    #[test]
    fn test_empty_input() -> miette::Result<()> {
        assert_eq!("0", process("")?);
        Ok(())
    }

    #[test]
    fn test_malformed_record_errors() {
        assert!(process("Game 1: 3 blue\nnot a game").is_err());
    }
}
