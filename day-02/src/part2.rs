use crate::parser::{parse_games, ParseError};

/// Sum over all games of the power of the game's minimum cube set.
#[tracing::instrument(skip(input))]
pub fn sum_minimum_set_powers(input: &str) -> Result<u32, ParseError> {
    let games = parse_games(input)?;
    Ok(games.iter().map(|game| game.minimum_set().power()).sum())
}

#[tracing::instrument]
pub fn process(input: &str) -> miette::Result<String> {
    let total = sum_minimum_set_powers(input)?;
    Ok(total.to_string())
}
