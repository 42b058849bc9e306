use std::collections::HashMap;

use miette::{Diagnostic, SourceSpan};
use nom::{
    bytes::complete::tag,
    character::complete::{alpha1, char, digit1},
    combinator::{all_consuming, map, map_res},
    multi::separated_list1,
    sequence::{preceded, separated_pair},
    Finish, IResult,
};
use thiserror::Error;

/// A cube color, normalized to lowercase at parse time. Any alphabetic word
/// is accepted: colors outside the bag still need to parse because part 2
/// counts them toward a game's minimum set, while part 1 treats them as
/// having a limit of zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color(String);

impl Color {
    pub fn new(name: &str) -> Self {
        Self(name.to_ascii_lowercase())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

/// Per-color limits on how many cubes the bag can hold.
pub type Bag = HashMap<Color, u32>;

/// One draw of cubes within a game.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CubeSet {
    counts: HashMap<Color, u32>,
}

impl CubeSet {
    pub fn get(&self, color: &Color) -> Option<u32> {
        self.counts.get(color).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Color, u32)> {
        self.counts.iter().map(|(color, &count)| (color, count))
    }

    /// True when every color drawn fits under the bag's limit. A color the
    /// bag does not list has an effective limit of zero.
    pub fn fits(&self, bag: &Bag) -> bool {
        self.counts
            .iter()
            .all(|(color, &count)| count <= bag.get(color).copied().unwrap_or(0))
    }

    /// Product of all counts; empty product is 1.
    pub fn power(&self) -> u32 {
        self.counts.values().product()
    }
}

impl FromIterator<(Color, u32)> for CubeSet {
    fn from_iter<I: IntoIterator<Item = (Color, u32)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: u32,
    pub sets: Vec<CubeSet>,
}

impl Game {
    pub fn is_possible(&self, bag: &Bag) -> bool {
        self.sets.iter().all(|set| set.fits(bag))
    }

    /// Smallest bag consistent with every set of this game: the per-color
    /// maximum across sets. Colors never drawn do not appear at all.
    pub fn minimum_set(&self) -> CubeSet {
        let mut counts: HashMap<Color, u32> = HashMap::new();
        for set in &self.sets {
            for (color, count) in set.iter() {
                let entry = counts.entry(color.clone()).or_insert(0);
                *entry = (*entry).max(count);
            }
        }
        CubeSet { counts }
    }
}

#[derive(Debug, Diagnostic, Error)]
#[error("failed to parse game record {index}: {record}")]
#[diagnostic(code(cube_game::parse_error))]
pub struct ParseError {
    pub record: String,
    pub index: usize,
    #[source_code]
    src: String,
    #[label("malformed here")]
    span: SourceSpan,
}

impl ParseError {
    fn new(record: &str, index: usize, offset: usize) -> Self {
        Self {
            record: record.to_string(),
            index,
            src: record.to_string(),
            span: (offset, record.len() - offset).into(),
        }
    }
}

// region: parser
fn parse_u32(input: &str) -> IResult<&str, u32> {
    map_res(digit1, |s: &str| s.parse::<u32>())(input)
}

fn cube(input: &str) -> IResult<&str, (Color, u32)> {
    map(
        separated_pair(parse_u32, char(' '), alpha1),
        |(count, name)| (Color::new(name), count),
    )(input)
}

fn cube_set(input: &str) -> IResult<&str, CubeSet> {
    map(separated_list1(tag(", "), cube), CubeSet::from_iter)(input)
}

fn game(input: &str) -> IResult<&str, Game> {
    let (input, id) = preceded(tag("Game "), parse_u32)(input)?;
    let (input, _) = tag(": ")(input)?;
    let (input, sets) = separated_list1(tag("; "), cube_set)(input)?;
    Ok((input, Game { id, sets }))
}
// endregion

fn parse_record(line: &str) -> Result<Game, usize> {
    match all_consuming(game)(line).finish() {
        Ok((_, game)) => Ok(game),
        Err(e) => Err(line.len() - e.input.len()),
    }
}

/// Parses every non-blank line as a `Game` record. Fails atomically: one
/// malformed record errors the whole call, carrying the record's text and
/// zero-based index.
#[tracing::instrument(skip(input))]
pub fn parse_games(input: &str) -> Result<Vec<Game>, ParseError> {
    input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(index, line)| parse_record(line).map_err(|offset| ParseError::new(line, index, offset)))
        .collect()
}
