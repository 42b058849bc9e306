use std::collections::BTreeMap;

const DIGIT_WORDS: [(&str, u32); 9] = [
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
];

/// Sparse position -> digit map for one line.
///
/// Each word token records both its first and last match position
/// independently. A single left-to-right scan drops overlapping spellings
/// ("eighthree" holds an 8 at 0 and a 3 at 4), so both indices of every
/// token must be looked up.
fn digit_positions(line: &str) -> BTreeMap<usize, u32> {
    let mut positions = BTreeMap::new();

    for (word, value) in DIGIT_WORDS {
        if let Some(first) = line.find(word) {
            positions.insert(first, value);
        }
        if let Some(last) = line.rfind(word) {
            positions.insert(last, value);
        }
    }

    // numeral characters win when they collide with a word position
    for (idx, c) in line.char_indices() {
        if let Some(digit) = c.to_digit(10) {
            positions.insert(idx, digit);
        }
    }

    positions
}

/// Two-digit calibration value: first and last digit by position. A line
/// with a single digit uses it twice; a line with none contributes 0.
fn calibration_value(line: &str) -> u32 {
    let positions = digit_positions(line);
    match (positions.values().next(), positions.values().next_back()) {
        (Some(first), Some(last)) => first * 10 + last,
        _ => 0,
    }
}

pub fn calibration_sum(input: &str) -> u32 {
    input.lines().map(calibration_value).sum()
}

#[tracing::instrument]
pub fn process(input: &str) -> miette::Result<String> {
    Ok(calibration_sum(input).to_string())
}
