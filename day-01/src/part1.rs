#[tracing::instrument]
pub fn process(input: &str) -> miette::Result<String> {
    let total: u32 = input
        .lines()
        .map(|line| {
            let mut digits = line.chars().filter_map(|c| c.to_digit(10));
            let first = digits.next();
            let last = digits.last().or(first);
            match (first, last) {
                (Some(first), Some(last)) => first * 10 + last,
                _ => 0,
            }
        })
        .sum();

    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process() -> miette::Result<()> {
        let input = "1abc2
pqr3stu8vwx
a1b2c3d4e5f
treb7uchet";
        assert_eq!("142", process(input)?);
        Ok(())
    }

    #[test]
    fn test_single_digit_repeats() -> miette::Result<()> {
        assert_eq!("77", process("treb7uchet")?);
        Ok(())
    }

    #[test]
    fn test_digitless_line_contributes_zero() -> miette::Result<()> {
        assert_eq!("12", process("1abc2\nnodigits")?);
        Ok(())
    }

    #[test]
    fn test_empty_input() -> miette::Result<()> {
        assert_eq!("0", process("")?);
        Ok(())
    }
}
