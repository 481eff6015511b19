//! Line-oriented input format
//!
//! ```text
//! seeds: 79 14 55 13
//!
//! seed-to-soil map:
//! 50 98 2
//! 52 50 48
//!
//! soil-to-fertilizer map:
//! ...
//! ```
//!
//! The `seeds:` prefix is optional. Blocks are separated by blank lines and
//! applied in file order.

use itertools::Itertools;
use std::fmt;
use std::str::FromStr;

use super::error::RemapError;
use super::interval::Interval;
use super::pipeline::{PipelineOptions, run_pipeline, warn_on_broken_chain};
use super::stage::{RemapRule, RemapStage};

/// Parsed puzzle input: the raw seed numbers and the ordered stages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemapInput {
    seeds: Vec<i64>,
    stages: Vec<RemapStage>,
}

impl RemapInput {
    pub fn new(seeds: Vec<i64>, stages: Vec<RemapStage>) -> Self {
        Self { seeds, stages }
    }

    pub fn seeds(&self) -> &[i64] {
        &self.seeds
    }

    pub fn stages(&self) -> &[RemapStage] {
        &self.stages
    }

    /// Seed numbers read as `(start, length)` pairs
    pub fn seed_ranges(&self) -> Result<Vec<Interval>, RemapError> {
        if self.seeds.len() % 2 != 0 {
            return Err(RemapError::invalid(format!(
                "seed ranges need (start, length) pairs, got {} numbers",
                self.seeds.len()
            )));
        }
        self.seeds
            .iter()
            .tuples()
            .map(|(&start, &len)| Interval::from_start_len(start, len))
            .collect()
    }

    /// Lowest final value over the individual seed numbers
    pub fn lowest_seed_location(&self) -> Result<i64, RemapError> {
        self.seeds
            .iter()
            .map(|&seed| self.stages.iter().fold(seed, |value, stage| stage.map_value(value)))
            .min()
            .ok_or_else(|| RemapError::invalid("no seeds"))
    }

    /// Lowest final value over every seed range
    pub fn lowest_range_location(&self, options: PipelineOptions) -> Result<i64, RemapError> {
        run_pipeline(self.seed_ranges()?, &self.stages, options)
    }
}

impl fmt::Display for RemapInput {
    /// Renders the input format back, so parsed input can be echoed
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "seeds: {}", self.seeds.iter().join(" "))?;
        for stage in &self.stages {
            write!(f, "\n\n{stage}")?;
        }
        Ok(())
    }
}

/// Where the parser is relative to the blank-line separated blocks
enum State {
    /// Nothing read yet
    Start,
    /// Directly after the seed line; only a blank line may follow
    AfterSeeds,
    /// After a blank line; a header must come next
    BetweenBlocks,
    /// Inside a block, reading rule lines
    InBlock,
}

impl FromStr for RemapInput {
    type Err = RemapError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut seeds = None;
        let mut stages = Vec::new();
        let mut block: Option<(String, String, Vec<RemapRule>)> = None;
        let mut state = State::Start;

        for (idx, raw) in input.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim();

            if line.is_empty() {
                if let Some((source, dest, rules)) = block.take() {
                    stages.push(RemapStage::new(source, dest, rules));
                }
                if !matches!(state, State::Start) {
                    state = State::BetweenBlocks;
                }
                continue;
            }

            state = match state {
                State::Start => {
                    seeds = Some(parse_seed_line(line_no, line)?);
                    State::AfterSeeds
                }
                State::AfterSeeds => {
                    return Err(RemapError::parse(
                        line_no,
                        "expected a blank line after the seed line",
                    ));
                }
                State::BetweenBlocks => {
                    let (source, dest) = parse_header(line_no, line)?;
                    block = Some((source, dest, Vec::new()));
                    State::InBlock
                }
                State::InBlock => {
                    if parse_header(line_no, line).is_ok() {
                        return Err(RemapError::parse(
                            line_no,
                            "expected a blank line before the next map header",
                        ));
                    }
                    let rule = parse_rule(line_no, line)?;
                    if let Some((_, _, rules)) = block.as_mut() {
                        rules.push(rule);
                    }
                    State::InBlock
                }
            };
        }

        if let Some((source, dest, rules)) = block.take() {
            stages.push(RemapStage::new(source, dest, rules));
        }

        let seeds = seeds.ok_or_else(|| RemapError::parse(1, "missing seed line"))?;
        if seeds.is_empty() {
            return Err(RemapError::invalid("the seed line lists no seeds"));
        }
        warn_on_broken_chain(&stages);
        Ok(Self { seeds, stages })
    }
}

fn parse_number(line_no: usize, token: &str) -> Result<i64, RemapError> {
    token
        .parse()
        .map_err(|_| RemapError::parse(line_no, format!("expected an integer, found `{token}`")))
}

fn parse_seed_line(line_no: usize, line: &str) -> Result<Vec<i64>, RemapError> {
    let numbers = line.strip_prefix("seeds:").unwrap_or(line);
    numbers
        .split_whitespace()
        .map(|token| parse_number(line_no, token))
        .collect()
}

/// `<source>-to-<dest> map:`
fn parse_header(line_no: usize, line: &str) -> Result<(String, String), RemapError> {
    let malformed = || RemapError::parse(line_no, format!("malformed map header `{line}`"));

    let name = line
        .strip_suffix(" map:")
        .map(str::trim_end)
        .filter(|name| !name.is_empty() && !name.contains(char::is_whitespace))
        .ok_or_else(malformed)?;
    let (source, dest) = name.split_once("-to-").ok_or_else(malformed)?;
    if source.is_empty() || dest.is_empty() || dest.contains("-to-") {
        return Err(malformed());
    }
    Ok((source.to_string(), dest.to_string()))
}

/// `dest_start source_start span`
fn parse_rule(line_no: usize, line: &str) -> Result<RemapRule, RemapError> {
    let numbers = line
        .split_whitespace()
        .map(|token| parse_number(line_no, token))
        .collect::<Result<Vec<_>, _>>()?;
    let &[dest, source, span] = numbers.as_slice() else {
        return Err(RemapError::parse(
            line_no,
            format!("expected `dest source span`, found {} numbers", numbers.len()),
        ));
    };
    RemapRule::from_triple(dest, source, span)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let input: RemapInput = "seeds: 1 2\n\na-to-b map:\n5 1 1\n".parse().unwrap();
        assert_eq!(input.seeds(), &[1, 2]);
        assert_eq!(input.stages().len(), 1);
        assert_eq!(input.stages()[0].source_label(), "a");
        assert_eq!(input.stages()[0].dest_label(), "b");
        assert_eq!(input.stages()[0].rules(), &[RemapRule::from_triple(5, 1, 1).unwrap()]);
    }

    #[test]
    fn test_seed_prefix_is_optional() {
        let input: RemapInput = "79 14 55 13\n\nseed-to-soil map:\n52 50 48".parse().unwrap();
        assert_eq!(input.seeds(), &[79, 14, 55, 13]);
    }

    #[test]
    fn test_empty_block_and_crlf() {
        let text = "\r\nseeds: 3 4\r\n\r\na-to-b map:\r\n\r\nb-to-c map:\r\n1 2 3\r\n";
        let input: RemapInput = text.parse().unwrap();
        assert_eq!(input.stages().len(), 2);
        assert!(input.stages()[0].rules().is_empty());
        assert_eq!(input.stages()[1].rules().len(), 1);
    }

    #[test]
    fn test_seed_ranges_pairs() {
        let input = RemapInput::new(vec![79, 14, 55, 13], vec![]);
        assert_eq!(
            input.seed_ranges().unwrap(),
            vec![Interval::new(79, 93), Interval::new(55, 68)]
        );

        let odd = RemapInput::new(vec![79, 14, 55], vec![]);
        assert!(matches!(odd.seed_ranges(), Err(RemapError::InvalidInput(_))));
    }

    fn parse_err(text: &str) -> RemapError {
        text.parse::<RemapInput>().unwrap_err()
    }

    #[test]
    fn test_malformed_header() {
        assert!(matches!(
            parse_err("seeds: 1\n\nseed-soil map:\n1 2 3"),
            RemapError::Parse { line: 3, .. }
        ));
        assert!(matches!(
            parse_err("seeds: 1\n\nseed-to-soil:\n1 2 3"),
            RemapError::Parse { line: 3, .. }
        ));
        assert!(matches!(
            parse_err("seeds: 1\n\n-to-soil map:\n"),
            RemapError::Parse { line: 3, .. }
        ));
        assert!(matches!(
            parse_err("seeds: 1\n\na-to-b-to-c map:\n1 2 3"),
            RemapError::Parse { line: 3, .. }
        ));
    }

    #[test]
    fn test_non_integer_token() {
        assert!(matches!(
            parse_err("seeds: 1 x\n"),
            RemapError::Parse { line: 1, .. }
        ));
        assert!(matches!(
            parse_err("seeds: 1\n\na-to-b map:\n1 2 three"),
            RemapError::Parse { line: 4, .. }
        ));
    }

    #[test]
    fn test_wrong_rule_width() {
        assert!(matches!(
            parse_err("seeds: 1\n\na-to-b map:\n1 2"),
            RemapError::Parse { line: 4, .. }
        ));
        assert!(matches!(
            parse_err("seeds: 1\n\na-to-b map:\n1 2 3 4"),
            RemapError::Parse { line: 4, .. }
        ));
    }

    #[test]
    fn test_missing_separators() {
        assert!(matches!(
            parse_err("seeds: 1\na-to-b map:\n1 2 3"),
            RemapError::Parse { line: 2, .. }
        ));
        assert!(matches!(
            parse_err("seeds: 1\n\na-to-b map:\n1 2 3\nb-to-c map:\n"),
            RemapError::Parse { line: 5, .. }
        ));
    }

    #[test]
    fn test_rule_outside_block() {
        assert!(matches!(
            parse_err("seeds: 1\n\n1 2 3\n"),
            RemapError::Parse { line: 3, .. }
        ));
    }

    #[test]
    fn test_invalid_input() {
        assert!(matches!(parse_err(""), RemapError::Parse { .. }));
        assert!(matches!(parse_err("seeds:\n"), RemapError::InvalidInput(_)));
        assert!(matches!(
            parse_err("seeds: 1\n\na-to-b map:\n1 2 0"),
            RemapError::InvalidInput(_)
        ));
    }

    #[derive(Clone, Default)]
    struct CapturedLog(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_broken_chain_warned_once_per_input() {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let input: RemapInput = "seeds: 1 2\n\na-to-b map:\n5 1 1\n\nc-to-d map:\n"
                .parse()
                .unwrap();
            assert_eq!(input.lowest_seed_location(), Ok(2));
            assert_eq!(input.lowest_range_location(PipelineOptions::default()), Ok(2));
        });

        let text = String::from_utf8(log.0.lock().unwrap().clone()).unwrap();
        assert_eq!(text.matches("stage labels do not chain").count(), 1, "{text}");
    }

    #[test]
    fn test_display_round_trips() {
        let text = "seeds: 79 14 55 13\n\nseed-to-soil map:\n52 50 48\n50 98 2\n\nsoil-to-x map:";
        let input: RemapInput = text.parse().unwrap();
        assert_eq!(input.to_string(), text);
        assert_eq!(input.to_string().parse::<RemapInput>().unwrap(), input);
    }
}
