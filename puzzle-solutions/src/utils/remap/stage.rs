use std::fmt;

use super::error::RemapError;
use super::interval::Interval;

/// Maps every value in `source` to `value + offset`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemapRule {
    source: Interval,
    offset: i64,
}

impl RemapRule {
    pub const fn new(source: Interval, offset: i64) -> Self {
        Self { source, offset }
    }

    /// Build a rule from an input line `dest_start source_start span`
    pub fn from_triple(dest_start: i64, source_start: i64, span: i64) -> Result<Self, RemapError> {
        if span <= 0 {
            return Err(RemapError::invalid(format!(
                "rule {dest_start} {source_start} {span} has a non-positive span"
            )));
        }
        let source = Interval::from_start_len(source_start, span)?;
        let offset = dest_start.checked_sub(source_start).ok_or_else(|| {
            RemapError::invalid(format!("offset {dest_start} - {source_start} overflows"))
        })?;
        // the destination must be representable too
        source
            .shift(offset)
            .ok_or_else(|| RemapError::invalid(format!("destination of rule at {source_start} overflows")))?;
        Ok(Self { source, offset })
    }

    pub const fn source(&self) -> Interval {
        self.source
    }

    pub const fn offset(&self) -> i64 {
        self.offset
    }

    pub fn destination(&self) -> Option<Interval> {
        self.source.shift(self.offset)
    }

    /// `Some(value + offset)` if `value` lies in the source interval
    pub fn map_value(&self, value: i64) -> Option<i64> {
        if self.source.contains(value) {
            value.checked_add(self.offset)
        } else {
            None
        }
    }
}

impl fmt::Display for RemapRule {
    /// Renders the input form `dest_start source_start span`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.source.start().wrapping_add(self.offset),
            self.source.start(),
            self.source.len()
        )
    }
}

/// One named table of the pipeline, translating values from one domain to the next
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemapStage {
    source_label: String,
    dest_label: String,
    rules: Vec<RemapRule>,
}

impl RemapStage {
    /// Create a stage; rules are sorted by source start
    ///
    /// Rule sources are expected to be pairwise disjoint. This is not checked.
    pub fn new(source_label: impl Into<String>, dest_label: impl Into<String>, mut rules: Vec<RemapRule>) -> Self {
        rules.sort_unstable_by_key(|rule| rule.source);
        Self {
            source_label: source_label.into(),
            dest_label: dest_label.into(),
            rules,
        }
    }

    pub fn source_label(&self) -> &str {
        &self.source_label
    }

    pub fn dest_label(&self) -> &str {
        &self.dest_label
    }

    /// Rules in ascending source order
    pub fn rules(&self) -> &[RemapRule] {
        &self.rules
    }

    /// `source-to-dest`
    pub fn name(&self) -> String {
        format!("{}-to-{}", self.source_label, self.dest_label)
    }

    /// Map one value forward; values no rule covers keep their number
    pub fn map_value(&self, value: i64) -> i64 {
        self.rules
            .iter()
            .find_map(|rule| rule.map_value(value))
            .unwrap_or(value)
    }

    /// Map one value backward through the first rule whose destination covers it
    pub fn unmap_value(&self, value: i64) -> i64 {
        self.rules
            .iter()
            .find(|rule| rule.destination().is_some_and(|dest| dest.contains(value)))
            .map_or(value, |rule| value - rule.offset)
    }
}

impl fmt::Display for RemapStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} map:", self.name())?;
        for rule in &self.rules {
            write!(f, "\n{rule}")?;
        }
        Ok(())
    }
}
