use itertools::Itertools;
use tracing::{debug, warn};

use super::error::RemapError;
use super::interval::{Interval, MergePolicy, minimize};
use super::stage::RemapStage;

/// Tuning knobs for a pipeline run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Merge rule applied by [`minimize`] after every stage
    pub merge: MergePolicy,
}

/// The intervals in flight between two stages
///
/// Always sorted and disjoint: it can only be built through [`minimize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingSet {
    ranges: Vec<Interval>,
}

impl WorkingSet {
    pub fn new<I>(ranges: I, policy: MergePolicy) -> Self
    where
        I: IntoIterator<Item = Interval>,
    {
        Self {
            ranges: minimize(ranges, policy),
        }
    }

    pub fn ranges(&self) -> &[Interval] {
        &self.ranges
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Smallest value covered by the set
    pub fn lowest(&self) -> Option<i64> {
        self.ranges.first().map(Interval::start)
    }

    /// Total number of integers covered
    ///
    /// The ranges are disjoint and lie within `i64`, so the sum fits in `u64`.
    pub fn covered(&self) -> u64 {
        self.ranges.iter().map(Interval::len).sum()
    }
}

/// Push every interval of `input` through one stage
///
/// Each fragment is split against the rules in ascending source order. The
/// matched part is shifted by the rule's offset and is final for this stage;
/// the unmatched prefix and suffix stay pending for the remaining rules.
/// Fragments no rule touches pass through unchanged.
pub fn apply_stage(
    stage: &RemapStage,
    input: &WorkingSet,
    options: PipelineOptions,
) -> Result<WorkingSet, RemapError> {
    let mut pending = input.ranges.clone();
    let mut mapped = Vec::with_capacity(pending.len());

    for rule in stage.rules() {
        let source = rule.source();
        let mut unmatched = Vec::with_capacity(pending.len());
        for fragment in pending {
            let Some(hit) = fragment.intersect(&source) else {
                unmatched.push(fragment);
                continue;
            };
            unmatched.extend(fragment.prefix(&hit));
            mapped.push(hit.shift(rule.offset()).ok_or_else(|| {
                RemapError::invalid(format!(
                    "{hit} shifted by {} overflows in {}",
                    rule.offset(),
                    stage.name()
                ))
            })?);
            unmatched.extend(fragment.suffix(&hit));
        }
        pending = unmatched;
    }

    let (matched, passed) = (mapped.len(), pending.len());
    let output = WorkingSet::new(mapped.into_iter().chain(pending), options.merge);
    debug!(
        stage = %stage.name(),
        matched,
        passed,
        output = output.ranges.len(),
        "applied stage"
    );
    Ok(output)
}

/// Run `seeds` through every stage in order and return the lowest value reached
///
/// Fails with [`RemapError::InvalidInput`] when the seeds cover no integer.
pub fn run_pipeline<I>(seeds: I, stages: &[RemapStage], options: PipelineOptions) -> Result<i64, RemapError>
where
    I: IntoIterator<Item = Interval>,
{
    let seeds = WorkingSet::new(seeds, options.merge);
    if seeds.is_empty() {
        return Err(RemapError::invalid("no seed ranges to run through the pipeline"));
    }
    let last = stages
        .iter()
        .try_fold(seeds, |working, stage| apply_stage(stage, &working, options))?;

    last.lowest()
        .ok_or_else(|| RemapError::invalid("pipeline produced no ranges"))
}

/// Stage labels are documentary; a gap in the chain is reported, not rejected
pub(crate) fn warn_on_broken_chain(stages: &[RemapStage]) {
    for (prev, next) in stages.iter().tuple_windows() {
        if prev.dest_label() != next.source_label() {
            warn!(
                from = %prev.name(),
                to = %next.name(),
                "stage labels do not chain"
            );
        }
    }
}
