//! Sequential runner for the selected solvers

use crate::config::Config;
use crate::error::RunError;
use crate::input::InputStore;
use chrono::TimeDelta;
use puzzle_solver::{PuzzleId, SolverRegistry};
use std::ops::RangeInclusive;
use tracing::{debug, info};

/// Result from a single part
pub struct SolverResult {
    pub id: PuzzleId,
    pub part: u8,
    pub answer: Result<String, RunError>,
    /// Set on the first part of each puzzle only; parsing happens once
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// A puzzle to run and the parts selected for it
pub struct WorkItem {
    pub id: PuzzleId,
    pub parts: RangeInclusive<u8>,
}

/// Runs the selected solvers in (year, day, part) order
pub struct Runner {
    registry: SolverRegistry,
    inputs: InputStore,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Runner {
    pub fn new(registry: SolverRegistry, config: &Config) -> Self {
        Self {
            registry,
            inputs: InputStore::new(config.data_dir.clone(), config.input_override.clone()),
            year_filter: config.year_filter,
            day_filter: config.day_filter,
            part_filter: config.part_filter,
        }
    }

    /// Collect work items by filtering the registry
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .ids()
            .filter(|id| self.year_filter.is_none_or(|y| id.year == y))
            .filter(|id| self.day_filter.is_none_or(|d| id.day == d))
            .filter_map(|id| {
                let parts = self.filter_parts(self.registry.parts(id)?);
                Some(WorkItem { id, parts })
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on the part filter and the solver's part count
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0,
            None => 1..=max_parts,
        }
    }

    /// Run every work item, handing each part's result to `on_result` as it completes
    pub fn run(&self, mut on_result: impl FnMut(SolverResult)) {
        let work_items = self.collect_work_items();
        info!(count = work_items.len(), "running solvers");
        for work in &work_items {
            self.run_item(work, &mut on_result);
        }
    }

    fn run_item(&self, work: &WorkItem, on_result: &mut impl FnMut(SolverResult)) {
        let id = work.id;
        debug!(
            %id,
            path = %self.inputs.input_path(id).display(),
            present = self.inputs.contains(id),
            "loading input"
        );

        let solver = self
            .inputs
            .get(id)
            .map_err(RunError::from)
            .and_then(|input| self.registry.create_solver(id, &input).map_err(RunError::from));

        let mut solver = match solver {
            Ok(solver) => solver,
            Err(e) => {
                for part in work.parts.clone() {
                    on_result(error_result(id, part, e.clone()));
                }
                return;
            }
        };

        let mut parse_duration = Some(solver.parse_duration());
        for part in work.parts.clone() {
            let result = match solver.solve(part) {
                Ok(solved) => SolverResult {
                    id,
                    part,
                    solve_duration: solved.duration(),
                    answer: Ok(solved.answer),
                    parse_duration: parse_duration.take(),
                },
                Err(e) => error_result(id, part, RunError::from(puzzle_solver::SolverError::from(e))),
            };
            on_result(result);
        }
    }
}

fn error_result(id: PuzzleId, part: u8, error: RunError) -> SolverResult {
    SolverResult {
        id,
        part,
        answer: Err(error),
        parse_duration: None,
        solve_duration: TimeDelta::zero(),
    }
}
