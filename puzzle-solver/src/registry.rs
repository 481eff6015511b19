//! Solver registry for managing and creating solver instances
//!
//! The registry is an explicit map from [`PuzzleId`] to a factory that parses
//! input and returns a type-erased [`DynSolver`]. It is assembled once at
//! startup through [`RegistryBuilder`] and immutable afterwards.

use crate::PuzzleId;
use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;
use std::collections::BTreeMap;

/// Thread-safe factory function type for creating solver instances
pub type SolverFactory = Box<dyn Fn(&str) -> Result<Box<dyn DynSolver>, ParseError> + Send + Sync>;

/// Factory entry with metadata
struct SolverFactoryEntry {
    factory: SolverFactory,
    parts: u8,
}

/// Builder for constructing a [`SolverRegistry`] with a fluent API
///
/// Registration rejects duplicates and identifiers outside the calendar.
///
/// # Example
///
/// ```ignore
/// # use puzzle_solver::{PuzzleId, RegistryBuilder};
/// let registry = RegistryBuilder::new()
///     .register(PuzzleId::new(2023, 1), 2, |input| { /* ... */ })
///     .unwrap()
///     .build();
/// ```
pub struct RegistryBuilder {
    solvers: BTreeMap<PuzzleId, SolverFactoryEntry>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder
    pub fn new() -> Self {
        Self {
            solvers: BTreeMap::new(),
        }
    }

    /// Register a solver factory for a puzzle
    ///
    /// # Arguments
    /// * `id` - The puzzle the factory solves
    /// * `parts` - Number of parts the created solvers support
    /// * `factory` - A function that takes input and returns a boxed DynSolver
    ///
    /// # Returns
    /// * `Ok(Self)` - Builder with the solver registered, ready for chaining
    /// * `Err(RegistrationError)` - Invalid id, or a solver is already registered for it
    pub fn register<F>(mut self, id: PuzzleId, parts: u8, factory: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&str) -> Result<Box<dyn DynSolver>, ParseError> + Send + Sync + 'static,
    {
        if !id.is_valid() {
            return Err(RegistrationError::InvalidPuzzleId {
                year: id.year,
                day: id.day,
            });
        }
        if self.solvers.contains_key(&id) {
            return Err(RegistrationError::DuplicateSolver(id));
        }
        self.solvers.insert(
            id,
            SolverFactoryEntry {
                factory: Box::new(factory),
                parts,
            },
        );
        Ok(self)
    }

    /// Register all collected solver plugins
    ///
    /// Iterates through all plugins submitted via `inventory::submit!` (usually
    /// through `#[derive(PuzzleSolver)]`) and registers each one.
    ///
    /// ```no_run
    /// # use puzzle_solver::RegistryBuilder;
    /// let registry = RegistryBuilder::new()
    ///     .register_all_plugins()
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register solver plugins that match the given filter predicate
    ///
    /// ```no_run
    /// # use puzzle_solver::RegistryBuilder;
    /// // Register only 2023 solvers tagged as "ranges"
    /// let registry = RegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| {
    ///         plugin.id.year == 2023 && plugin.tags.contains(&"ranges")
    ///     })
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin.solver.register_with(self, plugin.id)?;
            }
        }
        Ok(self)
    }

    /// Finalize the builder and create an immutable registry
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            solvers: self.solvers,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable registry for looking up and creating solvers
pub struct SolverRegistry {
    solvers: BTreeMap<PuzzleId, SolverFactoryEntry>,
}

impl SolverRegistry {
    /// Create a solver instance for a puzzle by parsing `input`
    ///
    /// # Returns
    /// * `Ok(Box<dyn DynSolver>)` - Successfully created solver
    /// * `Err(SolverError)` - Solver not found or parsing failed
    pub fn create_solver(&self, id: PuzzleId, input: &str) -> Result<Box<dyn DynSolver>, SolverError> {
        let entry = self.solvers.get(&id).ok_or(SolverError::NotFound(id))?;
        (entry.factory)(input).map_err(SolverError::ParseError)
    }

    /// Check if a solver is registered for the puzzle
    pub fn contains(&self, id: PuzzleId) -> bool {
        self.solvers.contains_key(&id)
    }

    /// Number of parts supported by the solver registered for `id`
    pub fn parts(&self, id: PuzzleId) -> Option<u8> {
        self.solvers.get(&id).map(|e| e.parts)
    }

    /// Registered puzzle ids in chronological order
    pub fn ids(&self) -> impl Iterator<Item = PuzzleId> + '_ {
        self.solvers.keys().copied()
    }

    /// Get the number of registered solvers
    pub fn len(&self) -> usize {
        self.solvers.len()
    }

    /// Check if no solver is registered
    pub fn is_empty(&self) -> bool {
        self.solvers.is_empty()
    }
}

/// Trait for solvers that can register themselves with a registry builder
///
/// Has no associated types, so solvers of different types can be collected
/// in a single container (see [`SolverPlugin`]).
///
/// Any type implementing [`Solver`] gets this through a blanket impl.
pub trait RegisterableSolver: Sync {
    /// Register this solver type with the builder for the given puzzle
    fn register_with(&self, builder: RegistryBuilder, id: PuzzleId) -> Result<RegistryBuilder, RegistrationError>;

    /// Get the number of parts this solver supports
    fn parts(&self) -> u8;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
    S::Shared: 'static,
{
    fn register_with(&self, builder: RegistryBuilder, id: PuzzleId) -> Result<RegistryBuilder, RegistrationError> {
        builder.register(id, S::PARTS, move |input: &str| {
            let instance = SolverInstance::<S>::new(id, input)?;
            Ok(Box::new(instance) as Box<dyn DynSolver>)
        })
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

/// Plugin information for automatic solver registration
///
/// # Example
///
/// ```no_run
/// use puzzle_solver::{PuzzleId, PuzzleParser, ParseError, SolveError, Solver, SolverPlugin};
///
/// struct Day1Solver;
///
/// impl PuzzleParser for Day1Solver {
///     type Shared = ();
///
///     fn parse(_: &str) -> Result<Self::Shared, ParseError> {
///         Ok(())
///     }
/// }
///
/// impl Solver for Day1Solver {
///     const PARTS: u8 = 1;
///
///     fn solve_part(_: &mut Self::Shared, part: u8) -> Result<String, SolveError> {
///         Err(SolveError::PartNotImplemented(part))
///     }
/// }
///
/// puzzle_solver::inventory::submit! {
///     SolverPlugin {
///         id: PuzzleId::new(2023, 1),
///         solver: &Day1Solver,
///         tags: &["easy"],
///     }
/// }
/// ```
pub struct SolverPlugin {
    /// The puzzle this plugin solves
    pub id: PuzzleId,
    /// The solver instance (type-erased)
    pub solver: &'static dyn RegisterableSolver,
    /// Optional tags for filtering (e.g., "ranges", "parsing")
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);

/// Macro to register a solver type with a registry builder variable
///
/// Panics on duplicate registration; intended for tests and small binaries.
///
/// ```
/// use puzzle_solver::{PuzzleId, PuzzleParser, register_solver, ParseError, RegistryBuilder, SolveError, Solver};
///
/// struct MyDay1Solver;
///
/// impl PuzzleParser for MyDay1Solver {
///     type Shared = ();
///
///     fn parse(_: &str) -> Result<Self::Shared, ParseError> {
///         Ok(())
///     }
/// }
///
/// impl Solver for MyDay1Solver {
///     const PARTS: u8 = 1;
///
///     fn solve_part(_: &mut Self::Shared, _: u8) -> Result<String, SolveError> {
///         Ok("done".to_string())
///     }
/// }
///
/// let mut builder = RegistryBuilder::new();
/// register_solver!(builder, MyDay1Solver, 2023, 1);
/// let registry = builder.build();
/// assert!(registry.contains(PuzzleId::new(2023, 1)));
/// ```
#[macro_export]
macro_rules! register_solver {
    ($builder:expr, $solver:ty, $year:expr, $day:expr) => {
        $builder = {
            let id = $crate::PuzzleId::new($year, $day);
            $builder
                .register(id, <$solver as $crate::Solver>::PARTS, move |input: &str| {
                    let instance = $crate::SolverInstance::<$solver>::new(id, input)?;
                    Ok(Box::new(instance) as Box<dyn $crate::DynSolver>)
                })
                .expect("Failed to register solver")
        };
    };
}
