//! Solver registry for managing and creating solver instances

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;

/// First day of the event calendar
pub const FIRST_DAY: u8 = 1;
/// Number of days in the event calendar (days 1-12)
pub const EVENT_DAYS: usize = 12;

/// Calculate flat index from a day, returning None if out of bounds
#[inline]
fn calc_index(day: u8) -> Option<usize> {
    if day < FIRST_DAY || day > EVENT_DAYS as u8 {
        return None;
    }
    Some((day - FIRST_DAY) as usize)
}

/// Reconstruct the day from a flat index
#[inline]
fn from_index(index: usize) -> u8 {
    FIRST_DAY + index as u8
}

/// Factory function type for creating solver instances
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// Metadata about a registered solver factory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryInfo {
    /// The calendar day (1-12)
    pub day: u8,
    /// Number of parts this solver supports
    pub parts: u8,
}

/// Factory entry with metadata
struct FactoryEntry {
    factory: SolverFactory,
    parts: u8,
}

/// Builder for constructing a [`SolverRegistry`]
///
/// Uses a flat `Vec` indexed by day for O(1) lookup, and rejects duplicate
/// or out-of-calendar registrations. Once built, the registry is immutable.
///
/// # Example
///
/// ```
/// use advent_solver::{
///     AocParser, ParseError, RegisterableSolver, RegistryBuilder, SolveError, Solver,
/// };
///
/// struct Echo;
///
/// impl AocParser for Echo {
///     type SharedData<'a> = &'a str;
///
///     fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
///         Ok(input)
///     }
/// }
///
/// impl Solver for Echo {
///     const PARTS: u8 = 1;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, _part: u8) -> Result<String, SolveError> {
///         Ok(shared.to_string())
///     }
/// }
///
/// let builder = Echo.register_with(RegistryBuilder::new(), 1).unwrap();
/// let registry = builder.build();
/// let mut solver = registry.create_solver(1, "hello").unwrap();
/// assert_eq!(solver.solve(1).unwrap().answer, "hello");
/// ```
pub struct RegistryBuilder {
    entries: Vec<Option<FactoryEntry>>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder with pre-allocated storage
    pub fn new() -> Self {
        Self {
            entries: (0..EVENT_DAYS).map(|_| None).collect(),
        }
    }

    /// Register a solver factory with an explicit parts count
    ///
    /// Returns an error if the day is out of the calendar or already taken.
    pub fn register(
        mut self,
        day: u8,
        parts: u8,
        factory: SolverFactory,
    ) -> Result<Self, RegistrationError> {
        let index = calc_index(day).ok_or(RegistrationError::InvalidDay(day))?;

        if self.entries[index].is_some() {
            return Err(RegistrationError::DuplicateSolver(day));
        }

        self.entries[index] = Some(FactoryEntry { factory, parts });
        Ok(self)
    }

    /// Register all collected solver plugins
    ///
    /// Iterates through all plugins submitted via `inventory::submit!` and
    /// registers each one with the builder.
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_plugins_where(|_| true)
    }

    /// Register solver plugins that match the given filter predicate
    ///
    /// Only registers plugins for which the filter returns `true`, allowing
    /// selective registration based on day or tags.
    pub fn register_plugins_where<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin.solver.register_with(self, plugin.day)?;
            }
        }
        Ok(self)
    }

    /// Finalize the builder and create an immutable registry
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            entries: self.entries,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RegistryBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryBuilder")
            .field(
                "registered_days",
                &self
                    .entries
                    .iter()
                    .enumerate()
                    .filter_map(|(i, entry)| entry.as_ref().map(|_| from_index(i)))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Immutable registry for looking up and creating solvers
///
/// Maps days to factory functions that create solver instances. Once built,
/// it cannot be modified.
pub struct SolverRegistry {
    entries: Vec<Option<FactoryEntry>>,
}

impl SolverRegistry {
    /// Iterate over metadata for all registered factories, in day order
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        self.entries.iter().enumerate().filter_map(|(i, entry)| {
            entry.as_ref().map(|e| FactoryInfo {
                day: from_index(i),
                parts: e.parts,
            })
        })
    }

    /// Get metadata for a specific day
    pub fn get_info(&self, day: u8) -> Option<FactoryInfo> {
        calc_index(day)
            .and_then(|i| self.entries.get(i)?.as_ref())
            .map(|e| FactoryInfo {
                day,
                parts: e.parts,
            })
    }

    /// Check if a solver is registered for a day
    pub fn contains(&self, day: u8) -> bool {
        self.get_info(day).is_some()
    }

    /// Get the number of registered solvers
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| e.is_none())
    }

    /// Create a solver instance by invoking the factory for a specific day
    ///
    /// # Arguments
    /// * `day` - The calendar day (1-12)
    /// * `input` - The raw input string for the puzzle
    pub fn create_solver<'a>(
        &self,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let index = calc_index(day).ok_or(SolverError::InvalidDay(day))?;

        let entry = self
            .entries
            .get(index)
            .and_then(|e| e.as_ref())
            .ok_or(SolverError::NotFound(day))?;

        (entry.factory)(input).map_err(SolverError::Parse)
    }
}

/// Trait for solvers that can register themselves with a registry builder
///
/// A type-erased interface with no associated types, so different solver
/// types can be collected behind one `&'static dyn` reference in the plugin
/// system. Any type implementing [`Solver`] gets this through a blanket impl.
pub trait RegisterableSolver: Sync {
    /// Register this solver type with the builder for a specific day
    fn register_with(
        &self,
        builder: RegistryBuilder,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError>;
}

/// Blanket implementation of RegisterableSolver for all Solver types
impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: RegistryBuilder,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError> {
        fn build_instance<'a, S: Solver + 'static>(
            day: u8,
            input: &'a str,
        ) -> Result<Box<dyn DynSolver + 'a>, ParseError> {
            Ok(Box::new(SolverInstance::<S>::new(day, input)?))
        }

        builder.register(
            day,
            S::PARTS,
            Box::new(move |input| build_instance::<S>(day, input)),
        )
    }
}

/// Plugin information for automatic solver registration
///
/// Solutions submit one of these per day solver:
///
/// ```ignore
/// inventory::submit! {
///     SolverPlugin { day: 1, solver: &Day1, tags: &["dial"] }
/// }
/// ```
pub struct SolverPlugin {
    /// The calendar day (1-12)
    pub day: u8,
    /// The solver instance (type-erased)
    pub solver: &'static dyn RegisterableSolver,
    /// Tags for filtering (e.g. "dial", "fold")
    pub tags: &'static [&'static str],
}

// Enable plugin collection via inventory
inventory::collect!(SolverPlugin);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{SolveError, SolverError};
    use crate::solver::AocParser;

    struct LineCount;

    impl AocParser for LineCount {
        type SharedData<'a> = Vec<&'a str>;

        fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
            crate::input::lines(input).map_err(Into::into)
        }
    }

    impl Solver for LineCount {
        const PARTS: u8 = 1;

        fn solve_part(
            shared: &mut Self::SharedData<'_>,
            _part: u8,
        ) -> Result<String, SolveError> {
            Ok(shared.len().to_string())
        }
    }

    fn registry_with_day(day: u8) -> SolverRegistry {
        LineCount
            .register_with(RegistryBuilder::new(), day)
            .unwrap()
            .build()
    }

    #[test]
    fn create_and_solve() {
        let registry = registry_with_day(3);
        assert!(registry.contains(3));
        assert_eq!(registry.len(), 1);

        let mut solver = registry.create_solver(3, "a\nb\nc\n").unwrap();
        assert_eq!(solver.day(), 3);
        assert_eq!(solver.parts(), 1);
        assert_eq!(solver.solve(1).unwrap().answer, "3");
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let builder = LineCount
            .register_with(RegistryBuilder::new(), 1)
            .unwrap();
        let err = LineCount.register_with(builder, 1).unwrap_err();
        assert!(matches!(err, RegistrationError::DuplicateSolver(1)));
    }

    #[test]
    fn out_of_calendar_registration_is_rejected() {
        for day in [0, EVENT_DAYS as u8 + 1] {
            let err = LineCount
                .register_with(RegistryBuilder::new(), day)
                .unwrap_err();
            assert!(matches!(err, RegistrationError::InvalidDay(d) if d == day));
        }
    }

    #[test]
    fn unknown_day_is_not_found() {
        let registry = registry_with_day(1);
        assert!(matches!(
            registry.create_solver(2, "x\n"),
            Err(SolverError::NotFound(2))
        ));
        assert!(matches!(
            registry.create_solver(13, "x\n"),
            Err(SolverError::InvalidDay(13))
        ));
    }

    #[test]
    fn parse_failure_surfaces_at_creation() {
        let registry = registry_with_day(1);
        assert!(matches!(
            registry.create_solver(1, ""),
            Err(SolverError::Parse(ParseError::EmptyInput(_)))
        ));
    }

    #[test]
    fn iter_info_is_day_ordered() {
        let registry = LineCount
            .register_with(RegistryBuilder::new(), 5)
            .and_then(|b| LineCount.register_with(b, 2))
            .unwrap()
            .build();

        let days: Vec<u8> = registry.iter_info().map(|info| info.day).collect();
        assert_eq!(days, [2, 5]);
    }
}
