//! Pipeline stages of a generational evolutionary algorithm.
//!
//! One generation runs the stages in this order:
//!
//! 1. [`Selection`]: draws a mating pool from the current population
//! 2. [`Variation`]: turns the mating pool into offspring
//! 3. [`Evaluation`]: scores the offspring against the problem
//! 4. [`Replacement`]: merges parents and offspring and truncates back
//! 5. [`Termination`]: decides whether another generation runs
//!
//! [`SolutionCreation`] builds the initial population before the first
//! generation.

mod creation;
mod evaluation;
mod replacement;
mod selection;
mod termination;
mod variation;

pub use creation::{Generator, SolutionCreation};
pub use evaluation::Evaluation;
pub use replacement::{RemovalPolicy, Replacement};
pub use selection::Selection;
pub use termination::Termination;
pub use variation::Variation;
