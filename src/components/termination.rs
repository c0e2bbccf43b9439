//! Stopping criteria.

use std::time::{Duration, Instant};

/// Stateful stopping criterion, checked once per generation.
///
/// A criterion starts out running and becomes met; once met it stays met
/// until [`start`](Self::start) resets it for a new run.
///
/// # Examples
///
/// ```
/// use u_moea::components::Termination;
///
/// let mut t = Termination::by_evaluations(1000);
/// t.start();
/// t.update(600);
/// assert!(!t.is_met());
/// t.update(1000);
/// assert!(t.is_met());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Termination {
    /// Met once the cumulative evaluation count reaches `max_evaluations`.
    StoppingByEvaluations {
        max_evaluations: usize,
        evaluations: usize,
        met: bool,
    },

    /// Met once `max_computing_time` has elapsed since [`start`](Self::start).
    StoppingByTime {
        max_computing_time: Duration,
        started: Option<Instant>,
        met: bool,
    },

    /// Met as soon as any inner criterion is met.
    Any(Vec<Termination>),
}

impl Termination {
    pub fn by_evaluations(max_evaluations: usize) -> Self {
        Termination::StoppingByEvaluations {
            max_evaluations,
            evaluations: 0,
            met: false,
        }
    }

    pub fn by_time(max_computing_time: Duration) -> Self {
        Termination::StoppingByTime {
            max_computing_time,
            started: None,
            met: false,
        }
    }

    pub fn any(criteria: impl IntoIterator<Item = Termination>) -> Self {
        Termination::Any(criteria.into_iter().collect())
    }

    /// Resets the criterion to running and starts its clock.
    pub fn start(&mut self) {
        match self {
            Termination::StoppingByEvaluations {
                evaluations, met, ..
            } => {
                *evaluations = 0;
                *met = false;
            }
            Termination::StoppingByTime { started, met, .. } => {
                *started = Some(Instant::now());
                *met = false;
            }
            Termination::Any(criteria) => criteria.iter_mut().for_each(Termination::start),
        }
    }

    /// Records the cumulative evaluation count and refreshes the state.
    ///
    /// `evaluations` replaces the stored counter; it is not added to it.
    pub fn update(&mut self, evaluations: usize) {
        match self {
            Termination::StoppingByEvaluations {
                max_evaluations,
                evaluations: counter,
                met,
            } => {
                *counter = evaluations;
                *met |= *counter >= *max_evaluations;
            }
            Termination::StoppingByTime {
                max_computing_time,
                started,
                met,
            } => {
                let start = *started.get_or_insert_with(Instant::now);
                *met |= start.elapsed() >= *max_computing_time;
            }
            Termination::Any(criteria) => {
                for c in criteria.iter_mut() {
                    c.update(evaluations);
                }
            }
        }
    }

    pub fn is_met(&self) -> bool {
        match self {
            Termination::StoppingByEvaluations { met, .. }
            | Termination::StoppingByTime { met, .. } => *met,
            Termination::Any(criteria) => criteria.iter().any(Termination::is_met),
        }
    }
}
