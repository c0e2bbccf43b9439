//! NSGA-II configuration.
//!
//! [`Nsga2Config`] holds all parameters that control the generational loop.

use crate::components::RemovalPolicy;
use crate::error::{MoeaError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for NSGA-II on real-coded problems.
///
/// # Defaults
///
/// ```
/// use u_moea::algorithm::Nsga2Config;
///
/// let config = Nsga2Config::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_evaluations, 25_000);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_moea::algorithm::Nsga2Config;
/// use u_moea::components::RemovalPolicy;
///
/// let config = Nsga2Config::default()
///     .with_population_size(200)
///     .with_offspring_population_size(200)
///     .with_removal_policy(RemovalPolicy::Sequential)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Nsga2Config {
    /// Number of solutions kept between generations.
    ///
    /// Typical range: 50–500.
    pub population_size: usize,

    /// Number of offspring produced per generation.
    ///
    /// Usually equal to `population_size`.
    pub offspring_population_size: usize,

    /// Evaluation budget, counting the initial population.
    pub max_evaluations: usize,

    /// Probability of applying SBX to a pair of parents (0.0–1.0).
    pub crossover_probability: f64,

    /// SBX distribution index. Larger values keep children closer to
    /// their parents.
    pub crossover_distribution_index: f64,

    /// Per-variable probability of polynomial mutation (0.0–1.0).
    ///
    /// `None` uses `1 / number_of_variables`.
    pub mutation_probability: Option<f64>,

    /// Polynomial mutation distribution index.
    pub mutation_distribution_index: f64,

    /// How the overflowing front is truncated during replacement.
    pub removal_policy: RemovalPolicy,

    /// Whether to evaluate and rank in parallel using rayon.
    ///
    /// Has no effect unless the `parallel` feature is enabled.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Optional wall-clock time limit in milliseconds.
    ///
    /// Checked once per generation, so a run may exceed the limit by one
    /// generation's worth of work. `None` disables it (the default).
    pub time_limit_ms: Option<u64>,
}

impl Default for Nsga2Config {
    fn default() -> Self {
        Self {
            population_size: 100,
            offspring_population_size: 100,
            max_evaluations: 25_000,
            crossover_probability: 0.9,
            crossover_distribution_index: 20.0,
            mutation_probability: None,
            mutation_distribution_index: 20.0,
            removal_policy: RemovalPolicy::OneShot,
            parallel: false,
            seed: None,
            time_limit_ms: None,
        }
    }
}

impl Nsga2Config {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of offspring per generation.
    pub fn with_offspring_population_size(mut self, n: usize) -> Self {
        self.offspring_population_size = n;
        self
    }

    /// Sets the evaluation budget.
    pub fn with_max_evaluations(mut self, n: usize) -> Self {
        self.max_evaluations = n;
        self
    }

    /// Sets the SBX probability, clamped to `[0, 1]`.
    ///
    /// Clamping does not make the field trusted: NaN passes through and
    /// direct field writes bypass the builder, so [`validate`](Self::validate)
    /// still checks the range.
    pub fn with_crossover_probability(mut self, p: f64) -> Self {
        self.crossover_probability = p.clamp(0.0, 1.0);
        self
    }

    /// Sets the SBX distribution index.
    pub fn with_crossover_distribution_index(mut self, eta: f64) -> Self {
        self.crossover_distribution_index = eta.max(0.0);
        self
    }

    /// Sets the per-variable mutation probability, clamped to `[0, 1]`.
    /// NaN is kept and rejected by [`validate`](Self::validate).
    pub fn with_mutation_probability(mut self, p: f64) -> Self {
        self.mutation_probability = Some(p.clamp(0.0, 1.0));
        self
    }

    /// Sets the polynomial mutation distribution index.
    pub fn with_mutation_distribution_index(mut self, eta: f64) -> Self {
        self.mutation_distribution_index = eta.max(0.0);
        self
    }

    /// Sets the truncation policy.
    pub fn with_removal_policy(mut self, policy: RemovalPolicy) -> Self {
        self.removal_policy = policy;
        self
    }

    /// Enables or disables parallel evaluation and ranking.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Preset for quick runs: small population, 5 000 evaluations.
    ///
    /// - Population: 50, Offspring: 50, Time limit: 10s
    pub fn fast() -> Self {
        Self {
            population_size: 50,
            offspring_population_size: 50,
            max_evaluations: 5_000,
            time_limit_ms: Some(10_000),
            ..Self::default()
        }
    }

    /// Preset matching the customary NSGA-II benchmark budget.
    ///
    /// - Population: 100, Offspring: 100, Evaluations: 25 000, Time limit: 30s
    pub fn balanced() -> Self {
        Self {
            time_limit_ms: Some(30_000),
            ..Self::default()
        }
    }

    /// Preset for dense fronts: large population, sequential truncation.
    ///
    /// - Population: 200, Offspring: 200, Evaluations: 100 000, Time limit: 60s
    pub fn quality() -> Self {
        Self {
            population_size: 200,
            offspring_population_size: 200,
            max_evaluations: 100_000,
            removal_policy: RemovalPolicy::Sequential,
            time_limit_ms: Some(60_000),
            ..Self::default()
        }
    }

    /// Selects a preset from the number of decision variables.
    ///
    /// - `number_of_variables < 10` → [`fast()`](Self::fast)
    /// - `10 ≤ number_of_variables < 50` → [`balanced()`](Self::balanced)
    /// - `number_of_variables ≥ 50` → [`quality()`](Self::quality)
    pub fn auto_select(number_of_variables: usize) -> Self {
        if number_of_variables < 10 {
            Self::fast()
        } else if number_of_variables < 50 {
            Self::balanced()
        } else {
            Self::quality()
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// [`MoeaError::InvalidConfig`] describing the first invalid parameter.
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: &str| Err(MoeaError::InvalidConfig(msg.into()));

        if self.population_size < 2 {
            return invalid("population_size must be at least 2");
        }
        if self.offspring_population_size == 0 {
            return invalid("offspring_population_size must be at least 1");
        }
        if self.max_evaluations < self.population_size {
            return invalid("max_evaluations must cover the initial population");
        }
        if !(0.0..=1.0).contains(&self.crossover_probability) {
            return invalid("crossover_probability must be in [0, 1]");
        }
        if let Some(p) = self.mutation_probability {
            if !(0.0..=1.0).contains(&p) {
                return invalid("mutation_probability must be in [0, 1]");
            }
        }
        if self.crossover_distribution_index.is_nan() || self.crossover_distribution_index < 0.0 {
            return invalid("crossover_distribution_index must be non-negative");
        }
        if self.mutation_distribution_index.is_nan() || self.mutation_distribution_index < 0.0 {
            return invalid("mutation_distribution_index must be non-negative");
        }
        if self.time_limit_ms == Some(0) {
            return invalid("time_limit_ms must be positive or None");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Nsga2Config::default();
        assert_eq!(config.population_size, 100);
        assert_eq!(config.offspring_population_size, 100);
        assert_eq!(config.max_evaluations, 25_000);
        assert!((config.crossover_probability - 0.9).abs() < 1e-10);
        assert!((config.crossover_distribution_index - 20.0).abs() < 1e-10);
        assert!(config.mutation_probability.is_none());
        assert!((config.mutation_distribution_index - 20.0).abs() < 1e-10);
        assert_eq!(config.removal_policy, RemovalPolicy::OneShot);
        assert!(!config.parallel);
        assert!(config.seed.is_none());
        assert!(config.time_limit_ms.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = Nsga2Config::default()
            .with_population_size(40)
            .with_offspring_population_size(20)
            .with_max_evaluations(4000)
            .with_crossover_probability(0.8)
            .with_crossover_distribution_index(15.0)
            .with_mutation_probability(0.05)
            .with_mutation_distribution_index(10.0)
            .with_removal_policy(RemovalPolicy::Sequential)
            .with_parallel(true)
            .with_seed(42)
            .with_time_limit_ms(500);

        assert_eq!(config.population_size, 40);
        assert_eq!(config.offspring_population_size, 20);
        assert_eq!(config.max_evaluations, 4000);
        assert!((config.crossover_probability - 0.8).abs() < 1e-10);
        assert!((config.crossover_distribution_index - 15.0).abs() < 1e-10);
        assert_eq!(config.mutation_probability, Some(0.05));
        assert!((config.mutation_distribution_index - 10.0).abs() < 1e-10);
        assert_eq!(config.removal_policy, RemovalPolicy::Sequential);
        assert!(config.parallel);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.time_limit_ms, Some(500));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_clamps() {
        let config = Nsga2Config::default()
            .with_crossover_probability(1.5)
            .with_mutation_probability(-0.5)
            .with_crossover_distribution_index(-3.0);
        assert!((config.crossover_probability - 1.0).abs() < 1e-10);
        assert_eq!(config.mutation_probability, Some(0.0));
        assert!((config.crossover_distribution_index - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_validate_ok() {
        assert!(Nsga2Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_population_too_small() {
        let config = Nsga2Config::default().with_population_size(1);
        assert!(matches!(config.validate(), Err(MoeaError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_zero_offspring() {
        let config = Nsga2Config::default().with_offspring_population_size(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_budget_below_population() {
        let config = Nsga2Config::default().with_max_evaluations(99);
        assert!(config.validate().is_err());
        let config = Nsga2Config::default().with_max_evaluations(100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_raw_fields() {
        let config = Nsga2Config {
            crossover_probability: 1.1,
            ..Nsga2Config::default()
        };
        assert!(config.validate().is_err());

        let config = Nsga2Config {
            mutation_probability: Some(-0.1),
            ..Nsga2Config::default()
        };
        assert!(config.validate().is_err());

        let config = Nsga2Config {
            mutation_distribution_index: -1.0,
            ..Nsga2Config::default()
        };
        assert!(config.validate().is_err());

        let config = Nsga2Config {
            crossover_distribution_index: f64::NAN,
            ..Nsga2Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_nan_probability_from_builder() {
        let config = Nsga2Config::default().with_crossover_probability(f64::NAN);
        assert!(matches!(config.validate(), Err(MoeaError::InvalidConfig(_))));

        let config = Nsga2Config::default().with_mutation_probability(f64::NAN);
        assert!(matches!(config.validate(), Err(MoeaError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_zero_time_limit() {
        let config = Nsga2Config::default().with_time_limit_ms(0);
        assert!(config.validate().is_err());
    }

    // ---- Presets ----

    #[test]
    fn test_preset_fast() {
        let config = Nsga2Config::fast();
        assert_eq!(config.population_size, 50);
        assert_eq!(config.max_evaluations, 5_000);
        assert_eq!(config.time_limit_ms, Some(10_000));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_preset_balanced() {
        let config = Nsga2Config::balanced();
        assert_eq!(config.population_size, 100);
        assert_eq!(config.max_evaluations, 25_000);
        assert_eq!(config.time_limit_ms, Some(30_000));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_preset_quality() {
        let config = Nsga2Config::quality();
        assert_eq!(config.population_size, 200);
        assert_eq!(config.max_evaluations, 100_000);
        assert_eq!(config.removal_policy, RemovalPolicy::Sequential);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_preset_chainable() {
        let config = Nsga2Config::fast().with_population_size(30).with_seed(7);
        assert_eq!(config.population_size, 30);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.time_limit_ms, Some(10_000));
    }

    #[test]
    fn test_auto_select_boundaries() {
        assert_eq!(Nsga2Config::auto_select(9), Nsga2Config::fast());
        assert_eq!(Nsga2Config::auto_select(10), Nsga2Config::balanced());
        assert_eq!(Nsga2Config::auto_select(49), Nsga2Config::balanced());
        assert_eq!(Nsga2Config::auto_select(50), Nsga2Config::quality());
    }
}
