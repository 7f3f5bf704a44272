//! GA configuration.
//!
//! [`GaConfig`] holds the parameters of one genetic-search generation.

/// Configuration for genetic search over job permutations.
///
/// # Defaults
///
/// ```
/// use u_flowshop::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.tournament_size, 3);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_flowshop::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(100)
///     .with_elitism_count(5)
///     .with_tournament_size(4)
///     .with_mutation_rate(0.2);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Number of permutations in the population.
    pub population_size: usize,

    /// Fittest individuals copied unchanged into the next generation.
    ///
    /// Clamped to `population_size` when applied.
    pub elitism_count: usize,

    /// Individuals drawn (with replacement) per tournament.
    ///
    /// Must lie in `1..=population_size`.
    pub tournament_size: usize,

    /// Probability of applying one swap mutation to a child (0.0–1.0).
    pub mutation_rate: f64,

    /// Whether to evaluate the population in parallel using rayon.
    ///
    /// Ignored when the `parallel` feature is disabled.
    pub parallel: bool,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            elitism_count: 2,
            tournament_size: 3,
            mutation_rate: 0.1,
            parallel: true,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of elites.
    pub fn with_elitism_count(mut self, n: usize) -> Self {
        self.elitism_count = n;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Elites actually kept: `min(elitism_count, population_size)`.
    #[inline]
    pub fn effective_elitism(&self) -> usize {
        self.elitism_count.min(self.population_size)
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size == 0 {
            return Err("population_size must be at least 1".into());
        }
        if self.tournament_size == 0 {
            return Err("tournament_size must be at least 1".into());
        }
        if self.tournament_size > self.population_size {
            return Err(format!(
                "tournament_size {} exceeds population_size {}",
                self.tournament_size, self.population_size
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(format!(
                "mutation_rate must be in [0, 1], got {}",
                self.mutation_rate
            ));
        }
        Ok(())
    }
}
