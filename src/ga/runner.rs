//! One generation of genetic search.
//!
//! [`GaRunner::step`] performs evaluation → sorting → elitism →
//! tournament selection → order crossover → swap mutation, and returns
//! the next population together with the fittest schedule of the
//! evaluated one.

use super::config::GaConfig;
use super::types::GaState;
use crate::engine::evaluate_all;
use crate::error::{FlowShopError, Result};
use crate::models::{Instance, ScheduleResult};
use crate::operators::{order_crossover, swap_mutation, tournament_select};
use rand::Rng;

/// Executes genetic-search generations.
///
/// # Usage
///
/// ```
/// use u_flowshop::ga::{GaConfig, GaRunner, GaState};
/// use u_flowshop::models::Instance;
/// use u_flowshop::random::create_rng;
///
/// let instance = Instance::from_stage_major(
///     3, 2, vec![1, 2],
///     vec![vec![3.0, 1.0, 2.0], vec![2.0, 4.0, 1.0]],
/// ).unwrap();
/// let config = GaConfig::default().with_population_size(10).with_parallel(false);
/// let mut rng = create_rng(42);
///
/// let mut state = GaState::random(&instance, config.population_size, &mut rng);
/// for _ in 0..5 {
///     let (next, best) = GaRunner::step(&instance, &config, &state, &mut rng).unwrap();
///     assert!(best.makespan > 0.0);
///     state = next;
/// }
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs one generation.
    ///
    /// The input state is left untouched; the caller stores the returned
    /// state for the next call. The reported result is the fittest
    /// individual of `state` (ties resolved by population order).
    ///
    /// # Errors
    /// - [`FlowShopError::InvalidConfig`] if the configuration is invalid or
    ///   the population size differs from `config.population_size`
    /// - any engine error for an individual that is not a valid permutation
    pub fn step<R: Rng>(
        instance: &Instance,
        config: &GaConfig,
        state: &GaState,
        rng: &mut R,
    ) -> Result<(GaState, ScheduleResult)> {
        config.validate().map_err(FlowShopError::InvalidConfig)?;
        if state.len() != config.population_size {
            return Err(FlowShopError::InvalidConfig(format!(
                "population has {} individuals, expected {}",
                state.len(),
                config.population_size
            )));
        }

        // 1-2. Evaluate and sort ascending by makespan (stable)
        let mut evaluated = evaluate_all(instance, &state.population, config.parallel)?;
        evaluated.sort_by(|a, b| a.makespan.total_cmp(&b.makespan));
        let fitness: Vec<f64> = evaluated.iter().map(|r| r.makespan).collect();

        // 3. Elitism
        let elite_count = config.effective_elitism();
        let mut next_gen: Vec<Vec<usize>> = Vec::with_capacity(config.population_size);
        next_gen.extend(evaluated[..elite_count].iter().map(|r| r.permutation.clone()));

        // 4. Breeding
        while next_gen.len() < config.population_size {
            let p1 = tournament_select(&fitness, config.tournament_size, rng);
            let p2 = tournament_select(&fitness, config.tournament_size, rng);

            let mut child =
                order_crossover(&evaluated[p1].permutation, &evaluated[p2].permutation, rng);
            if rng.random_range(0.0..1.0) < config.mutation_rate {
                child = swap_mutation(&child, rng);
            }
            next_gen.push(child);
        }

        // 5. Report the fittest
        let best = evaluated
            .into_iter()
            .next()
            .ok_or_else(|| FlowShopError::InvalidConfig("empty population".into()))?;

        log::debug!(
            "ga generation: best makespan {}, worst {}, elites {}",
            best.makespan,
            fitness.last().copied().unwrap_or(best.makespan),
            elite_count
        );

        Ok((GaState::new(next_gen), best))
    }
}

// ============================================================================
// Tests
// ============================================================================
