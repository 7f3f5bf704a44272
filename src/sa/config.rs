//! SA configuration.

/// Configuration for simulated annealing with geometric cooling.
///
/// After each step the temperature becomes
/// `max(T * (1 - cooling_rate), min_temperature)`.
///
/// # Examples
///
/// ```
/// use u_flowshop::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(50.0)
///     .with_cooling_rate(0.02)
///     .with_min_temperature(1e-6);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SaConfig {
    /// Starting temperature. Higher values allow more uphill moves early.
    pub initial_temperature: f64,

    /// Fraction of the temperature removed per step, in (0, 1).
    pub cooling_rate: f64,

    /// Floor the temperature never drops below.
    ///
    /// Keeps the Metropolis ratio defined; at this floor worse neighbors
    /// are effectively never accepted.
    pub min_temperature: f64,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 100.0,
            cooling_rate: 0.05,
            min_temperature: 1e-9,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate.clamp(0.0, 1.0);
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.initial_temperature.is_finite() && self.initial_temperature > 0.0) {
            return Err(format!(
                "initial_temperature must be positive, got {}",
                self.initial_temperature
            ));
        }
        if !(self.min_temperature.is_finite() && self.min_temperature > 0.0) {
            return Err(format!(
                "min_temperature must be positive, got {}",
                self.min_temperature
            ));
        }
        if self.min_temperature > self.initial_temperature {
            return Err("min_temperature must not exceed initial_temperature".into());
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            ));
        }
        Ok(())
    }
}
