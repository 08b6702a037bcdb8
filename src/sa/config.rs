//! SA configuration.

/// Which solution a run reports as its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BestTracking {
    /// `best` follows every accepted candidate, so a late uphill acceptance
    /// can replace a better path seen earlier.
    #[default]
    LastAccepted,

    /// `best` only moves on a strict improvement over the best seen so far.
    GlobalBest,
}

/// Configuration for the Simulated Annealing algorithm.
///
/// Temperature decays geometrically: `T_{k+1} = cooling_rate * T_k`, applied
/// once at the start of every iteration.
///
/// # Examples
///
/// ```
/// use u_roadpath::sa::{BestTracking, SaConfig};
///
/// let config = SaConfig::default()
///     .with_iterations(2000)
///     .with_initial_temperature(500.0)
///     .with_cooling_rate(0.99)
///     .with_best_tracking(BestTracking::GlobalBest)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Number of mutate/accept iterations after the seed path is built.
    pub iterations: usize,

    /// Initial temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Geometric cooling factor in (0, 1].
    pub cooling_rate: f64,

    /// Lower bound used in place of the temperature in the acceptance
    /// exponent once it has decayed towards zero.
    pub temperature_floor: f64,

    pub best_tracking: BestTracking,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            iterations: 5000,
            initial_temperature: 1000.0,
            cooling_rate: 0.995,
            temperature_floor: 1e-9,
            best_tracking: BestTracking::LastAccepted,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_temperature_floor(mut self, t: f64) -> Self {
        self.temperature_floor = t;
        self
    }

    pub fn with_best_tracking(mut self, tracking: BestTracking) -> Self {
        self.best_tracking = tracking;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
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
        if !(self.cooling_rate > 0.0 && self.cooling_rate <= 1.0) {
            return Err(format!(
                "cooling_rate must be in (0, 1], got {}",
                self.cooling_rate
            ));
        }
        if !(self.temperature_floor.is_finite() && self.temperature_floor > 0.0) {
            return Err(format!(
                "temperature_floor must be positive, got {}",
                self.temperature_floor
            ));
        }
        Ok(())
    }
}
