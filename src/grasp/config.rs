//! GRASP configuration.

use crate::error::DdspcError;

/// Seed used when [`GraspConfig::seed`] is `None`.
pub const DEFAULT_SEED: u64 = 42;

/// How the RCL parameter alpha is chosen at each iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlphaSchedule {
    /// Every iteration uses [`GraspConfig::alpha`].
    #[default]
    Fixed,

    /// Alpha grows linearly with the iteration index:
    /// `alpha = iteration / max_iterations`, sweeping from purely random
    /// towards purely greedy over the run.
    Sweep,
}

impl AlphaSchedule {
    /// Alpha for the given (0-based) iteration.
    pub fn alpha_at(&self, base: f64, iteration: usize, max_iterations: usize) -> f64 {
        match self {
            AlphaSchedule::Fixed => base,
            AlphaSchedule::Sweep => {
                if max_iterations == 0 {
                    base
                } else {
                    (iteration as f64 / max_iterations as f64).clamp(0.0, 1.0)
                }
            }
        }
    }
}

/// Configuration parameters for GRASP.
///
/// # Examples
///
/// ```
/// use ddspc_grasp::grasp::{AlphaSchedule, GraspConfig};
///
/// let config = GraspConfig::default()
///     .with_alpha(0.2)
///     .with_max_iterations(200)
///     .with_alpha_schedule(AlphaSchedule::Sweep)
///     .with_seed(7);
/// assert_eq!(config.max_iterations, 200);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraspConfig {
    /// RCL parameter in [0, 1]. The RCL keeps candidates scoring at least
    /// `min + alpha·(max − min)`: 1 = purely greedy, 0 = purely random.
    pub alpha: f64,

    /// Per-iteration alpha policy.
    pub alpha_schedule: AlphaSchedule,

    /// Number of construct → improve cycles.
    pub max_iterations: usize,

    /// Maximum number of neighborhood scans per local search.
    pub max_local_search_iterations: usize,

    /// Optional wall-clock limit in milliseconds, checked at the start of
    /// each iteration. `None` disables time-based termination.
    pub time_limit_ms: Option<u64>,

    /// Random seed. `None` uses [`DEFAULT_SEED`].
    pub seed: Option<u64>,
}

impl Default for GraspConfig {
    fn default() -> Self {
        Self {
            alpha: 0.3,
            alpha_schedule: AlphaSchedule::Fixed,
            max_iterations: 100,
            max_local_search_iterations: 100,
            time_limit_ms: None,
            seed: None,
        }
    }
}

impl GraspConfig {
    /// Sets the RCL parameter.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the alpha schedule.
    pub fn with_alpha_schedule(mut self, schedule: AlphaSchedule) -> Self {
        self.alpha_schedule = schedule;
        self
    }

    /// Sets the number of GRASP iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the scan cap for local search.
    pub fn with_max_local_search_iterations(mut self, n: usize) -> Self {
        self.max_local_search_iterations = n;
        self
    }

    /// Sets the wall-clock limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Alpha used at the given iteration.
    pub fn alpha_at(&self, iteration: usize) -> f64 {
        self.alpha_schedule
            .alpha_at(self.alpha, iteration, self.max_iterations)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), DdspcError> {
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(DdspcError::InvalidConfig(format!(
                "alpha must be in [0, 1], got {}",
                self.alpha
            )));
        }
        if self.max_iterations == 0 {
            return Err(DdspcError::InvalidConfig(
                "max_iterations must be at least 1".into(),
            ));
        }
        if self.max_local_search_iterations == 0 {
            return Err(DdspcError::InvalidConfig(
                "max_local_search_iterations must be at least 1".into(),
            ));
        }
        if self.time_limit_ms == Some(0) {
            return Err(DdspcError::InvalidConfig(
                "time_limit_ms must be positive or None".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GraspConfig::default();
        assert!((config.alpha - 0.3).abs() < 1e-12);
        assert_eq!(config.alpha_schedule, AlphaSchedule::Fixed);
        assert_eq!(config.max_iterations, 100);
        assert_eq!(config.max_local_search_iterations, 100);
        assert!(config.seed.is_none());
        assert!(config.time_limit_ms.is_none());
    }

    #[test]
    fn test_validate_ok() {
        assert!(GraspConfig::default().validate().is_ok());
        assert!(GraspConfig::default().with_alpha(0.0).validate().is_ok());
        assert!(GraspConfig::default().with_alpha(1.0).validate().is_ok());
    }

    #[test]
    fn test_validate_bad_alpha() {
        assert!(GraspConfig::default().with_alpha(-0.1).validate().is_err());
        assert!(GraspConfig::default().with_alpha(1.5).validate().is_err());
        assert!(GraspConfig::default().with_alpha(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_validate_zero_iterations() {
        assert!(GraspConfig::default()
            .with_max_iterations(0)
            .validate()
            .is_err());
        assert!(GraspConfig::default()
            .with_max_local_search_iterations(0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_zero_time_limit() {
        assert!(GraspConfig::default()
            .with_time_limit_ms(0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_fixed_schedule() {
        let config = GraspConfig::default().with_alpha(0.25);
        assert!((config.alpha_at(0) - 0.25).abs() < 1e-12);
        assert!((config.alpha_at(99) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_sweep_schedule() {
        let config = GraspConfig::default()
            .with_max_iterations(10)
            .with_alpha_schedule(AlphaSchedule::Sweep);
        assert!(config.alpha_at(0).abs() < 1e-12);
        assert!((config.alpha_at(5) - 0.5).abs() < 1e-12);
        assert!((config.alpha_at(9) - 0.9).abs() < 1e-12);
    }
}
