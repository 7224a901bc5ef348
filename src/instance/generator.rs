//! Random instance generators.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::DdspcInput;
use crate::ddspc::NodeId;
use crate::error::DdspcError;

/// Parameters for the random graph generators.
///
/// # Examples
///
/// ```
/// use ddspc_grasp::instance::GeneratorConfig;
///
/// let config = GeneratorConfig::new(50)
///     .with_edge_density(0.2)
///     .with_conflict_probability(0.05);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratorConfig {
    /// Number of nodes.
    pub num_nodes: usize,
    /// Edge density in [0, 1] (fraction of all possible edges).
    pub edge_density: f64,
    /// Probability in [0, 1] that a node pair conflicts.
    pub conflict_probability: f64,
    /// Attempts allowed to draw a connected graph.
    pub max_attempts: usize,
}

impl GeneratorConfig {
    /// Defaults for `num_nodes` nodes: density 0.3, conflict probability 0.1.
    pub fn new(num_nodes: usize) -> Self {
        Self {
            num_nodes,
            edge_density: 0.3,
            conflict_probability: 0.1,
            max_attempts: 100,
        }
    }

    /// Sets the edge density.
    pub fn with_edge_density(mut self, density: f64) -> Self {
        self.edge_density = density;
        self
    }

    /// Sets the conflict probability.
    pub fn with_conflict_probability(mut self, p: f64) -> Self {
        self.conflict_probability = p;
        self
    }

    /// Sets the number of connection attempts.
    pub fn with_max_attempts(mut self, n: usize) -> Self {
        self.max_attempts = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), DdspcError> {
        if !(0.0..=1.0).contains(&self.edge_density) {
            return Err(DdspcError::InvalidConfig(format!(
                "edge_density must be in [0, 1], got {}",
                self.edge_density
            )));
        }
        if !(0.0..=1.0).contains(&self.conflict_probability) {
            return Err(DdspcError::InvalidConfig(format!(
                "conflict_probability must be in [0, 1], got {}",
                self.conflict_probability
            )));
        }
        if self.max_attempts == 0 {
            return Err(DdspcError::InvalidConfig(
                "max_attempts must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// `G{n}_D{density}_C{conflict}` with two decimals.
    pub fn instance_name(&self) -> String {
        format!(
            "G{}_D{:.2}_C{:.2}",
            self.num_nodes, self.edge_density, self.conflict_probability
        )
    }
}

/// Seeded generator of DDSPC instances.
#[derive(Debug, Clone)]
pub struct InstanceGenerator {
    rng: StdRng,
}

impl InstanceGenerator {
    /// Generator seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Connected graph: a random spanning tree (node `i` attaches to a
    /// random earlier node) topped up with random edges until
    /// `floor(density · n(n−1)/2)` edges exist. Each pair `i < j` conflicts
    /// independently with the configured probability.
    pub fn random_connected(&mut self, config: &GeneratorConfig) -> Result<DdspcInput, DdspcError> {
        config.validate()?;
        let n = config.num_nodes;

        let mut present: HashSet<(NodeId, NodeId)> = HashSet::new();
        let mut edges = Vec::new();
        for i in 1..n {
            let j = self.rng.random_range(0..i);
            present.insert((j, i));
            edges.push((j, i));
        }

        let max_edges = n * n.saturating_sub(1) / 2;
        let target = ((config.edge_density * max_edges as f64) as usize).min(max_edges);
        while edges.len() < target {
            let u = self.rng.random_range(0..n);
            let v = self.rng.random_range(0..n);
            if u != v && present.insert((u.min(v), u.max(v))) {
                edges.push((u, v));
            }
        }

        Ok(DdspcInput {
            num_nodes: n,
            edges,
            conflicts: self.conflicts(n, config.conflict_probability),
            instance_name: Some(config.instance_name()),
        })
    }

    /// Erdős–Rényi graph: each pair `i < j` is an edge with probability
    /// `edge_density` and a conflict with probability `conflict_probability`.
    /// Not necessarily connected.
    pub fn gnp(&mut self, config: &GeneratorConfig) -> Result<DdspcInput, DdspcError> {
        config.validate()?;
        let n = config.num_nodes;
        let mut edges = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                if self.rng.random_bool(config.edge_density) {
                    edges.push((i, j));
                }
            }
        }
        Ok(DdspcInput {
            num_nodes: n,
            edges,
            conflicts: self.conflicts(n, config.conflict_probability),
            instance_name: Some(config.instance_name()),
        })
    }

    /// Draws [`gnp`](Self::gnp) graphs until one is connected.
    pub fn gnp_connected(&mut self, config: &GeneratorConfig) -> Result<DdspcInput, DdspcError> {
        config.validate()?;
        for attempt in 1..=config.max_attempts {
            let input = self.gnp(config)?;
            if input.is_connected()? {
                debug!(attempt, "connected graph drawn");
                return Ok(input);
            }
        }
        Err(DdspcError::GenerationFailed {
            attempts: config.max_attempts,
        })
    }

    /// Ring `0 - 1 - ... - n-1 - 0` with up to `max_conflicts` conflicts, each
    /// between two distinct nodes of the same parity.
    pub fn cyclic(&mut self, num_nodes: usize, max_conflicts: usize) -> DdspcInput {
        let edges = (0..num_nodes).map(|i| (i, (i + 1) % num_nodes)).collect();
        let half = num_nodes / 2;
        let mut conflicts = Vec::new();
        if half > 0 {
            for _ in 0..max_conflicts {
                let parity = usize::from(self.rng.random_bool(0.5));
                let a = self.rng.random_range(0..half) * 2 + parity;
                let b = self.rng.random_range(0..half) * 2 + parity;
                if a != b && a < num_nodes && b < num_nodes {
                    conflicts.push((a, b));
                }
            }
        }
        DdspcInput {
            num_nodes,
            edges,
            conflicts,
            instance_name: Some(format!("C{num_nodes}_K{max_conflicts}")),
        }
    }

    fn conflicts(&mut self, n: usize, p: f64) -> Vec<(NodeId, NodeId)> {
        let mut conflicts = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                if self.rng.random_bool(p) {
                    conflicts.push((i, j));
                }
            }
        }
        conflicts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_connected_is_connected() {
        let mut gen = InstanceGenerator::new(1);
        for n in [1, 2, 10, 40] {
            let input = gen
                .random_connected(&GeneratorConfig::new(n).with_edge_density(0.1))
                .unwrap();
            assert!(input.is_connected().unwrap(), "n = {n}");
        }
    }

    #[test]
    fn test_random_connected_edge_count() {
        let mut gen = InstanceGenerator::new(2);
        let config = GeneratorConfig::new(20).with_edge_density(0.5);
        let input = gen.random_connected(&config).unwrap();
        assert_eq!(input.edges.len(), 95);
        let unique: HashSet<_> = input
            .edges
            .iter()
            .map(|&(u, v)| (u.min(v), u.max(v)))
            .collect();
        assert_eq!(unique.len(), input.edges.len());
    }

    #[test]
    fn test_full_density_is_complete() {
        let mut gen = InstanceGenerator::new(3);
        let input = gen
            .random_connected(&GeneratorConfig::new(8).with_edge_density(1.0))
            .unwrap();
        assert_eq!(input.edges.len(), 28);
    }

    #[test]
    fn test_instance_name() {
        let config = GeneratorConfig::new(50)
            .with_edge_density(0.2)
            .with_conflict_probability(0.05);
        assert_eq!(config.instance_name(), "G50_D0.20_C0.05");
    }

    #[test]
    fn test_same_seed_same_instance() {
        let config = GeneratorConfig::new(30);
        let a = InstanceGenerator::new(9).random_connected(&config).unwrap();
        let b = InstanceGenerator::new(9).random_connected(&config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_gnp_connected_gives_up() {
        let mut gen = InstanceGenerator::new(4);
        let config = GeneratorConfig::new(10)
            .with_edge_density(0.0)
            .with_max_attempts(3);
        assert!(matches!(
            gen.gnp_connected(&config),
            Err(DdspcError::GenerationFailed { attempts: 3 })
        ));
    }

    #[test]
    fn test_gnp_connected_dense() {
        let mut gen = InstanceGenerator::new(5);
        let config = GeneratorConfig::new(15).with_edge_density(0.9);
        assert!(gen.gnp_connected(&config).unwrap().is_connected().unwrap());
    }

    #[test]
    fn test_cyclic_conflicts_same_parity() {
        let mut gen = InstanceGenerator::new(6);
        let input = gen.cyclic(12, 20);
        assert_eq!(input.edges.len(), 12);
        assert!(input.conflicts.len() <= 20);
        for &(a, b) in &input.conflicts {
            assert_ne!(a, b);
            assert_eq!(a % 2, b % 2);
        }
        assert!(input.is_connected().unwrap());
    }

    #[test]
    fn test_invalid_density() {
        let mut gen = InstanceGenerator::new(0);
        assert!(gen
            .random_connected(&GeneratorConfig::new(5).with_edge_density(1.5))
            .is_err());
    }
}
