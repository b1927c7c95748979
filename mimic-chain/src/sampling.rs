//! Sampling policies for start-context and successor selection.
//!
//! The model reduces both choices to "pick one of n weighted items", so a
//! policy only has to map weights to an index.

use mimic_core::config::SamplingKind;
use rand::{Rng, RngCore};

/// Chooses among weighted candidates.
pub trait ISamplingPolicy: Send + Sync {
    /// Pick an index into `weights`. Returns `None` when there is nothing to
    /// choose from. Zero-weight entries must never be picked.
    fn pick(&self, weights: &[u64], rng: &mut dyn RngCore) -> Option<usize>;

    /// Human-readable policy name.
    fn name(&self) -> &str;
}

/// Probability proportional to weight.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyWeighted;

impl ISamplingPolicy for FrequencyWeighted {
    fn pick(&self, weights: &[u64], rng: &mut dyn RngCore) -> Option<usize> {
        let total: u64 = weights.iter().sum();
        if total == 0 {
            return None;
        }
        let mut target = rng.gen_range(0..total);
        for (i, &w) in weights.iter().enumerate() {
            if target < w {
                return Some(i);
            }
            target -= w;
        }
        None
    }

    fn name(&self) -> &str {
        "frequency_weighted"
    }
}

/// Every positive-weight candidate equally likely.
#[derive(Debug, Clone, Copy, Default)]
pub struct Uniform;

impl ISamplingPolicy for Uniform {
    fn pick(&self, weights: &[u64], rng: &mut dyn RngCore) -> Option<usize> {
        let live: Vec<usize> = weights
            .iter()
            .enumerate()
            .filter(|(_, w)| **w > 0)
            .map(|(i, _)| i)
            .collect();
        if live.is_empty() {
            return None;
        }
        Some(live[rng.gen_range(0..live.len())])
    }

    fn name(&self) -> &str {
        "uniform"
    }
}

/// Policy configured by `kind`.
pub fn policy_for(kind: SamplingKind) -> Box<dyn ISamplingPolicy> {
    match kind {
        SamplingKind::FrequencyWeighted => Box::new(FrequencyWeighted),
        SamplingKind::Uniform => Box::new(Uniform),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn empty_or_zero_weights_pick_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(FrequencyWeighted.pick(&[], &mut rng), None);
        assert_eq!(FrequencyWeighted.pick(&[0, 0], &mut rng), None);
        assert_eq!(Uniform.pick(&[], &mut rng), None);
        assert_eq!(Uniform.pick(&[0], &mut rng), None);
    }

    #[test]
    fn zero_weight_entries_are_never_picked() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..200 {
            assert_eq!(FrequencyWeighted.pick(&[0, 5, 0], &mut rng), Some(1));
            assert_eq!(Uniform.pick(&[0, 5, 0], &mut rng), Some(1));
        }
    }

    #[test]
    fn frequency_weighted_follows_weights() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut hits = [0u32; 2];
        for _ in 0..10_000 {
            hits[FrequencyWeighted.pick(&[9, 1], &mut rng).unwrap()] += 1;
        }
        // Expect roughly 9000 / 1000.
        assert!(hits[0] > 8_500 && hits[0] < 9_500, "hits: {hits:?}");
    }

    #[test]
    fn uniform_ignores_weights() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut hits = [0u32; 2];
        for _ in 0..10_000 {
            hits[Uniform.pick(&[99, 1], &mut rng).unwrap()] += 1;
        }
        assert!(hits[1] > 4_500 && hits[1] < 5_500, "hits: {hits:?}");
    }

    #[test]
    fn policy_for_maps_config_kind() {
        assert_eq!(policy_for(SamplingKind::FrequencyWeighted).name(), "frequency_weighted");
        assert_eq!(policy_for(SamplingKind::Uniform).name(), "uniform");
    }
}
