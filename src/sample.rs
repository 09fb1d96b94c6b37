//! Sampling
//!
//! Strategies for holding records out of fitting, so a model can be scored
//! on data it never saw.
use rand::rngs::StdRng;
use rand::Rng;

// A sampler subsets the record indices prior to fitting a tree.
pub trait Sampler {
    /// Sample the record indices, returning a tuple, where the first item is
    /// the indices chosen for fitting, and the second are the indices held
    /// out for evaluation.
    fn sample(&mut self, rng: &mut StdRng, index: &[usize]) -> (Vec<usize>, Vec<usize>);
}

/// Keeps each record with a fixed probability.
pub struct RandomSampler {
    subsample: f32,
}

impl RandomSampler {
    pub fn new(subsample: f32) -> Self {
        RandomSampler { subsample }
    }
}

impl Sampler for RandomSampler {
    fn sample(&mut self, rng: &mut StdRng, index: &[usize]) -> (Vec<usize>, Vec<usize>) {
        let subsample = self.subsample;
        let mut chosen = Vec::new();
        let mut held_out = Vec::new();
        for i in index {
            if rng.gen::<f32>() < subsample {
                chosen.push(*i);
            } else {
                held_out.push(*i)
            }
        }
        (chosen, held_out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_random_sampler() {
        let mut rng = StdRng::seed_from_u64(42);
        let index = vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
        let mut sampler = RandomSampler::new(0.5);
        let (chosen, held_out) = sampler.sample(&mut rng, &index);

        // With seed 42 and 0.5 subsample, we should get some split.
        assert!(!chosen.is_empty());
        assert!(!held_out.is_empty());
        assert_eq!(chosen.len() + held_out.len(), index.len());

        // Test with subsample 1.0 (all should be chosen)
        let mut sampler_all = RandomSampler::new(1.0);
        let (chosen_all, held_out_all) = sampler_all.sample(&mut rng, &index);
        assert_eq!(chosen_all.len(), index.len());
        assert!(held_out_all.is_empty());

        // Test with subsample 0.0 (none should be chosen)
        let mut sampler_none = RandomSampler::new(0.0);
        let (chosen_none, held_out_none) = sampler_none.sample(&mut rng, &index);
        assert!(chosen_none.is_empty());
        assert_eq!(held_out_none.len(), index.len());
    }

    #[test]
    fn test_sampling_preserves_index_order() {
        let mut rng = StdRng::seed_from_u64(7);
        let index: Vec<usize> = (0..50).collect();
        let (chosen, held_out) = RandomSampler::new(0.6).sample(&mut rng, &index);
        assert!(chosen.windows(2).all(|w| w[0] < w[1]));
        assert!(held_out.windows(2).all(|w| w[0] < w[1]));
    }
}
