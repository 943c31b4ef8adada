//! Monte Carlo estimate of how often a fresh five-card deal lands in a category.
//!
//! Each trial builds a full deck, shuffles it, deals one [`PokerHand`] and asks
//! the target [`Category`] whether the hand holds it.
//!
//! ```
//! use poker_sim::config::SimulationConfig;
//! use poker_sim::hand::Category;
//! use poker_sim::simulation::{Simulator, StopCondition};
//!
//! let config = SimulationConfig {
//!     target: Category::Pair,
//!     stop: StopCondition::Trials(2_000),
//!     seed: Some(11),
//! };
//! let estimate = Simulator::new(config).run().unwrap();
//! assert_eq!(estimate.trials, 2_000);
//! assert!(estimate.probability() > 0.3 && estimate.probability() < 0.55);
//! ```

use crate::config::SimulationConfig;
use crate::deck::{Deck, DeckError};
use crate::hand::{Category, PokerHand};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;

/// When a simulation run ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopCondition {
    /// Keep dealing until this many hands hit the target.
    Hits(u64),
    /// Deal exactly this many hands.
    Trials(u64),
}

impl StopCondition {
    fn reached(self, trials: u64, hits: u64) -> bool {
        match self {
            StopCondition::Hits(n) => hits >= n,
            StopCondition::Trials(n) => trials >= n,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SimulationError {
    #[error("deal failed: {0}")]
    Deal(#[from] DeckError),
}

/// Outcome of a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Estimate {
    pub target: Category,
    pub trials: u64,
    pub hits: u64,
}

impl Estimate {
    /// Empirical hit rate in `0.0..=1.0`; zero when no trials ran.
    pub fn probability(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.hits as f64 / self.trials as f64
    }

    pub fn percent(&self) -> f64 {
        100.0 * self.probability()
    }
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "probability of a {} is {}% ({} hits in {} hands)",
            self.target,
            self.percent(),
            self.hits,
            self.trials
        )
    }
}

/// Repeated shuffle-deal-classify sampler.
#[derive(Debug)]
pub struct Simulator<R = ChaCha8Rng> {
    config: SimulationConfig,
    rng: R,
}

impl Simulator<ChaCha8Rng> {
    /// Seeded from `config.seed` when present, otherwise from the thread RNG.
    pub fn new(config: SimulationConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        };
        Self { config, rng }
    }
}

impl<R: Rng> Simulator<R> {
    /// Use a caller-provided RNG; `config.seed` is ignored.
    pub fn with_rng(config: SimulationConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Deal one hand from a freshly shuffled deck.
    pub fn deal_hand(&mut self) -> Result<PokerHand, SimulationError> {
        let mut deck = Deck::standard();
        deck.shuffle_with(&mut self.rng);
        Ok(PokerHand::deal(&mut deck)?)
    }

    /// Run one trial, returning the hand when it holds the target.
    pub fn trial(&mut self) -> Result<Option<PokerHand>, SimulationError> {
        let hand = self.deal_hand()?;
        Ok(self.config.target.is_held_by(&hand).then_some(hand))
    }

    /// Deal hands until the stop condition is met.
    pub fn run(&mut self) -> Result<Estimate, SimulationError> {
        let SimulationConfig { target, stop, .. } = self.config;
        log::info!("sampling {target} hands until {stop:?}");
        let mut trials = 0u64;
        let mut hits = 0u64;
        while !stop.reached(trials, hits) {
            if let Some(hand) = self.trial()? {
                hits += 1;
                log::debug!("hit {hits}: {hand}");
            }
            trials += 1;
        }
        let estimate = Estimate { target, trials, hits };
        log::info!("{estimate}");
        Ok(estimate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(target: Category, stop: StopCondition) -> SimulationConfig {
        SimulationConfig { target, stop, seed: Some(5) }
    }

    #[test]
    fn trials_stop_condition_is_exact() {
        let est = Simulator::new(config(Category::Flush, StopCondition::Trials(300))).run().unwrap();
        assert_eq!(est.trials, 300);
        assert!(est.hits <= est.trials);
    }

    #[test]
    fn hits_stop_condition_ends_on_a_hit() {
        let est = Simulator::new(config(Category::Pair, StopCondition::Hits(25))).run().unwrap();
        assert_eq!(est.hits, 25);
        assert!(est.trials >= 25);
    }

    #[test]
    fn zero_budget_runs_nothing() {
        let est = Simulator::new(config(Category::Straight, StopCondition::Hits(0))).run().unwrap();
        assert_eq!(est, Estimate { target: Category::Straight, trials: 0, hits: 0 });
        assert_eq!(est.probability(), 0.0);
    }

    #[test]
    fn same_seed_same_estimate() {
        let c = config(Category::TwoPair, StopCondition::Trials(500));
        let a = Simulator::new(c).run().unwrap();
        let b = Simulator::new(c).run().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn with_rng_matches_seeded_constructor() {
        let c = config(Category::Pair, StopCondition::Trials(200));
        let a = Simulator::new(c).run().unwrap();
        let b = Simulator::with_rng(c, ChaCha8Rng::seed_from_u64(5)).run().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn trial_returns_only_target_hands() {
        let mut sim = Simulator::new(config(Category::Pair, StopCondition::Trials(1)));
        for _ in 0..200 {
            if let Some(hand) = sim.trial().unwrap() {
                assert!(hand.is_pair());
            }
        }
    }

    #[test]
    fn estimate_display_reports_percentage() {
        let est = Estimate { target: Category::Straight, trials: 4, hits: 1 };
        assert_eq!(est.percent(), 25.0);
        assert_eq!(est.to_string(), "probability of a straight is 25% (1 hits in 4 hands)");
    }
}
