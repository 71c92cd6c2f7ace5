use std::ops::Range;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

/// Fixed set of glyphs a random draw picks from.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct SymbolAlphabet(Vec<String>);

impl SymbolAlphabet {
    pub fn new<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(symbols.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.0.iter().any(|s| s == symbol)
    }

    pub fn symbols(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<const N: usize> From<[&str; N]> for SymbolAlphabet {
    fn from(symbols: [&str; N]) -> Self {
        Self::new(symbols)
    }
}

/// Uniform random draws for interim frames and particle placement.
pub struct RandomSymbolSource {
    rng: Box<dyn RngCore>,
}

impl RandomSymbolSource {
    pub fn new(rng: impl RngCore + 'static) -> Self {
        Self { rng: Box::new(rng) }
    }

    pub fn from_entropy() -> Self {
        Self::new(SmallRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    /// Picks one symbol uniformly. `None` only for an empty alphabet.
    pub fn draw<'a>(&mut self, alphabet: &'a SymbolAlphabet) -> Option<&'a str> {
        alphabet.0.choose(&mut self.rng).map(String::as_str)
    }

    pub fn uniform(&mut self, range: Range<f64>) -> f64 {
        if range.start >= range.end {
            return range.start;
        }
        self.rng.gen_range(range)
    }
}
