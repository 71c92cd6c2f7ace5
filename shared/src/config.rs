use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;
use crate::symbols::SymbolAlphabet;

/// Symbol to payout multiplier, in paytable display order.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(transparent)]
pub struct MultiplierTable(Vec<MultiplierEntry>);

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MultiplierEntry {
    pub symbol: String,
    pub multiplier: u32,
}

impl MultiplierTable {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        Self(
            entries
                .into_iter()
                .map(|(symbol, multiplier)| MultiplierEntry { symbol: symbol.into(), multiplier })
                .collect(),
        )
    }

    pub fn get(&self, symbol: &str) -> Option<u32> {
        self.0.iter().find(|e| e.symbol == symbol).map(|e| e.multiplier)
    }

    /// Label of the multiplier column cell paired with `symbol`, e.g. `x20`.
    pub fn label(&self, symbol: &str) -> Option<String> {
        self.get(symbol).map(|m| format!("x{}", m))
    }

    pub fn entries(&self) -> &[MultiplierEntry] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for MultiplierTable {
    fn default() -> Self {
        Self::new(MULTIPLIERS)
    }
}

/// Every tunable of the slot machine. Missing fields fall back to defaults,
/// so an integrator only has to supply what differs.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SlotConfig {
    pub min_bet: f64,
    pub slot_count: usize,
    pub spin_ticks: u32,
    pub spin_tick_ms: u64,
    pub message_fade_ms: u64,
    pub pulsate_ms: u64,
    pub rain_particles: usize,
    pub rain_min_lifetime_ms: u64,
    pub rain_max_lifetime_ms: u64,
    pub interim_symbols: SymbolAlphabet,
    pub rain_symbols: SymbolAlphabet,
    pub multipliers: MultiplierTable,
    pub win_message: String,
    pub lose_message: String,
}

impl Default for SlotConfig {
    fn default() -> Self {
        Self {
            min_bet: MIN_BET,
            slot_count: SLOT_COUNT,
            spin_ticks: SPIN_TICKS,
            spin_tick_ms: SPIN_TICK_MS,
            message_fade_ms: MESSAGE_FADE_MS,
            pulsate_ms: PULSATE_MS,
            rain_particles: RAIN_PARTICLES,
            rain_min_lifetime_ms: RAIN_MIN_LIFETIME_MS,
            rain_max_lifetime_ms: RAIN_MAX_LIFETIME_MS,
            interim_symbols: SymbolAlphabet::from(INTERIM_SYMBOLS),
            rain_symbols: SymbolAlphabet::from(RAIN_SYMBOLS),
            multipliers: MultiplierTable::default(),
            win_message: WIN_MESSAGE.to_string(),
            lose_message: LOSE_MESSAGE.to_string(),
        }
    }
}

impl SlotConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_bet.is_nan() || self.min_bet < 0.0 {
            return Err(ConfigError::MinBet(self.min_bet));
        }
        if self.slot_count == 0 {
            return Err(ConfigError::NoSlots);
        }
        if self.spin_ticks == 0 {
            return Err(ConfigError::NoTicks);
        }
        if self.rain_min_lifetime_ms >= self.rain_max_lifetime_ms {
            return Err(ConfigError::LifetimeRange {
                min_ms: self.rain_min_lifetime_ms,
                max_ms: self.rain_max_lifetime_ms,
            });
        }
        if self.interim_symbols.is_empty() {
            return Err(ConfigError::EmptyAlphabet("interim_symbols"));
        }
        if self.rain_symbols.is_empty() {
            return Err(ConfigError::EmptyAlphabet("rain_symbols"));
        }
        if self.multipliers.is_empty() {
            log::warn!("Multiplier table is empty; wins will not highlight the paytable");
        }
        Ok(())
    }

    pub fn spin_tick(&self) -> Duration {
        Duration::from_millis(self.spin_tick_ms)
    }

    pub fn message_fade(&self) -> Duration {
        Duration::from_millis(self.message_fade_ms)
    }

    pub fn pulsate(&self) -> Duration {
        Duration::from_millis(self.pulsate_ms)
    }

    pub fn rain_lifetime(&self) -> (Duration, Duration) {
        (
            Duration::from_millis(self.rain_min_lifetime_ms),
            Duration::from_millis(self.rain_max_lifetime_ms),
        )
    }
}
