pub const PLAY_ENDPOINT: &str = "/play";

pub const MIN_BET: f64 = 0.24;

pub const SLOT_COUNT: usize = 3;
pub const SPIN_TICKS: u32 = 20;
pub const SPIN_TICK_MS: u64 = 100;

pub const MESSAGE_FADE_MS: u64 = 3000;
pub const PULSATE_MS: u64 = 1000;

pub const RAIN_PARTICLES: usize = 60;
pub const RAIN_MIN_LIFETIME_MS: u64 = 3000;
pub const RAIN_MAX_LIFETIME_MS: u64 = 6000;

pub const INTERIM_SYMBOLS: [&str; 10] = ["🤑", "🔥", "💩", "💣", "🥶", "👽", "🦄", "🤡", "🤪", "💀"];
pub const RAIN_SYMBOLS: [&str; 3] = ["💰", "💵", "💸"];
pub const MULTIPLIERS: [(&str, u32); 4] = [("🤑", 20), ("🔥", 15), ("💩", 10), ("💣", 5)];

pub const WIN_MESSAGE: &str = "YOU WON!!!!";
pub const LOSE_MESSAGE: &str = "So close, try again.";

pub const INVALID_BET_ERROR: &str = "Please enter a valid bet amount.";
pub const RESOLUTION_ERROR: &str = "Could not complete the spin. Please try again.";
pub const NETWORK_ERROR: &str = "Network error. Please try again";
pub const SPIN_IN_PROGRESS_ERROR: &str = "A spin is already in progress.";
