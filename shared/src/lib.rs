pub mod animator;
pub mod audio;
pub mod config;
pub mod constants;
pub mod effects;
pub mod error;
pub mod machine;
pub mod particles;
pub mod resolver;
pub mod scheduler;
pub mod shared_slot_game;
pub mod surface;
pub mod symbols;
pub mod validation;

pub use animator::{SpinAnimator, SpinPhase};
pub use config::{MultiplierTable, SlotConfig};
pub use error::{ConfigError, PlaybackError, SpinError};
pub use machine::{SlotAudio, SlotMachine, SlotSurface};
pub use resolver::OutcomeResolver;
pub use scheduler::{ManualScheduler, Scheduler, TaskHandle};
pub use shared_slot_game::{AccountSnapshot, Resolution, SpinOutcome};
