use std::cell::Cell;

use crate::error::PlaybackError;

/// A sound that may or may not be allowed to play.
pub trait AudioCue {
    fn name(&self) -> &str;

    /// Restarts the cue from the beginning.
    fn try_play(&self) -> Result<(), PlaybackError>;
}

/// Plays `cue`, logging and swallowing any failure.
pub fn play_best_effort(cue: &dyn AudioCue) {
    log::debug!("Playing {} sound", cue.name());
    if let Err(e) = cue.try_play() {
        log::warn!("{}", e);
    }
}

/// Cue that only counts plays. Can be told to fail, like a browser that
/// blocks autoplay.
pub struct SilentCue {
    name: String,
    plays: Cell<u32>,
    fail: bool,
}

impl SilentCue {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), plays: Cell::new(0), fail: false }
    }

    pub fn failing(name: impl Into<String>) -> Self {
        Self { fail: true, ..Self::new(name) }
    }

    /// Play attempts, successful or not.
    pub fn plays(&self) -> u32 {
        self.plays.get()
    }
}

impl AudioCue for SilentCue {
    fn name(&self) -> &str {
        &self.name
    }

    fn try_play(&self) -> Result<(), PlaybackError> {
        self.plays.set(self.plays.get() + 1);
        if self.fail {
            return Err(PlaybackError::Rejected {
                cue: self.name.clone(),
                reason: "autoplay blocked".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_is_swallowed() {
        let cue = SilentCue::failing("victory");
        play_best_effort(&cue);
        play_best_effort(&cue);
        assert_eq!(cue.plays(), 2);
    }
}
