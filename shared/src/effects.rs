use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::audio::{play_best_effort, AudioCue};
use crate::config::{MultiplierTable, SlotConfig};
use crate::particles::ParticleRain;
use crate::scheduler::{Scheduler, TaskHandle};
use crate::shared_slot_game::SpinOutcome;
use crate::surface::{HighlightDisplay, MessageDisplay, PulseTarget};
use crate::symbols::SymbolAlphabet;

#[derive(Debug, Clone, PartialEq)]
pub struct EffectTimings {
    pub message_fade: Duration,
    pub pulsate: Duration,
    pub rain_particles: usize,
}

impl From<&SlotConfig> for EffectTimings {
    fn from(config: &SlotConfig) -> Self {
        Self {
            message_fade: config.message_fade(),
            pulsate: config.pulsate(),
            rain_particles: config.rain_particles,
        }
    }
}

/// Win/lose feedback once the reels have settled.
pub struct EffectsCoordinator {
    messages: Rc<dyn MessageDisplay>,
    highlights: Rc<dyn HighlightDisplay>,
    scheduler: Rc<dyn Scheduler>,
    victory_cue: Rc<dyn AudioCue>,
    rain: ParticleRain,
    rain_symbols: SymbolAlphabet,
    multipliers: MultiplierTable,
    win_message: String,
    lose_message: String,
    timings: EffectTimings,
    fade: RefCell<Option<TaskHandle>>,
}

impl EffectsCoordinator {
    pub fn new(
        messages: Rc<dyn MessageDisplay>,
        highlights: Rc<dyn HighlightDisplay>,
        scheduler: Rc<dyn Scheduler>,
        victory_cue: Rc<dyn AudioCue>,
        rain: ParticleRain,
        config: &SlotConfig,
    ) -> Self {
        Self {
            messages,
            highlights,
            scheduler,
            victory_cue,
            rain,
            rain_symbols: config.rain_symbols.clone(),
            multipliers: config.multipliers.clone(),
            win_message: config.win_message.clone(),
            lose_message: config.lose_message.clone(),
            timings: EffectTimings::from(config),
            fade: RefCell::new(None),
        }
    }

    pub fn on_settled(&self, outcome: &SpinOutcome) {
        let message = if outcome.won { &self.win_message } else { &self.lose_message };
        self.show_message(message);

        if !outcome.won {
            return;
        }

        play_best_effort(self.victory_cue.as_ref());
        self.rain.spawn(self.timings.rain_particles, &self.rain_symbols);
        for target in self.pulse_targets(outcome) {
            self.pulsate(target);
        }
    }

    /// Hides the previous result, e.g. when a new spin is triggered.
    pub fn reset(&self) {
        if let Some(fade) = self.fade.borrow_mut().take() {
            fade.cancel();
        }
        self.messages.hide_message();
    }

    fn show_message(&self, text: &str) {
        if let Some(previous) = self.fade.borrow_mut().take() {
            previous.cancel();
        }
        self.messages.show_message(text);

        let messages = self.messages.clone();
        let handle = self
            .scheduler
            .schedule_once(self.timings.message_fade, Box::new(move || messages.hide_message()));
        *self.fade.borrow_mut() = Some(handle);
    }

    /// Paytable rows for the multiplier-bearing symbols among the settled
    /// ones, each listed once.
    fn pulse_targets(&self, outcome: &SpinOutcome) -> Vec<PulseTarget> {
        let mut targets: Vec<PulseTarget> = Vec::new();
        for symbol in &outcome.symbols {
            let Some(label) = self.multipliers.label(symbol) else {
                continue;
            };
            if targets.iter().any(|t| &t.symbol == symbol) {
                continue;
            }
            targets.push(PulseTarget { symbol: symbol.clone(), multiplier_label: label });
        }
        targets
    }

    fn pulsate(&self, target: PulseTarget) {
        self.highlights.set_pulsating(&target, true);
        let highlights = self.highlights.clone();
        self.scheduler.schedule_once(
            self.timings.pulsate,
            Box::new(move || highlights.set_pulsating(&target, false)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::SilentCue;
    use crate::scheduler::ManualScheduler;
    use crate::surface::MemorySurface;
    use crate::symbols::RandomSymbolSource;

    struct Rig {
        surface: Rc<MemorySurface>,
        scheduler: Rc<ManualScheduler>,
        cue: Rc<SilentCue>,
        effects: EffectsCoordinator,
    }

    fn rig() -> Rig {
        let config = SlotConfig::default();
        let surface = Rc::new(MemorySurface::new(3));
        let scheduler = Rc::new(ManualScheduler::new());
        let cue = Rc::new(SilentCue::new("victory"));
        let rain = ParticleRain::new(
            surface.clone(),
            scheduler.clone(),
            RandomSymbolSource::seeded(9),
            config.rain_lifetime(),
        );
        let effects = EffectsCoordinator::new(
            surface.clone(),
            surface.clone(),
            scheduler.clone(),
            cue.clone(),
            rain,
            &config,
        );
        Rig { surface, scheduler, cue, effects }
    }

    #[test]
    fn test_loss_shows_message_without_rain() {
        let rig = rig();
        rig.effects.on_settled(&SpinOutcome::new(["🔥", "💣", "🤡"], false));

        assert_eq!(rig.surface.visible_message().as_deref(), Some("So close, try again."));
        assert_eq!(rig.surface.snapshot().particles_spawned, 0);
        assert!(rig.surface.snapshot().pulsating.is_empty());
        assert_eq!(rig.cue.plays(), 0);
    }

    #[test]
    fn test_message_fades_after_three_seconds() {
        let rig = rig();
        rig.effects.on_settled(&SpinOutcome::new(["🔥", "💣", "🤡"], false));
        rig.scheduler.advance_ms(2999);
        assert!(rig.surface.visible_message().is_some());
        rig.scheduler.advance_ms(1);
        assert!(rig.surface.visible_message().is_none());
    }

    #[test]
    fn test_win_rains_and_pulsates() {
        let rig = rig();
        rig.effects.on_settled(&SpinOutcome::new(["🤑", "🤑", "🤑"], true));

        assert_eq!(rig.surface.visible_message().as_deref(), Some("YOU WON!!!!"));
        assert_eq!(rig.cue.plays(), 1);
        assert_eq!(rig.surface.particle_count(), 60);
        assert_eq!(
            rig.surface.snapshot().pulsating,
            vec![PulseTarget { symbol: "🤑".into(), multiplier_label: "x20".into() }]
        );

        rig.scheduler.advance_ms(999);
        assert!(rig.surface.is_pulsating("🤑"));
        rig.scheduler.advance_ms(1);
        assert!(!rig.surface.is_pulsating("🤑"));
        rig.scheduler.advance_ms(5000);
        assert_eq!(rig.surface.particle_count(), 0);
    }

    #[test]
    fn test_every_multiplier_symbol_pulses_independently() {
        let rig = rig();
        rig.effects.on_settled(&SpinOutcome::new(["🔥", "💩", "🤡"], true));
        let pulsing: Vec<String> = rig
            .surface
            .snapshot()
            .pulsating
            .into_iter()
            .map(|t| t.multiplier_label)
            .collect();
        assert_eq!(pulsing, vec!["x15", "x10"]);

        rig.scheduler.advance_ms(1000);
        assert!(rig.surface.snapshot().pulsating.is_empty());
    }

    #[test]
    fn test_win_without_multiplier_symbols_still_rains() {
        let rig = rig();
        rig.effects.on_settled(&SpinOutcome::new(["🦄", "🦄", "🦄"], true));
        assert_eq!(rig.surface.particle_count(), 60);
        assert!(rig.surface.snapshot().pulsating.is_empty());
    }

    #[test]
    fn test_new_message_is_not_hidden_by_old_fade() {
        let rig = rig();
        rig.effects.on_settled(&SpinOutcome::new(["🔥", "💣", "🤡"], false));
        rig.scheduler.advance_ms(2500);
        rig.effects.on_settled(&SpinOutcome::new(["🔥", "💣", "🤡"], false));
        rig.scheduler.advance_ms(1000);
        assert!(rig.surface.visible_message().is_some());
        rig.scheduler.advance_ms(2000);
        assert!(rig.surface.visible_message().is_none());
    }

    #[test]
    fn test_reset_hides_message() {
        let rig = rig();
        rig.effects.on_settled(&SpinOutcome::new(["🔥", "💣", "🤡"], false));
        rig.effects.reset();
        assert!(rig.surface.visible_message().is_none());
        assert_eq!(rig.scheduler.pending(), 0);
    }
}
