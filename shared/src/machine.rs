use std::cell::Cell;
use std::rc::Rc;

use crate::animator::SpinAnimator;
use crate::audio::AudioCue;
use crate::config::SlotConfig;
use crate::effects::EffectsCoordinator;
use crate::error::SpinError;
use crate::particles::ParticleRain;
use crate::resolver::OutcomeResolver;
use crate::scheduler::Scheduler;
use crate::surface::{
    AccountDisplay, HighlightDisplay, MessageDisplay, ParticleContainer, SlotDisplay,
    TriggerControl,
};
use crate::symbols::RandomSymbolSource;
use crate::validation::{parse_bet, validate_bet};

/// Everything the page hands to the machine.
pub struct SlotSurface {
    pub slots: Rc<dyn SlotDisplay>,
    pub messages: Rc<dyn MessageDisplay>,
    pub highlights: Rc<dyn HighlightDisplay>,
    pub particles: Rc<dyn ParticleContainer>,
    pub account: Rc<dyn AccountDisplay>,
    pub trigger: Rc<dyn TriggerControl>,
}

impl SlotSurface {
    /// One object implementing every display trait.
    pub fn uniform<T>(surface: Rc<T>) -> Self
    where
        T: SlotDisplay
            + MessageDisplay
            + HighlightDisplay
            + ParticleContainer
            + AccountDisplay
            + TriggerControl
            + 'static,
    {
        Self {
            slots: surface.clone(),
            messages: surface.clone(),
            highlights: surface.clone(),
            particles: surface.clone(),
            account: surface.clone(),
            trigger: surface,
        }
    }
}

pub struct SlotAudio {
    pub spin: Rc<dyn AudioCue>,
    pub victory: Rc<dyn AudioCue>,
}

/// One spin from button press to settled reels: validate the wager, ask the
/// server, animate, celebrate. Only one spin is ever in flight.
pub struct SlotMachine<R> {
    config: SlotConfig,
    resolver: R,
    account: Rc<dyn AccountDisplay>,
    trigger: Rc<dyn TriggerControl>,
    animator: SpinAnimator,
    effects: Rc<EffectsCoordinator>,
    in_flight: Rc<Cell<bool>>,
}

impl<R: OutcomeResolver> SlotMachine<R> {
    pub fn new(
        config: SlotConfig,
        resolver: R,
        surface: SlotSurface,
        audio: SlotAudio,
        scheduler: Rc<dyn Scheduler>,
    ) -> Self {
        Self::with_sources(
            config,
            resolver,
            surface,
            audio,
            scheduler,
            RandomSymbolSource::from_entropy(),
            RandomSymbolSource::from_entropy(),
        )
    }

    /// Like [`SlotMachine::new`] with explicit random sources for the reels
    /// and the rain.
    pub fn with_sources(
        config: SlotConfig,
        resolver: R,
        surface: SlotSurface,
        audio: SlotAudio,
        scheduler: Rc<dyn Scheduler>,
        reel_source: RandomSymbolSource,
        rain_source: RandomSymbolSource,
    ) -> Self {
        let animator = SpinAnimator::new(
            surface.slots,
            scheduler.clone(),
            audio.spin,
            reel_source,
            config.interim_symbols.clone(),
            config.spin_tick(),
            config.spin_ticks,
        );
        let rain = ParticleRain::new(
            surface.particles,
            scheduler.clone(),
            rain_source,
            config.rain_lifetime(),
        );
        let effects = EffectsCoordinator::new(
            surface.messages,
            surface.highlights,
            scheduler,
            audio.victory,
            rain,
            &config,
        );

        Self {
            config,
            resolver,
            account: surface.account,
            trigger: surface.trigger,
            animator,
            effects: Rc::new(effects),
            in_flight: Rc::new(Cell::new(false)),
        }
    }

    pub fn config(&self) -> &SlotConfig {
        &self.config
    }

    pub fn is_spinning(&self) -> bool {
        self.in_flight.get()
    }

    /// Runs one spin for the text in the bet field. Returns once the
    /// animation has started; settlement and effects follow on the timers.
    pub async fn spin(&self, bet_input: &str) -> Result<(), SpinError> {
        if self.in_flight.get() {
            return Err(SpinError::Busy);
        }

        let wager = validate_bet(parse_bet(bet_input), self.config.min_bet).map_err(|e| {
            log::warn!("Rejected bet {:?}: {}", bet_input, e.code);
            SpinError::InvalidWager(e)
        })?;

        self.set_in_flight(true);
        self.effects.reset();
        log::info!("Spinning with bet {}", wager);

        let resolution = match self.resolver.resolve(wager).await {
            Ok(resolution) => resolution,
            Err(e) => {
                log::error!("Spin failed: {}", e);
                self.set_in_flight(false);
                return Err(e);
            }
        };

        self.account.show_account(&resolution.account);

        let effects = self.effects.clone();
        let in_flight = self.in_flight.clone();
        let trigger = self.trigger.clone();
        let started = self.animator.start(
            resolution.outcome,
            Box::new(move |outcome| {
                effects.on_settled(outcome);
                in_flight.set(false);
                trigger.set_trigger_enabled(true);
            }),
        );
        if let Err(e) = started {
            self.set_in_flight(false);
            return Err(e);
        }
        Ok(())
    }

    fn set_in_flight(&self, spinning: bool) {
        self.in_flight.set(spinning);
        self.trigger.set_trigger_enabled(!spinning);
    }
}
