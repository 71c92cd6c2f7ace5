use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::audio::{play_best_effort, AudioCue};
use crate::error::SpinError;
use crate::scheduler::{Scheduler, TaskHandle};
use crate::shared_slot_game::SpinOutcome;
use crate::surface::SlotDisplay;
use crate::symbols::{RandomSymbolSource, SymbolAlphabet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinPhase {
    Idle,
    Spinning { remaining: u32 },
    Settling,
}

pub type SettledCallback = Box<dyn FnOnce(&SpinOutcome)>;

struct Reels {
    phase: SpinPhase,
    slots: Rc<dyn SlotDisplay>,
    source: RandomSymbolSource,
    alphabet: SymbolAlphabet,
    timer: Option<TaskHandle>,
    outcome: Option<SpinOutcome>,
    on_settled: Option<SettledCallback>,
}

/// Drives the slots from random interim frames to the server's result.
///
/// A spin runs `spin_ticks` ticks, one every `tick` period. Each tick redraws
/// every slot from the interim alphabet; after the last one the timer is
/// cancelled, the outcome is written and the settlement callback runs once.
pub struct SpinAnimator {
    reels: Rc<RefCell<Reels>>,
    scheduler: Rc<dyn Scheduler>,
    spin_cue: Rc<dyn AudioCue>,
    tick: Duration,
    spin_ticks: u32,
}

impl SpinAnimator {
    pub fn new(
        slots: Rc<dyn SlotDisplay>,
        scheduler: Rc<dyn Scheduler>,
        spin_cue: Rc<dyn AudioCue>,
        source: RandomSymbolSource,
        alphabet: SymbolAlphabet,
        tick: Duration,
        spin_ticks: u32,
    ) -> Self {
        Self {
            reels: Rc::new(RefCell::new(Reels {
                phase: SpinPhase::Idle,
                slots,
                source,
                alphabet,
                timer: None,
                outcome: None,
                on_settled: None,
            })),
            scheduler,
            spin_cue,
            tick,
            spin_ticks,
        }
    }

    pub fn phase(&self) -> SpinPhase {
        self.reels.borrow().phase
    }

    pub fn start(&self, outcome: SpinOutcome, on_settled: SettledCallback) -> Result<(), SpinError> {
        {
            let mut reels = self.reels.borrow_mut();
            if reels.phase != SpinPhase::Idle {
                log::warn!("Spin requested while {:?}", reels.phase);
                return Err(SpinError::Busy);
            }
            reels.phase = SpinPhase::Spinning { remaining: self.spin_ticks.max(1) };
            reels.outcome = Some(outcome);
            reels.on_settled = Some(on_settled);
        }

        play_best_effort(self.spin_cue.as_ref());

        let reels = self.reels.clone();
        let handle = self
            .scheduler
            .schedule_repeating(self.tick, Box::new(move || Self::on_tick(&reels)));
        self.reels.borrow_mut().timer = Some(handle);
        Ok(())
    }

    /// Stops the interim animation and settles on the outcome right away.
    /// Does nothing when no spin is running, so it is safe to call twice.
    pub fn stop(&self) {
        Self::settle(&self.reels);
    }

    fn on_tick(reels: &Rc<RefCell<Reels>>) {
        let finished = {
            let mut guard = reels.borrow_mut();
            let Reels { phase, slots, source, alphabet, .. } = &mut *guard;
            let SpinPhase::Spinning { remaining } = *phase else {
                return;
            };

            for index in 0..slots.slot_count() {
                if let Some(symbol) = source.draw(alphabet) {
                    slots.set_slot(index, symbol);
                }
            }

            let remaining = remaining.saturating_sub(1);
            *phase = SpinPhase::Spinning { remaining };
            remaining == 0
        };

        if finished {
            Self::settle(reels);
        }
    }

    fn settle(reels: &Rc<RefCell<Reels>>) {
        let (outcome, on_settled) = {
            let mut guard = reels.borrow_mut();
            if let Some(timer) = guard.timer.take() {
                timer.cancel();
            }
            let Some(outcome) = guard.outcome.take() else {
                return;
            };
            guard.phase = SpinPhase::Settling;

            let slot_count = guard.slots.slot_count();
            if outcome.symbols.len() != slot_count {
                log::warn!(
                    "Outcome has {} symbols for {} slots; unmatched slots keep their last frame",
                    outcome.symbols.len(),
                    slot_count
                );
            }
            for (index, symbol) in outcome.symbols.iter().take(slot_count).enumerate() {
                guard.slots.set_slot(index, symbol);
            }
            (outcome, guard.on_settled.take())
        };

        log::info!("Settled on {} (won: {})", outcome.symbols.join(" "), outcome.won);
        if let Some(on_settled) = on_settled {
            on_settled(&outcome);
        }

        let mut guard = reels.borrow_mut();
        if guard.phase == SpinPhase::Settling {
            guard.phase = SpinPhase::Idle;
        }
    }
}

impl Drop for SpinAnimator {
    fn drop(&mut self) {
        if let Some(timer) = self.reels.borrow_mut().timer.take() {
            timer.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::SilentCue;
    use crate::scheduler::ManualScheduler;
    use crate::surface::MemorySurface;
    use std::cell::Cell;

    struct Rig {
        surface: Rc<MemorySurface>,
        scheduler: Rc<ManualScheduler>,
        cue: Rc<SilentCue>,
        animator: SpinAnimator,
    }

    fn rig(alphabet: SymbolAlphabet) -> Rig {
        let surface = Rc::new(MemorySurface::new(3));
        let scheduler = Rc::new(ManualScheduler::new());
        let cue = Rc::new(SilentCue::failing("spin"));
        let animator = SpinAnimator::new(
            surface.clone(),
            scheduler.clone(),
            cue.clone(),
            RandomSymbolSource::seeded(5),
            alphabet,
            Duration::from_millis(100),
            20,
        );
        Rig { surface, scheduler, cue, animator }
    }

    fn counter() -> (Rc<Cell<u32>>, SettledCallback) {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        (count, Box::new(move |_| c.set(c.get() + 1)))
    }

    #[test]
    fn test_settles_after_exactly_twenty_ticks() {
        let rig = rig(SymbolAlphabet::from(["🦄", "👽"]));
        let (settled, on_settled) = counter();
        rig.animator
            .start(SpinOutcome::new(["🔥", "💣", "🤡"], false), on_settled)
            .unwrap();

        rig.scheduler.advance_ms(1900);
        assert_eq!(rig.animator.phase(), SpinPhase::Spinning { remaining: 1 });
        assert_eq!(settled.get(), 0);
        assert!(rig.surface.slots().iter().all(|s| s == "🦄" || s == "👽"));

        rig.scheduler.advance_ms(100);
        assert_eq!(rig.surface.slots(), vec!["🔥", "💣", "🤡"]);
        assert_eq!(settled.get(), 1);
        assert_eq!(rig.animator.phase(), SpinPhase::Idle);
        assert_eq!(rig.scheduler.pending(), 0);
    }

    #[test]
    fn test_interim_frames_never_use_outcome_symbols() {
        let rig = rig(SymbolAlphabet::from(["🦄", "👽", "🤪"]));
        let (_, on_settled) = counter();
        rig.animator
            .start(SpinOutcome::new(["🔥", "💣", "🤡"], false), on_settled)
            .unwrap();
        rig.scheduler.advance_ms(5000);

        for history in rig.surface.snapshot().slot_history {
            let (last, interim) = history.split_last().unwrap();
            assert_eq!(interim.len(), 20);
            assert!(interim.iter().all(|s| ["🦄", "👽", "🤪"].contains(&s.as_str())));
            assert!(["🔥", "💣", "🤡"].contains(&last.as_str()));
        }
    }

    #[test]
    fn test_stop_twice_settles_once() {
        let rig = rig(SymbolAlphabet::from(["🦄"]));
        let (settled, on_settled) = counter();
        rig.animator
            .start(SpinOutcome::new(["🤑", "🤑", "🤑"], true), on_settled)
            .unwrap();
        rig.scheduler.advance_ms(300);

        rig.animator.stop();
        rig.animator.stop();
        rig.scheduler.advance_ms(5000);

        assert_eq!(settled.get(), 1);
        assert_eq!(rig.surface.slots(), vec!["🤑", "🤑", "🤑"]);
        assert_eq!(rig.surface.snapshot().slot_history[0].len(), 4);
    }

    #[test]
    fn test_stop_when_idle_is_noop() {
        let rig = rig(SymbolAlphabet::from(["🦄"]));
        rig.animator.stop();
        assert_eq!(rig.animator.phase(), SpinPhase::Idle);
        assert_eq!(rig.surface.slots(), vec!["", "", ""]);
    }

    #[test]
    fn test_short_outcome_leaves_trailing_slot_interim() {
        let rig = rig(SymbolAlphabet::from(["🦄"]));
        let (settled, on_settled) = counter();
        rig.animator
            .start(SpinOutcome::new(["🔥", "💣"], false), on_settled)
            .unwrap();
        rig.scheduler.advance_ms(2000);

        assert_eq!(rig.surface.slots(), vec!["🔥", "💣", "🦄"]);
        assert_eq!(settled.get(), 1);
    }

    #[test]
    fn test_long_outcome_is_truncated_to_slots() {
        let rig = rig(SymbolAlphabet::from(["🦄"]));
        let (_, on_settled) = counter();
        rig.animator
            .start(SpinOutcome::new(["🔥", "💣", "🤡", "💀"], false), on_settled)
            .unwrap();
        rig.scheduler.advance_ms(2000);
        assert_eq!(rig.surface.slots(), vec!["🔥", "💣", "🤡"]);
    }

    #[test]
    fn test_overlapping_start_is_refused() {
        let rig = rig(SymbolAlphabet::from(["🦄"]));
        let (settled, first) = counter();
        let (_, second) = counter();
        rig.animator.start(SpinOutcome::new(["🔥"; 3], false), first).unwrap();
        assert_eq!(
            rig.animator.start(SpinOutcome::new(["💣"; 3], false), second),
            Err(SpinError::Busy)
        );
        rig.scheduler.advance_ms(2000);
        assert_eq!(settled.get(), 1);
        assert_eq!(rig.surface.slots(), vec!["🔥", "🔥", "🔥"]);
    }

    #[test]
    fn test_audio_failure_does_not_block_spin() {
        let rig = rig(SymbolAlphabet::from(["🦄"]));
        let (settled, on_settled) = counter();
        rig.animator.start(SpinOutcome::new(["💩"; 3], true), on_settled).unwrap();
        rig.scheduler.advance_ms(2000);
        assert_eq!(rig.cue.plays(), 1);
        assert_eq!(settled.get(), 1);
    }

    #[test]
    fn test_can_spin_again_after_settling() {
        let rig = rig(SymbolAlphabet::from(["🦄"]));
        let (settled, first) = counter();
        rig.animator.start(SpinOutcome::new(["🔥"; 3], false), first).unwrap();
        rig.scheduler.advance_ms(2000);

        let c = settled.clone();
        rig.animator
            .start(SpinOutcome::new(["💣"; 3], false), Box::new(move |_| c.set(c.get() + 1)))
            .unwrap();
        rig.scheduler.advance_ms(2000);
        assert_eq!(settled.get(), 2);
        assert_eq!(rig.surface.slots(), vec!["💣", "💣", "💣"]);
    }
}
