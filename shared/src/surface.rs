//! Display targets the core writes to. Each component gets only the traits
//! it needs; the browser implements them on top of the page state, tests use
//! [`MemorySurface`].

use std::cell::RefCell;

use crate::shared_slot_game::AccountSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticleId(pub u64);

/// One falling emoji of the win rain.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub id: ParticleId,
    pub symbol: String,
    /// Horizontal position in percent of viewport width, `0.0..100.0`.
    pub left_vw: f64,
    pub lifetime_secs: f64,
}

/// Paytable row to pulse: the symbol cell and its multiplier cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PulseTarget {
    pub symbol: String,
    pub multiplier_label: String,
}

pub trait SlotDisplay {
    fn slot_count(&self) -> usize;
    fn set_slot(&self, index: usize, symbol: &str);
}

pub trait MessageDisplay {
    fn show_message(&self, text: &str);
    fn hide_message(&self);
}

pub trait HighlightDisplay {
    fn set_pulsating(&self, target: &PulseTarget, on: bool);
}

pub trait ParticleContainer {
    fn insert_particle(&self, particle: Particle);
    /// Removing a particle that is already gone is a no-op.
    fn remove_particle(&self, id: ParticleId);
}

pub trait AccountDisplay {
    fn show_account(&self, account: &AccountSnapshot);
}

/// The spin button. Disabled while a spin is in flight.
pub trait TriggerControl {
    fn set_trigger_enabled(&self, enabled: bool);
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SurfaceState {
    pub slots: Vec<String>,
    pub message: Option<String>,
    pub message_visible: bool,
    pub pulsating: Vec<PulseTarget>,
    pub particles: Vec<Particle>,
    pub account: Option<AccountSnapshot>,
    pub trigger_enabled: bool,
    /// Every value each slot has shown, oldest first.
    pub slot_history: Vec<Vec<String>>,
    pub particles_spawned: usize,
}

/// In-memory surface holding whatever was last written to it.
pub struct MemorySurface {
    state: RefCell<SurfaceState>,
}

impl MemorySurface {
    pub fn new(slot_count: usize) -> Self {
        Self {
            state: RefCell::new(SurfaceState {
                slots: vec![String::new(); slot_count],
                slot_history: vec![Vec::new(); slot_count],
                trigger_enabled: true,
                ..SurfaceState::default()
            }),
        }
    }

    pub fn snapshot(&self) -> SurfaceState {
        self.state.borrow().clone()
    }

    pub fn slots(&self) -> Vec<String> {
        self.state.borrow().slots.clone()
    }

    pub fn visible_message(&self) -> Option<String> {
        let state = self.state.borrow();
        state.message.clone().filter(|_| state.message_visible)
    }

    pub fn particle_count(&self) -> usize {
        self.state.borrow().particles.len()
    }

    /// Drops every particle, as if the container were cleared externally.
    pub fn clear_particles(&self) {
        self.state.borrow_mut().particles.clear();
    }

    pub fn is_pulsating(&self, symbol: &str) -> bool {
        self.state
            .borrow()
            .pulsating
            .iter()
            .any(|t| t.symbol == symbol)
    }
}

impl SlotDisplay for MemorySurface {
    fn slot_count(&self) -> usize {
        self.state.borrow().slots.len()
    }

    fn set_slot(&self, index: usize, symbol: &str) {
        let mut guard = self.state.borrow_mut();
        let state = &mut *guard;
        if let Some(slot) = state.slots.get_mut(index) {
            *slot = symbol.to_string();
            state.slot_history[index].push(symbol.to_string());
        }
    }
}

impl MessageDisplay for MemorySurface {
    fn show_message(&self, text: &str) {
        let mut state = self.state.borrow_mut();
        state.message = Some(text.to_string());
        state.message_visible = true;
    }

    fn hide_message(&self) {
        self.state.borrow_mut().message_visible = false;
    }
}

impl HighlightDisplay for MemorySurface {
    fn set_pulsating(&self, target: &PulseTarget, on: bool) {
        let mut state = self.state.borrow_mut();
        state.pulsating.retain(|t| t != target);
        if on {
            state.pulsating.push(target.clone());
        }
    }
}

impl ParticleContainer for MemorySurface {
    fn insert_particle(&self, particle: Particle) {
        let mut state = self.state.borrow_mut();
        state.particles.push(particle);
        state.particles_spawned += 1;
    }

    fn remove_particle(&self, id: ParticleId) {
        self.state.borrow_mut().particles.retain(|p| p.id != id);
    }
}

impl AccountDisplay for MemorySurface {
    fn show_account(&self, account: &AccountSnapshot) {
        self.state.borrow_mut().account = Some(account.clone());
    }
}

impl TriggerControl for MemorySurface {
    fn set_trigger_enabled(&self, enabled: bool) {
        self.state.borrow_mut().trigger_enabled = enabled;
    }
}
