use std::rc::Rc;

use shared::surface::{
    AccountDisplay, HighlightDisplay, MessageDisplay, Particle, ParticleContainer, ParticleId,
    PulseTarget, SlotDisplay, TriggerControl,
};
use shared::AccountSnapshot;
use yew::prelude::*;

pub const EMPTY_SLOT: &str = "❔";

/// Everything the slot machine page renders.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardState {
    pub slots: Vec<String>,
    pub message: Option<String>,
    pub message_visible: bool,
    pub pulsating: Vec<PulseTarget>,
    pub particles: Vec<Particle>,
    pub balance: Option<String>,
    pub level: Option<String>,
    pub spin_enabled: bool,
}

impl BoardState {
    pub fn new(slot_count: usize) -> Self {
        Self {
            slots: vec![EMPTY_SLOT.to_string(); slot_count],
            message: None,
            message_visible: false,
            pulsating: Vec::new(),
            particles: Vec::new(),
            balance: None,
            level: None,
            spin_enabled: true,
        }
    }

    pub fn is_pulsating(&self, symbol: &str) -> bool {
        self.pulsating.iter().any(|t| t.symbol == symbol)
    }
}

pub enum BoardAction {
    SetSlot(usize, String),
    ShowMessage(String),
    HideMessage,
    Pulsate(PulseTarget, bool),
    AddParticle(Particle),
    RemoveParticle(ParticleId),
    SetAccount(AccountSnapshot),
    SetSpinEnabled(bool),
}

impl Reducible for BoardState {
    type Action = BoardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            BoardAction::SetSlot(index, symbol) => {
                if let Some(slot) = next.slots.get_mut(index) {
                    *slot = symbol;
                }
            }
            BoardAction::ShowMessage(text) => {
                next.message = Some(text);
                next.message_visible = true;
            }
            BoardAction::HideMessage => next.message_visible = false,
            BoardAction::Pulsate(target, on) => {
                next.pulsating.retain(|t| *t != target);
                if on {
                    next.pulsating.push(target);
                }
            }
            BoardAction::AddParticle(particle) => next.particles.push(particle),
            BoardAction::RemoveParticle(id) => {
                if !next.particles.iter().any(|p| p.id == id) {
                    return self;
                }
                next.particles.retain(|p| p.id != id);
            }
            BoardAction::SetAccount(account) => {
                next.balance = Some(account.balance_text());
                next.level = Some(account.level_text());
            }
            BoardAction::SetSpinEnabled(enabled) => next.spin_enabled = enabled,
        }
        next.into()
    }
}

/// Display surface backed by the page's reducer. Writes become re-renders.
pub struct BoardSurface {
    dispatcher: UseReducerDispatcher<BoardState>,
    slot_count: usize,
}

impl BoardSurface {
    pub fn new(dispatcher: UseReducerDispatcher<BoardState>, slot_count: usize) -> Self {
        Self { dispatcher, slot_count }
    }
}

impl SlotDisplay for BoardSurface {
    fn slot_count(&self) -> usize {
        self.slot_count
    }

    fn set_slot(&self, index: usize, symbol: &str) {
        self.dispatcher.dispatch(BoardAction::SetSlot(index, symbol.to_string()));
    }
}

impl MessageDisplay for BoardSurface {
    fn show_message(&self, text: &str) {
        self.dispatcher.dispatch(BoardAction::ShowMessage(text.to_string()));
    }

    fn hide_message(&self) {
        self.dispatcher.dispatch(BoardAction::HideMessage);
    }
}

impl HighlightDisplay for BoardSurface {
    fn set_pulsating(&self, target: &PulseTarget, on: bool) {
        self.dispatcher.dispatch(BoardAction::Pulsate(target.clone(), on));
    }
}

impl ParticleContainer for BoardSurface {
    fn insert_particle(&self, particle: Particle) {
        self.dispatcher.dispatch(BoardAction::AddParticle(particle));
    }

    fn remove_particle(&self, id: ParticleId) {
        self.dispatcher.dispatch(BoardAction::RemoveParticle(id));
    }
}

impl AccountDisplay for BoardSurface {
    fn show_account(&self, account: &AccountSnapshot) {
        self.dispatcher.dispatch(BoardAction::SetAccount(account.clone()));
    }
}

impl TriggerControl for BoardSurface {
    fn set_trigger_enabled(&self, enabled: bool) {
        self.dispatcher.dispatch(BoardAction::SetSpinEnabled(enabled));
    }
}
