use futures::future::LocalBoxFuture;

use crate::error::SpinError;
use crate::shared_slot_game::Resolution;
use crate::validation::WagerAmount;

/// The game server's `/play` endpoint, or anything standing in for it.
pub trait OutcomeResolver {
    fn resolve(&self, wager: WagerAmount) -> LocalBoxFuture<'_, Result<Resolution, SpinError>>;
}

impl<T: OutcomeResolver + ?Sized> OutcomeResolver for std::rc::Rc<T> {
    fn resolve(&self, wager: WagerAmount) -> LocalBoxFuture<'_, Result<Resolution, SpinError>> {
        (**self).resolve(wager)
    }
}
