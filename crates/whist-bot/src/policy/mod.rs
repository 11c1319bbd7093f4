mod simple;

pub use simple::SimplePolicy;

use whist_core::model::card::Card;
use whist_core::model::hand::Hand;
use whist_core::model::player::PlayerPosition;
use whist_core::model::trick::Trick;

/// Context provided to policies for decision-making
pub struct PolicyContext<'a> {
    pub seat: PlayerPosition,
    pub hand: &'a Hand,
    pub trick: &'a Trick,
}

/// Unified interface for automated players
pub trait Policy: Send {
    /// Choose 1 card to play into the current trick
    fn choose_play(&mut self, ctx: &PolicyContext) -> Card;
}
