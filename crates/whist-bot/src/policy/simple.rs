use super::{Policy, PolicyContext};
use crate::bot::{PlayPlanner, PlayReason};
use tracing::{Level, event};
use whist_core::model::card::Card;

/// Plays the strongest card available while the trick can still be won,
/// discards the weakest card otherwise, and when closing the trick plays the
/// least card needed to win it.
#[derive(Debug, Default)]
pub struct SimplePolicy;

impl SimplePolicy {
    pub fn new() -> Self {
        Self
    }
}

impl Policy for SimplePolicy {
    fn choose_play(&mut self, ctx: &PolicyContext) -> Card {
        let Some((card, reason)) = PlayPlanner::choose(ctx.hand, ctx.trick) else {
            panic!("simple policy expected a non-empty hand");
        };
        log_play_decision(ctx, card, reason);
        card
    }
}

fn log_play_decision(ctx: &PolicyContext, chosen: Card, reason: PlayReason) {
    if !tracing::enabled!(Level::INFO) {
        return;
    }

    event!(
        target: "whist_bot::play",
        Level::INFO,
        seat = %ctx.seat,
        hand_size = ctx.hand.len(),
        trick_cards = ctx.trick.plays().len(),
        trumps = ?ctx.trick.trumps(),
        chosen = %chosen,
        reason = ?reason,
    );
}

#[cfg(test)]
mod tests {
    use super::SimplePolicy;
    use crate::policy::{Policy, PolicyContext};
    use whist_core::model::card::Card;
    use whist_core::model::hand::Hand;
    use whist_core::model::player::PlayerPosition;
    use whist_core::model::rank::Rank;
    use whist_core::model::suit::Suit;
    use whist_core::model::trick::Trick;

    #[test]
    fn plays_a_card_from_the_hand() {
        let hand = Hand::with_cards(vec![
            Card::new(Rank::Seven, Suit::Clubs),
            Card::new(Rank::Queen, Suit::Diamonds),
        ]);
        let trick = Trick::new(PlayerPosition::South, None);
        let mut policy = SimplePolicy::new();
        let card = policy.choose_play(&PolicyContext {
            seat: PlayerPosition::South,
            hand: &hand,
            trick: &trick,
        });
        assert!(hand.contains(card));
        assert_eq!(card, Card::new(Rank::Queen, Suit::Diamonds));
    }

    #[test]
    #[should_panic(expected = "non-empty hand")]
    fn empty_hand_is_a_caller_defect() {
        let hand = Hand::new();
        let trick = Trick::new(PlayerPosition::North, None);
        let mut policy = SimplePolicy::new();
        policy.choose_play(&PolicyContext {
            seat: PlayerPosition::North,
            hand: &hand,
            trick: &trick,
        });
    }
}
