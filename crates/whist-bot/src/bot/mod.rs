mod play;

pub use play::{PlayPlanner, PlayReason};

use whist_core::model::card::Card;

pub(crate) fn strongest(cards: impl IntoIterator<Item = Card>) -> Option<Card> {
    cards.into_iter().max_by_key(|card| card.strength_key())
}

pub(crate) fn weakest(cards: impl IntoIterator<Item = Card>) -> Option<Card> {
    cards.into_iter().min_by_key(|card| card.strength_key())
}

#[cfg(test)]
mod tests {
    use super::{strongest, weakest};
    use whist_core::model::card::Card;
    use whist_core::model::rank::Rank;
    use whist_core::model::suit::Suit;

    #[test]
    fn extremes_over_mixed_suits() {
        let cards = [
            Card::new(Rank::Seven, Suit::Clubs),
            Card::new(Rank::King, Suit::Spades),
            Card::new(Rank::Ace, Suit::Diamonds),
        ];
        assert_eq!(strongest(cards), Some(Card::new(Rank::Ace, Suit::Diamonds)));
        assert_eq!(weakest(cards), Some(Card::new(Rank::Seven, Suit::Clubs)));
    }

    #[test]
    fn equal_ranks_break_ties_by_suit_ordinal() {
        let cards = [
            Card::new(Rank::Nine, Suit::Hearts),
            Card::new(Rank::Nine, Suit::Clubs),
        ];
        assert_eq!(strongest(cards), Some(Card::new(Rank::Nine, Suit::Hearts)));
        assert_eq!(weakest(cards), Some(Card::new(Rank::Nine, Suit::Clubs)));
    }

    #[test]
    fn empty_input_yields_none() {
        assert_eq!(strongest([]), None);
        assert_eq!(weakest([]), None);
    }
}
