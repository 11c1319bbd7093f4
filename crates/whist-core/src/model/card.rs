use crate::model::rank::Rank;
use crate::model::suit::Suit;
use core::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Key for the strength ordering: rank first, suit ordinal as the fixed
    /// tie-break. Distinct from [`Card::beats`], which encodes trick-winning
    /// semantics rather than raw card strength.
    pub const fn strength_key(self) -> (u8, u8) {
        (self.rank.value(), self.suit as u8)
    }

    /// Whether this card defeats `other` within a trick, given the suit that
    /// was led and the trump suit in effect (if any). A trump beats every
    /// non-trump, a lead-suit card beats any off-suit non-trump, and a card
    /// that is neither trump nor lead suit beats nothing.
    pub fn beats(self, other: Card, lead_suit: Suit, trumps: Option<Suit>) -> bool {
        if let Some(trump) = trumps {
            match (self.suit == trump, other.suit == trump) {
                (true, false) => return true,
                (false, true) => return false,
                (true, true) => return self.rank > other.rank,
                (false, false) => {}
            }
        }
        if self.suit == other.suit {
            return self.rank > other.rank;
        }
        self.suit == lead_suit
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::{Card, Rank, Suit};

    #[test]
    fn higher_rank_wins_within_lead_suit() {
        let nine = Card::new(Rank::Nine, Suit::Spades);
        let jack = Card::new(Rank::Jack, Suit::Spades);
        assert!(jack.beats(nine, Suit::Spades, None));
        assert!(!nine.beats(jack, Suit::Spades, None));
    }

    #[test]
    fn trump_beats_any_non_trump() {
        let low_trump = Card::new(Rank::Two, Suit::Hearts);
        let ace_of_lead = Card::new(Rank::Ace, Suit::Spades);
        assert!(low_trump.beats(ace_of_lead, Suit::Spades, Some(Suit::Hearts)));
        assert!(!ace_of_lead.beats(low_trump, Suit::Spades, Some(Suit::Hearts)));
    }

    #[test]
    fn higher_trump_beats_lower_trump() {
        let king = Card::new(Rank::King, Suit::Hearts);
        let queen = Card::new(Rank::Queen, Suit::Hearts);
        assert!(king.beats(queen, Suit::Clubs, Some(Suit::Hearts)));
        assert!(!queen.beats(king, Suit::Clubs, Some(Suit::Hearts)));
    }

    #[test]
    fn off_suit_non_trump_beats_nothing() {
        let discard = Card::new(Rank::Ace, Suit::Diamonds);
        let lead = Card::new(Rank::Two, Suit::Spades);
        assert!(!discard.beats(lead, Suit::Spades, None));
        assert!(lead.beats(discard, Suit::Spades, None));
    }

    #[test]
    fn strength_key_orders_rank_before_suit() {
        let ace_clubs = Card::new(Rank::Ace, Suit::Clubs);
        let king_hearts = Card::new(Rank::King, Suit::Hearts);
        assert!(ace_clubs.strength_key() > king_hearts.strength_key());

        let seven_clubs = Card::new(Rank::Seven, Suit::Clubs);
        let seven_spades = Card::new(Rank::Seven, Suit::Spades);
        assert!(seven_spades.strength_key() > seven_clubs.strength_key());
    }

    #[test]
    fn display_is_rank_then_suit() {
        assert_eq!(Card::new(Rank::Ten, Suit::Diamonds).to_string(), "10D");
        assert_eq!(Card::new(Rank::Ace, Suit::Spades).to_string(), "AS");
    }
}
