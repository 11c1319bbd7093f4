use super::{strongest, weakest};
use whist_core::model::card::Card;
use whist_core::model::hand::Hand;
use whist_core::model::suit::Suit;
use whist_core::model::trick::Trick;

/// Which branch of the decision procedure produced the chosen card. Feeds the
/// policy layer's telemetry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayReason {
    LeadStrongest,
    LeadTrump,
    CommitStrongest,
    WinCheaply,
    TrumpIn,
    TrumpCheaply,
    DuckLow,
    SloughLow,
}

pub struct PlayPlanner;

impl PlayPlanner {
    /// Select one card to play for the current trick. Stateless and
    /// deterministic; `None` only when the hand is empty, which the engine is
    /// expected to rule out before asking for a play.
    pub fn choose(hand: &Hand, trick: &Trick) -> Option<(Card, PlayReason)> {
        if hand.is_empty() {
            return None;
        }

        let trumps = trick.trumps();
        let Some(lead_suit) = trick.lead_suit() else {
            // Leading: strongest trump when one is held, strongest card
            // otherwise.
            if let Some(trump) = trumps {
                if let Some(best) = strongest(hand.matching(trump)) {
                    return Some((best, PlayReason::LeadTrump));
                }
            }
            return strongest(hand.iter().copied()).map(|card| (card, PlayReason::LeadStrongest));
        };

        let played: Vec<Card> = trick.plays().iter().map(|play| play.card).collect();
        let closing = played.len() == 3;

        let matches: Vec<Card> = hand.matching(lead_suit).collect();
        if !matches.is_empty() {
            return Some(match contest(&matches, &played, lead_suit, trumps, closing) {
                Contest::Commit(card) => (card, PlayReason::CommitStrongest),
                Contest::CheapWin(card) => (card, PlayReason::WinCheaply),
                // Following suit cannot win: shed the weakest matching card.
                Contest::CannotWin => (weakest(matches)?, PlayReason::DuckLow),
            });
        }

        if let Some(trump) = trumps {
            let trump_cards: Vec<Card> = hand.matching(trump).collect();
            if !trump_cards.is_empty() {
                return Some(
                    match contest(&trump_cards, &played, lead_suit, trumps, closing) {
                        Contest::Commit(card) => (card, PlayReason::TrumpIn),
                        Contest::CheapWin(card) => (card, PlayReason::TrumpCheaply),
                        // Trumping cannot win either, so the whole hand is
                        // forfeit; lose the globally weakest card.
                        Contest::CannotWin => (weakest(hand.iter().copied())?, PlayReason::SloughLow),
                    },
                );
            }
        }

        weakest(hand.iter().copied()).map(|card| (card, PlayReason::SloughLow))
    }
}

enum Contest {
    Commit(Card),
    CheapWin(Card),
    CannotWin,
}

/// Weigh `candidates` against the cards already down. While players are still
/// to act the strongest winning candidate is committed; when this play closes
/// the trick, the weakest candidate that still beats every played card wins
/// it as cheaply as possible.
fn contest(
    candidates: &[Card],
    played: &[Card],
    lead_suit: Suit,
    trumps: Option<Suit>,
    closing: bool,
) -> Contest {
    let best = strongest(candidates.iter().copied()).expect("candidates are non-empty");
    let wins = played
        .iter()
        .all(|&card| best.beats(card, lead_suit, trumps));
    if !wins {
        return Contest::CannotWin;
    }

    if closing {
        let mut ascending = candidates.to_vec();
        ascending.sort_by_key(|card| card.strength_key());
        let cheapest = ascending
            .into_iter()
            .find(|candidate| {
                played
                    .iter()
                    .all(|&card| candidate.beats(card, lead_suit, trumps))
            })
            .unwrap_or(best);
        return Contest::CheapWin(cheapest);
    }

    Contest::Commit(best)
}
