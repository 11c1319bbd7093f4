use crate::model::card::Card;
use crate::model::player::PlayerPosition;
use crate::model::suit::Suit;
use crate::model::trick::{Trick, TrickError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrickSnapshot {
    pub leader: PlayerPosition,
    pub trumps: Option<Suit>,
    pub plays: Vec<PlayedCard>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PlayedCard {
    pub position: PlayerPosition,
    pub card: Card,
}

impl TrickSnapshot {
    pub fn capture(trick: &Trick) -> Self {
        TrickSnapshot {
            leader: trick.leader(),
            trumps: trick.trumps(),
            plays: trick
                .plays()
                .iter()
                .map(|play| PlayedCard {
                    position: play.position,
                    card: play.card,
                })
                .collect(),
        }
    }

    /// Rebuild the trick by replaying the recorded sequence, so a snapshot
    /// that violates turn order is rejected rather than restored.
    pub fn restore(self) -> Result<Trick, TrickError> {
        let mut trick = Trick::new(self.leader, self.trumps);
        for play in self.plays {
            trick.play(play.position, play.card)?;
        }
        Ok(trick)
    }

    pub fn to_json(trick: &Trick) -> serde_json::Result<String> {
        let snapshot = Self::capture(trick);
        serde_json::to_string_pretty(&snapshot)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::{PlayedCard, TrickSnapshot};
    use crate::model::card::Card;
    use crate::model::player::PlayerPosition;
    use crate::model::rank::Rank;
    use crate::model::suit::Suit;
    use crate::model::trick::{Trick, TrickError};

    fn sample_trick() -> Trick {
        let mut trick = Trick::new(PlayerPosition::East, Some(Suit::Hearts));
        trick
            .play(PlayerPosition::East, Card::new(Rank::Ten, Suit::Spades))
            .unwrap();
        trick
            .play(PlayerPosition::South, Card::new(Rank::Queen, Suit::Spades))
            .unwrap();
        trick
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let json = TrickSnapshot::to_json(&sample_trick()).unwrap();
        assert!(json.contains("\"leader\": \"East\""));
        assert!(json.contains("\"trumps\": \"Hearts\""));
    }

    #[test]
    fn snapshot_roundtrip_restores_plays() {
        let trick = sample_trick();
        let json = TrickSnapshot::to_json(&trick).unwrap();
        let restored = TrickSnapshot::from_json(&json).unwrap().restore().unwrap();
        assert_eq!(restored.leader(), trick.leader());
        assert_eq!(restored.trumps(), trick.trumps());
        assert_eq!(restored.plays().len(), trick.plays().len());
        assert_eq!(restored.lead_suit(), Some(Suit::Spades));
    }

    #[test]
    fn out_of_order_snapshot_is_rejected() {
        let snapshot = TrickSnapshot {
            leader: PlayerPosition::North,
            trumps: None,
            plays: vec![PlayedCard {
                position: PlayerPosition::West,
                card: Card::new(Rank::Two, Suit::Clubs),
            }],
        };
        assert!(matches!(
            snapshot.restore(),
            Err(TrickError::OutOfTurn { .. })
        ));
    }
}
