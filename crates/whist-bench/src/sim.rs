use std::fmt::Write as _;

use tracing::{Level, event};
use whist_bot::{Policy, PolicyContext, SimplePolicy};
use whist_core::model::deck::Deck;
use whist_core::model::player::PlayerPosition;
use whist_core::model::trick::Trick;

use crate::config::SimulationConfig;

const DEFAULT_SEED: u64 = 0x5EED;

/// Plays independent single tricks: each trick gets a fresh seeded deal, a
/// rotating leader, and four SimplePolicy seats. No score or state carries
/// from one trick to the next.
pub struct TrickRunner {
    config: SimulationConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationReport {
    pub tricks: usize,
    pub tallies: [usize; 4],
}

impl TrickRunner {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> SimulationReport {
        let seed = self.config.seed.unwrap_or(DEFAULT_SEED);
        let mut tallies = [0usize; 4];

        for index in 0..self.config.tricks {
            let hands = Deck::shuffled_with_seed(seed.wrapping_add(index as u64)).deal();
            let leader =
                PlayerPosition::from_index(index % 4).expect("leader index in range");
            let trumps = self.config.trumps.for_trick(index);
            let mut trick = Trick::new(leader, trumps);

            let mut seat = leader;
            let mut policy = SimplePolicy::new();
            while !trick.is_complete() {
                let card = policy.choose_play(&PolicyContext {
                    seat,
                    hand: &hands[seat.index()],
                    trick: &trick,
                });
                trick
                    .play(seat, card)
                    .expect("runner plays seats in turn order");
                seat = seat.next();
            }

            let winner = trick.winner().expect("complete trick has a winner");
            tallies[winner.index()] += 1;

            event!(
                target: "whist_bench::trick",
                Level::INFO,
                trick = index,
                leader = %leader,
                trumps = ?trumps,
                winner = %winner,
            );
        }

        SimulationReport {
            tricks: self.config.tricks,
            tallies,
        }
    }
}

impl SimulationReport {
    pub fn summary(&self) -> String {
        let mut out = format!("Played {} trick{}\n", self.tricks, plural(self.tricks));
        for seat in PlayerPosition::LOOP {
            let wins = self.tallies[seat.index()];
            let _ = writeln!(out, "  {seat}: {wins} win{}", plural(wins));
        }
        out
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

#[cfg(test)]
mod tests {
    use super::TrickRunner;
    use crate::config::{SimulationConfig, TrumpMode};

    fn config(tricks: usize, seed: u64, trumps: TrumpMode) -> SimulationConfig {
        SimulationConfig {
            tricks,
            seed: Some(seed),
            trumps,
            ..SimulationConfig::default()
        }
    }

    #[test]
    fn every_trick_has_exactly_one_winner() {
        let report = TrickRunner::new(config(12, 99, TrumpMode::Rotate)).run();
        assert_eq!(report.tricks, 12);
        assert_eq!(report.tallies.iter().sum::<usize>(), 12);
    }

    #[test]
    fn identical_seeds_reproduce_the_tally() {
        let a = TrickRunner::new(config(20, 7, TrumpMode::None)).run();
        let b = TrickRunner::new(config(20, 7, TrumpMode::None)).run();
        assert_eq!(a, b);
    }

    #[test]
    fn summary_lists_all_seats() {
        let report = TrickRunner::new(config(4, 1, TrumpMode::Rotate)).run();
        let summary = report.summary();
        for seat in ["North", "East", "South", "West"] {
            assert!(summary.contains(seat), "missing {seat} in {summary}");
        }
    }
}
