use crate::game::core::Move;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

pub const HISTORY_LEN: usize = 20;
pub const DEFAULT_EXPLOIT_RATE: f64 = 0.7;

/// The human's most recent moves, oldest first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoveHistory {
    moves: VecDeque<Move>,
}

impl MoveHistory {
    pub fn record(&mut self, mv: Move) {
        self.moves.push_back(mv);
        while self.moves.len() > HISTORY_LEN {
            self.moves.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Move> + '_ {
        self.moves.iter().copied()
    }

    /// Most frequent move; ties go to whichever of the tied moves appears first
    pub fn most_frequent(&self) -> Option<Move> {
        let count = |m: Move| self.moves.iter().filter(|&&x| x == m).count();
        let best = Move::ALL.into_iter().map(count).max()?;
        self.moves.iter().copied().find(|&m| count(m) == best)
    }
}

impl FromIterator<Move> for MoveHistory {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        let mut history = MoveHistory::default();
        for mv in iter {
            history.record(mv);
        }
        history
    }
}

/// Computer player that leans on the human's habits.
///
/// With probability `exploit_rate` it plays the counter to the human's most
/// frequent recent move, otherwise a uniformly random one. Beatable on purpose.
#[derive(Debug, Clone, Copy)]
pub struct AdaptiveOpponent {
    exploit_rate: f64,
}

impl Default for AdaptiveOpponent {
    fn default() -> Self {
        Self::new(DEFAULT_EXPLOIT_RATE)
    }
}

impl AdaptiveOpponent {
    pub fn new(exploit_rate: f64) -> Self {
        Self {
            exploit_rate: exploit_rate.clamp(0.0, 1.0),
        }
    }

    pub fn exploit_rate(&self) -> f64 {
        self.exploit_rate
    }

    /// Record the human's move, then choose the computer's reply
    pub fn play<R: Rng>(&self, history: &mut MoveHistory, human: Move, rng: &mut R) -> Move {
        history.record(human);
        self.respond(history, rng)
    }

    pub fn respond<R: Rng>(&self, history: &MoveHistory, rng: &mut R) -> Move {
        if rng.random::<f64>() < self.exploit_rate
            && let Some(favourite) = history.most_frequent()
        {
            return favourite.counter();
        }
        *Move::ALL.choose(rng).unwrap_or(&Move::Rock)
    }
}
