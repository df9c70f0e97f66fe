//! Phase and trick boundaries of a move log.
//!
//! A bookmark is a log length: the state after that many moves. Bookmarks
//! are only ever added at the end as the log grows, and only removed by a
//! prune.

use serde::Serialize;

use crate::domain::state::{GameState, Phase};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Bookmarks {
    /// Bidding starts (right after the deal).
    pub bidding: Option<usize>,
    /// Winning bidder decides between skat and hand.
    pub skat_or_hand: Option<usize>,
    /// Card play starts.
    pub card_play: Option<usize>,
    /// Game finished.
    pub finished: Option<usize>,
    /// `trick_starts[n]`: start of trick n (0-based).
    trick_starts: Vec<usize>,
    /// `trick_ends[n]`: first index at which trick n is complete.
    trick_ends: Vec<usize>,
}

impl Bookmarks {
    /// Record boundaries crossed by the move that turned `before` into
    /// `after`; `index` is the log length after that move. Returns whether
    /// any bookmark was added.
    pub fn record(&mut self, index: usize, before: &GameState, after: &GameState) -> bool {
        let mut added = true;
        match after.phase {
            _ if before.phase == after.phase => added = false,
            Phase::Bid if before.phase == Phase::Deal => self.bidding = Some(index),
            Phase::SkatOrHandDecl => self.skat_or_hand = Some(index),
            Phase::CardPlay => {
                self.card_play = Some(index);
                self.trick_starts.push(index);
            }
            Phase::Finished => self.finished = Some(index),
            _ => added = false,
        }
        if after.tricks_played > before.tricks_played {
            self.trick_ends.push(index);
            if after.phase == Phase::CardPlay {
                self.trick_starts.push(index);
            }
            added = true;
        }
        added
    }

    pub fn trick_start(&self, trick: usize) -> Option<usize> {
        self.trick_starts.get(trick).copied()
    }

    pub fn trick_end(&self, trick: usize) -> Option<usize> {
        self.trick_ends.get(trick).copied()
    }

    pub fn trick_starts(&self) -> &[usize] {
        &self.trick_starts
    }

    pub fn completed_tricks(&self) -> usize {
        self.trick_ends.len()
    }

    /// Every bookmarked index, ascending.
    pub fn all(&self) -> Vec<usize> {
        let mut out: Vec<usize> = [self.bidding, self.skat_or_hand, self.card_play, self.finished]
            .into_iter()
            .flatten()
            .chain(self.trick_starts.iter().copied())
            .chain(self.trick_ends.iter().copied())
            .collect();
        out.sort_unstable();
        out.dedup();
        out
    }

    /// Drop bookmarks created by moves at positions `>= len`, i.e. every
    /// bookmark beyond the first `len` moves.
    pub fn truncate(&mut self, len: usize) {
        for slot in [
            &mut self.bidding,
            &mut self.skat_or_hand,
            &mut self.card_play,
            &mut self.finished,
        ] {
            if slot.is_some_and(|b| b > len) {
                *slot = None;
            }
        }
        self.trick_starts.retain(|&b| b <= len);
        self.trick_ends.retain(|&b| b <= len);
    }
}
