//! The missionaries-and-cannibals river crossing, a state space with a
//! legality filter baked into its successor function.

use crate::search::problem::SearchProblem;

/// Travellers of each kind, per bank, at the start.
const CREW: u8 = 3;

/// Moves the two-seat boat can make: `(missionaries, cannibals)` aboard.
const MOVES: [(u8, u8); 5] = [(2, 0), (1, 0), (0, 2), (0, 1), (1, 1)];

/// Who is on the west bank, and where the boat is. The east bank is
/// implied: everyone not on the west bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CrossingState {
    pub west_missionaries: u8,
    pub west_cannibals: u8,
    pub boat_west: bool,
}

impl CrossingState {
    /// Everyone west, boat west.
    pub fn start() -> Self {
        Self {
            west_missionaries: CREW,
            west_cannibals: CREW,
            boat_west: true,
        }
    }

    pub fn east_missionaries(&self) -> u8 {
        CREW - self.west_missionaries
    }

    pub fn east_cannibals(&self) -> u8 {
        CREW - self.west_cannibals
    }

    /// Neither bank may have its missionaries outnumbered by cannibals.
    fn is_legal(&self) -> bool {
        if self.west_missionaries > 0 && self.west_missionaries < self.west_cannibals {
            return false;
        }
        if self.east_missionaries() > 0 && self.east_missionaries() < self.east_cannibals() {
            return false;
        }
        true
    }
}

/// The fixed three-and-three crossing puzzle.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrossingProblem;

impl SearchProblem for CrossingProblem {
    type State = CrossingState;

    fn is_goal(&self, state: &Self::State) -> bool {
        state.west_missionaries == 0 && state.west_cannibals == 0
    }

    fn successors(&self, state: &Self::State) -> Vec<Self::State> {
        let mut successors = Vec::new();
        for (missionaries, cannibals) in MOVES {
            let candidate = if state.boat_west {
                if state.west_missionaries < missionaries || state.west_cannibals < cannibals {
                    continue;
                }
                CrossingState {
                    west_missionaries: state.west_missionaries - missionaries,
                    west_cannibals: state.west_cannibals - cannibals,
                    boat_west: false,
                }
            } else {
                if state.east_missionaries() < missionaries || state.east_cannibals() < cannibals {
                    continue;
                }
                CrossingState {
                    west_missionaries: state.west_missionaries + missionaries,
                    west_cannibals: state.west_cannibals + cannibals,
                    boat_west: true,
                }
            };
            if candidate.is_legal() {
                successors.push(candidate);
            }
        }
        successors
    }
}
