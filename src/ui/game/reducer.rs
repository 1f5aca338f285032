use crate::ui::game::intent::GameIntent;
use crate::ui::game::state::{GamePhase, GameState};
use crate::ui::mvi::Reducer;

/// Base score for a found pair.
const PAIR_SCORE: u32 = 10;

/// Decaying early-game bonus, keyed by the turn count as it stood
/// before the current comparison increments it.
pub fn turn_bonus(turns: u32) -> u32 {
    match turns {
        0 => 30,
        1 => 20,
        2 => 10,
        _ => 0,
    }
}

pub struct GameReducer;

impl Reducer for GameReducer {
    type State = GameState;
    type Intent = GameIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            GameIntent::Start { deck } => GameState {
                phase: GamePhase::InProgress,
                deck,
                flipped: Vec::new(),
                matched: Vec::new(),
                score: 0,
                turns: 0,
                epoch: state.epoch + 1,
                pending_mismatch: None,
            },
            GameIntent::Flip { index } => flip(state, index),
            GameIntent::MismatchElapsed { epoch } => mismatch_elapsed(state, epoch),
        }
    }
}

fn flip(state: GameState, index: usize) -> GameState {
    if state.phase != GamePhase::InProgress {
        return state;
    }
    // Two cards up blocks further flips, including during the mismatch
    // delay. Re-clicking a flipped card is a no-op.
    if state.flipped.len() == 2 || state.flipped.contains(&index) {
        return state;
    }
    let Some(card) = state.deck.get(index) else {
        return state;
    };
    if state.matched.contains(&card.value) {
        return state;
    }

    let mut next = state;
    next.flipped.push(index);
    if next.flipped.len() < 2 {
        return next;
    }

    let first = next.deck[next.flipped[0]];
    let second = next.deck[next.flipped[1]];
    if first.value == second.value {
        next.matched.push(first.value);
        next.matched.push(second.value);
        next.score += PAIR_SCORE + turn_bonus(next.turns);
        next.turns += 1;
        next.flipped.clear();
        // Win detection lives on the match-resolution path only; it
        // can never run against an empty board.
        if next.matched.len() == next.deck.len() {
            next.phase = GamePhase::Over;
        }
    } else {
        next.pending_mismatch = Some(next.epoch);
    }
    next
}

fn mismatch_elapsed(state: GameState, epoch: u64) -> GameState {
    // A timer scheduled before a restart fires with an old epoch and
    // must not touch the new board.
    if state.pending_mismatch != Some(epoch) {
        return state;
    }
    let mut next = state;
    next.flipped.clear();
    next.turns += 1;
    next.pending_mismatch = None;
    next
}
