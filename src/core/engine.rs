use crate::models::SwipeAction;

/// Result of evaluating a swipe against the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOutcome {
    pub matched: bool,
}

/// Mutual-match state of an unordered user pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairState {
    /// Neither side has liked the other
    NoSignal,
    /// Exactly one side has liked the other
    OneSidedLike,
    /// Both sides have liked each other; terminal, there is no unmatch
    Matched,
}

/// Derive the pair state from the like signals recorded in the ledger
///
/// Passes never contribute: a pass does not transition the pair and does
/// not block a later like from either side.
pub fn pair_state(a_likes_b: bool, b_likes_a: bool) -> PairState {
    match (a_likes_b, b_likes_a) {
        (true, true) => PairState::Matched,
        (false, false) => PairState::NoSignal,
        _ => PairState::OneSidedLike,
    }
}

/// Match engine - derives mutual-match state from recorded swipes
///
/// The engine is a pure derivation with no state of its own: the caller
/// records the swipe, looks up the reciprocal like, and hands both facts
/// here. On a mutual like the caller ensures a match row exists via an
/// atomic insert-if-absent keyed on the canonical pair; the outcome is
/// `matched` whether that insert created a row or found one already there.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchEngine;

impl MatchEngine {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate a swipe that has already been appended to the ledger
    ///
    /// `reciprocal_like` is whether the ledger holds a like from the target
    /// back to the actor. It is only consulted for likes; a pass never
    /// produces a match.
    pub fn evaluate(&self, action: SwipeAction, reciprocal_like: bool) -> MatchOutcome {
        match action {
            SwipeAction::Pass => MatchOutcome { matched: false },
            SwipeAction::Like => MatchOutcome {
                matched: reciprocal_like,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_never_matches() {
        let engine = MatchEngine::new();

        // Even with a reciprocal like on record, a pass is not a match
        assert!(!engine.evaluate(SwipeAction::Pass, false).matched);
        assert!(!engine.evaluate(SwipeAction::Pass, true).matched);
    }

    #[test]
    fn test_like_without_reciprocal() {
        let engine = MatchEngine::new();
        assert!(!engine.evaluate(SwipeAction::Like, false).matched);
    }

    #[test]
    fn test_like_with_reciprocal_matches() {
        let engine = MatchEngine::new();
        assert!(engine.evaluate(SwipeAction::Like, true).matched);
    }

    #[test]
    fn test_pair_state_transitions() {
        assert_eq!(pair_state(false, false), PairState::NoSignal);
        assert_eq!(pair_state(true, false), PairState::OneSidedLike);
        assert_eq!(pair_state(false, true), PairState::OneSidedLike);
        assert_eq!(pair_state(true, true), PairState::Matched);
    }

    #[test]
    fn test_pass_after_like_keeps_one_sided_state() {
        // A recorded pass leaves the like signals untouched, so the pair
        // stays one-sided and a later like from the other side still matches.
        let engine = MatchEngine::new();

        let a_likes_b = true;
        assert_eq!(pair_state(a_likes_b, false), PairState::OneSidedLike);

        assert!(!engine.evaluate(SwipeAction::Pass, a_likes_b).matched);
        assert!(engine.evaluate(SwipeAction::Like, a_likes_b).matched);
    }
}
