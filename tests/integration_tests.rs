// Integration tests for Matri API
//
// These exercise the swipe/match rules end to end through the public crate
// API, with an in-memory stand-in for the persisted ledger and match set.

use std::collections::HashSet;

use chrono::Utc;
use matri_api::core::{DiscoveryFilter, MatchEngine};
use matri_api::models::{MatchKey, SwipeAction, User};
use uuid::Uuid;

/// In-memory stand-in for the swipe ledger and match set
///
/// Mirrors the handler orchestration: append the swipe, look up the
/// reciprocal like, evaluate, then insert-if-absent into the match set
/// keyed on the canonical pair.
struct TestStore {
    engine: MatchEngine,
    swipes: Vec<(Uuid, Uuid, SwipeAction)>,
    matches: HashSet<MatchKey>,
}

impl TestStore {
    fn new() -> Self {
        Self {
            engine: MatchEngine::new(),
            swipes: Vec::new(),
            matches: HashSet::new(),
        }
    }

    fn has_reciprocal_like(&self, user_id: Uuid, target_id: Uuid) -> bool {
        self.swipes
            .iter()
            .any(|&(u, t, a)| u == user_id && t == target_id && a == SwipeAction::Like)
    }

    fn swipe(&mut self, actor: Uuid, target: Uuid, action: SwipeAction) -> bool {
        // Append-only: no dedup against prior rows for the same pair
        self.swipes.push((actor, target, action));

        let reciprocal = match action {
            SwipeAction::Like => self.has_reciprocal_like(target, actor),
            SwipeAction::Pass => false,
        };

        let outcome = self.engine.evaluate(action, reciprocal);
        if outcome.matched {
            // HashSet insert is the insert-if-absent on the canonical key
            self.matches.insert(MatchKey::new(actor, target));
        }

        outcome.matched
    }

    fn swiped_targets(&self, actor: Uuid) -> Vec<Uuid> {
        self.swipes
            .iter()
            .filter(|&&(u, _, _)| u == actor)
            .map(|&(_, t, _)| t)
            .collect()
    }
}

fn create_user(id: Uuid, name: &str) -> User {
    User {
        id,
        email: format!("{}@example.com", name.to_lowercase()),
        password_hash: "$argon2id$stub".to_string(),
        name: name.to_string(),
        gender: None,
        date_of_birth: None,
        location: None,
        bio: None,
        interests: vec![],
        photos: vec![],
        is_active: true,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[test]
fn test_one_sided_like_is_not_a_match() {
    let mut store = TestStore::new();
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();

    let matched = store.swipe(a, b, SwipeAction::Like);

    assert!(!matched);
    assert!(store.matches.is_empty());
}

#[test]
fn test_reciprocal_like_creates_exactly_one_match() {
    let mut store = TestStore::new();
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();

    assert!(!store.swipe(a, b, SwipeAction::Like));
    assert!(store.swipe(b, a, SwipeAction::Like));

    assert_eq!(store.matches.len(), 1);
    // Both orderings resolve to the same stored pair
    assert!(store.matches.contains(&MatchKey::new(a, b)));
    assert!(store.matches.contains(&MatchKey::new(b, a)));
}

#[test]
fn test_repeated_likes_do_not_duplicate_the_match() {
    let mut store = TestStore::new();
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();

    store.swipe(a, b, SwipeAction::Like);
    store.swipe(b, a, SwipeAction::Like);

    // Re-swiping appends more ledger rows but still reports matched
    assert!(store.swipe(a, b, SwipeAction::Like));
    assert!(store.swipe(a, b, SwipeAction::Like));

    assert_eq!(store.swipes.len(), 4);
    assert_eq!(store.matches.len(), 1);
}

#[test]
fn test_pass_never_creates_a_match() {
    let mut store = TestStore::new();
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();

    store.swipe(b, a, SwipeAction::Like);
    let matched = store.swipe(a, b, SwipeAction::Pass);

    assert!(!matched);
    assert!(store.matches.is_empty());
}

#[test]
fn test_like_after_pass_still_matches() {
    let mut store = TestStore::new();
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();

    // A passes on B first, then changes their mind
    store.swipe(a, b, SwipeAction::Pass);
    store.swipe(b, a, SwipeAction::Like);
    let matched = store.swipe(a, b, SwipeAction::Like);

    assert!(matched);
    assert_eq!(store.matches.len(), 1);
}

#[test]
fn test_discovery_never_returns_self_or_swiped_targets() {
    let mut store = TestStore::new();
    let filter = DiscoveryFilter::with_store_order(50);

    let me = Uuid::new_v4();
    let others: Vec<Uuid> = (0..10).map(|_| Uuid::new_v4()).collect();

    // Swipe on the first four candidates with mixed actions
    store.swipe(me, others[0], SwipeAction::Like);
    store.swipe(me, others[1], SwipeAction::Pass);
    store.swipe(me, others[2], SwipeAction::Like);
    store.swipe(me, others[3], SwipeAction::Pass);

    let mut scanned = vec![create_user(me, "Me")];
    scanned.extend(
        others
            .iter()
            .enumerate()
            .map(|(i, id)| create_user(*id, &format!("User{}", i))),
    );

    let swiped = store.swiped_targets(me);
    let candidates = filter.filter(me, &swiped, scanned);

    assert_eq!(candidates.len(), 6);
    for candidate in &candidates {
        assert_ne!(candidate.id, me);
        assert!(!swiped.contains(&candidate.id));
    }
}

#[test]
fn test_matches_are_symmetric_across_many_pairs() {
    let mut store = TestStore::new();
    let users: Vec<Uuid> = (0..6).map(|_| Uuid::new_v4()).collect();

    // Everyone likes user 0; user 0 likes users 1..=3 back
    for user in &users[1..] {
        store.swipe(*user, users[0], SwipeAction::Like);
    }
    for user in &users[1..4] {
        assert!(store.swipe(users[0], *user, SwipeAction::Like));
    }

    assert_eq!(store.matches.len(), 3);
    for user in &users[1..4] {
        assert!(store.matches.contains(&MatchKey::new(users[0], *user)));
    }
    for user in &users[4..] {
        assert!(!store.matches.contains(&MatchKey::new(users[0], *user)));
    }
}
