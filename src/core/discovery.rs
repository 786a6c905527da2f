use crate::models::User;
use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;

/// Ordering strategy applied to filtered candidates
///
/// Candidate ordering is kept behind this seam so a real ranking can be
/// introduced without touching the filter or its callers.
pub trait RankingStrategy: Send + Sync {
    fn rank(&self, candidates: Vec<User>) -> Vec<User>;
}

/// Default strategy: keep whatever order the store returned
#[derive(Debug, Clone, Copy, Default)]
pub struct StoreOrder;

impl RankingStrategy for StoreOrder {
    fn rank(&self, candidates: Vec<User>) -> Vec<User> {
        candidates
    }
}

/// Discovery filter - surfaces candidates the requester has not swiped on
///
/// The exclusion set is the requester's swiped target ids (any action)
/// plus the requester itself. The scan cap is applied by the store BEFORE
/// this filter runs, so fewer than all eligible candidates can come back
/// when more exist beyond the cap.
#[derive(Clone)]
pub struct DiscoveryFilter {
    strategy: Arc<dyn RankingStrategy>,
    scan_limit: i64,
}

impl DiscoveryFilter {
    pub fn new(strategy: Arc<dyn RankingStrategy>, scan_limit: i64) -> Self {
        Self { strategy, scan_limit }
    }

    /// Filter with the default store-order strategy
    pub fn with_store_order(scan_limit: i64) -> Self {
        Self::new(Arc::new(StoreOrder), scan_limit)
    }

    /// How many user rows the store should scan per request
    pub fn scan_limit(&self) -> i64 {
        self.scan_limit
    }

    /// Drop the requester and already-swiped targets, then rank the rest
    pub fn filter(&self, requester: Uuid, swiped: &[Uuid], scanned: Vec<User>) -> Vec<User> {
        let mut excluded: HashSet<Uuid> = swiped.iter().copied().collect();
        excluded.insert(requester);

        let candidates: Vec<User> = scanned
            .into_iter()
            .filter(|user| !excluded.contains(&user.id))
            .collect();

        self.strategy.rank(candidates)
    }
}
