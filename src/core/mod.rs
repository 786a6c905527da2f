// Core algorithm exports
pub mod discovery;
pub mod engine;

pub use discovery::{DiscoveryFilter, RankingStrategy, StoreOrder};
pub use engine::{pair_state, MatchEngine, MatchOutcome, PairState};
