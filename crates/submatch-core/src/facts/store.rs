//! The immutable-after-load fact store.

use std::collections::HashMap;

use crate::error::{MatchError, Result};
use crate::ids::{GroupId, PoolId};

use super::{
    CandidateMatch, CapacityPool, PenaltyGroup, PinnedPreference, Product, Subscription, System,
};

/// All facts of one matching request, validated and frozen.
///
/// Built once by [`FactSetBuilder`], read-only for the remainder of the run.
/// A `FactSet` may be shared read-only across concurrent matching requests;
/// the mutable solution state lives elsewhere.
///
/// Candidate matches are kept sorted and deduplicated: this is the cached
/// view the move generator partitions on every batch.
#[derive(Clone, Debug, Default)]
pub struct FactSet {
    candidates: Vec<CandidateMatch>,
    pools: Vec<CapacityPool>,
    pins: Vec<PinnedPreference>,
    subscriptions: Vec<Subscription>,
    systems: Vec<System>,
    products: Vec<Product>,
    penalty_groups: Vec<PenaltyGroup>,
    pool_cents: HashMap<PoolId, u64>,
}

impl FactSet {
    /// Starts building a fact set.
    pub fn builder() -> FactSetBuilder {
        FactSetBuilder::default()
    }

    /// The sorted, deduplicated candidate matches.
    pub fn candidates(&self) -> &[CandidateMatch] {
        &self.candidates
    }

    /// The capacity pools.
    pub fn pools(&self) -> &[CapacityPool] {
        &self.pools
    }

    /// The pinned preferences.
    pub fn pins(&self) -> &[PinnedPreference] {
        &self.pins
    }

    /// The subscriptions.
    pub fn subscriptions(&self) -> &[Subscription] {
        &self.subscriptions
    }

    /// The systems.
    pub fn systems(&self) -> &[System] {
        &self.systems
    }

    /// The products.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The penalty group memberships.
    pub fn penalty_groups(&self) -> &[PenaltyGroup] {
        &self.penalty_groups
    }

    /// Total cents of the given capacity pool, if it exists.
    pub fn pool_cents(&self, pool_id: PoolId) -> Option<u64> {
        self.pool_cents.get(&pool_id).copied()
    }

    /// The sorted, deduplicated ids of all match groups observed among the
    /// candidate matches.
    pub fn group_ids(&self) -> Vec<GroupId> {
        let mut ids: Vec<GroupId> = self.candidates.iter().map(|c| c.group_id).collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }
}

/// Accumulates facts and validates them into a [`FactSet`].
///
/// Validation fails fast with [`MatchError::DataIntegrity`] instead of
/// silently skipping malformed facts.
#[derive(Clone, Debug, Default)]
pub struct FactSetBuilder {
    candidates: Vec<CandidateMatch>,
    pools: Vec<CapacityPool>,
    pins: Vec<PinnedPreference>,
    subscriptions: Vec<Subscription>,
    systems: Vec<System>,
    products: Vec<Product>,
    penalty_groups: Vec<PenaltyGroup>,
}

impl FactSetBuilder {
    /// Adds a candidate match.
    pub fn candidate(mut self, candidate: CandidateMatch) -> Self {
        self.candidates.push(candidate);
        self
    }

    /// Adds a capacity pool.
    pub fn pool(mut self, pool: CapacityPool) -> Self {
        self.pools.push(pool);
        self
    }

    /// Adds a pinned preference.
    pub fn pin(mut self, pin: PinnedPreference) -> Self {
        self.pins.push(pin);
        self
    }

    /// Adds a subscription.
    pub fn subscription(mut self, subscription: Subscription) -> Self {
        self.subscriptions.push(subscription);
        self
    }

    /// Adds a system.
    pub fn system(mut self, system: System) -> Self {
        self.systems.push(system);
        self
    }

    /// Adds a product.
    pub fn product(mut self, product: Product) -> Self {
        self.products.push(product);
        self
    }

    /// Adds a penalty group membership.
    pub fn penalty_group(mut self, penalty_group: PenaltyGroup) -> Self {
        self.penalty_groups.push(penalty_group);
        self
    }

    /// Validates the accumulated facts and freezes them into a [`FactSet`].
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::DataIntegrity`] if two pools share an id or a
    /// candidate match references a pool that was never added.
    pub fn build(self) -> Result<FactSet> {
        let mut pool_cents = HashMap::with_capacity(self.pools.len());
        for pool in &self.pools {
            if pool_cents.insert(pool.id, pool.cents).is_some() {
                return Err(MatchError::DataIntegrity(format!(
                    "duplicate capacity pool {}",
                    pool.id
                )));
            }
        }

        for candidate in &self.candidates {
            if !pool_cents.contains_key(&candidate.pool_id) {
                return Err(MatchError::DataIntegrity(format!(
                    "candidate match for system {} product {} references nonexistent capacity pool {}",
                    candidate.system_id, candidate.product_id, candidate.pool_id
                )));
            }
        }

        let mut candidates = self.candidates;
        candidates.sort_unstable();
        candidates.dedup();

        Ok(FactSet {
            candidates,
            pools: self.pools,
            pins: self.pins,
            subscriptions: self.subscriptions,
            systems: self.systems,
            products: self.products,
            penalty_groups: self.penalty_groups,
            pool_cents,
        })
    }
}
