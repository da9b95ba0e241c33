//! # Wish State
//!
//! The single source of truth for "is this product picked, and what does
//! its like count display as" across every surface showing the product.
//!
//! Beyond the liked set itself, the state tracks which product ids it
//! already holds an authoritative answer for (`known`). Paginated list
//! responses re-deliver products the user may have toggled moments ago;
//! the known set keeps those late, possibly stale server values from
//! silently clobbering an optimistic toggle that has not settled yet.

use repick_core::{ProductId, Watchable, Watcher};
use std::collections::{HashMap, HashSet};

/// Wish/pick state for the current session.
///
/// All operations are synchronous in-memory mutations and cannot fail.
#[derive(Debug, Clone, Default)]
pub struct WishState {
    /// Products the current user has liked, as known to the client.
    liked: HashSet<ProductId>,
    /// Products for which the client holds an authoritative liked value;
    /// hydration is a no-op for these.
    known: HashSet<ProductId>,
    /// Like-count baselines, seeded lazily the first time a surface
    /// supplies one.
    counts: HashMap<ProductId, u32>,
}

impl WishState {
    /// Whether the product is currently liked.
    #[must_use]
    pub fn is_liked(&self, id: ProductId) -> bool {
        self.liked.contains(&id)
    }

    /// Displayable like count, once a baseline has been seeded.
    #[must_use]
    pub fn like_count(&self, id: ProductId) -> Option<u32> {
        self.counts.get(&id).copied()
    }

    /// Number of liked products.
    #[must_use]
    pub fn liked_len(&self) -> usize {
        self.liked.len()
    }

    /// Mark a product liked. Idempotent.
    pub fn add_like(&mut self, id: ProductId) {
        self.liked.insert(id);
        self.known.insert(id);
    }

    /// Unmark a product. Idempotent.
    pub fn remove_like(&mut self, id: ProductId) {
        self.liked.remove(&id);
        self.known.insert(id);
    }

    /// Replace the liked set with exactly `ids` and mark them all known.
    ///
    /// Used after a full list reload; unlike [`WishState::hydrate`] this
    /// is an overwrite, not a seed.
    pub fn initialize(&mut self, ids: impl IntoIterator<Item = ProductId>) {
        self.liked = ids.into_iter().collect();
        self.known.extend(self.liked.iter().copied());
    }

    /// Seed liked-state and count baseline from a server response.
    ///
    /// No-op for products already known: only the first hydration (or an
    /// explicit toggle) may change them, so an in-flight optimistic
    /// toggle survives a paginated re-render.
    pub fn hydrate(&mut self, id: ProductId, server_is_liked: bool, server_like_count: Option<u32>) {
        if self.known.contains(&id) {
            return;
        }
        self.known.insert(id);
        if server_is_liked {
            self.liked.insert(id);
        }
        if let Some(count) = server_like_count {
            self.counts.entry(id).or_insert(count);
        }
    }

    /// Adjust a seeded count baseline, floored at 0.
    ///
    /// Products with no baseline stay without one: inventing a count from
    /// a delta would block a later hydration from seeding the real value.
    pub fn adjust_count(&mut self, id: ProductId, delta: i32) {
        if let Some(count) = self.counts.get_mut(&id) {
            *count = if delta.is_negative() {
                count.saturating_sub(delta.unsigned_abs())
            } else {
                count.saturating_add(delta.unsigned_abs())
            };
        }
    }
}

/// Shared handle over [`WishState`].
///
/// Clones observe and mutate the same state; every mutation publishes a
/// new version to watchers. The store outlives any one surface, so a
/// toggle resolution that lands after its view unmounted still has a
/// home.
#[derive(Debug, Clone, Default)]
pub struct WishStore {
    inner: Watchable<WishState>,
}

impl WishStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the product is currently liked.
    #[must_use]
    pub fn is_liked(&self, id: ProductId) -> bool {
        self.inner.read(|state| state.is_liked(id))
    }

    /// Displayable like count, once a baseline has been seeded.
    #[must_use]
    pub fn like_count(&self, id: ProductId) -> Option<u32> {
        self.inner.read(|state| state.like_count(id))
    }

    /// Mark a product liked.
    pub fn add_like(&self, id: ProductId) {
        self.inner.update(|state| state.add_like(id));
    }

    /// Unmark a product.
    pub fn remove_like(&self, id: ProductId) {
        self.inner.update(|state| state.remove_like(id));
    }

    /// Replace the liked set wholesale.
    pub fn initialize(&self, ids: impl IntoIterator<Item = ProductId>) {
        self.inner.update(|state| state.initialize(ids));
    }

    /// Seed from a server response, subject to the known-guard.
    pub fn hydrate(&self, id: ProductId, server_is_liked: bool, server_like_count: Option<u32>) {
        self.inner
            .update(|state| state.hydrate(id, server_is_liked, server_like_count));
    }

    /// Adjust a seeded count baseline, floored at 0.
    pub fn adjust_count(&self, id: ProductId, delta: i32) {
        self.inner.update(|state| state.adjust_count(id, delta));
    }

    /// Snapshot of the full state.
    #[must_use]
    pub fn snapshot(&self) -> WishState {
        self.inner.get()
    }

    /// Subscribe to state changes.
    #[must_use]
    pub fn watch(&self) -> Watcher<WishState> {
        self.inner.watch()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P1: ProductId = ProductId(1);
    const P2: ProductId = ProductId(2);
    const P5: ProductId = ProductId(5);

    #[test]
    fn test_add_like_idempotent() {
        let mut state = WishState::default();
        state.add_like(P1);
        state.add_like(P1);
        assert!(state.is_liked(P1));
        assert_eq!(state.liked_len(), 1);
    }

    #[test]
    fn test_remove_like_idempotent() {
        let mut state = WishState::default();
        state.add_like(P1);
        state.remove_like(P1);
        state.remove_like(P1);
        assert!(!state.is_liked(P1));
        assert_eq!(state.liked_len(), 0);
    }

    #[test]
    fn test_first_hydration_seeds_state_and_count() {
        let mut state = WishState::default();
        state.hydrate(P1, true, Some(10));
        assert!(state.is_liked(P1));
        assert_eq!(state.like_count(P1), Some(10));
    }

    #[test]
    fn test_second_hydration_is_a_no_op() {
        let mut state = WishState::default();
        state.hydrate(P1, true, Some(10));
        state.hydrate(P1, false, Some(3));
        assert!(state.is_liked(P1));
        assert_eq!(state.like_count(P1), Some(10));
    }

    #[test]
    fn test_toggle_marks_known_so_hydration_cannot_clobber() {
        let mut state = WishState::default();
        state.add_like(P1);
        // A later page re-delivers the product with its stale pre-toggle value.
        state.hydrate(P1, false, Some(10));
        assert!(state.is_liked(P1));
        // The count seed is also guarded.
        assert_eq!(state.like_count(P1), None);
    }

    #[test]
    fn test_initialize_overwrites_prior_likes() {
        let mut state = WishState::default();
        state.add_like(P1);
        state.initialize([P2, P5]);
        assert!(!state.is_liked(P1));
        assert!(state.is_liked(P2));
        assert!(state.is_liked(P5));
    }

    #[test]
    fn test_initialize_marks_new_set_known() {
        let mut state = WishState::default();
        state.initialize([P2]);
        state.hydrate(P2, false, None);
        assert!(state.is_liked(P2));
    }

    #[test]
    fn test_adjust_count_floors_at_zero() {
        let mut state = WishState::default();
        state.hydrate(P1, false, Some(1));
        state.adjust_count(P1, -1);
        state.adjust_count(P1, -1);
        state.adjust_count(P1, -1);
        assert_eq!(state.like_count(P1), Some(0));
    }

    #[test]
    fn test_adjust_count_without_baseline_stays_unseeded() {
        let mut state = WishState::default();
        state.adjust_count(P1, 1);
        assert_eq!(state.like_count(P1), None);
    }

    #[test]
    fn test_adjust_accumulates_on_seeded_baseline() {
        let mut state = WishState::default();
        state.hydrate(P1, false, Some(10));
        state.adjust_count(P1, 2);
        state.adjust_count(P1, -1);
        assert_eq!(state.like_count(P1), Some(11));
    }

    #[test]
    fn test_store_clones_share_state() {
        let store = WishStore::new();
        let other = store.clone();
        store.add_like(P1);
        assert!(other.is_liked(P1));
    }

    #[test]
    fn test_store_publishes_on_mutation() {
        let store = WishStore::new();
        let mut watcher = store.watch();
        store.add_like(P1);
        let state = watcher.poll().expect("mutation publishes");
        assert!(state.is_liked(P1));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Add(i64),
            Remove(i64),
            Hydrate(i64, bool, Option<u32>),
            Adjust(i64, i32),
            Initialize(Vec<i64>),
        }

        fn op_strategy() -> impl Strategy<Value = Op> {
            prop_oneof![
                (0i64..8).prop_map(Op::Add),
                (0i64..8).prop_map(Op::Remove),
                ((0i64..8), any::<bool>(), proptest::option::of(0u32..100))
                    .prop_map(|(id, liked, count)| Op::Hydrate(id, liked, count)),
                ((0i64..8), -3i32..3).prop_map(|(id, delta)| Op::Adjust(id, delta)),
                proptest::collection::vec(0i64..8, 0..4).prop_map(Op::Initialize),
            ]
        }

        proptest! {
            #[test]
            fn every_liked_product_is_known(ops in proptest::collection::vec(op_strategy(), 0..64)) {
                let mut state = WishState::default();
                for op in ops {
                    match op {
                        Op::Add(id) => state.add_like(ProductId(id)),
                        Op::Remove(id) => state.remove_like(ProductId(id)),
                        Op::Hydrate(id, liked, count) => state.hydrate(ProductId(id), liked, count),
                        Op::Adjust(id, delta) => state.adjust_count(ProductId(id), delta),
                        Op::Initialize(ids) => state.initialize(ids.into_iter().map(ProductId)),
                    }
                }
                // A liked product must always count as known, or a later
                // hydration could clobber it. Saturating adjustment also
                // means no op sequence can have panicked above.
                prop_assert!(state.liked.iter().all(|id| state.known.contains(id)));
            }

            #[test]
            fn hydration_after_any_touch_is_inert(
                id in 0i64..8,
                first_liked in any::<bool>(),
                second_liked in any::<bool>(),
                count in proptest::option::of(0u32..100),
            ) {
                let mut state = WishState::default();
                state.hydrate(ProductId(id), first_liked, count);
                let liked_before = state.is_liked(ProductId(id));
                let count_before = state.like_count(ProductId(id));

                state.hydrate(ProductId(id), second_liked, Some(999));

                prop_assert_eq!(state.is_liked(ProductId(id)), liked_before);
                prop_assert_eq!(state.like_count(ProductId(id)), count_before);
            }
        }
    }
}
