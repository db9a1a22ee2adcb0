//! Unit tests for lem-plan.

#[cfg(test)]
mod helpers {
    use lem_core::RoomId;
    use lem_farm::Route;

    /// Route over raw room indices; 0 is the source and 1 the sink by
    /// convention in these tests.
    pub fn r(ids: &[u32]) -> Route {
        Route::new(ids.iter().map(|&i| RoomId(i)).collect())
    }
}

// ── Distribution and estimate ─────────────────────────────────────────────────

#[cfg(test)]
mod estimate {
    use crate::{distribute, estimate_turns};

    #[test]
    fn even_split() {
        assert_eq!(distribute(6, 3), vec![2, 2, 2]);
    }

    #[test]
    fn remainder_goes_to_first_routes() {
        assert_eq!(distribute(7, 3), vec![3, 2, 2]);
        assert_eq!(distribute(2, 3), vec![1, 1, 0]);
    }

    #[test]
    fn distribution_sums_to_token_count() {
        for n in 0..40u32 {
            for r in 1..7usize {
                let alloc = distribute(n, r);
                assert_eq!(alloc.len(), r);
                assert_eq!(alloc.iter().sum::<u32>(), n, "n={n} r={r}");
                assert!(alloc.windows(2).all(|w| w[0] >= w[1]));
            }
        }
    }

    #[test]
    fn no_routes() {
        assert!(distribute(5, 0).is_empty());
        assert_eq!(estimate_turns(&[], 5), None);
    }

    #[test]
    fn single_route() {
        // First token needs `len` turns, each follower one more.
        assert_eq!(estimate_turns(&[1], 1), Some(1));
        assert_eq!(estimate_turns(&[1], 4), Some(4));
        assert_eq!(estimate_turns(&[3], 5), Some(7));
    }

    #[test]
    fn shorter_routes_get_the_extra_tokens() {
        // Sorted: [2, 5]; 3 tokens → [2, 1]; finish = max(2+1, 5+0) = 5.
        assert_eq!(estimate_turns(&[5, 2], 3), Some(5));
        // 4 tokens → [2, 2]; finish = max(3, 6) = 6.
        assert_eq!(estimate_turns(&[5, 2], 4), Some(6));
    }

    #[test]
    fn idle_routes_are_ignored() {
        // 1 token over [2, 9]: only the short route is used.
        assert_eq!(estimate_turns(&[9, 2], 1), Some(2));
    }
}

// ── RouteSet ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod route_set {
    use crate::{PlanError, RouteSet};
    use super::helpers::r;

    #[test]
    fn sorted_by_length_stable() {
        let set = RouteSet::new(vec![r(&[0, 2, 3, 1]), r(&[0, 4, 1]), r(&[0, 5, 6, 1]), r(&[0, 7, 1])])
            .unwrap();
        assert_eq!(set.lengths(), vec![2, 2, 3, 3]);
        assert_eq!(set.routes()[0], r(&[0, 4, 1]));
        assert_eq!(set.routes()[1], r(&[0, 7, 1]));
        assert_eq!(set.routes()[2], r(&[0, 2, 3, 1]));
        assert_eq!(set.routes()[3], r(&[0, 5, 6, 1]));
    }

    #[test]
    fn empty_rejected() {
        assert_eq!(RouteSet::new(vec![]).unwrap_err(), PlanError::EmptyRouteSet);
    }

    #[test]
    fn shared_interior_rejected() {
        let err = RouteSet::new(vec![r(&[0, 2, 1]), r(&[0, 3, 1]), r(&[0, 3, 4, 1])]).unwrap_err();
        assert_eq!(err, PlanError::NotInteriorDisjoint { first: 1, second: 2 });
    }

    #[test]
    fn allocation_and_estimate() {
        let set = RouteSet::new(vec![r(&[0, 2, 1]), r(&[0, 3, 1])]).unwrap();
        assert_eq!(set.allocation(5), vec![3, 2]);
        assert_eq!(set.estimate(5), 4);
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
        assert_eq!((&set).into_iter().count(), 2);
    }
}

// ── ExhaustiveSelector ────────────────────────────────────────────────────────

#[cfg(test)]
mod selector {
    use crate::{ExhaustiveSelector, PlanError, RouteSelector};
    use super::helpers::r;

    #[test]
    fn empty_input_is_no_path() {
        assert_eq!(ExhaustiveSelector.select(&[], 3).unwrap_err(), PlanError::NoPathFound);
    }

    #[test]
    fn zero_tokens_rejected() {
        assert_eq!(ExhaustiveSelector.select(&[r(&[0, 1])], 0).unwrap_err(), PlanError::NoTokens);
    }

    #[test]
    fn two_parallel_routes_used_for_two_tokens() {
        let routes = [r(&[0, 2, 1]), r(&[0, 3, 1])];
        let plan = ExhaustiveSelector.select(&routes, 2).unwrap();
        assert_eq!(plan.routes.len(), 2);
        assert_eq!(plan.allocation, vec![1, 1]);
        assert_eq!(plan.estimated_turns, 2);
        // Candidates: {0}, {0,1}, {1}.
        assert_eq!(plan.candidates_scored, 3);
    }

    #[test]
    fn ties_keep_first_subset_found() {
        // One token: {0} scores 2, {0,1} scores 2, {1} scores 2 → {0} wins.
        let routes = [r(&[0, 2, 1]), r(&[0, 3, 1])];
        let plan = ExhaustiveSelector.select(&routes, 1).unwrap();
        assert_eq!(plan.routes.routes(), &[r(&[0, 2, 1])]);
        assert_eq!(plan.allocation, vec![1]);
    }

    #[test]
    fn conflicting_routes_never_combined() {
        // Routes 0 and 1 share room 2; route 2 is disjoint from both.
        let routes = [r(&[0, 2, 1]), r(&[0, 3, 2, 1]), r(&[0, 4, 5, 1])];
        let plan = ExhaustiveSelector.select(&routes, 10).unwrap();
        assert_eq!(plan.routes.routes(), &[r(&[0, 2, 1]), r(&[0, 4, 5, 1])]);
        // Candidates: {0} {0,2} {1} {1,2} {2}.
        assert_eq!(plan.candidates_scored, 5);
    }

    #[test]
    fn long_detour_not_worth_it_for_few_tokens() {
        let routes = [r(&[0, 2, 1]), r(&[0, 3, 4, 5, 6, 7, 8, 1])];
        let few = ExhaustiveSelector.select(&routes, 3).unwrap();
        assert_eq!(few.routes.len(), 1);
        assert_eq!(few.estimated_turns, 4);

        let many = ExhaustiveSelector.select(&routes, 20).unwrap();
        assert_eq!(many.routes.len(), 2);
        // Round-robin splits 10/10: max(2 + 9, 7 + 9) = 16 < 21.
        assert_eq!(many.estimated_turns, 16);
    }

    #[test]
    fn allocation_sums_to_token_count() {
        let routes = [
            r(&[0, 2, 1]),
            r(&[0, 3, 9, 1]),
            r(&[0, 4, 5, 1]),
            r(&[0, 1]),
            r(&[0, 6, 7, 8, 1]),
        ];
        for tokens in 1..30 {
            let plan = ExhaustiveSelector.select(&routes, tokens).unwrap();
            assert_eq!(plan.allocation.iter().sum::<u32>(), tokens);
            assert_eq!(plan.allocation.len(), plan.routes.len());
            assert_eq!(plan.estimated_turns, plan.routes.estimate(tokens));
        }
    }

    #[test]
    fn selection_is_deterministic() {
        let routes = [r(&[0, 2, 1]), r(&[0, 3, 4, 1]), r(&[0, 2, 4, 1]), r(&[0, 5, 1])];
        let a = ExhaustiveSelector.select(&routes, 7).unwrap();
        let b = ExhaustiveSelector.select(&routes, 7).unwrap();
        assert_eq!(a, b);
    }
}
