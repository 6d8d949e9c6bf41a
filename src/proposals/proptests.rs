//! Property-based tests for the simulated vote feed.

use super::types::{Proposal, ProposalStatus, VoteChoice, Votes};
use super::updater::{apply_tick, MAX_TICK_INCREMENT};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn status_strategy() -> impl Strategy<Value = ProposalStatus> {
    prop_oneof![
        Just(ProposalStatus::Active),
        Just(ProposalStatus::Pending),
        Just(ProposalStatus::Completed),
        Just(ProposalStatus::Failed),
    ]
}

fn proposal_strategy() -> impl Strategy<Value = Proposal> {
    (
        status_strategy(),
        0u64..1_000_000,
        0u64..1_000_000,
        0u8..=100,
    )
        .prop_map(|(status, yes, no, ai_score)| Proposal {
            id: String::new(),
            title: "generated".to_string(),
            dao: "Test DAO".to_string(),
            status,
            votes: Votes::new(yes, no),
            time_left: "1 day".to_string(),
            description: String::new(),
            ai_score,
            category: "Protocol".to_string(),
            created_at: "2024-01-01".to_string(),
        })
}

fn collection_strategy() -> impl Strategy<Value = Vec<Proposal>> {
    prop::collection::vec(proposal_strategy(), 0..20).prop_map(|mut proposals| {
        for (i, proposal) in proposals.iter_mut().enumerate() {
            proposal.id = i.to_string();
        }
        proposals
    })
}

proptest! {
    /// Property: a tick never changes non-active tallies
    #[test]
    fn tick_leaves_non_active_untouched(
        proposals in collection_strategy(),
        seed in any::<u64>(),
    ) {
        let mut updated = proposals.clone();
        apply_tick(&mut updated, &mut StdRng::seed_from_u64(seed));

        for (old, new) in proposals.iter().zip(updated.iter()) {
            if old.status != ProposalStatus::Active {
                prop_assert_eq!(old.votes, new.votes);
            }
        }
    }

    /// Property: an active proposal gains 0..50 votes, all on one side
    #[test]
    fn tick_adds_bounded_increment_to_one_side(
        proposals in collection_strategy(),
        seed in any::<u64>(),
    ) {
        let mut updated = proposals.clone();
        let touched = apply_tick(&mut updated, &mut StdRng::seed_from_u64(seed));

        let active = proposals.iter().filter(|p| p.is_active()).count();
        prop_assert_eq!(touched, active);

        for (old, new) in proposals.iter().zip(updated.iter()) {
            prop_assert!(new.votes.yes >= old.votes.yes);
            prop_assert!(new.votes.no >= old.votes.no);

            let gained = new.votes.total() - old.votes.total();
            prop_assert!(gained < MAX_TICK_INCREMENT);

            let yes_moved = new.votes.yes != old.votes.yes;
            let no_moved = new.votes.no != old.votes.no;
            prop_assert!(!(yes_moved && no_moved), "increment split across both sides");
        }
    }

    /// Property: ticks never reorder or drop proposals
    #[test]
    fn tick_preserves_identity_and_order(
        proposals in collection_strategy(),
        seed in any::<u64>(),
    ) {
        let mut updated = proposals.clone();
        apply_tick(&mut updated, &mut StdRng::seed_from_u64(seed));

        prop_assert_eq!(proposals.len(), updated.len());
        for (old, new) in proposals.iter().zip(updated.iter()) {
            prop_assert_eq!(&old.id, &new.id);
            prop_assert_eq!(old.status, new.status);
            prop_assert_eq!(old.ai_score, new.ai_score);
        }
    }

    /// Property: adding a vote touches only the chosen side, by exactly the weight
    #[test]
    fn vote_adds_exact_weight(
        yes in 0u64..1_000_000,
        no in 0u64..1_000_000,
        weight in 0u64..1_000_000,
        choose_yes in any::<bool>(),
    ) {
        let mut votes = Votes::new(yes, no);
        let choice = if choose_yes { VoteChoice::Yes } else { VoteChoice::No };
        votes.add(choice, weight);

        match choice {
            VoteChoice::Yes => {
                prop_assert_eq!(votes.yes, yes + weight);
                prop_assert_eq!(votes.no, no);
            }
            VoteChoice::No => {
                prop_assert_eq!(votes.no, no + weight);
                prop_assert_eq!(votes.yes, yes);
            }
        }
    }
}
