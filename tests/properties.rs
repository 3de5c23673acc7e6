use medqa_assistant::{
    advice::{drugs::find_drug, safety, UserProfile, DRUGS},
    config::RetrievalPolicy,
    data::{corpus::dedup, QnaEntry},
    retrieval::{rank, similarity::score, Retrieval},
};
use proptest::prelude::*;

const CODES: &[&str] = &[
    "severe_liver_disease",
    "liver_disease",
    "severe_kidney_disease",
    "active_ulcer",
    "gastritis",
    "asthma",
    "alcohol_use",
    "penicillin",
];

fn text_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ?,.']{0,40}"
}

fn codes_strategy() -> impl Strategy<Value = Vec<String>> {
    proptest::sample::subsequence(CODES, 0..=CODES.len())
        .prop_map(|codes| codes.into_iter().map(String::from).collect())
}

fn profile_strategy() -> impl Strategy<Value = UserProfile> {
    (codes_strategy(), codes_strategy(), codes_strategy()).prop_map(|(c, a, m)| UserProfile {
        conditions: c.into_iter().collect(),
        allergies: a.into_iter().collect(),
        current_meds: m.into_iter().collect(),
        ..UserProfile::default()
    })
}

fn entries_strategy() -> impl Strategy<Value = Vec<QnaEntry>> {
    proptest::collection::vec(
        ("[a-c ?]{0,6}", "[a-z]{1,5}").prop_map(|(q, a)| QnaEntry::new(q, a, "prop")),
        0..12,
    )
}

proptest! {
    #[test]
    fn self_similarity_is_one(text in "[a-z0-9 ?!]{0,30}[a-z0-9][a-z0-9 ?!]{0,30}") {
        prop_assert_eq!(score(&text, &text), 1.0);
    }

    #[test]
    fn scores_stay_in_unit_interval(a in text_strategy(), b in text_strategy()) {
        let s = score(&a, &b);
        prop_assert!((0.0..=1.0).contains(&s));
    }

    #[test]
    fn empty_corpus_never_matches(query in text_strategy(), min_score in 0.0f64..1.0) {
        let policy = RetrievalPolicy { min_score, ..RetrievalPolicy::default() };
        prop_assert_eq!(rank(&query, &[], &policy), Retrieval::NoMatch);
    }

    #[test]
    fn dedup_is_idempotent(entries in entries_strategy()) {
        let once = dedup(entries);
        let doubled: Vec<_> = once.iter().cloned().chain(once.iter().cloned()).collect();
        prop_assert_eq!(dedup(doubled), once.clone());
        prop_assert_eq!(dedup(once.clone()), once);
    }

    #[test]
    fn safety_flags_are_monotonic(base in profile_strategy(), extra in profile_strategy()) {
        let mut grown = base.clone();
        grown.conditions.extend(extra.conditions);
        grown.allergies.extend(extra.allergies);
        grown.current_meds.extend(extra.current_meds);
        for drug in DRUGS {
            let before = safety::check(&base, drug);
            let after = safety::check(&grown, drug);
            for flag in before {
                prop_assert!(after.contains(&flag));
            }
        }
    }

    #[test]
    fn drug_lookup_is_deterministic(text in text_strategy()) {
        let first = find_drug(&text).map(|d| d.key);
        prop_assert_eq!(find_drug(&text).map(|d| d.key), first);
    }
}
