use std::collections::HashSet;

use proptest::prelude::*;
use verdict::document::FILENAME_KEY;
use verdict::{
    Fragment, Lexicon, LexicalScorer, Metadata, OperatingPoint, QueryTerms, dedup, filter,
};

const WORDS: &[&str] = &[
    "חוזה", "דירה", "שכירות", "פיצויים", "רבין", "יצחק", "ערעור", "הסכם", "נזיקין", "ירושה",
];

fn word() -> impl Strategy<Value = String> {
    prop::sample::select(WORDS).prop_map(str::to_string)
}

fn content() -> impl Strategy<Value = String> {
    prop::collection::vec(word(), 0..8).prop_map(|words| words.join(" "))
}

fn question() -> impl Strategy<Value = String> {
    prop::collection::vec(word(), 1..4).prop_map(|words| words.join(" "))
}

/// Candidates drawn from at most `docs` distinct documents.
fn candidates(docs: usize) -> impl Strategy<Value = Vec<Fragment>> {
    prop::collection::vec((0..docs, content()), 0..40).prop_map(|items| {
        items
            .into_iter()
            .map(|(doc, text)| {
                Fragment::new(text, Metadata::new().with(FILENAME_KEY, format!("{doc}.pdf")))
            })
            .collect()
    })
}

fn operating_point() -> impl Strategy<Value = OperatingPoint> {
    prop_oneof![
        Just(OperatingPoint::broad()),
        Just(OperatingPoint::precise()),
        (0.0f32..=1.0, 1usize..50).prop_map(|(ratio, cap)| OperatingPoint::new(ratio, cap)),
    ]
}

fn select(candidates: Vec<Fragment>, question: &str, point: OperatingPoint) -> Vec<Fragment> {
    let terms = QueryTerms::extract(question, &Lexicon::default());
    let ranked = LexicalScorer::default().rerank(dedup(candidates), &terms);
    point.apply(ranked)
}

proptest! {
    #[test]
    fn output_never_exceeds_distinct_documents(
        docs in 1usize..10,
        seed in candidates(10),
        q in question(),
        point in operating_point(),
    ) {
        let pool: Vec<Fragment> = seed
            .into_iter()
            .enumerate()
            .map(|(i, f)| {
                let metadata = Metadata::new().with(FILENAME_KEY, format!("{}.pdf", i % docs));
                Fragment::new(f.content, metadata)
            })
            .collect();

        let out = select(pool, &q, point);
        prop_assert!(out.len() <= docs);
    }

    #[test]
    fn output_never_exceeds_cap(pool in candidates(40), q in question(), point in operating_point()) {
        let out = select(pool, &q, point);
        prop_assert!(out.len() <= point.cap);
    }

    #[test]
    fn output_documents_are_distinct(pool in candidates(6), q in question(), point in operating_point()) {
        let out = select(pool, &q, point);
        let keys: HashSet<&str> = out.iter().map(|f| f.document_key()).collect();
        prop_assert_eq!(keys.len(), out.len());
    }

    #[test]
    fn nonempty_input_yields_nonempty_output(pool in candidates(8), q in question(), point in operating_point()) {
        let has_input = !pool.is_empty();
        let out = select(pool, &q, point);
        prop_assert_eq!(has_input, !out.is_empty());
    }

    #[test]
    fn rerank_is_sorted_and_complete(pool in candidates(12), q in question()) {
        let unique = dedup(pool);
        let n = unique.len();
        let terms = QueryTerms::extract(&q, &Lexicon::default());
        let ranked = LexicalScorer::default().rerank(unique, &terms);

        prop_assert_eq!(ranked.len(), n);
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn kept_entries_clear_the_threshold(pool in candidates(12), q in question(), point in operating_point()) {
        let terms = QueryTerms::extract(&q, &Lexicon::default());
        let ranked = LexicalScorer::default().rerank(dedup(pool), &terms);
        let Some(top) = ranked.first().map(|s| s.score) else {
            return Ok(());
        };
        let threshold = top * point.ratio;

        let passing = ranked.iter().filter(|s| s.score >= threshold).count();
        let kept = filter(ranked, point.ratio, point.cap);

        prop_assert_eq!(kept.len(), passing.min(point.cap));
    }

    #[test]
    fn dedup_is_idempotent_and_bounded(pool in candidates(5)) {
        let first_pass = dedup(pool.clone());
        let second_pass = dedup(first_pass.clone());
        prop_assert_eq!(first_pass, second_pass);
        prop_assert!(dedup(pool).len() <= 5);
    }
}
