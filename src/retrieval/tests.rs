use super::*;
use crate::document::{FILENAME_KEY, Fragment, Metadata};
use std::sync::Arc;

fn fragments(n: usize) -> Vec<Fragment> {
    (0..n)
        .map(|i| {
            Fragment::new(
                format!("content {i}"),
                Metadata::new().with(FILENAME_KEY, format!("doc{i}.pdf")),
            )
        })
        .collect()
}

#[tokio::test]
async fn test_mock_truncates_to_k_and_records_query() {
    let retriever = MockRetriever::new(fragments(5));

    let results = retriever.search("חוזה שכירות", 3).await.unwrap();

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].content, "content 0");
    assert_eq!(
        retriever.calls(),
        vec![RecordedSearch {
            query: "חוזה שכירות".to_string(),
            k: 3
        }]
    );
}

#[tokio::test]
async fn test_mock_empty_returns_no_fragments() {
    let retriever = MockRetriever::empty();
    let results = retriever.search("anything", 100).await.unwrap();
    assert!(results.is_empty());
    assert_eq!(retriever.call_count(), 1);
}

#[tokio::test]
async fn test_mock_failing_returns_search_error() {
    let retriever = MockRetriever::failing("index offline");
    let err = retriever.search("q", 10).await.unwrap_err();
    assert!(matches!(err, RetrievalError::SearchFailed { .. }));
    assert!(err.to_string().contains("index offline"));
}

#[tokio::test]
async fn test_arc_retriever_delegates() {
    let retriever = Arc::new(MockRetriever::new(fragments(2)));
    let results = retriever.search("q", 10).await.unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(retriever.last_query().as_deref(), Some("q"));
}
