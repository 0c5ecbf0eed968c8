//! End-to-end tests of the retrieval pipeline and answer service with mock backends.

mod common;

use std::sync::Arc;

use common::fixtures::{
    BROAD_QUESTION, FragmentBuilder, RABIN_QUESTION, interleaved_candidates, named,
    rabin_candidates,
};
use futures_util::StreamExt;
use tempfile::TempDir;
use verdict::constants::BROAD_ANCHOR_TERM;
use verdict::{
    LegalRagService, MockChatModel, MockRetriever, OperatingPoint, PipelineConfig,
    RetrievalPipeline, StreamEvent,
};

fn pipeline(
    candidates: Vec<verdict::Fragment>,
    config: PipelineConfig,
) -> RetrievalPipeline<MockRetriever> {
    RetrievalPipeline::new(MockRetriever::new(candidates), config).expect("valid config")
}

#[tokio::test]
async fn test_precise_point_keeps_only_adjacent_match() -> anyhow::Result<()> {
    let p = pipeline(rabin_candidates(), PipelineConfig::precise());

    let ctx = p.run(RABIN_QUESTION).await?;

    assert_eq!(ctx.num_sources(), 1);
    assert_eq!(ctx.citations[0].id, "[1]");
    assert_eq!(ctx.citations[0].filename, "a.pdf");
    assert!(ctx.context_text.contains("יצחק רבין"));
    assert!(ctx.context_text.ends_with("--- END [1] ---"));
    Ok(())
}

#[tokio::test]
async fn test_broad_question_rewrites_search_but_ranks_by_question() -> anyhow::Result<()> {
    let p = pipeline(rabin_candidates(), PipelineConfig::default());

    let fragments = p.retrieve(BROAD_QUESTION).await?;

    let calls = p.retriever().calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].query, BROAD_ANCHOR_TERM);
    assert_eq!(calls[0].k, 100);
    // Neither fragment matches the question's own terms, so both keep their rank scores
    // (1.0 and 0.5); only the first clears the broad ratio.
    assert_eq!(fragments.len(), 1);
    assert_eq!(fragments[0].metadata.filename(), Some("a.pdf"));
    Ok(())
}

#[tokio::test]
async fn test_output_bounded_by_distinct_documents_and_cap() -> anyhow::Result<()> {
    let config = PipelineConfig::default().with_operating_point(OperatingPoint::new(0.0, 30));
    let p = pipeline(interleaved_candidates(4, 40), config);

    let fragments = p.retrieve("קטע").await?;

    assert_eq!(fragments.len(), 4);
    let mut keys: Vec<&str> = fragments.iter().map(|f| f.document_key()).collect();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), 4);

    let capped = pipeline(
        interleaved_candidates(50, 50),
        PipelineConfig::default().with_operating_point(OperatingPoint::new(0.0, 3)),
    );
    assert_eq!(capped.retrieve("קטע").await?.len(), 3);
    Ok(())
}

#[tokio::test]
async fn test_citations_carry_links_dates_and_labels() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let stored = dir.path().join("2021_ruling.pdf");
    std::fs::write(&stored, b"%PDF")?;

    let fragments = vec![
        FragmentBuilder::new("רבין רבין")
            .filename("2021_ruling.pdf")
            .display_name("ע\"פ 1234/21")
            .source_path(stored.to_string_lossy())
            .mod_date("D:20210301")
            .build(),
        FragmentBuilder::new("רבין")
            .filename("missing.pdf")
            .source_path(dir.path().join("missing.pdf").to_string_lossy())
            .creation_date(serde_json::Value::Null)
            .build(),
    ];

    let config = PipelineConfig::default()
        .with_operating_point(OperatingPoint::new(0.0, 30))
        .with_serving_prefix("http://files.local/api/files/");
    let ctx = pipeline(fragments, config).run("רבין").await?;

    assert_eq!(ctx.num_sources(), 2);
    assert_eq!(
        ctx.citations[0].url,
        "http://files.local/api/files/2021_ruling.pdf"
    );
    assert_eq!(ctx.citations[1].url, "");
    assert!(ctx.context_text.starts_with(
        "--- DOCUMENT [1] ---\nSource: ע\"פ 1234/21\nDate: D:20210301\nContent:\nרבין רבין\n--- END [1] ---"
    ));
    assert!(
        ctx.context_text
            .contains("\n\n--- DOCUMENT [2] ---\nSource: missing.pdf\nCreated: Unknown\n")
    );
    Ok(())
}

#[tokio::test]
async fn test_empty_retrieval_has_no_sources() -> anyhow::Result<()> {
    let p = pipeline(Vec::new(), PipelineConfig::default());

    let ctx = p.run(RABIN_QUESTION).await?;

    assert!(ctx.is_empty());
    assert!(ctx.citations.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_service_shares_retriever_across_tasks() -> anyhow::Result<()> {
    let retriever = Arc::new(MockRetriever::new(rabin_candidates()));
    let pipeline = RetrievalPipeline::new(Arc::clone(&retriever), PipelineConfig::precise())?;
    let service = Arc::new(LegalRagService::new(
        pipeline,
        MockChatModel::new("הנאשם הורשע [1]"),
    ));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let service = Arc::clone(&service);
            tokio::spawn(async move { service.answer(RABIN_QUESTION).await })
        })
        .collect();

    for handle in handles {
        let answer = handle.await??;
        assert_eq!(answer.text, "הנאשם הורשע [1].");
        assert_eq!(answer.citations.len(), 1);
    }
    assert_eq!(retriever.call_count(), 4);
    Ok(())
}

#[tokio::test]
async fn test_stream_events_serialize_as_ndjson() -> anyhow::Result<()> {
    let p = pipeline(vec![named("a.pdf", "רבין")], PipelineConfig::default());
    let service = LegalRagService::new(p, MockChatModel::with_tokens(["כן", "."]));

    let mut lines = Vec::new();
    let mut events = service.stream_events("רבין").await?;
    while let Some(event) = events.next().await {
        lines.push(event?.to_ndjson_line()?);
    }

    assert_eq!(lines.len(), 3);
    let first: StreamEvent = serde_json::from_str(lines[0].trim_end())?;
    assert!(matches!(first, StreamEvent::Citations(ref c) if c.len() == 1));
    assert_eq!(lines[1], "{\"type\":\"token\",\"data\":\"כן\"}\n");
    Ok(())
}
