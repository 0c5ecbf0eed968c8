use tracing::{debug, info};

use super::config::PipelineConfig;
use super::error::PipelineError;
use crate::citation::{AssembledContext, CitationAssembler};
use crate::document::Fragment;
use crate::query::{QueryClassifier, QueryTerms, SearchQuery};
use crate::ranking::{LexicalScorer, OperatingPoint, ScoredFragment, dedup};
use crate::retrieval::FragmentRetriever;

/// Retrieval-reranking pipeline over a [`FragmentRetriever`].
///
/// Apart from the retriever call and the citation file check, every stage is a pure function
/// of the question, the candidates and the configuration. Safe to share across tasks.
pub struct RetrievalPipeline<R> {
    retriever: R,
    config: PipelineConfig,
    scorer: LexicalScorer,
    assembler: CitationAssembler,
}

impl<R> std::fmt::Debug for RetrievalPipeline<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RetrievalPipeline")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<R: FragmentRetriever> RetrievalPipeline<R> {
    pub fn new(retriever: R, config: PipelineConfig) -> Result<Self, PipelineError> {
        config.validate()?;

        let scorer = LexicalScorer::new(config.weights.clone());
        let assembler = CitationAssembler::new(config.serving_prefix.clone());

        Ok(Self {
            retriever,
            config,
            scorer,
            assembler,
        })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn retriever(&self) -> &R {
        &self.retriever
    }

    pub fn assembler(&self) -> &CitationAssembler {
        &self.assembler
    }

    pub fn classify(&self, question: &str) -> SearchQuery {
        QueryClassifier::new(&self.config.lexicon).classify(question)
    }

    /// Dedups and reranks `candidates` against the question's terms.
    pub fn rank(&self, candidates: Vec<Fragment>, question: &str) -> Vec<ScoredFragment> {
        let unique = dedup(candidates);
        if unique.is_empty() {
            return Vec::new();
        }

        let terms = QueryTerms::extract(question, &self.config.lexicon);
        self.scorer.rerank(unique, &terms)
    }

    /// [`rank`](Self::rank) followed by the adaptive filter at `point`.
    pub fn select(
        &self,
        candidates: Vec<Fragment>,
        question: &str,
        point: OperatingPoint,
    ) -> Vec<Fragment> {
        point.apply(self.rank(candidates, question))
    }

    /// Retrieves and selects fragments at the configured operating point.
    pub async fn retrieve(&self, question: &str) -> Result<Vec<Fragment>, PipelineError> {
        self.retrieve_at(question, self.config.operating_point).await
    }

    /// Retrieves and selects fragments at a caller-chosen operating point.
    pub async fn retrieve_at(
        &self,
        question: &str,
        point: OperatingPoint,
    ) -> Result<Vec<Fragment>, PipelineError> {
        let query = self.classify(question);

        let candidates = self
            .retriever
            .search(&query.text, self.config.top_k)
            .await?;

        debug!(
            broad = query.is_broad(),
            num_candidates = candidates.len(),
            top_k = self.config.top_k,
            "Retrieved candidates"
        );

        // Terms always come from the user's question, even when the search used the anchor.
        let selected = self.select(candidates, question, point);

        info!(
            broad = query.is_broad(),
            selected = selected.len(),
            ratio = point.ratio,
            cap = point.cap,
            "Pipeline selected fragments"
        );

        Ok(selected)
    }

    /// Full pipeline: retrieve, select and assemble the context and citations.
    ///
    /// Assembly checks source files on disk, so it runs on the blocking pool.
    pub async fn run(&self, question: &str) -> Result<AssembledContext, PipelineError> {
        let fragments = self.retrieve(question).await?;
        let assembler = self.assembler.clone();

        let context = tokio::task::spawn_blocking(move || assembler.assemble(&fragments)).await?;
        Ok(context)
    }
}
