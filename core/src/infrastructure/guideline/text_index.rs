use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
    sync::Arc,
};

use tokio::sync::OnceCell;

use crate::domain::{
    common::entities::app_errors::CoreError,
    guideline::{entities::GuidelineExcerpt, ports::GuidelineRetriever},
};

const MIN_TERM_LEN: usize = 3;

/// Lower-cased alphanumeric words of at least three characters.
pub fn terms(text: &str) -> BTreeSet<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| word.chars().count() >= MIN_TERM_LEN)
        .map(str::to_lowercase)
        .collect()
}

#[derive(Debug, Clone)]
struct Chunk {
    text: String,
    terms: BTreeSet<String>,
}

/// In-memory keyword index over a plain-text document.
#[derive(Debug, Clone, Default)]
pub struct GuidelineIndex {
    chunks: Vec<Chunk>,
}

impl GuidelineIndex {
    /// Packs blank-line separated paragraphs into chunks of at most
    /// `chunk_size` characters. Longer paragraphs are cut.
    pub fn from_text(text: &str, chunk_size: usize) -> Self {
        let chunk_size = chunk_size.max(1);
        let mut chunks: Vec<String> = Vec::new();
        let mut current = String::new();

        for paragraph in text.split("\n\n").map(str::trim).filter(|p| !p.is_empty()) {
            for piece in split_chars(paragraph, chunk_size) {
                let joined_len = if current.is_empty() {
                    piece.chars().count()
                } else {
                    current.chars().count() + 2 + piece.chars().count()
                };

                if joined_len > chunk_size && !current.is_empty() {
                    chunks.push(std::mem::take(&mut current));
                }
                if !current.is_empty() {
                    current.push_str("\n\n");
                }
                current.push_str(&piece);
            }
        }
        if !current.is_empty() {
            chunks.push(current);
        }

        Self {
            chunks: chunks
                .into_iter()
                .map(|text| Chunk {
                    terms: terms(&text),
                    text,
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Best chunks first; ties keep document order. Chunks sharing no term
    /// with the query are left out.
    pub fn search(&self, query: &str, limit: usize) -> Vec<GuidelineExcerpt> {
        let query_terms = terms(query);
        if query_terms.is_empty() || limit == 0 {
            return Vec::new();
        }

        let mut scored: Vec<GuidelineExcerpt> = self
            .chunks
            .iter()
            .enumerate()
            .filter_map(|(position, chunk)| {
                let score = query_terms
                    .iter()
                    .filter(|t| chunk.terms.contains(*t))
                    .count();
                (score > 0).then(|| GuidelineExcerpt {
                    position,
                    text: chunk.text.clone(),
                    score,
                })
            })
            .collect();

        scored.sort_by(|a, b| b.score.cmp(&a.score).then(a.position.cmp(&b.position)));
        scored.truncate(limit);
        scored
    }
}

fn split_chars(text: &str, max: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(max)
        .map(|piece| piece.iter().collect())
        .collect()
}

/// Reads and indexes the document on first use; shared by every clone.
#[derive(Debug, Clone)]
pub struct LazyGuidelineIndex {
    document_path: Option<PathBuf>,
    chunk_size: usize,
    index: Arc<OnceCell<GuidelineIndex>>,
}

impl LazyGuidelineIndex {
    pub fn new(document_path: Option<PathBuf>, chunk_size: usize) -> Self {
        Self {
            document_path,
            chunk_size,
            index: Arc::new(OnceCell::new()),
        }
    }

    pub fn disabled() -> Self {
        Self::new(None, 1)
    }

    pub fn is_enabled(&self) -> bool {
        self.document_path.is_some()
    }

    pub fn is_initialized(&self) -> bool {
        self.index.initialized()
    }

    async fn index(&self, path: &Path) -> Result<&GuidelineIndex, CoreError> {
        self.index
            .get_or_try_init(|| async {
                let text = tokio::fs::read_to_string(path).await.map_err(|e| {
                    tracing::error!("Failed to read guideline document {}: {}", path.display(), e);
                    CoreError::GuidelineIndex(format!("{}: {}", path.display(), e))
                })?;

                let index = GuidelineIndex::from_text(&text, self.chunk_size);
                tracing::info!(
                    document = %path.display(),
                    chunks = index.len(),
                    "guideline index built"
                );
                Ok(index)
            })
            .await
    }
}

impl GuidelineRetriever for LazyGuidelineIndex {
    async fn retrieve(
        &self,
        query: String,
        limit: usize,
    ) -> Result<Vec<GuidelineExcerpt>, CoreError> {
        let Some(path) = &self.document_path else {
            return Ok(Vec::new());
        };

        let index = self.index(path).await?;
        Ok(index.search(&query, limit))
    }
}
