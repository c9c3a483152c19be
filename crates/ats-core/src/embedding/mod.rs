pub mod hash_provider;
pub mod similarity;
pub mod tokenizer;

pub use hash_provider::HashEmbedder;
pub use similarity::cosine_similarity;
use tracing::warn;

/// An embedding of one text.
#[derive(Debug, Clone, PartialEq)]
pub struct Embedding {
    pub vector: Vec<f32>,
}

#[derive(Debug, Clone, Copy)]
pub struct EmbeddingConfig {
    pub dimension: usize,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self { dimension: 256 }
    }
}

impl EmbeddingConfig {
    pub fn from_env() -> Self {
        Self {
            dimension: std::env::var("ATS_EMBED_DIMENSION")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(256),
        }
    }
}

/// Semantic-closeness provider between two texts.
///
/// The scorer treats this as an opaque collaborator: it only calls
/// [`text_similarity`](SimilarityProvider::text_similarity) and reports the
/// result. Implementations must be deterministic for identical inputs so a
/// scoring call is idempotent.
pub trait SimilarityProvider: Send + Sync {
    /// Implementation name ("hash")
    fn name(&self) -> &'static str;

    /// Model/token-design generation, for result provenance
    fn version(&self) -> &str;

    /// Embedding dimension
    fn dimension(&self) -> usize;

    /// Embed one text
    fn embed(&self, text: &str) -> Embedding;

    /// Similarity of two embeddings in [0.0, 1.0]
    fn similarity(&self, a: &Embedding, b: &Embedding) -> f32 {
        if a.vector.len() != b.vector.len() {
            warn!(
                a_len = a.vector.len(),
                b_len = b.vector.len(),
                "embedding dimension mismatch; returning zero similarity"
            );
            return 0.0;
        }
        cosine_similarity(&a.vector, &b.vector)
    }

    /// Similarity of two texts in [0.0, 1.0]
    fn text_similarity(&self, a: &str, b: &str) -> f32 {
        self.similarity(&self.embed(a), &self.embed(b))
    }
}

/// Similarity-provider factory.
pub fn create_provider(name: &str, config: EmbeddingConfig) -> Box<dyn SimilarityProvider> {
    match name {
        "hash" => Box::new(HashEmbedder::new(config)),
        other => {
            warn!(provider = other, "unknown similarity provider; falling back to hash");
            Box::new(HashEmbedder::new(config))
        }
    }
}

/// Build the configured provider from the environment
/// (`ATS_EMBED_PROVIDER`, `ATS_EMBED_DIMENSION`).
pub fn load_provider_from_env() -> Box<dyn SimilarityProvider> {
    let name = std::env::var("ATS_EMBED_PROVIDER").unwrap_or_else(|_| "hash".into());
    create_provider(&name, EmbeddingConfig::from_env())
}
