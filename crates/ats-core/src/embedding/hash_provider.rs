use std::hash::{Hash, Hasher};

use siphasher::sip::SipHasher13;

use super::{tokenizer, Embedding, EmbeddingConfig, SimilarityProvider};

// Fixed seeds keep embeddings stable across processes and Rust versions.
// Changing them changes every embedding, so bump version() alongside.
const HASH_SEED_K0: u64 = 0x5a17_9e3d_42c8_b061;
const HASH_SEED_K1: u64 = 0x1b86_f04c_7d92_e5a3;

/// Feature-hashing text embedder.
///
/// Deterministic and training-free: word tokens are hashed into a fixed
/// number of buckets with sign hashing, then L2-normalized. A pretrained
/// sentence-embedding service can replace it behind
/// [`SimilarityProvider`] without touching the scorer.
pub struct HashEmbedder {
    config: EmbeddingConfig,
}

impl HashEmbedder {
    pub fn new(config: EmbeddingConfig) -> Self {
        let mut config = config;
        config.dimension = config.dimension.max(1);
        Self { config }
    }

    fn hash_token(&self, token: &str) -> usize {
        let mut hasher = SipHasher13::new_with_keys(HASH_SEED_K0, HASH_SEED_K1);
        token.hash(&mut hasher);
        (hasher.finish() as usize) % self.config.dimension
    }

    fn tokens_to_embedding(&self, tokens: Vec<tokenizer::WeightedToken>) -> Embedding {
        let mut vector = vec![0.0f32; self.config.dimension];

        for wt in &tokens {
            let idx = self.hash_token(&wt.token);
            let sign = if self.hash_token(&format!("{}_sign", wt.token)) % 2 == 0 {
                1.0
            } else {
                -1.0
            };
            vector[idx] += sign * wt.weight;
        }

        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in &mut vector {
                *v /= norm;
            }
        }

        Embedding { vector }
    }
}

impl SimilarityProvider for HashEmbedder {
    fn name(&self) -> &'static str {
        "hash"
    }

    fn version(&self) -> &str {
        "v1"
    }

    fn dimension(&self) -> usize {
        self.config.dimension
    }

    fn embed(&self, text: &str) -> Embedding {
        self.tokens_to_embedding(tokenizer::tokenize_text(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn embedder() -> HashEmbedder {
        HashEmbedder::new(EmbeddingConfig { dimension: 64 })
    }

    #[test]
    fn embeddings_are_deterministic() {
        let a = embedder().embed("python developer in bangalore");
        let b = embedder().embed("python developer in bangalore");
        assert_eq!(a.vector, b.vector);
    }

    #[test]
    fn embeddings_are_l2_normalized() {
        let embedding = embedder().embed("rust and python");
        let norm: f32 = embedding.vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[test]
    fn empty_text_embeds_to_zero_vector() {
        let embedding = embedder().embed("");
        assert!(embedding.vector.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn similar_texts_score_higher_than_unrelated() {
        let e = embedder();
        let jd = e.embed("python developer with sql experience");
        let close = e.embed("experienced python developer sql");
        let far = e.embed("pastry chef specializing in croissants");

        let close_score = e.similarity(&jd, &close);
        let far_score = e.similarity(&jd, &far);
        assert!(close_score > far_score);
    }

    #[test]
    fn dimension_is_clamped_to_at_least_one() {
        let e = HashEmbedder::new(EmbeddingConfig { dimension: 0 });
        assert_eq!(e.dimension(), 1);
    }
}
