//! String-to-integer token encoding

use crate::types::TokenId;
use rustc_hash::FxHashMap;

/// Id given to the first distinct token of a document
pub const FIRST_TOKEN_ID: TokenId = 1000;

/// Bidirectional mapping between words and integer tokens for one document
#[derive(Debug, Clone, Default)]
pub struct TextEncoder {
    word_to_id: FxHashMap<String, TokenId>,
    id_to_word: FxHashMap<TokenId, String>,
}

impl TextEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encode a token sequence, replacing any previously learned vocabulary
    ///
    /// Distinct words get consecutive ids from [`FIRST_TOKEN_ID`] in order of
    /// first occurrence. Returns `None` for an empty sequence.
    pub fn encode<S: AsRef<str>>(&mut self, tokens: &[S]) -> Option<Vec<TokenId>> {
        if tokens.is_empty() {
            return None;
        }
        self.learn_indices(tokens);

        tokens
            .iter()
            .map(|token| self.word_to_id.get(token.as_ref()).copied())
            .collect()
    }

    /// Decode integer tokens back to words
    ///
    /// Returns `None` if any id is outside the learned vocabulary.
    pub fn decode(&self, ids: &[TokenId]) -> Option<Vec<String>> {
        ids.iter()
            .map(|id| self.id_to_word.get(id).cloned())
            .collect()
    }

    /// Number of distinct words learned
    pub fn len(&self) -> usize {
        self.word_to_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word_to_id.is_empty()
    }

    fn learn_indices<S: AsRef<str>>(&mut self, tokens: &[S]) {
        self.word_to_id.clear();
        self.id_to_word.clear();

        let mut next_id = FIRST_TOKEN_ID;
        for token in tokens {
            let token = token.as_ref();
            if self.word_to_id.contains_key(token) {
                continue;
            }
            self.word_to_id.insert(token.to_string(), next_id);
            self.id_to_word.insert(next_id, token.to_string());
            next_id += 1;
        }
    }
}
