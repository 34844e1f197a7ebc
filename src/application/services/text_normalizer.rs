use std::sync::Arc;

use crate::application::ports::SentenceSegmenter;
use crate::domain::NormalizedText;

/// Sentences this short or shorter (after trimming) are dropped.
const MIN_SENTENCE_CHARS: usize = 10;

pub struct TextNormalizer {
    segmenter: Option<Arc<dyn SentenceSegmenter>>,
    max_length: usize,
}

impl TextNormalizer {
    pub fn new(segmenter: Option<Arc<dyn SentenceSegmenter>>, max_length: usize) -> Self {
        Self {
            segmenter,
            max_length,
        }
    }

    pub fn segmentation_available(&self) -> bool {
        self.segmenter.is_some()
    }

    /// Bounds `text` to `max_length` characters, then keeps only the sentences
    /// longer than ten characters, joined by single spaces. Without a
    /// segmenter the bounded text is only trimmed.
    pub fn normalize(&self, text: &str) -> NormalizedText {
        let bounded = truncate_chars(text, self.max_length);

        let Some(segmenter) = &self.segmenter else {
            return NormalizedText::new(bounded.trim());
        };

        let kept: Vec<&str> = segmenter
            .sentences(bounded)
            .into_iter()
            .map(str::trim)
            .filter(|sentence| sentence.chars().count() > MIN_SENTENCE_CHARS)
            .collect();

        let joined = kept.join(" ");
        NormalizedText::new(truncate_chars(&joined, self.max_length))
    }
}

/// Returns the longest prefix of `text` holding at most `max_chars` characters.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
