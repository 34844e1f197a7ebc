use unicode_segmentation::UnicodeSegmentation;

use crate::application::ports::SentenceSegmenter;

/// Sentence boundaries per Unicode UAX #29. Every input character ends up in
/// exactly one returned slice, surrounding whitespace included.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSentenceSegmenter;

impl SentenceSegmenter for UnicodeSentenceSegmenter {
    fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split_sentence_bounds().collect()
    }
}
