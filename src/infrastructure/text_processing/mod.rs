mod unicode_sentence_segmenter;

pub use unicode_sentence_segmenter::UnicodeSentenceSegmenter;
