/// Splits text into sentences, in order. Implementations must not drop or
/// reorder content; filtering is the caller's job.
pub trait SentenceSegmenter: Send + Sync {
    fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str>;
}
