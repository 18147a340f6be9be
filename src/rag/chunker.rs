//! Text chunking for vector indexing.
//!
//! Splits raw documents into fixed-size overlapping windows before
//! embedding. Character-based (Unicode scalar values), deterministic:
//! the same input always yields the same chunks in the same order.

use serde::{Deserialize, Serialize};

/// A text chunk ready for embedding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextChunk {
    /// The text content
    pub text: String,
    /// Source identifier (filename, upload, etc.)
    pub source: String,
    /// Character offset in the original document
    pub start_offset: usize,
    /// Chunk index within the source
    pub chunk_index: usize,
}

/// Sliding-window splitter with character overlap.
#[derive(Debug, Clone)]
pub struct Chunker {
    size: usize,
    overlap: usize,
}

impl Chunker {
    pub fn new(size: usize, overlap: usize) -> Self {
        let size = size.max(1);
        Self {
            size,
            overlap: overlap.min(size.saturating_sub(1)),
        }
    }

    /// Split text into overlapping chunks of at most `size` characters.
    ///
    /// Consecutive chunks share `overlap` characters; the window step
    /// is `size - overlap`. Whitespace-only input yields no chunks.
    pub fn split(&self, text: &str, source: &str) -> Vec<TextChunk> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let chars: Vec<char> = text.chars().collect();
        let total = chars.len();
        let step = self.size - self.overlap;

        let mut chunks = Vec::new();
        let mut start = 0;
        let mut chunk_index = 0;

        while start < total {
            let end = (start + self.size).min(total);
            chunks.push(TextChunk {
                text: chars[start..end].iter().collect(),
                source: source.to_string(),
                start_offset: start,
                chunk_index,
            });

            if end == total {
                break;
            }
            start += step;
            chunk_index += 1;
        }

        chunks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_a_single_chunk() {
        let chunker = Chunker::new(500, 100);
        let chunks = chunker.split("hello world", "doc");

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "hello world");
        assert_eq!(chunks[0].chunk_index, 0);
    }

    #[test]
    fn empty_and_whitespace_text_yield_nothing() {
        let chunker = Chunker::new(500, 100);
        assert!(chunker.split("", "doc").is_empty());
        assert!(chunker.split("   \n\t ", "doc").is_empty());
    }

    #[test]
    fn long_text_splits_with_overlap() {
        let chunker = Chunker::new(500, 100);
        let text: String = "abcdefghij".repeat(120); // 1200 chars
        let chunks = chunker.split(&text, "doc");

        // windows start at 0, 400, 800
        assert_eq!(chunks.len(), 3);
        assert!(chunks.iter().all(|c| c.text.chars().count() <= 500));

        for pair in chunks.windows(2) {
            let prev: Vec<char> = pair[0].text.chars().collect();
            let next: Vec<char> = pair[1].text.chars().collect();
            let tail: String = prev[prev.len() - 100..].iter().collect();
            let head: String = next[..100].iter().collect();
            assert_eq!(tail, head);
        }
    }

    #[test]
    fn chunking_is_deterministic() {
        let chunker = Chunker::new(500, 100);
        let text: String = "The quick brown fox jumps over the lazy dog. ".repeat(40);

        let first = chunker.split(&text, "doc");
        let second = chunker.split(&text, "doc");

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.text, b.text);
            assert_eq!(a.start_offset, b.start_offset);
            assert_eq!(a.chunk_index, b.chunk_index);
        }
    }

    #[test]
    fn multibyte_text_counts_characters_not_bytes() {
        let chunker = Chunker::new(10, 2);
        let text = "日本語のテキストを分割するテスト".repeat(3);
        let chunks = chunker.split(&text, "doc");

        assert!(chunks.len() > 1);
        assert!(chunks.iter().all(|c| c.text.chars().count() <= 10));
    }

    #[test]
    fn overlap_is_clamped_below_size() {
        // step must stay positive even with a misconfigured overlap
        let chunker = Chunker::new(10, 50);
        let chunks = chunker.split(&"x".repeat(30), "doc");
        assert!(chunks.len() > 1);
        assert!(chunks.len() < 30);
    }
}
