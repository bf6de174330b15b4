//! Text chunking with sentence-boundary awareness.
//!
//! Splits source documents into overlapping pieces sized for embedding.
//! Cuts prefer sentence boundaries (., !, ?, newline) so chunks stay
//! semantically coherent; overlap carries context across the cut.

/// Character-based chunker.
///
/// `chunk_size` and `overlap` are measured in characters, not bytes, so
/// multi-byte text never splits inside a code point.
pub struct Chunker {
    chunk_size: usize,
    overlap: usize,
}

impl Default for Chunker {
    fn default() -> Self {
        Self {
            chunk_size: 1000,
            overlap: 200,
        }
    }
}

impl Chunker {
    /// Create a chunker with custom settings.
    ///
    /// The overlap is clamped below the chunk size so every step makes
    /// forward progress.
    pub fn new(chunk_size: usize, overlap: usize) -> Self {
        let chunk_size = chunk_size.max(1);
        Self {
            chunk_size,
            overlap: overlap.min(chunk_size - 1),
        }
    }

    /// Split `text` into overlapping chunks.
    ///
    /// Each chunk is at most `chunk_size` characters. When a cut would
    /// land mid-sentence, it snaps back to the last sentence boundary in
    /// the second half of the window. Whitespace-only pieces are dropped.
    pub fn chunk(&self, text: &str) -> Vec<String> {
        let offsets: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        let chars: Vec<char> = text.chars().collect();
        let n = chars.len();
        if n == 0 {
            return Vec::new();
        }

        let byte_at = |ci: usize| {
            if ci >= n {
                text.len()
            } else {
                offsets[ci]
            }
        };

        let mut chunks = Vec::new();
        let mut start = 0usize;

        while start < n {
            let window_end = (start + self.chunk_size).min(n);
            let mut end = window_end;

            if window_end < n {
                // Snap back to a sentence boundary, but only within the
                // second half of the window — a near-empty chunk is worse
                // than a mid-sentence cut.
                let floor = start + self.chunk_size / 2;
                if let Some(boundary) = (floor..window_end)
                    .rev()
                    .find(|&i| matches!(chars[i], '.' | '!' | '?' | '\n'))
                {
                    end = boundary + 1;
                }
            }

            let piece = &text[byte_at(start)..byte_at(end)];
            let trimmed = piece.trim();
            if !trimmed.is_empty() {
                chunks.push(trimmed.to_string());
            }

            if end >= n {
                break;
            }
            let next = end.saturating_sub(self.overlap);
            start = if next > start { next } else { end };
        }

        chunks
    }
}
