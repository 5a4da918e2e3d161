//! Word-greedy message chunker.
//!
//! Splits a message on whitespace and greedily packs words into chunks that
//! stay within a character budget, reserving headroom for the positional
//! `" i/n"` suffix appended when a message needs more than one chunk.

use serde::{Deserialize, Serialize};

/// A word-aligned, length-bounded fragment of a submission's message.
///
/// Produced by [`chunk_message`] and consumed immediately by the dispatch
/// step; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Dispatch-ready text, sanitized and suffixed when `total > 1`
    pub text: String,

    /// 1-based position of this chunk within its submission
    pub index: usize,

    /// Total chunk count for the submission
    pub total: usize,
}

/// Split a message into dispatch-ready chunks.
///
/// Words are accumulated into chunks joined by single spaces, keeping each
/// chunk within `max_chars` minus the suffix headroom. A single word longer
/// than the budget is placed alone in its own chunk, never truncated. When
/// the result is a single chunk its text is emitted unmodified; otherwise
/// each chunk carries a trailing `" {index}/{total}"`.
///
/// The headroom starts at six characters (worst-case `" 99/99"`). If the
/// message produces more than 99 chunks the headroom is recomputed from the
/// actual digit width and the packing is redone until the suffix fits.
///
/// A chunk whose text starts with `reserved_mention` has that handle
/// stripped before suffixing. Lengths are counted in `char`s.
pub fn chunk_message(message: &str, max_chars: usize, reserved_mention: &str) -> Vec<Chunk> {
    let words: Vec<&str> = message.split_whitespace().collect();
    if words.is_empty() {
        return Vec::new();
    }

    let mut headroom = suffix_width(99);
    let bodies = loop {
        let budget = max_chars.saturating_sub(headroom).max(1);
        let bodies = pack_words(&words, budget);
        if bodies.len() <= 1 {
            break bodies;
        }
        let needed = suffix_width(bodies.len());
        if needed <= headroom {
            break bodies;
        }
        headroom = needed;
    };

    let total = bodies.len();
    bodies
        .into_iter()
        .enumerate()
        .map(|(i, body)| {
            let body = strip_reserved_mention(body, reserved_mention);
            let text = if total > 1 {
                format!("{} {}/{}", body, i + 1, total)
            } else {
                body
            };
            Chunk {
                text,
                index: i + 1,
                total,
            }
        })
        .collect()
}

/// Greedily pack words into strings of at most `budget` chars each.
///
/// An oversized word still gets a chunk of its own.
fn pack_words(words: &[&str], budget: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0;

    for word in words {
        let word_chars = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
            current_chars = word_chars;
        } else if current_chars + 1 + word_chars <= budget {
            current.push(' ');
            current.push_str(word);
            current_chars += 1 + word_chars;
        } else {
            chunks.push(std::mem::take(&mut current));
            current.push_str(word);
            current_chars = word_chars;
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

/// Drop the reserved mention handle from the start of a chunk body.
fn strip_reserved_mention(body: String, mention: &str) -> String {
    if mention.is_empty() {
        return body;
    }
    match body.strip_prefix(mention) {
        Some(rest) => rest.trim_start().to_string(),
        None => body,
    }
}

/// Worst-case width of the `" i/n"` suffix for a given chunk count.
fn suffix_width(total: usize) -> usize {
    let digits = decimal_digits(total);
    2 + 2 * digits
}

fn decimal_digits(mut n: usize) -> usize {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}
