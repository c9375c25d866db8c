use std::collections::BTreeSet;

use crate::mr::KeyValue;

/// Inverted index: one `(word, filename)` per distinct word in the document.
pub fn map(filename: &str, contents: &str) -> Vec<KeyValue> {
    let words: BTreeSet<&str> = contents
        .split(|c: char| !c.is_alphabetic())
        .filter(|w| !w.is_empty())
        .collect();
    words.into_iter().map(|w| KeyValue::new(w, filename)).collect()
}
