use crate::mr::KeyValue;

/// Word count: one `(word, "1")` per run of alphabetic characters.
pub fn map(_filename: &str, contents: &str) -> Vec<KeyValue> {
    let mut res = vec![];
    let mut buf = String::new();
    for c in contents.chars() {
        if c.is_alphabetic() {
            buf.push(c);
        } else if !buf.is_empty() {
            res.push(KeyValue::new(std::mem::take(&mut buf), "1"));
        }
    }
    if !buf.is_empty() {
        res.push(KeyValue::new(buf, "1"));
    }
    res
}
