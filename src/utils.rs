use std::any::Any;
use std::collections::HashMap;

/// Most frequent whitespace-separated words, most frequent first.
///
/// Words with equal counts keep the order they first appeared in.
pub fn summarize_top_keywords(text: &str, keyword_count: usize) -> String {
    let mut word_positions: HashMap<&str, usize> = HashMap::new();
    let mut word_frequencies: Vec<(&str, usize)> = Vec::new();

    for word in text.split_whitespace() {
        match word_positions.get(word) {
            Some(&position) => word_frequencies[position].1 += 1,
            None => {
                word_positions.insert(word, word_frequencies.len());
                word_frequencies.push((word, 1));
            }
        }
    }

    word_frequencies.sort_by(|a, b| b.1.cmp(&a.1));

    word_frequencies
        .iter()
        .take(keyword_count)
        .map(|(word, _)| *word)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn describe_panic_payload(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        return (*message).to_string();
    }

    if let Some(message) = payload.downcast_ref::<String>() {
        return message.clone();
    }

    "unknown panic payload".to_string()
}
