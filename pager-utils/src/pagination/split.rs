//! Pure page splitters for text bodies and embed field lists.

use super::error::SplitError;

/// Split `text` into chunks of at most `max_size` characters.
///
/// The input is trimmed and tokenized by `separator`; each chunk is the
/// longest run of whole tokens that still fits. Joining the chunks with
/// `separator` gives back the trimmed input.
pub fn split_text(text: &str, separator: &str, max_size: usize) -> Result<Vec<String>, SplitError> {
    if separator.is_empty() {
        return Err(SplitError::EmptySeparator);
    }

    let separator_len = separator.chars().count();
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0_usize;
    let mut current_has_token = false;

    for token in text.trim().split(separator) {
        let token_len = token.chars().count();
        if token_len > max_size {
            return Err(SplitError::OversizedToken {
                len: token_len,
                max: max_size,
            });
        }

        if current_has_token && current_len + separator_len + token_len > max_size {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
            current_has_token = false;
        }

        if current_has_token {
            current.push_str(separator);
            current_len += separator_len;
        }

        current.push_str(token);
        current_len += token_len;
        current_has_token = true;
    }

    chunks.push(current);
    Ok(chunks)
}

/// Partition `fields` into consecutive groups of at most `max_count` entries.
///
/// Entry `i` always lands in group `i / max_count`. A zero limit is treated as one.
pub fn split_fields<T: Clone>(fields: &[T], max_count: usize) -> Vec<Vec<T>> {
    fields
        .chunks(max_count.max(1))
        .map(<[T]>::to_vec)
        .collect()
}
