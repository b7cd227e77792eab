/// Greedy word wrap by character count. Words are never split, so a word
/// longer than `max_width` occupies a line of its own.
pub fn wrap(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split(' ').filter(|w| !w.is_empty()) {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }

        if current.chars().count() + 1 + word.chars().count() <= max_width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greedy_wrap() {
        assert_eq!(wrap("aaaa bbbb cccc", 9), vec!["aaaa bbbb", "cccc"]);
        assert_eq!(wrap("a b c d", 3), vec!["a b", "c d"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(wrap("", 10).is_empty());
        assert!(wrap("   ", 10).is_empty());
    }

    #[test]
    fn test_long_word_kept_whole() {
        let word = "abcdefghijklmnopqrst";
        assert_eq!(wrap(word, 10), vec![word]);
        assert_eq!(wrap(&format!("hi {} yo", word), 10), vec!["hi", word, "yo"]);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        assert_eq!(wrap("café noir", 9), vec!["café noir"]);
    }
}
