// src/core/types.rs

/// A registration id. Assigned sequentially at load time, so a smaller id
/// means an earlier (more frequent) word.
pub type WordId = usize;

/// The partition key of the dictionary: the first character of a word.
pub type Letter = char;

/// Opaque identity of one chat party. One session exists per id.
pub type UserId = i64;

pub fn first_letter(word: &str) -> Option<Letter> {
    word.chars().next()
}

pub fn last_letter(word: &str) -> Option<Letter> {
    word.chars().next_back()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_are_unicode_scalars() {
        assert_eq!(first_letter("яблоко"), Some('я'));
        assert_eq!(last_letter("яблоко"), Some('о'));
        assert_eq!(first_letter(""), None);
        assert_eq!(last_letter(""), None);
    }
}
