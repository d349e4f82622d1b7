use rand::seq::SliceRandom;
use rand::Rng;

/// Returns a new string with the same characters as `text` in a uniformly
/// random order, drawn from the thread-local RNG.
///
/// Operates on Unicode scalar values, so multi-byte characters are moved
/// as whole units rather than being split at byte boundaries.
pub fn shuffle(text: &str) -> String {
    shuffle_with(text, &mut rand::thread_rng())
}

/// Like [`shuffle`], but with a caller-supplied randomness source.
///
/// Pinning the RNG (e.g. `StdRng::seed_from_u64`) makes the permutation
/// reproducible, which is what the seeded CLI path and the tests rely on.
pub fn shuffle_with<R: Rng>(text: &str, rng: &mut R) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    // Fisher-Yates via SliceRandom, so every permutation is equally likely
    chars.shuffle(rng);
    chars.into_iter().collect()
}

/// Returns true iff `text` equals its own character-level reversal.
///
/// Comparison is exact and case-sensitive with no normalization. The empty
/// string is a palindrome.
pub fn is_palindrome(text: &str) -> bool {
    text.chars().eq(text.chars().rev())
}

/// Character-level reversal of `text`.
pub fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}

/// Extension methods on `str` for the core text operations.
///
/// The behavior lives in the free functions above; this trait only adds
/// method-call ergonomics without touching the built-in string type.
pub trait TextExt {
    fn is_palindrome(&self) -> bool;
    fn shuffled(&self) -> String;
    fn reversed(&self) -> String;
}

impl TextExt for str {
    fn is_palindrome(&self) -> bool {
        is_palindrome(self)
    }

    fn shuffled(&self) -> String {
        shuffle(self)
    }

    fn reversed(&self) -> String {
        reverse(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sorted_chars(s: &str) -> Vec<char> {
        let mut chars: Vec<char> = s.chars().collect();
        chars.sort_unstable();
        chars
    }

    #[test]
    fn test_shuffle_preserves_length_and_chars() {
        let input = "abc";
        let output = shuffle(input);
        assert_eq!(output.chars().count(), 3);
        assert_eq!(sorted_chars(&output), sorted_chars(input));
    }

    #[test]
    fn test_shuffle_empty_and_single() {
        assert_eq!(shuffle(""), "");
        assert_eq!(shuffle("x"), "x");
    }

    #[test]
    fn test_shuffle_with_seed_is_deterministic() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(
            shuffle_with("hello world", &mut a),
            shuffle_with("hello world", &mut b)
        );
    }

    #[test]
    fn test_shuffle_handles_multibyte_chars() {
        let input = "héllo, wörld";
        let output = shuffle(input);
        assert_eq!(sorted_chars(&output), sorted_chars(input));
    }

    #[test]
    fn test_is_palindrome() {
        assert!(is_palindrome(""));
        assert!(is_palindrome("a"));
        assert!(is_palindrome("pip"));
        assert!(is_palindrome("level"));
        assert!(!is_palindrome("hello"));
        // case-sensitive, no normalization
        assert!(!is_palindrome("Level"));
        assert!(!is_palindrome("race car"));
    }

    #[test]
    fn test_reverse() {
        assert_eq!(reverse(""), "");
        assert_eq!(reverse("abc"), "cba");
        assert_eq!(reverse("héllo"), "olléh");
    }

    #[test]
    fn test_text_ext_methods() {
        assert!("level".is_palindrome());
        assert_eq!("abc".reversed(), "cba");
        assert_eq!("abc".shuffled().chars().count(), 3);
    }
}
