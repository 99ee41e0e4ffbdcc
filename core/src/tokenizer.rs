use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref NON_LETTER: Regex = Regex::new(r"[^a-zа-яё]+").expect("valid regex");
}

/// Reduce a raw title token to lowercase Latin/Cyrillic letters only.
///
/// Input is NFC-composed first so that `й` and `ё` typed as base letter plus
/// combining mark survive the letter filter. The result may be empty.
pub fn clean_word(word: &str) -> String {
    let lowered = word.nfc().collect::<String>().to_lowercase();
    NON_LETTER.replace_all(&lowered, "").into_owned()
}

/// Split title text into raw word tokens.
pub fn split_title(title: &str) -> Vec<&str> {
    title.split_whitespace().collect()
}
