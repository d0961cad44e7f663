// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Delimiter splitting and word filtering.

/// Split `s` on any character in `delimiters`, skipping empty pieces.
pub fn tokenize<'a>(s: &'a str, delimiters: &str) -> Vec<&'a str> {
    s.split(|c: char| delimiters.contains(c)).filter(|tok| !tok.is_empty()).collect()
}

/// Words starting with a lowercase ASCII letter carry no matching weight.
///
/// Uppercase and non-alphabetic starts (digits, `_`, punctuation) are kept.
pub fn is_dropped_word(word: &str) -> bool {
    word.bytes().next().is_some_and(|b| b.is_ascii_alphabetic() && !b.is_ascii_uppercase())
}

/// Space-separated words of `s` that survive [`is_dropped_word`], in order.
pub fn significant_words(s: &str) -> Vec<&str> {
    tokenize(s, crate::config::defaults::WORD_DELIMITERS)
        .into_iter()
        .filter(|word| !is_dropped_word(word))
        .collect()
}

/// Append `name` to an accumulated context, space-separated.
pub fn join_label(context: &str, name: &str) -> String {
    if context.is_empty() {
        return name.to_string();
    }
    let mut label = String::with_capacity(context.len() + 1 + name.len());
    label.push_str(context);
    label.push(' ');
    label.push_str(name);
    label
}

#[cfg(test)]
#[path = "tokenize_tests.rs"]
mod tests;
