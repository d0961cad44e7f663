// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Word boundary detection.
//!
//! A position starts a word when an ASCII letter follows a non-letter, or an
//! uppercase letter follows a lowercase one. It stops a word when a letter is
//! followed by a non-letter, or a lowercase letter is followed by an uppercase
//! one. Runs of capitals (`ABCWord`) have no internal boundary.
//!
//! Classification is byte-wise ASCII; non-ASCII bytes count as non-letters.

/// A search string with per-byte word start/stop flags.
#[derive(Debug, Clone)]
pub struct AnnotatedText<'a> {
    text: &'a str,
    start: Vec<bool>,
    stop: Vec<bool>,
}

impl<'a> AnnotatedText<'a> {
    pub fn new(text: &'a str) -> Self {
        let bytes = text.as_bytes();
        let mut start = Vec::with_capacity(bytes.len());
        let mut stop = Vec::with_capacity(bytes.len());

        for (i, &cur) in bytes.iter().enumerate() {
            let pre = if i == 0 { 0 } else { bytes[i - 1] };
            let suc = bytes.get(i + 1).copied().unwrap_or(0);

            start.push(
                (cur.is_ascii_alphabetic() && !pre.is_ascii_alphabetic())
                    || (cur.is_ascii_uppercase() && pre.is_ascii_lowercase()),
            );
            stop.push(
                (cur.is_ascii_alphabetic() && !suc.is_ascii_alphabetic())
                    || (cur.is_ascii_lowercase() && suc.is_ascii_uppercase()),
            );
        }

        Self { text, start, stop }
    }

    pub fn as_str(&self) -> &'a str {
        self.text
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.text.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether a word may begin at byte `i`.
    pub fn is_start(&self, i: usize) -> bool {
        self.start.get(i).copied().unwrap_or(false)
    }

    /// Whether a word may end at byte `i` (inclusive).
    pub fn is_stop(&self, i: usize) -> bool {
        self.stop.get(i).copied().unwrap_or(false)
    }

    pub fn starts(&self) -> &[bool] {
        &self.start
    }

    pub fn stops(&self) -> &[bool] {
        &self.stop
    }
}

#[cfg(test)]
#[path = "boundary_tests.rs"]
mod tests;
