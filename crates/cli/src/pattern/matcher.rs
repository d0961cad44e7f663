// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered multi-token matching.
//!
//! Every token must occur in the text, left to right, without overlapping
//! an earlier token's match. Comparison is ASCII case-insensitive. By default
//! a token must cover whole words; a leading `_` lifts the word-start check
//! and a trailing `_` lifts the word-stop check.
//!
//! Each token commits to its first occurrence that passes the boundary
//! checks. If the remaining tokens fail after that point, later occurrences
//! of the same token are not tried.

use aho_corasick::{AhoCorasick, Input, MatchKind};

use super::boundary::AnnotatedText;
use crate::error::{Error, Result};

/// Marker that disables a word boundary check on one side of a token.
pub const BOUNDARY_ESCAPE: char = '_';

/// A single compiled match step.
#[derive(Debug, Clone)]
pub struct Token {
    raw: String,
    text: String,
    word_start: bool,
    word_stop: bool,
    searcher: Option<AhoCorasick>,
}

impl Token {
    /// Compile a token, consuming its `_` boundary markers.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut text = raw;
        let mut word_start = true;
        let mut word_stop = true;

        if let Some(rest) = text.strip_prefix(BOUNDARY_ESCAPE) {
            word_start = false;
            text = rest;
        }
        if let Some(rest) = text.strip_suffix(BOUNDARY_ESCAPE) {
            word_stop = false;
            text = rest;
        }

        let searcher = if text.is_empty() {
            None
        } else {
            let ac = AhoCorasick::builder()
                .ascii_case_insensitive(true)
                .match_kind(MatchKind::LeftmostFirst)
                .build([text])
                .map_err(|source| Error::Pattern { token: raw.to_string(), source })?;
            Some(ac)
        };

        Ok(Self { raw: raw.to_string(), text: text.to_string(), word_start, word_stop, searcher })
    }

    /// The token as written in the folder name, markers included.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The matchable text, markers stripped.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn requires_word_start(&self) -> bool {
        self.word_start
    }

    pub fn requires_word_stop(&self) -> bool {
        self.word_stop
    }

    /// Leftmost case-insensitive occurrence at or after `from`.
    fn find(&self, haystack: &[u8], from: usize) -> Option<usize> {
        let searcher = self.searcher.as_ref()?;
        searcher.find(Input::new(haystack).span(from..haystack.len())).map(|m| m.start())
    }

    fn boundaries_hold(&self, text: &AnnotatedText<'_>, start: usize, end: usize) -> bool {
        (!self.word_start || text.is_start(start)) && (!self.word_stop || text.is_stop(end - 1))
    }
}

/// An ordered token sequence registered for one destination variant.
#[derive(Debug, Clone)]
pub struct Pattern {
    tokens: Vec<Token>,
}

impl Pattern {
    pub fn compile<S: AsRef<str>>(words: &[S]) -> Result<Self> {
        let tokens = words.iter().map(|w| Token::parse(w.as_ref())).collect::<Result<_>>()?;
        Ok(Self { tokens })
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Whether every token occurs in `text`, in order.
    pub fn matches(&self, text: &AnnotatedText<'_>) -> bool {
        match_from(text, 0, &self.tokens)
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "[{}]", token.raw)?;
        }
        Ok(())
    }
}

fn match_from(text: &AnnotatedText<'_>, pos: usize, tokens: &[Token]) -> bool {
    let Some((token, rest)) = tokens.split_first() else {
        return true;
    };
    if pos >= text.len() {
        return false;
    }
    if token.text.is_empty() {
        return match_from(text, pos, rest);
    }

    let haystack = text.as_bytes();
    let len = token.text.len();
    let mut from = pos;

    while let Some(start) = token.find(haystack, from) {
        let end = start + len;
        if token.boundaries_hold(text, start, end) {
            // Committed: no retry with a later occurrence.
            return match_from(text, end, rest);
        }
        from = end;
    }
    false
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
