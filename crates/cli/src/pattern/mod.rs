// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Folder-name matching.
//!
//! - `tokenize`: split names into words and alternatives
//! - `boundary`: word start/stop flags, CamelCase aware
//! - `matcher`: ordered, case-insensitive multi-token search

pub mod boundary;
pub mod matcher;
pub mod tokenize;

pub use boundary::AnnotatedText;
pub use matcher::{Pattern, Token};
pub use tokenize::{is_dropped_word, join_label, significant_words, tokenize};
