// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sift items from a flat repository into a tree of destination folders.
//!
//! Destination folder names are turned into ordered word patterns
//! ([`index`]); every repository item's name is matched against all of them
//! ([`sift`], [`pattern`]) and each match is materialized as hard links
//! ([`link`]).

pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod index;
pub mod link;
pub mod pattern;
pub mod sift;
pub mod verbose;
