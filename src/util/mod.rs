// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! String helpers shared by the index and the query side.
//!
//! Both sides must agree on what a "term" is, otherwise a query can never hit
//! the vocabulary it was meant for. Everything that turns text into terms
//! lives here.

pub mod normalize;

pub use normalize::{normalize, tokenize};
