// Copyright 2026 the Rich Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `rich_text`.
//!
//! - The `util` module contains shared helpers (value/stack builders, the
//!   deterministic `Lcg`, and structural snapshots) needed by different
//!   test modules.
//! - We do not use the default Rust test harness, but instead use this
//!   `mod.rs` file as the entry point to run all other tests, which makes it
//!   easy to share those helpers between modules.
//! - `scenarios.rs` pins concrete before/after cases numerically;
//!   `properties.rs` holds the invariant-style tests, including the
//!   randomized sweep against the reference model in `util`.

#![allow(missing_docs, reason = "we don't need docs for testing")]
#![allow(clippy::cast_possible_truncation, reason = "not critical for testing")]

mod util;
