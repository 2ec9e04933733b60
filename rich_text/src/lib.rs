// Copyright 2026 the Rich Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A value model for rich text: a string of characters where arbitrary spans
//! carry zero or more named formats (bold, link, code, …), each format
//! optionally carrying its own attributes (for example a link's URL).
//!
//! - [`AttributedValue`] stores the text, one [`FormatStack`] per character
//!   position, the current selection, and an optional placeholder stack for
//!   an empty caret.
//! - [`Format`] is an immutable named style with opaque attributes and a
//!   synthetic identity used to recognize contiguous runs.
//! - [`AttributedValue::apply_format`] applies a format over a range, with
//!   dedicated collapsed-caret handling, and [`normalise`] canonicalizes the
//!   stacks afterwards.
//!
//! ## Scope
//!
//! This crate covers the value model and the apply operation. Parsing markup
//! into a value, removing formats, merging values, and rendering are the
//! concern of surrounding editor layers; they construct values (via
//! [`AttributedValue::from_parts`]) and consume the stacks this crate
//! maintains.
//!
//! ## Indices
//!
//! Positions are **Unicode scalar values**: the format stack at position `i`
//! belongs to the `i`-th `char` of the text, and a value always holds exactly
//! one stack per character. Selections use the same unit.
//!
//! ## Purity
//!
//! [`AttributedValue::apply_format`] and friends take `&self` and return a
//! new value; the input is never observably mutated, so values can be shared
//! across editor instances without coordination.
//!
//! ## Example
//!
//! ```
//! use rich_text::{AttributedValue, Format};
//!
//! let mut value = AttributedValue::new("Hello world!");
//! value.select(0, 5).unwrap();
//!
//! let value = value.apply_format(Format::new("bold"));
//! assert!(value.formats_at(0).unwrap().iter().any(|f| f.is_kind("bold")));
//! assert!(value.formats_at(5).unwrap().is_empty());
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

mod apply;
mod error;
mod format;
mod normalise;
mod value;

pub use crate::error::{Error, ErrorKind, MismatchInfo};
pub use crate::format::{Format, FormatId, find_format};
pub use crate::normalise::normalise;
pub use crate::value::{AttributedValue, FormatStack};
