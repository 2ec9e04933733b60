// Copyright 2026 the Rich Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::error::Error;
use crate::format::{Format, find_format};

/// The formats active at one character position, ordered by nesting depth.
///
/// The slot index within the stack is the nesting order: a format at a lower
/// slot wraps the formats at higher slots. Stacks are short in practice, so
/// they are stored inline.
pub type FormatStack = SmallVec<[Format; 2]>;

/// Text with one [`FormatStack`] per character, a selection, and an optional
/// placeholder stack for an empty caret.
///
/// ## Invariants
///
/// - There is exactly one stack per character: `formats().len()` equals the
///   character count of the text.
/// - `0 <= start <= end <= len`.
/// - After [`normalise`](crate::normalise), a stack holds at most one format
///   of any given kind. Duplicates may exist transiently while an apply
///   operation is in flight, never in a returned value.
///
/// A collapsed selection (`start == end`) is a caret. The placeholder stack,
/// when present, holds the formats the surrounding editor should give to the
/// next character typed at such a caret; this crate only stages it (see
/// [`apply_format`](Self::apply_format)), consuming it on insertion is the
/// editor's job.
#[derive(Clone, Debug, PartialEq)]
pub struct AttributedValue {
    pub(crate) text: Arc<str>,
    pub(crate) formats: Vec<FormatStack>,
    pub(crate) start: usize,
    pub(crate) end: usize,
    pub(crate) format_placeholder: Option<FormatStack>,
}

impl AttributedValue {
    /// Creates a value with no formatting and a caret collapsed at 0.
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        let text = text.into();
        let formats = vec![FormatStack::new(); text.chars().count()];
        Self {
            text,
            formats,
            start: 0,
            end: 0,
            format_placeholder: None,
        }
    }

    /// Assembles a value from parts produced outside this crate (a parser,
    /// a deserializer).
    ///
    /// Validates the one-stack-per-character invariant and the selection.
    pub fn from_parts(
        text: impl Into<Arc<str>>,
        formats: Vec<FormatStack>,
        start: usize,
        end: usize,
    ) -> Result<Self, Error> {
        let text = text.into();
        let text_chars = text.chars().count();
        if formats.len() != text_chars {
            return Err(Error::length_mismatch(text_chars, formats.len()));
        }
        validate_selection(start, end, formats.len())?;
        Ok(Self {
            text,
            formats,
            start,
            end,
            format_placeholder: None,
        })
    }

    /// The underlying text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The length of the value, in characters.
    ///
    /// This is also the number of format stacks.
    pub fn len(&self) -> usize {
        self.formats.len()
    }

    /// Returns `true` if the text is empty.
    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }

    /// All per-character format stacks, in text order.
    pub fn formats(&self) -> &[FormatStack] {
        &self.formats
    }

    /// The format stack at the given character position.
    pub fn formats_at(&self, index: usize) -> Option<&[Format]> {
        self.formats.get(index).map(|stack| &**stack)
    }

    /// The selection start, in characters.
    pub fn start(&self) -> usize {
        self.start
    }

    /// The selection end (exclusive), in characters.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Returns `true` if the selection is a caret (`start == end`).
    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    /// The formats staged for the next character typed at an empty caret.
    pub fn format_placeholder(&self) -> Option<&[Format]> {
        self.format_placeholder.as_deref()
    }

    /// Moves the selection.
    ///
    /// Fails if `start > end` or either position is past the end of the text.
    pub fn select(&mut self, start: usize, end: usize) -> Result<(), Error> {
        validate_selection(start, end, self.len())?;
        self.start = start;
        self.end = end;
        Ok(())
    }

    /// The format of the given kind at the selection start, if any.
    ///
    /// The surrounding editor uses this to decide whether a style is active
    /// at the caret (e.g. to highlight a toolbar button).
    pub fn active_format(&self, kind: &str) -> Option<&Format> {
        let stack = self.formats.get(self.start)?;
        find_format(stack, kind).map(|slot| &stack[slot])
    }
}

pub(crate) fn validate_selection(start: usize, end: usize, len: usize) -> Result<(), Error> {
    if start > end {
        return Err(Error::invalid_range(start, end, len));
    }
    if start > len || end > len {
        return Err(Error::invalid_bounds(start, end, len));
    }
    Ok(())
}
