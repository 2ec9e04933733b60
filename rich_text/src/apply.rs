// Copyright 2026 the Rich Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Applying a [`Format`] to a range of an [`AttributedValue`].

use alloc::vec::Vec;

use crate::error::Error;
use crate::format::{Format, find_format};
use crate::normalise::normalise;
use crate::value::{AttributedValue, FormatStack, validate_selection};

impl AttributedValue {
    /// Applies `format` to the current selection, returning a new value.
    ///
    /// Shorthand for [`apply_format_between`](Self::apply_format_between)
    /// with the selection endpoints.
    #[must_use]
    #[inline]
    pub fn apply_format(&self, format: Format) -> Self {
        self.apply_format_between(format, self.start, self.end)
    }

    /// Range-checked variant of
    /// [`apply_format_between`](Self::apply_format_between).
    pub fn try_apply_format_between(
        &self,
        format: Format,
        start_index: usize,
        end_index: usize,
    ) -> Result<Self, Error> {
        validate_selection(start_index, end_index, self.len())?;
        Ok(self.apply_format_between(format, start_index, end_index))
    }

    /// Applies `format` from `start_index` to `end_index` (exclusive),
    /// returning a new value. `self` is never mutated.
    ///
    /// Over a non-empty range, any existing format of the same kind is
    /// replaced at each position (set semantics per kind, not stacking), and
    /// the new format is inserted at one shared stack slot: the shallowest
    /// depth observed across the range. The result is normalised.
    ///
    /// At a collapsed caret (`start_index == end_index`) sitting inside a run
    /// of the same kind, the whole run is rewritten with the new format: this
    /// updates a run's attributes in place without introducing a new
    /// boundary. At a collapsed caret with no such run, nothing carries the
    /// format yet; the stacks are left untouched and the format is staged in
    /// [`format_placeholder`](Self::format_placeholder) for the next typed
    /// character.
    ///
    /// `start_index <= end_index <= self.len()` is a caller contract: debug
    /// builds assert it, release builds clamp both indices to the valid
    /// range. Use [`try_apply_format_between`](Self::try_apply_format_between)
    /// for a checked boundary.
    ///
    /// ```
    /// use rich_text::{AttributedValue, Format};
    ///
    /// let value = AttributedValue::new("ab");
    /// let value = value.apply_format_between(Format::new("bold"), 0, 2);
    ///
    /// assert!(value.formats_at(0).unwrap()[0].is_kind("bold"));
    /// assert!(value.formats_at(1).unwrap()[0].is_kind("bold"));
    /// ```
    #[must_use]
    pub fn apply_format_between(
        &self,
        format: Format,
        start_index: usize,
        end_index: usize,
    ) -> Self {
        debug_assert!(
            start_index <= end_index && end_index <= self.len(),
            "range {start_index}..{end_index} out of bounds for length {}",
            self.len()
        );
        let end_index = end_index.min(self.len());
        let start_index = start_index.min(end_index);

        if start_index == end_index {
            let start_format = self.formats.get(start_index).and_then(|stack| {
                find_format(stack, format.kind()).map(|slot| (slot, stack[slot].clone()))
            });

            // Nothing at the caret carries this kind, so there is no
            // character to restyle. Stage the format for the next insertion.
            let Some((slot, start_format)) = start_format else {
                let mut placeholder = start_index
                    .checked_sub(1)
                    .and_then(|previous| self.formats.get(previous))
                    .cloned()
                    .unwrap_or_default();
                placeholder.push(format);
                return Self {
                    format_placeholder: Some(placeholder),
                    ..self.clone()
                };
            };

            // The caret sits inside a run of the same kind: rewrite the whole
            // run with the new format to update its attributes. The run ends
            // wherever the original instance stops appearing at this slot.
            let mut formats = self.formats.clone();
            let mut index = start_index;
            loop {
                formats[index][slot] = format.clone();
                if index == 0 {
                    break;
                }
                index -= 1;
                if !holds_instance(&formats, index, slot, &start_format) {
                    break;
                }
            }
            let mut index = start_index + 1;
            while holds_instance(&formats, index, slot, &start_format) {
                formats[index][slot] = format.clone();
                index += 1;
            }

            return normalise(self.with_formats(formats));
        }

        let mut formats = self.formats.clone();

        // Strip the kind being applied, then insert the new format at the
        // shallowest stack depth seen across the range. Every position gets
        // the same absolute slot, so the run stays recognizable to the
        // collapsed-case rewrite above.
        let mut position = usize::MAX;
        for stack in &mut formats[start_index..end_index] {
            stack.retain(|existing| !existing.is_kind(format.kind()));
            position = position.min(stack.len());
        }
        for stack in &mut formats[start_index..end_index] {
            stack.insert(position, format.clone());
        }

        normalise(self.with_formats(formats))
    }

    fn with_formats(&self, formats: Vec<FormatStack>) -> Self {
        Self {
            text: self.text.clone(),
            formats,
            start: self.start,
            end: self.end,
            format_placeholder: self.format_placeholder.clone(),
        }
    }
}

fn holds_instance(formats: &[FormatStack], index: usize, slot: usize, instance: &Format) -> bool {
    formats
        .get(index)
        .and_then(|stack| stack.get(slot))
        .is_some_and(|existing| existing.same_instance(instance))
}
