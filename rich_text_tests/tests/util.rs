// Copyright 2026 the Rich Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the integration tests.

use rich_text::{AttributedValue, Format, FormatStack};

/// Builds a stack from existing formats, cloning each (clones share identity
/// with their source, which is how multi-position runs are modelled).
pub(crate) fn stack(formats: &[&Format]) -> FormatStack {
    formats.iter().map(|format| (*format).clone()).collect()
}

/// Builds a value from per-position stacks with a collapsed caret at `caret`.
pub(crate) fn value_with_caret(text: &str, stacks: Vec<FormatStack>, caret: usize) -> AttributedValue {
    AttributedValue::from_parts(text, stacks, caret, caret).unwrap()
}

/// The kinds at one position, in slot order.
pub(crate) fn kinds_at(value: &AttributedValue, index: usize) -> Vec<String> {
    value
        .formats_at(index)
        .unwrap()
        .iter()
        .map(|format| format.kind().to_owned())
        .collect()
}

/// A structural view of one format: kind plus sorted attributes. Identity is
/// deliberately erased so snapshots compare rendered meaning only.
pub(crate) type SimpleFormat = (String, Vec<(String, String)>);

/// A structural view of every stack of a value.
pub(crate) type Snapshot = Vec<Vec<SimpleFormat>>;

pub(crate) fn simple(format: &Format) -> SimpleFormat {
    let mut attributes: Vec<(String, String)> = format
        .attributes()
        .map(|(name, value)| (name.to_owned(), value.to_owned()))
        .collect();
    attributes.sort();
    (format.kind().to_owned(), attributes)
}

pub(crate) fn snapshot(value: &AttributedValue) -> Snapshot {
    value
        .formats()
        .iter()
        .map(|stack| stack.iter().map(simple).collect())
        .collect()
}

pub(crate) fn placeholder_snapshot(value: &AttributedValue) -> Option<Vec<SimpleFormat>> {
    value
        .format_placeholder()
        .map(|stack| stack.iter().map(simple).collect())
}

/// Reference model of the apply operation, producing the expected structural
/// snapshot and placeholder.
///
/// This intentionally recomputes everything from the input value through its
/// public API (including run extents via instance identity) rather than
/// sharing any code with the implementation.
pub(crate) fn reference_apply(
    value: &AttributedValue,
    format: &Format,
    start: usize,
    end: usize,
) -> (Snapshot, Option<Vec<SimpleFormat>>) {
    let mut stacks = snapshot(value);

    if start == end {
        let found = value
            .formats_at(start)
            .and_then(|stack| stack.iter().position(|f| f.is_kind(format.kind())));

        let Some(slot) = found else {
            let mut placeholder = match start.checked_sub(1) {
                Some(previous) => stacks[previous].clone(),
                None => Vec::new(),
            };
            placeholder.push(simple(format));
            return (stacks, Some(placeholder));
        };

        // The run extent: the maximal contiguous interval around `start`
        // where the found instance sits at the found slot.
        let instance = &value.formats_at(start).unwrap()[slot];
        let holds = |index: usize| {
            value
                .formats_at(index)
                .and_then(|stack| stack.get(slot))
                .is_some_and(|existing| existing.same_instance(instance))
        };
        let mut low = start;
        while low > 0 && holds(low - 1) {
            low -= 1;
        }
        let mut high = start + 1;
        while holds(high) {
            high += 1;
        }

        for stack in &mut stacks[low..high] {
            stack[slot] = simple(format);
        }
    } else {
        for stack in &mut stacks[start..end] {
            stack.retain(|(kind, _)| kind != format.kind());
        }
        let position = stacks[start..end]
            .iter()
            .map(Vec::len)
            .min()
            .expect("range is non-empty");
        for stack in &mut stacks[start..end] {
            stack.insert(position, simple(format));
        }
    }

    (stacks, placeholder_snapshot(value))
}

/// Deterministic pseudo-random generator for the randomized sweeps.
pub(crate) struct Lcg(u64);

impl Lcg {
    pub(crate) fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub(crate) fn next_u32(&mut self) -> u32 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    pub(crate) fn next_usize(&mut self, max: usize) -> usize {
        if max == 0 {
            0
        } else {
            (self.next_u32() as usize) % max
        }
    }

    pub(crate) fn next_bool(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}
