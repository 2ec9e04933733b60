// Copyright 2026 the Rich Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canonicalization of format stacks after a mutation.

use crate::value::AttributedValue;

/// Canonicalizes the format stacks of `value`.
///
/// Structurally equal formats at the same slot of adjacent positions are
/// unified into a single shared instance, so equal formatting applied in
/// separate calls reads back as one contiguous run. Unification is the only
/// change: entries are never reordered, moved between slots, or dropped, and
/// text, selection, and placeholder are left as they are. The pass is
/// idempotent.
pub fn normalise(value: AttributedValue) -> AttributedValue {
    let AttributedValue {
        text,
        mut formats,
        start,
        end,
        format_placeholder,
    } = value;

    for index in 1..formats.len() {
        let (head, tail) = formats.split_at_mut(index);
        let previous = &head[index - 1];
        let current = &mut tail[0];
        for slot in 0..current.len() {
            match previous.get(slot) {
                Some(prev) if *prev == current[slot] => current[slot] = prev.clone(),
                _ => {}
            }
        }
    }

    AttributedValue {
        text,
        formats,
        start,
        end,
        format_placeholder,
    }
}
