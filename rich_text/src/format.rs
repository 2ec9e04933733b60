// Copyright 2026 the Rich Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use core::sync::atomic::{AtomicU64, Ordering};

use hashbrown::HashMap;

/// The identity of one created [`Format`] instance.
///
/// Every call to [`Format::new`] mints a fresh id; cloning a format preserves
/// it, so a clone *is* the same instance. Instance identity is how contiguous
/// runs produced by a single format application are recognized. Structural
/// equality ([`PartialEq`] on [`Format`]) deliberately ignores the id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FormatId(u64);

impl FormatId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// A named style applicable to a run of characters.
///
/// Two formats are the same *kind* when their kind strings are equal; they
/// may still differ in attributes (two links with different URLs). Attributes
/// are opaque key/value data that this crate stores but never interprets.
///
/// A format is an immutable value object. The kind and attribute payloads are
/// reference-counted, so cloning is cheap and clones share storage.
///
/// ## Example
///
/// ```
/// use rich_text::Format;
///
/// let link = Format::new("link").with_attribute("href", "https://example.invalid");
/// let copy = link.clone();
///
/// assert!(link.is_kind("link"));
/// assert_eq!(link.attribute("href"), Some("https://example.invalid"));
/// assert!(link.same_instance(&copy));
///
/// // An independently created but identical format is structurally equal,
/// // yet a distinct instance.
/// let other = Format::new("link").with_attribute("href", "https://example.invalid");
/// assert_eq!(link, other);
/// assert!(!link.same_instance(&other));
/// ```
#[derive(Clone, Debug)]
pub struct Format {
    id: FormatId,
    kind: Arc<str>,
    attributes: Arc<HashMap<Arc<str>, Arc<str>>>,
}

impl Format {
    /// Creates a format of the given kind with no attributes.
    pub fn new(kind: impl Into<Arc<str>>) -> Self {
        Self {
            id: FormatId::next(),
            kind: kind.into(),
            attributes: Arc::default(),
        }
    }

    /// Returns this format with the given attribute set, replacing any
    /// previous value for the same name.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<Arc<str>>, value: impl Into<Arc<str>>) -> Self {
        Arc::make_mut(&mut self.attributes).insert(name.into(), value.into());
        self
    }

    /// The identity of this instance.
    pub fn id(&self) -> FormatId {
        self.id
    }

    /// The kind string identifying this style (e.g. `"bold"`, `"link"`).
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns `true` if this format is of the given kind.
    pub fn is_kind(&self, kind: &str) -> bool {
        *self.kind == *kind
    }

    /// Returns `true` if `self` and `other` are of the same kind, regardless
    /// of their attributes.
    pub fn same_kind(&self, other: &Self) -> bool {
        self.kind == other.kind
    }

    /// Returns `true` if `other` is the same instance as `self`.
    ///
    /// Clones count: a format and its clone are the same instance. Two
    /// independently created formats never are, even when structurally equal.
    pub fn same_instance(&self, other: &Self) -> bool {
        self.id == other.id
    }

    /// Looks up an attribute by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|value| &**value)
    }

    /// Iterates over all attributes, in unspecified order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (&**name, &**value))
    }
}

/// Structural equality: kind and attributes, never instance identity.
impl PartialEq for Format {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.attributes == other.attributes
    }
}

impl Eq for Format {}

/// Returns the stack slot of the first format of the given kind, if any.
///
/// This is a linear first-match scan; absence is not an error.
pub fn find_format(formats: &[Format], kind: &str) -> Option<usize> {
    formats.iter().position(|format| format.is_kind(kind))
}
