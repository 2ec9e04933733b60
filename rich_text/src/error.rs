// Copyright 2026 the Rich Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Rich error type for attributed value operations.
///
/// Carries a non-exhaustive [`ErrorKind`] plus contextual information about
/// the attempted selection or range and, for the length-invariant case, the
/// two mismatched lengths.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    /// The non-exhaustive category describing this error.
    kind: ErrorKind,

    /// The start position of the caller-provided selection or range.
    start: usize,

    /// The end position (exclusive) of the caller-provided selection or range.
    end: usize,

    /// The length in characters of the value at the time of failure.
    len: usize,

    /// Extra detail for length-invariant errors, when available.
    mismatch: Option<MismatchInfo>,
}

#[expect(
    clippy::len_without_is_empty,
    reason = "`Error::len` reports the value length for context; an `is_empty` method would be misleading here."
)]
impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The start position of the selection or range provided by the caller.
    pub fn start(&self) -> usize {
        self.start
    }

    /// The end position of the selection or range provided by the caller.
    pub fn end(&self) -> usize {
        self.end
    }

    /// The length in characters of the value at the time of the error.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Extra details for length-invariant errors, if available.
    pub fn mismatch(&self) -> Option<MismatchInfo> {
        self.mismatch
    }

    pub(crate) fn invalid_range(start: usize, end: usize, len: usize) -> Self {
        Self {
            kind: ErrorKind::InvalidRange,
            start,
            end,
            len,
            mismatch: None,
        }
    }

    pub(crate) fn invalid_bounds(start: usize, end: usize, len: usize) -> Self {
        Self {
            kind: ErrorKind::InvalidBounds,
            start,
            end,
            len,
            mismatch: None,
        }
    }

    pub(crate) fn length_mismatch(text_chars: usize, format_stacks: usize) -> Self {
        Self {
            kind: ErrorKind::LengthMismatch,
            start: 0,
            end: 0,
            len: text_chars,
            mismatch: Some(MismatchInfo {
                text_chars,
                format_stacks,
            }),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            ErrorKind::InvalidBounds => write!(
                f,
                "range {}..{} out of bounds for length {}",
                self.start, self.end, self.len
            ),
            ErrorKind::InvalidRange => {
                write!(f, "invalid range {}..{}: start > end", self.start, self.end)
            }
            ErrorKind::LengthMismatch => {
                if let Some(m) = self.mismatch {
                    write!(
                        f,
                        "{} format stacks for a text of {} characters (one stack per character)",
                        m.format_stacks, m.text_chars
                    )
                } else {
                    write!(f, "format stacks do not match text length")
                }
            }
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The provided selection or range had `start > end`.
    InvalidRange,

    /// Provided positions were out of bounds relative to the value length.
    InvalidBounds,

    /// The number of format stacks differed from the character count of the text.
    LengthMismatch,
}

/// Details about a violated one-stack-per-character invariant.
///
/// Returned by [`Error::mismatch`] when the error kind is
/// [`ErrorKind::LengthMismatch`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MismatchInfo {
    /// The length of the text, in characters.
    pub text_chars: usize,

    /// The number of format stacks provided.
    pub format_stacks: usize,
}
