//! College list splitting.
//!
//! Scraped `college` values are free text that may hold several schools,
//! separated by `,` or `;`. Entries are emitted as slices of the input, so
//! splitting never allocates for the common case of a handful of schools.
//!
//! ```
//! use roster_core::analyzer::split_colleges;
//!
//! let parts = split_colleges(" IIT Delhi ; IIM Ahmedabad,, ");
//! assert_eq!(parts.as_slice(), ["IIT Delhi", "IIM Ahmedabad"]);
//! ```

use memchr::memchr2_iter;
use smallvec::SmallVec;

/// Inline capacity of a split college list.
pub const INLINE_COLLEGES: usize = 4;

/// Splits a college list on `,`/`;`, trimming entries and dropping empties.
pub fn split_colleges(text: &str) -> SmallVec<[&str; INLINE_COLLEGES]> {
    let mut parts = SmallVec::new();
    let mut start = 0usize;

    for pos in memchr2_iter(b',', b';', text.as_bytes()) {
        push_trimmed(&mut parts, &text[start..pos]);
        start = pos + 1;
    }
    push_trimmed(&mut parts, &text[start..]);

    parts
}

#[inline(always)]
fn push_trimmed<'a>(parts: &mut SmallVec<[&'a str; INLINE_COLLEGES]>, part: &'a str) {
    let part = part.trim();
    if !part.is_empty() {
        parts.push(part);
    }
}
