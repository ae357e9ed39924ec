use smallvec::SmallVec;
use std::iter;
use tracing::debug;

/// Buffer holding the compatibility decomposition of a single character.
pub type DecomposedChars = SmallVec<[char; 8]>;

/// Unicode normalization services needed by the fallback path.
///
/// The fallback only runs for characters the mapping table does not know,
/// so implementations are free to be slow.
pub trait Decompose {
    /// Appends the compatibility decomposition (NFKD) of `c` to `out`.
    fn decompose(&self, c: char, out: &mut DecomposedChars);

    /// Returns whether `c` is a non-spacing combining mark.
    fn is_nonspacing_mark(&self, c: char) -> bool;
}

impl<D: Decompose + ?Sized> Decompose for &D {
    fn decompose(&self, c: char, out: &mut DecomposedChars) {
        (**self).decompose(c, out)
    }

    fn is_nonspacing_mark(&self, c: char) -> bool {
        (**self).is_nonspacing_mark(c)
    }
}

/// [`Decompose`] backed by the `unicode-normalization` crate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct UnicodeDecomposer;

impl Decompose for UnicodeDecomposer {
    fn decompose(&self, c: char, out: &mut DecomposedChars) {
        use unicode_normalization::UnicodeNormalization;

        out.extend(iter::once(c).nfkd());
    }

    fn is_nonspacing_mark(&self, c: char) -> bool {
        unicode_normalization::char::is_combining_mark(c)
    }
}

/// Folds a character with no table entry by stripping its diacritics.
///
/// The character is decomposed, combining marks are removed and whatever
/// ASCII remains is returned. Characters of the remainder that are not ASCII
/// are dropped, so an undecomposable character yields an empty string.
pub(crate) fn fold_decomposed<D: Decompose>(decomposer: &D, c: char) -> String {
    let mut chars = DecomposedChars::new();
    decomposer.decompose(c, &mut chars);

    let mut folded = String::new();
    let mut dropped = 0usize;
    for ch in chars {
        if decomposer.is_nonspacing_mark(ch) {
            continue;
        }
        if ch.is_ascii() {
            folded.push(ch);
        } else {
            dropped += 1;
        }
    }

    if folded.is_empty() {
        debug!(codepoint = c as u32, dropped, "no ASCII representation");
    }
    folded
}
