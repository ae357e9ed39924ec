use crate::tables::fold::CLASSES;
use std::{collections::hash_map, collections::HashMap, fmt, sync::LazyLock};
use tracing::trace;

/// Every ASCII character, in code point order. Identity conversions borrow
/// one-byte slices of this string instead of allocating.
const ASCII_CHARS: &str = concat!(
    "\x00\x01\x02\x03\x04\x05\x06\x07\x08\x09\x0A\x0B\x0C\x0D\x0E\x0F",
    "\x10\x11\x12\x13\x14\x15\x16\x17\x18\x19\x1A\x1B\x1C\x1D\x1E\x1F",
    " !\"#$%&'()*+,-./",
    "0123456789:;<=>?",
    "@ABCDEFGHIJKLMNO",
    "PQRSTUVWXYZ[\\]^_",
    "`abcdefghijklmno",
    "pqrstuvwxyz{|}~\x7F",
);

/// Returns `c` as a static one-character string if it is ASCII.
pub(crate) fn ascii_str(c: char) -> Option<&'static str> {
    if c.is_ascii() {
        let idx = c as usize;
        Some(&ASCII_CHARS[idx..idx + 1])
    } else {
        None
    }
}

static MAPPING_TABLE: LazyLock<MappingTable> = LazyLock::new(|| {
    let table = MappingTable::from_classes(CLASSES);
    trace!(entries = table.len(), "mapping table built");
    table
});

/// The immutable table associating non-ASCII characters with their ASCII
/// transliteration.
///
/// The table is built from equivalence classes: all characters that render
/// as the same ASCII text share one class, whatever script they belong to.
/// It is constructed once per process, on first use, and never changes
/// afterwards, so the shared instance can be read from any thread.
pub struct MappingTable {
    entries: HashMap<char, &'static str>,
}

impl MappingTable {
    /// Returns the process-wide table, building it on first call.
    pub fn global() -> &'static MappingTable {
        &MAPPING_TABLE
    }

    /// Builds a table from `(target, sources)` rows.
    ///
    /// Rows are applied in order and a character claimed by an earlier row
    /// keeps that row's target.
    pub(crate) fn from_classes(classes: &[(&'static str, &[char])]) -> Self {
        let capacity = classes.iter().map(|(_, sources)| sources.len()).sum();
        let mut entries = HashMap::with_capacity(capacity);
        for &(target, sources) in classes {
            for &ch in sources {
                entries.entry(ch).or_insert(target);
            }
        }
        MappingTable { entries }
    }

    /// Looks up the transliteration of `c`.
    ///
    /// ASCII characters are never stored; the lookup only answers for
    /// characters with an explicit entry.
    #[inline]
    pub fn get(&self, c: char) -> Option<&'static str> {
        self.entries.get(&c).copied()
    }

    /// Returns whether `c` has an explicit entry.
    pub fn contains(&self, c: char) -> bool {
        self.entries.contains_key(&c)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over all `(character, transliteration)` entries,
    /// in no particular order.
    pub fn iter(&self) -> Iter<'_> {
        Iter(self.entries.iter())
    }
}

impl fmt::Debug for MappingTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MappingTable")
            .field("len", &self.entries.len())
            .finish()
    }
}

/// An iterator over the entries of a [`MappingTable`].
#[derive(Clone)]
pub struct Iter<'a>(hash_map::Iter<'a, char, &'static str>);

impl<'a> Iterator for Iter<'a> {
    type Item = (char, &'static str);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(&ch, &target)| (ch, target))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl fmt::Debug for Iter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Iter(")?;
        f.debug_list().entries(self.clone()).finish()?;
        write!(f, ")")
    }
}

impl<'a> IntoIterator for &'a MappingTable {
    type Item = (char, &'static str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
