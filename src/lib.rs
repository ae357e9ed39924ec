#![deny(missing_docs, missing_debug_implementations)]
//! Best-effort Unicode to ASCII transliteration.
//!
//! Every character is converted on its own into the ASCII text that stands
//! for its pronunciation (letters of alphabetic scripts) or its appearance
//! and meaning (symbols, ligatures, enclosed numerals, punctuation
//! look-alikes). The conversion is lossy and never fails: a character with
//! no ASCII rendering simply disappears.
//!
//! ```
//! use asciifold::ConversionPolicy;
//!
//! assert_eq!("Deja vu", asciifold::to_ascii("Déjà vu"));
//! assert_eq!("Shchuka", asciifold::to_ascii("Щука"));
//! assert_eq!("naive_123", asciifold::convert("naïve_123!", ConversionPolicy::Alphanumeric));
//! ```
//!
//! # Character conversion
//!
//! ASCII characters map to themselves. Other characters are looked up in the
//! [`MappingTable`], which groups characters of every script by the ASCII text
//! they render as: Latin `À`, Greek `Α`, Cyrillic `А`, Coptic `Ⲁ`, Glagolitic
//! `Ⰰ` and runic `ᚨ` all become `A`. An entry may be empty (Cyrillic soft and
//! hard signs), a single letter, or several characters (`Щ` becomes `SHCH`,
//! `⒈` becomes `1.`, `ﬃ` becomes `ffi`).
//!
//! Characters missing from the table go through their compatibility
//! decomposition with combining marks removed, and whatever ASCII remains is
//! kept.
//!
//! # Text conversion
//!
//! Text is converted left to right. When a multi-letter expansion is followed
//! by a lowercase letter, all of the expansion but its first letter is
//! lowered, so `Þe` becomes `The` and `Щи` becomes `Shchi`.
//!
//! The assembled text is then filtered by a [`ConversionPolicy`]:
//!
//! * [`Full`](ConversionPolicy::Full) keeps everything.
//! * [`SafePath`](ConversionPolicy::SafePath) and
//!   [`SafeFileName`](ConversionPolicy::SafeFileName) replace every run of
//!   characters the platform forbids in paths or file names with one space.
//! * [`Alphanumeric`](ConversionPolicy::Alphanumeric) replaces every run of
//!   characters outside `0-9`, `A-Z` and `a-z` with one `_`.
//!
//! Under the filtering policies a single replacement character is trimmed
//! from each end of the result.
//!
//! # Diagnostics
//!
//! The crate emits [`tracing`](https://docs.rs/tracing) events at debug level
//! when a character has no ASCII rendering at all. Installing a subscriber
//! is left to the application.

pub(crate) mod tables;

pub(crate) mod classify;

pub(crate) mod source_encoding;

pub(crate) mod mapping_table;

pub(crate) mod decompose;

pub(crate) mod path_rules;

pub(crate) mod policy_ty;

pub(crate) mod transliterator;

pub use classify::{is_ascii, is_ascii_char, is_ascii_encoded, is_ascii_utf16};

pub use source_encoding::{DecodeError, EncodingError, SourceEncoding};

pub use mapping_table::{Iter, MappingTable};

pub use decompose::{Decompose, DecomposedChars, UnicodeDecomposer};

pub use path_rules::{NativePathRules, PathRules, UnixPathRules, WindowsPathRules};

pub use policy_ty::ConversionPolicy;

pub use transliterator::{
    convert, convert_char, convert_encoded, convert_utf16, to_ascii, to_ascii_encoded,
    TransformState, Transliterator,
};
