use crate::{
    decompose::{fold_decomposed, Decompose, UnicodeDecomposer},
    mapping_table::{ascii_str, MappingTable},
    path_rules::{NativePathRules, PathRules},
    policy_ty::ConversionPolicy,
    source_encoding::SourceEncoding,
};
use std::{borrow::Cow, mem};
use tracing::debug_span;

/// Converts text to ASCII under a [`ConversionPolicy`].
///
/// A `Transliterator` owns the collaborators conversion relies on: the
/// decomposer consulted for characters missing from the [`MappingTable`],
/// and the path rules consulted by the path-safe policies. It holds no
/// per-call state and may be shared between threads.
///
/// ```
/// use asciifold::{ConversionPolicy, Transliterator};
///
/// let slug = Transliterator::new().with_policy(ConversionPolicy::Alphanumeric);
/// assert_eq!("Creme_brulee", slug.convert("Crème brûlée!"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Transliterator<D = UnicodeDecomposer, P = NativePathRules> {
    policy: ConversionPolicy,
    decomposer: D,
    path_rules: P,
}

impl Transliterator {
    /// Creates a transliterator with the [`Full`](ConversionPolicy::Full)
    /// policy, Unicode decomposition and the native path rules.
    pub fn new() -> Self {
        Transliterator::default()
    }
}

impl<D: Decompose, P: PathRules> Transliterator<D, P> {
    /// Sets the sanitization policy.
    pub fn with_policy(mut self, policy: ConversionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replaces the decomposer used for characters without a table entry.
    pub fn with_decomposer<E: Decompose>(self, decomposer: E) -> Transliterator<E, P> {
        Transliterator {
            policy: self.policy,
            decomposer,
            path_rules: self.path_rules,
        }
    }

    /// Replaces the path rules used by the path-safe policies.
    pub fn with_path_rules<Q: PathRules>(self, path_rules: Q) -> Transliterator<D, Q> {
        Transliterator {
            policy: self.policy,
            decomposer: self.decomposer,
            path_rules,
        }
    }

    /// Returns the sanitization policy.
    pub fn policy(&self) -> ConversionPolicy {
        self.policy
    }

    /// Converts a single character.
    ///
    /// ASCII characters map to themselves. Other characters are looked up in
    /// the [`MappingTable`], and failing that are decomposed with their
    /// diacritics stripped. The result may be empty but the conversion never
    /// fails. No policy is applied.
    pub fn convert_char(&self, c: char) -> Cow<'static, str> {
        if let Some(s) = ascii_str(c) {
            return Cow::Borrowed(s);
        }
        match MappingTable::global().get(c) {
            Some(s) => Cow::Borrowed(s),
            None => Cow::Owned(fold_decomposed(&self.decomposer, c)),
        }
    }

    /// Converts `text` and applies the policy.
    pub fn convert(&self, text: &str) -> String {
        let _span = debug_span!("convert", policy = self.policy.name(), len = text.len()).entered();
        let mut state = TransformState::with_capacity(self.policy, text.len());
        if text.is_ascii() {
            state.push_ascii(text);
        } else {
            for ch in text.chars() {
                state.push(self.convert_char(ch));
            }
        }
        state.finish(&self.path_rules)
    }

    /// Converts UTF-16 code units and applies the policy.
    ///
    /// Every code unit is converted on its own. Surrogates, paired or not,
    /// have no ASCII rendering and convert to an empty string, so
    /// characters outside the Basic Multilingual Plane are dropped.
    pub fn convert_utf16(&self, units: &[u16]) -> String {
        let _span =
            debug_span!("convert_utf16", policy = self.policy.name(), len = units.len()).entered();
        let mut state = TransformState::with_capacity(self.policy, units.len());
        for &unit in units {
            match char::from_u32(u32::from(unit)) {
                Some(ch) => state.push(self.convert_char(ch)),
                None => state.push(Cow::Borrowed("")),
            }
        }
        state.finish(&self.path_rules)
    }

    /// Decodes `bytes` from `encoding`, converts the text and applies the
    /// policy. Malformed input is replaced with U+FFFD before conversion,
    /// which then disappears from the output.
    pub fn convert_encoded(&self, bytes: &[u8], encoding: SourceEncoding) -> String {
        self.convert(&encoding.decode_lossy(bytes))
    }
}

/// State of one forward conversion pass.
///
/// Each converted character is held back until the next one arrives, so a
/// multi-letter expansion followed by a lowercase letter can be lowered
/// after its first letter: `Þ` followed by `e` gives `The`, not `THe`.
/// [`finish`](Self::finish) then filters the assembled text through the
/// policy, writing the state's replacement character for every run of
/// disallowed characters. A state value belongs to a single conversion.
#[derive(Debug)]
pub struct TransformState {
    buffer: String,
    pending: Cow<'static, str>,
    policy: ConversionPolicy,
    replacement: char,
}

impl TransformState {
    /// Creates an empty state for a conversion under `policy`.
    pub fn new(policy: ConversionPolicy) -> Self {
        TransformState::with_capacity(policy, 0)
    }

    /// Creates an empty state whose output buffer can hold `capacity` bytes
    /// without reallocating.
    pub fn with_capacity(policy: ConversionPolicy, capacity: usize) -> Self {
        TransformState {
            buffer: String::with_capacity(capacity),
            pending: Cow::Borrowed(""),
            policy,
            replacement: policy.replacement(),
        }
    }

    /// Returns the character written for a run of disallowed characters.
    pub fn replacement(&self) -> char {
        self.replacement
    }

    /// Appends the conversion of the next character.
    pub fn push(&mut self, output: Cow<'static, str>) {
        if starts_lowercase(&output) {
            lower_tail(&mut self.pending);
        }
        let previous = mem::replace(&mut self.pending, output);
        self.buffer.push_str(&previous);
    }

    /// Appends ASCII text that converts to itself.
    fn push_ascii(&mut self, text: &str) {
        if starts_lowercase(text) {
            lower_tail(&mut self.pending);
        }
        let previous = mem::take(&mut self.pending);
        self.buffer.push_str(&previous);
        self.buffer.push_str(text);
    }

    /// Flushes the last conversion and returns the assembled text, filtered
    /// through the policy with `rules` deciding the path-safe policies.
    pub fn finish<R: PathRules>(mut self, rules: &R) -> String {
        let pending = mem::take(&mut self.pending);
        self.buffer.push_str(&pending);
        sanitize(self.buffer, self.policy, self.replacement, rules)
    }
}

fn starts_lowercase(output: &str) -> bool {
    output.as_bytes().first().is_some_and(u8::is_ascii_lowercase)
}

/// Lowercases every letter of a multi-letter output but the first.
fn lower_tail(output: &mut Cow<'static, str>) {
    if output.len() > 1 && output.as_bytes()[1..].iter().any(u8::is_ascii_uppercase) {
        output.to_mut()[1..].make_ascii_lowercase();
    }
}

/// Applies `policy` to transliterated text.
///
/// Every run of disallowed characters collapses into one `replacement`;
/// a single replacement is then trimmed from each end.
fn sanitize<R: PathRules>(
    raw: String,
    policy: ConversionPolicy,
    replacement: char,
    rules: &R,
) -> String {
    if policy == ConversionPolicy::Full {
        return raw;
    }
    let mut filtered = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if policy.allows(rules, ch) {
            filtered.push(ch);
        } else if !filtered.ends_with(replacement) {
            filtered.push(replacement);
        }
    }
    if filtered.ends_with(replacement) {
        filtered.pop();
    }
    if filtered.starts_with(replacement) {
        filtered.remove(0);
    }
    filtered
}

/// Converts a single character to ASCII.
///
/// ```
/// assert_eq!("A", asciifold::convert_char('À'));
/// assert_eq!("ss", asciifold::convert_char('ß'));
/// assert_eq!("", asciifold::convert_char('Ъ'));
/// ```
pub fn convert_char(c: char) -> Cow<'static, str> {
    Transliterator::new().convert_char(c)
}

/// Converts `text` to ASCII under `policy`.
///
/// ```
/// use asciifold::ConversionPolicy;
///
/// assert_eq!("naive_123", asciifold::convert("naïve_123!", ConversionPolicy::Alphanumeric));
/// ```
pub fn convert(text: &str, policy: ConversionPolicy) -> String {
    Transliterator::new().with_policy(policy).convert(text)
}

/// Converts UTF-16 code units to ASCII under `policy`.
pub fn convert_utf16(units: &[u16], policy: ConversionPolicy) -> String {
    Transliterator::new().with_policy(policy).convert_utf16(units)
}

/// Decodes `bytes` from `encoding` and converts the text to ASCII under
/// `policy`.
pub fn convert_encoded(bytes: &[u8], encoding: SourceEncoding, policy: ConversionPolicy) -> String {
    Transliterator::new()
        .with_policy(policy)
        .convert_encoded(bytes, encoding)
}

/// Converts `text` to ASCII, keeping every character the conversion
/// produces.
///
/// ```
/// assert_eq!("Deja vu", asciifold::to_ascii("Déjà vu"));
/// ```
pub fn to_ascii(text: &str) -> String {
    convert(text, ConversionPolicy::Full)
}

/// Decodes `bytes` from `encoding` and converts the text to ASCII, keeping
/// every character the conversion produces.
pub fn to_ascii_encoded(bytes: &[u8], encoding: SourceEncoding) -> String {
    convert_encoded(bytes, encoding, ConversionPolicy::Full)
}

#[cfg(test)]
mod tests {
    use super::{sanitize, TransformState, Transliterator};
    use crate::{
        decompose::{Decompose, DecomposedChars},
        path_rules::{UnixPathRules, WindowsPathRules},
        ConversionPolicy, SourceEncoding,
    };
    use encoding_rs::{KOI8_R, UTF_16LE, WINDOWS_1252};
    use std::borrow::Cow;

    fn full(text: &str) -> String {
        Transliterator::new().convert(text)
    }

    fn with_policy(text: &str, policy: ConversionPolicy) -> String {
        Transliterator::new()
            .with_policy(policy)
            .with_path_rules(WindowsPathRules)
            .convert(text)
    }

    #[test]
    fn test_convert_char() {
        let t = Transliterator::new();
        assert_eq!("a", t.convert_char('a'));
        assert!(matches!(t.convert_char('a'), Cow::Borrowed(_)));
        assert_eq!("A", t.convert_char('À'));
        assert!(matches!(t.convert_char('À'), Cow::Borrowed(_)));
        // Not in the table, folded through decomposition.
        assert_eq!("A", t.convert_char('\u{1D400}'));
        assert!(matches!(t.convert_char('\u{1D400}'), Cow::Owned(_)));
        assert_eq!("", t.convert_char('馬'));
    }

    #[test]
    fn test_convert_latin() {
        assert_eq!("Deja vu", full("Déjà vu"));
        assert_eq!("Strasse", full("Straße"));
        assert_eq!("Aesop", full("Æsop"));
        assert_eq!("AEON", full("ÆON"));
        assert_eq!("Lodz", full("Łódź"));
        assert_eq!("office", full("oﬃce"));
    }

    #[test]
    fn test_convert_other_scripts() {
        assert_eq!("Moskva", full("Москва"));
        assert_eq!("Shchuka", full("Щука"));
        assert_eq!("obekt", full("объект"));
        assert_eq!("Zhizn", full("Жизнь"));
        assert_eq!("Athina", full("Αθήνα"));
        assert_eq!("THEA", full("ΘΕΑ"));
    }

    #[test]
    fn test_casing_lookahead() {
        assert_eq!("The", full("Þe"));
        assert_eq!("THE", full("ÞE"));
        assert_eq!("TH", full("Þ"));
        assert_eq!("TH e", full("Þ e"));
        assert_eq!("The", full("ᚦe"));
        assert_eq!("Shchi", full("Щи"));
        assert_eq!("SHCHI", full("ЩИ"));
        // Parenthesized forms are lowered the same way.
        assert_eq!("(a)b", full("\u{1F110}b"));
        assert_eq!("17a", full("⑰a"));
    }

    #[test]
    fn test_empty_output_clears_lookahead() {
        // The hard sign converts to nothing and becomes the pending output,
        // so the lowercase letter after it no longer reaches the digraph.
        assert_eq!("SHCHa", full("Щъa"));
    }

    #[test]
    fn test_transform_state() {
        let mut state = TransformState::new(ConversionPolicy::Full);
        state.push(Cow::Borrowed("SH"));
        state.push(Cow::Borrowed("a"));
        state.push(Cow::Owned("KH".to_owned()));
        state.push(Cow::Borrowed("m"));
        state.push(Cow::Borrowed("ZH"));
        assert_eq!("ShaKhmZH", state.finish(&UnixPathRules));
        let empty = TransformState::with_capacity(ConversionPolicy::Full, 8);
        assert_eq!("", empty.finish(&UnixPathRules));
    }

    #[test]
    fn test_transform_state_replacement() {
        assert_eq!(' ', TransformState::new(ConversionPolicy::Full).replacement());
        assert_eq!(' ', TransformState::new(ConversionPolicy::SafePath).replacement());
        assert_eq!('_', TransformState::new(ConversionPolicy::Alphanumeric).replacement());

        let mut state = TransformState::new(ConversionPolicy::Alphanumeric);
        for output in ["SHCH", "i", " ", "", "!", "KH", "a"] {
            state.push(Cow::Borrowed(output));
        }
        assert_eq!("Shchi_Kha", state.finish(&UnixPathRules));

        let mut state = TransformState::new(ConversionPolicy::SafeFileName);
        for output in ["/", "a", "/", "/", "b", "/"] {
            state.push(Cow::Borrowed(output));
        }
        assert_eq!("a b", state.finish(&UnixPathRules));
    }

    #[test]
    fn test_full_policy_keeps_ascii() {
        for text in ["", "plain", " padded ", "tab\tand\nnewline", "a/b\\c:d*e?f\"g<h>i|j", "__"] {
            assert_eq!(text, full(text));
        }
    }

    #[test]
    fn test_unmappable_input() {
        for policy in [
            ConversionPolicy::Full,
            ConversionPolicy::SafePath,
            ConversionPolicy::SafeFileName,
            ConversionPolicy::Alphanumeric,
        ] {
            assert_eq!("", with_policy("", policy));
            assert_eq!("", with_policy("馬馬馬", policy));
        }
    }

    #[test]
    fn test_alphanumeric_policy() {
        let alnum = ConversionPolicy::Alphanumeric;
        assert_eq!("naive_123", with_policy("naïve_123!", alnum));
        assert_eq!("Hello_World", with_policy("--Hello,  World--", alnum));
        assert_eq!("Strasse_42", with_policy("Straße 42", alnum));
        assert_eq!("", with_policy("!!!", alnum));
        assert_eq!("a", with_policy("_a_", alnum));
    }

    #[test]
    fn test_safe_file_name_policy() {
        let unix = Transliterator::new()
            .with_policy(ConversionPolicy::SafeFileName)
            .with_path_rules(UnixPathRules);
        assert_eq!("cafe bar", unix.convert("café/bar"));
        assert_eq!("a:b", unix.convert("a:b"));
        assert_eq!("a b", unix.convert("/a//b/"));

        let windows = ConversionPolicy::SafeFileName;
        assert_eq!("cafe bar", with_policy("café/bar", windows));
        assert_eq!("a b c", with_policy("a:*b?\\c", windows));
        // Allowed spaces are copied even right after a replacement.
        assert_eq!("report  2024", with_policy("report: 2024", windows));
    }

    #[test]
    fn test_safe_path_policy() {
        let unix = Transliterator::new()
            .with_policy(ConversionPolicy::SafePath)
            .with_path_rules(UnixPathRules);
        assert_eq!("cafe/bar", unix.convert("café/bar"));
        assert_eq!("a b", unix.convert("a\0b"));

        let windows = ConversionPolicy::SafePath;
        assert_eq!("cafe/bar", with_policy("café/bar", windows));
        assert_eq!("C:\\dir\\file", with_policy("C:\\dir\\file", windows));
        assert_eq!("a b", with_policy("a<>|b", windows));
        assert_eq!("x", with_policy("|x\t", windows));
    }

    #[test]
    fn test_sanitize_trims_one_replacement_per_end() {
        let rules = UnixPathRules;
        let path = |raw: &str| sanitize(raw.to_owned(), ConversionPolicy::SafePath, ' ', &rules);
        assert_eq!(" a ", path("  a  "));
        assert_eq!("a", path("\0a\0"));
        assert_eq!("", path("\0"));
        assert_eq!(
            "  a  ",
            sanitize("  a  ".to_owned(), ConversionPolicy::Full, ' ', &rules)
        );
    }

    #[test]
    fn test_convert_utf16() {
        let t = Transliterator::new();
        let units: Vec<u16> = "Déjà".encode_utf16().collect();
        assert_eq!("Deja", t.convert_utf16(&units));
        assert_eq!("ab", t.convert_utf16(&[0x61, 0xD800, 0x62]));
        assert_eq!("ab", t.convert_utf16(&[0x61, 0xDC00, 0x62]));
        // MATHEMATICAL BOLD CAPITAL A: each half of the pair converts alone.
        assert_eq!("", t.convert_utf16(&[0xD835, 0xDC00]));
        assert_eq!("xy", t.convert_utf16(&[0x78, 0xD835, 0xDC00, 0x79]));
        assert_eq!("A", t.convert_char('\u{1D400}'));
        // Surrogates convert to nothing and still clear the casing lookahead.
        assert_eq!("SHCHa", t.convert_utf16(&[0x0429, 0xD835, 0xDC00, 0x61]));
        let alnum = t.clone().with_policy(ConversionPolicy::Alphanumeric);
        assert_eq!("a_b", alnum.convert_utf16(&[0x61, 0x20, 0xD83D, 0xDE00, 0x62]));
        assert_eq!("", t.convert_utf16(&[]));
    }

    #[test]
    fn test_convert_encoded() {
        let t = Transliterator::new();
        let windows = SourceEncoding::new(WINDOWS_1252);
        let utf8 = SourceEncoding::default();
        assert_eq!("cafe", t.convert_encoded(b"caf\xE9", windows));
        assert_eq!("cafe", t.convert_encoded("café".as_bytes(), utf8));
        assert_eq!("EUR5", t.convert_encoded(b"\x805", windows));
        assert_eq!("ab", t.convert_encoded(b"a\xFFb", utf8));
        assert_eq!("T", t.convert_encoded(&[0x54, 0x00], SourceEncoding::new(UTF_16LE)));
        assert_eq!("Mir", t.convert_encoded(b"\xED\xC9\xD2", SourceEncoding::new(KOI8_R)));
    }

    #[test]
    fn test_custom_decomposer() {
        struct Identity;

        impl Decompose for Identity {
            fn decompose(&self, c: char, out: &mut DecomposedChars) {
                out.push(c);
            }

            fn is_nonspacing_mark(&self, _c: char) -> bool {
                false
            }
        }

        let t = Transliterator::new().with_decomposer(Identity);
        // Table entries are unaffected, decomposition fallbacks disappear.
        assert_eq!("A", t.convert_char('À'));
        assert_eq!("", t.convert_char('\u{1D400}'));
        assert_eq!(ConversionPolicy::Full, t.policy());
    }

    #[test]
    fn test_transliterator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Transliterator>();
    }
}
