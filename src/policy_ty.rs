use crate::path_rules::PathRules;
use std::fmt;

/// Sanitization rule applied to transliterated text.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ConversionPolicy {
    /// Keep all ASCII output unchanged.
    #[default]
    Full,
    /// Replace characters the platform forbids in paths.
    SafePath,
    /// Replace characters the platform forbids in file names.
    SafeFileName,
    /// Keep only `0-9`, `A-Z` and `a-z`.
    Alphanumeric,
}

impl ConversionPolicy {
    /// Character written in place of a run of disallowed characters:
    /// `_` for [`Alphanumeric`](Self::Alphanumeric), a space otherwise.
    pub const fn replacement(self) -> char {
        match self {
            ConversionPolicy::Alphanumeric => '_',
            _ => ' ',
        }
    }

    /// Returns whether `c` may be copied to the output under this policy.
    pub fn allows<R: PathRules>(self, rules: &R, c: char) -> bool {
        match self {
            ConversionPolicy::Full => true,
            ConversionPolicy::SafePath => !rules.is_invalid_path_char(c),
            ConversionPolicy::SafeFileName => !rules.is_invalid_file_name_char(c),
            ConversionPolicy::Alphanumeric => c.is_ascii_alphanumeric(),
        }
    }

    /// Returns the name of this policy.
    pub const fn name(self) -> &'static str {
        match self {
            ConversionPolicy::Full => "full",
            ConversionPolicy::SafePath => "safe-path",
            ConversionPolicy::SafeFileName => "safe-file-name",
            ConversionPolicy::Alphanumeric => "alphanumeric",
        }
    }
}

impl fmt::Display for ConversionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
