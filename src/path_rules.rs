/// Platform knowledge about characters that cannot appear in file system
/// paths and file names.
pub trait PathRules {
    /// Returns whether `c` is forbidden anywhere in a path.
    fn is_invalid_path_char(&self, c: char) -> bool;

    /// Returns whether `c` is forbidden in a single file name.
    fn is_invalid_file_name_char(&self, c: char) -> bool;
}

impl<R: PathRules + ?Sized> PathRules for &R {
    fn is_invalid_path_char(&self, c: char) -> bool {
        (**self).is_invalid_path_char(c)
    }

    fn is_invalid_file_name_char(&self, c: char) -> bool {
        (**self).is_invalid_file_name_char(c)
    }
}

/// Path rules of Windows file systems.
///
/// Paths may not contain `"`, `<`, `>`, `|` or control characters below
/// U+0020. File names additionally exclude `:`, `*`, `?`, `\` and `/`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct WindowsPathRules;

impl PathRules for WindowsPathRules {
    fn is_invalid_path_char(&self, c: char) -> bool {
        matches!(c, '"' | '<' | '>' | '|' | '\0'..='\x1F')
    }

    fn is_invalid_file_name_char(&self, c: char) -> bool {
        self.is_invalid_path_char(c) || matches!(c, ':' | '*' | '?' | '\\' | '/')
    }
}

/// Path rules of Unix file systems: paths exclude NUL, file names exclude
/// NUL and `/`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct UnixPathRules;

impl PathRules for UnixPathRules {
    fn is_invalid_path_char(&self, c: char) -> bool {
        c == '\0'
    }

    fn is_invalid_file_name_char(&self, c: char) -> bool {
        c == '\0' || c == '/'
    }
}

/// Path rules of the platform this crate is compiled for.
#[cfg(windows)]
pub type NativePathRules = WindowsPathRules;

/// Path rules of the platform this crate is compiled for.
#[cfg(not(windows))]
pub type NativePathRules = UnixPathRules;
