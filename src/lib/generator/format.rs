//! Formatting helpers shared by the writers of the descriptors

use std::borrow::Cow;
use std::path::Path;

use crate::utils::constants::mmp::{COLUMN_WIDTH, INDENT, LIBRARY_SUFFIX, LIST_SEPARATOR};

/// Pads the keyword until the column where its value begins. A keyword that
/// doesn't fit in the column is still separated from its value by one space
pub fn keyword_with_param(keyword: &str) -> String {
    let padding = (COLUMN_WIDTH + 1).saturating_sub(keyword.len()).max(1);
    format!("{keyword}{}", " ".repeat(padding))
}

/// Converts a `;` separated list into the space separated lists of the descriptors
pub fn replace_semicolons_with_spaces(value: &str) -> Cow<'_, str> {
    if value.contains(LIST_SEPARATOR) {
        Cow::Owned(value.replace(LIST_SEPARATOR, " "))
    } else {
        Cow::Borrowed(value)
    }
}

/// Appends the `.lib` suffix to the library name, unless it already ends with it
pub fn with_lib_suffix(library: &str) -> Cow<'_, str> {
    if library.ends_with(LIBRARY_SUFFIX) {
        Cow::Borrowed(library)
    } else {
        Cow::Owned(format!("{library}{LIBRARY_SUFFIX}"))
    }
}

/// Rewrites the path as relative to `base`, always using `/` as separator.
/// Paths that can't be related with the base are returned untouched
pub fn relative_to(path: &Path, base: &Path) -> String {
    let relative = pathdiff::diff_paths(path, base).unwrap_or_else(|| path.to_path_buf());
    if relative.as_os_str().is_empty() {
        return String::from(".");
    }

    let rendered = relative.to_string_lossy();
    if cfg!(target_os = "windows") {
        rendered.replace('\\', "/")
    } else {
        rendered.into_owned()
    }
}

/// Converts the separators of a path to the ones of the host shell
pub fn to_host_separators(path: &Path) -> String {
    let rendered = path.to_string_lossy();
    if cfg!(target_os = "windows") {
        rendered.replace('/', "\\")
    } else {
        rendered.into_owned()
    }
}

/// In-memory buffer of a descriptor under construction
#[derive(Debug, Default)]
pub struct DescriptorWriter {
    buffer: String,
}

impl DescriptorWriter {
    /// `KEYWORD<padding>VALUE`
    pub fn keyword_line(&mut self, keyword: &str, value: &str) {
        self.buffer.push_str(&keyword_with_param(keyword));
        self.line(value);
    }

    /// A keyword line nested one level inside a `START ... END` block
    pub fn indented_keyword_line(&mut self, keyword: &str, value: &str) {
        self.buffer.push_str(INDENT);
        self.keyword_line(keyword, value);
    }

    /// A keyword without value nested inside a `START ... END` block
    pub fn indented_line(&mut self, keyword: &str) {
        self.buffer.push_str(INDENT);
        self.line(keyword);
    }

    pub fn line(&mut self, content: &str) {
        self.buffer.push_str(content);
        self.buffer.push('\n');
    }

    pub fn blank_line(&mut self) {
        self.buffer.push('\n');
    }

    pub fn into_contents(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_keyword_padding_reaches_the_value_column() {
        assert_eq!(keyword_with_param("SOURCE"), format!("SOURCE{}", " ".repeat(15)));
        assert_eq!(keyword_with_param("SOURCE").len(), COLUMN_WIDTH + 1);
        assert_eq!(keyword_with_param("START RESOURCE").len(), COLUMN_WIDTH + 1);
    }

    #[test]
    fn test_long_keywords_keep_one_space() {
        let twenty = "A".repeat(COLUMN_WIDTH);
        assert_eq!(keyword_with_param(&twenty), format!("{twenty} "));

        let longer = "B".repeat(COLUMN_WIDTH + 7);
        assert_eq!(keyword_with_param(&longer), format!("{longer} "));
    }

    #[test]
    fn test_semicolons_become_spaces() {
        assert_eq!(replace_semicolons_with_spaces("A=1;B=2"), "A=1 B=2");
        assert_eq!(replace_semicolons_with_spaces(";;x;"), "  x ");
        assert!(matches!(
            replace_semicolons_with_spaces("NDEBUG"),
            Cow::Borrowed("NDEBUG")
        ));
    }

    #[test]
    fn test_lib_suffix_is_never_duplicated() {
        assert_eq!(with_lib_suffix("euser"), "euser.lib");
        assert_eq!(with_lib_suffix("euser.lib"), "euser.lib");
        assert_eq!(with_lib_suffix("euser.LIB"), "euser.LIB.lib");
    }

    #[test]
    fn test_relative_paths() {
        let base = PathBuf::from("/project/group");

        assert_eq!(relative_to(Path::new("/project/src/main.cpp"), &base), "../src/main.cpp");
        assert_eq!(relative_to(Path::new("/project/group/gen.cpp"), &base), "gen.cpp");
        assert_eq!(relative_to(Path::new("/project/group"), &base), ".");
    }

    #[test]
    fn test_unrelated_paths_are_kept() {
        let base = PathBuf::from("/project/group");
        assert_eq!(relative_to(Path::new("inc"), &base), "inc");
    }

    #[test]
    fn test_writer_lines() {
        let mut writer = DescriptorWriter::default();
        writer.keyword_line("TARGET", "app.exe");
        writer.indented_line("HEADER");
        writer.indented_keyword_line("LANG", "SC");
        writer.blank_line();

        let expected = format!(
            "{}app.exe\n  HEADER\n  {}SC\n\n",
            keyword_with_param("TARGET"),
            keyword_with_param("LANG")
        );
        assert_eq!(writer.into_contents(), expected);
    }
}
