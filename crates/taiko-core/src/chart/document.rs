use std::collections::HashMap;

use super::decode::decode_chart;

/// Name of the section holding lines that precede the first header.
pub const DEFAULT_SECTION: &str = "Default";

/// A chart file split into `[Section]` blocks.
///
/// Each section keeps its trimmed lines in file order. A header that appears
/// twice replaces the earlier section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartDocument {
    sections: HashMap<String, Vec<String>>,
}

impl ChartDocument {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::parse(&decode_chart(bytes))
    }

    pub fn parse(text: &str) -> Self {
        let mut sections = HashMap::new();
        let mut current: Option<(String, Vec<String>)> = None;

        for line in text.lines() {
            let line = line.trim();

            if let Some(name) = section_header(line) {
                if let Some((name, lines)) = current.take() {
                    sections.insert(name, lines);
                }
                current = Some((name.to_string(), Vec::new()));
                continue;
            }

            current
                .get_or_insert_with(|| (DEFAULT_SECTION.to_string(), Vec::new()))
                .1
                .push(line.to_string());
        }

        if let Some((name, lines)) = current {
            sections.insert(name, lines);
        }

        Self { sections }
    }

    pub fn section(&self, name: &str) -> Option<&[String]> {
        self.sections.get(name).map(Vec::as_slice)
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Look up `key: value` in a section.
    ///
    /// Keys match case-insensitively and lines split on their first colon
    /// only, so values may contain colons. Lines without a colon are skipped.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section)?
            .iter()
            .filter_map(|line| line.split_once(':'))
            .find(|(k, _)| k.trim().eq_ignore_ascii_case(key))
            .map(|(_, v)| v.trim())
    }

    pub fn get_or<'a>(&'a self, section: &str, key: &str, default: &'a str) -> &'a str {
        self.get(section, key).unwrap_or(default)
    }
}

/// Returns the name in a `[word]` line. The brackets must span the whole line
/// and the name may only hold letters, digits and underscores.
fn section_header(line: &str) -> Option<&str> {
    let name = line.strip_prefix('[')?.strip_suffix(']')?;
    let is_word = !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '_');
    is_word.then_some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "osu file format v14\r\n\
        \r\n\
        [General]\r\n\
        AudioFilename: audio.mp3\r\n\
        PreviewTime: 12345\r\n\
        \r\n\
        [Metadata]\r\n\
        Title:Sample\r\n\
        Source:http://example.com/a:b\r\n";

    #[test]
    fn test_parse_sections() {
        let doc = ChartDocument::parse(SAMPLE);

        assert_eq!(doc.len(), 3);
        assert_eq!(
            doc.section("Default").unwrap(),
            ["osu file format v14".to_string(), String::new()]
        );
        assert_eq!(
            doc.section("General").unwrap(),
            [
                "AudioFilename: audio.mp3".to_string(),
                "PreviewTime: 12345".to_string(),
                String::new(),
            ]
        );
        assert_eq!(doc.section("Metadata").unwrap().len(), 2);
    }

    #[test]
    fn test_parse_empty() {
        let doc = ChartDocument::parse("");
        assert!(doc.is_empty());
        assert!(ChartDocument::from_bytes(b"").is_empty());
    }

    #[test]
    fn test_parse_without_headers() {
        let doc = ChartDocument::parse("  first \nsecond\n\n third");

        assert_eq!(doc.section_names().collect::<Vec<_>>(), ["Default"]);
        assert_eq!(
            doc.section(DEFAULT_SECTION).unwrap(),
            ["first", "second", "", "third"]
        );
    }

    #[test]
    fn test_malformed_headers_are_content() {
        let doc = ChartDocument::parse("[Events]\n[two words]\n[Open\n[]\n[a]b\n[x-y]\n x[y]");

        assert_eq!(doc.len(), 1);
        assert_eq!(
            doc.section("Events").unwrap(),
            ["[two words]", "[Open", "[]", "[a]b", "[x-y]", "x[y]"]
        );
    }

    #[test]
    fn test_header_with_surrounding_whitespace() {
        let doc = ChartDocument::parse("   [General]  \nPreviewTime: 1");
        assert_eq!(doc.get("General", "PreviewTime"), Some("1"));
    }

    #[test]
    fn test_empty_section() {
        let doc = ChartDocument::parse("[General]\n[Metadata]\nTitle:x");
        assert_eq!(doc.section("General").unwrap().len(), 0);
        assert_eq!(doc.get("Metadata", "title"), Some("x"));
    }

    #[test]
    fn test_duplicate_section_replaces() {
        let doc = ChartDocument::parse("[General]\nA:1\n[General]\nB:2");
        assert_eq!(doc.get("General", "A"), None);
        assert_eq!(doc.get("General", "B"), Some("2"));
    }

    #[test]
    fn test_nul_bytes_stripped() {
        let doc = ChartDocument::from_bytes(b"[Gen\0eral]\nPreview\0Time: 5\0\0");
        assert_eq!(doc.get("General", "PreviewTime"), Some("5"));
    }

    #[test]
    fn test_get_case_insensitive() {
        let doc = ChartDocument::parse(SAMPLE);
        assert_eq!(doc.get("General", "previewtime"), Some("12345"));
        assert_eq!(doc.get("General", "PREVIEWTIME"), Some("12345"));
    }

    #[test]
    fn test_get_splits_on_first_colon() {
        let doc = ChartDocument::parse(SAMPLE);
        assert_eq!(doc.get("Metadata", "Source"), Some("http://example.com/a:b"));
    }

    #[test]
    fn test_get_first_match_wins() {
        let doc = ChartDocument::parse("[General]\nMode: 1\nmode: 3");
        assert_eq!(doc.get("General", "Mode"), Some("1"));
    }

    #[test]
    fn test_get_skips_lines_without_colon() {
        let doc = ChartDocument::parse("[General]\nno colon here\n\nPreviewTime: 77");
        assert_eq!(doc.get("General", "PreviewTime"), Some("77"));
        assert_eq!(doc.get("General", "no colon here"), None);
    }

    #[test]
    fn test_get_or_default() {
        let doc = ChartDocument::parse(SAMPLE);
        assert_eq!(doc.get_or("General", "Countdown", "0"), "0");
        assert_eq!(doc.get_or("Difficulty", "PreviewTime", "0"), "0");
        assert_eq!(doc.get_or("General", "PreviewTime", "0"), "12345");
    }
}
