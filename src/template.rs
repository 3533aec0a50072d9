//! Placeholder scanning for path templates.
//!
//! A placeholder is a `{`, the shortest run of characters up to the next
//! `}`, and that `}`. A placeholder never spans a line break.

use std::ops::Range;

/// A `{name}` placeholder located in a template by byte offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    span: Range<usize>,
}

impl Placeholder {
    /// Byte range of the placeholder, braces included.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// The placeholder as written, e.g. `{dir_name}`.
    pub fn text<'a>(&self, template: &'a str) -> &'a str {
        &template[self.span.clone()]
    }

    /// The variable name between the braces, e.g. `dir_name`.
    pub fn name<'a>(&self, template: &'a str) -> &'a str {
        &template[self.span.start + 1..self.span.end - 1]
    }
}

/// Finds every placeholder in `template`, left to right.
pub fn scan(template: &str) -> Vec<Placeholder> {
    let mut found = Vec::new();
    let mut offset = 0;

    while let Some(open) = template[offset..].find('{') {
        let start = offset + open;
        let rest = &template[start + 1..];

        match rest.find(['}', '\n']) {
            Some(i) if rest.as_bytes()[i] == b'}' => {
                let end = start + 1 + i + 1;
                found.push(Placeholder { span: start..end });
                offset = end;
            }
            // No closing brace on this line; retry from the next character
            _ => offset = start + 1,
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(template: &str) -> Vec<&str> {
        scan(template).iter().map(|p| p.text(template)).collect()
    }

    #[test]
    fn test_finds_placeholders_in_order() {
        let template = "test/bar/{dir_name}/{file_name}.txt";
        assert_eq!(texts(template), ["{dir_name}", "{file_name}"]);

        let names: Vec<_> = scan(template).iter().map(|p| p.name(template)).collect();
        assert_eq!(names, ["dir_name", "file_name"]);
    }

    #[test]
    fn test_no_placeholders() {
        assert!(scan("plain/path.txt").is_empty());
        assert!(scan("").is_empty());
    }

    #[test]
    fn test_adjacent_and_repeated() {
        assert_eq!(texts("~/test/{a}{a}"), ["{a}", "{a}"]);
    }

    #[test]
    fn test_shortest_match() {
        assert_eq!(texts("{a{b}c}"), ["{a{b}"]);
        assert_eq!(texts("{}"), ["{}"]);
    }

    #[test]
    fn test_unclosed_brace() {
        assert!(scan("dir/{unclosed").is_empty());
        assert_eq!(texts("{open/{closed}"), ["{open/{closed}"]);
    }

    #[test]
    fn test_does_not_cross_lines() {
        assert_eq!(texts("{a\nb}{c}"), ["{c}"]);
    }

    #[test]
    fn test_span_offsets() {
        let found = scan("ab{cd}");
        assert_eq!(found[0].span(), 2..6);
    }
}
