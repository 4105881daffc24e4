//! Line-prefix formatter for generated grammar lessons.
//!
//! Only `#`, `##`, `###` headings and `-` list items are recognized; every
//! other line, including blank ones, is a paragraph. This is not a markdown
//! parser and must not grow into one.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LessonBlock {
    Heading1(String),
    Heading2(String),
    Heading3(String),
    ListItem(String),
    Paragraph(String),
}

/// Longest prefix first.
const PREFIXES: [(&str, fn(String) -> LessonBlock); 4] = [
    ("###", LessonBlock::Heading3),
    ("##", LessonBlock::Heading2),
    ("#", LessonBlock::Heading1),
    ("-", LessonBlock::ListItem),
];

pub fn parse_line(line: &str) -> LessonBlock {
    for (prefix, make) in PREFIXES {
        if let Some(rest) = line.strip_prefix(prefix) {
            return make(rest.trim_start().to_string());
        }
    }
    LessonBlock::Paragraph(line.to_string())
}

pub fn parse_lesson(text: &str) -> Vec<LessonBlock> {
    text.lines().map(parse_line).collect()
}
