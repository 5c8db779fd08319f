//! Header-delimited sections, the unit of indexing and of search results.

use ahash::AHashSet;

/// Markdown header marker.
const HEADER_MARKER: char = '#';

/// A contiguous span of a document between two headers.
#[derive(Debug, Clone)]
pub struct Section {
    /// Header text, or the file name for text before the first header
    pub title: String,
    /// Lines following the header, joined with `\n`
    pub content: String,
    /// Number of header markers; 0 for the file-level section
    pub level: usize,
    /// 1-based line number of the header (1 for the file-level section)
    pub start_line: usize,
    /// Path relative to the documentation root
    pub file: String,
    /// Case-folded tokens of `content`
    pub words: AHashSet<String>,
}

/// Section under construction: lines are collected until the next header.
struct Pending {
    title: String,
    level: usize,
    start_line: usize,
    lines: Vec<String>,
}

impl Pending {
    /// Yields the finished section, or `None` if no line was accumulated.
    fn finish(self, file: &str, index: &mut impl FnMut(&str) -> AHashSet<String>) -> Option<Section> {
        if self.lines.is_empty() {
            return None;
        }
        let content = self.lines.join("\n");
        let words = index(&content);
        Some(Section {
            title: self.title,
            content,
            level: self.level,
            start_line: self.start_line,
            file: file.to_string(),
            words,
        })
    }
}

/// Splits `content` into sections at markdown headers.
///
/// A line whose trimmed form starts with `#` opens a new section; its level is
/// the number of leading `#` and its title is the line with markers and
/// surrounding whitespace removed. The header line itself is not part of the
/// section's content. Text before the first header forms a level-0 section
/// titled `file_name`. Sections that collected no lines are dropped.
///
/// `index` derives each section's token set; callers pass the vocabulary's
/// indexer so that every token also reaches the candidate word set.
pub fn extract_sections(
    content: &str,
    file: &str,
    file_name: &str,
    mut index: impl FnMut(&str) -> AHashSet<String>,
) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current = Pending {
        title: file_name.to_string(),
        level: 0,
        start_line: 1,
        lines: Vec::new(),
    };

    for (line_num, line) in content.split('\n').enumerate() {
        let trimmed = line.trim();
        if trimmed.starts_with(HEADER_MARKER) {
            let level = trimmed.chars().take_while(|&c| c == HEADER_MARKER).count();
            let title = trimmed.trim_matches(HEADER_MARKER).trim().to_string();
            let next = Pending {
                title,
                level,
                start_line: line_num + 1,
                lines: Vec::new(),
            };
            let finished = std::mem::replace(&mut current, next);
            sections.extend(finished.finish(file, &mut index));
        } else {
            current.lines.push(line.to_string());
        }
    }

    sections.extend(current.finish(file, &mut index));
    sections
}
