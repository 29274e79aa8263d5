//! Content pane
//!
//! The current document rendered as scrollable text. Section start lines
//! are recorded at build time so the scroll-spy can map a scroll offset
//! back to the section at the top of the viewport.

use crate::index::Document;
use crate::scroll::ScrollState;

#[derive(Debug, Clone)]
pub struct ContentLine {
    pub text: String,
    pub heading: bool,
}

pub struct ContentState {
    pub title: String,
    lines: Vec<ContentLine>,
    /// Start line of each section, in document order
    section_starts: Vec<u16>,
    /// TOC link targets, index-aligned with `section_starts`
    section_ids: Vec<String>,
    pub scroll: ScrollState,
}

impl ContentState {
    pub fn new(document: &Document) -> Self {
        let mut lines = Vec::new();
        let mut section_starts = Vec::new();
        let mut section_ids = Vec::new();

        for section in &document.sections {
            section_starts.push(lines.len().min(u16::MAX as usize) as u16);
            section_ids.push(section.id.clone());

            lines.push(ContentLine {
                text: section.heading.clone(),
                heading: true,
            });
            for body_line in section.body.lines() {
                lines.push(ContentLine {
                    text: body_line.to_string(),
                    heading: false,
                });
            }
            lines.push(ContentLine {
                text: String::new(),
                heading: false,
            });
        }

        Self {
            title: document.title.clone(),
            lines,
            section_starts,
            section_ids,
            scroll: ScrollState::new(),
        }
    }

    pub fn lines(&self) -> &[ContentLine] {
        &self.lines
    }

    pub fn line_count(&self) -> u32 {
        self.lines.len().min(u32::MAX as usize) as u32
    }

    pub fn section_starts(&self) -> &[u16] {
        &self.section_starts
    }

    pub fn section_count(&self) -> usize {
        self.section_starts.len()
    }

    pub fn section_id(&self, i: usize) -> Option<&str> {
        self.section_ids.get(i).map(String::as_str)
    }

    /// Scroll-spy target: the first section whose start is at or below the
    /// top of the viewport. `None` once scrolled past every section start.
    pub fn section_at_offset(&self, offset: u16) -> Option<usize> {
        self.section_starts.iter().position(|&start| start >= offset)
    }

    /// Jump the viewport to the start of section `i`.
    pub fn jump_to_section(&mut self, i: usize) {
        if let Some(&start) = self.section_starts.get(i) {
            self.scroll.offset = start.min(self.scroll.max_offset);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::Section;

    fn document() -> Document {
        Document {
            title: "arrays".to_string(),
            sections: vec![
                Section {
                    id: "init".to_string(),
                    heading: "Initialization".to_string(),
                    body: "a := []int{}\nb := [3]int{}".to_string(),
                },
                Section {
                    id: "sort".to_string(),
                    heading: "Sorting".to_string(),
                    body: "a.sort()".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_lines_and_section_starts() {
        let content = ContentState::new(&document());

        // heading + 2 body + blank, heading + 1 body + blank
        assert_eq!(content.line_count(), 7);
        assert_eq!(content.section_starts(), &[0, 4]);
        assert!(content.lines()[0].heading);
        assert!(!content.lines()[1].heading);
        assert!(content.lines()[4].heading);
    }

    #[test]
    fn test_section_ids_align_with_starts() {
        let content = ContentState::new(&document());
        assert_eq!(content.section_id(0), Some("init"));
        assert_eq!(content.section_id(1), Some("sort"));
        assert_eq!(content.section_id(2), None);
    }

    #[test]
    fn test_section_at_offset_picks_first_at_or_below() {
        let content = ContentState::new(&document());

        assert_eq!(content.section_at_offset(0), Some(0));
        assert_eq!(content.section_at_offset(1), Some(1));
        assert_eq!(content.section_at_offset(4), Some(1));
        // Past every section start
        assert_eq!(content.section_at_offset(5), None);
    }

    #[test]
    fn test_jump_to_section() {
        let mut content = ContentState::new(&document());
        content.scroll.update_bounds(content.line_count(), 3);

        content.jump_to_section(1);
        assert_eq!(content.scroll.offset, 4);

        // Out-of-range index is ignored
        content.jump_to_section(9);
        assert_eq!(content.scroll.offset, 4);
    }

    #[test]
    fn test_empty_document() {
        let content = ContentState::new(&Document::default());
        assert_eq!(content.line_count(), 0);
        assert_eq!(content.section_count(), 0);
        assert_eq!(content.section_at_offset(0), None);
    }
}
