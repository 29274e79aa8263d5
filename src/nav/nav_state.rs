use crate::index::{Document, NavGroup};
use crate::scroll::ScrollState;

#[derive(Debug, Clone)]
pub struct NavEntry {
    pub title: String,
    pub link: String,
    /// Marks the entry for the current document
    pub active: bool,
}

#[derive(Debug, Clone)]
struct Group {
    title: String,
    entries: Vec<NavEntry>,
    open: bool,
    /// Group 0 holds the TOC; its entries jump within the document
    toc: bool,
}

/// One visible row of the flattened navigation tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavRow {
    Group(usize),
    /// `(group, entry)` into the group's entry list
    Entry(usize, usize),
}

/// What activating the cursor row asks the app to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavCommand {
    JumpToSection(usize),
    OpenLink(String),
}

pub struct NavState {
    pub visible: bool,
    groups: Vec<Group>,
    /// Scroll-spy highlight: TOC entry of the section at the viewport top
    active_toc: Option<usize>,
    cursor: usize,
    pub scroll: ScrollState,
    /// Last seen content offset, for scroll-direction anchoring
    last_content_offset: u16,
    /// Row to center once the first render has established bounds
    pending_center: Option<u16>,
}

impl NavState {
    pub fn new(nav: &[NavGroup], document: &Document) -> Self {
        let mut groups = Vec::with_capacity(nav.len() + 1);

        let toc_entries: Vec<NavEntry> = document
            .sections
            .iter()
            .map(|section| NavEntry {
                title: section.heading.clone(),
                link: format!("#{}", section.id),
                active: false,
            })
            .collect();
        groups.push(Group {
            title: if document.title.is_empty() {
                "Contents".to_string()
            } else {
                document.title.clone()
            },
            entries: toc_entries,
            open: true,
            toc: true,
        });

        for nav_group in nav {
            groups.push(Group {
                title: nav_group.title.clone(),
                entries: nav_group
                    .children
                    .iter()
                    .map(|child| NavEntry {
                        title: child.title.clone(),
                        link: child.link.clone(),
                        active: child.active,
                    })
                    .collect(),
                open: true,
                toc: false,
            });
        }

        let mut state = Self {
            visible: true,
            groups,
            active_toc: None,
            cursor: 0,
            scroll: ScrollState::new(),
            last_content_offset: 0,
            pending_center: None,
        };
        state.center_on_active_entry();
        state
    }

    /// Deferred startup centering, applied by the first render once the
    /// pane's scroll bounds are known.
    pub fn take_pending_center(&mut self) -> Option<u16> {
        self.pending_center.take()
    }

    pub fn toggle_visible(&mut self) {
        self.visible = !self.visible;
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn group_title(&self, g: usize) -> Option<&str> {
        self.groups.get(g).map(|group| group.title.as_str())
    }

    pub fn is_open(&self, g: usize) -> bool {
        self.groups.get(g).is_some_and(|group| group.open)
    }

    pub fn toggle_group(&mut self, g: usize) {
        if let Some(group) = self.groups.get_mut(g) {
            group.open = !group.open;
        }
        self.clamp_cursor();
    }

    pub fn entry(&self, g: usize, e: usize) -> Option<&NavEntry> {
        self.groups.get(g).and_then(|group| group.entries.get(e))
    }

    pub fn active_toc(&self) -> Option<usize> {
        self.active_toc
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Flatten the tree into its visible rows. Collapsed groups keep their
    /// header row and hide their children.
    pub fn rows(&self) -> Vec<NavRow> {
        let mut rows = Vec::new();
        for (g, group) in self.groups.iter().enumerate() {
            rows.push(NavRow::Group(g));
            if group.open {
                for e in 0..group.entries.len() {
                    rows.push(NavRow::Entry(g, e));
                }
            }
        }
        rows
    }

    pub fn cursor_down(&mut self) {
        let count = self.rows().len();
        if count > 0 && self.cursor < count - 1 {
            self.cursor += 1;
        }
        self.scroll_cursor_into_view();
    }

    pub fn cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
        self.scroll_cursor_into_view();
    }

    /// Activate the cursor row: group headers toggle open/collapsed, TOC
    /// entries jump within the document, link entries open their target.
    pub fn activate_cursor(&mut self) -> Option<NavCommand> {
        match self.rows().get(self.cursor).copied()? {
            NavRow::Group(g) => {
                self.toggle_group(g);
                None
            }
            NavRow::Entry(g, e) => {
                let toc = self.groups[g].toc;
                let entry = &self.groups[g].entries[e];
                if toc {
                    Some(NavCommand::JumpToSection(e))
                } else {
                    Some(NavCommand::OpenLink(entry.link.clone()))
                }
            }
        }
    }

    pub fn link_at_cursor(&self) -> Option<&str> {
        match self.rows().get(self.cursor).copied()? {
            NavRow::Group(_) => None,
            NavRow::Entry(g, e) => self.entry(g, e).map(|entry| entry.link.as_str()),
        }
    }

    /// Scroll-spy: recompute the highlighted TOC entry from the content
    /// scroll position and keep it visible. Scrolling down anchors the
    /// entry toward the bottom edge of the pane, scrolling up toward the
    /// top.
    pub fn sync_active(&mut self, content_offset: u16, section_starts: &[u16]) {
        self.active_toc = section_starts
            .iter()
            .position(|&start| start >= content_offset);

        if let Some(i) = self.active_toc {
            // Collapsed TOC has no row to reveal; skip silently
            if let Some(row) = self.row_of_toc(i) {
                if content_offset > self.last_content_offset {
                    self.scroll.ensure_visible_end(row);
                } else {
                    self.scroll.ensure_visible(row);
                }
            }
        }
        self.last_content_offset = content_offset;
    }

    pub fn row_of_toc(&self, toc_entry: usize) -> Option<u16> {
        self.rows()
            .iter()
            .position(|&row| row == NavRow::Entry(0, toc_entry))
            .map(|row| row.min(u16::MAX as usize) as u16)
    }

    fn clamp_cursor(&mut self) {
        let count = self.rows().len();
        if count == 0 {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(count - 1);
        }
    }

    fn scroll_cursor_into_view(&mut self) {
        let row = self.cursor.min(u16::MAX as usize) as u16;
        self.scroll.ensure_visible(row);
    }

    /// Startup positioning: put the cursor on the entry marked active and
    /// center it in the pane.
    fn center_on_active_entry(&mut self) {
        let rows = self.rows();
        let active_row = rows.iter().position(|&row| match row {
            NavRow::Entry(g, e) => self.groups[g].entries[e].active,
            NavRow::Group(_) => false,
        });
        if let Some(row) = active_row {
            self.cursor = row;
            self.pending_center = Some(row.min(u16::MAX as usize) as u16);
        }
    }
}

#[cfg(test)]
#[path = "nav_state_tests.rs"]
mod nav_state_tests;
