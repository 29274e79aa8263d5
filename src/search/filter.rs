use memchr::memmem;

use crate::index::DocIndex;

/// A single rendered search result. Rebuilt from the index on every filter
/// run, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub badge: Option<String>,
    pub description: Option<String>,
    pub link: String,
    pub title: String,
}

/// The rendered result list. Module results come first, in index order;
/// page results follow, sorted by their composite title. `module_count`
/// marks where the separator between the two groups goes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    pub results: Vec<SearchResult>,
    pub module_count: usize,
}

impl ResultSet {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// A separator renders after the module group whenever any module
    /// matched.
    pub fn has_separator(&self) -> bool {
        self.module_count > 0
    }
}

/// What the panel should do in response to a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    /// Empty query: hide the panel, restore the default navigation view.
    Reset,
    /// Single-character query: too short, leave the panel untouched.
    Ignore,
    /// Replace the rendered results with this set.
    Show(ResultSet),
}

/// Filter both index groups by substring match against `query`.
///
/// Module titles are pre-lowercased by the generator, so the lowercased
/// query is matched against them as-is; page titles are lowercased here
/// before matching. Page results render under their composite title
/// (`category` + space + title) and are sorted by it; the sort is stable so
/// ties keep index order.
pub fn run_filter(index: &DocIndex, query: &str) -> FilterAction {
    if query.is_empty() {
        return FilterAction::Reset;
    }
    // A single character matches too much to be useful
    if query.chars().count() == 1 {
        return FilterAction::Ignore;
    }

    let needle = query.to_lowercase();
    let finder = memmem::Finder::new(needle.as_bytes());

    let mut results = Vec::new();
    for (title, data) in index.modules.entries() {
        if finder.find(title.as_bytes()).is_none() {
            continue;
        }
        results.push(SearchResult {
            badge: Some("module".to_string()),
            description: non_empty(data.description()),
            link: data.link().to_string(),
            title: title.to_string(),
        });
    }
    let module_count = results.len();

    let mut pages: Vec<SearchResult> = index
        .pages
        .entries()
        .filter(|(title, _)| finder.find(title.to_lowercase().as_bytes()).is_some())
        .map(|(title, data)| SearchResult {
            badge: non_empty(data.badge()),
            description: non_empty(data.description()),
            link: data.link().to_string(),
            title: format!("{} {}", data.category(), title),
        })
        .collect();
    // Vec::sort_by is stable: equal composite titles keep input order
    pages.sort_by(|a, b| a.title.cmp(&b.title));

    results.extend(pages);

    FilterAction::Show(ResultSet {
        results,
        module_count,
    })
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod filter_tests;
