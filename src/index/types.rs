use serde::Deserialize;

/// `(description, link)` — index-aligned with the module titles sequence.
#[derive(Debug, Clone, Deserialize)]
pub struct ModuleData(pub String, pub String);

impl ModuleData {
    pub fn description(&self) -> &str {
        &self.0
    }

    pub fn link(&self) -> &str {
        &self.1
    }
}

/// `(badge, description, link, category)` — index-aligned with the page
/// titles sequence. The category label prefixes the rendered title of a
/// page result and is part of its sort key.
#[derive(Debug, Clone, Deserialize)]
pub struct PageData(pub String, pub String, pub String, pub String);

impl PageData {
    pub fn badge(&self) -> &str {
        &self.0
    }

    pub fn description(&self) -> &str {
        &self.1
    }

    pub fn link(&self) -> &str {
        &self.2
    }

    pub fn category(&self) -> &str {
        &self.3
    }
}

/// A pair of parallel sequences: titles and per-title data, matched by
/// position. Both must have equal length; the loader truncates to the
/// shorter prefix when the generator violated that.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ParallelIndex<T> {
    pub index: Vec<String>,
    pub data: Vec<T>,
}

// Not derived: that would require `T: Default`
impl<T> Default for ParallelIndex<T> {
    fn default() -> Self {
        Self {
            index: Vec::new(),
            data: Vec::new(),
        }
    }
}

impl<T> ParallelIndex<T> {
    pub fn entries(&self) -> impl Iterator<Item = (&str, &T)> {
        self.index
            .iter()
            .map(String::as_str)
            .zip(self.data.iter())
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Enforce the equal-length invariant by dropping the unmatched tail.
    pub(crate) fn truncate_to_shorter(&mut self) -> bool {
        let shorter = self.index.len().min(self.data.len());
        let mismatched = self.index.len() != self.data.len();
        self.index.truncate(shorter);
        self.data.truncate(shorter);
        mismatched
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Section {
    pub id: String,
    pub heading: String,
    #[serde(default)]
    pub body: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Document {
    pub title: String,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NavChild {
    pub title: String,
    pub link: String,
    /// Marks the entry for the currently generated document.
    #[serde(default)]
    pub active: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NavGroup {
    pub title: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub children: Vec<NavChild>,
}

/// The whole index file. Every field is optional in the JSON; anything the
/// generator left out shows up as empty and renders as empty, never as an
/// error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DocIndex {
    pub modules: ParallelIndex<ModuleData>,
    pub pages: ParallelIndex<PageData>,
    pub document: Document,
    pub nav: Vec<NavGroup>,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
