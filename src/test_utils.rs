//! Shared test helpers

pub mod test_helpers {
    use crate::app::App;
    use crate::config::Config;
    use crate::index::{DocIndex, Document, ModuleData, NavChild, NavGroup, PageData, Section};

    /// A small but fully populated index: two modules, three pages, a
    /// two-section document, and one nav group.
    pub fn test_index() -> DocIndex {
        let mut index = DocIndex::default();

        for (title, description, link) in [
            ("arrays", "dynamic arrays", "arrays.html"),
            ("maps", "hash maps", "maps.html"),
        ] {
            index.modules.index.push(title.to_string());
            index
                .modules
                .data
                .push(ModuleData(description.to_string(), link.to_string()));
        }

        for (title, badge, description, link, category) in [
            ("sort", "fn", "sorts in place", "arrays.html#sort", "builtin"),
            ("keys", "fn", "map keys", "maps.html#keys", "builtin"),
            ("Arrays", "doc", "", "arrays.html", "guide"),
        ] {
            index.pages.index.push(title.to_string());
            index.pages.data.push(PageData(
                badge.to_string(),
                description.to_string(),
                link.to_string(),
                category.to_string(),
            ));
        }

        index.document = Document {
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
        };

        index.nav = vec![NavGroup {
            title: "Modules".to_string(),
            link: None,
            children: vec![
                NavChild {
                    title: "arrays".to_string(),
                    link: "arrays.html".to_string(),
                    active: true,
                },
                NavChild {
                    title: "maps".to_string(),
                    link: "maps.html".to_string(),
                    active: false,
                },
            ],
        }];

        index
    }

    /// App over the test index, in --print mode so activation never
    /// touches a system opener, with an explicit dark-mode flag so no
    /// state file is read.
    pub fn test_app() -> App {
        App::with_dark_mode(test_index(), &Config::default(), true, true)
    }
}
