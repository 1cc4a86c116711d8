//! Attachment picker: a directory browser with fuzzy filtering

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::path::PathBuf;

use super::App;

impl App {
    pub fn open_file_browser(&mut self) {
        self.show_file_browser = true;
        self.file_browser_search.clear();
        self.load_file_browser_items();
    }

    pub fn close_file_browser(&mut self) {
        self.show_file_browser = false;
        self.file_browser_items.clear();
        self.file_browser_selected = 0;
        self.file_browser_search.clear();
    }

    pub fn load_file_browser_items(&mut self) {
        let mut items = Vec::new();

        // Parent directory first, for navigating back up.
        if let Some(parent) = self.current_dir.parent() {
            items.push(parent.to_path_buf());
        }

        if let Ok(entries) = std::fs::read_dir(&self.current_dir) {
            for entry in entries.flatten() {
                items.push(entry.path());
            }
        }

        // Directories before files, each group by name.
        items.sort_by(|a, b| match (a.is_dir(), b.is_dir()) {
            (true, false) => std::cmp::Ordering::Less,
            (false, true) => std::cmp::Ordering::Greater,
            _ => a.file_name().cmp(&b.file_name()),
        });

        self.file_browser_items = items;
        self.file_browser_selected = 0;
    }

    /// Items matching the current search, best score first. An empty
    /// search keeps directory order.
    pub fn filtered_file_browser_items(&self) -> Vec<&PathBuf> {
        filter_paths(&self.file_browser_items, &self.file_browser_search)
    }

    pub fn file_browser_next(&mut self) {
        let count = self.filtered_file_browser_items().len();
        if self.file_browser_selected + 1 < count {
            self.file_browser_selected += 1;
        }
    }

    pub fn file_browser_previous(&mut self) {
        if self.file_browser_selected > 0 {
            self.file_browser_selected -= 1;
        }
    }

    /// Enter on a directory navigates into it; Enter on a file attaches
    /// its name to the next message and closes the picker.
    pub fn file_browser_select(&mut self) {
        let path = match self
            .filtered_file_browser_items()
            .get(self.file_browser_selected)
        {
            Some(path) => (*path).clone(),
            None => return,
        };

        if path.is_dir() {
            self.current_dir = path;
            self.file_browser_search.clear();
            self.load_file_browser_items();
        } else {
            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("?")
                .to_string();
            if !self.pending_attachments.contains(&name) {
                self.pending_attachments.push(name);
            }
            self.close_file_browser();
        }
    }
}

/// Fuzzy-filter `paths` by file name against `search`.
fn filter_paths<'a>(paths: &'a [PathBuf], search: &str) -> Vec<&'a PathBuf> {
    if search.is_empty() {
        return paths.iter().collect();
    }

    let matcher = SkimMatcherV2::default();
    let mut scored: Vec<(i64, &PathBuf)> = paths
        .iter()
        .filter_map(|path| {
            let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
            matcher.fuzzy_match(name, search).map(|score| (score, path))
        })
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, path)| path).collect()
}
