//! Filesystem-backed prompt storage.
//!
//! Prompts are plain Markdown files laid out as `<root>/<category>/<name>.md`.
//! The directory tree is the only source of truth: categories are the
//! first-level directories under the root and prompts are the `.md` files
//! inside them. No index, no metadata, no caching.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domains::prompts::PromptError;

/// Extension appended to prompt names on disk.
const PROMPT_EXTENSION: &str = ".md";

/// Storage accessor for the prompt tree.
///
/// All operations are synchronous filesystem calls. Paths are built by plain
/// joining; names and categories are used as given, without sanitization.
#[derive(Debug)]
pub struct PromptStore {
    root: PathBuf,
}

impl PromptStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, PromptError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| PromptError::storage(&root, e))?;
        Ok(Self { root })
    }

    /// Root directory of the prompt tree.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve the on-disk path for a prompt, creating its category
    /// directory if it does not exist yet.
    ///
    /// Every prompt-level operation goes through here, so looking up a
    /// prompt in a category that does not exist leaves the (empty) category
    /// directory behind even when the lookup then fails.
    fn prompt_path(&self, name: &str, category: &str) -> Result<PathBuf, PromptError> {
        let category_dir = self.root.join(category);
        fs::create_dir_all(&category_dir).map_err(|e| PromptError::storage(&category_dir, e))?;
        Ok(category_dir.join(format!("{name}{PROMPT_EXTENSION}")))
    }

    /// Write a prompt's content, overwriting any previous version.
    pub fn save(&self, name: &str, category: &str, content: &str) -> Result<(), PromptError> {
        let path = self.prompt_path(name, category)?;
        fs::write(&path, content).map_err(|e| PromptError::storage(&path, e))
    }

    /// Read a prompt's content.
    pub fn load(&self, name: &str, category: &str) -> Result<String, PromptError> {
        let path = self.prompt_path(name, category)?;
        if !path.is_file() {
            return Err(PromptError::not_found(name, category));
        }
        fs::read_to_string(&path).map_err(|e| PromptError::storage(&path, e))
    }

    /// Remove a prompt from disk.
    pub fn delete(&self, name: &str, category: &str) -> Result<(), PromptError> {
        let path = self.prompt_path(name, category)?;
        if !path.is_file() {
            return Err(PromptError::not_found(name, category));
        }
        fs::remove_file(&path).map_err(|e| PromptError::storage(&path, e))
    }

    /// List prompt names, grouped by category.
    ///
    /// With a category given, the result maps that single category to its
    /// prompt names; a category with no directory yields an empty list and
    /// nothing is created. Without one, every first-level directory under
    /// the root is listed. An empty category string is treated as absent.
    pub fn list_prompts(
        &self,
        category: Option<&str>,
    ) -> Result<HashMap<String, Vec<String>>, PromptError> {
        let mut prompts = HashMap::new();
        match category {
            Some(category) if !category.is_empty() => {
                let dir = self.root.join(category);
                let names = if dir.is_dir() {
                    self.prompt_names(&dir)?
                } else {
                    Vec::new()
                };
                prompts.insert(category.to_string(), names);
            }
            _ => {
                for category in self.list_categories()? {
                    let names = self.prompt_names(&self.root.join(&category))?;
                    prompts.insert(category, names);
                }
            }
        }
        Ok(prompts)
    }

    /// List every category, in no particular order.
    pub fn list_categories(&self) -> Result<Vec<String>, PromptError> {
        let entries = fs::read_dir(&self.root).map_err(|e| PromptError::storage(&self.root, e))?;
        let mut categories = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| PromptError::storage(&self.root, e))?;
            if entry.path().is_dir() {
                categories.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        Ok(categories)
    }

    /// Names of the `.md` entries in one category directory, extension
    /// stripped. Entries with any other suffix are skipped.
    fn prompt_names(&self, dir: &Path) -> Result<Vec<String>, PromptError> {
        let entries = fs::read_dir(dir).map_err(|e| PromptError::storage(dir, e))?;
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| PromptError::storage(dir, e))?;
            let file_name = entry.file_name().to_string_lossy().into_owned();
            if let Some(name) = file_name.strip_suffix(PROMPT_EXTENSION) {
                names.push(name.to_string());
            }
        }
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_store() -> (PromptStore, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = PromptStore::new(dir.path().join("prompts")).unwrap();
        (store, dir)
    }

    #[test]
    fn test_new_creates_root_directory() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("nested").join("prompts");
        let store = PromptStore::new(&root).unwrap();
        assert!(root.is_dir());
        assert_eq!(store.root(), root.as_path());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let (store, _dir) = test_store();
        let content = "You are a reviewer.\n\nBe thorough. Unicode: é, 猫.\n";
        store.save("review", "coding", content).unwrap();
        let loaded = store.load("review", "coding").unwrap();
        assert_eq!(loaded, content);
    }

    #[test]
    fn test_save_overwrites_existing_prompt() {
        let (store, _dir) = test_store();
        store.save("greet", "demo", "first").unwrap();
        store.save("greet", "demo", "second").unwrap();
        assert_eq!(store.load("greet", "demo").unwrap(), "second");
        let prompts = store.list_prompts(Some("demo")).unwrap();
        assert_eq!(prompts["demo"], vec!["greet".to_string()]);
    }

    #[test]
    fn test_save_creates_category_directory() {
        let (store, _dir) = test_store();
        store.save("greet", "brand-new", "hi").unwrap();
        assert!(store.root().join("brand-new").join("greet.md").is_file());
    }

    #[test]
    fn test_load_missing_prompt_not_found() {
        let (store, _dir) = test_store();
        store.save("other", "demo", "hi").unwrap();
        let err = store.load("ghost", "demo").unwrap_err();
        assert_eq!(err.to_string(), "'ghost' not found in 'demo'.");
    }

    #[test]
    fn test_load_on_missing_category_creates_it() {
        // Path resolution makes the category directory even when the
        // lookup itself then fails.
        let (store, _dir) = test_store();
        let err = store.load("ghost", "newcat").unwrap_err();
        assert!(matches!(err, PromptError::NotFound { .. }));
        assert!(store.root().join("newcat").is_dir());
        assert!(store.list_categories().unwrap().contains(&"newcat".to_string()));
    }

    #[test]
    fn test_delete_removes_prompt() {
        let (store, _dir) = test_store();
        store.save("old", "demo", "bye").unwrap();
        store.delete("old", "demo").unwrap();
        assert!(!store.root().join("demo").join("old.md").exists());
        let err = store.load("old", "demo").unwrap_err();
        assert_eq!(err.to_string(), "'old' not found in 'demo'.");
    }

    #[test]
    fn test_delete_missing_prompt_not_found() {
        let (store, _dir) = test_store();
        let err = store.delete("ghost", "demo").unwrap_err();
        assert_eq!(err.to_string(), "'ghost' not found in 'demo'.");
    }

    #[test]
    fn test_list_prompts_for_one_category() {
        let (store, _dir) = test_store();
        store.save("a", "coding", "1").unwrap();
        store.save("b", "coding", "2").unwrap();
        store.save("c", "writing", "3").unwrap();
        let prompts = store.list_prompts(Some("coding")).unwrap();
        assert_eq!(prompts.len(), 1);
        let mut names = prompts["coding"].clone();
        names.sort();
        assert_eq!(names, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_list_prompts_missing_category_is_empty_and_creates_nothing() {
        let (store, _dir) = test_store();
        let prompts = store.list_prompts(Some("nowhere")).unwrap();
        assert_eq!(prompts["nowhere"], Vec::<String>::new());
        assert!(!store.root().join("nowhere").exists());
    }

    #[test]
    fn test_list_prompts_across_all_categories() {
        let (store, _dir) = test_store();
        store.save("a", "coding", "1").unwrap();
        store.save("b", "writing", "2").unwrap();
        store.save("c", "writing", "3").unwrap();
        let prompts = store.list_prompts(None).unwrap();
        assert_eq!(prompts.len(), 2);
        assert_eq!(prompts["coding"], vec!["a".to_string()]);
        let mut writing = prompts["writing"].clone();
        writing.sort();
        assert_eq!(writing, vec!["b".to_string(), "c".to_string()]);
    }

    #[test]
    fn test_list_prompts_empty_category_string_lists_everything() {
        let (store, _dir) = test_store();
        store.save("a", "coding", "1").unwrap();
        let prompts = store.list_prompts(Some("")).unwrap();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts["coding"], vec!["a".to_string()]);
    }

    #[test]
    fn test_list_prompts_ignores_other_extensions() {
        let (store, _dir) = test_store();
        store.save("kept", "demo", "1").unwrap();
        fs::write(store.root().join("demo").join("notes.txt"), "x").unwrap();
        fs::write(store.root().join("demo").join("README"), "x").unwrap();
        let prompts = store.list_prompts(Some("demo")).unwrap();
        assert_eq!(prompts["demo"], vec!["kept".to_string()]);
    }

    #[test]
    fn test_prompt_name_may_contain_dots() {
        let (store, _dir) = test_store();
        store.save("v1.2-draft", "demo", "hi").unwrap();
        let prompts = store.list_prompts(Some("demo")).unwrap();
        assert_eq!(prompts["demo"], vec!["v1.2-draft".to_string()]);
        assert_eq!(store.load("v1.2-draft", "demo").unwrap(), "hi");
    }

    #[test]
    fn test_list_categories() {
        let (store, _dir) = test_store();
        store.save("a", "coding", "1").unwrap();
        store.save("b", "writing", "2").unwrap();
        fs::write(store.root().join("stray.md"), "x").unwrap();
        let mut categories = store.list_categories().unwrap();
        categories.sort();
        assert_eq!(categories, vec!["coding".to_string(), "writing".to_string()]);
    }

    #[test]
    fn test_list_categories_empty_store() {
        let (store, _dir) = test_store();
        assert!(store.list_categories().unwrap().is_empty());
    }
}
