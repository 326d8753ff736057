// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::env::current_dir;
use std::fs::create_dir_all;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::Fallible;
use crate::error::fail;
use crate::persist;
use crate::store::Store;
use crate::types::date::Date;

/// A collection directory and the store loaded from it.
pub struct Collection {
    pub directory: PathBuf,
    pub store_path: PathBuf,
    pub export_dir: PathBuf,
    pub store: Store,
}

impl Collection {
    pub fn new(directory: Option<String>, today: Date) -> Fallible<Self> {
        let directory: PathBuf = match directory {
            Some(dir) => PathBuf::from(dir),
            None => current_dir()?,
        };
        let directory = if directory.exists() {
            directory.canonicalize()?
        } else {
            return fail("directory does not exist.");
        };
        let config = Config::load(&directory)?;
        let store_path = directory.join(&config.store);
        let export_dir = directory.join(&config.export_dir);
        let store = persist::load(&store_path, today);
        log::debug!(
            "Loaded {} decks, {} cards from {}.",
            store.deck_names().count(),
            store.card_count(),
            store_path.display()
        );
        Ok(Self {
            directory,
            store_path,
            export_dir,
            store,
        })
    }

    /// Persist the store.
    pub fn save(&self) -> Fallible<()> {
        if let Some(parent) = self.store_path.parent() {
            if !parent.exists() {
                create_dir_all(parent)?;
            }
        }
        persist::save(&self.store_path, &self.store)
    }
}

#[cfg(test)]
mod tests {
    use std::fs::write;

    use tempfile::tempdir;

    use super::*;
    use crate::config::CONFIG_FILE;
    use crate::types::date::ymd;

    #[test]
    fn test_non_existent_directory() {
        let result = Collection::new(Some("./derpherp".to_string()), ymd(2024, 1, 1));
        let err = result.err().map(|e| e.to_string());
        assert_eq!(err, Some("error: directory does not exist.".to_string()));
    }

    #[test]
    fn test_empty_directory() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().display().to_string();
        let coll = Collection::new(Some(path), ymd(2024, 1, 1))?;
        assert_eq!(coll.store, Store::new());
        assert!(coll.store_path.ends_with("flashcards.json"));
        assert!(!coll.store_path.exists());
        Ok(())
    }

    #[test]
    fn test_save_and_reload() -> Fallible<()> {
        let dir = tempdir()?;
        write(
            dir.path().join(CONFIG_FILE),
            "store = \"data/store.json\"\n",
        )?;
        let path = dir.path().display().to_string();
        let mut coll = Collection::new(Some(path.clone()), ymd(2024, 1, 1))?;
        coll.store.create_deck("deck")?;
        coll.store.add_card("deck", "front", "back", ymd(2024, 1, 1))?;
        coll.save()?;
        assert!(dir.path().join("data").join("store.json").exists());
        let reloaded = Collection::new(Some(path), ymd(2024, 1, 1))?;
        assert_eq!(reloaded.store, coll.store);
        Ok(())
    }
}
