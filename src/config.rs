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

use std::fs::read_to_string;
use std::path::Path;

use serde::Deserialize;

use crate::error::Fallible;

/// The name of the optional configuration file in a collection directory.
pub const CONFIG_FILE: &str = "flashdeck.toml";

/// Collection settings, read from `flashdeck.toml`.
#[derive(Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// The store file, relative to the collection directory.
    pub store: String,
    /// Where CSV exports are written, relative to the collection directory.
    pub export_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: "flashcards.json".to_string(),
            export_dir: ".".to_string(),
        }
    }
}

impl Config {
    /// Read the configuration of the collection in `directory`. Missing
    /// configuration means the defaults.
    pub fn load(directory: &Path) -> Fallible<Self> {
        let path = directory.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;
        log::debug!("Loaded configuration from {}.", path.display());
        Ok(config)
    }
}
