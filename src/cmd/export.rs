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

use std::fs::create_dir_all;
use std::path::PathBuf;

use crate::collection::Collection;
use crate::error::Fallible;
use crate::export::export_deck;
use crate::store::Rejection;
use crate::types::date::Date;

pub fn export_to_csv(directory: Option<String>, deck_name: &str, today: Date) -> Fallible<PathBuf> {
    let coll = Collection::new(directory, today)?;
    let deck = coll.store.deck(deck_name).ok_or(Rejection::NoSuchDeck)?;
    if !coll.export_dir.exists() {
        create_dir_all(&coll.export_dir)?;
    }
    export_deck(&coll.export_dir, deck_name, deck)
}
