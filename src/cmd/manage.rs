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

//! Commands that create and delete decks and cards.

use crate::collection::Collection;
use crate::error::Fallible;
use crate::types::card_id::CardId;
use crate::types::date::Date;

pub fn new_deck(directory: Option<String>, name: &str, today: Date) -> Fallible<String> {
    let mut coll = Collection::new(directory, today)?;
    let name = coll.store.create_deck(name)?;
    coll.save()?;
    log::info!("Created deck {name:?}.");
    Ok(name)
}

pub fn delete_deck(directory: Option<String>, name: &str, today: Date) -> Fallible<usize> {
    let mut coll = Collection::new(directory, today)?;
    let deck = coll.store.delete_deck(name)?;
    coll.save()?;
    log::info!("Deleted deck {name:?} with {} cards.", deck.len());
    Ok(deck.len())
}

pub fn add_card(
    directory: Option<String>,
    deck_name: &str,
    front: &str,
    back: &str,
    today: Date,
) -> Fallible<CardId> {
    let mut coll = Collection::new(directory, today)?;
    let id = coll.store.add_card(deck_name, front, back, today)?;
    coll.save()?;
    log::info!("Added card {id} to {deck_name:?}.");
    Ok(id)
}
