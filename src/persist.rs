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

//! Reading and writing the JSON store file.
//!
//! Reading is tolerant: the file is first deserialized into loosely-typed
//! records, which are then normalized into the strict model. Missing or
//! malformed scheduling fields get their defaults, and a file that cannot be
//! read at all yields an empty store.

use std::collections::BTreeMap;
use std::collections::HashSet;
use std::fs::File;
use std::fs::read_to_string;
use std::fs::rename;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde_json::Value;

use crate::error::Fallible;
use crate::schedule::Schedule;
use crate::store::Store;
use crate::types::card::Card;
use crate::types::card_id::CardId;
use crate::types::date::Date;
use crate::types::deck::Deck;
use crate::types::ease::Ease;

#[derive(Deserialize)]
struct RawStore {
    #[serde(default)]
    decks: BTreeMap<String, RawDeck>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct RawDeck {
    cards: Vec<RawCard>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct RawCard {
    id: Option<Value>,
    front: Option<Value>,
    back: Option<Value>,
    repetitions: Option<Value>,
    interval: Option<Value>,
    #[serde(alias = "ef")]
    ease: Option<Value>,
    due: Option<Value>,
}

/// Load the store at `path`.
///
/// A missing file is an empty store. So is a file that cannot be read or
/// parsed, after logging a warning. `today` is the due date given to cards
/// whose due date is missing or unparsable.
pub fn load(path: &Path, today: Date) -> Store {
    if !path.exists() {
        log::debug!("No store at {}, starting empty.", path.display());
        return Store::new();
    }
    let content = match read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            log::warn!("Could not read {}: {e}. Starting fresh.", path.display());
            return Store::new();
        }
    };
    match serde_json::from_str::<RawStore>(&content) {
        Ok(raw) => normalize(raw, today),
        Err(e) => {
            log::warn!("{} seems damaged: {e}. Starting fresh.", path.display());
            Store::new()
        }
    }
}

/// Write the store to `path`, atomically.
pub fn save(path: &Path, store: &Store) -> Fallible<()> {
    let json = serde_json::to_string_pretty(store)?;
    let temp_path = temp_path(path);
    {
        let mut file = File::create(&temp_path)?;
        file.write_all(json.as_bytes())?;
        file.write_all(b"\n")?;
        file.sync_all()?;
    }
    rename(&temp_path, path)?;
    log::debug!("Saved {} cards to {}.", store.card_count(), path.display());
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.tmp"))
}

fn normalize(raw: RawStore, today: Date) -> Store {
    let mut seen: HashSet<CardId> = HashSet::new();
    let mut decks: BTreeMap<String, Deck> = BTreeMap::new();
    for (name, raw_deck) in raw.decks {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            log::warn!(
                "Dropping deck with an empty name ({} cards).",
                raw_deck.cards.len()
            );
            continue;
        }
        let cards: Vec<Card> = raw_deck
            .cards
            .into_iter()
            .enumerate()
            .filter_map(|(index, raw_card)| {
                normalize_card(raw_card, today, &mut seen).or_else(|| {
                    log::warn!("Dropping card {index} of deck {trimmed:?}: empty front or back.");
                    None
                })
            })
            .collect();
        decks
            .entry(trimmed.to_string())
            .or_default()
            .extend(Deck::from_cards(cards));
    }
    Store::from_decks(decks)
}

fn normalize_card(raw: RawCard, today: Date, seen: &mut HashSet<CardId>) -> Option<Card> {
    let front = text(raw.front)?;
    let back = text(raw.back)?;
    let id = match raw.id.and_then(|v| v.as_str().and_then(|s| CardId::parse(s).ok())) {
        Some(id) if !seen.contains(&id) => id,
        Some(id) => {
            let fresh = CardId::random();
            log::warn!("Duplicate card id {id}, reassigned to {fresh}.");
            fresh
        }
        None => CardId::random(),
    };
    seen.insert(id.clone());
    let schedule = Schedule {
        repetitions: count(raw.repetitions),
        interval: count(raw.interval),
        ease: raw
            .ease
            .and_then(|v| v.as_f64())
            .map(Ease::new)
            .unwrap_or_default(),
        due: raw
            .due
            .and_then(|v| v.as_str().and_then(|s| Date::parse(s).ok()))
            .unwrap_or(today),
    };
    Some(Card::from_parts(id, front, back, schedule))
}

/// A non-empty string, trimmed.
fn text(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    }
}

/// A non-negative count. Negative or malformed values become zero.
fn count(value: Option<Value>) -> u32 {
    match value {
        Some(Value::Number(n)) => {
            if let Some(n) = n.as_u64() {
                u32::try_from(n).unwrap_or(u32::MAX)
            } else if let Some(n) = n.as_f64() {
                // Saturating cast: negatives and NaN become zero.
                n.round() as u32
            } else {
                0
            }
        }
        _ => 0,
    }
}
