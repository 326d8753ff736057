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

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use serde::Serialize;

use crate::error::Fallible;
use crate::types::card::Card;
use crate::types::deck::Deck;

#[derive(Serialize)]
struct CardRow<'a> {
    id: &'a str,
    front: &'a str,
    back: &'a str,
    repetitions: u32,
    interval: u32,
    ease: f64,
    due: String,
}

impl<'a> From<&'a Card> for CardRow<'a> {
    fn from(card: &'a Card) -> Self {
        let schedule = card.schedule();
        Self {
            id: card.id().as_str(),
            front: card.front(),
            back: card.back(),
            repetitions: schedule.repetitions,
            interval: schedule.interval,
            ease: schedule.ease.value(),
            due: schedule.due.to_string(),
        }
    }
}

/// Write every card in `deck` as CSV, in stored order, with a header row.
pub fn write_deck_csv<W: Write>(deck: &Deck, writer: W) -> Fallible<()> {
    let mut writer = csv::Writer::from_writer(writer);
    if deck.is_empty() {
        // With no rows to serialize, the header has to be written by hand.
        writer.write_record([
            "id",
            "front",
            "back",
            "repetitions",
            "interval",
            "ease",
            "due",
        ])?;
    }
    for card in deck.cards() {
        writer.serialize(CardRow::from(card))?;
    }
    writer.flush()?;
    Ok(())
}

/// The file name a deck is exported to.
pub fn export_file_name(deck_name: &str) -> String {
    format!("{}.csv", deck_name.replace(' ', "_"))
}

/// Export `deck` into `directory`. Returns the path of the written file.
pub fn export_deck(directory: &Path, deck_name: &str, deck: &Deck) -> Fallible<PathBuf> {
    let path = directory.join(export_file_name(deck_name));
    let file = File::create(&path)?;
    write_deck_csv(deck, file)?;
    log::info!("Exported {} cards to {}.", deck.len(), path.display());
    Ok(path)
}
