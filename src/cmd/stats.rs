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

use std::fmt::Display;
use std::fmt::Formatter;

use clap::ValueEnum;
use serde::Serialize;

use crate::collection::Collection;
use crate::error::Fallible;
use crate::schedule::due_cards;
use crate::store::Store;
use crate::types::date::Date;

#[derive(ValueEnum, Clone)]
pub enum StatsFormat {
    /// Plain text output.
    Text,
    /// JSON output.
    Json,
}

impl Display for StatsFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsFormat::Text => write!(f, "text"),
            StatsFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Serialize, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DeckStats {
    name: String,
    total_cards: usize,
    due_today: usize,
}

pub fn print_deck_stats(directory: Option<String>, format: StatsFormat, today: Date) -> Fallible<()> {
    let coll = Collection::new(directory, today)?;
    let stats = deck_stats(&coll.store, today);
    match format {
        StatsFormat::Text => {
            if stats.is_empty() {
                println!("No decks.");
            }
            for deck in stats {
                println!(
                    "{}: {} cards, {} due today",
                    deck.name, deck.total_cards, deck.due_today
                );
            }
        }
        StatsFormat::Json => {
            let stats_json = serde_json::to_string_pretty(&stats)?;
            println!("{}", stats_json);
        }
    }
    Ok(())
}

/// Card counts for every deck, in name order.
pub fn deck_stats(store: &Store, today: Date) -> Vec<DeckStats> {
    store
        .decks()
        .map(|(name, deck)| DeckStats {
            name: name.to_string(),
            total_cards: deck.len(),
            due_today: due_cards(deck, today).len(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::date::ymd;
    use crate::types::quality::Quality;

    #[test]
    fn test_deck_stats() -> Fallible<()> {
        let today = ymd(2024, 1, 1);
        let mut store = Store::new();
        store.create_deck("b")?;
        store.create_deck("a")?;
        let id = store.add_card("b", "1", "one", today)?;
        store.add_card("b", "2", "two", today)?;
        store.review_card("b", &id, Quality::MAX, today)?;
        let stats = deck_stats(&store, today);
        assert_eq!(
            stats,
            vec![
                DeckStats {
                    name: "a".to_string(),
                    total_cards: 0,
                    due_today: 0,
                },
                DeckStats {
                    name: "b".to_string(),
                    total_cards: 2,
                    due_today: 1,
                },
            ]
        );
        let json = serde_json::to_value(&stats)?;
        assert_eq!(json[1]["totalCards"], 2);
        assert_eq!(json[1]["dueToday"], 1);
        Ok(())
    }
}
