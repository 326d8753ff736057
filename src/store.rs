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

use std::collections::BTreeMap;
use std::fmt::Display;
use std::fmt::Formatter;

use serde::Serialize;

use crate::error::ErrorReport;
use crate::types::card::Card;
use crate::types::card_id::CardId;
use crate::types::date::Date;
use crate::types::deck::Deck;
use crate::types::quality::Quality;

/// Why the store refused an operation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Rejection {
    /// The deck name is empty after trimming.
    InvalidDeckName,
    /// A deck with this name already exists.
    DuplicateDeck,
    NoSuchDeck,
    NoSuchCard,
    /// A card's front or back is empty after trimming.
    EmptyField,
}

impl Display for Rejection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            Rejection::InvalidDeckName => "deck name must not be empty.",
            Rejection::DuplicateDeck => "a deck with that name already exists.",
            Rejection::NoSuchDeck => "no such deck.",
            Rejection::NoSuchCard => "no such card in this deck.",
            Rejection::EmptyField => "both front and back are required.",
        };
        write!(f, "{msg}")
    }
}

impl From<Rejection> for ErrorReport {
    fn from(value: Rejection) -> Self {
        ErrorReport::new(value.to_string())
    }
}

/// Every deck, keyed by name.
#[derive(Clone, PartialEq, Debug, Default, Serialize)]
pub struct Store {
    decks: BTreeMap<String, Deck>,
}

impl Store {
    pub fn new() -> Self {
        Self {
            decks: BTreeMap::new(),
        }
    }

    pub(crate) fn from_decks(decks: BTreeMap<String, Deck>) -> Self {
        Self { decks }
    }

    /// Create an empty deck. Returns the trimmed name it was stored under.
    pub fn create_deck(&mut self, name: &str) -> Result<String, Rejection> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Rejection::InvalidDeckName);
        }
        if self.decks.contains_key(name) {
            return Err(Rejection::DuplicateDeck);
        }
        self.decks.insert(name.to_string(), Deck::new());
        Ok(name.to_string())
    }

    /// Delete a deck and every card in it.
    pub fn delete_deck(&mut self, name: &str) -> Result<Deck, Rejection> {
        self.decks.remove(name).ok_or(Rejection::NoSuchDeck)
    }

    /// Add a new card to a deck. Returns the new card's id.
    pub fn add_card(
        &mut self,
        deck_name: &str,
        front: &str,
        back: &str,
        today: Date,
    ) -> Result<CardId, Rejection> {
        let deck = self.decks.get_mut(deck_name).ok_or(Rejection::NoSuchDeck)?;
        let card = Card::new(front, back, today)?;
        let id = card.id().clone();
        deck.push(card);
        Ok(id)
    }

    /// Review a card. Returns the card as updated.
    pub fn review_card(
        &mut self,
        deck_name: &str,
        id: &CardId,
        quality: Quality,
        today: Date,
    ) -> Result<&Card, Rejection> {
        let deck = self.decks.get_mut(deck_name).ok_or(Rejection::NoSuchDeck)?;
        let card = deck.get_mut(id).ok_or(Rejection::NoSuchCard)?;
        card.review(quality, today);
        Ok(card)
    }

    pub fn deck(&self, name: &str) -> Option<&Deck> {
        self.decks.get(name)
    }

    /// Deck names, in sorted order.
    pub fn deck_names(&self) -> impl Iterator<Item = &str> {
        self.decks.keys().map(String::as_str)
    }

    pub fn decks(&self) -> impl Iterator<Item = (&str, &Deck)> {
        self.decks.iter().map(|(name, deck)| (name.as_str(), deck))
    }

    /// Total number of cards across all decks.
    pub fn card_count(&self) -> usize {
        self.decks.values().map(Deck::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::date::ymd;

    #[test]
    fn test_create_deck() {
        let mut store = Store::new();
        assert_eq!(store.create_deck("  Spanish "), Ok("Spanish".to_string()));
        assert!(store.deck("Spanish").is_some());
        assert_eq!(store.create_deck("Spanish"), Err(Rejection::DuplicateDeck));
        assert_eq!(store.create_deck(" Spanish"), Err(Rejection::DuplicateDeck));
        assert_eq!(store.create_deck("   "), Err(Rejection::InvalidDeckName));
        assert_eq!(store.create_deck(""), Err(Rejection::InvalidDeckName));
    }

    #[test]
    fn test_deck_names_are_case_sensitive() -> Result<(), Rejection> {
        let mut store = Store::new();
        store.create_deck("french")?;
        store.create_deck("French")?;
        let names: Vec<&str> = store.deck_names().collect();
        assert_eq!(names, vec!["French", "french"]);
        Ok(())
    }

    #[test]
    fn test_delete_deck_cascades() -> Result<(), Rejection> {
        let today = ymd(2024, 1, 1);
        let mut store = Store::new();
        store.create_deck("a")?;
        store.create_deck("b")?;
        store.add_card("a", "1", "one", today)?;
        store.add_card("a", "2", "two", today)?;
        store.add_card("b", "3", "three", today)?;
        assert_eq!(store.card_count(), 3);
        let deleted = store.delete_deck("a")?;
        assert_eq!(deleted.len(), 2);
        assert_eq!(store.card_count(), 1);
        assert!(store.deck("a").is_none());
        assert_eq!(store.delete_deck("a"), Err(Rejection::NoSuchDeck));
        Ok(())
    }

    #[test]
    fn test_add_card() -> Result<(), Rejection> {
        let today = ymd(2024, 1, 1);
        let mut store = Store::new();
        store.create_deck("deck")?;
        let first = store.add_card("deck", "front", "back", today)?;
        let second = store.add_card("deck", "front", "back", today)?;
        assert_ne!(first, second);
        let deck = store.deck("deck").ok_or(Rejection::NoSuchDeck)?;
        let ids: Vec<&CardId> = deck.cards().iter().map(Card::id).collect();
        assert_eq!(ids, vec![&first, &second]);
        assert_eq!(
            store.add_card("missing", "front", "back", today),
            Err(Rejection::NoSuchDeck)
        );
        assert_eq!(
            store.add_card("deck", "front", "", today),
            Err(Rejection::EmptyField)
        );
        assert_eq!(store.card_count(), 2);
        Ok(())
    }

    #[test]
    fn test_review_card() -> Result<(), Rejection> {
        let mut store = Store::new();
        store.create_deck("deck")?;
        let id = store.add_card("deck", "front", "back", ymd(2024, 1, 1))?;
        let card = store.review_card("deck", &id, Quality::MAX, ymd(2024, 1, 1))?;
        assert_eq!(card.schedule().interval, 1);
        let card = store.review_card("deck", &id, Quality::MAX, ymd(2024, 1, 2))?;
        assert_eq!(card.schedule().interval, 6);
        assert_eq!(card.schedule().due, ymd(2024, 1, 8));
        Ok(())
    }

    #[test]
    fn test_review_card_preconditions() -> Result<(), Rejection> {
        let today = ymd(2024, 1, 1);
        let mut store = Store::new();
        store.create_deck("a")?;
        store.create_deck("b")?;
        let id = store.add_card("a", "front", "back", today)?;
        let before = store.clone();
        assert_eq!(
            store.review_card("b", &id, Quality::MAX, today).err(),
            Some(Rejection::NoSuchCard)
        );
        assert_eq!(
            store.review_card("c", &id, Quality::MAX, today).err(),
            Some(Rejection::NoSuchDeck)
        );
        assert_eq!(store, before);
        Ok(())
    }

    #[test]
    fn test_rejection_into_report() {
        let report: ErrorReport = Rejection::NoSuchDeck.into();
        assert_eq!(report.to_string(), "error: no such deck.");
    }
}
