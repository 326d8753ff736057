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

use serde::Serialize;

use crate::types::card::Card;
use crate::types::card_id::CardId;

/// An ordered collection of cards. A deck's name is its key in the store.
#[derive(Clone, PartialEq, Debug, Default, Serialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub(crate) fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// The cards, in insertion order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id() == id)
    }

    pub(crate) fn get_mut(&mut self, id: &CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|card| card.id() == id)
    }

    pub(crate) fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub(crate) fn extend(&mut self, other: Deck) {
        self.cards.extend(other.cards);
    }
}
