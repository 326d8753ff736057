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

use crate::schedule::Schedule;
use crate::schedule::review;
use crate::store::Rejection;
use crate::types::card_id::CardId;
use crate::types::date::Date;
use crate::types::quality::Quality;

#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct Card {
    /// Assigned once, at creation.
    id: CardId,
    front: String,
    back: String,
    /// Replaced as a whole by each review.
    #[serde(flatten)]
    schedule: Schedule,
}

impl Card {
    /// Create a new card, due on `today`.
    pub fn new(front: &str, back: &str, today: Date) -> Result<Self, Rejection> {
        let front = front.trim();
        let back = back.trim();
        if front.is_empty() || back.is_empty() {
            return Err(Rejection::EmptyField);
        }
        Ok(Self {
            id: CardId::random(),
            front: front.to_string(),
            back: back.to_string(),
            schedule: Schedule::new(today),
        })
    }

    /// Reassemble a card from already-validated parts.
    pub(crate) fn from_parts(id: CardId, front: String, back: String, schedule: Schedule) -> Self {
        Self {
            id,
            front,
            back,
            schedule,
        }
    }

    pub fn id(&self) -> &CardId {
        &self.id
    }

    pub fn front(&self) -> &str {
        &self.front
    }

    pub fn back(&self) -> &str {
        &self.back
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn is_due(&self, today: Date) -> bool {
        self.schedule.due <= today
    }

    /// Record a review of this card on `today`.
    pub fn review(&mut self, quality: Quality, today: Date) {
        self.schedule = review(&self.schedule, quality, today);
    }
}
