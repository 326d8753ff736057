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

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

/// The lowest ease a card can have.
pub const MIN_EASE: f64 = 1.3;

/// The ease of a new card.
pub const INITIAL_EASE: f64 = 2.5;

/// The ease factor: the multiplier applied to a card's interval after a
/// successful review.
///
/// Always at least [`MIN_EASE`], and always rounded to two decimal places, so
/// that writing and re-reading a value never changes it.
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug)]
pub struct Ease(f64);

impl Ease {
    /// Floors `value` at [`MIN_EASE`] and rounds it to two decimal places.
    /// Non-finite values become [`INITIAL_EASE`].
    pub fn new(value: f64) -> Self {
        if !value.is_finite() {
            return Self(INITIAL_EASE);
        }
        let floored = value.max(MIN_EASE);
        Self((floored * 100.0).round() / 100.0)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Ease {
    fn default() -> Self {
        Self(INITIAL_EASE)
    }
}

impl Display for Ease {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Ease {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.0)
    }
}

impl<'de> Deserialize<'de> for Ease {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Ok(Ease::new(value))
    }
}
