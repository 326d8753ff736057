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

/// A self-reported recall score, from 0 (total failure) to 5 (perfect).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct Quality(u8);

impl Quality {
    pub const MIN: Quality = Quality(0);
    pub const MAX: Quality = Quality(5);

    /// The lowest quality that counts as a successful recall.
    pub const PASS: Quality = Quality(3);

    /// Clamps `value` into `[0, 5]`.
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(0, 5) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_pass(self) -> bool {
        self >= Self::PASS
    }

    /// All qualities, from worst to best.
    pub fn all() -> impl Iterator<Item = Quality> {
        (0..=5).map(Quality)
    }
}

impl Display for Quality {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
