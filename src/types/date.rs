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

use chrono::Days;
use chrono::Local;
use chrono::NaiveDate;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

use crate::error::ErrorReport;
use crate::error::Fallible;

const FORMAT: &str = "%Y-%m-%d";

/// A calendar date, with no time component.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Date(NaiveDate);

impl Date {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The current date in the local timezone.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Parse a `YYYY-MM-DD` string.
    pub fn parse(s: &str) -> Fallible<Self> {
        NaiveDate::parse_from_str(s.trim(), FORMAT)
            .map(Self)
            .map_err(|_| ErrorReport::new(format!("invalid date: {s:?}")))
    }

    /// The date `days` days after this one. Saturates at the maximum
    /// representable date.
    pub fn add_days(self, days: u32) -> Self {
        match self.0.checked_add_days(Days::new(days as u64)) {
            Some(date) => Self(date),
            None => Self(NaiveDate::MAX),
        }
    }
}

impl Display for Date {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(FORMAT))
    }
}

impl Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let string = String::deserialize(deserializer)?;
        Date::parse(&string).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
pub fn ymd(year: i32, month: u32, day: u32) -> Date {
    Date::new(NaiveDate::from_ymd_opt(year, month, day).unwrap())
}
