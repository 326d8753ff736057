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

use crate::collection::Collection;
use crate::error::Fallible;
use crate::schedule::due_cards;
use crate::store::Rejection;
use crate::types::date::Date;

pub fn print_due(directory: Option<String>, deck_name: &str, today: Date) -> Fallible<()> {
    for front in due_fronts(directory, deck_name, today)? {
        println!("{front}");
    }
    Ok(())
}

/// The fronts of the cards due on `today`, in stored order.
pub fn due_fronts(directory: Option<String>, deck_name: &str, today: Date) -> Fallible<Vec<String>> {
    let coll = Collection::new(directory, today)?;
    let deck = coll.store.deck(deck_name).ok_or(Rejection::NoSuchDeck)?;
    Ok(due_cards(deck, today)
        .into_iter()
        .map(|card| card.front().to_string())
        .collect())
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::cmd::manage::add_card;
    use crate::cmd::manage::new_deck;
    use crate::types::date::ymd;

    #[test]
    fn test_due_fronts() -> Fallible<()> {
        let dir = tempdir()?;
        let path = || Some(dir.path().display().to_string());
        new_deck(path(), "deck", ymd(2024, 1, 1))?;
        add_card(path(), "deck", "early", "e", ymd(2024, 1, 1))?;
        add_card(path(), "deck", "late", "l", ymd(2024, 2, 1))?;
        assert_eq!(due_fronts(path(), "deck", ymd(2024, 1, 15))?, vec!["early"]);
        assert_eq!(
            due_fronts(path(), "deck", ymd(2024, 2, 1))?,
            vec!["early", "late"]
        );
        assert!(due_fronts(path(), "other", ymd(2024, 1, 1)).is_err());
        Ok(())
    }
}
