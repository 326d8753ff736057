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

use std::io::BufRead;
use std::io::Write;
use std::io::stdin;
use std::io::stdout;

use crate::collection::Collection;
use crate::error::Fallible;
use crate::schedule::due_cards;
use crate::store::Rejection;
use crate::types::card_id::CardId;
use crate::types::date::Date;
use crate::types::quality::Quality;

pub fn drill(directory: Option<String>, deck_name: &str, today: Date) -> Fallible<()> {
    let mut coll = Collection::new(directory, today)?;
    log::debug!("Drilling {deck_name:?} in {}.", coll.directory.display());
    let input = stdin().lock();
    let output = stdout().lock();
    run_session(&mut coll, deck_name, today, input, output)?;
    Ok(())
}

/// Drill the cards of a deck due on `today`, saving after every review.
/// Returns the number of cards reviewed.
pub fn run_session<R: BufRead, W: Write>(
    coll: &mut Collection,
    deck_name: &str,
    today: Date,
    mut input: R,
    mut output: W,
) -> Fallible<usize> {
    let deck = coll.store.deck(deck_name).ok_or(Rejection::NoSuchDeck)?;
    let due: Vec<CardId> = due_cards(deck, today)
        .into_iter()
        .map(|card| card.id().clone())
        .collect();
    if due.is_empty() {
        writeln!(output, "No cards due.")?;
        return Ok(0);
    }
    let total = due.len();
    let mut reviewed = 0;
    for (index, id) in due.iter().enumerate() {
        let deck = coll.store.deck(deck_name).ok_or(Rejection::NoSuchDeck)?;
        let card = deck.get(id).ok_or(Rejection::NoSuchCard)?;
        writeln!(output, "Card {} of {total}", index + 1)?;
        writeln!(output, "Q: {}", card.front())?;
        writeln!(output, "[press enter to reveal]")?;
        output.flush()?;
        if read_line(&mut input)?.is_none() {
            break;
        }
        writeln!(output, "A: {}", card.back())?;
        let Some(quality) = read_quality(&mut input, &mut output)? else {
            break;
        };
        let card = coll.store.review_card(deck_name, id, quality, today)?;
        let schedule = card.schedule();
        log::debug!(
            "{} q={} reps={} interval={}d ease={} due={}",
            card.id(),
            quality,
            schedule.repetitions,
            schedule.interval,
            schedule.ease,
            schedule.due
        );
        coll.save()?;
        reviewed += 1;
    }
    writeln!(output, "Reviewed {reviewed} card(s).")?;
    Ok(reviewed)
}

/// Read one line. Returns `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Fallible<Option<String>> {
    let mut line = String::new();
    let read = input.read_line(&mut line)?;
    if read == 0 {
        Ok(None)
    } else {
        Ok(Some(line))
    }
}

/// Prompt until a number is entered. Out-of-range numbers are clamped.
fn read_quality<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Fallible<Option<Quality>> {
    loop {
        writeln!(output, "Rate (0 = forgot ... 5 = perfect):")?;
        output.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match line.trim().parse::<i64>() {
            Ok(value) => return Ok(Some(Quality::clamped(value))),
            Err(_) => writeln!(output, "Invalid input. Please enter a number between 0 and 5.")?,
        }
    }
}
