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

use clap::Parser;

use crate::cmd::drill::drill;
use crate::cmd::due::print_due;
use crate::cmd::export::export_to_csv;
use crate::cmd::manage::add_card;
use crate::cmd::manage::delete_deck;
use crate::cmd::manage::new_deck;
use crate::cmd::stats::StatsFormat;
use crate::cmd::stats::print_deck_stats;
use crate::error::Fallible;
use crate::types::date::Date;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// List decks, with their total and due card counts.
    Decks {
        /// Path to the collection directory.
        #[arg(long)]
        directory: Option<String>,
        /// Output format.
        #[arg(long, default_value_t = StatsFormat::Text)]
        format: StatsFormat,
    },
    /// Create an empty deck.
    NewDeck {
        name: String,
        /// Path to the collection directory.
        #[arg(long)]
        directory: Option<String>,
    },
    /// Delete a deck and all of its cards.
    DeleteDeck {
        name: String,
        /// Path to the collection directory.
        #[arg(long)]
        directory: Option<String>,
    },
    /// Add a card to a deck.
    Add {
        deck: String,
        front: String,
        back: String,
        /// Path to the collection directory.
        #[arg(long)]
        directory: Option<String>,
    },
    /// List the cards due today.
    Due {
        deck: String,
        /// Path to the collection directory.
        #[arg(long)]
        directory: Option<String>,
    },
    /// Review the cards due today.
    Drill {
        deck: String,
        /// Path to the collection directory.
        #[arg(long)]
        directory: Option<String>,
    },
    /// Export a deck to CSV.
    Export {
        deck: String,
        /// Path to the collection directory.
        #[arg(long)]
        directory: Option<String>,
    },
}

pub fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    let today = Date::today();
    match cli {
        Command::Decks { directory, format } => print_deck_stats(directory, format, today),
        Command::NewDeck { name, directory } => {
            let name = new_deck(directory, &name, today)?;
            println!("Created deck {name:?}.");
            Ok(())
        }
        Command::DeleteDeck { name, directory } => {
            let count = delete_deck(directory, &name, today)?;
            println!("Deleted deck {name:?} ({count} cards).");
            Ok(())
        }
        Command::Add {
            deck,
            front,
            back,
            directory,
        } => {
            let id = add_card(directory, &deck, &front, &back, today)?;
            println!("{id}");
            Ok(())
        }
        Command::Due { deck, directory } => print_due(directory, &deck, today),
        Command::Drill { deck, directory } => drill(directory, &deck, today),
        Command::Export { deck, directory } => {
            let path = export_to_csv(directory, &deck, today)?;
            println!("Deck saved as {}", path.display());
            Ok(())
        }
    }
}
