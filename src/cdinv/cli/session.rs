//! The interactive menu loop.
//!
//! ```text
//! AwaitingChoice ──► Loading | Adding | Displaying | Deleting | Saving ──► AwaitingChoice
//!        └─────────► Exiting
//! ```
//!
//! Every state runs to completion before the menu is shown again. End of
//! input at any prompt ends the session the same way `x` does: without
//! saving.

use super::console::Console;
use super::render::{write_inventory, write_menu, write_messages};
use cdinv::api::{CmdMessage, InventoryApi};
use cdinv::error::Result;
use cdinv::store::SnapshotStore;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

const CHOICE_PROMPT: &str = "Which operation would you like to perform? [l, a, i, d, s or x]: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Load,
    Add,
    Display,
    Delete,
    Save,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "l" => Some(MenuChoice::Load),
            "a" => Some(MenuChoice::Add),
            "i" => Some(MenuChoice::Display),
            "d" => Some(MenuChoice::Delete),
            "s" => Some(MenuChoice::Save),
            "x" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Shorthand for reading a prompt and leaving the session on end of input.
macro_rules! prompt_or_exit {
    ($console:expr, $text:expr) => {
        match $console.prompt($text)? {
            Some(line) => line,
            None => return Ok(Flow::Exit),
        }
    };
}

pub fn run_loop<S, R, W>(api: &mut InventoryApi<S>, console: &mut Console<R, W>) -> Result<()>
where
    S: SnapshotStore,
    R: BufRead,
    W: Write,
{
    loop {
        write_menu(console.output())?;
        let Some(choice) = read_choice(console)? else {
            debug!("input closed at menu");
            return Ok(());
        };
        debug!(?choice, "menu choice");

        let flow = match choice {
            MenuChoice::Exit => Flow::Exit,
            MenuChoice::Load => handle_load(api, console)?,
            MenuChoice::Add => handle_add(api, console)?,
            MenuChoice::Display => handle_display(api, console)?,
            MenuChoice::Delete => handle_delete(api, console)?,
            MenuChoice::Save => handle_save(api, console)?,
        };

        if flow == Flow::Exit {
            return Ok(());
        }
    }
}

fn read_choice<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Option<MenuChoice>> {
    loop {
        let Some(line) = console.prompt(CHOICE_PROMPT)? else {
            return Ok(None);
        };
        if let Some(choice) = MenuChoice::parse(&line) {
            writeln!(console.output())?;
            return Ok(Some(choice));
        }
    }
}

fn is_confirmed(answer: &str, expected: &str) -> bool {
    answer.trim().eq_ignore_ascii_case(expected)
}

fn show_inventory<S: SnapshotStore, R: BufRead, W: Write>(
    api: &InventoryApi<S>,
    console: &mut Console<R, W>,
) -> Result<()> {
    let listed = api.list().listed_records;
    write_inventory(console.output(), &listed)?;
    Ok(())
}

fn handle_load<S: SnapshotStore, R: BufRead, W: Write>(
    api: &mut InventoryApi<S>,
    console: &mut Console<R, W>,
) -> Result<Flow> {
    writeln!(
        console.output(),
        "WARNING: If you continue, all unsaved data will be lost and the Inventory re-loaded from file."
    )?;
    let answer = prompt_or_exit!(
        console,
        "type 'yes' to continue and reload from file. otherwise reload will be canceled: "
    );

    if is_confirmed(&answer, "yes") {
        writeln!(console.output(), "reloading...")?;
        let result = api.reload()?;
        write_messages(console.output(), &result.messages)?;
    } else {
        prompt_or_exit!(
            console,
            "canceling... Inventory data NOT reloaded. Press [ENTER] to continue to the menu."
        );
    }

    show_inventory(api, console)?;
    Ok(Flow::Continue)
}

fn handle_add<S: SnapshotStore, R: BufRead, W: Write>(
    api: &mut InventoryApi<S>,
    console: &mut Console<R, W>,
) -> Result<Flow> {
    let id = prompt_or_exit!(console, "Enter ID: ");
    let title = prompt_or_exit!(console, "What is the CD's title? ");
    let artist = prompt_or_exit!(console, "What is the Artist's name? ");

    let result = api.add_record(id.trim(), title.trim(), artist.trim());
    write_messages(console.output(), &result.messages)?;
    if result.affected_records.is_empty() {
        writeln!(console.output())?;
    }

    show_inventory(api, console)?;
    Ok(Flow::Continue)
}

fn handle_display<S: SnapshotStore, R: BufRead, W: Write>(
    api: &mut InventoryApi<S>,
    console: &mut Console<R, W>,
) -> Result<Flow> {
    show_inventory(api, console)?;
    Ok(Flow::Continue)
}

fn handle_delete<S: SnapshotStore, R: BufRead, W: Write>(
    api: &mut InventoryApi<S>,
    console: &mut Console<R, W>,
) -> Result<Flow> {
    show_inventory(api, console)?;
    let answer = prompt_or_exit!(console, "Which ID would you like to delete? ");

    let id = match answer.trim().parse::<i64>() {
        Ok(id) => id,
        Err(_) => {
            write_messages(
                console.output(),
                &[CmdMessage::error("Oops! That was not a number.")],
            )?;
            writeln!(console.output())?;
            return Ok(Flow::Continue);
        }
    };

    let result = api.remove_record(id);
    write_messages(console.output(), &result.messages)?;
    show_inventory(api, console)?;
    Ok(Flow::Continue)
}

fn handle_save<S: SnapshotStore, R: BufRead, W: Write>(
    api: &mut InventoryApi<S>,
    console: &mut Console<R, W>,
) -> Result<Flow> {
    show_inventory(api, console)?;
    let answer = prompt_or_exit!(console, "Save this inventory to file? [y/n] ");

    if !is_confirmed(&answer, "y") {
        prompt_or_exit!(
            console,
            "The inventory was NOT saved to file. Press [ENTER] to return to the menu."
        );
        return Ok(Flow::Continue);
    }

    match api.save() {
        Ok(result) => write_messages(console.output(), &result.messages)?,
        Err(e) => {
            warn!(error = %e, "save failed");
            write_messages(
                console.output(),
                &[CmdMessage::error(format!("Save failed: {}", e))],
            )?;
        }
    }
    writeln!(console.output())?;
    Ok(Flow::Continue)
}
