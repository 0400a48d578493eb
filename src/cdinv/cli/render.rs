//! Console rendering for the menu, the inventory table and command messages.
//!
//! Everything writes into a caller-supplied `Write` so the session loop can
//! be pointed at a buffer in tests. Colors come from `colored`, which turns
//! itself off when stdout is not a terminal.

use cdinv::api::{CmdMessage, MessageLevel};
use cdinv::model::Record;
use colored::Colorize;
use std::io::{self, Write};

const INVENTORY_HEADER: &str = "======= The Current Inventory: =======";

pub(super) fn write_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "Menu".bold())?;
    writeln!(out)?;
    writeln!(out, "[l] load Inventory from file")?;
    writeln!(out, "[a] Add CD")?;
    writeln!(out, "[i] Display Current Inventory")?;
    writeln!(out, "[d] delete CD from Inventory")?;
    writeln!(out, "[s] Save Inventory to file")?;
    writeln!(out, "[x] exit")?;
    writeln!(out)
}

pub(super) fn write_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

pub(super) fn write_inventory<W: Write>(out: &mut W, records: &[Record]) -> io::Result<()> {
    writeln!(out, "{}", INVENTORY_HEADER.bold())?;
    writeln!(out, "ID\tCD Title (by: Artist)")?;
    writeln!(out)?;
    for record in records {
        writeln!(out, "{}", record_line(record))?;
    }
    writeln!(out, "{}", "=".repeat(INVENTORY_HEADER.len()))
}

fn record_line(record: &Record) -> String {
    format!("{}\t{} (by:{})", record.id, record.title, record.artist)
}
