use std::io::{self, Write};

use comfy_table::{presets, CellAlignment, Table};
use serde::Serialize;

use crate::app::GlobalOptions;

/// Command results that have a plain-text rendering besides their JSON form.
pub trait Render: Serialize {
    fn render(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// Writes a command result to stdout, as pretty JSON with `--json`.
pub fn emit<T: Render>(data: &T, opts: &GlobalOptions) -> anyhow::Result<()> {
    let mut out = io::stdout().lock();
    if opts.json {
        serde_json::to_writer_pretty(&mut out, data)?;
        writeln!(out)?;
    } else {
        data.render(&mut out)?;
    }
    out.flush()?;
    Ok(())
}

/// Builds a borderless table; columns listed in `numeric` are right aligned.
pub fn plain_table(headers: &[&str], numeric: &[usize]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::NOTHING).set_header(headers.to_vec());

    for index in 0..headers.len() {
        if let Some(column) = table.column_mut(index) {
            if numeric.contains(&index) {
                column.set_cell_alignment(CellAlignment::Right);
            }
            // Two spaces between columns, none before the first
            column.set_padding((u16::from(index != 0), 1));
        }
    }
    table
}

/// Writes every line of a table behind `indent`, without trailing padding.
pub fn write_table(out: &mut dyn Write, table: &Table, indent: &str) -> io::Result<()> {
    for line in table.to_string().lines() {
        writeln!(out, "{indent}{}", line.trim_end())?;
    }
    Ok(())
}
