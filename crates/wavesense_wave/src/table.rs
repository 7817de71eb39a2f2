//! The raw tabular waveform format rendered by `vcdcat`.
//!
//! ```text
//! 1 TOP.clk
//! 2 TOP.rst
//! 3 TOP.count[7:0]
//! 1 2 3
//! =====
//! 1 0 00
//! 1 0 01
//! ```
//!
//! Header lines bind a column index to a hierarchical name. The line just
//! above the `=` separator lists the column indices in the order the data
//! rows carry them, which need not match the header numbering.

use std::collections::HashMap;

use tracing::debug;

/// A header entry binding a column index to a hierarchical signal name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignalDecl {
    /// The column index used by the column-order line.
    pub index: u32,
    /// The full hierarchical name, e.g. `TOP.counter.count[7:0]`.
    pub name: String,
}

/// A parsed waveform table: header, declared column order, and data rows.
#[derive(Clone, Debug)]
pub struct WaveTable {
    /// Header declarations in first-seen order. A repeated index keeps its
    /// original position and takes the later name.
    pub signals: Vec<SignalDecl>,
    /// Column indices in the order data rows list them.
    pub column_order: Vec<u32>,
    /// Retained data rows, each truncated to `column_order.len()` tokens.
    pub rows: Vec<Vec<String>>,
    /// Data rows dropped for having fewer tokens than declared columns.
    pub skipped_rows: usize,
    positions: HashMap<u32, usize>,
}

impl WaveTable {
    /// Parses a waveform table.
    ///
    /// Returns `None` when there is no `=` separator line, or when the line
    /// above it yields no column indices. A table with a header and no data
    /// rows is valid and has zero rows.
    pub fn parse(text: &str) -> Option<WaveTable> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.trim().is_empty())
            .collect();

        let separator = lines.iter().position(|line| is_separator(line))?;

        let mut signals: Vec<SignalDecl> = Vec::new();
        for line in &lines[..separator] {
            let Some(decl) = parse_header_line(line) else {
                continue;
            };
            match signals.iter_mut().find(|s| s.index == decl.index) {
                Some(existing) => existing.name = decl.name,
                None => signals.push(decl),
            }
        }

        let column_order: Vec<u32> = match separator.checked_sub(1) {
            Some(i) => lines[i]
                .split_whitespace()
                .filter(|tok| tok.chars().all(|c| c.is_ascii_digit()))
                .filter_map(|tok| tok.parse().ok())
                .collect(),
            None => Vec::new(),
        };
        if column_order.is_empty() {
            debug!("waveform table has no column-order line above the separator");
            return None;
        }

        // A duplicated index resolves to its last position.
        let positions: HashMap<u32, usize> = column_order
            .iter()
            .enumerate()
            .map(|(pos, &idx)| (idx, pos))
            .collect();

        let mut rows = Vec::new();
        let mut skipped_rows = 0;
        for line in &lines[separator + 1..] {
            if is_separator(line) {
                continue;
            }
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() < column_order.len() {
                debug!(row = line, "skipping short waveform row");
                skipped_rows += 1;
                continue;
            }
            rows.push(
                tokens[..column_order.len()]
                    .iter()
                    .map(|tok| tok.to_string())
                    .collect(),
            );
        }

        Some(WaveTable {
            signals,
            column_order,
            rows,
            skipped_rows,
            positions,
        })
    }

    /// The token for column `index` in retained row `row`.
    pub fn token(&self, row: usize, index: u32) -> Option<&str> {
        let pos = *self.positions.get(&index)?;
        self.rows.get(row)?.get(pos).map(String::as_str)
    }

    /// Iterates the tokens of one column across all retained rows.
    pub fn column(&self, index: u32) -> impl Iterator<Item = Option<&str>> + '_ {
        (0..self.rows.len()).map(move |row| self.token(row, index))
    }

    /// Header declarations sorted by column index.
    pub fn signals_by_index(&self) -> Vec<&SignalDecl> {
        let mut sorted: Vec<&SignalDecl> = self.signals.iter().collect();
        sorted.sort_by_key(|s| s.index);
        sorted
    }
}

fn is_separator(line: &str) -> bool {
    let line = line.trim();
    !line.is_empty() && line.chars().all(|c| c == '=')
}

/// `<index> <hierarchical.path>`; the path must contain a `.` and no spaces.
fn parse_header_line(line: &str) -> Option<SignalDecl> {
    let (index, name) = line.trim().split_once(char::is_whitespace)?;
    if index.is_empty() || !index.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let name = name.trim();
    if !name.contains('.') || name.contains(char::is_whitespace) {
        return None;
    }
    Some(SignalDecl {
        index: index.parse().ok()?,
        name: name.to_string(),
    })
}
