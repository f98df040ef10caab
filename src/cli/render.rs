//! Output formats for the CLI.

use crate::pipeline::TranslationUnit;
use clast_common::Loc;
use clast_parser::{NodeArena, VisitControl, pre_order};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::io::{self, Write};

/// `file:line:col`, with `?` for missing components.
pub fn format_loc(arena: &NodeArena, loc: &Loc) -> String {
    let file = arena.loc_file(loc).unwrap_or("?");
    let mut out = String::with_capacity(file.len() + 12);
    out.push_str(file);
    for component in [loc.line, loc.col] {
        match component {
            Some(n) => {
                let _ = write!(out, ":{n}");
            }
            None => out.push_str(":?"),
        }
    }
    out
}

/// Print one line per node: `Kind id file:line:col [name]`, indented two
/// spaces per level.
pub fn write_tree<W: Write>(out: &mut W, unit: &TranslationUnit) -> io::Result<()> {
    let arena = &unit.arena;
    let mut result = Ok(());
    pre_order(arena, unit.root, |_, node, depth| {
        if result.is_err() {
            return VisitControl::Prune;
        }
        let mut line = String::new();
        for _ in 0..depth {
            line.push_str("  ");
        }
        line.push_str(arena.resolve(node.kind));
        if node.id.is_some() {
            line.push(' ');
            line.push_str(arena.resolve(node.id));
        }
        if let Some(loc) = &node.loc {
            line.push(' ');
            line.push_str(&format_loc(arena, loc));
        }
        if let Some(name) = node.data.name() {
            let _ = write!(line, " '{name}'");
        }
        result = writeln!(out, "{line}");
        VisitControl::Continue
    });
    result
}

#[derive(Debug, Serialize)]
pub struct KindSummary {
    pub nodes: usize,
    pub kinds: BTreeMap<String, usize>,
}

/// Count nodes per kind.
pub fn kind_summary(unit: &TranslationUnit) -> KindSummary {
    let mut kinds = BTreeMap::new();
    for (_, node) in unit.arena.iter() {
        *kinds
            .entry(unit.arena.resolve(node.kind).to_string())
            .or_insert(0) += 1;
    }
    KindSummary {
        nodes: unit.arena.len(),
        kinds,
    }
}

pub fn write_kinds<W: Write>(out: &mut W, unit: &TranslationUnit) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, &kind_summary(unit))?;
    writeln!(out)
}
