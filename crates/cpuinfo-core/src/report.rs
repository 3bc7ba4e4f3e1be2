//! Report rendering: register field breakdowns and the memory-map CSV.
//!
//! Thin serialization layer over the decode engine and the page-table
//! interpreter. Structural anomalies in a translation table (unaligned or
//! inconsistent 16-entry runs, unresolvable level-2 references) annotate
//! their own row and never abort the walk; only I/O failures do.

use std::io::{self, Write};

use thiserror::Error;

use crate::bitfield::decode_fields;
use crate::dump::words_from_bytes;
use crate::pagetable::{
    interpret_l1, interpret_l2, AccessPermission, ControlSignal, DecodedEntry, MemoryType,
    PageTableEntryKind,
};
use crate::registers::RegisterSet;

/// Errors raised while rendering a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The word slice does not match the register set.
    #[error("{set} layout describes {expected} registers but {actual} words were supplied")]
    WordCountMismatch {
        /// The selected layout.
        set: RegisterSet,
        /// Registers in the layout.
        expected: usize,
        /// Words supplied by the caller.
        actual: usize,
    },
    /// Writing to the output sink failed.
    #[error("failed to write report")]
    Io(#[from] io::Error),
}

/// Header row of the memory-map CSV.
pub const MEMORY_MAP_HEADER: &str = "Virt.addr,Table,Type,P bit,NG bit,Domain,Phys.addr,\
                                     L2 ref,S bit,Privileged/Nonpriv.,Caching,Memtype,XN bit";

/// Level-1 table capacity covering the full 4 GB address space.
const L1_MAX_ENTRIES: usize = 4096;
/// Entries in one level-2 table.
const L2_ENTRIES: usize = 256;
/// Entries spanned by one supersection or large-page run.
const RUN_LENGTH: usize = 16;
/// Virtual span of one level-1 entry.
const SECTION_SPAN: u32 = 0x0010_0000;
/// Virtual span of one level-2 entry.
const PAGE_SPAN: u32 = 0x0000_1000;

/// Writes the per-register field breakdown for a full dump.
///
/// One line per register (`name` padded to 10, value as 8 hex digits),
/// then one line per field: label padded to 20, hex and decimal value,
/// and the formatter output in brackets where the field has one.
///
/// # Errors
///
/// [`ReportError::WordCountMismatch`] unless `words` holds exactly one
/// word per register of `set`; [`ReportError::Io`] on sink failure.
pub fn write_register_report<W: Write>(
    out: &mut W,
    set: RegisterSet,
    words: &[u32],
) -> Result<(), ReportError> {
    let descriptors = set.descriptors();
    if words.len() != descriptors.len() {
        return Err(ReportError::WordCountMismatch {
            set,
            expected: descriptors.len(),
            actual: words.len(),
        });
    }

    for (descriptor, &word) in descriptors.iter().zip(words) {
        writeln!(out, "{:<10} 0x{word:08X}", descriptor.name)?;
        for field in decode_fields(word, descriptor) {
            match &field.formatted {
                Some(text) => writeln!(
                    out,
                    "  {:<20} 0x{:X} {} [{text}]",
                    field.label, field.raw, field.raw
                )?,
                None => writeln!(out, "  {:<20} 0x{:X} {}", field.label, field.raw, field.raw)?,
            }
        }
    }
    Ok(())
}

/// Raw physical-memory image holding the translation tables.
///
/// The level-1 table sits at the start of the image; level-2 references
/// are resolved against `base`, the physical address of the image's first
/// byte.
#[derive(Debug, Clone)]
pub struct TableImage {
    words: Vec<u32>,
    base: u32,
}

impl TableImage {
    /// Wraps a raw image whose first byte lives at physical address
    /// `base`.
    #[must_use]
    pub fn new(bytes: &[u8], base: u32) -> Self {
        Self {
            words: words_from_bytes(bytes),
            base,
        }
    }

    /// The level-1 entries at the start of the image, at most 4096.
    #[must_use]
    pub fn l1_entries(&self) -> &[u32] {
        let len = self.words.len().min(L1_MAX_ENTRIES);
        &self.words[..len]
    }

    /// The 256-entry level-2 table at physical address `addr`, when the
    /// image contains all of it.
    #[must_use]
    pub fn l2_table(&self, addr: u32) -> Option<&[u32]> {
        let offset = addr.checked_sub(self.base)? as usize / 4;
        self.words.get(offset..offset.checked_add(L2_ENTRIES)?)
    }
}

/// Writes the memory-map CSV for a translation-table image.
///
/// Level-1 rows step the virtual address by 1 MB. Entries referencing a
/// level-2 table inside the image are followed by its 256 page rows,
/// stepping by 4 KB. Structural anomalies annotate their row with an
/// `ERR:` cell and the walk continues.
///
/// # Errors
///
/// [`ReportError::Io`] on sink failure.
pub fn write_memory_map<W: Write>(out: &mut W, image: &TableImage) -> Result<(), ReportError> {
    writeln!(out, "{MEMORY_MAP_HEADER}")?;

    let entries = image.l1_entries();
    let mut vaddr = 0u32;
    let mut previous = ControlSignal::Normal;

    for (index, &word) in entries.iter().enumerate() {
        let (entry, signal) = interpret_l1(word);
        let annotation = match signal {
            ControlSignal::SupersectionStart if previous != ControlSignal::SupersectionStart => {
                run_annotation(entries, index, "supersection")
            }
            ControlSignal::Continue(addr) if image.l2_table(addr).is_none() => {
                Some("ERR: L2 table outside image".to_owned())
            }
            _ => None,
        };
        write_row(out, vaddr, "L1", &entry, annotation.as_deref())?;

        if let ControlSignal::Continue(addr) = signal {
            if let Some(table) = image.l2_table(addr) {
                write_l2_rows(out, vaddr, table)?;
            }
        }

        previous = signal;
        vaddr = vaddr.wrapping_add(SECTION_SPAN);
    }
    Ok(())
}

fn write_l2_rows<W: Write>(
    out: &mut W,
    base_vaddr: u32,
    table: &[u32],
) -> Result<(), ReportError> {
    let mut vaddr = base_vaddr;
    let mut previous = ControlSignal::Normal;

    for (index, &word) in table.iter().enumerate() {
        let (entry, signal) = interpret_l2(word);
        let annotation = match signal {
            ControlSignal::LargePageStart if previous != ControlSignal::LargePageStart => {
                run_annotation(table, index, "large page")
            }
            _ => None,
        };
        write_row(out, vaddr, "L2", &entry, annotation.as_deref())?;

        previous = signal;
        vaddr = vaddr.wrapping_add(PAGE_SPAN);
    }
    Ok(())
}

/// Checks the 16-entry run starting at `index`: it must begin on a
/// 16-entry boundary and all 16 entries must be identical.
fn run_annotation(entries: &[u32], index: usize, what: &str) -> Option<String> {
    if index % RUN_LENGTH != 0 {
        return Some(format!("ERR: Unaligned {what}"));
    }
    let run = &entries[index..];
    if run.len() < RUN_LENGTH || run[1..RUN_LENGTH].iter().any(|&word| word != run[0]) {
        return Some(format!("ERR: Inconsistent {what}"));
    }
    None
}

fn write_row<W: Write>(
    out: &mut W,
    vaddr: u32,
    table: &str,
    entry: &DecodedEntry,
    annotation: Option<&str>,
) -> Result<(), ReportError> {
    let columns = entry_columns(entry);
    match annotation {
        Some(note) => writeln!(out, "0x{vaddr:08X},{table},{columns}{note}")?,
        None => writeln!(out, "0x{vaddr:08X},{table},{columns}")?,
    }
    Ok(())
}

fn entry_columns(entry: &DecodedEntry) -> String {
    if entry.kind == PageTableEntryKind::Fault {
        return "Fault,".to_owned();
    }

    let non_global = match entry.non_global {
        Some(true) => "Nonglobal",
        Some(false) => "Global",
        None => "",
    };
    let domain = entry.domain.map(|d| d.to_string()).unwrap_or_default();
    let physical = entry
        .physical_address
        .map(|addr| format!("0x{addr:08x}"))
        .unwrap_or_default();
    let next_table = entry
        .next_table_address
        .map(|addr| format!("0x{addr:08x}"))
        .unwrap_or_default();

    format!(
        "{},{},{},{},{},{},{},{},{},{},{},",
        entry.kind.label(),
        if entry.privileged { "P" } else { "" },
        non_global,
        domain,
        physical,
        next_table,
        if entry.shareable { "Shareable" } else { "" },
        entry.access_permission.map_or("", AccessPermission::as_str),
        entry.caching.as_deref().unwrap_or(""),
        entry.memory_type.map_or("", MemoryType::label),
        if entry.execute_never { "No exec" } else { "" },
    )
}
