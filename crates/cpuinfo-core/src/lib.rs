//! Core decoding crate for ARMv6/v7 cpuinfo dumps.

/// Table-driven bitfield extraction for 32-bit register words.
pub mod bitfield;
pub use bitfield::{
    decode_fields, low_bits, BitfieldSpec, DecodedField, FieldFormatter, RegisterDescriptor,
};

/// Field formatter functions, one per ARM encoding table.
pub mod format;

/// Static register descriptor tables for the PMSA and VMSA layouts.
pub mod registers;
pub use registers::{RegisterSet, PMSA_REGISTERS, VMSA_REGISTERS};

/// Short-descriptor translation-table entry interpretation.
pub mod pagetable;
pub use pagetable::{
    interpret_l1, interpret_l2, AccessPermission, ControlSignal, DecodedEntry, MemoryType,
    PageTableEntryKind, CACHE_POLICIES,
};

/// Raw dump loading and register-set detection.
pub mod dump;
pub use dump::{detect_register_set, load_register_dump, words_from_bytes, DumpError};

/// Report rendering: register field breakdowns and the memory-map CSV.
pub mod report;
pub use report::{
    write_memory_map, write_register_report, ReportError, TableImage, MEMORY_MAP_HEADER,
};

#[cfg(test)]
use proptest as _;
#[cfg(test)]
use rstest as _;
