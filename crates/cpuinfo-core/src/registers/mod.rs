//! Static register descriptor tables for the ARMv6/v7 PMSA and VMSA
//! register layouts.
//!
//! Pure configuration data consumed by the decode engine: the field tables
//! reproduce the architectural bit layouts, and [`RegisterSet`] selects
//! which word list a dump follows. One set is active per run, chosen by
//! the caller (or detected from the dump length by
//! [`crate::dump::detect_register_set`]).

use core::fmt;

use crate::bitfield::RegisterDescriptor;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod common;
mod pmsa;
mod vmsa;

pub use pmsa::PMSA_REGISTERS;
pub use vmsa::VMSA_REGISTERS;

/// Architecture variant selecting which register layout a dump follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RegisterSet {
    /// Virtual Memory System Architecture (MMU cores, e.g. Cortex-A).
    Vmsa,
    /// Protected Memory System Architecture (MPU cores, e.g. Cortex-R).
    Pmsa,
}

impl RegisterSet {
    /// Ordered register descriptors of this layout.
    #[must_use]
    pub const fn descriptors(self) -> &'static [RegisterDescriptor] {
        match self {
            Self::Vmsa => VMSA_REGISTERS,
            Self::Pmsa => PMSA_REGISTERS,
        }
    }

    /// Number of 32-bit words in a dump of this layout.
    #[must_use]
    pub const fn word_count(self) -> usize {
        self.descriptors().len()
    }

    /// Expected dump size in bytes.
    #[must_use]
    pub const fn dump_len(self) -> usize {
        self.word_count() * 4
    }

    /// Display name used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vmsa => "VMSA",
            Self::Pmsa => "PMSA",
        }
    }
}

impl fmt::Display for RegisterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
