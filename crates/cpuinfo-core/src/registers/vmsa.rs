//! VMSA (MMU) register layout, ARMv7-A order.

use crate::bitfield::{BitfieldSpec, RegisterDescriptor};
use crate::format;

use super::common;

const TLB_TYPE: &[BitfieldSpec] = &[
    BitfieldSpec::formatted(1, "TLB", format::tlb_arrangement),
    BitfieldSpec::formatted(2, "TLB entries", format::tlb_entry_count),
    BitfieldSpec::plain(5, "-"),
    BitfieldSpec::plain(8, "Lockable unified or data entries"),
    BitfieldSpec::plain(8, "Lockable instruction entries"),
    BitfieldSpec::plain(8, "(zero)"),
];

const TTBCR: &[BitfieldSpec] = &[
    BitfieldSpec::formatted(3, "N", format::ttbr0_table_size),
    BitfieldSpec::plain(1, "(zero)"),
    BitfieldSpec::plain(1, "TTBR0 walks disabled"),
    BitfieldSpec::plain(1, "TTBR1 walks disabled"),
    BitfieldSpec::plain(25, "(zero)"),
    BitfieldSpec::plain(1, "Long descriptors"),
];

// TTBR0 and TTBR1 share one layout.
const TTBR: &[BitfieldSpec] = &[
    BitfieldSpec::plain(1, "IRGN[1]"),
    BitfieldSpec::plain(1, "Shareable"),
    BitfieldSpec::plain(1, "(impl. defined)"),
    BitfieldSpec::plain(2, "RGN (Outer cacheability)"),
    BitfieldSpec::plain(1, "NOS (Inner shareable)"),
    BitfieldSpec::plain(1, "IRGN[0]"),
    BitfieldSpec::formatted(25, "Table address", format::table_base_address),
];

const CACHE_LEVEL_ID: &[BitfieldSpec] = &[
    BitfieldSpec::formatted(3, "Cache type, level1", format::cache_type),
    BitfieldSpec::formatted(3, "Cache type, level2", format::cache_type),
    BitfieldSpec::formatted(3, "Cache type, level3", format::cache_type),
    BitfieldSpec::formatted(3, "Cache type, level4", format::cache_type),
    BitfieldSpec::formatted(3, "Cache type, level5", format::cache_type),
    BitfieldSpec::formatted(3, "Cache type, level6", format::cache_type),
    BitfieldSpec::formatted(3, "Cache type, level7", format::cache_type),
    BitfieldSpec::plain(3, "Level of unification Inner Shareable"),
    BitfieldSpec::plain(3, "Level of coherency"),
    BitfieldSpec::plain(3, "Level of unification"),
    BitfieldSpec::plain(2, "(zero)"),
];

const SCTLR: &[BitfieldSpec] = &[
    BitfieldSpec::plain(1, "MMU Enable"),
    BitfieldSpec::plain(1, "Strict Align"),
    BitfieldSpec::plain(1, "Data or Unified Cache Enable"),
    BitfieldSpec::plain(1, "CP15 Barrier Enable"),
    BitfieldSpec::plain(3, "- (SBO)"),
    BitfieldSpec::plain(3, "- (SBZ)"),
    BitfieldSpec::plain(1, "SWP/SWPB Enable"),
    BitfieldSpec::plain(1, "Branch Pred Enable"),
    BitfieldSpec::plain(1, "ICache Enable"),
    BitfieldSpec::plain(1, "High Vector"),
    BitfieldSpec::plain(1, "Round Robin"),
    BitfieldSpec::plain(1, "- (SBZ)"),
    BitfieldSpec::plain(1, "- (SBO)"),
    BitfieldSpec::plain(1, "HA flag"),
    BitfieldSpec::plain(1, "- (SBO)"),
    BitfieldSpec::plain(1, "WXN (virt. ext. only)"),
    BitfieldSpec::plain(1, "UWXN (virt. ext. only)"),
    BitfieldSpec::plain(1, "FIQ Enable"),
    BitfieldSpec::plain(2, "- (SBO)"),
    BitfieldSpec::plain(1, "VE"),
    BitfieldSpec::plain(1, "CPSR E"),
    BitfieldSpec::plain(1, "- (SBZ)"),
    BitfieldSpec::plain(1, "NMFI"),
    BitfieldSpec::plain(1, "TRE"),
    BitfieldSpec::plain(1, "AFE"),
    BitfieldSpec::plain(1, "Thumb exceptions"),
    BitfieldSpec::plain(1, "- (SBZ)"),
];

const ACTLR: &[BitfieldSpec] = &[
    BitfieldSpec::plain(1, "Cache & TLB maint. broadcast"),
    BitfieldSpec::plain(1, "L2 prefetch enable"),
    BitfieldSpec::plain(1, "L1 prefetch enable"),
    BitfieldSpec::plain(1, "Write full line of zeroes"),
    BitfieldSpec::plain(2, "(zero)"),
    BitfieldSpec::plain(1, "SMP"),
    BitfieldSpec::plain(1, "Exclusive cache"),
    BitfieldSpec::plain(1, "Alloc in one way"),
    BitfieldSpec::plain(1, "Parity on"),
    BitfieldSpec::plain(22, "-"),
];

const CPACR: &[BitfieldSpec] = &[
    BitfieldSpec::plain(20, "(zero)"),
    BitfieldSpec::plain(2, "CP10 access permission"),
    BitfieldSpec::plain(2, "CP11 access permission"),
    BitfieldSpec::plain(6, "(zero)"),
    BitfieldSpec::plain(1, "D32DIS"),
    BitfieldSpec::plain(1, "ASEDIS"),
];

/// VMSA register dump layout, in dump word order.
pub const VMSA_REGISTERS: &[RegisterDescriptor] = &[
    RegisterDescriptor::new("ID", common::MAIN_ID),
    RegisterDescriptor::new("Cache type", common::CACHE_TYPE),
    RegisterDescriptor::new("TCM type", common::GENERIC),
    RegisterDescriptor::new("TLB type", TLB_TYPE),
    RegisterDescriptor::new("TTBCR", TTBCR),
    RegisterDescriptor::new("TTBR0", TTBR),
    RegisterDescriptor::new("TTBR1", TTBR),
    RegisterDescriptor::new("Multiprocessor ID", common::GENERIC),
    RegisterDescriptor::new("Revision ID", common::GENERIC),
    RegisterDescriptor::new("Processor feature 0", common::FEATURES_0),
    RegisterDescriptor::new("Processor feature 1", common::FEATURES_1),
    RegisterDescriptor::new("Debug feature", common::DEBUG_FEATURES),
    RegisterDescriptor::new("Aux feature", common::GENERIC),
    RegisterDescriptor::new("Mem model feature 0", common::MEMORY_MODEL_0),
    RegisterDescriptor::new("Mem model feature 1", common::MEMORY_MODEL_1),
    RegisterDescriptor::new("Mem model feature 2", common::MEMORY_MODEL_2),
    RegisterDescriptor::new("Mem model feature 3", common::MEMORY_MODEL_3),
    RegisterDescriptor::new("ISA feature 0", common::ISA_0),
    RegisterDescriptor::new("ISA feature 1", common::ISA_1),
    RegisterDescriptor::new("ISA feature 2", common::ISA_2),
    RegisterDescriptor::new("ISA feature 3", common::ISA_3),
    RegisterDescriptor::new("ISA feature 4", common::ISA_4),
    RegisterDescriptor::new("ISA feature 5", common::ISA_5),
    RegisterDescriptor::new("Cache level ID", CACHE_LEVEL_ID),
    RegisterDescriptor::new("Cache size ID reg (data, level0)", common::CACHE_SIZE_ID),
    RegisterDescriptor::new("Cache size ID reg (inst, level0)", common::CACHE_SIZE_ID),
    RegisterDescriptor::new("SCTLR", SCTLR),
    RegisterDescriptor::new("ACTLR", ACTLR),
    RegisterDescriptor::new("ACTLR2", common::GENERIC),
    RegisterDescriptor::new("CPACR", CPACR),
    RegisterDescriptor::new("DACR", common::GENERIC),
    RegisterDescriptor::new("NSACR (sec. ext. only)", common::GENERIC),
    RegisterDescriptor::new("DBGDIDR", common::DEBUG_ID),
    RegisterDescriptor::new("DBGDRAR", common::DEBUG_BASE_ADDRESS),
    RegisterDescriptor::new("DBGDSAR", common::DEBUG_BASE_ADDRESS),
    RegisterDescriptor::new("DBGDSCR", common::DEBUG_STATUS),
    RegisterDescriptor::new("Config base addr reg", common::GENERIC),
    RegisterDescriptor::new("PLEIDR", common::GENERIC),
    RegisterDescriptor::new("TLB lockdown reg", common::GENERIC),
    RegisterDescriptor::new("PRRR", common::GENERIC),
    RegisterDescriptor::new("NMRR", common::GENERIC),
];
