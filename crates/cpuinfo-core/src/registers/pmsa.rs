//! PMSA (MPU) register layout, ARMv7-R order.

use crate::bitfield::{BitfieldSpec, RegisterDescriptor};
use crate::format;

use super::common;

const CACHE_LEVEL_ID: &[BitfieldSpec] = &[
    BitfieldSpec::formatted(3, "Cache type, level1", format::cache_type),
    BitfieldSpec::formatted(3, "Cache type, level2", format::cache_type),
    BitfieldSpec::formatted(3, "Cache type, level3", format::cache_type),
    BitfieldSpec::formatted(3, "Cache type, level4", format::cache_type),
    BitfieldSpec::formatted(3, "Cache type, level5", format::cache_type),
    BitfieldSpec::formatted(3, "Cache type, level6", format::cache_type),
    BitfieldSpec::formatted(3, "Cache type, level7", format::cache_type),
    // level 8 is mentioned only in the Cortex-R4 TRM
    BitfieldSpec::formatted(3, "Cache type, level8", format::cache_type),
    BitfieldSpec::plain(3, "Level of coherency"),
    BitfieldSpec::plain(3, "Level of unification"),
    BitfieldSpec::plain(2, "(zero)"),
];

const SCTLR: &[BitfieldSpec] = &[
    BitfieldSpec::plain(1, "MPU Enable"),
    BitfieldSpec::plain(1, "Strict Align"),
    BitfieldSpec::plain(1, "L1 DCache Enable"),
    BitfieldSpec::plain(4, "- (SBO)"),
    BitfieldSpec::plain(4, "- (SBZ)"),
    BitfieldSpec::plain(1, "Branch Pred Enable"),
    BitfieldSpec::plain(1, "L1 ICache Enable"),
    BitfieldSpec::plain(1, "High Vector"),
    BitfieldSpec::plain(1, "Round Robin"),
    BitfieldSpec::plain(1, "- (SBZ)"),
    BitfieldSpec::plain(1, "- (SBO)"),
    BitfieldSpec::plain(1, "MPU background reg"),
    BitfieldSpec::plain(1, "- (SBO)"),
    BitfieldSpec::plain(1, "Div0 exception"),
    BitfieldSpec::plain(1, "- (SBZ)"),
    BitfieldSpec::plain(1, "FIQ Enable"),
    BitfieldSpec::plain(2, "- (SBO)"),
    BitfieldSpec::plain(1, "VIC"),
    BitfieldSpec::plain(1, "CPSR E bit"),
    BitfieldSpec::plain(1, "- (SBZ)"),
    BitfieldSpec::plain(1, "NMFI"),
    BitfieldSpec::plain(1, "TRE"),
    BitfieldSpec::plain(1, "AFE"),
    BitfieldSpec::plain(1, "Thumb exceptions"),
    BitfieldSpec::plain(1, "Endian"),
];

const TCM_REGION: &[BitfieldSpec] = &[
    BitfieldSpec::plain(1, "Enabled"),
    BitfieldSpec::plain(1, "-"),
    BitfieldSpec::formatted(5, "Size", format::tcm_size),
    BitfieldSpec::plain(5, "-"),
    BitfieldSpec::formatted(20, "Base address", format::page_base_address),
];

const MPU_TYPE: &[BitfieldSpec] = &[
    BitfieldSpec::plain(1, "S"),
    BitfieldSpec::plain(7, "-"),
    BitfieldSpec::plain(8, "Num of MPU regions"),
    BitfieldSpec::plain(16, "-"),
];

const MPU_REGION_BASE: &[BitfieldSpec] = &[BitfieldSpec::plain(32, "Base address")];

const MPU_REGION_SIZE_ENABLE: &[BitfieldSpec] = &[
    BitfieldSpec::plain(1, "Enabled"),
    BitfieldSpec::formatted(5, "Size", format::mpu_region_size),
    BitfieldSpec::plain(2, "-"),
    BitfieldSpec::formatted(8, "Sub-regions disabled", format::subregion_bits),
    BitfieldSpec::plain(16, "-"),
];

const MPU_REGION_ACCESS: &[BitfieldSpec] = &[
    BitfieldSpec::formatted(6, "Region attributes", format::region_attributes),
    BitfieldSpec::plain(2, "-"),
    BitfieldSpec::formatted(3, "Access permission", format::mpu_access_permission),
    BitfieldSpec::plain(1, "-"),
    BitfieldSpec::plain(1, "Execute never"),
    BitfieldSpec::plain(19, "-"),
];

/// PMSA register dump layout, in dump word order.
pub const PMSA_REGISTERS: &[RegisterDescriptor] = &[
    RegisterDescriptor::new("ID", common::MAIN_ID),
    RegisterDescriptor::new("Cache type", common::CACHE_TYPE),
    RegisterDescriptor::new("TCM type", common::GENERIC),
    RegisterDescriptor::new("MPU type", MPU_TYPE),
    RegisterDescriptor::new("Multiprocessor ID", common::GENERIC),
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
    RegisterDescriptor::new("ACTLR", common::GENERIC),
    RegisterDescriptor::new("ACTLR2", common::GENERIC),
    RegisterDescriptor::new("CPACR", common::GENERIC),
    RegisterDescriptor::new("Build options 1", common::GENERIC),
    RegisterDescriptor::new("Build options 2", common::GENERIC),
    RegisterDescriptor::new("ATCM region reg", TCM_REGION),
    RegisterDescriptor::new("BTCM region reg", TCM_REGION),
    RegisterDescriptor::new("MPU region 0 base", MPU_REGION_BASE),
    RegisterDescriptor::new("MPU region 0 size & enable", MPU_REGION_SIZE_ENABLE),
    RegisterDescriptor::new("MPU region 0 access control", MPU_REGION_ACCESS),
    RegisterDescriptor::new("MPU region 1 base", MPU_REGION_BASE),
    RegisterDescriptor::new("MPU region 1 size & enable", MPU_REGION_SIZE_ENABLE),
    RegisterDescriptor::new("MPU region 1 access control", MPU_REGION_ACCESS),
    RegisterDescriptor::new("MPU region 2 base", MPU_REGION_BASE),
    RegisterDescriptor::new("MPU region 2 size & enable", MPU_REGION_SIZE_ENABLE),
    RegisterDescriptor::new("MPU region 2 access control", MPU_REGION_ACCESS),
    RegisterDescriptor::new("MPU region 3 base", MPU_REGION_BASE),
    RegisterDescriptor::new("MPU region 3 size & enable", MPU_REGION_SIZE_ENABLE),
    RegisterDescriptor::new("MPU region 3 access control", MPU_REGION_ACCESS),
    RegisterDescriptor::new("MPU region 4 base", MPU_REGION_BASE),
    RegisterDescriptor::new("MPU region 4 size & enable", MPU_REGION_SIZE_ENABLE),
    RegisterDescriptor::new("MPU region 4 access control", MPU_REGION_ACCESS),
    RegisterDescriptor::new("MPU region 5 base", MPU_REGION_BASE),
    RegisterDescriptor::new("MPU region 5 size & enable", MPU_REGION_SIZE_ENABLE),
    RegisterDescriptor::new("MPU region 5 access control", MPU_REGION_ACCESS),
    RegisterDescriptor::new("MPU region 6 base", MPU_REGION_BASE),
    RegisterDescriptor::new("MPU region 6 size & enable", MPU_REGION_SIZE_ENABLE),
    RegisterDescriptor::new("MPU region 6 access control", MPU_REGION_ACCESS),
    RegisterDescriptor::new("MPU region 7 base", MPU_REGION_BASE),
    RegisterDescriptor::new("MPU region 7 size & enable", MPU_REGION_SIZE_ENABLE),
    RegisterDescriptor::new("MPU region 7 access control", MPU_REGION_ACCESS),
    RegisterDescriptor::new("DBGDIDR", common::DEBUG_ID),
    RegisterDescriptor::new("DBGDRAR", common::DEBUG_BASE_ADDRESS),
    RegisterDescriptor::new("DBGDSAR", common::DEBUG_BASE_ADDRESS),
    RegisterDescriptor::new("DBGDSCR", common::DEBUG_STATUS),
];
