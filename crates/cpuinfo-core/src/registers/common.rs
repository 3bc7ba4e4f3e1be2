//! Field tables shared by the PMSA and VMSA register lists.

use crate::bitfield::BitfieldSpec;
use crate::format;

pub(super) const MAIN_ID: &[BitfieldSpec] = &[
    BitfieldSpec::plain(4, "Revision"),
    BitfieldSpec::plain(12, "Part"),
    BitfieldSpec::plain(4, "ARM Arch"),
    BitfieldSpec::plain(4, "Variant"),
    BitfieldSpec::plain(8, "Implementor"),
];

pub(super) const CACHE_TYPE: &[BitfieldSpec] = &[
    BitfieldSpec::formatted(4, "Icache min words/line", format::power_of_two),
    BitfieldSpec::plain(10, "(zero)"),
    BitfieldSpec::plain(2, "L1 Icache policy"),
    BitfieldSpec::formatted(4, "Dcache min words/line", format::power_of_two),
    BitfieldSpec::formatted(4, "Exclusives Reservation Granule", format::reservation_granule),
    BitfieldSpec::formatted(4, "Cache Writeback Granule", format::reservation_granule),
    BitfieldSpec::plain(1, "(zero)"),
    BitfieldSpec::plain(3, "(register format)"),
];

pub(super) const FEATURES_0: &[BitfieldSpec] = &[
    BitfieldSpec::plain(4, "ARM inst set"),
    BitfieldSpec::plain(4, "Thumb inst set"),
    BitfieldSpec::plain(4, "Jazelle inst set"),
    BitfieldSpec::plain(4, "ThumbEE inst set"),
    BitfieldSpec::plain(16, "-"),
];

pub(super) const FEATURES_1: &[BitfieldSpec] = &[
    BitfieldSpec::plain(4, "Programmers' model"),
    BitfieldSpec::plain(4, "Security extensions"),
    BitfieldSpec::plain(4, "Microcontr. prog model"),
    BitfieldSpec::plain(4, "Virt. extensions"),
    BitfieldSpec::plain(4, "Generic timer ext."),
    BitfieldSpec::plain(12, "-"),
];

pub(super) const DEBUG_FEATURES: &[BitfieldSpec] = &[
    BitfieldSpec::plain(4, "Coproc. dbg model"),
    BitfieldSpec::plain(4, "Coproc. secure dbg model"),
    BitfieldSpec::plain(4, "Memory-mapped dbg model"),
    BitfieldSpec::plain(4, "Coproc. trace model"),
    BitfieldSpec::plain(4, "Memory-mapped trace model"),
    BitfieldSpec::plain(4, "Debug model M"),
    BitfieldSpec::plain(4, "Perf. monitors"),
    BitfieldSpec::plain(4, "-"),
];

pub(super) const MEMORY_MODEL_0: &[BitfieldSpec] = &[
    BitfieldSpec::plain(4, "VMSA support"),
    BitfieldSpec::plain(4, "PMSA support"),
    BitfieldSpec::plain(4, "Cache coherence"),
    BitfieldSpec::plain(4, "Outer shareable"),
    BitfieldSpec::plain(4, "TCM support"),
    BitfieldSpec::plain(4, "Auxiliary registers"),
    BitfieldSpec::plain(4, "FCSE support"),
    BitfieldSpec::plain(4, "-"),
];

pub(super) const MEMORY_MODEL_1: &[BitfieldSpec] = &[
    BitfieldSpec::plain(4, "L1 Harvard cache VA"),
    BitfieldSpec::plain(4, "L1 unified cache VA"),
    BitfieldSpec::plain(4, "L1 Harvard cache s/w"),
    BitfieldSpec::plain(4, "L1 unified cache s/w"),
    BitfieldSpec::plain(4, "L1 Harvard cache"),
    BitfieldSpec::plain(4, "L1 unified cache"),
    BitfieldSpec::plain(4, "L1 cache test & clean"),
    BitfieldSpec::plain(4, "Branch predictor"),
];

pub(super) const MEMORY_MODEL_2: &[BitfieldSpec] = &[
    BitfieldSpec::plain(4, "L1 Harvard fg prefetch"),
    BitfieldSpec::plain(4, "L1 Harvard bg prefetch"),
    BitfieldSpec::plain(4, "L1 Harvard range"),
    BitfieldSpec::plain(4, "Harvard TLB"),
    BitfieldSpec::plain(4, "Unified TLB"),
    BitfieldSpec::plain(4, "Mem barrier"),
    BitfieldSpec::plain(4, "WFI stall"),
    BitfieldSpec::plain(4, "HW access flag"),
];

pub(super) const MEMORY_MODEL_3: &[BitfieldSpec] = &[
    BitfieldSpec::formatted(4, "Cache maintain MVA", format::maintenance_support),
    BitfieldSpec::formatted(4, "Cache maintain set/way", format::maintenance_support),
    BitfieldSpec::formatted(4, "Branch predictor maintenance", format::branch_predictor_maintenance),
    BitfieldSpec::plain(4, "Maintenance broadcast"),
    BitfieldSpec::plain(4, "-"),
    BitfieldSpec::plain(4, "Transl. table coherent walk"),
    BitfieldSpec::formatted(4, "Cached memory size", format::cached_memory_size),
    BitfieldSpec::formatted(4, "Supersection support", format::supersection_support),
];

pub(super) const ISA_0: &[BitfieldSpec] = &[
    BitfieldSpec::plain(4, "Swap instrs"),
    BitfieldSpec::plain(4, "Bitcount instrs"),
    BitfieldSpec::plain(4, "Bitfield instrs"),
    BitfieldSpec::plain(4, "CmpBranch instrs"),
    BitfieldSpec::plain(4, "Coproc instrs"),
    BitfieldSpec::plain(4, "Debug instrs"),
    BitfieldSpec::plain(4, "Divide instrs"),
    BitfieldSpec::plain(4, "-"),
];

pub(super) const ISA_1: &[BitfieldSpec] = &[
    BitfieldSpec::plain(4, "Endian instrs"),
    BitfieldSpec::plain(4, "Exception instrs"),
    BitfieldSpec::plain(4, "Exception AR instrs"),
    BitfieldSpec::plain(4, "Extend instrs"),
    BitfieldSpec::plain(4, "IfThen instrs"),
    BitfieldSpec::plain(4, "Immediate instrs"),
    BitfieldSpec::plain(4, "Interwork instrs"),
    BitfieldSpec::plain(4, "Jazelle instrs"),
];

pub(super) const ISA_2: &[BitfieldSpec] = &[
    BitfieldSpec::plain(4, "LoadStore instrs"),
    BitfieldSpec::plain(4, "Memhint instrs"),
    BitfieldSpec::plain(4, "MultiAccess Interruptible instructions"),
    BitfieldSpec::plain(4, "Mult instrs"),
    BitfieldSpec::plain(4, "MultS instrs"),
    BitfieldSpec::plain(4, "MultU instrs"),
    BitfieldSpec::plain(4, "PSR AR instrs"),
    BitfieldSpec::plain(4, "Reversal instrs"),
];

pub(super) const ISA_3: &[BitfieldSpec] = &[
    BitfieldSpec::plain(4, "Saturate instrs"),
    BitfieldSpec::plain(4, "SIMD instrs"),
    BitfieldSpec::plain(4, "SVC instrs"),
    BitfieldSpec::plain(4, "SynchPrim instrs"),
    BitfieldSpec::plain(4, "TabBranch instrs"),
    BitfieldSpec::plain(4, "ThumbCopy instrs"),
    BitfieldSpec::plain(4, "TrueNOP instrs"),
    BitfieldSpec::plain(4, "T2 Exec Env instrs"),
];

pub(super) const ISA_4: &[BitfieldSpec] = &[
    BitfieldSpec::plain(4, "Unprivileged instrs"),
    BitfieldSpec::plain(4, "WithShifts instrs"),
    BitfieldSpec::plain(4, "Writeback instrs"),
    BitfieldSpec::plain(4, "SMC instrs"),
    BitfieldSpec::plain(4, "Barrier instrs"),
    BitfieldSpec::plain(4, "SynchPrim_instrs_frac"),
    BitfieldSpec::plain(4, "PSR_M instrs"),
    BitfieldSpec::plain(4, "-"),
];

pub(super) const ISA_5: &[BitfieldSpec] = &[BitfieldSpec::plain(32, "-")];

pub(super) const CACHE_SIZE_ID: &[BitfieldSpec] = &[
    BitfieldSpec::formatted(3, "Line size in words", format::line_size_words),
    BitfieldSpec::formatted(10, "Associativity", format::plus_one),
    BitfieldSpec::formatted(15, "Number of sets", format::plus_one),
    BitfieldSpec::plain(1, "Write allocation"),
    BitfieldSpec::plain(1, "Read allocation"),
    BitfieldSpec::plain(1, "Write back"),
    BitfieldSpec::plain(1, "Write through"),
];

pub(super) const GENERIC: &[BitfieldSpec] = &[BitfieldSpec::plain(32, "(raw value)")];

pub(super) const DEBUG_ID: &[BitfieldSpec] = &[
    BitfieldSpec::plain(4, "Revision"),
    BitfieldSpec::plain(4, "Variant"),
    BitfieldSpec::plain(8, "- (RAZ)"),
    BitfieldSpec::formatted(4, "Version", format::debug_version),
    BitfieldSpec::formatted(4, "Context", format::plus_one),
    BitfieldSpec::formatted(4, "BRP", format::plus_one),
    BitfieldSpec::formatted(4, "WRP", format::plus_one),
];

pub(super) const DEBUG_BASE_ADDRESS: &[BitfieldSpec] = &[
    BitfieldSpec::plain(2, "Valid"),
    BitfieldSpec::plain(10, "- (UNK)"),
    BitfieldSpec::formatted(20, "Address", format::page_base_address),
];

pub(super) const DEBUG_STATUS: &[BitfieldSpec] = &[
    BitfieldSpec::plain(1, "HALTED"),
    BitfieldSpec::plain(1, "RESTARTED"),
    BitfieldSpec::plain(4, "MOE"),
    BitfieldSpec::plain(1, "SDABORT_l"),
    BitfieldSpec::plain(1, "ADABORT_l"),
    BitfieldSpec::plain(1, "UND_l"),
    BitfieldSpec::plain(1, "FS"),
    BitfieldSpec::plain(1, "DBGack"),
    BitfieldSpec::plain(1, "INTdis"),
    BitfieldSpec::plain(1, "UDCCdis"),
    BitfieldSpec::plain(1, "ITRen"),
    BitfieldSpec::plain(1, "HDBGen"),
    BitfieldSpec::plain(1, "MDBGen"),
    BitfieldSpec::plain(1, "SPIDdis"),
    BitfieldSpec::plain(1, "SPNIDdis"),
    BitfieldSpec::plain(1, "NS"),
    BitfieldSpec::plain(1, "ADAdiscard"),
    BitfieldSpec::plain(2, "ExtDCCmode"),
    BitfieldSpec::plain(2, "- (SBZ)"),
    BitfieldSpec::plain(1, "InstrCompl_l"),
    BitfieldSpec::plain(1, "PipeAdv"),
    BitfieldSpec::plain(1, "TXfull_l"),
    BitfieldSpec::plain(1, "RXfull_l"),
    BitfieldSpec::plain(1, "- (SBZ)"),
    BitfieldSpec::plain(1, "TXfull"),
    BitfieldSpec::plain(1, "RXfull"),
    BitfieldSpec::plain(1, "- (SBZ)"),
];
