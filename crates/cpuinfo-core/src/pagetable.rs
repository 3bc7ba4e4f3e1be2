//! Short-descriptor translation-table entry interpretation.
//!
//! [`interpret_l1`] and [`interpret_l2`] classify a raw 32-bit descriptor
//! word into its ARMv6/v7 format and flatten the architectural attribute
//! bits into a [`DecodedEntry`] for rendering. The paired
//! [`ControlSignal`] tells the caller whether to recurse into a level-2
//! table or to run the 16-entry run-consistency checks.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Descriptor formats of the short-descriptor translation scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PageTableEntryKind {
    /// Unmapped entry; an access generates a translation fault.
    Fault,
    /// 1 MB level-1 mapping.
    Section,
    /// 16 MB level-1 mapping, 16 identical consecutive entries.
    Supersection,
    /// Level-1 entry referencing a level-2 table.
    L2Reference,
    /// 64 KB level-2 mapping, 16 identical consecutive entries.
    LargePage,
    /// 4 KB level-2 mapping.
    SmallPage,
}

impl PageTableEntryKind {
    /// Report label for this entry format.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fault => "Fault",
            Self::Section => "Section",
            Self::Supersection => "Supersection",
            Self::L2Reference => "L2 ref",
            Self::LargePage => "Large page",
            Self::SmallPage => "Small page",
        }
    }
}

/// The `APX:AP[1:0]` access-permission encodings, privileged/user views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AccessPermission {
    /// No access from either privilege level.
    NoAccess,
    /// Privileged read-write, no user access.
    PrivilegedOnly,
    /// Privileged read-write, user read-only.
    UserReadOnly,
    /// Read-write from both privilege levels.
    FullAccess,
    /// Privileged read-only, no user access.
    PrivilegedReadOnly,
    /// Read-only from both privilege levels.
    ReadOnly,
    /// One of the two reserved encodings.
    Reserved,
}

impl AccessPermission {
    /// Decodes the 3-bit `APX:AP[1:0]` group.
    #[must_use]
    pub const fn from_u3(value: u8) -> Self {
        match value & 0b111 {
            0b000 => Self::NoAccess,
            0b001 => Self::PrivilegedOnly,
            0b010 => Self::UserReadOnly,
            0b011 => Self::FullAccess,
            0b101 => Self::PrivilegedReadOnly,
            0b110 => Self::ReadOnly,
            _ => Self::Reserved,
        }
    }

    /// Canonical `privileged/user` permission string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoAccess => "--/--",
            Self::PrivilegedOnly => "RW/--",
            Self::UserReadOnly => "RW/R-",
            Self::FullAccess => "RW/RW",
            Self::PrivilegedReadOnly => "R-/--",
            Self::ReadOnly => "R-/R-",
            Self::Reserved => "rsrvd",
        }
    }
}

/// Memory type classes of the TEX/C/B encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MemoryType {
    /// All accesses observed in order, no caching or buffering.
    StronglyOrdered,
    /// Device memory, writes may be buffered.
    Device,
    /// Normal cacheable memory.
    Normal,
}

impl MemoryType {
    /// Report label for this memory type.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::StronglyOrdered => "Strongly-ordered",
            Self::Device => "Device",
            Self::Normal => "Normal",
        }
    }
}

/// Inner/outer cacheable-policy labels indexed by `TEX[1:0]:C:B`.
pub const CACHE_POLICIES: [&str; 16] = [
    "Cached OUTER 0 INNER 0",
    "Cached OUTER 0 INNER 1",
    "Cached OUTER 0 INNER 2",
    "Cached OUTER 0 INNER 3",
    "Cached OUTER 1 INNER 0",
    "Cached OUTER 1 INNER 1",
    "Cached OUTER 1 INNER 2",
    "Cached OUTER 1 INNER 3",
    "Cached OUTER 2 INNER 0",
    "Cached OUTER 2 INNER 1",
    "Cached OUTER 2 INNER 2",
    "Cached OUTER 2 INNER 3",
    "Cached OUTER 3 INNER 0",
    "Cached OUTER 3 INNER 1",
    "Cached OUTER 3 INNER 2",
    "Cached OUTER 3 INNER 3",
];

/// One interpreted descriptor word, flattened for rendering.
///
/// `None` and `false` render as blank report columns. Domain and the
/// privileged bit exist only in level-1 descriptors and are extracted for
/// every non-fault level-1 entry, including supersections (where the
/// architecture ignores the domain) and table references.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecodedEntry {
    /// Classified descriptor format.
    pub kind: PageTableEntryKind,
    /// P bit (bit 9 of a level-1 descriptor).
    pub privileged: bool,
    /// nG bit; `None` where the descriptor has none.
    pub non_global: Option<bool>,
    /// Domain field, `0..=15`; level-1 descriptors only.
    pub domain: Option<u8>,
    /// Physical base of a terminal mapping.
    pub physical_address: Option<u32>,
    /// Physical address of the referenced level-2 table.
    pub next_table_address: Option<u32>,
    /// S bit.
    pub shareable: bool,
    /// Decoded `APX:AP[1:0]` permission group.
    pub access_permission: Option<AccessPermission>,
    /// Caching policy label; `None` for unrecognised TEX/C/B combinations.
    pub caching: Option<String>,
    /// Memory type class; `None` alongside an unrecognised caching code.
    pub memory_type: Option<MemoryType>,
    /// XN bit.
    pub execute_never: bool,
}

impl DecodedEntry {
    /// A fault entry: every attribute column blank.
    #[must_use]
    pub const fn fault() -> Self {
        Self {
            kind: PageTableEntryKind::Fault,
            privileged: false,
            non_global: None,
            domain: None,
            physical_address: None,
            next_table_address: None,
            shareable: false,
            access_permission: None,
            caching: None,
            memory_type: None,
            execute_never: false,
        }
    }
}

/// Decode outcome steering the table walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ControlSignal {
    /// Terminal single-entry mapping; nothing further to do.
    Normal,
    /// Fault entry.
    Fault,
    /// First entry of what must be a 16-entry supersection run.
    SupersectionStart,
    /// First entry of what must be a 16-entry large-page run.
    LargePageStart,
    /// Entry references a level-2 table at this physical address.
    Continue(u32),
}

/// Decodes the normalized `TEX[2:0]` (bits 14:12) plus `C:B` (bits 3:2)
/// group shared by section and page descriptors.
///
/// Exact codes name the fixed policies; otherwise, with `TEX[2]` set,
/// `TEX[1:0]:C:B` index the inner/outer policy table. Anything else is an
/// unrecognised combination and renders blank.
fn region_attributes(word: u32) -> Option<(String, MemoryType)> {
    match word & 0x700C {
        0x0000 => Some(("STR ORD".to_owned(), MemoryType::StronglyOrdered)),
        0x0004 => Some(("SHR DEV".to_owned(), MemoryType::Device)),
        0x0008 => Some(("WRTHR, NAW".to_owned(), MemoryType::Normal)),
        0x000C => Some(("WRBCK, NAW".to_owned(), MemoryType::Normal)),
        0x1000 => Some(("NON CACH".to_owned(), MemoryType::Normal)),
        0x2000 => Some(("NONSHR DEV".to_owned(), MemoryType::Device)),
        _ if word & 0x4000 != 0 => {
            let index = (((word & 0x3000) >> 10) | ((word & 0xC) >> 2)) as usize;
            Some((CACHE_POLICIES[index].to_owned(), MemoryType::Normal))
        }
        _ => None,
    }
}

// APX at bit 15, AP[1:0] at bits 11:10.
const fn section_permission_bits(word: u32) -> u8 {
    (((word >> 13) & 0b100) | ((word >> 10) & 0b011)) as u8
}

// APX at bit 9, AP[1:0] at bits 5:4.
const fn page_permission_bits(word: u32) -> u8 {
    (((word >> 7) & 0b100) | ((word >> 4) & 0b011)) as u8
}

const fn domain_bits(word: u32) -> u8 {
    ((word >> 5) & 0xF) as u8
}

/// Interprets a level-1 descriptor word.
///
/// Classification by bits 1:0: `00`/`11` fault, `01` level-2 table
/// reference, `10` section (supersection when bit 18 is set).
#[must_use]
pub fn interpret_l1(word: u32) -> (DecodedEntry, ControlSignal) {
    match word & 0b11 {
        0b01 => {
            let next = word & 0xFFFF_FC00;
            let entry = DecodedEntry {
                kind: PageTableEntryKind::L2Reference,
                privileged: word & 0x200 != 0,
                domain: Some(domain_bits(word)),
                next_table_address: Some(next),
                ..DecodedEntry::fault()
            };
            let signal = if next == 0 {
                ControlSignal::Normal
            } else {
                ControlSignal::Continue(next)
            };
            (entry, signal)
        }
        0b10 => {
            let supersection = word & 0x0004_0000 != 0;
            let (caching, memory_type) = match region_attributes(word) {
                Some((caching, memory_type)) => (Some(caching), Some(memory_type)),
                None => (None, None),
            };
            let entry = DecodedEntry {
                kind: if supersection {
                    PageTableEntryKind::Supersection
                } else {
                    PageTableEntryKind::Section
                },
                privileged: word & 0x200 != 0,
                non_global: Some(word & 0x0002_0000 != 0),
                domain: Some(domain_bits(word)),
                physical_address: Some(word & 0xFFF0_0000),
                next_table_address: None,
                shareable: word & 0x0001_0000 != 0,
                access_permission: Some(AccessPermission::from_u3(section_permission_bits(word))),
                caching,
                memory_type,
                execute_never: word & 0x10 != 0,
            };
            let signal = if supersection {
                ControlSignal::SupersectionStart
            } else {
                ControlSignal::Normal
            };
            (entry, signal)
        }
        _ => (DecodedEntry::fault(), ControlSignal::Fault),
    }
}

/// Interprets a level-2 descriptor word.
///
/// Classification by bits 1:0: `00` fault, `01` large page, `1x` small
/// page. Small-page TEX bits (8:6) are re-packed into the large-page
/// layout before the shared attribute decode, so both page sizes go
/// through the same tables.
#[must_use]
pub fn interpret_l2(word: u32) -> (DecodedEntry, ControlSignal) {
    let (kind, physical_address, execute_never, normalized) = match word & 0b11 {
        0b01 => (
            PageTableEntryKind::LargePage,
            word & 0xFFFF_0000,
            word & 0x8000 != 0,
            word,
        ),
        0b10 | 0b11 => (
            PageTableEntryKind::SmallPage,
            word & 0xFFFF_F000,
            word & 0x1 != 0,
            ((word << 6) & 0x7000) | (word & 0xC),
        ),
        _ => return (DecodedEntry::fault(), ControlSignal::Fault),
    };

    let (caching, memory_type) = match region_attributes(normalized) {
        Some((caching, memory_type)) => (Some(caching), Some(memory_type)),
        None => (None, None),
    };
    let entry = DecodedEntry {
        kind,
        privileged: false,
        non_global: Some(word & 0x800 != 0),
        domain: None,
        physical_address: Some(physical_address),
        next_table_address: None,
        shareable: word & 0x400 != 0,
        access_permission: Some(AccessPermission::from_u3(page_permission_bits(word))),
        caching,
        memory_type,
        execute_never,
    };
    let signal = if kind == PageTableEntryKind::LargePage {
        ControlSignal::LargePageStart
    } else {
        ControlSignal::Normal
    };
    (entry, signal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_word_is_a_fault_at_both_levels() {
        let (entry, signal) = interpret_l1(0);
        assert_eq!(entry.kind, PageTableEntryKind::Fault);
        assert_eq!(signal, ControlSignal::Fault);

        let (entry, signal) = interpret_l2(0);
        assert_eq!(entry.kind, PageTableEntryKind::Fault);
        assert_eq!(signal, ControlSignal::Fault);
    }

    #[test]
    fn l1_type_bits_11_are_a_fault() {
        let (entry, signal) = interpret_l1(0x0000_0003);
        assert_eq!(entry.kind, PageTableEntryKind::Fault);
        assert_eq!(signal, ControlSignal::Fault);

        let (entry, _) = interpret_l1(0xFFFF_FFFF);
        assert_eq!(entry.kind, PageTableEntryKind::Fault);
    }

    #[test]
    fn section_extracts_address_domain_and_bits() {
        // base 0xABC00000, domain 5, P, nG, S, XN
        let word = 0xABC0_0000 | (5 << 5) | 0x200 | 0x0002_0000 | 0x0001_0000 | 0x10 | 0b10;
        let (entry, signal) = interpret_l1(word);
        assert_eq!(entry.kind, PageTableEntryKind::Section);
        assert_eq!(signal, ControlSignal::Normal);
        assert_eq!(entry.physical_address, Some(0xABC0_0000));
        assert_eq!(entry.domain, Some(5));
        assert!(entry.privileged);
        assert_eq!(entry.non_global, Some(true));
        assert!(entry.shareable);
        assert!(entry.execute_never);
        assert_eq!(entry.next_table_address, None);
    }

    #[test]
    fn supersection_is_flagged_by_bit_18() {
        let (entry, signal) = interpret_l1(0x0004_0002);
        assert_eq!(entry.kind, PageTableEntryKind::Supersection);
        assert_eq!(signal, ControlSignal::SupersectionStart);
    }

    #[test]
    fn l2_reference_carries_the_table_address() {
        let word = 0x0123_4400 | (3 << 5) | 0b01;
        let (entry, signal) = interpret_l1(word);
        assert_eq!(entry.kind, PageTableEntryKind::L2Reference);
        assert_eq!(entry.next_table_address, Some(0x0123_4400));
        assert_eq!(entry.domain, Some(3));
        assert_eq!(signal, ControlSignal::Continue(0x0123_4400));
        assert_eq!(entry.non_global, None);
        assert_eq!(entry.access_permission, None);
    }

    #[test]
    fn zero_table_address_does_not_recurse() {
        let (entry, signal) = interpret_l1(0x0000_0001);
        assert_eq!(entry.kind, PageTableEntryKind::L2Reference);
        assert_eq!(entry.next_table_address, Some(0));
        assert_eq!(signal, ControlSignal::Normal);
    }

    #[test]
    fn section_permission_group_spans_bits_15_11_10() {
        let cases: [(u32, AccessPermission); 8] = [
            (0x0000, AccessPermission::NoAccess),
            (0x0400, AccessPermission::PrivilegedOnly),
            (0x0800, AccessPermission::UserReadOnly),
            (0x0C00, AccessPermission::FullAccess),
            (0x8000, AccessPermission::Reserved),
            (0x8400, AccessPermission::PrivilegedReadOnly),
            (0x8800, AccessPermission::ReadOnly),
            (0x8C00, AccessPermission::Reserved),
        ];
        for (bits, expected) in cases {
            let (entry, _) = interpret_l1(bits | 0b10);
            assert_eq!(entry.access_permission, Some(expected), "bits 0x{bits:04X}");
        }
    }

    #[test]
    fn fixed_caching_codes_decode_for_sections() {
        let cases: [(u32, &str, MemoryType); 6] = [
            (0x0000, "STR ORD", MemoryType::StronglyOrdered),
            (0x0004, "SHR DEV", MemoryType::Device),
            (0x0008, "WRTHR, NAW", MemoryType::Normal),
            (0x000C, "WRBCK, NAW", MemoryType::Normal),
            (0x1000, "NON CACH", MemoryType::Normal),
            (0x2000, "NONSHR DEV", MemoryType::Device),
        ];
        for (bits, caching, memory_type) in cases {
            let (entry, _) = interpret_l1(bits | 0b10);
            assert_eq!(entry.caching.as_deref(), Some(caching), "bits 0x{bits:04X}");
            assert_eq!(entry.memory_type, Some(memory_type));
        }
    }

    #[test]
    fn tex_remap_indexes_the_policy_table() {
        // TEX=0b101, C=0, B=1 -> outer 1, inner 1
        let (entry, _) = interpret_l1(0x5004 | 0b10);
        assert_eq!(entry.caching.as_deref(), Some("Cached OUTER 1 INNER 1"));
        assert_eq!(entry.memory_type, Some(MemoryType::Normal));
    }

    #[test]
    fn unrecognised_caching_combination_renders_blank() {
        // TEX=0b001, C=0, B=0: no exact code and TEX[2] clear
        let (entry, _) = interpret_l1(0x1004 | 0b10);
        assert_eq!(entry.caching, None);
        assert_eq!(entry.memory_type, None);
    }

    #[test]
    fn large_page_decodes_address_and_xn() {
        let (entry, signal) = interpret_l2(0x0000_0001);
        assert_eq!(entry.kind, PageTableEntryKind::LargePage);
        assert_eq!(entry.physical_address, Some(0));
        assert!(!entry.execute_never);
        assert_eq!(signal, ControlSignal::LargePageStart);

        let (entry, _) = interpret_l2(0xABCD_8001);
        assert_eq!(entry.physical_address, Some(0xABCD_0000));
        assert!(entry.execute_never);
    }

    #[test]
    fn small_page_decodes_address_and_xn() {
        let (entry, signal) = interpret_l2(0x1234_5002 | 1);
        assert_eq!(entry.kind, PageTableEntryKind::SmallPage);
        assert_eq!(entry.physical_address, Some(0x1234_5000));
        assert!(entry.execute_never);
        assert_eq!(signal, ControlSignal::Normal);
    }

    #[test]
    fn small_page_tex_bits_are_repacked() {
        // small page TEX at bits 8:6 = 0b101, B set: same policy index as
        // the section vector above
        let word = (0b101 << 6) | (1 << 2) | 0b10;
        let (entry, _) = interpret_l2(word);
        assert_eq!(entry.caching.as_deref(), Some("Cached OUTER 1 INNER 1"));
        assert_eq!(entry.memory_type, Some(MemoryType::Normal));
    }

    #[test]
    fn page_permission_group_spans_bits_9_5_4() {
        let cases: [(u32, AccessPermission); 4] = [
            (0x000, AccessPermission::NoAccess),
            (0x010, AccessPermission::PrivilegedOnly),
            (0x030, AccessPermission::FullAccess),
            (0x210, AccessPermission::PrivilegedReadOnly),
        ];
        for (bits, expected) in cases {
            let (entry, _) = interpret_l2(bits | 0b10);
            assert_eq!(entry.access_permission, Some(expected), "bits 0x{bits:04X}");
        }
    }

    #[test]
    fn l2_entries_have_no_domain_or_privileged_bit() {
        let (entry, _) = interpret_l2(0x0000_0802 | 0x400);
        assert_eq!(entry.domain, None);
        assert!(!entry.privileged);
        assert_eq!(entry.non_global, Some(true));
        assert!(entry.shareable);
    }
}
