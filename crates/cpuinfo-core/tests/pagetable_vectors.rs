//! Known vectors and classification properties for the translation-table
//! interpreter.

use cpuinfo_core::pagetable::{
    interpret_l1, interpret_l2, AccessPermission, ControlSignal, MemoryType, PageTableEntryKind,
    CACHE_POLICIES,
};
use proptest::prelude::*;
use rstest::rstest;
#[cfg(feature = "serde")]
use serde as _;
use thiserror as _;

#[test]
fn l1_zero_word_is_a_fault() {
    let (entry, signal) = interpret_l1(0x0000_0000);
    assert_eq!(entry.kind, PageTableEntryKind::Fault);
    assert_eq!(signal, ControlSignal::Fault);
}

#[test]
fn l1_vector_0x412_is_a_no_access_strongly_ordered_section() {
    let (entry, signal) = interpret_l1(0x0000_0412);
    assert_eq!(entry.kind, PageTableEntryKind::Section);
    assert_eq!(signal, ControlSignal::Normal);
    assert_eq!(entry.access_permission, Some(AccessPermission::NoAccess));
    assert_eq!(entry.access_permission.map(AccessPermission::as_str), Some("--/--"));
    assert_eq!(entry.memory_type, Some(MemoryType::StronglyOrdered));
    assert_eq!(entry.caching.as_deref(), Some("STR ORD"));
    assert_eq!(entry.domain, Some(0));
    assert_eq!(entry.physical_address, Some(0));
    assert!(entry.execute_never);
    assert!(!entry.privileged);
}

#[test]
fn l2_word_1_is_a_large_page_with_xn_at_bit_15() {
    let (entry, signal) = interpret_l2(0x0000_0001);
    assert_eq!(entry.kind, PageTableEntryKind::LargePage);
    assert_eq!(signal, ControlSignal::LargePageStart);
    assert!(!entry.execute_never);

    let (entry, _) = interpret_l2(0x0000_8001);
    assert!(entry.execute_never);
}

#[test]
fn cache_policy_index_0b0101_is_outer_1_inner_1() {
    assert_eq!(CACHE_POLICIES[0b0101], "Cached OUTER 1 INNER 1");
}

#[rstest]
#[case(0b000, "--/--")]
#[case(0b001, "RW/--")]
#[case(0b010, "RW/R-")]
#[case(0b011, "RW/RW")]
#[case(0b100, "rsrvd")]
#[case(0b101, "R-/--")]
#[case(0b110, "R-/R-")]
#[case(0b111, "rsrvd")]
fn all_eight_permission_encodings(#[case] value: u8, #[case] expected: &str) {
    assert_eq!(AccessPermission::from_u3(value).as_str(), expected);
}

fn expected_l1_kind(word: u32) -> PageTableEntryKind {
    match word & 0b11 {
        0b01 => PageTableEntryKind::L2Reference,
        0b10 if word & 0x0004_0000 != 0 => PageTableEntryKind::Supersection,
        0b10 => PageTableEntryKind::Section,
        _ => PageTableEntryKind::Fault,
    }
}

fn expected_l2_kind(word: u32) -> PageTableEntryKind {
    match word & 0b11 {
        0b01 => PageTableEntryKind::LargePage,
        0b10 | 0b11 => PageTableEntryKind::SmallPage,
        _ => PageTableEntryKind::Fault,
    }
}

proptest! {
    #[test]
    fn l1_classification_is_exhaustive_and_exclusive(word in any::<u32>()) {
        let (entry, signal) = interpret_l1(word);
        prop_assert_eq!(entry.kind, expected_l1_kind(word));
        match entry.kind {
            PageTableEntryKind::Fault => prop_assert_eq!(signal, ControlSignal::Fault),
            PageTableEntryKind::Supersection => {
                prop_assert_eq!(signal, ControlSignal::SupersectionStart);
            }
            PageTableEntryKind::Section => prop_assert_eq!(signal, ControlSignal::Normal),
            PageTableEntryKind::L2Reference => {
                let next = word & 0xFFFF_FC00;
                if next == 0 {
                    prop_assert_eq!(signal, ControlSignal::Normal);
                } else {
                    prop_assert_eq!(signal, ControlSignal::Continue(next));
                }
            }
            PageTableEntryKind::LargePage | PageTableEntryKind::SmallPage => {
                prop_assert!(false, "level-2 kind out of a level-1 decode");
            }
        }
    }

    #[test]
    fn l2_classification_is_exhaustive_and_exclusive(word in any::<u32>()) {
        let (entry, signal) = interpret_l2(word);
        prop_assert_eq!(entry.kind, expected_l2_kind(word));
        match entry.kind {
            PageTableEntryKind::Fault => prop_assert_eq!(signal, ControlSignal::Fault),
            PageTableEntryKind::LargePage => {
                prop_assert_eq!(signal, ControlSignal::LargePageStart);
            }
            PageTableEntryKind::SmallPage => prop_assert_eq!(signal, ControlSignal::Normal),
            _ => prop_assert!(false, "level-1 kind out of a level-2 decode"),
        }
    }

    #[test]
    fn interpretation_is_idempotent(word in any::<u32>()) {
        prop_assert_eq!(interpret_l1(word), interpret_l1(word));
        prop_assert_eq!(interpret_l2(word), interpret_l2(word));
    }

    #[test]
    fn fault_entries_are_fully_blank(word in any::<u32>()) {
        let (entry, _) = interpret_l1(word & !0b11);
        prop_assert_eq!(entry.kind, PageTableEntryKind::Fault);
        prop_assert_eq!(entry.physical_address, None);
        prop_assert_eq!(entry.next_table_address, None);
        prop_assert_eq!(entry.domain, None);
        prop_assert_eq!(entry.access_permission, None);
    }
}
