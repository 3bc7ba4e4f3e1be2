//! Invariants over the built-in register descriptor tables.

use cpuinfo_core::{decode_fields, RegisterSet};
use proptest::prelude::*;
use rstest::rstest;
#[cfg(feature = "serde")]
use serde as _;
use thiserror as _;

const BOTH_SETS: [RegisterSet; 2] = [RegisterSet::Vmsa, RegisterSet::Pmsa];

#[test]
fn every_descriptor_spans_exactly_32_bits() {
    for set in BOTH_SETS {
        for descriptor in set.descriptors() {
            assert_eq!(
                descriptor.width_sum(),
                32,
                "{set} register '{}' does not span the word",
                descriptor.name
            );
        }
    }
}

#[test]
fn field_widths_are_in_range() {
    for set in BOTH_SETS {
        for descriptor in set.descriptors() {
            for field in descriptor.fields {
                assert!(
                    (1..=32).contains(&field.width),
                    "{set} register '{}' field '{}' has width {}",
                    descriptor.name,
                    field.label,
                    field.width
                );
            }
        }
    }
}

#[test]
fn word_counts_derive_from_the_tables() {
    assert_eq!(RegisterSet::Vmsa.word_count(), 41);
    assert_eq!(RegisterSet::Pmsa.word_count(), 58);
    assert_eq!(RegisterSet::Vmsa.dump_len(), 41 * 4);
    assert_eq!(RegisterSet::Pmsa.dump_len(), 58 * 4);
}

#[rstest]
#[case(0, "1")]
#[case(10, "1K")]
#[case(15, "32K")]
#[case(16, "invalid")]
fn power_of_two_formatter(#[case] value: u32, #[case] expected: &str) {
    assert_eq!(cpuinfo_core::format::power_of_two(value), expected);
}

#[rstest]
#[case(0, "P:-- U:--")]
#[case(3, "P:RW U:RW")]
#[case(6, "P:R- U:R-")]
#[case(7, "P:?? U:??")]
fn mpu_permission_formatter(#[case] value: u32, #[case] expected: &str) {
    assert_eq!(cpuinfo_core::format::mpu_access_permission(value), expected);
}

proptest! {
    #[test]
    fn one_field_per_spec_with_values_in_range(word in any::<u32>()) {
        for set in BOTH_SETS {
            for descriptor in set.descriptors() {
                let fields = decode_fields(word, descriptor);
                prop_assert_eq!(fields.len(), descriptor.fields.len());
                for (field, spec) in fields.iter().zip(descriptor.fields) {
                    if spec.width < 32 {
                        prop_assert!(
                            u64::from(field.raw) < (1u64 << spec.width),
                            "register '{}' field '{}' out of range",
                            descriptor.name,
                            spec.label
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn shifting_and_oring_fields_rebuilds_the_word(word in any::<u32>()) {
        for set in BOTH_SETS {
            for descriptor in set.descriptors() {
                let fields = decode_fields(word, descriptor);
                let mut rebuilt = 0u32;
                let mut offset = 0u32;
                for (field, spec) in fields.iter().zip(descriptor.fields) {
                    rebuilt |= field.raw << offset;
                    offset += u32::from(spec.width);
                }
                prop_assert_eq!(rebuilt, word, "register '{}'", descriptor.name);
            }
        }
    }

    #[test]
    fn decoding_twice_yields_identical_output(word in any::<u32>()) {
        for set in BOTH_SETS {
            for descriptor in set.descriptors() {
                prop_assert_eq!(
                    decode_fields(word, descriptor),
                    decode_fields(word, descriptor)
                );
            }
        }
    }
}
