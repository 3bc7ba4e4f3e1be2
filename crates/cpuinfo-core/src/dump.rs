//! Raw dump loading and register-set detection.
//!
//! A dump file is a flat array of little-endian 32-bit words with no
//! header, so its length is the only structural information available.
//! Feeding a dump captured for one register layout into the other would
//! silently misinterpret every field, so length validation is fatal here
//! rather than best-effort.

use thiserror::Error;

use crate::registers::RegisterSet;

/// Errors raised while loading a raw dump.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DumpError {
    /// The dump length matches neither register layout.
    #[error("dump is {actual} bytes; expected {vmsa} (VMSA) or {pmsa} (PMSA)")]
    UnknownLength {
        /// Length of the supplied dump.
        actual: usize,
        /// Expected VMSA dump length.
        vmsa: usize,
        /// Expected PMSA dump length.
        pmsa: usize,
    },
    /// The dump length does not match the selected register layout.
    #[error("dump is {actual} bytes but the {set} layout expects {expected}")]
    SizeMismatch {
        /// Length of the supplied dump.
        actual: usize,
        /// Expected dump length for `set`.
        expected: usize,
        /// The selected layout.
        set: RegisterSet,
    },
}

/// Reinterprets little-endian bytes as 32-bit words.
///
/// Trailing bytes that do not fill a word are ignored; callers that need
/// exact sizing go through [`load_register_dump`].
#[must_use]
pub fn words_from_bytes(bytes: &[u8]) -> Vec<u32> {
    bytes
        .chunks_exact(4)
        .map(|chunk| u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}

/// Determines the register layout implied by a dump length.
///
/// # Errors
///
/// [`DumpError::UnknownLength`] when the length matches neither layout.
pub fn detect_register_set(len: usize) -> Result<RegisterSet, DumpError> {
    if len == RegisterSet::Vmsa.dump_len() {
        Ok(RegisterSet::Vmsa)
    } else if len == RegisterSet::Pmsa.dump_len() {
        Ok(RegisterSet::Pmsa)
    } else {
        Err(DumpError::UnknownLength {
            actual: len,
            vmsa: RegisterSet::Vmsa.dump_len(),
            pmsa: RegisterSet::Pmsa.dump_len(),
        })
    }
}

/// Loads a register dump captured for `set`.
///
/// # Errors
///
/// [`DumpError::SizeMismatch`] unless the dump length matches the layout
/// exactly.
pub fn load_register_dump(bytes: &[u8], set: RegisterSet) -> Result<Vec<u32>, DumpError> {
    if bytes.len() != set.dump_len() {
        return Err(DumpError::SizeMismatch {
            actual: bytes.len(),
            expected: set.dump_len(),
            set,
        });
    }
    Ok(words_from_bytes(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_are_little_endian() {
        let words = words_from_bytes(&[0x78, 0x56, 0x34, 0x12, 0xFF, 0x00, 0x00, 0x00]);
        assert_eq!(words, vec![0x1234_5678, 0x0000_00FF]);
    }

    #[test]
    fn trailing_bytes_are_ignored() {
        let words = words_from_bytes(&[1, 0, 0, 0, 0xAA, 0xBB]);
        assert_eq!(words, vec![1]);
    }

    #[test]
    fn detection_resolves_both_layouts() {
        assert_eq!(
            detect_register_set(RegisterSet::Vmsa.dump_len()),
            Ok(RegisterSet::Vmsa)
        );
        assert_eq!(
            detect_register_set(RegisterSet::Pmsa.dump_len()),
            Ok(RegisterSet::Pmsa)
        );
    }

    #[test]
    fn detection_rejects_other_lengths() {
        let error = detect_register_set(100).expect_err("100 bytes matches no layout");
        assert!(matches!(error, DumpError::UnknownLength { actual: 100, .. }));
    }

    #[test]
    fn load_rejects_a_dump_for_the_other_layout() {
        let bytes = vec![0u8; RegisterSet::Vmsa.dump_len()];
        let error = load_register_dump(&bytes, RegisterSet::Pmsa)
            .expect_err("VMSA-sized dump must not load as PMSA");
        assert!(matches!(
            error,
            DumpError::SizeMismatch {
                set: RegisterSet::Pmsa,
                ..
            }
        ));
    }

    #[test]
    fn load_accepts_an_exact_dump() {
        let bytes = vec![0u8; RegisterSet::Pmsa.dump_len()];
        let words = load_register_dump(&bytes, RegisterSet::Pmsa).expect("exact length loads");
        assert_eq!(words.len(), RegisterSet::Pmsa.word_count());
    }
}
