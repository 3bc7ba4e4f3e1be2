//! Field formatter functions.
//!
//! Each formatter encodes one ARM encoding table as a pure total function
//! from the raw field value to a display string. Out-of-table values map
//! to an explicit marker (`"invalid"`, `"reserved"`, `"???"`, `"-"`),
//! never an error, so a malformed dump still produces a full report.

/// Power-of-two labels for exponents `0..=15`.
const POWER_LABELS: [&str; 16] = [
    "1", "2", "4", "8", "16", "32", "64", "128", "256", "512", "1K", "2K", "4K", "8K", "16K",
    "32K",
];

/// Region size labels for `4K..=4G`.
const SIZE_LABELS: [&str; 21] = [
    "4K", "8K", "16K", "32K", "64K", "128K", "256K", "512K", "1M", "2M", "4M", "8M", "16M", "32M",
    "64M", "128M", "256M", "512M", "1G", "2G", "4G",
];

fn lookup(table: &'static [&'static str], value: u32) -> Option<&'static str> {
    usize::try_from(value).ok().and_then(|i| table.get(i)).copied()
}

/// `2^value`, the common count encoding of the cache type register.
#[must_use]
pub fn power_of_two(value: u32) -> String {
    lookup(&POWER_LABELS, value).unwrap_or("invalid").to_owned()
}

/// Exclusives-reservation and cache-writeback granule encoding.
#[must_use]
pub fn reservation_granule(value: u32) -> String {
    if value == 0 {
        "no info".to_owned()
    } else if value > 9 {
        "reserved".to_owned()
    } else {
        power_of_two(value)
    }
}

/// Cache line size in words, stored as `log2(words) - 2`.
#[must_use]
pub fn line_size_words(value: u32) -> String {
    lookup(&POWER_LABELS, value.saturating_add(2))
        .unwrap_or("invalid")
        .to_owned()
}

/// Associativity and set-count encoding, stored minus one.
#[must_use]
pub fn plus_one(value: u32) -> String {
    (u64::from(value) + 1).to_string()
}

/// TCM size encoding: a `4K..=8M` window of the size ladder.
#[must_use]
pub fn tcm_size(value: u32) -> String {
    if value == 0 {
        "0".to_owned()
    } else if (3..=14).contains(&value) {
        lookup(&SIZE_LABELS, value - 3).unwrap_or("invalid").to_owned()
    } else {
        "invalid".to_owned()
    }
}

/// Base address stored in the top 20 bits, rendered as a byte address.
#[must_use]
pub fn page_base_address(value: u32) -> String {
    format!("0x{:08x}", value << 12)
}

/// TTBR translation-table base, stored shifted right by 7.
#[must_use]
pub fn table_base_address(value: u32) -> String {
    format!("0x{:08x}", value << 7)
}

/// TTBCR.N selects how much of the level-1 walk TTBR0 covers.
#[must_use]
pub fn ttbr0_table_size(value: u32) -> String {
    let bytes = 128u32 << (7 - (value & 7));
    format!("TTBR0 table size {bytes} bytes")
}

/// MPU region size encoding, spanning `32` bytes to `4G`.
#[must_use]
pub fn mpu_region_size(value: u32) -> String {
    if !(4..=31).contains(&value) {
        "invalid".to_owned()
    } else if value < 11 {
        lookup(&POWER_LABELS, value + 1).unwrap_or("invalid").to_owned()
    } else {
        lookup(&SIZE_LABELS, value - 11).unwrap_or("invalid").to_owned()
    }
}

/// Renders an 8-bit subregion-disable mask as binary digits, bit 7 first.
#[must_use]
pub fn subregion_bits(value: u32) -> String {
    (0..8)
        .rev()
        .map(|bit| if value & (1 << bit) == 0 { '0' } else { '1' })
        .collect()
}

/// MPU region access permission, privileged and user views.
#[must_use]
pub fn mpu_access_permission(value: u32) -> String {
    match value {
        0 => "P:-- U:--",
        1 => "P:RW U:--",
        2 => "P:RW U:R-",
        3 => "P:RW U:RW",
        5 => "P:R- U:--",
        6 => "P:R- U:R-",
        _ => "P:?? U:??",
    }
    .to_owned()
}

/// Composite MPU region-attribute decode over the low 6 bits.
///
/// With bit 5 set, bits 1:0 select the inner policy and bits 4:3 the
/// outer policy; otherwise bits {4:3,1:0} select from the combined table.
#[must_use]
pub fn region_attributes(value: u32) -> String {
    let shared = if value & 0x4 == 0 { "Non-shared" } else { "Shared" };

    if value & 0x20 != 0 {
        let inner = match value & 0x3 {
            0 => "Inner Non-cacheable",
            1 => "Inner Write-back, write-allocate",
            2 => "Inner Write-through, no write-allocate",
            _ => "Inner Write-back, no write-allocate",
        };
        let outer = match (value >> 3) & 0x3 {
            0 => "Outer Non-cacheable",
            1 => "Outer Write-back, write-allocate",
            2 => "Outer Write-through, no write-allocate",
            _ => "Outer Write-back, no write-allocate",
        };
        return format!("{inner}; {outer}; {shared}");
    }

    let (policy, shared) = match value & 0x1B {
        0x00 => ("Strongly ordered, shareable", ""),
        0x01 => ("Shareable device", "Shareable"),
        0x02 => ("Outer and Inner write-through, no write-allocate", shared),
        0x03 => ("Outer and Inner write-back, no write-allocate", shared),
        0x08 => ("Outer and Inner Non-cacheable", shared),
        0x0B => ("Outer and Inner write-back, write-allocate", shared),
        0x10 => ("Non-shareable Device", ""),
        _ => ("(reserved)", ""),
    };
    format!("{policy}; {shared}")
}

/// Cache arrangement at one cache level.
#[must_use]
pub fn cache_type(value: u32) -> String {
    match value {
        0 => "no cache",
        1 => "Icache only",
        2 => "Dcache only",
        3 => "Separate Icache, Dcache",
        4 => "Unified cache",
        _ => "-",
    }
    .to_owned()
}

/// Cache-maintenance support fields of memory model feature register 3.
#[must_use]
pub fn maintenance_support(value: u32) -> String {
    match value {
        0 => "Not supported",
        1 => "Supported",
        _ => "(invalid)",
    }
    .to_owned()
}

/// Branch predictor maintenance field of memory model feature register 3.
#[must_use]
pub fn branch_predictor_maintenance(value: u32) -> String {
    match value {
        0 => "Not supported",
        1 => "Invalidate all",
        2 => "Invalidate all, invalidate by MVA",
        _ => "(invalid)",
    }
    .to_owned()
}

/// Cached memory size field of memory model feature register 3.
#[must_use]
pub fn cached_memory_size(value: u32) -> String {
    match value {
        0 => "4 GByte",
        1 => "64 GByte",
        2 => "1 TByte",
        _ => "(invalid)",
    }
    .to_owned()
}

/// Supersection support field of memory model feature register 3.
#[must_use]
pub fn supersection_support(value: u32) -> String {
    match value {
        0 => "Supported",
        15 => "Not supported",
        _ => "(invalid)",
    }
    .to_owned()
}

/// Unified versus split TLB arrangement.
#[must_use]
pub fn tlb_arrangement(value: u32) -> String {
    match value {
        0 => "Unified TLB",
        1 => "Separate data and instruction TLB",
        _ => "???",
    }
    .to_owned()
}

/// TLB entry count encoding.
#[must_use]
pub fn tlb_entry_count(value: u32) -> String {
    match value {
        0 => "64",
        1 => "128",
        2 => "256",
        3 => "512",
        _ => "???",
    }
    .to_owned()
}

/// Debug architecture version of the debug ID register.
#[must_use]
pub fn debug_version(value: u32) -> String {
    match value {
        0b0001 => "v6",
        0b0010 => "v6.1",
        0b0011 => "v7 full",
        0b0100 => "v7 basic",
        0b0101 => "v7.1",
        0b0110 => "v8",
        0b0111 => "v8.1",
        0b1000 => "v8.2",
        _ => "???",
    }
    .to_owned()
}
