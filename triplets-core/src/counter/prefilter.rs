//! Collision-count pre-filter.
//!
//! Before a bucket is counted exactly, every candidate is hashed into a
//! small occupancy table of `10 + n/8` slots. A slot's occupancy is the
//! number of candidates that landed there, which is at least the true count
//! of any single triplet in it. A candidate whose slot occupancy does not
//! exceed the current threshold therefore cannot rank above it and is
//! compacted out of the bucket.
//!
//! The estimate only ever over-counts: unrelated triplets sharing a slot
//! inflate it (false positives reach exact counting), but a triplet that
//! can beat the threshold is never dropped.

use crate::counter::partition::Bucket;

/// FNV-1a 32-bit offset basis.
pub const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;

/// FNV-1a 32-bit prime (16777619).
pub const FNV_PRIME: u32 = 0x0100_0193;

/// Byte-wise XOR-then-multiply hash (FNV-1a, 32-bit).
#[inline(always)]
pub fn fnv1a_32(bytes: &[u8]) -> u32 {
    let mut hash = FNV_OFFSET_BASIS;
    for &b in bytes {
        hash ^= b as u32;
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Occupancy table size for a bucket of `candidates` entries.
#[inline(always)]
pub const fn table_size(candidates: usize) -> usize {
    10 + candidates / 8
}

/// Reusable pre-filter state.
///
/// Holds the occupancy table and the per-candidate slot list between
/// buckets so they are only grown, never reallocated per bucket.
#[derive(Debug, Default)]
pub struct PreFilter {
    occupancy: Vec<u32>,
    slots: Vec<u32>,
}

impl PreFilter {
    /// Creates an empty pre-filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every candidate of `bucket` whose slot occupancy is `<= threshold`.
    ///
    /// Survivors keep their relative order. Returns the number of candidates
    /// removed.
    pub fn retain(&mut self, bucket: &mut Bucket<'_>, threshold: u32) -> usize {
        let n = bucket.len();
        let size = table_size(n);

        self.occupancy.clear();
        self.occupancy.resize(size, 0);
        self.slots.clear();
        self.slots.reserve(n);

        for candidate in bucket.iter() {
            let slot = (fnv1a_32(candidate) as usize % size) as u32;
            self.slots.push(slot);
            let occ = &mut self.occupancy[slot as usize];
            *occ = occ.saturating_add(1);
        }

        let mut kept = 0usize;
        for i in 0..n {
            if self.occupancy[self.slots[i] as usize] > threshold {
                bucket[kept] = bucket[i];
                kept += 1;
            }
        }
        bucket.truncate(kept);

        n - kept
    }

    /// Occupancy of the slot `candidate` maps to after the last [`retain`](Self::retain).
    ///
    /// Returns 0 before the first call.
    pub fn estimate(&self, candidate: &[u8]) -> u32 {
        if self.occupancy.is_empty() {
            return 0;
        }
        self.occupancy[fnv1a_32(candidate) as usize % self.occupancy.len()]
    }
}
