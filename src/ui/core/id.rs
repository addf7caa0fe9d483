/// Identity of a hit-test node.
///
/// Ids are derived from what a node shows (e.g. which habit a row renders), not from where it
/// sits, so hover and drag sessions keep pointing at the same habit across a reorder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Id(pub u64);

impl Id {
    pub const fn raw(v: u64) -> Self {
        Self(v)
    }
}

/// Incremental FNV-1a 64 builder for [`Id`]s.
///
/// `std` hashers are not used: their output may change between toolchains.
#[derive(Clone, Copy, Debug)]
pub struct IdPath {
    h: u64,
}

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;
const SEGMENT_END: u8 = 0xff;

impl IdPath {
    pub fn root(ns: &'static str) -> Self {
        Self {
            h: FNV_OFFSET_BASIS,
        }
        .feed(ns.as_bytes())
    }

    pub fn push_str(self, s: &str) -> Self {
        self.feed(s.as_bytes()).feed(&[SEGMENT_END])
    }

    pub fn push_u64(self, v: u64) -> Self {
        self.feed(&v.to_le_bytes()).feed(&[SEGMENT_END])
    }

    pub fn finish(self) -> Id {
        Id(self.h)
    }

    fn feed(mut self, bytes: &[u8]) -> Self {
        for &b in bytes {
            self.h ^= b as u64;
            self.h = self.h.wrapping_mul(FNV_PRIME);
        }
        self
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/id.rs"]
mod tests;
