//! A lossy, fixed-capacity cache of position score bounds

#[derive(Copy, Clone)]
struct Entry {
    key: u32,
    value: u8,
}
impl Entry {
    pub fn new() -> Self {
        Self { key: 0, value: 0 }
    }
}

const TABLE_MAX_SIZE: usize = (1 << 23) + 9; // prime value

/// A best-effort map from position keys to small non-zero score bounds
///
/// # Notes
/// Slots are indexed by `key % TABLE_MAX_SIZE` and hold only the low 32 bits
/// of the 49-bit key, so a lookup can rarely report a value stored for an
/// unrelated position. Callers must treat the value as an upper-bound hint
/// only; a mistaken bound then costs a re-search, never a wrong result.
/// The value 0 is reserved to mean "no entry"
pub struct TranspositionTable {
    entries: Vec<Entry>,
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self {
            entries: vec![Entry::new(); TABLE_MAX_SIZE],
        }
    }

    /// Stores a value, unconditionally evicting any previous slot occupant
    pub fn set(&mut self, key: u64, value: u8) {
        let len = self.entries.len();
        self.entries[key as usize % len] = Entry {
            key: key as u32,
            value,
        };
    }

    /// Returns the value stored for a key, or 0 if none is present
    pub fn get(&self, key: u64) -> u8 {
        let entry = self.entries[key as usize % self.entries.len()];
        if entry.key == key as u32 {
            entry.value
        } else {
            0
        }
    }

    /// Forgets every stored entry
    pub fn reset(&mut self) {
        self.entries.fill(Entry::new());
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new()
    }
}
