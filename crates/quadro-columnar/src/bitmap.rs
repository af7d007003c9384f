#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

/// A compact bit vector used for column validity and boolean storage.
///
/// Bits are stored little-endian within each `u64` word: bit 0 is the LSB of
/// word 0, bit 63 is the MSB of word 0. When used as a validity mask, a set
/// bit means the slot holds a real value and a cleared bit marks an NA slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitVec {
    words: Vec<u64>,
    len: usize,
    ones: usize,
}

impl BitVec {
    pub fn new() -> Self {
        Self {
            words: Vec::new(),
            len: 0,
            ones: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn push(&mut self, value: bool) {
        let bit = self.len % 64;
        if bit == 0 {
            self.words.push(0);
        }

        if value {
            let word = self.len / 64;
            self.words[word] |= 1u64 << bit;
            self.ones += 1;
        }

        self.len += 1;
    }

    pub fn get(&self, index: usize) -> bool {
        debug_assert!(index < self.len, "BitVec index out of bounds");
        let word = self.words[index / 64];
        let bit = index % 64;
        ((word >> bit) & 1) == 1
    }

    pub fn count_ones(&self) -> usize {
        self.ones
    }
}

impl Default for BitVec {
    fn default() -> Self {
        Self::new()
    }
}
