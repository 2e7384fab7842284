// src/encode/bits.rs

//! Set-bit positions of an integer's minimal binary representation.
//!
//! Positions are 1-based and counted from the most significant set bit, so
//! `5` (`101`) has its ones at positions 1 and 3. The flat layout used by
//! [`one_bit_positions`] puts the population count first: `[2, 1, 3]`.

use bitvec::prelude::*;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BitsError {
    #[error("Negative value has no minimal binary form: {0}")]
    Negative(i64),
}

/// The set bits of a value, MSB-first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BitPositions {
    width: u32,
    positions: Vec<u32>,
}

impl BitPositions {
    /// Collects the 1-based positions of every set bit in `n`.
    pub fn of(n: u64) -> Self {
        let bits = n.view_bits::<Msb0>();

        // Leading zeros are not part of the minimal representation.
        let Some(lead) = bits.first_one() else {
            return Self::default();
        };

        let positions: Vec<u32> = bits[lead..]
            .iter_ones()
            .map(|idx| idx as u32 + 1)
            .collect();

        #[cfg(feature = "debug-logging")]
        log::trace!("{:#b}: {} set bits at {:?}", n, positions.len(), positions);

        Self {
            width: (bits.len() - lead) as u32,
            positions,
        }
    }

    /// Signed entry point. Negative values are rejected rather than read as
    /// two's complement.
    pub fn from_signed(n: i64) -> Result<Self, BitsError> {
        if n < 0 {
            return Err(BitsError::Negative(n));
        }
        Ok(Self::of(n as u64))
    }

    /// Number of set bits.
    pub fn count(&self) -> u32 {
        self.positions.len() as u32
    }

    pub fn positions(&self) -> &[u32] {
        &self.positions
    }

    /// Length of the minimal binary representation; 0 for zero.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Rebuilds the value the positions were taken from.
    pub fn value(&self) -> u64 {
        self.positions
            .iter()
            .fold(0u64, |acc, &pos| acc | 1u64 << (self.width - pos))
    }

    /// Flat `[count, pos1, pos2, ...]` layout.
    pub fn to_vec(&self) -> Vec<u32> {
        let mut out = Vec::with_capacity(self.positions.len() + 1);
        out.push(self.count());
        out.extend_from_slice(&self.positions);
        out
    }
}

impl From<u64> for BitPositions {
    fn from(n: u64) -> Self {
        Self::of(n)
    }
}

/// Returns `[count, pos1, pos2, ...]` for the set bits of `n`, MSB-first.
pub fn one_bit_positions(n: u64) -> Vec<u32> {
    BitPositions::of(n).to_vec()
}
