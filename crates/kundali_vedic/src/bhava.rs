//! Whole-sign houses.
//!
//! The sign holding the ascendant is house 1; each following sign is the
//! next house. House `h` (1-based) is sign `(asc + h - 1) mod 12`.

use crate::error::VedicError;
use crate::rashi::{ALL_RASHIS, Rashi};

/// Sign of each house; index 0 is house 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WholeSignHouses {
    signs: [Rashi; 12],
}

impl WholeSignHouses {
    /// Sign of house `house` (1-12).
    pub fn sign_of(&self, house: u8) -> Option<Rashi> {
        let idx = usize::from(house).checked_sub(1)?;
        self.signs.get(idx).copied()
    }

    pub fn lagna(&self) -> Rashi {
        self.signs[0]
    }

    pub fn signs(&self) -> &[Rashi; 12] {
        &self.signs
    }

    /// `(house number, sign)` pairs, house 1 first.
    pub fn iter(&self) -> impl Iterator<Item = (u8, Rashi)> + '_ {
        (1u8..).zip(self.signs.iter().copied())
    }

    /// House number (1-12) a sign occupies.
    pub fn house_of(&self, rashi: Rashi) -> u8 {
        (rashi.index() + 12 - self.signs[0].index()) % 12 + 1
    }
}

/// Houses for an ascendant sign index. Fails outside 0..=11.
pub fn whole_sign_houses(asc_index: u8) -> Result<WholeSignHouses, VedicError> {
    let lagna = Rashi::from_index(asc_index).ok_or(VedicError::IndexOutOfRange {
        table: "rashi",
        index: asc_index as usize,
    })?;
    let mut signs = ALL_RASHIS;
    for (h, slot) in signs.iter_mut().enumerate() {
        *slot = lagna.offset(h as u8);
    }
    Ok(WholeSignHouses { signs })
}
