//! Ordered character sets that define the plaintext domain of a cipher.

use std::collections::HashMap;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::errors::HillCryptoError;

/// An ordered set of unique characters.
///
/// The position of a character is its numeric residue and the alphabet length
/// is the modulus of all cipher arithmetic. Lookups fold case, so `'c'` and
/// `'C'` resolve to the same residue; decoding always returns the canonical
/// character stored in the alphabet.
///
/// Both the ordered characters and the lookup table are serialized, so a
/// deserialized alphabet is usable as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alphabet {
    chars: Vec<char>,
    index: HashMap<char, i64>,
}

/// Folds a character to the single-char lowercase form used for lookups.
/// Characters whose lowercase expansion is more than one char cannot occupy
/// a single alphabet cell and are left as they are.
fn fold(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

impl Alphabet {
    /// Builds an alphabet from the characters of `chars`, in order.
    ///
    /// # Errors
    ///
    /// Returns `HillCryptoError::InvalidAlphabet` if there are fewer than two
    /// characters, if any character repeats, or if two characters collide
    /// under case folding (such as `a` and `A`), which would make the
    /// case-insensitive lookup ambiguous.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::alphabet::Alphabet;
    /// let alphabet = Alphabet::try_with("ABCDEFGHIJKLMNOPQRSTUVWXYZ").unwrap();
    /// assert_eq!(alphabet.len(), 26);
    /// assert_eq!(alphabet.residue('h'), Some(7));
    /// assert_eq!(alphabet.residue('H'), Some(7));
    /// assert_eq!(alphabet.residue('!'), None);
    /// ```
    pub fn try_with(chars: &str) -> Result<Self, HillCryptoError> {
        let chars: Vec<char> = chars.chars().collect();
        if chars.len() < 2 {
            return Err(HillCryptoError::InvalidAlphabet(format!(
                "Alphabet must contain at least 2 characters, got {}",
                chars.len()
            )));
        }
        if !chars.iter().all_unique() {
            return Err(HillCryptoError::InvalidAlphabet(
                "Alphabet characters must be unique".to_string(),
            ));
        }

        let mut index = HashMap::with_capacity(chars.len());
        for (i, &ch) in chars.iter().enumerate() {
            if index.insert(fold(ch), i as i64).is_some() {
                return Err(HillCryptoError::InvalidAlphabet(format!(
                    "Character '{}' collides with an earlier one under case folding",
                    ch
                )));
            }
        }

        Ok(Alphabet { chars, index })
    }

    /// Number of characters; the modulus of all cipher arithmetic.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// The alphabet length as a ring modulus.
    pub fn modulus(&self) -> u64 {
        self.chars.len() as u64
    }

    /// Residue of `c`, folding case. `None` when `c` is not in the alphabet.
    pub fn residue(&self, c: char) -> Option<i64> {
        self.index.get(&fold(c)).copied()
    }

    /// Whether `c` belongs to the alphabet, up to case.
    pub fn contains(&self, c: char) -> bool {
        self.index.contains_key(&fold(c))
    }

    /// The canonical character at residue `i`.
    ///
    /// # Errors
    ///
    /// Returns `HillCryptoError::DecodingError` if `i` is outside `[0, len)`.
    pub fn char_at(&self, i: i64) -> Result<char, HillCryptoError> {
        if !(0..self.chars.len() as i64).contains(&i) {
            return Err(HillCryptoError::DecodingError(format!(
                "Residue {} out of range for an alphabet of {} characters",
                i,
                self.chars.len()
            )));
        }
        Ok(self.chars[i as usize])
    }

    /// The characters in residue order.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}
