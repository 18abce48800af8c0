//! Caesar cipher over a configurable alphabet.
//!
//! Each alphabet character is shifted by a fixed amount mod the alphabet
//! size. Unlike the block cipher, characters outside the alphabet pass
//! through unchanged and letter case is restored on output, so a round trip
//! reproduces the input text exactly.

use crate::alphabet::Alphabet;
use crate::errors::HillCryptoError;
use crate::ring::Ring;

use serde::{Deserialize, Serialize};

/// A shift cipher over an [`Alphabet`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaesarCipher {
    /// Alphabet defining the residue ring and the character mapping.
    alphabet: Alphabet,
    /// Shift amount, normalized into the residue range at construction.
    shift: i64,
    /// Ring instance for operations mod the alphabet size.
    ring: Ring,
}

impl CaesarCipher {
    /// Builds a cipher with the given shift. Any `i64` shift is accepted and
    /// normalized mod the alphabet size, so `-3` and `23` coincide for a
    /// 26-character alphabet.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::caesar::CaesarCipher;
    /// # use hill_crypto::preset::alphabets::CYRILLIC;
    /// let cipher = CaesarCipher::try_with(CYRILLIC.clone(), 30).unwrap();
    ///
    /// assert_eq!(cipher.encrypt("привет"), "мнёявп");
    /// assert_eq!(cipher.decrypt("мнёявп"), "привет");
    /// ```
    pub fn try_with(alphabet: Alphabet, shift: i64) -> Result<Self, HillCryptoError> {
        let ring = Ring::try_with(alphabet.modulus())?;
        let shift = ring.normalize(shift);

        Ok(Self {
            alphabet,
            shift,
            ring,
        })
    }

    /// Shifts every alphabet character forward, keeping everything else as
    /// it is.
    pub fn encrypt(&self, plaintext: &str) -> String {
        self.shift_by(plaintext, self.shift)
    }

    /// Shifts every alphabet character backward.
    pub fn decrypt(&self, ciphertext: &str) -> String {
        self.shift_by(ciphertext, self.ring.neg(self.shift))
    }

    fn shift_by(&self, text: &str, amount: i64) -> String {
        text.chars()
            .map(|c| match self.alphabet.residue(c) {
                Some(idx) => {
                    // The ring modulus equals the alphabet length, so the
                    // shifted index is always in range.
                    let shifted = self.alphabet.chars()[self.ring.add(idx, amount) as usize];
                    restore_case(c, shifted)
                }
                None => c,
            })
            .collect()
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn shift(&self) -> i64 {
        self.shift
    }
}

/// Carries the case of `original` over to the canonical `shifted` character.
/// Characters whose case conversion is not a single char are left canonical.
fn restore_case(original: char, shifted: char) -> char {
    fn single(mut iter: impl Iterator<Item = char>, fallback: char) -> char {
        match (iter.next(), iter.next()) {
            (Some(c), None) => c,
            _ => fallback,
        }
    }

    if original.is_uppercase() {
        single(shifted.to_uppercase(), shifted)
    } else if original.is_lowercase() {
        single(shifted.to_lowercase(), shifted)
    } else {
        shifted
    }
}
