//! Hill cipher over a configurable alphabet.
//!
//! The key is a square matrix whose determinant must be a unit mod the
//! alphabet size. Encryption multiplies each plaintext block by the key;
//! decryption multiplies by an inverse key that is computed once at
//! construction and cached.

use crate::alphabet::Alphabet;
use crate::codec;
use crate::errors::HillCryptoError;
use crate::ring::matrix_ops::{determinant, invert_modular, matrix_vector_mul};
use crate::ring::{gcd, Matrix, Ring, Vector};

use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Largest supported key dimension. Cofactor determinants of matrices up to
/// this size stay within `i64` for residue-sized entries.
pub const MAX_KEY_DIMENSION: usize = 8;

/// Attempts before key generation gives up on finding an invertible matrix.
const KEY_GENERATION_ATTEMPTS: usize = 1000;

/// A block cipher over an [`Alphabet`]: each block of `dimension` residues
/// is multiplied by the key matrix mod the alphabet size.
///
/// Construction fails unless the key is square and its determinant is a unit
/// mod the alphabet size, so every constructed cipher can decrypt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HillCipher {
    /// Alphabet defining the residue ring and the character mapping.
    alphabet: Alphabet,
    /// The n x n key matrix.
    key: Matrix,
    /// Inverse of the key mod the alphabet size, cached at construction.
    inverse_key: Matrix,
    /// Character appended to fill the last plaintext block.
    padding: char,
    /// Residue of the padding character.
    pad_residue: i64,
    /// Ring instance for operations mod the alphabet size.
    ring: Ring,
}

impl HillCipher {
    /// Builds a cipher padded with the last character of the alphabet.
    ///
    /// # Errors
    ///
    /// See [`HillCipher::try_with_padding`].
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::hill::HillCipher;
    /// # use hill_crypto::preset::alphabets::LATIN;
    /// let key = vec![vec![3, 3], vec![2, 5]];
    /// let cipher = HillCipher::try_with(key, LATIN.clone()).unwrap();
    ///
    /// assert_eq!(cipher.encrypt("HELP").unwrap(), "HIAT");
    /// assert_eq!(cipher.decrypt("HIAT").unwrap(), "HELP");
    /// ```
    pub fn try_with(key: Matrix, alphabet: Alphabet) -> Result<Self, HillCryptoError> {
        // Alphabets hold at least two characters, so a last one always exists.
        let padding = alphabet.chars()[alphabet.len() - 1];
        Self::try_with_padding(key, alphabet, padding)
    }

    /// Builds a cipher with an explicit padding character.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the key is empty or not square,
    /// `MatrixTooLarge` if its dimension exceeds [`MAX_KEY_DIMENSION`],
    /// `InvalidAlphabet` if the padding character is not in the alphabet and
    /// `SingularMatrix` if the key determinant is not a unit mod the
    /// alphabet size.
    pub fn try_with_padding(
        key: Matrix,
        alphabet: Alphabet,
        padding: char,
    ) -> Result<Self, HillCryptoError> {
        let n = key.len();
        if n == 0 {
            return Err(HillCryptoError::DimensionMismatch(
                "Key matrix must have at least one row".to_string(),
            ));
        }
        if n > MAX_KEY_DIMENSION {
            return Err(HillCryptoError::MatrixTooLarge(n, MAX_KEY_DIMENSION));
        }
        for (i, row) in key.iter().enumerate() {
            if row.len() != n {
                return Err(HillCryptoError::DimensionMismatch(format!(
                    "Key matrix must be square: row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    n
                )));
            }
        }

        let pad_residue = match alphabet.residue(padding) {
            Some(residue) => residue,
            None => {
                return Err(HillCryptoError::InvalidAlphabet(format!(
                    "Padding character {:?} is not in the alphabet",
                    padding
                )));
            }
        };

        let ring = Ring::try_with(alphabet.modulus())?;
        let inverse_key = invert_modular(&key, &ring)?;

        debug!(
            dimension = n,
            modulus = ring.modulus,
            "constructed cipher with cached inverse key"
        );

        Ok(Self {
            alphabet,
            key,
            inverse_key,
            padding,
            pad_residue,
            ring,
        })
    }

    /// Encrypts `plaintext`: cleans it to residues, pads the tail block with
    /// the padding character and multiplies each block by the key.
    ///
    /// Characters outside the alphabet are dropped, so decrypting the result
    /// yields the padded form of the cleaned input, not the input itself.
    ///
    /// # Errors
    ///
    /// Returns `DecodingError` if a product residue falls outside the
    /// alphabet range.
    pub fn encrypt(&self, plaintext: &str) -> Result<String, HillCryptoError> {
        let mut residues = codec::clean(plaintext, &self.alphabet);
        codec::pad(&mut residues, self.dimension(), self.pad_residue);
        self.apply_key(&residues, &self.key)
    }

    /// Decrypts `ciphertext` by multiplying each block by the cached inverse
    /// key. Padding characters are kept; stripping them is left to the
    /// caller, who knows where the message ends.
    ///
    /// # Errors
    ///
    /// Returns `MisalignedInput` if the cleaned ciphertext length is not a
    /// multiple of the key dimension.
    pub fn decrypt(&self, ciphertext: &str) -> Result<String, HillCryptoError> {
        let residues = codec::clean(ciphertext, &self.alphabet);
        if residues.len() % self.dimension() != 0 {
            return Err(HillCryptoError::MisalignedInput {
                expected: self.dimension(),
                actual: residues.len(),
            });
        }
        self.apply_key(&residues, &self.inverse_key)
    }

    fn apply_key(&self, residues: &[i64], key: &Matrix) -> Result<String, HillCryptoError> {
        let mut out: Vector = Vec::with_capacity(residues.len());
        for block in residues.chunks_exact(self.dimension()) {
            out.extend(matrix_vector_mul(key, block, &self.ring)?);
        }
        codec::decode(&out, &self.alphabet)
    }

    /// Block size of the cipher, equal to the key dimension.
    pub fn dimension(&self) -> usize {
        self.key.len()
    }

    /// Size of the alphabet, the modulus of all arithmetic.
    pub fn modulus(&self) -> u64 {
        self.ring.modulus()
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn key(&self) -> &Matrix {
        &self.key
    }

    pub fn inverse_key(&self) -> &Matrix {
        &self.inverse_key
    }

    pub fn padding(&self) -> char {
        self.padding
    }

    /// Exports the cipher, cached inverse key included, to a JSON string.
    pub fn to_json(&self) -> Result<String, HillCryptoError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Imports a cipher from a JSON string produced by
    /// [`HillCipher::to_json`].
    pub fn from_json(json_str: &str) -> Result<Self, HillCryptoError> {
        Ok(serde_json::from_str(json_str)?)
    }

    /// Generates a random key matrix invertible mod the alphabet size.
    ///
    /// Generation is deterministic in `seed`; entries are drawn uniformly
    /// from the residue range and candidates are retried until the
    /// determinant is coprime with the alphabet size.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` for a zero dimension, `MatrixTooLarge`
    /// above [`MAX_KEY_DIMENSION`] and `InternalError` if no invertible
    /// candidate is found within the attempt limit.
    pub fn generate_key(
        dimension: usize,
        alphabet: &Alphabet,
        seed: u64,
    ) -> Result<Matrix, HillCryptoError> {
        if dimension == 0 {
            return Err(HillCryptoError::DimensionMismatch(
                "Key dimension must be at least 1".to_string(),
            ));
        }
        if dimension > MAX_KEY_DIMENSION {
            return Err(HillCryptoError::MatrixTooLarge(dimension, MAX_KEY_DIMENSION));
        }

        let ring = Ring::try_with(alphabet.modulus())?;
        let modulus = ring.modulus();
        let mut rng = StdRng::seed_from_u64(seed);

        for attempt in 1..=KEY_GENERATION_ATTEMPTS {
            let mut key = vec![vec![0i64; dimension]; dimension];
            for row in key.iter_mut() {
                for val in row.iter_mut() {
                    *val = (rng.random::<u64>() % modulus) as i64;
                }
            }

            let det = ring.normalize(determinant(&key)?);
            if gcd(det, modulus as i64) == 1 {
                debug!(dimension, attempt, "generated invertible key matrix");
                return Ok(key);
            }
        }

        Err(HillCryptoError::InternalError(format!(
            "Failed to generate an invertible key matrix after {} attempts",
            KEY_GENERATION_ATTEMPTS
        )))
    }
}
