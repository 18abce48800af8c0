//! Text to residue conversion for block ciphers over an [`Alphabet`].
//!
//! The encrypt pipeline is `clean` then [`pad`]; decryption goes back through
//! [`decode`] without ever stripping pad characters, so a round trip yields
//! the padded form of the cleaned input.

use crate::alphabet::Alphabet;
use crate::errors::HillCryptoError;
use crate::ring::Vector;

/// Maps `text` to residues, folding case and dropping every character the
/// alphabet does not contain.
///
/// # Example
///
/// ```
/// # use hill_crypto::codec::clean;
/// # use hill_crypto::preset::alphabets::LATIN;
/// assert_eq!(clean("He said: HI!", &LATIN), vec![7, 4, 18, 0, 8, 3, 7, 8]);
/// assert_eq!(clean("...", &LATIN), Vec::<i64>::new());
/// ```
pub fn clean(text: &str, alphabet: &Alphabet) -> Vector {
    text.chars().filter_map(|c| alphabet.residue(c)).collect()
}

/// Pads `residues` in place with `pad_residue` until its length is a multiple
/// of `block_size`. Already-aligned input, the empty vector included, is left
/// untouched.
///
/// `block_size` must be nonzero.
///
/// # Example
///
/// ```
/// # use hill_crypto::codec::pad;
/// let mut residues = vec![7, 4, 11];
/// pad(&mut residues, 4, 23);
/// assert_eq!(residues, vec![7, 4, 11, 23]);
///
/// let mut aligned = vec![7, 4, 11, 15];
/// pad(&mut aligned, 4, 23);
/// assert_eq!(aligned, vec![7, 4, 11, 15]);
/// ```
pub fn pad(residues: &mut Vector, block_size: usize, pad_residue: i64) {
    while residues.len() % block_size != 0 {
        residues.push(pad_residue);
    }
}

/// Decodes residues back into text using the alphabet's canonical characters.
///
/// # Errors
///
/// Returns `HillCryptoError::DecodingError` if any residue falls outside the
/// alphabet range.
///
/// # Example
///
/// ```
/// # use hill_crypto::codec::decode;
/// # use hill_crypto::preset::alphabets::LATIN;
/// assert_eq!(decode(&[7, 4, 11, 15], &LATIN).unwrap(), "HELP");
/// assert!(decode(&[26], &LATIN).is_err());
/// ```
pub fn decode(residues: &[i64], alphabet: &Alphabet) -> Result<String, HillCryptoError> {
    let mut text = String::with_capacity(residues.len());
    for &r in residues {
        text.push(alphabet.char_at(r)?);
    }
    Ok(text)
}
