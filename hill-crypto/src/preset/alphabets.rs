use lazy_static::lazy_static;

use crate::alphabet::Alphabet;

/// Characters of the [`LATIN`] alphabet, in residue order.
pub const LATIN_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Characters of the [`CYRILLIC`] alphabet, in residue order.
pub const CYRILLIC_CHARS: &str = "абвгдеёжзийклмнопрстуфхцчшщъыьэюя";

lazy_static! {
    /// The classic mod-26 alphabet: uppercase `A`-`Z`, with `A` at residue 0.
    pub static ref LATIN: Alphabet =
        Alphabet::try_with(LATIN_CHARS).expect("Latin preset alphabet is valid");

    /// The 33-letter Russian alphabet, lowercase `а`-`я` with `ё` at
    /// residue 6 (mod 33).
    pub static ref CYRILLIC: Alphabet =
        Alphabet::try_with(CYRILLIC_CHARS).expect("Cyrillic preset alphabet is valid");
}

#[cfg(test)]
mod tests {
    use super::*;

    use quickcheck::quickcheck;

    #[test]
    fn latin_preset_layout() {
        assert_eq!(LATIN.len(), 26);
        assert_eq!(LATIN.residue('A'), Some(0));
        assert_eq!(LATIN.residue('z'), Some(25));
        assert_eq!(LATIN.char_at(23).unwrap(), 'X');
    }

    #[test]
    fn cyrillic_preset_layout() {
        assert_eq!(CYRILLIC.len(), 33);
        assert_eq!(CYRILLIC.residue('а'), Some(0));
        assert_eq!(CYRILLIC.residue('ё'), Some(6));
        assert_eq!(CYRILLIC.residue('Ё'), Some(6));
        assert_eq!(CYRILLIC.residue('я'), Some(32));
        assert_eq!(CYRILLIC.char_at(32).unwrap(), 'я');
    }

    quickcheck! {
        fn prop_preset_residue_roundtrip(i: usize) -> bool {
            let latin_i = (i % LATIN.len()) as i64;
            let cyrillic_i = (i % CYRILLIC.len()) as i64;

            LATIN
                .char_at(latin_i)
                .ok()
                .and_then(|c| LATIN.residue(c))
                == Some(latin_i)
                && CYRILLIC
                    .char_at(cyrillic_i)
                    .ok()
                    .and_then(|c| CYRILLIC.residue(c))
                    == Some(cyrillic_i)
        }

        fn prop_latin_residue_folds_case(i: usize) -> bool {
            let i = (i % LATIN.len()) as i64;
            match LATIN.char_at(i) {
                Ok(upper) => {
                    let lower = upper.to_ascii_lowercase();
                    LATIN.residue(upper) == Some(i) && LATIN.residue(lower) == Some(i)
                }
                Err(_) => false,
            }
        }
    }
}
