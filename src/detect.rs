//! Brand detection by digit-prefix matching against the registry.
//!
//! Matching works on partial input: each brand's pattern accepts any digit
//! string that is a prefix of some number of that brand, so detection can run
//! on every keystroke of an incremental entry. The pattern arity encodes how
//! many digits a brand needs before it commits (Visa commits on one digit,
//! MasterCard's 2-series needs four, Elo a full six-digit IIN).
//!
//! The registry is walked in [`CardBrand::ALL`] order and the first match
//! wins. Overlapping prefix spaces resolve by that order alone.

use crate::brand::CardBrand;

/// Detects the card brand from a sequence of digits.
///
/// Walks the brand registry in declared order and returns the first brand
/// whose prefix pattern accepts the input. Partial input is fine; an empty
/// slice or an unrecognized prefix yields `None`.
///
/// # Example
///
/// ```
/// use bandeira::detect::detect_brand;
/// use bandeira::CardBrand;
///
/// // A single leading 4 already commits to Visa
/// assert_eq!(detect_brand(&[4]), Some(CardBrand::Visa));
///
/// // Amex commits on its two-digit prefix
/// let amex = [3, 7, 8, 2, 8, 2, 2, 4, 6, 3, 1, 0, 0, 0, 5];
/// assert_eq!(detect_brand(&amex), Some(CardBrand::Amex));
///
/// assert_eq!(detect_brand(&[]), None);
/// ```
#[inline]
pub fn detect_brand(digits: &[u8]) -> Option<CardBrand> {
    if digits.is_empty() {
        return None;
    }

    CardBrand::ALL
        .into_iter()
        .find(|&brand| matches_prefix(brand, digits))
}

/// Returns true if `digits` is a prefix of some number of `brand`.
fn matches_prefix(brand: CardBrand, digits: &[u8]) -> bool {
    match brand {
        CardBrand::Visa => matches!(digits, [4, ..]),

        CardBrand::Mastercard => matches!(
            digits,
            [5, 1..=5, ..]           // 51-55
                | [2, 2, 2, 1..=9, ..] // 2221-2229
                | [2, 2, 3..=9, _, ..] // 2230-2299
                | [2, 3..=6, _, _, ..] // 2300-2699
                | [2, 7, 0..=1, _, ..] // 2700-2719
                | [2, 7, 2, 0, ..]     // 2720
        ),

        CardBrand::Amex => matches!(digits, [3, 4, ..] | [3, 7, ..]),

        CardBrand::Discover => matches!(digits, [6, 0, 1, 1, ..] | [6, 5, _, _, ..]),

        CardBrand::DinersClub => {
            matches!(digits, [3, 0, 0..=5, ..] | [3, 6, _, ..] | [3, 8, _, ..])
        }

        // The 2131/1800 literals commit only once all four digits are typed
        CardBrand::Jcb => matches!(digits, [3, 5, ..] | [2, 1, 3, 1, ..] | [1, 8, 0, 0, ..]),

        CardBrand::Elo => matches_elo(digits),

        CardBrand::Hipercard => matches_hipercard(digits),
    }
}

/// Elo commits on a full six-digit IIN, never earlier.
///
/// The 65xxxx block sits inside Discover's 65 prefix and the 4-leading IINs
/// inside Visa's; in the registry walk those brands claim such input first.
fn matches_elo(digits: &[u8]) -> bool {
    let Some(iin) = leading_number(digits, 6) else {
        return false;
    };
    matches!(
        iin,
        401178..=401179
            | 431274
            | 438935
            | 451416
            | 457393
            | 457631..=457632
            | 504175
            | 506699..=506778
            | 509000..=509999
            | 627780
            | 636297
            | 636368..=636369
            | 650005..=659999
    )
}

fn matches_hipercard(digits: &[u8]) -> bool {
    // 606282 followed by at least ten digits
    if let [6, 0, 6, 2, 8, 2, rest @ ..] = digits {
        if rest.len() >= 10 {
            return true;
        }
    }
    // 3841 followed by exactly fifteen digits. The issuer rule anchors this
    // at the end of the number, so the run may sit at the tail of a longer
    // string; a 19-digit number starting with 3841 is claimed by Diners Club
    // first in the registry walk.
    match digits.len().checked_sub(19) {
        Some(start) => digits[start..].starts_with(&[3, 8, 4, 1]),
        None => false,
    }
}

/// Reads the first `count` digits as a single number, if that many exist.
fn leading_number(digits: &[u8], count: usize) -> Option<u32> {
    if digits.len() < count {
        return None;
    }
    Some(
        digits[..count]
            .iter()
            .fold(0u32, |acc, &d| acc * 10 + u32::from(d)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits_of(s: &str) -> Vec<u8> {
        s.bytes().map(|b| b - b'0').collect()
    }

    #[test]
    fn test_visa_detection() {
        assert_eq!(detect_brand(&[4]), Some(CardBrand::Visa));
        assert_eq!(
            detect_brand(&digits_of("4532015112830366")),
            Some(CardBrand::Visa)
        );
        // 13- and 19-digit shapes stay Visa
        assert_eq!(
            detect_brand(&digits_of("4222222222222")),
            Some(CardBrand::Visa)
        );
        assert_eq!(
            detect_brand(&digits_of("4532015112830366123")),
            Some(CardBrand::Visa)
        );
    }

    #[test]
    fn test_mastercard_detection() {
        // 51-55 range commits on two digits
        assert_eq!(detect_brand(&[5, 1]), Some(CardBrand::Mastercard));
        assert_eq!(detect_brand(&[5, 5]), Some(CardBrand::Mastercard));
        assert_eq!(detect_brand(&[5]), None);
        assert_eq!(detect_brand(&[5, 0]), None);
        assert_eq!(detect_brand(&[5, 6]), None);

        assert_eq!(
            detect_brand(&digits_of("5555555555554444")),
            Some(CardBrand::Mastercard)
        );

        // 2-series bounds need four digits
        assert_eq!(detect_brand(&[2, 2, 2, 1]), Some(CardBrand::Mastercard));
        assert_eq!(detect_brand(&[2, 7, 2, 0]), Some(CardBrand::Mastercard));
        assert_eq!(detect_brand(&[2, 2, 2, 0]), None);
        assert_eq!(detect_brand(&[2, 7, 2, 1]), None);
        assert_eq!(detect_brand(&[2, 2, 2]), None);
        assert_eq!(
            detect_brand(&digits_of("2221000000000009")),
            Some(CardBrand::Mastercard)
        );
    }

    #[test]
    fn test_amex_detection() {
        assert_eq!(detect_brand(&[3, 4]), Some(CardBrand::Amex));
        assert_eq!(detect_brand(&[3, 7]), Some(CardBrand::Amex));
        assert_eq!(detect_brand(&[3]), None);
        assert_eq!(
            detect_brand(&digits_of("378282246310005")),
            Some(CardBrand::Amex)
        );
    }

    #[test]
    fn test_discover_detection() {
        assert_eq!(detect_brand(&[6, 0, 1, 1]), Some(CardBrand::Discover));
        assert_eq!(detect_brand(&[6, 5, 0, 0]), Some(CardBrand::Discover));
        // Needs its full four-digit commitment
        assert_eq!(detect_brand(&[6]), None);
        assert_eq!(detect_brand(&[6, 5]), None);
        assert_eq!(detect_brand(&[6, 5, 0]), None);
        assert_eq!(detect_brand(&[6, 0, 1]), None);
        assert_eq!(
            detect_brand(&digits_of("6011111111111117")),
            Some(CardBrand::Discover)
        );
    }

    #[test]
    fn test_diners_detection() {
        assert_eq!(detect_brand(&[3, 0, 0]), Some(CardBrand::DinersClub));
        assert_eq!(detect_brand(&[3, 0, 5]), Some(CardBrand::DinersClub));
        assert_eq!(detect_brand(&[3, 6, 0]), Some(CardBrand::DinersClub));
        assert_eq!(detect_brand(&[3, 8, 9]), Some(CardBrand::DinersClub));
        assert_eq!(detect_brand(&[3, 0]), None);
        assert_eq!(detect_brand(&[3, 6]), None);
        assert_eq!(detect_brand(&[3, 0, 6]), None);
        assert_eq!(
            detect_brand(&digits_of("30569309025904")),
            Some(CardBrand::DinersClub)
        );
    }

    #[test]
    fn test_jcb_detection() {
        assert_eq!(detect_brand(&[3, 5]), Some(CardBrand::Jcb));
        assert_eq!(detect_brand(&[2, 1, 3, 1]), Some(CardBrand::Jcb));
        assert_eq!(detect_brand(&[1, 8, 0, 0]), Some(CardBrand::Jcb));
        // The literal prefixes only commit in full
        assert_eq!(detect_brand(&[2, 1, 3]), None);
        assert_eq!(detect_brand(&[1, 8, 0]), None);
        assert_eq!(detect_brand(&[1]), None);
        assert_eq!(
            detect_brand(&digits_of("3530111333300000")),
            Some(CardBrand::Jcb)
        );
    }

    #[test]
    fn test_elo_detection() {
        assert_eq!(
            detect_brand(&digits_of("636297")),
            Some(CardBrand::Elo)
        );
        assert_eq!(
            detect_brand(&digits_of("6362970000457013")),
            Some(CardBrand::Elo)
        );
        assert_eq!(detect_brand(&digits_of("627780")), Some(CardBrand::Elo));
        assert_eq!(detect_brand(&digits_of("509000")), Some(CardBrand::Elo));
        assert_eq!(detect_brand(&digits_of("509999")), Some(CardBrand::Elo));
        assert_eq!(detect_brand(&digits_of("506699")), Some(CardBrand::Elo));
        assert_eq!(detect_brand(&digits_of("506778")), Some(CardBrand::Elo));
        assert_eq!(detect_brand(&digits_of("504175")), Some(CardBrand::Elo));
        // Below the six-digit commitment nothing matches
        assert_eq!(detect_brand(&digits_of("63629")), None);
        assert_eq!(detect_brand(&digits_of("50900")), None);
        // Neighbors outside the IIN set
        assert_eq!(detect_brand(&digits_of("636298")), None);
        assert_eq!(detect_brand(&digits_of("506779")), None);
    }

    #[test]
    fn test_hipercard_detection() {
        assert_eq!(
            detect_brand(&digits_of("6062825624254001")),
            Some(CardBrand::Hipercard)
        );
        assert_eq!(
            detect_brand(&digits_of("6062820000000000")),
            Some(CardBrand::Hipercard)
        );
        // The 606282 prefix only commits with ten more digits
        assert_eq!(detect_brand(&digits_of("606282")), None);
        assert_eq!(detect_brand(&digits_of("606282562425400")), None);
        // 17 digits still matches the prefix rule
        assert_eq!(
            detect_brand(&digits_of("60628256242540011")),
            Some(CardBrand::Hipercard)
        );
    }

    #[test]
    fn test_overlaps_resolve_by_registry_order() {
        // Elo's 65xxxx IINs sit inside Discover's 65 prefix; Discover is
        // declared first
        assert_eq!(
            detect_brand(&digits_of("650005")),
            Some(CardBrand::Discover)
        );
        assert_eq!(
            detect_brand(&digits_of("6500051234567890")),
            Some(CardBrand::Discover)
        );
        // Elo's 4-leading IINs sit inside Visa's prefix
        assert_eq!(detect_brand(&digits_of("401178")), Some(CardBrand::Visa));
        assert_eq!(detect_brand(&digits_of("457632")), Some(CardBrand::Visa));
        // Hipercard's 3841 rule sits inside Diners Club's 38x prefix
        assert_eq!(
            detect_brand(&digits_of("3841000000000000000")),
            Some(CardBrand::DinersClub)
        );
    }

    #[test]
    fn test_hipercard_tail_rule() {
        // The 3841 + fifteen-digit rule is end-anchored, so it can fire when
        // the run sits at the tail of a string no earlier brand claims
        assert_eq!(
            detect_brand(&digits_of("93841000000000000000")),
            Some(CardBrand::Hipercard)
        );
        assert_eq!(detect_brand(&digits_of("9384100000000000000")), None);
    }

    #[test]
    fn test_unknown_prefixes() {
        assert_eq!(detect_brand(&digits_of("0000000000000000")), None);
        assert_eq!(detect_brand(&digits_of("1234567890123456")), None);
        assert_eq!(detect_brand(&digits_of("6200000000000000")), None);
        assert_eq!(detect_brand(&digits_of("7000000000000000")), None);
        assert_eq!(detect_brand(&digits_of("9999999999999999")), None);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(detect_brand(&[]), None);
    }

    #[test]
    fn test_leading_number() {
        assert_eq!(leading_number(&[6, 3, 6, 2, 9, 7, 1], 6), Some(636297));
        assert_eq!(leading_number(&[6, 3, 6, 2, 9, 7], 6), Some(636297));
        assert_eq!(leading_number(&[6, 3, 6], 6), None);
    }
}
