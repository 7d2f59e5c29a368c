//! Validation orchestration: raw text in, verdict out.
//!
//! [`validate`] chains the pipeline stages — normalize, match a brand, check
//! the Luhn checksum, check the length against the matched brand — and packs
//! the results into a [`Verdict`]. Every function here is total: any input,
//! including empty or digit-free text, produces a well-defined result rather
//! than an error. The string-level conveniences [`is_valid`], [`check_luhn`],
//! and [`identify_brand`] normalize internally the same way.

use crate::brand::CardBrand;
use crate::detect;
use crate::format;
use crate::luhn;
use crate::verdict::Verdict;

/// Validates a card number string, returning the full verdict.
///
/// The input may carry separators or any other non-digit characters; they
/// are stripped before the checks run. The checksum is computed regardless
/// of whether a brand matched, so the verdict can distinguish "unknown
/// brand, checksum fine" from "known brand, checksum wrong".
///
/// # Example
///
/// ```
/// use bandeira::{validate, CardBrand};
///
/// let verdict = validate("4532-0151-1283-0366");
/// assert!(verdict.is_valid());
/// assert_eq!(verdict.brand(), Some(CardBrand::Visa));
/// assert_eq!(verdict.digit_count(), 16);
///
/// // One mutated digit: the length still fits Visa, the checksum fails
/// let verdict = validate("4532 0151 1283 0365");
/// assert!(!verdict.is_valid());
/// assert!(verdict.is_length_valid());
/// assert!(!verdict.is_luhn_valid());
/// ```
pub fn validate(input: &str) -> Verdict {
    let digits = format::normalize(input);
    let values = format::digit_values(&digits);

    let brand = detect::detect_brand(&values);
    let luhn_valid = luhn::validate(&values);
    let length_valid = brand.is_some_and(|b| b.is_valid_length(values.len()));

    Verdict::new(brand, digits, luhn_valid, length_valid)
}

/// Checks whether a card number is fully valid.
///
/// Shorthand for [`validate`]`(input).is_valid()`.
///
/// # Example
///
/// ```
/// use bandeira::is_valid;
///
/// assert!(is_valid("4532-0151-1283-0366"));
/// assert!(!is_valid("4532-0151-1283-0365"));
/// assert!(!is_valid(""));
/// ```
#[inline]
pub fn is_valid(input: &str) -> bool {
    validate(input).is_valid()
}

/// Checks only the Luhn checksum of the input's digits.
///
/// Brand and length are ignored. Inputs with fewer than two digits are
/// always false.
///
/// # Example
///
/// ```
/// use bandeira::check_luhn;
///
/// assert!(check_luhn("4532015112830366"));
/// assert!(!check_luhn("4532015112830365"));
/// assert!(!check_luhn("4"));
/// assert!(!check_luhn(""));
/// ```
#[inline]
pub fn check_luhn(input: &str) -> bool {
    luhn::validate(&format::digit_values(input))
}

/// Identifies the brand of a complete or partially-typed number.
///
/// Normalizes internally, then walks the registry in declared order; the
/// first matching brand wins. Returns `None` when no digits are present or
/// no pattern accepts them.
///
/// # Example
///
/// ```
/// use bandeira::{identify_brand, CardBrand};
///
/// assert_eq!(identify_brand("5555 5555 5555 4444"), Some(CardBrand::Mastercard));
/// assert_eq!(identify_brand("4"), Some(CardBrand::Visa));
/// assert_eq!(identify_brand("   "), None);
/// assert_eq!(identify_brand(""), None);
/// ```
#[inline]
pub fn identify_brand(input: &str) -> Option<CardBrand> {
    detect::detect_brand(&format::digit_values(input))
}
