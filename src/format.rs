//! Input normalization and grouped-digit display formatting.
//!
//! Both operations accept arbitrary text and look only at its ASCII digits:
//! normalization drops everything else, and formatting regroups the digits
//! positionally in chunks of four. Grouping is deliberately brand-agnostic;
//! networks with their own display conventions (Amex 4-6-5) still render in
//! plain fours here.

/// Strips every non-digit character, returning the digit-only string.
///
/// Idempotent and order-preserving; an input without digits yields an empty
/// string. Only ASCII `0`-`9` count as digits.
///
/// # Example
///
/// ```
/// use bandeira::normalize;
///
/// assert_eq!(normalize("4532-0151-1283-0366"), "4532015112830366");
/// assert_eq!(normalize("4532 0151"), "45320151");
/// assert_eq!(normalize("no digits here"), "");
/// assert_eq!(normalize(&normalize("4532 0151")), normalize("4532 0151"));
/// ```
#[inline]
pub fn normalize(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Formats the digits of `input` in groups of four separated by single spaces.
///
/// Non-digits are stripped first, so already-formatted or partially-typed
/// input is fine. The result carries no leading or trailing space; empty
/// input yields an empty string. The final group may be shorter than four.
///
/// # Example
///
/// ```
/// use bandeira::format_grouped;
///
/// assert_eq!(format_grouped("4532015112830366"), "4532 0151 1283 0366");
/// assert_eq!(format_grouped("378282246310005"), "3782 8224 6310 005");
/// assert_eq!(format_grouped("45320"), "4532 0");
/// assert_eq!(format_grouped(""), "");
/// ```
pub fn format_grouped(input: &str) -> String {
    let digits: Vec<char> = input.chars().filter(|c| c.is_ascii_digit()).collect();

    let mut result = String::with_capacity(digits.len() + digits.len() / 4);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && i % 4 == 0 {
            result.push(' ');
        }
        result.push(*c);
    }

    result
}

/// Extracts the digits of `input` as numeric values 0-9.
///
/// Same digit acceptance as [`normalize`], but producing the slice form the
/// checksum and detection kernels work on.
#[inline]
pub(crate) fn digit_values(input: &str) -> Vec<u8> {
    input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .map(|c| c as u8 - b'0')
        .collect()
}
