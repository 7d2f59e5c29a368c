//! Luhn ("modulus 10") checksum over card digit sequences.
//!
//! The checksum is a property of the digit sequence alone: it knows nothing
//! about brands or expected lengths. Doubling uses a lookup table to avoid a
//! branch in the inner loop.

/// Lookup table for doubled digits: double the value, subtract 9 if >= 10.
/// Index is the digit (0-9), value is the transformed result.
const DOUBLE_TABLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Checks a digit sequence against the Luhn algorithm.
///
/// Walking from the rightmost digit, every second digit is doubled (with 9
/// subtracted from doubled values above 9) and all values are summed; the
/// sequence passes iff the sum is a multiple of 10. Sequences shorter than
/// two digits never pass, including the lone digit `0`.
///
/// # Example
///
/// ```
/// use bandeira::luhn;
///
/// let digits = [4, 5, 3, 2, 0, 1, 5, 1, 1, 2, 8, 3, 0, 3, 6, 6];
/// assert!(luhn::validate(&digits));
///
/// // Mutating a single digit flips the result
/// let mutated = [4, 5, 3, 2, 0, 1, 5, 1, 1, 2, 8, 3, 0, 3, 6, 5];
/// assert!(!luhn::validate(&mutated));
///
/// // Too short to carry a checksum
/// assert!(!luhn::validate(&[0]));
/// assert!(!luhn::validate(&[]));
/// ```
#[inline]
pub fn validate(digits: &[u8]) -> bool {
    if digits.len() < 2 {
        return false;
    }
    checksum(digits) % 10 == 0
}

/// Computes the Luhn sum for a digit sequence (not reduced modulo 10).
///
/// The rightmost digit is position 0 and is never doubled; positions 1, 3,
/// 5, ... from the right are doubled through the lookup table.
#[inline]
pub fn checksum(digits: &[u8]) -> u32 {
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(pos, &digit)| {
            if pos % 2 == 1 {
                u32::from(DOUBLE_TABLE[digit as usize])
            } else {
                u32::from(digit)
            }
        })
        .sum()
}

/// Computes the check digit that completes a partial number.
///
/// Given a sequence missing its final digit, returns the digit 0-9 that makes
/// the full sequence pass [`validate`]. Every position shifts left by one
/// relative to the final number, so the doubling parity is inverted here.
///
/// # Example
///
/// ```
/// use bandeira::luhn;
///
/// let partial = [4, 5, 3, 2, 0, 1, 5, 1, 1, 2, 8, 3, 0, 3, 6];
/// assert_eq!(luhn::check_digit(&partial), 6);
///
/// let mut full = partial.to_vec();
/// full.push(luhn::check_digit(&partial));
/// assert!(luhn::validate(&full));
/// ```
#[inline]
pub fn check_digit(digits: &[u8]) -> u8 {
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(pos, &digit)| {
            // Position pos here lands at pos + 1 in the final number.
            if pos % 2 == 0 {
                u32::from(DOUBLE_TABLE[digit as usize])
            } else {
                u32::from(digit)
            }
        })
        .sum();

    ((10 - (sum % 10)) % 10) as u8
}
