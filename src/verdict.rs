//! The validation verdict: one structured result per validation call.
//!
//! A [`Verdict`] exists for every input, valid or not; the brand option and
//! the two check booleans carry all failure semantics. The verdict owns the
//! normalized digit string, which is sensitive data, so display surfaces are
//! masked and the buffer is wiped on drop.

use std::fmt;

use zeroize::Zeroize;

use crate::brand::CardBrand;
use crate::format;

/// The combined result of validating one input string.
///
/// Produced by [`validate`](crate::validate). Carries the matched brand (if
/// any), the normalized digits, and the independent checksum and length
/// checks; [`is_valid`](Self::is_valid) is their conjunction.
///
/// # Security
///
/// - `Debug` and `Display` render the digits masked, never in full
/// - The digit buffer is zeroed when the verdict is dropped
/// - Accessing the full digits requires the explicit [`digits`](Self::digits)
///   call
#[derive(Clone)]
pub struct Verdict {
    /// First registry brand whose prefix pattern matched, if any.
    brand: Option<CardBrand>,
    /// The normalized digit-only input.
    digits: String,
    /// Luhn checksum result over the digits, independent of brand.
    luhn_valid: bool,
    /// Whether the digit count is accepted by the matched brand.
    length_valid: bool,
}

impl Verdict {
    #[inline]
    pub(crate) fn new(
        brand: Option<CardBrand>,
        digits: String,
        luhn_valid: bool,
        length_valid: bool,
    ) -> Self {
        Self {
            brand,
            digits,
            luhn_valid,
            length_valid,
        }
    }

    /// Returns the matched brand, or `None` if no registry pattern accepted
    /// the input.
    #[inline]
    pub const fn brand(&self) -> Option<CardBrand> {
        self.brand
    }

    /// Returns the number of digits in the normalized input.
    #[inline]
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    /// Returns whether the digits pass the Luhn checksum.
    ///
    /// Computed over the normalized digits regardless of brand match; inputs
    /// shorter than two digits are always false.
    #[inline]
    pub const fn is_luhn_valid(&self) -> bool {
        self.luhn_valid
    }

    /// Returns whether the digit count is valid for the matched brand.
    ///
    /// Always false when no brand matched.
    #[inline]
    pub const fn is_length_valid(&self) -> bool {
        self.length_valid
    }

    /// Returns whether the input is fully valid: a brand matched, the length
    /// is accepted by that brand, and the checksum passes.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.brand.is_some() && self.length_valid && self.luhn_valid
    }

    /// Returns the normalized digit string.
    ///
    /// # Security Warning
    ///
    /// This exposes the full number. Never log the result; use
    /// [`masked`](Self::masked) for display.
    #[inline]
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Returns the digits grouped in fours for display.
    ///
    /// Same rendering as [`format_grouped`](crate::format_grouped); carries
    /// the full number, so treat it like [`digits`](Self::digits).
    #[inline]
    pub fn formatted(&self) -> String {
        format::format_grouped(&self.digits)
    }

    /// Returns the trailing digits that are safe to display (up to four).
    #[inline]
    pub fn last_four(&self) -> &str {
        let len = self.digits.len();
        &self.digits[len.saturating_sub(4)..]
    }

    /// Returns a masked rendering: all digits but the last four replaced
    /// with `*`, grouped in fours.
    ///
    /// Inputs of four digits or fewer are fully masked.
    ///
    /// # Example
    ///
    /// ```
    /// use bandeira::validate;
    ///
    /// let verdict = validate("4532015112830366");
    /// assert_eq!(verdict.masked(), "**** **** **** 0366");
    ///
    /// let verdict = validate("378282246310005");
    /// assert_eq!(verdict.masked(), "**** **** *** 0005");
    /// ```
    pub fn masked(&self) -> String {
        let len = self.digits.len();
        if len <= 4 {
            return "*".repeat(len);
        }

        let hidden = len - 4;
        let mut out = String::with_capacity(len + len / 4 + 1);
        for i in 0..hidden {
            if i > 0 && i % 4 == 0 {
                out.push(' ');
            }
            out.push('*');
        }
        out.push(' ');
        out.push_str(&self.digits[hidden..]);
        out
    }
}

impl fmt::Debug for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Digits are masked so verdicts can be logged safely
        f.debug_struct("Verdict")
            .field("brand", &self.brand)
            .field("digits", &self.masked())
            .field("digit_count", &self.digit_count())
            .field("luhn_valid", &self.luhn_valid)
            .field("length_valid", &self.length_valid)
            .finish()
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.brand {
            Some(brand) => write!(f, "{} {}", brand, self.masked()),
            None => write!(f, "unknown {}", self.masked()),
        }
    }
}

impl Drop for Verdict {
    fn drop(&mut self) {
        self.digits.zeroize();
    }
}
