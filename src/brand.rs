//! The brand registry: an ordered catalog of supported card networks.
//!
//! Each brand carries a stable id, display metadata, and the set of total
//! lengths a complete number of that brand may have. The catalog order in
//! [`CardBrand::ALL`] is the match priority used by brand detection: the
//! first brand whose prefix pattern accepts the input wins.

use std::fmt;

/// Supported payment card brands/networks.
///
/// Variant order is the registry's declared order and therefore the match
/// priority. Where prefix spaces overlap (Discover's `65` contains Elo IINs,
/// Diners Club's `38` contains Hipercard's `3841` rule), the brand listed
/// first claims the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum CardBrand {
    /// Visa - prefix 4, lengths 13, 16, 19
    Visa,
    /// MasterCard - prefix 51-55 or 2221-2720, length 16
    Mastercard,
    /// American Express - prefix 34 or 37, length 15
    Amex,
    /// Discover - prefix 6011 or 65xx, length 16
    Discover,
    /// Diners Club - prefix 300-305, 36x, 38x, length 14
    DinersClub,
    /// JCB - prefix 35, 2131, 1800, length 16
    Jcb,
    /// Elo - Brazilian network, fixed set of 6-digit IINs, length 16
    Elo,
    /// Hipercard - Brazilian network, prefix 606282, lengths 13, 16, 19
    Hipercard,
}

impl CardBrand {
    /// All supported brands in registry order.
    ///
    /// This order is part of the brand-detection contract: detection walks
    /// the array front to back and the first matching brand wins.
    pub const ALL: [CardBrand; 8] = [
        CardBrand::Visa,
        CardBrand::Mastercard,
        CardBrand::Amex,
        CardBrand::Discover,
        CardBrand::DinersClub,
        CardBrand::Jcb,
        CardBrand::Elo,
        CardBrand::Hipercard,
    ];

    /// Returns the stable symbolic id for this brand.
    ///
    /// Ids are lowercase, contain no separators, and are suitable as keys in
    /// serialized output. They are not display text; see [`name`](Self::name).
    #[inline]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Visa => "visa",
            Self::Mastercard => "mastercard",
            Self::Amex => "amex",
            Self::Discover => "discover",
            Self::DinersClub => "dinersclub",
            Self::Jcb => "jcb",
            Self::Elo => "elo",
            Self::Hipercard => "hipercard",
        }
    }

    /// Returns a human-readable name for the card brand.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Mastercard => "MasterCard",
            Self::Amex => "American Express",
            Self::Discover => "Discover",
            Self::DinersClub => "Diners Club",
            Self::Jcb => "JCB",
            Self::Elo => "Elo",
            Self::Hipercard => "Hipercard",
        }
    }

    /// Returns the brand's color hint as a hex string, for display layers.
    #[inline]
    pub const fn color(&self) -> &'static str {
        match self {
            Self::Visa => "#1A1F71",
            Self::Mastercard => "#EB001B",
            Self::Amex => "#006FCF",
            Self::Discover => "#FF6000",
            Self::DinersClub => "#0079BE",
            Self::Jcb => "#005BAC",
            Self::Elo => "#FFD700",
            Self::Hipercard => "#8B0000",
        }
    }

    /// Returns the brand's icon hint. The catalog currently uses the generic
    /// card glyph for every brand.
    #[inline]
    pub const fn icon(&self) -> &'static str {
        "\u{1F4B3}"
    }

    /// Returns the valid total digit counts for a complete number of this brand.
    #[inline]
    pub const fn valid_lengths(&self) -> &'static [u8] {
        match self {
            Self::Visa => &[13, 16, 19],
            Self::Mastercard => &[16],
            Self::Amex => &[15],
            Self::Discover => &[16],
            Self::DinersClub => &[14],
            Self::Jcb => &[16],
            Self::Elo => &[16],
            Self::Hipercard => &[13, 16, 19],
        }
    }

    /// Returns true if the given digit count is valid for this brand.
    #[inline]
    pub const fn is_valid_length(&self, length: usize) -> bool {
        let valid = self.valid_lengths();
        let mut i = 0;
        while i < valid.len() {
            if valid[i] as usize == length {
                return true;
            }
            i += 1;
        }
        false
    }

    /// Returns one known-valid example number for this brand.
    ///
    /// These are published test numbers; they pass checksum and length
    /// validation but are not issued cards. Intended for demos and tests.
    #[inline]
    pub const fn sample_number(&self) -> &'static str {
        match self {
            Self::Visa => "4532015112830366",
            Self::Mastercard => "5555555555554444",
            Self::Amex => "378282246310005",
            Self::Discover => "6011111111111117",
            Self::DinersClub => "30569309025904",
            Self::Jcb => "3530111333300000",
            Self::Elo => "6362970000457013",
            Self::Hipercard => "6062825624254001",
        }
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Returns the supported brands as an ordered read-only snapshot.
///
/// The order is the registry's match priority. See [`CardBrand::ALL`].
///
/// # Example
///
/// ```
/// use bandeira::{supported_brands, CardBrand};
///
/// let brands = supported_brands();
/// assert_eq!(brands.first(), Some(&CardBrand::Visa));
/// assert_eq!(brands.len(), 8);
/// ```
#[inline]
pub const fn supported_brands() -> &'static [CardBrand] {
    &CardBrand::ALL
}

/// Returns `(brand, sample number)` pairs in registry order.
///
/// Every yielded number validates fully for its brand; see
/// [`CardBrand::sample_number`].
///
/// # Example
///
/// ```
/// use bandeira::{sample_numbers, validate};
///
/// for (brand, number) in sample_numbers() {
///     let verdict = validate(number);
///     assert_eq!(verdict.brand(), Some(brand));
///     assert!(verdict.is_valid());
/// }
/// ```
pub fn sample_numbers() -> impl Iterator<Item = (CardBrand, &'static str)> {
    CardBrand::ALL.into_iter().map(|b| (b, b.sample_number()))
}
