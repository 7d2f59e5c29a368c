//! # bandeira
//!
//! Card brand identification and validation for Rust.
//!
//! ## Features
//!
//! - Luhn checksum validation
//! - Brand identification for 8 brands, including partially-typed numbers
//! - Brand-aware length validation
//! - Display formatting (groups of four) and input normalization
//! - Masked output safe for logs and UIs
//! - Total API: no error type, every input yields a [`Verdict`]
//!
//! ## Quick Start
//!
//! ```rust
//! use bandeira::{validate, is_valid, identify_brand, CardBrand};
//!
//! // Full validation: brand, length, checksum
//! let verdict = validate("4532-0151-1283-0366");
//! assert!(verdict.is_valid());
//! assert_eq!(verdict.brand(), Some(CardBrand::Visa));
//! assert_eq!(verdict.last_four(), "0366");
//!
//! // Safe for logging - never exposes the full number
//! println!("Card: {}", verdict.masked()); // "**** **** **** 0366"
//!
//! // Quick boolean check
//! assert!(is_valid("4532015112830366"));
//! assert!(!is_valid("4532015112830365"));
//!
//! // Identify brands while the user is still typing
//! assert_eq!(identify_brand("4"), Some(CardBrand::Visa));
//! assert_eq!(identify_brand("55"), Some(CardBrand::Mastercard));
//! assert_eq!(identify_brand("9"), None);
//! ```
//!
//! ## Formatting
//!
//! ```rust
//! use bandeira::{format_grouped, normalize};
//!
//! assert_eq!(normalize("4532-0151-1283-0366"), "4532015112830366");
//! assert_eq!(format_grouped("378282246310005"), "3782 8224 6310 005");
//! ```
//!
//! ## Test Numbers
//!
//! Every brand ships with a checksum-valid sample number for demos and tests:
//!
//! ```rust
//! use bandeira::{is_valid, sample_numbers};
//!
//! for (brand, number) in sample_numbers() {
//!     assert!(is_valid(number), "{brand} sample should validate");
//! }
//! ```
//!
//! ## Supported Card Brands
//!
//! Brands are matched in a fixed registry order; the first matching pattern
//! wins. That keeps overlapping ranges deterministic: Discover claims the 65
//! range before Elo, Visa claims Elo's 4-leading IINs, Diners Club claims
//! 19-digit numbers starting with 3841 before Hipercard.
//!
//! | Brand | Prefix | Lengths |
//! |-------|--------|---------|
//! | Visa | 4 | 13, 16, 19 |
//! | MasterCard | 51-55, 2221-2720 | 16 |
//! | American Express | 34, 37 | 15 |
//! | Discover | 6011, 65 | 16 |
//! | Diners Club | 300-305, 36, 38 | 14 |
//! | JCB | 35, 2131, 1800 | 16 |
//! | Elo | fixed 6-digit IIN list | 16 |
//! | Hipercard | 606282, 3841 | 13, 16, 19 |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `cli` | Command-line tool (pulls in `clap` and `serde`) |
//! | `serde` | `Serialize`/`Deserialize` for [`CardBrand`] |
//!
//! ## Security
//!
//! - Verdict digits are zeroized in memory when the [`Verdict`] is dropped
//! - `Debug` and `Display` show masked numbers only
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod brand;
pub mod detect;
pub mod format;
pub mod luhn;
pub mod validate;
pub mod verdict;

// Re-export main types at crate root
pub use brand::{sample_numbers, supported_brands, CardBrand};
pub use format::{format_grouped, normalize};
pub use validate::{check_luhn, identify_brand, is_valid, validate};
pub use verdict::Verdict;
