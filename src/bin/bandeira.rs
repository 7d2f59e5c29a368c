//! CLI tool for card brand identification and validation.
//!
//! # Usage
//!
//! ```bash
//! # Validate a card number
//! bandeira validate 4532015112830366
//!
//! # Same verdict as JSON (masked, never the full number)
//! bandeira validate 4532015112830366 --output json
//!
//! # Identify the brand of a complete or partial number
//! bandeira detect 453201
//!
//! # Format a number into groups of four
//! bandeira format 4532015112830366
//!
//! # Checksum only
//! bandeira luhn 4532015112830366
//!
//! # List the brand registry in matching order
//! bandeira brands
//!
//! # Run every brand's sample number through the validator
//! bandeira samples
//! ```

use bandeira::{
    check_luhn, format_grouped, identify_brand, sample_numbers, supported_brands, validate,
    Verdict,
};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "bandeira")]
#[command(author, version, about = "Card brand identification and validation tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a card number
    Validate {
        /// Card number to validate (spaces and dashes allowed)
        card_number: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Identify the brand of a complete or partial number
    Detect {
        /// Card number (or partial number)
        card_number: String,
    },

    /// Format a card number into groups of four
    Format {
        /// Card number to format
        card_number: String,
    },

    /// Check the Luhn checksum only
    Luhn {
        /// Card number to check
        card_number: String,
    },

    /// List supported brands in matching order
    Brands,

    /// Validate every brand's sample number
    Samples {
        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// JSON shape of a verdict. Carries the masked rendering only.
#[derive(Serialize)]
struct VerdictReport {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    brand: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'static str>,
    digit_count: usize,
    luhn_valid: bool,
    length_valid: bool,
    masked: String,
}

impl VerdictReport {
    fn from_verdict(verdict: &Verdict) -> Self {
        Self {
            valid: verdict.is_valid(),
            brand: verdict.brand().map(|b| b.id()),
            name: verdict.brand().map(|b| b.name()),
            digit_count: verdict.digit_count(),
            luhn_valid: verdict.is_luhn_valid(),
            length_valid: verdict.is_length_valid(),
            masked: verdict.masked(),
        }
    }
}

#[derive(Serialize)]
struct SampleReport {
    brand: &'static str,
    name: &'static str,
    number: &'static str,
    valid: bool,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate {
            card_number,
            output,
        } => {
            cmd_validate(&card_number, output);
        }
        Commands::Detect { card_number } => {
            cmd_detect(&card_number);
        }
        Commands::Format { card_number } => {
            cmd_format(&card_number);
        }
        Commands::Luhn { card_number } => {
            cmd_luhn(&card_number);
        }
        Commands::Brands => {
            cmd_brands();
        }
        Commands::Samples { output } => {
            cmd_samples(output);
        }
    }
}

fn cmd_validate(card_number: &str, output: OutputFormat) {
    let verdict = validate(card_number);

    match output {
        OutputFormat::Text => {
            println!("Valid: {}", if verdict.is_valid() { "yes" } else { "no" });
            match verdict.brand() {
                Some(brand) => println!("Brand: {}", brand.name()),
                None => println!("Brand: Unknown"),
            }
            println!("Digits: {}", verdict.digit_count());
            println!(
                "Luhn check: {}",
                if verdict.is_luhn_valid() { "PASS" } else { "FAIL" }
            );
            println!(
                "Length check: {}",
                if verdict.is_length_valid() { "PASS" } else { "FAIL" }
            );
            println!("Masked: {}", verdict.masked());
        }
        OutputFormat::Json => {
            print_json(&VerdictReport::from_verdict(&verdict));
        }
    }

    std::process::exit(if verdict.is_valid() { 0 } else { 1 });
}

fn cmd_detect(card_number: &str) {
    match identify_brand(card_number) {
        Some(brand) => {
            println!("Detected Brand: {}", brand.name());
            println!("Valid Lengths: {:?}", brand.valid_lengths());
        }
        None => {
            println!("Detected Brand: Unknown");
            std::process::exit(1);
        }
    }
}

fn cmd_format(card_number: &str) {
    println!("{}", format_grouped(card_number));
}

fn cmd_luhn(card_number: &str) {
    if check_luhn(card_number) {
        println!("Luhn check: PASS");
    } else {
        println!("Luhn check: FAIL");
        std::process::exit(1);
    }
}

fn cmd_brands() {
    for brand in supported_brands() {
        println!(
            "{:<12} {:<18} {:<14?} {}",
            brand.id(),
            brand.name(),
            brand.valid_lengths(),
            brand.color()
        );
    }
}

fn cmd_samples(output: OutputFormat) {
    match output {
        OutputFormat::Text => {
            for (brand, number) in sample_numbers() {
                let status = if validate(number).is_valid() {
                    "valid"
                } else {
                    "INVALID"
                };
                println!("{:<18} {:<19} {}", brand.name(), number, status);
            }
        }
        OutputFormat::Json => {
            let rows: Vec<SampleReport> = sample_numbers()
                .map(|(brand, number)| SampleReport {
                    brand: brand.id(),
                    name: brand.name(),
                    number,
                    valid: validate(number).is_valid(),
                })
                .collect();
            print_json(&rows);
        }
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(2);
        }
    }
}
