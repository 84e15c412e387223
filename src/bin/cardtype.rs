//! CLI tool for card number classification and validation.
//!
//! # Usage
//!
//! ```bash
//! # Resolve the issuer of a (possibly partial) number
//! cardtype resolve 4111111111111111
//! cardtype resolve 37 --loose
//!
//! # Validate a card number
//! cardtype validate 4111111111111111
//! cardtype validate 4111111111111111 --issuer visa
//!
//! # Run the Luhn check alone
//! cardtype luhn 4111111111111111
//!
//! # Apply an issuer's display grouping
//! cardtype format 378282246310005 --issuer amex
//! ```

use cardtype::{luhn, CardClassifier, IssuerType};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "cardtype")]
#[command(author, version, about = "Payment card issuer classification and validation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the issuer of a card number
    Resolve {
        /// Card number (digits only; may be partial with --loose)
        number: String,

        /// Use loose prefix patterns instead of strict full-format ones
        #[arg(short, long)]
        loose: bool,
    },

    /// Validate a card number (resolution + length + Luhn)
    Validate {
        /// Card number to validate (digits only)
        number: String,

        /// Validate against a specific issuer instead of resolving
        #[arg(short, long)]
        issuer: Option<IssuerArg>,
    },

    /// Check a number against the Luhn algorithm only
    Luhn {
        /// Number to check (digits only)
        number: String,
    },

    /// Apply an issuer's display grouping to a number
    Format {
        /// Card number to format
        number: String,

        /// Issuer whose grouping to use
        #[arg(short, long)]
        issuer: IssuerArg,
    },

    /// Validate a security code for an issuer
    Cvc {
        /// Security code to check
        code: String,

        /// Issuer whose CVC length applies
        #[arg(short, long)]
        issuer: IssuerArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum IssuerArg {
    Amex,
    Visa,
    Mastercard,
    Discover,
    DinersClub,
    Jcb,
    UnionPay,
    Hiper,
    Elo,
}

impl From<IssuerArg> for IssuerType {
    fn from(arg: IssuerArg) -> Self {
        match arg {
            IssuerArg::Amex => IssuerType::Amex,
            IssuerArg::Visa => IssuerType::Visa,
            IssuerArg::Mastercard => IssuerType::Mastercard,
            IssuerArg::Discover => IssuerType::Discover,
            IssuerArg::DinersClub => IssuerType::DinersClub,
            IssuerArg::Jcb => IssuerType::Jcb,
            IssuerArg::UnionPay => IssuerType::UnionPay,
            IssuerArg::Hiper => IssuerType::Hiper,
            IssuerArg::Elo => IssuerType::Elo,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let classifier = CardClassifier::shared();

    match cli.command {
        Commands::Resolve { number, loose } => {
            match classifier.resolve_type_with(&number, !loose) {
                Some(issuer) => {
                    println!("Issuer: {}", issuer);
                    std::process::exit(0);
                }
                None => {
                    println!("Issuer: not recognized");
                    std::process::exit(1);
                }
            }
        }
        Commands::Validate { number, issuer } => {
            let valid = match issuer {
                Some(arg) => classifier.validate_for(&number, arg.into()),
                None => classifier.validate(&number),
            };
            if valid {
                println!("Valid: yes");
                if let Some(resolved) = classifier.resolve_type(&number) {
                    println!("Issuer: {}", resolved);
                }
                std::process::exit(0);
            } else {
                println!("Valid: no");
                std::process::exit(1);
            }
        }
        Commands::Luhn { number } => {
            if luhn::validate(&number) {
                println!("Luhn check: PASS");
                std::process::exit(0);
            } else {
                println!("Luhn check: FAIL");
                std::process::exit(1);
            }
        }
        Commands::Format { number, issuer } => {
            println!("{}", classifier.format_number(&number, issuer.into()));
        }
        Commands::Cvc { code, issuer } => {
            if classifier.validate_cvc(&code, issuer.into()) {
                println!("Valid: yes");
                std::process::exit(0);
            } else {
                println!("Valid: no");
                std::process::exit(1);
            }
        }
    }
}
