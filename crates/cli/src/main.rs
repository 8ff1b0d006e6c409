//! Shopkit CLI - run the pricing helpers and checkout call sites from a shell.
//!
//! # Usage
//!
//! ```bash
//! # Pure helpers (no configuration needed)
//! shopkit fizzbuzz 15
//! shopkit discount 500 SAVE10
//! shopkit can-drive 17 UK
//! shopkit stack 1 2 3
//!
//! # Checkout call sites (need SHOPKIT_MAIL_FROM, see shopkit-checkout config)
//! shopkit convert 10 EUR
//! shopkit shipping US
//! shopkit order 25.00 --card 4242424242424242
//! shopkit signup name@domain.com
//! ```
//!
//! # Logging
//!
//! Logs go to stderr. Set `RUST_LOG` to adjust verbosity (default: `info`)
//! and `SHOPKIT_LOG_FORMAT=json` for JSON lines.

#![cfg_attr(not(test), forbid(unsafe_code))]

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use shopkit_core::CurrencyCode;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "shopkit")]
#[command(author, version, about = "Shopkit pricing and checkout tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the greater of two numbers
    Max {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },
    /// Fizz-buzz a single number
    Fizzbuzz { n: i64 },
    /// Average a list of numbers
    Average {
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<f64>,
    },
    /// Compute n!
    Factorial {
        #[arg(allow_negative_numbers = true)]
        n: i32,
    },
    /// List promotional coupons as JSON
    Coupons,
    /// Apply a discount code to a price
    Discount {
        #[arg(allow_negative_numbers = true)]
        price: Decimal,
        code: String,
    },
    /// Seasonal discount rate for a date (default: today)
    Seasonal {
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Check a username's length
    Username { username: String },
    /// Validate a sign-up form
    ValidateInput { username: String, age: u32 },
    /// Check whether a price falls in [min, max]
    PriceRange {
        #[arg(allow_negative_numbers = true)]
        price: Decimal,
        #[arg(allow_negative_numbers = true)]
        min: Decimal,
        #[arg(allow_negative_numbers = true)]
        max: Decimal,
    },
    /// Check driving eligibility by country
    CanDrive { age: u32, country: String },
    /// Check password strength
    Password { password: String },
    /// Validate a product for publishing
    Publish {
        #[arg(short, long)]
        name: String,
        #[arg(short, long, allow_negative_numbers = true)]
        price: Decimal,
    },
    /// Push values onto a stack and print them in pop order
    Stack { values: Vec<String> },
    /// Convert a USD price into another currency
    Convert { price: Decimal, currency: CurrencyCode },
    /// Show shipping cost for a destination
    Shipping { destination: String },
    /// Render the home page
    Render,
    /// Charge a card for an order
    Order {
        amount: Decimal,
        /// Card number
        #[arg(long)]
        card: String,
        #[arg(long, default_value = "Card Holder")]
        holder: String,
        #[arg(long, default_value = "12/30")]
        expiry: String,
        #[arg(long, default_value = "000")]
        cvc: String,
    },
    /// Sign up an email address
    Signup { email: String },
    /// Email a one-time login code
    Login { email: String },
    /// Check whether the store is open right now
    Online,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("SHOPKIT_LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(output) => {
            #[allow(clippy::print_stdout)]
            {
                println!("{output}");
            }
        }
        Err(e) => {
            tracing::error!("Command failed: {e}");
            std::process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> Result<String, Box<dyn std::error::Error>> {
    use commands::{checkout, helpers};

    let output = match cli.command {
        Commands::Max { a, b } => helpers::max(a, b),
        Commands::Fizzbuzz { n } => helpers::fizz_buzz(n),
        Commands::Average { numbers } => helpers::average(&numbers),
        Commands::Factorial { n } => helpers::factorial(n)?,
        Commands::Coupons => helpers::coupons()?,
        Commands::Discount { price, code } => helpers::discount(price, &code)?,
        Commands::Seasonal { date } => helpers::seasonal(date),
        Commands::Username { username } => helpers::username(&username),
        Commands::ValidateInput { username, age } => helpers::validate_input(&username, age)?,
        Commands::PriceRange { price, min, max } => helpers::price_range(price, min, max),
        Commands::CanDrive { age, country } => helpers::can_drive(age, &country)?,
        Commands::Password { password } => helpers::password(&password),
        Commands::Publish { name, price } => helpers::publish(name, price)?,
        Commands::Stack { values } => helpers::stack(values)?,
        Commands::Convert { price, currency } => {
            checkout::convert(&checkout::services()?, price, currency).await?
        }
        Commands::Shipping { destination } => {
            checkout::shipping(&checkout::services()?, &destination).await?
        }
        Commands::Render => checkout::render(&checkout::services()?).await?,
        Commands::Order {
            amount,
            card,
            holder,
            expiry,
            cvc,
        } => {
            let card = shopkit_core::CreditCard::new(holder, card, expiry, cvc);
            checkout::order(&checkout::services()?, amount, &card).await?
        }
        Commands::Signup { email } => checkout::signup(&checkout::services()?, &email).await?,
        Commands::Login { email } => checkout::login(&checkout::services()?, &email).await?,
        Commands::Online => checkout::online(&checkout::services()?),
    };

    Ok(output)
}
