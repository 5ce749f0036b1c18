//! Interactive retail console: assortments, shopping cart, checkout and
//! flat-file reporting.

use std::io::{self, BufRead, Write};
use std::process;
use std::str::FromStr;

use clap::Parser;
use rust_decimal::Decimal;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use shopfloor::app::{App, AppError};
use shopfloor::cart::CartLine;
use shopfloor::fixtures;
use shopfloor::payment::{Order, PaymentMethod};
use shopfloor::prices::Price;

#[derive(Debug, Parser)]
#[command(name = "shopfloor", about = "Retail assortment and checkout console", long_about = None)]
struct Cli {
    /// Seed for the sample catalog, for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Items generated per assortment at startup
    #[arg(long, default_value_t = 5)]
    items: usize,

    /// Start with empty assortments instead of sample data
    #[arg(long)]
    empty: bool,
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    if let Err(error) = run(&cli) {
        eprintln!("{error}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let assortments = if cli.empty {
        fixtures::empty_assortments()
    } else {
        fixtures::sample_assortments(cli.items, cli.seed)
    };

    let mut app = App::new(assortments, ".")?;

    // Unexpected faults land in the error log before the process dies;
    // everything recoverable is handled inside the loop.
    if let Err(error) = menu_loop(&mut app) {
        app.error_log().record(&error);
        return Err(error);
    }

    Ok(())
}

fn menu_loop(app: &mut App) -> Result<(), AppError> {
    loop {
        println!();
        println!("Select an operation:");
        println!("1. Display items available in the assortments");
        println!("2. Display the shopping cart");
        println!("3. Record a new delivery");
        println!("4. Place an order");
        println!("5. Shopping cart operations");
        println!("6. Generate the stock file");
        println!("0. Exit");

        let choice = read_str("Enter your choice: ")?;

        match choice.as_str() {
            "1" => display_assortments(app)?,
            "2" => app.cart().write_listing(io::stdout().lock())?,
            "3" => delivery_intake(app)?,
            "4" => place_order(app)?,
            "5" => cart_menu(app)?,
            "6" => generate_stock_file(app),
            "0" => return Ok(()),
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

fn display_assortments(app: &App) -> io::Result<()> {
    let mut out = io::stdout().lock();

    for assortment in app.assortments() {
        assortment.write_listing(&mut out)?;
    }

    Ok(())
}

fn delivery_intake(app: &mut App) -> io::Result<()> {
    let name = read_str("Enter product name: ")?;
    let quantity: u32 = prompt_parse("Enter quantity received: ")?;
    let price: u64 = prompt_parse("Enter the price: ")?;

    // Deliveries land in the first assortment.
    match app.receive_delivery(0, &name, quantity, Price::new(price)) {
        Ok(path) => println!("Delivery information saved to file: {}", path.display()),
        Err(error) => println!("An error occurred while recording the delivery: {error}"),
    }

    Ok(())
}

fn place_order(app: &App) -> io::Result<()> {
    let threshold: usize = prompt_parse("Enter the stock threshold: ")?;

    match app.place_order(threshold) {
        Ok((path, _)) => println!("Items and counts saved to file: {}", path.display()),
        Err(error) => println!("An error occurred while writing the order file: {error}"),
    }

    Ok(())
}

fn generate_stock_file(app: &App) {
    match app.generate_stock_file() {
        Ok(path) => println!("Stock information saved to file: {}", path.display()),
        Err(error) => println!("An error occurred while creating the stock file: {error}"),
    }
}

fn cart_menu(app: &mut App) -> Result<(), AppError> {
    println!("1. Insert a new product into the shopping cart");
    println!("2. Display the shopping cart");
    println!("3. Change a product's quantity");
    println!("4. Buy the products in the shopping cart");

    let choice = read_str("Enter your choice for the shopping cart: ")?;

    match choice.as_str() {
        "1" => add_cart_line(app)?,
        "2" => app.cart().write_listing(io::stdout().lock())?,
        "3" => change_cart_quantity(app)?,
        "4" => finalize_purchase(app)?,
        _ => println!("Invalid choice. Please try again."),
    }

    Ok(())
}

fn add_cart_line(app: &mut App) -> io::Result<()> {
    let name = read_str("Insert the name of the product: ")?;
    let quantity: u32 = prompt_parse("Insert the quantity of the product: ")?;

    // TODO: prompt for the line prices instead of the fixed defaults.
    app.cart_mut().add_line(CartLine {
        name,
        quantity,
        net_price: Decimal::new(2000, 2),
        tax: Decimal::new(500, 2),
        gross_price: Decimal::new(2500, 2),
    });

    println!("Added");

    Ok(())
}

fn change_cart_quantity(app: &mut App) -> io::Result<()> {
    let name = read_str("Insert the name of the product: ")?;
    let quantity: u32 = prompt_parse("Insert the quantity of the product: ")?;

    match app.cart_mut().change_quantity(&name, quantity) {
        Ok(()) => println!("Quantity updated"),
        Err(error) => println!("{error}"),
    }

    Ok(())
}

fn finalize_purchase(app: &mut App) -> io::Result<()> {
    let decision = read_str("Do you want to finalize your purchase? (yes/no): ")?;

    if decision != "yes" {
        return Ok(());
    }

    let mut order = Order::new();

    println!("1. Pay with Credit Card");
    println!("2. Pay with PayPal");
    let choice = read_str("Enter your payment choice: ")?;

    match choice.as_str() {
        "1" | "2" => {
            let amount: Decimal = prompt_parse("Insert the total price amount: ")?;

            order.set_method(if choice == "1" {
                PaymentMethod::CreditCard
            } else {
                PaymentMethod::PayPal
            });

            match order.process_payment(amount) {
                Ok(confirmation) => println!("{confirmation}"),
                Err(error) => println!("{error}"),
            }
        }
        _ => println!("Invalid choice. Please try again."),
    }

    // The purchase goes through even when the payment choice was invalid;
    // payment and fulfilment are not reconciled.
    match app.checkout() {
        Ok(invoice) if invoice.is_empty() => println!("No cart line could be fulfilled from stock"),
        Ok(_) => println!("File created and added the invoices"),
        Err(error) => println!("An error occurred while writing the invoice: {error}"),
    }

    Ok(())
}

fn read_str(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;

    read_trimmed_line(&mut io::stdin().lock())
}

/// Read one trimmed line; a closed input stream is an error, not an empty
/// line.
fn read_trimmed_line(input: &mut impl BufRead) -> io::Result<String> {
    let mut line = String::new();

    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input stream closed"));
    }

    Ok(line.trim().to_string())
}

/// Prompt until the input parses; format errors re-prompt instead of
/// terminating the run, while a closed input stream ends it cleanly.
fn prompt_parse<T: FromStr>(prompt: &str) -> io::Result<T> {
    loop {
        match read_str(prompt)?.parse() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Invalid input, try again."),
        }
    }
}
