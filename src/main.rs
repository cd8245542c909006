//! Cart Service CLI
//!
//! Thin transport stand-in over the [`CartsService`] boundary: one
//! subcommand per business operation, results printed in the wire shape.

use std::process;

use cart_service::{
    config::StoreConfig,
    database::{self, Db},
    domain::carts::{
        CartsService, MongoCartsService,
        models::{NewCart, NewProduct},
    },
};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "cart-service", about = "Shopping cart backend CLI", long_about = None)]
struct Cli {
    /// MongoDB connection string
    #[arg(long, env = "MONGO_URL", default_value = "mongodb://127.0.0.1:27017")]
    mongo_url: String,

    /// Database name
    #[arg(long, env = "MONGO_DB", default_value = "carts")]
    mongo_db: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Cart(CartCommand),
    Product(ProductCommand),
    /// Check the store connection
    Ping,
}

#[derive(Debug, Args)]
struct CartCommand {
    #[command(subcommand)]
    command: CartSubcommand,
}

#[derive(Debug, Subcommand)]
enum CartSubcommand {
    /// Fetch a user's cart with its products populated
    Get(UserArgs),
    /// Create a cart for a user
    Create(CreateCartArgs),
    /// Delete a user's cart and every product it references
    Delete(UserArgs),
}

#[derive(Debug, Args)]
struct ProductCommand {
    #[command(subcommand)]
    command: ProductSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductSubcommand {
    /// Add a product to a user's cart, merging on duplicate identifiers
    Add(AddProductArgs),
    /// Remove a product from a user's cart
    Remove(RemoveProductArgs),
}

#[derive(Debug, Args)]
struct UserArgs {
    /// User the cart belongs to
    #[arg(long)]
    user: String,
}

#[derive(Debug, Args)]
struct CreateCartArgs {
    /// User the cart belongs to
    #[arg(long)]
    user: String,

    /// Explicit cart identifier (hex); generated when omitted
    #[arg(long)]
    cart_id: Option<String>,
}

#[derive(Debug, Args)]
struct AddProductArgs {
    /// User the cart belongs to
    #[arg(long)]
    user: String,

    /// Explicit product identifier (hex); generated when omitted
    #[arg(long)]
    product_id: Option<String>,

    #[arg(long)]
    quantity: u64,

    #[arg(long)]
    unit_price: f64,
}

#[derive(Debug, Args)]
struct RemoveProductArgs {
    /// User the cart belongs to
    #[arg(long)]
    user: String,

    /// Product identifier (hex)
    #[arg(long)]
    product_id: String,
}

#[tokio::main]
async fn main() {
    let _env = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(error) = run(cli).await {
        eprintln!("{error}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    let config = StoreConfig::new(cli.mongo_url, cli.mongo_db);

    let db = database::connect(&config)
        .await
        .map_err(|error| format!("failed to connect to store: {error}"))?;

    match cli.command {
        Commands::Cart(CartCommand { command }) => run_cart(&db, command).await,
        Commands::Product(ProductCommand { command }) => run_product(&db, command).await,
        Commands::Ping => {
            db.ping()
                .await
                .map_err(|error| format!("store unreachable: {error}"))?;
            println!("ok");
            Ok(())
        }
    }
}

async fn run_cart(db: &Db, command: CartSubcommand) -> Result<(), String> {
    let service = MongoCartsService::new(db);

    match command {
        CartSubcommand::Get(args) => {
            let cart = service
                .get_cart(&args.user)
                .await
                .map_err(|error| format!("failed to fetch cart: {error}"))?;

            println!("{}", render(&cart)?);
        }
        CartSubcommand::Create(args) => {
            let id = service
                .post_cart(NewCart {
                    id: args.cart_id,
                    user_id: args.user,
                })
                .await
                .map_err(|error| format!("failed to create cart: {error}"))?;

            println!("cart_id: {id}");
        }
        CartSubcommand::Delete(args) => {
            service
                .delete_cart(&args.user)
                .await
                .map_err(|error| format!("failed to delete cart: {error}"))?;

            println!("deleted");
        }
    }

    Ok(())
}

async fn run_product(db: &Db, command: ProductSubcommand) -> Result<(), String> {
    let service = MongoCartsService::new(db);

    match command {
        ProductSubcommand::Add(args) => {
            let id = service
                .post_product(
                    NewProduct {
                        id: args.product_id,
                        quantity: args.quantity,
                        unit_price: args.unit_price,
                    },
                    &args.user,
                )
                .await
                .map_err(|error| format!("failed to add product: {error}"))?;

            println!("product_id: {id}");
        }
        ProductSubcommand::Remove(args) => {
            service
                .delete_product(&args.product_id, &args.user)
                .await
                .map_err(|error| format!("failed to remove product: {error}"))?;

            println!("removed");
        }
    }

    Ok(())
}

fn render<T: serde::Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|error| format!("failed to render output: {error}"))
}
