//! Database connection management

use std::time::Duration;

use mongodb::{Client, Collection, Database, bson::doc, options::ClientOptions};
use tokio::time::sleep;
use tracing::warn;

use crate::{
    config::StoreConfig,
    domain::carts::records::{CartDocument, ProductDocument},
};

pub(crate) const CARTS_COLLECTION: &str = "carts";
pub(crate) const PRODUCTS_COLLECTION: &str = "products";

#[derive(Debug, Clone)]
pub struct Db {
    database: Database,
}

impl Db {
    #[must_use]
    pub fn new(database: Database) -> Self {
        Self { database }
    }

    pub(crate) fn carts(&self) -> Collection<CartDocument> {
        self.database.collection(CARTS_COLLECTION)
    }

    pub(crate) fn products(&self) -> Collection<ProductDocument> {
        self.database.collection(PRODUCTS_COLLECTION)
    }

    /// Check the store connection.
    ///
    /// # Errors
    ///
    /// Returns an error when the server cannot be reached within the
    /// configured server-selection deadline.
    pub async fn ping(&self) -> Result<(), mongodb::error::Error> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}

/// Connect to MongoDB, retrying with exponential backoff up to
/// `config.max_connect_attempts` before surfacing the failure.
///
/// # Errors
///
/// Returns the last connection error once the attempt limit is exhausted,
/// or immediately when the connection string cannot be parsed.
pub async fn connect(config: &StoreConfig) -> Result<Db, mongodb::error::Error> {
    let mut options = ClientOptions::parse(&config.url).await?;
    options.connect_timeout = Some(config.connect_timeout);
    options.server_selection_timeout = Some(config.connect_timeout);

    let client = Client::with_options(options)?;
    let db = Db::new(client.database(&config.database));

    let mut delay = Duration::from_millis(250);
    let mut attempt: u32 = 1;

    loop {
        match db.ping().await {
            Ok(()) => return Ok(db),
            Err(error) if attempt < config.max_connect_attempts => {
                warn!(attempt, %error, "store not reachable, retrying");
                sleep(delay).await;
                delay = (delay * 2).min(Duration::from_secs(5));
                attempt += 1;
            }
            Err(error) => return Err(error),
        }
    }
}
