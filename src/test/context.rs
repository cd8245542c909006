//! Test context for service-level integration tests.

use crate::domain::carts::{CartsService, MongoCartsService, models::NewCart};

use super::db::TestDb;

pub struct TestContext {
    pub db: TestDb,
    pub service: MongoCartsService,
}

impl TestContext {
    pub async fn new() -> Self {
        let db = TestDb::new().await;
        let service = MongoCartsService::new(&db.db);

        Self { db, service }
    }

    /// Create a cart for `user_id`, returning its external identifier.
    pub async fn create_cart(&self, user_id: &str) -> String {
        self.service
            .post_cart(NewCart {
                id: None,
                user_id: user_id.to_string(),
            })
            .await
            .expect("Failed to create test cart")
    }
}
