//! Carts Repository

use mongodb::{Collection, bson::doc};

use crate::{
    database::Db,
    domain::carts::records::{CartDocument, CartId, ProductId},
};

#[derive(Debug, Clone)]
pub(crate) struct MongoCartsRepository {
    collection: Collection<CartDocument>,
}

impl MongoCartsRepository {
    #[must_use]
    pub(crate) fn new(db: &Db) -> Self {
        Self {
            collection: db.carts(),
        }
    }

    /// Create-or-replace by identifier. The supplied reference list is
    /// stored as-is; general callers pass an empty one.
    pub(crate) async fn upsert(
        &self,
        document: &CartDocument,
    ) -> Result<(), mongodb::error::Error> {
        self.collection
            .replace_one(doc! { "_id": document.id }, document)
            .upsert(true)
            .await?;

        Ok(())
    }

    pub(crate) async fn find(
        &self,
        cart: CartId,
    ) -> Result<Option<CartDocument>, mongodb::error::Error> {
        self.collection
            .find_one(doc! { "_id": cart.into_oid() })
            .await
    }

    pub(crate) async fn find_by_user(
        &self,
        user_id: &str,
    ) -> Result<Option<CartDocument>, mongodb::error::Error> {
        self.collection.find_one(doc! { "userID": user_id }).await
    }

    /// Remove the cart document only; cascading product removal is the
    /// service's responsibility. Returns the number of documents removed.
    pub(crate) async fn delete(&self, cart: CartId) -> Result<u64, mongodb::error::Error> {
        let deleted = self
            .collection
            .delete_one(doc! { "_id": cart.into_oid() })
            .await?
            .deleted_count;

        Ok(deleted)
    }

    /// Set-add a product reference. Adding an already-present reference is
    /// a no-op. Returns the number of matched cart documents.
    pub(crate) async fn add_product_ref(
        &self,
        cart: CartId,
        product: ProductId,
    ) -> Result<u64, mongodb::error::Error> {
        let matched = self
            .collection
            .update_one(
                doc! { "_id": cart.into_oid() },
                doc! { "$addToSet": { "products": product.into_oid() } },
            )
            .await?
            .matched_count;

        Ok(matched)
    }

    /// Set-remove a product reference. Removing an absent reference is a
    /// no-op. Returns the number of matched cart documents.
    pub(crate) async fn remove_product_ref(
        &self,
        cart: CartId,
        product: ProductId,
    ) -> Result<u64, mongodb::error::Error> {
        let matched = self
            .collection
            .update_one(
                doc! { "_id": cart.into_oid() },
                doc! { "$pull": { "products": product.into_oid() } },
            )
            .await?
            .matched_count;

        Ok(matched)
    }
}
