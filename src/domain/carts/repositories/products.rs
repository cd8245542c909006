//! Products Repository

use futures::TryStreamExt;
use mongodb::{
    Collection,
    bson::{doc, oid::ObjectId},
};

use crate::{
    database::Db,
    domain::carts::records::{ProductDocument, ProductId},
};

#[derive(Debug, Clone)]
pub(crate) struct MongoProductsRepository {
    collection: Collection<ProductDocument>,
}

impl MongoProductsRepository {
    #[must_use]
    pub(crate) fn new(db: &Db) -> Self {
        Self {
            collection: db.products(),
        }
    }

    /// Create-or-replace by identifier.
    pub(crate) async fn upsert(
        &self,
        document: &ProductDocument,
    ) -> Result<(), mongodb::error::Error> {
        self.collection
            .replace_one(doc! { "_id": document.id }, document)
            .upsert(true)
            .await?;

        Ok(())
    }

    pub(crate) async fn find(
        &self,
        product: ProductId,
    ) -> Result<Option<ProductDocument>, mongodb::error::Error> {
        self.collection
            .find_one(doc! { "_id": product.into_oid() })
            .await
    }

    /// Batch fetch. The store returns matches in arbitrary order and skips
    /// identifiers with no document; callers re-order and handle gaps.
    pub(crate) async fn find_many(
        &self,
        ids: &[ObjectId],
    ) -> Result<Vec<ProductDocument>, mongodb::error::Error> {
        let cursor = self
            .collection
            .find(doc! { "_id": { "$in": ids.to_vec() } })
            .await?;

        cursor.try_collect().await
    }

    /// Update only the mutable fields of an existing product. Returns the
    /// number of matched documents; zero means the product does not exist.
    pub(crate) async fn update_fields(
        &self,
        product: ProductId,
        quantity: i64,
        unit_price: f64,
    ) -> Result<u64, mongodb::error::Error> {
        let matched = self
            .collection
            .update_one(
                doc! { "_id": product.into_oid() },
                doc! { "$set": { "quantity": quantity, "unitPrice": unit_price } },
            )
            .await?
            .matched_count;

        Ok(matched)
    }

    /// Remove a product document. Does not touch any cart's reference
    /// list. Returns the number of documents removed.
    pub(crate) async fn delete(&self, product: ProductId) -> Result<u64, mongodb::error::Error> {
        let deleted = self
            .collection
            .delete_one(doc! { "_id": product.into_oid() })
            .await?
            .deleted_count;

        Ok(deleted)
    }

    /// Remove a batch of product documents in one statement.
    pub(crate) async fn delete_many(
        &self,
        ids: &[ObjectId],
    ) -> Result<u64, mongodb::error::Error> {
        let deleted = self
            .collection
            .delete_many(doc! { "_id": { "$in": ids.to_vec() } })
            .await?
            .deleted_count;

        Ok(deleted)
    }
}
