//! Carts service.

use std::collections::HashMap;

use async_trait::async_trait;
use mockall::automock;
use mongodb::bson::oid::ObjectId;
use tracing::{debug, warn};

use crate::{
    database::Db,
    domain::carts::{
        errors::CartsServiceError,
        models::{Cart, NewCart, NewProduct},
        records::{CartDocument, CartId, ProductDocument, ProductId},
        repositories::{MongoCartsRepository, MongoProductsRepository},
    },
};

#[derive(Debug, Clone)]
pub struct MongoCartsService {
    carts: MongoCartsRepository,
    products: MongoProductsRepository,
}

impl MongoCartsService {
    #[must_use]
    pub fn new(db: &Db) -> Self {
        Self {
            carts: MongoCartsRepository::new(db),
            products: MongoProductsRepository::new(db),
        }
    }

    async fn cart_for_user(&self, user_id: &str) -> Result<CartDocument, CartsServiceError> {
        self.carts
            .find_by_user(user_id)
            .await?
            .ok_or(CartsServiceError::NotFound)
    }
}

#[async_trait]
impl CartsService for MongoCartsService {
    async fn get_cart(&self, user_id: &str) -> Result<Cart, CartsServiceError> {
        let cart = self.cart_for_user(user_id).await?;

        let documents = self.products.find_many(&cart.product_ids).await?;

        // The batch fetch returns matches in arbitrary order; reassemble in
        // reference order. A reference with no surviving document is omitted
        // rather than failing the read.
        let mut by_id: HashMap<ObjectId, ProductDocument> =
            documents.into_iter().map(|d| (d.id, d)).collect();

        let mut products = Vec::with_capacity(cart.product_ids.len());

        for id in &cart.product_ids {
            match by_id.remove(id) {
                Some(document) => products.push(document.into_model()?),
                None => debug!(product = %id.to_hex(), "omitting orphan product reference"),
            }
        }

        Ok(cart.into_model(products))
    }

    async fn post_cart(&self, cart: NewCart) -> Result<String, CartsServiceError> {
        let id = match cart.id.as_deref() {
            Some(hex) => CartId::parse_hex(hex)?,
            None => {
                if self.carts.find_by_user(&cart.user_id).await?.is_some() {
                    return Err(CartsServiceError::AlreadyExists);
                }

                CartId::new()
            }
        };

        let document = CartDocument {
            id: id.into_oid(),
            user_id: cart.user_id,
            product_ids: Vec::new(),
        };

        self.carts.upsert(&document).await?;

        Ok(id.to_hex())
    }

    async fn delete_cart(&self, user_id: &str) -> Result<(), CartsServiceError> {
        let cart = self.cart_for_user(user_id).await?;

        // Products first, cart second: a failure before this point has no
        // side effects, while a failure between the two deletes leaves
        // unreferenced products rather than orphan references.
        if !cart.product_ids.is_empty() {
            let removed = self.products.delete_many(&cart.product_ids).await?;
            debug!(cart = %cart.id.to_hex(), removed, "cascaded product removal");
        }

        if self.carts.delete(CartId::from_oid(cart.id)).await? == 0 {
            return Err(CartsServiceError::NotFound);
        }

        Ok(())
    }

    async fn post_product(
        &self,
        product: NewProduct,
        user_id: &str,
    ) -> Result<String, CartsServiceError> {
        let id = match product.id.as_deref() {
            Some(hex) => ProductId::parse_hex(hex)?,
            None => ProductId::new(),
        };

        if product.unit_price < 0.0 {
            return Err(CartsServiceError::InvalidPrice);
        }

        let quantity = i64::try_from(product.quantity)?;
        let cart = self.cart_for_user(user_id).await?;

        if cart.product_ids.contains(&id.into_oid()) {
            // Merge rule: quantity is additive, unit price is overwritten by
            // the incoming value. The read-then-write is not atomic; two
            // concurrent merges of the same product can lose an increment.
            let stored = self
                .products
                .find(id)
                .await?
                .ok_or(CartsServiceError::NotFound)?;

            let merged = stored.quantity.saturating_add(quantity);

            if self
                .products
                .update_fields(id, merged, product.unit_price)
                .await?
                == 0
            {
                return Err(CartsServiceError::NotFound);
            }

            return Ok(id.to_hex());
        }

        let document = ProductDocument {
            id: id.into_oid(),
            quantity,
            unit_price: product.unit_price,
        };

        self.products.upsert(&document).await?;

        if self
            .carts
            .add_product_ref(CartId::from_oid(cart.id), id)
            .await?
            == 0
        {
            // The cart vanished between the lookup and the reference
            // registration; the product document now exists unreferenced.
            warn!(product = %id.to_hex(), "cart gone after product write, product left unreferenced");
            return Err(CartsServiceError::NotFound);
        }

        Ok(id.to_hex())
    }

    async fn delete_product(
        &self,
        product_id: &str,
        user_id: &str,
    ) -> Result<(), CartsServiceError> {
        let id = ProductId::parse_hex(product_id)?;
        let cart = self.cart_for_user(user_id).await?;

        // Product document first; the reference is only pulled once the
        // delete succeeded, so a failed delete never leaves the cart
        // pointing at nothing.
        if self.products.delete(id).await? == 0 {
            return Err(CartsServiceError::NotFound);
        }

        self.carts
            .remove_product_ref(CartId::from_oid(cart.id), id)
            .await?;

        Ok(())
    }
}

/// The business boundary consumed by the transport layer. Identifiers cross
/// it exclusively in their external hexadecimal form.
#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Retrieve the user's cart with its product list populated, in
    /// reference order, omitting references that no longer resolve.
    async fn get_cart(&self, user_id: &str) -> Result<Cart, CartsServiceError>;

    /// Create the user's cart, or upsert when an explicit identifier is
    /// supplied. Returns the external identifier.
    async fn post_cart(&self, cart: NewCart) -> Result<String, CartsServiceError>;

    /// Delete the user's cart together with every referenced product.
    async fn delete_cart(&self, user_id: &str) -> Result<(), CartsServiceError>;

    /// Add a product to the user's cart. Re-adding a referenced product
    /// merges: quantity is added, unit price is replaced. Returns the
    /// product's external identifier.
    async fn post_product(
        &self,
        product: NewProduct,
        user_id: &str,
    ) -> Result<String, CartsServiceError>;

    /// Delete a product and pull its reference from the user's cart.
    async fn delete_product(
        &self,
        product_id: &str,
        user_id: &str,
    ) -> Result<(), CartsServiceError>;
}
