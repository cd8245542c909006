//! Cart Records
//!
//! Storage projections. A cart document stores only product identifier
//! references; product data lives in its own collection.

use std::num::TryFromIntError;

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::{
    domain::carts::models::{Cart, Product},
    ids::TypedOid,
};

/// Cart identifier
pub type CartId = TypedOid<CartDocument>;

/// Product identifier
pub type ProductId = TypedOid<ProductDocument>;

/// Cart Document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(rename = "userID")]
    pub user_id: String,
    #[serde(rename = "products", default)]
    pub product_ids: Vec<ObjectId>,
}

/// Product Document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// BSON has no unsigned integer; negative stored values are rejected
    /// when converting back to the model.
    pub quantity: i64,
    #[serde(rename = "unitPrice")]
    pub unit_price: f64,
}

impl CartDocument {
    /// Project into the wire model with an already-populated product list.
    #[must_use]
    pub fn into_model(self, products: Vec<Product>) -> Cart {
        Cart {
            id: self.id.to_hex(),
            user_id: self.user_id,
            products,
        }
    }
}

impl ProductDocument {
    /// Project into the wire model, translating the identifier to its
    /// external form.
    ///
    /// # Errors
    ///
    /// Fails when the stored quantity is negative.
    pub fn into_model(self) -> Result<Product, TryFromIntError> {
        Ok(Product {
            id: self.id.to_hex(),
            quantity: u64::try_from(self.quantity)?,
            unit_price: self.unit_price,
        })
    }
}

#[cfg(test)]
mod tests {
    use mongodb::bson;

    use super::*;

    #[test]
    fn cart_document_uses_storage_field_names() {
        let document = CartDocument {
            id: ObjectId::new(),
            user_id: "u1".to_string(),
            product_ids: vec![ObjectId::new()],
        };

        let bson_doc = bson::to_document(&document).expect("cart document should encode");

        assert!(bson_doc.contains_key("_id"));
        assert!(bson_doc.contains_key("userID"));
        assert!(bson_doc.contains_key("products"));
    }

    #[test]
    fn product_document_uses_storage_field_names() {
        let document = ProductDocument {
            id: ObjectId::new(),
            quantity: 4,
            unit_price: 1.25,
        };

        let bson_doc = bson::to_document(&document).expect("product document should encode");

        assert!(bson_doc.contains_key("_id"));
        assert!(bson_doc.contains_key("quantity"));
        assert!(bson_doc.contains_key("unitPrice"));
    }

    #[test]
    fn cart_document_decodes_missing_reference_list_as_empty() {
        let id = ObjectId::new();
        let document: CartDocument =
            bson::from_document(bson::doc! { "_id": id, "userID": "u1" })
                .expect("legacy cart without a products array should decode");

        assert!(document.product_ids.is_empty());
    }

    #[test]
    fn product_document_projects_to_external_identifier() {
        let id = ObjectId::new();
        let product = ProductDocument {
            id,
            quantity: 2,
            unit_price: 9.99,
        }
        .into_model()
        .expect("non-negative quantity should convert");

        assert_eq!(product.id, id.to_hex());
        assert_eq!(product.quantity, 2);
    }

    #[test]
    fn negative_stored_quantity_is_rejected() {
        let result = ProductDocument {
            id: ObjectId::new(),
            quantity: -1,
            unit_price: 0.0,
        }
        .into_model();

        assert!(result.is_err());
    }
}
