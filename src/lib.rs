//! MongoDB-backed shopping-cart backend.
//!
//! Carts and products are stored as separate documents; the service layer
//! keeps them referentially coherent without multi-document transactions,
//! merges duplicate product additions, and rebuilds the denormalized cart
//! view on read.

pub mod config;
pub mod database;
pub mod domain;
pub mod ids;

#[cfg(test)]
mod test;
