//! Cart Repositories

mod carts;
mod products;

pub(crate) use carts::MongoCartsRepository;
pub(crate) use products::MongoProductsRepository;
