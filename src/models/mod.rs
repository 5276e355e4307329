//! Fortnox API model types.

mod article;
mod customer;
mod invoice;

pub use article::*;
pub use customer::*;
pub use invoice::*;
