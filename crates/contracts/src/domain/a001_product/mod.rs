pub mod aggregate;

pub use aggregate::{category_options, filter_products, Product, ProductListResponse, ProductRef, ALL_CATEGORIES, PRODUCTS_PATH};
