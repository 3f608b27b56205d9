pub mod executor;

pub use executor::CollectionQuery;
