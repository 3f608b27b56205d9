pub mod health;
pub mod query_extractor;
pub mod query_params;
pub mod server;
pub mod subject;
pub mod teacher;
