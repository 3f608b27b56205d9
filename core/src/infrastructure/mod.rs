pub mod db;
pub mod health;
pub mod listing;
pub mod subject;
pub mod teacher;
