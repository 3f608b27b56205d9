pub mod mappers;
pub mod repositories;

pub use repositories::PostgresTeacherRepository;
