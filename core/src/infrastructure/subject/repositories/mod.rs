pub mod subject_repository;

pub use subject_repository::PostgresSubjectRepository;
