pub mod subjects;
pub mod teachers;
