pub mod create_subject;
pub mod delete_subject;
pub mod get_subject;
pub mod get_subjects;
pub mod update_subject;
