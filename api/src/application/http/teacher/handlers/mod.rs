pub mod create_teacher;
pub mod delete_teacher;
pub mod get_teacher;
pub mod get_teachers;
pub mod update_teacher;
