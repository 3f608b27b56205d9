use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    subject::{
        entities::Subject,
        value_objects::{CreateSubjectInput, UpdateSubjectInput},
    },
};

pub trait SubjectService: Send + Sync {
    fn list_subjects(&self) -> impl Future<Output = Result<Vec<Subject>, CoreError>> + Send;

    fn get_subject(&self, id: i64) -> impl Future<Output = Result<Subject, CoreError>> + Send;

    fn create_subject(
        &self,
        input: CreateSubjectInput,
    ) -> impl Future<Output = Result<Subject, CoreError>> + Send;

    fn update_subject(
        &self,
        input: UpdateSubjectInput,
    ) -> impl Future<Output = Result<Subject, CoreError>> + Send;

    fn delete_subject(&self, id: i64) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait SubjectRepository: Send + Sync {
    /// All subjects ordered by name.
    fn list(&self) -> impl Future<Output = Result<Vec<Subject>, CoreError>> + Send;

    fn get_by_id(&self, id: i64)
    -> impl Future<Output = Result<Option<Subject>, CoreError>> + Send;

    fn exists(&self, id: i64) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn create(&self, name: String) -> impl Future<Output = Result<Subject, CoreError>> + Send;

    fn update(
        &self,
        id: i64,
        name: String,
    ) -> impl Future<Output = Result<Option<Subject>, CoreError>> + Send;

    fn delete(&self, id: i64) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
