use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    listing::{CollectionResult, ListParams},
    teacher::{
        entities::Teacher,
        value_objects::{CreateTeacherInput, NewTeacher, TeacherListQuery, TeacherPatch},
    },
};

pub trait TeacherService: Send + Sync {
    fn list_teachers(
        &self,
        params: ListParams,
    ) -> impl Future<Output = Result<CollectionResult<Teacher>, CoreError>> + Send;

    fn get_teacher(&self, id: i64) -> impl Future<Output = Result<Teacher, CoreError>> + Send;

    fn create_teacher(
        &self,
        input: CreateTeacherInput,
    ) -> impl Future<Output = Result<Teacher, CoreError>> + Send;

    fn update_teacher(
        &self,
        id: i64,
        patch: TeacherPatch,
    ) -> impl Future<Output = Result<Teacher, CoreError>> + Send;

    fn delete_teacher(&self, id: i64) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait TeacherRepository: Send + Sync {
    fn list(
        &self,
        query: TeacherListQuery,
    ) -> impl Future<Output = Result<CollectionResult<Teacher>, CoreError>> + Send;

    fn get_by_id(&self, id: i64)
    -> impl Future<Output = Result<Option<Teacher>, CoreError>> + Send;

    fn create(
        &self,
        teacher: NewTeacher,
    ) -> impl Future<Output = Result<Teacher, CoreError>> + Send;

    /// Writes only the columns present in `patch`; `None` when `id` does not exist.
    fn update(
        &self,
        id: i64,
        patch: TeacherPatch,
    ) -> impl Future<Output = Result<Option<Teacher>, CoreError>> + Send;

    /// Returns whether a row was deleted.
    fn delete(&self, id: i64) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
