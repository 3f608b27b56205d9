use crate::domain::listing::{ListQuery, sort::SortKey};

pub const DEFAULT_TITLE: &str = "Graduate";
pub const DEFAULT_WEEKLY_HOURS: i32 = 20;

/// Columns a teacher listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeacherSortKey {
    Id,
    Name,
    Email,
    Subject,
    Title,
    WeeklyHours,
}

impl SortKey for TeacherSortKey {
    const ALL: &'static [Self] = &[
        TeacherSortKey::Id,
        TeacherSortKey::Name,
        TeacherSortKey::Email,
        TeacherSortKey::Subject,
        TeacherSortKey::Title,
        TeacherSortKey::WeeklyHours,
    ];
    const DEFAULT: Self = TeacherSortKey::Id;

    fn key(self) -> &'static str {
        match self {
            TeacherSortKey::Id => "id",
            TeacherSortKey::Name => "name",
            TeacherSortKey::Email => "email",
            TeacherSortKey::Subject => "subject",
            TeacherSortKey::Title => "title",
            TeacherSortKey::WeeklyHours => "weeklyHours",
        }
    }

    fn expression(self) -> &'static str {
        match self {
            TeacherSortKey::Id => "t.id",
            TeacherSortKey::Name => "t.name",
            TeacherSortKey::Email => "t.email",
            TeacherSortKey::Subject => "s.name",
            TeacherSortKey::Title => "t.title",
            TeacherSortKey::WeeklyHours => "t.weekly_hours",
        }
    }
}

pub type TeacherListQuery = ListQuery<TeacherSortKey>;

/// Payload accepted by the create use case, before defaults are applied.
#[derive(Debug, Clone, Default)]
pub struct CreateTeacherInput {
    pub name: String,
    pub email: String,
    pub subject_id: Option<i64>,
    pub title: Option<String>,
    pub phone: Option<String>,
    pub weekly_hours: Option<i32>,
}

/// A validated teacher ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTeacher {
    pub name: String,
    pub email: String,
    pub subject_id: i64,
    pub title: String,
    pub phone: Option<String>,
    pub weekly_hours: i32,
}

/// Partial update. `None` leaves a column untouched; for nullable columns
/// `Some(None)` clears the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeacherPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject_id: Option<Option<i64>>,
    pub title: Option<String>,
    pub phone: Option<Option<String>>,
    pub weekly_hours: Option<i32>,
}

impl TeacherPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.subject_id.is_none()
            && self.title.is_none()
            && self.phone.is_none()
            && self.weekly_hours.is_none()
    }
}
