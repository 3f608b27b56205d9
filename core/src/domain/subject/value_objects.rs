#[derive(Debug, Clone)]
pub struct CreateSubjectInput {
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct UpdateSubjectInput {
    pub id: i64,
    pub name: String,
}
