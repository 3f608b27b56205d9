use crate::domain::subject::entities::Subject;
use crate::entity::subjects::Model as SubjectModel;

impl From<SubjectModel> for Subject {
    fn from(model: SubjectModel) -> Self {
        Subject {
            id: model.id,
            name: model.name,
        }
    }
}
