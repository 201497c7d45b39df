//! 预导入模块，方便使用

pub use super::classrooms::{
    ActiveModel as ClassroomActiveModel, Entity as Classrooms, Model as ClassroomModel,
};
pub use super::course_assignments::{
    ActiveModel as CourseAssignmentActiveModel, Entity as CourseAssignments,
    Model as CourseAssignmentModel,
};
pub use super::departments::{
    ActiveModel as DepartmentActiveModel, Entity as Departments, Model as DepartmentModel,
};
pub use super::evaluation_answers::{
    ActiveModel as EvaluationAnswerActiveModel, Entity as EvaluationAnswers,
    Model as EvaluationAnswerModel,
};
pub use super::evaluation_questions::{
    ActiveModel as EvaluationQuestionActiveModel, Entity as EvaluationQuestions,
    Model as EvaluationQuestionModel,
};
pub use super::evaluations::{
    ActiveModel as EvaluationActiveModel, Entity as Evaluations, Model as EvaluationModel,
};
pub use super::levels::{ActiveModel as LevelActiveModel, Entity as Levels, Model as LevelModel};
pub use super::students::{
    ActiveModel as StudentActiveModel, Entity as Students, Model as StudentModel,
};
pub use super::subjects::{
    ActiveModel as SubjectActiveModel, Entity as Subjects, Model as SubjectModel,
};
pub use super::teachers::{
    ActiveModel as TeacherActiveModel, Entity as Teachers, Model as TeacherModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
