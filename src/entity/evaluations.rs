//! 评价实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "evaluations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub assignment_id: i64,
    pub eval_date: i64,
    #[sea_orm(column_type = "Text", nullable)]
    pub suggestion: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id",
        on_delete = "Cascade"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::course_assignments::Entity",
        from = "Column::AssignmentId",
        to = "super::course_assignments::Column::Id",
        on_delete = "Cascade"
    )]
    CourseAssignment,
    #[sea_orm(has_many = "super::evaluation_answers::Entity")]
    EvaluationAnswers,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::course_assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseAssignment.def()
    }
}

impl Related<super::evaluation_answers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EvaluationAnswers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_evaluation(self) -> crate::models::evaluations::entities::Evaluation {
        use crate::models::evaluations::entities::Evaluation;

        Evaluation {
            id: self.id,
            student_id: self.student_id,
            assignment_id: self.assignment_id,
            eval_date: super::ts_to_datetime(self.eval_date),
            suggestion: self.suggestion,
        }
    }
}
