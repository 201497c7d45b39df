//! 评价问题实体

use sea_orm::entity::prelude::*;

use crate::models::evaluation_questions::entities::EvaluationQuestion;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "evaluation_questions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_type = "Text")]
    pub question_text: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::evaluation_answers::Entity")]
    EvaluationAnswers,
}

impl Related<super::evaluation_answers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EvaluationAnswers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_question(self) -> EvaluationQuestion {
        EvaluationQuestion {
            id: self.id,
            question_text: self.question_text,
            created_at: super::ts_to_datetime(self.created_at),
            updated_at: super::ts_to_datetime(self.updated_at),
        }
    }
}
