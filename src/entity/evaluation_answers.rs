//! 评价答案实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "evaluation_answers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub eval_id: i64,
    pub question_id: i64,
    pub score: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::evaluations::Entity",
        from = "Column::EvalId",
        to = "super::evaluations::Column::Id",
        on_delete = "Cascade"
    )]
    Evaluation,
    #[sea_orm(
        belongs_to = "super::evaluation_questions::Entity",
        from = "Column::QuestionId",
        to = "super::evaluation_questions::Column::Id",
        on_delete = "Cascade"
    )]
    Question,
}

impl Related<super::evaluations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Evaluation.def()
    }
}

impl Related<super::evaluation_questions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Question.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_answer(
        self,
        question: Option<crate::models::evaluation_questions::entities::EvaluationQuestion>,
    ) -> crate::models::evaluation_answers::entities::EvaluationAnswer {
        use crate::models::evaluation_answers::entities::EvaluationAnswer;

        EvaluationAnswer {
            id: self.id,
            eval_id: self.eval_id,
            question_id: self.question_id,
            score: self.score,
            question,
        }
    }
}
