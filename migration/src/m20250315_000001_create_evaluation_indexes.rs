use sea_orm_migration::prelude::*;

use crate::m20250301_000001_create_tables::{
    Classrooms, CourseAssignments, EvaluationAnswers, Evaluations, Levels, Students, Users,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 一个学生对一门授课安排只能评价一次
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_evaluations_student_assignment")
                    .table(Evaluations::Table)
                    .col(Evaluations::StudentId)
                    .col(Evaluations::AssignmentId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_evaluation_answers_eval_question")
                    .table(EvaluationAnswers::Table)
                    .col(EvaluationAnswers::EvalId)
                    .col(EvaluationAnswers::QuestionId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_course_assignments_tuple")
                    .table(CourseAssignments::Table)
                    .col(CourseAssignments::TeacherId)
                    .col(CourseAssignments::SubjectId)
                    .col(CourseAssignments::ClassroomId)
                    .col(CourseAssignments::Term)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 常用过滤列
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_evaluations_assignment_id")
                    .table(Evaluations::Table)
                    .col(Evaluations::AssignmentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_evaluations_eval_date")
                    .table(Evaluations::Table)
                    .col(Evaluations::EvalDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_course_assignments_classroom_id")
                    .table(CourseAssignments::Table)
                    .col(CourseAssignments::ClassroomId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_students_classroom_id")
                    .table(Students::Table)
                    .col(Students::ClassroomId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_classrooms_level_id")
                    .table(Classrooms::Table)
                    .col(Classrooms::LevelId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_levels_department_id")
                    .table(Levels::Table)
                    .col(Levels::DepartmentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_users_role")
                    .table(Users::Table)
                    .col(Users::Role)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_users_role")
                    .table(Users::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_levels_department_id")
                    .table(Levels::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_classrooms_level_id")
                    .table(Classrooms::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_students_classroom_id")
                    .table(Students::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_course_assignments_classroom_id")
                    .table(CourseAssignments::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_evaluations_eval_date")
                    .table(Evaluations::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_evaluations_assignment_id")
                    .table(Evaluations::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("uq_course_assignments_tuple")
                    .table(CourseAssignments::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("uq_evaluation_answers_eval_question")
                    .table(EvaluationAnswers::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("uq_evaluations_student_assignment")
                    .table(Evaluations::Table)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}
