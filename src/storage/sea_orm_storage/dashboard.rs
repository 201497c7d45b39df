use super::SeaOrmStorage;
use crate::entity::prelude::{CourseAssignments, Evaluations, Students, Teachers};
use crate::errors::{EvalSystemError, Result};
use crate::models::dashboard::responses::DashboardTotals;
use sea_orm::{EntityTrait, PaginatorTrait};

impl SeaOrmStorage {
    pub async fn dashboard_totals_impl(&self) -> Result<DashboardTotals> {
        let students = Students::find()
            .count(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("统计学生失败: {e}")))?;
        let teachers = Teachers::find()
            .count(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("统计教师失败: {e}")))?;
        let assignments = CourseAssignments::find()
            .count(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("统计授课安排失败: {e}")))?;
        let evaluations = Evaluations::find()
            .count(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("统计评价失败: {e}")))?;

        Ok(DashboardTotals {
            students,
            teachers,
            assignments,
            evaluations,
        })
    }
}
