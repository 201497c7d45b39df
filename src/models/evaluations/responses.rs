use serde::Serialize;
use ts_rs::TS;

use crate::models::course_assignments::entities::CourseAssignment;
use crate::models::evaluation_questions::entities::EvaluationQuestion;
use crate::models::teachers::entities::Teacher;

// 得分等级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub enum ScoreBand {
    Excellent,
    Good,
    NeedsImprovement,
}

impl ScoreBand {
    pub fn from_average(avg: f64) -> Self {
        if avg >= 4.5 {
            ScoreBand::Excellent
        } else if avg >= 3.5 {
            ScoreBand::Good
        } else {
            ScoreBand::NeedsImprovement
        }
    }
}

// 单项评分汇总
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct CriterionAverage {
    pub question_id: i64,
    pub text: String,
    pub avg: f64,
    pub band: ScoreBand,
}

// 按授课安排汇总
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct AssignmentSummary {
    pub assignment_id: i64,
    pub assignment: Option<CourseAssignment>,
    pub count: usize,
    pub final_avg: f64,
    pub band: ScoreBand,
    pub criteria: Vec<CriterionAverage>,
}

// 按教师汇总
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct TeacherSummary {
    pub teacher_id: i64,
    pub teacher: Option<Teacher>,
    pub eval_count: usize,
    pub final_avg: f64,
    pub band: ScoreBand,
    pub assignment_count: usize,
    pub classroom_count: usize,
    pub student_count: usize,
}

// 教师详情：其各门授课安排的汇总
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct TeacherDetailSummary {
    pub teacher: Teacher,
    pub eval_count: usize,
    pub final_avg: f64,
    pub band: ScoreBand,
    pub assignments: Vec<AssignmentSummary>,
}

// 学生待评价的一门课
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct PendingAssignment {
    pub assignment: CourseAssignment,
    pub evaluated: bool,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct PendingEvaluationsResponse {
    pub assignments: Vec<PendingAssignment>,
    pub questions: Vec<EvaluationQuestion>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_thresholds() {
        assert_eq!(ScoreBand::from_average(5.0), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_average(4.5), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_average(4.49), ScoreBand::Good);
        assert_eq!(ScoreBand::from_average(3.5), ScoreBand::Good);
        assert_eq!(ScoreBand::from_average(3.49), ScoreBand::NeedsImprovement);
        assert_eq!(ScoreBand::from_average(0.0), ScoreBand::NeedsImprovement);
    }

    #[test]
    fn test_band_serializes_snake_case() {
        assert_eq!(
            serde_json::to_value(ScoreBand::NeedsImprovement).unwrap(),
            "needs_improvement"
        );
    }
}
