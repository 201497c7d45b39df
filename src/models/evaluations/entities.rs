use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::course_assignments::entities::CourseAssignment;
use crate::models::evaluation_answers::entities::EvaluationAnswer;
use crate::models::students::entities::Student;

// 一次评价（学生对某门授课安排）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct Evaluation {
    pub id: i64,
    pub student_id: i64,
    pub assignment_id: i64,
    pub eval_date: chrono::DateTime<chrono::Utc>,
    pub suggestion: Option<String>,
}

// 带关联数据的评价
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct EvaluationDetail {
    #[serde(flatten)]
    #[ts(flatten)]
    pub evaluation: Evaluation,
    pub student: Option<Student>,
    pub assignment: Option<CourseAssignment>,
    pub answers: Vec<EvaluationAnswer>,
    /// 各项得分均值，保留两位小数
    pub average: f64,
}

/// 四舍五入到两位小数
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// 一次评价的平均分，没有答案时为 0
pub fn evaluation_average(answers: &[EvaluationAnswer]) -> f64 {
    if answers.is_empty() {
        return 0.0;
    }
    let sum: i64 = answers.iter().map(|a| i64::from(a.score)).sum();
    round2(sum as f64 / answers.len() as f64)
}

impl EvaluationDetail {
    pub fn new(
        evaluation: Evaluation,
        student: Option<Student>,
        assignment: Option<CourseAssignment>,
        answers: Vec<EvaluationAnswer>,
    ) -> Self {
        let average = evaluation_average(&answers);
        Self {
            evaluation,
            student,
            assignment,
            answers,
            average,
        }
    }

    pub fn teacher_id(&self) -> Option<i64> {
        self.assignment.as_ref().map(|a| a.teacher_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(question_id: i64, score: i32) -> EvaluationAnswer {
        EvaluationAnswer {
            id: question_id,
            eval_id: 1,
            question_id,
            score,
            question: None,
        }
    }

    #[test]
    fn test_evaluation_average_rounds_to_two_places() {
        let answers = vec![answer(1, 5), answer(2, 4), answer(3, 4)];
        assert_eq!(evaluation_average(&answers), 4.33);
        assert_eq!(evaluation_average(&[answer(1, 2), answer(2, 3)]), 2.5);
    }

    #[test]
    fn test_evaluation_average_without_answers_is_zero() {
        assert_eq!(evaluation_average(&[]), 0.0);
    }

    #[test]
    fn test_round2_half_up() {
        assert_eq!(round2(4.666), 4.67);
        assert_eq!(round2(3.125), 3.13);
    }
}
