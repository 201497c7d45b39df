//! 评价汇总计算
//!
//! 分组保持评价列表中的首次出现顺序。所有均值保留两位小数，
//! 分组均值取各次评价均值（已取整）的平均。

use std::collections::{HashMap, HashSet};

use crate::models::evaluations::entities::{EvaluationDetail, round2};
use crate::models::evaluations::responses::{
    AssignmentSummary, CriterionAverage, ScoreBand, TeacherDetailSummary, TeacherSummary,
};
use crate::models::teachers::entities::Teacher;

/// 按 key 分组，组顺序为首次出现顺序
fn group_in_order<'a, K, I, F>(details: I, key: F) -> Vec<(K, Vec<&'a EvaluationDetail>)>
where
    K: std::hash::Hash + Eq + Copy,
    I: IntoIterator<Item = &'a EvaluationDetail>,
    F: Fn(&EvaluationDetail) -> Option<K>,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<&'a EvaluationDetail>)> = Vec::new();

    for detail in details {
        let Some(k) = key(detail) else {
            continue;
        };
        match index.get(&k) {
            Some(&i) => groups[i].1.push(detail),
            None => {
                index.insert(k, groups.len());
                groups.push((k, vec![detail]));
            }
        }
    }
    groups
}

/// 各次评价均值的平均
fn mean_of_averages(details: &[&EvaluationDetail]) -> f64 {
    if details.is_empty() {
        return 0.0;
    }
    let total: f64 = details.iter().map(|d| d.average).sum();
    round2(total / details.len() as f64)
}

/// 题目已被删除时的显示名
fn criterion_fallback(question_id: i64) -> String {
    format!("หัวข้อที่ {question_id}")
}

/// 单项均值，取原始得分平均
pub fn criteria_averages(details: &[&EvaluationDetail]) -> Vec<CriterionAverage> {
    struct Acc {
        question_id: i64,
        text: String,
        total: i64,
        count: i64,
    }

    let mut index: HashMap<i64, usize> = HashMap::new();
    let mut items: Vec<Acc> = Vec::new();

    for answer in details.iter().flat_map(|d| d.answers.iter()) {
        let slot = *index.entry(answer.question_id).or_insert_with(|| {
            items.push(Acc {
                question_id: answer.question_id,
                text: answer
                    .question
                    .as_ref()
                    .map(|q| q.question_text.clone())
                    .unwrap_or_else(|| criterion_fallback(answer.question_id)),
                total: 0,
                count: 0,
            });
            items.len() - 1
        });
        items[slot].total += i64::from(answer.score);
        items[slot].count += 1;
    }

    items
        .into_iter()
        .map(|acc| {
            let avg = round2(acc.total as f64 / acc.count as f64);
            CriterionAverage {
                question_id: acc.question_id,
                text: acc.text,
                avg,
                band: ScoreBand::from_average(avg),
            }
        })
        .collect()
}

fn assignment_summary(assignment_id: i64, group: &[&EvaluationDetail]) -> AssignmentSummary {
    let final_avg = mean_of_averages(group);
    AssignmentSummary {
        assignment_id,
        assignment: group.first().and_then(|d| d.assignment.clone()),
        count: group.len(),
        final_avg,
        band: ScoreBand::from_average(final_avg),
        criteria: criteria_averages(group),
    }
}

/// 按授课安排汇总
pub fn summarize_by_assignment(details: &[EvaluationDetail]) -> Vec<AssignmentSummary> {
    group_in_order(details, |d| Some(d.evaluation.assignment_id))
        .into_iter()
        .map(|(assignment_id, group)| assignment_summary(assignment_id, &group))
        .collect()
}

/// 按教师汇总，无教师信息的评价不计入
pub fn summarize_by_teacher(details: &[EvaluationDetail]) -> Vec<TeacherSummary> {
    group_in_order(details, EvaluationDetail::teacher_id)
        .into_iter()
        .map(|(teacher_id, group)| {
            let final_avg = mean_of_averages(&group);
            let assignments: HashSet<i64> =
                group.iter().map(|d| d.evaluation.assignment_id).collect();
            let classrooms: HashSet<i64> = group
                .iter()
                .filter_map(|d| d.assignment.as_ref().map(|a| a.classroom_id))
                .collect();
            let students: HashSet<i64> = group.iter().map(|d| d.evaluation.student_id).collect();

            TeacherSummary {
                teacher_id,
                teacher: group
                    .iter()
                    .find_map(|d| d.assignment.as_ref().and_then(|a| a.teacher.clone())),
                eval_count: group.len(),
                final_avg,
                band: ScoreBand::from_average(final_avg),
                assignment_count: assignments.len(),
                classroom_count: classrooms.len(),
                student_count: students.len(),
            }
        })
        .collect()
}

/// 教师详情：只统计属于该教师的评价
pub fn teacher_detail(teacher: Teacher, details: &[EvaluationDetail]) -> TeacherDetailSummary {
    let own: Vec<&EvaluationDetail> = details
        .iter()
        .filter(|d| d.teacher_id() == Some(teacher.id))
        .collect();
    let final_avg = mean_of_averages(&own);

    let groups = group_in_order(own.iter().copied(), |d| Some(d.evaluation.assignment_id));

    TeacherDetailSummary {
        eval_count: own.len(),
        final_avg,
        band: ScoreBand::from_average(final_avg),
        assignments: groups
            .iter()
            .map(|(id, group)| assignment_summary(*id, group))
            .collect(),
        teacher,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::course_assignments::entities::CourseAssignment;
    use crate::models::evaluation_answers::entities::EvaluationAnswer;
    use crate::models::evaluation_questions::entities::EvaluationQuestion;
    use crate::models::evaluations::entities::Evaluation;

    fn teacher(id: i64) -> Teacher {
        Teacher {
            id,
            first_name: format!("T{id}"),
            last_name: "Teacher".to_string(),
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    fn assignment(id: i64, teacher_id: i64, classroom_id: i64) -> CourseAssignment {
        CourseAssignment {
            id,
            teacher_id,
            subject_id: 1,
            classroom_id,
            term: "1/2567".to_string(),
            teacher: Some(teacher(teacher_id)),
            subject: None,
            classroom: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    fn detail(
        id: i64,
        student_id: i64,
        assignment: Option<CourseAssignment>,
        scores: &[(i64, i32)],
    ) -> EvaluationDetail {
        let answers = scores
            .iter()
            .map(|&(question_id, score)| EvaluationAnswer {
                id: id * 100 + question_id,
                eval_id: id,
                question_id,
                score,
                question: (question_id != 99).then(|| EvaluationQuestion {
                    id: question_id,
                    question_text: format!("Q{question_id}"),
                    created_at: chrono::Utc::now(),
                    updated_at: chrono::Utc::now(),
                }),
            })
            .collect();
        EvaluationDetail::new(
            Evaluation {
                id,
                student_id,
                assignment_id: assignment.as_ref().map(|a| a.id).unwrap_or(0),
                eval_date: chrono::Utc::now(),
                suggestion: None,
            },
            None,
            assignment,
            answers,
        )
    }

    #[test]
    fn test_assignment_groups_average_of_rounded_averages() {
        let a1 = assignment(10, 1, 100);
        let details = vec![
            // 4.33
            detail(1, 1, Some(a1.clone()), &[(1, 5), (2, 4), (3, 4)]),
            // 3.33
            detail(2, 2, Some(a1.clone()), &[(1, 3), (2, 3), (3, 4)]),
        ];

        let summaries = summarize_by_assignment(&details);
        assert_eq!(summaries.len(), 1);
        let s = &summaries[0];
        assert_eq!(s.count, 2);
        assert_eq!(s.final_avg, 3.83);
        assert_eq!(s.band, ScoreBand::Good);
        // 单项取原始得分平均
        assert_eq!(s.criteria[0].avg, 4.0);
        assert_eq!(s.criteria[1].avg, 3.5);
        assert_eq!(s.criteria[2].avg, 4.0);
        assert_eq!(s.criteria[0].text, "Q1");
    }

    #[test]
    fn test_groups_keep_first_seen_order() {
        let details = vec![
            detail(1, 1, Some(assignment(20, 1, 100)), &[(1, 5)]),
            detail(2, 1, Some(assignment(10, 2, 100)), &[(1, 4)]),
            detail(3, 2, Some(assignment(20, 1, 100)), &[(1, 3)]),
        ];
        let ids: Vec<i64> = summarize_by_assignment(&details)
            .iter()
            .map(|s| s.assignment_id)
            .collect();
        assert_eq!(ids, vec![20, 10]);
    }

    #[test]
    fn test_missing_question_text_falls_back() {
        let details = vec![detail(1, 1, Some(assignment(10, 1, 100)), &[(99, 2)])];
        let criteria = criteria_averages(&details.iter().collect::<Vec<_>>());
        assert_eq!(criteria[0].text, "หัวข้อที่ 99");
        assert_eq!(criteria[0].band, ScoreBand::NeedsImprovement);
    }

    #[test]
    fn test_teacher_summary_counts_distinct_values() {
        let details = vec![
            detail(1, 1, Some(assignment(10, 7, 100)), &[(1, 5)]),
            detail(2, 2, Some(assignment(10, 7, 100)), &[(1, 4)]),
            detail(3, 1, Some(assignment(11, 7, 101)), &[(1, 5)]),
            // 没有授课安排信息的评价被忽略
            detail(4, 3, None, &[(1, 1)]),
        ];

        let summaries = summarize_by_teacher(&details);
        assert_eq!(summaries.len(), 1);
        let s = &summaries[0];
        assert_eq!(s.teacher_id, 7);
        assert_eq!(s.eval_count, 3);
        assert_eq!(s.assignment_count, 2);
        assert_eq!(s.classroom_count, 2);
        assert_eq!(s.student_count, 2);
        assert_eq!(s.final_avg, 4.67);
        assert_eq!(s.band, ScoreBand::Excellent);
        assert!(s.teacher.is_some());
    }

    #[test]
    fn test_teacher_detail_filters_other_teachers() {
        let details = vec![
            detail(1, 1, Some(assignment(10, 7, 100)), &[(1, 4), (2, 4)]),
            detail(2, 2, Some(assignment(12, 8, 100)), &[(1, 1)]),
            detail(3, 3, Some(assignment(11, 7, 101)), &[(1, 5), (2, 5)]),
        ];

        let summary = teacher_detail(teacher(7), &details);
        assert_eq!(summary.eval_count, 2);
        assert_eq!(summary.final_avg, 4.5);
        assert_eq!(summary.assignments.len(), 2);
        assert_eq!(summary.assignments[0].assignment_id, 10);
        assert_eq!(summary.assignments[1].final_avg, 5.0);
    }

    #[test]
    fn test_empty_input() {
        assert!(summarize_by_assignment(&[]).is_empty());
        assert!(summarize_by_teacher(&[]).is_empty());
        let summary = teacher_detail(teacher(1), &[]);
        assert_eq!(summary.final_avg, 0.0);
        assert_eq!(summary.band, ScoreBand::NeedsImprovement);
    }
}
