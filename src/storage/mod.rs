use std::sync::Arc;

use crate::models::{
    PaginatedResponse,
    classrooms::{
        entities::Classroom,
        requests::{ClassroomListQuery, CreateClassroomRequest, UpdateClassroomRequest},
    },
    course_assignments::{
        entities::CourseAssignment,
        requests::{
            CourseAssignmentListQuery, CreateCourseAssignmentRequest,
            UpdateCourseAssignmentRequest,
        },
    },
    dashboard::responses::DashboardTotals,
    departments::{
        entities::Department,
        requests::{CreateDepartmentRequest, DepartmentListQuery, UpdateDepartmentRequest},
    },
    evaluation_answers::{
        entities::EvaluationAnswer, requests::CreateEvaluationAnswerRequest,
    },
    evaluation_questions::{
        entities::EvaluationQuestion,
        requests::{
            CreateEvaluationQuestionRequest, EvaluationQuestionListQuery,
            UpdateEvaluationQuestionRequest,
        },
    },
    evaluations::{
        entities::{Evaluation, EvaluationDetail},
        requests::{CreateEvaluationRequest, EvaluationListQuery, SubmitEvaluationRequest},
    },
    levels::{
        entities::Level,
        requests::{CreateLevelRequest, LevelListQuery, UpdateLevelRequest},
    },
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
    },
    subjects::{
        entities::Subject,
        requests::{CreateSubjectRequest, SubjectListQuery, UpdateSubjectRequest},
    },
    teachers::{
        entities::Teacher,
        requests::{CreateTeacherRequest, TeacherListQuery, UpdateTeacherRequest},
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 账号管理方法
    // 创建账号（password 字段为哈希值）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取账号
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取账号
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 列出账号
    async fn list_users_with_pagination(
        &self,
        query: UserListQuery,
    ) -> Result<PaginatedResponse<User>>;
    // 更新账号（password 字段为哈希值）
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除账号
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 更新最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 统计账号数量
    async fn count_users(&self) -> Result<u64>;

    /// 部门管理方法
    async fn create_department(&self, req: CreateDepartmentRequest) -> Result<Department>;
    async fn get_department_by_id(&self, id: i64) -> Result<Option<Department>>;
    async fn get_department_by_name(&self, name: &str) -> Result<Option<Department>>;
    async fn list_departments_with_pagination(
        &self,
        query: DepartmentListQuery,
    ) -> Result<PaginatedResponse<Department>>;
    async fn update_department(
        &self,
        id: i64,
        update: UpdateDepartmentRequest,
    ) -> Result<Option<Department>>;
    async fn delete_department(&self, id: i64) -> Result<bool>;

    /// 年级管理方法
    async fn create_level(&self, req: CreateLevelRequest) -> Result<Level>;
    async fn get_level_by_id(&self, id: i64) -> Result<Option<Level>>;
    async fn get_level_by_name(&self, name: &str) -> Result<Option<Level>>;
    async fn list_levels_with_pagination(
        &self,
        query: LevelListQuery,
    ) -> Result<PaginatedResponse<Level>>;
    async fn update_level(&self, id: i64, update: UpdateLevelRequest) -> Result<Option<Level>>;
    async fn delete_level(&self, id: i64) -> Result<bool>;

    /// 教室管理方法
    async fn create_classroom(&self, req: CreateClassroomRequest) -> Result<Classroom>;
    async fn get_classroom_by_id(&self, id: i64) -> Result<Option<Classroom>>;
    async fn get_classroom_by_name(&self, name: &str) -> Result<Option<Classroom>>;
    async fn list_classrooms_with_pagination(
        &self,
        query: ClassroomListQuery,
    ) -> Result<PaginatedResponse<Classroom>>;
    async fn update_classroom(
        &self,
        id: i64,
        update: UpdateClassroomRequest,
    ) -> Result<Option<Classroom>>;
    async fn delete_classroom(&self, id: i64) -> Result<bool>;

    /// 学生管理方法
    async fn create_student(&self, req: CreateStudentRequest) -> Result<Student>;
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    async fn get_student_by_code(&self, code: &str) -> Result<Option<Student>>;
    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<PaginatedResponse<Student>>;
    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>>;
    async fn delete_student(&self, id: i64) -> Result<bool>;

    /// 教师管理方法
    async fn create_teacher(&self, req: CreateTeacherRequest) -> Result<Teacher>;
    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>>;
    async fn get_teacher_by_name(&self, first_name: &str, last_name: &str)
    -> Result<Option<Teacher>>;
    async fn list_teachers_with_pagination(
        &self,
        query: TeacherListQuery,
    ) -> Result<PaginatedResponse<Teacher>>;
    async fn update_teacher(
        &self,
        id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>>;
    async fn delete_teacher(&self, id: i64) -> Result<bool>;

    /// 科目管理方法
    async fn create_subject(&self, req: CreateSubjectRequest) -> Result<Subject>;
    async fn get_subject_by_id(&self, id: i64) -> Result<Option<Subject>>;
    async fn get_subject_by_code(&self, code: &str) -> Result<Option<Subject>>;
    async fn list_subjects_with_pagination(
        &self,
        query: SubjectListQuery,
    ) -> Result<PaginatedResponse<Subject>>;
    async fn update_subject(
        &self,
        id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>>;
    async fn delete_subject(&self, id: i64) -> Result<bool>;

    /// 授课安排管理方法
    async fn create_course_assignment(
        &self,
        req: CreateCourseAssignmentRequest,
    ) -> Result<CourseAssignment>;
    async fn get_course_assignment_by_id(&self, id: i64) -> Result<Option<CourseAssignment>>;
    // 按 (教师, 科目, 教室, 学期) 查找
    async fn find_course_assignment(
        &self,
        teacher_id: i64,
        subject_id: i64,
        classroom_id: i64,
        term: &str,
    ) -> Result<Option<CourseAssignment>>;
    async fn list_course_assignments_with_pagination(
        &self,
        query: CourseAssignmentListQuery,
    ) -> Result<PaginatedResponse<CourseAssignment>>;
    // 某教室的全部授课安排
    async fn list_course_assignments_by_classroom(
        &self,
        classroom_id: i64,
    ) -> Result<Vec<CourseAssignment>>;
    async fn update_course_assignment(
        &self,
        id: i64,
        update: UpdateCourseAssignmentRequest,
    ) -> Result<Option<CourseAssignment>>;
    async fn delete_course_assignment(&self, id: i64) -> Result<bool>;

    /// 评价题目管理方法
    async fn create_question(&self, req: CreateEvaluationQuestionRequest)
    -> Result<EvaluationQuestion>;
    async fn get_question_by_id(&self, id: i64) -> Result<Option<EvaluationQuestion>>;
    async fn list_questions_with_pagination(
        &self,
        query: EvaluationQuestionListQuery,
    ) -> Result<PaginatedResponse<EvaluationQuestion>>;
    // 全部题目，按 ID 排序
    async fn list_all_questions(&self) -> Result<Vec<EvaluationQuestion>>;
    async fn update_question(
        &self,
        id: i64,
        update: UpdateEvaluationQuestionRequest,
    ) -> Result<Option<EvaluationQuestion>>;
    async fn delete_question(&self, id: i64) -> Result<bool>;
    async fn count_questions(&self) -> Result<u64>;

    /// 评价管理方法
    async fn create_evaluation(&self, req: CreateEvaluationRequest) -> Result<Evaluation>;
    async fn get_evaluation_by_id(&self, id: i64) -> Result<Option<Evaluation>>;
    async fn get_evaluation_detail(&self, id: i64) -> Result<Option<EvaluationDetail>>;
    async fn list_evaluations_with_pagination(
        &self,
        query: EvaluationListQuery,
    ) -> Result<PaginatedResponse<EvaluationDetail>>;
    // 不分页，供汇总与导出使用
    async fn list_evaluation_details(
        &self,
        query: EvaluationListQuery,
    ) -> Result<Vec<EvaluationDetail>>;
    // 最近的评价
    async fn list_recent_evaluations(&self, limit: u64) -> Result<Vec<EvaluationDetail>>;
    // 学生已评价的授课安排 ID
    async fn list_evaluated_assignment_ids(&self, student_id: i64) -> Result<Vec<i64>>;
    // 在一个事务中写入评价与全部答案
    async fn submit_evaluation(
        &self,
        student_id: i64,
        req: SubmitEvaluationRequest,
    ) -> Result<Evaluation>;
    async fn delete_evaluation(&self, id: i64) -> Result<bool>;

    /// 评价答案管理方法
    async fn create_answer(&self, req: CreateEvaluationAnswerRequest) -> Result<EvaluationAnswer>;
    async fn list_answers(&self, eval_id: Option<i64>) -> Result<Vec<EvaluationAnswer>>;
    async fn delete_answer(&self, id: i64) -> Result<bool>;

    /// 仪表盘
    async fn dashboard_totals(&self) -> Result<DashboardTotals>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
