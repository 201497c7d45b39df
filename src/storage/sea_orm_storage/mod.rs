//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod classrooms;
mod course_assignments;
mod dashboard;
mod departments;
mod evaluation_answers;
mod evaluation_questions;
mod evaluations;
mod levels;
mod students;
mod subjects;
mod teachers;
mod users;

use crate::config::AppConfig;
use crate::errors::{EvalSystemError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::sea_query::{Expr, IntoCondition};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| EvalSystemError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| EvalSystemError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| EvalSystemError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(EvalSystemError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

/// 不区分大小写的包含匹配
///
/// `column` 为 `表.列`，`pattern` 由 `contains_pattern` 构造（已小写并转义）。
pub(super) fn like_ci(column: &str, pattern: &str) -> impl IntoCondition {
    Expr::cust_with_values(
        format!("LOWER({column}) LIKE ? ESCAPE '{}'", crate::utils::sql::LIKE_ESCAPE),
        [pattern.to_string()],
    )
}

/// 去重并排序的 ID 列表，用于批量加载关联数据
pub(super) fn unique_ids(ids: impl IntoIterator<Item = i64>) -> Vec<i64> {
    let mut ids: Vec<i64> = ids.into_iter().collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 账号模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn list_users_with_pagination(
        &self,
        query: UserListQuery,
    ) -> Result<PaginatedResponse<User>> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    // 部门模块
    async fn create_department(&self, req: CreateDepartmentRequest) -> Result<Department> {
        self.create_department_impl(req).await
    }

    async fn get_department_by_id(&self, id: i64) -> Result<Option<Department>> {
        self.get_department_by_id_impl(id).await
    }

    async fn get_department_by_name(&self, name: &str) -> Result<Option<Department>> {
        self.get_department_by_name_impl(name).await
    }

    async fn list_departments_with_pagination(
        &self,
        query: DepartmentListQuery,
    ) -> Result<PaginatedResponse<Department>> {
        self.list_departments_with_pagination_impl(query).await
    }

    async fn update_department(
        &self,
        id: i64,
        update: UpdateDepartmentRequest,
    ) -> Result<Option<Department>> {
        self.update_department_impl(id, update).await
    }

    async fn delete_department(&self, id: i64) -> Result<bool> {
        self.delete_department_impl(id).await
    }

    // 年级模块
    async fn create_level(&self, req: CreateLevelRequest) -> Result<Level> {
        self.create_level_impl(req).await
    }

    async fn get_level_by_id(&self, id: i64) -> Result<Option<Level>> {
        self.get_level_by_id_impl(id).await
    }

    async fn get_level_by_name(&self, name: &str) -> Result<Option<Level>> {
        self.get_level_by_name_impl(name).await
    }

    async fn list_levels_with_pagination(
        &self,
        query: LevelListQuery,
    ) -> Result<PaginatedResponse<Level>> {
        self.list_levels_with_pagination_impl(query).await
    }

    async fn update_level(&self, id: i64, update: UpdateLevelRequest) -> Result<Option<Level>> {
        self.update_level_impl(id, update).await
    }

    async fn delete_level(&self, id: i64) -> Result<bool> {
        self.delete_level_impl(id).await
    }

    // 教室模块
    async fn create_classroom(&self, req: CreateClassroomRequest) -> Result<Classroom> {
        self.create_classroom_impl(req).await
    }

    async fn get_classroom_by_id(&self, id: i64) -> Result<Option<Classroom>> {
        self.get_classroom_by_id_impl(id).await
    }

    async fn get_classroom_by_name(&self, name: &str) -> Result<Option<Classroom>> {
        self.get_classroom_by_name_impl(name).await
    }

    async fn list_classrooms_with_pagination(
        &self,
        query: ClassroomListQuery,
    ) -> Result<PaginatedResponse<Classroom>> {
        self.list_classrooms_with_pagination_impl(query).await
    }

    async fn update_classroom(
        &self,
        id: i64,
        update: UpdateClassroomRequest,
    ) -> Result<Option<Classroom>> {
        self.update_classroom_impl(id, update).await
    }

    async fn delete_classroom(&self, id: i64) -> Result<bool> {
        self.delete_classroom_impl(id).await
    }

    // 学生模块
    async fn create_student(&self, req: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(req).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn get_student_by_code(&self, code: &str) -> Result<Option<Student>> {
        self.get_student_by_code_impl(code).await
    }

    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<PaginatedResponse<Student>> {
        self.list_students_with_pagination_impl(query).await
    }

    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        self.update_student_impl(id, update).await
    }

    async fn delete_student(&self, id: i64) -> Result<bool> {
        self.delete_student_impl(id).await
    }

    // 教师模块
    async fn create_teacher(&self, req: CreateTeacherRequest) -> Result<Teacher> {
        self.create_teacher_impl(req).await
    }

    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>> {
        self.get_teacher_by_id_impl(id).await
    }

    async fn get_teacher_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Teacher>> {
        self.get_teacher_by_name_impl(first_name, last_name).await
    }

    async fn list_teachers_with_pagination(
        &self,
        query: TeacherListQuery,
    ) -> Result<PaginatedResponse<Teacher>> {
        self.list_teachers_with_pagination_impl(query).await
    }

    async fn update_teacher(
        &self,
        id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>> {
        self.update_teacher_impl(id, update).await
    }

    async fn delete_teacher(&self, id: i64) -> Result<bool> {
        self.delete_teacher_impl(id).await
    }

    // 科目模块
    async fn create_subject(&self, req: CreateSubjectRequest) -> Result<Subject> {
        self.create_subject_impl(req).await
    }

    async fn get_subject_by_id(&self, id: i64) -> Result<Option<Subject>> {
        self.get_subject_by_id_impl(id).await
    }

    async fn get_subject_by_code(&self, code: &str) -> Result<Option<Subject>> {
        self.get_subject_by_code_impl(code).await
    }

    async fn list_subjects_with_pagination(
        &self,
        query: SubjectListQuery,
    ) -> Result<PaginatedResponse<Subject>> {
        self.list_subjects_with_pagination_impl(query).await
    }

    async fn update_subject(
        &self,
        id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        self.update_subject_impl(id, update).await
    }

    async fn delete_subject(&self, id: i64) -> Result<bool> {
        self.delete_subject_impl(id).await
    }

    // 授课安排模块
    async fn create_course_assignment(
        &self,
        req: CreateCourseAssignmentRequest,
    ) -> Result<CourseAssignment> {
        self.create_course_assignment_impl(req).await
    }

    async fn get_course_assignment_by_id(&self, id: i64) -> Result<Option<CourseAssignment>> {
        self.get_course_assignment_by_id_impl(id).await
    }

    async fn find_course_assignment(
        &self,
        teacher_id: i64,
        subject_id: i64,
        classroom_id: i64,
        term: &str,
    ) -> Result<Option<CourseAssignment>> {
        self.find_course_assignment_impl(teacher_id, subject_id, classroom_id, term).await
    }

    async fn list_course_assignments_with_pagination(
        &self,
        query: CourseAssignmentListQuery,
    ) -> Result<PaginatedResponse<CourseAssignment>> {
        self.list_course_assignments_with_pagination_impl(query).await
    }

    async fn list_course_assignments_by_classroom(
        &self,
        classroom_id: i64,
    ) -> Result<Vec<CourseAssignment>> {
        self.list_course_assignments_by_classroom_impl(classroom_id).await
    }

    async fn update_course_assignment(
        &self,
        id: i64,
        update: UpdateCourseAssignmentRequest,
    ) -> Result<Option<CourseAssignment>> {
        self.update_course_assignment_impl(id, update).await
    }

    async fn delete_course_assignment(&self, id: i64) -> Result<bool> {
        self.delete_course_assignment_impl(id).await
    }

    // 评价题目模块
    async fn create_question(
        &self,
        req: CreateEvaluationQuestionRequest,
    ) -> Result<EvaluationQuestion> {
        self.create_question_impl(req).await
    }

    async fn get_question_by_id(&self, id: i64) -> Result<Option<EvaluationQuestion>> {
        self.get_question_by_id_impl(id).await
    }

    async fn list_questions_with_pagination(
        &self,
        query: EvaluationQuestionListQuery,
    ) -> Result<PaginatedResponse<EvaluationQuestion>> {
        self.list_questions_with_pagination_impl(query).await
    }

    async fn list_all_questions(&self) -> Result<Vec<EvaluationQuestion>> {
        self.list_all_questions_impl().await
    }

    async fn update_question(
        &self,
        id: i64,
        update: UpdateEvaluationQuestionRequest,
    ) -> Result<Option<EvaluationQuestion>> {
        self.update_question_impl(id, update).await
    }

    async fn delete_question(&self, id: i64) -> Result<bool> {
        self.delete_question_impl(id).await
    }

    async fn count_questions(&self) -> Result<u64> {
        self.count_questions_impl().await
    }

    // 评价模块
    async fn create_evaluation(&self, req: CreateEvaluationRequest) -> Result<Evaluation> {
        self.create_evaluation_impl(req).await
    }

    async fn get_evaluation_by_id(&self, id: i64) -> Result<Option<Evaluation>> {
        self.get_evaluation_by_id_impl(id).await
    }

    async fn get_evaluation_detail(&self, id: i64) -> Result<Option<EvaluationDetail>> {
        self.get_evaluation_detail_impl(id).await
    }

    async fn list_evaluations_with_pagination(
        &self,
        query: EvaluationListQuery,
    ) -> Result<PaginatedResponse<EvaluationDetail>> {
        self.list_evaluations_with_pagination_impl(query).await
    }

    async fn list_evaluation_details(
        &self,
        query: EvaluationListQuery,
    ) -> Result<Vec<EvaluationDetail>> {
        self.list_evaluation_details_impl(query).await
    }

    async fn list_recent_evaluations(&self, limit: u64) -> Result<Vec<EvaluationDetail>> {
        self.list_recent_evaluations_impl(limit).await
    }

    async fn list_evaluated_assignment_ids(&self, student_id: i64) -> Result<Vec<i64>> {
        self.list_evaluated_assignment_ids_impl(student_id).await
    }

    async fn submit_evaluation(
        &self,
        student_id: i64,
        req: SubmitEvaluationRequest,
    ) -> Result<Evaluation> {
        self.submit_evaluation_impl(student_id, req).await
    }

    async fn delete_evaluation(&self, id: i64) -> Result<bool> {
        self.delete_evaluation_impl(id).await
    }

    // 评价答案模块
    async fn create_answer(&self, req: CreateEvaluationAnswerRequest) -> Result<EvaluationAnswer> {
        self.create_answer_impl(req).await
    }

    async fn list_answers(&self, eval_id: Option<i64>) -> Result<Vec<EvaluationAnswer>> {
        self.list_answers_impl(eval_id).await
    }

    async fn delete_answer(&self, id: i64) -> Result<bool> {
        self.delete_answer_impl(id).await
    }

    // 仪表盘
    async fn dashboard_totals(&self) -> Result<DashboardTotals> {
        self.dashboard_totals_impl().await
    }
}

/// 测试用的内存数据库与基础数据
#[cfg(test)]
pub(crate) mod testing {
    use super::SeaOrmStorage;
    use crate::models::{
        classrooms::requests::CreateClassroomRequest,
        course_assignments::{
            entities::CourseAssignment, requests::CreateCourseAssignmentRequest,
        },
        evaluation_questions::requests::CreateEvaluationQuestionRequest,
        students::{entities::Student, requests::CreateStudentRequest},
        subjects::requests::CreateSubjectRequest,
        teachers::requests::CreateTeacherRequest,
    };
    use crate::storage::Storage;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    pub(crate) struct Fixture {
        pub student: Student,
        /// 学生所在教室的两门课
        pub own: Vec<CourseAssignment>,
        /// 其他教室的课
        pub other: CourseAssignment,
        pub question_ids: Vec<i64>,
    }

    /// 内存 SQLite，单连接保证所有查询落在同一个库
    pub(crate) async fn memory_storage() -> SeaOrmStorage {
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1).min_connections(1).sqlx_logging(false);
        let db = Database::connect(opt).await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        SeaOrmStorage { db }
    }

    async fn assignment(
        storage: &SeaOrmStorage,
        teacher_id: i64,
        subject_id: i64,
        classroom_id: i64,
    ) -> CourseAssignment {
        storage
            .create_course_assignment(CreateCourseAssignmentRequest {
                teacher_id,
                subject_id,
                classroom_id,
                term: "1/2568".to_string(),
            })
            .await
            .unwrap()
    }

    /// 学生 John Smith 在 M.1/1，该教室有数学和科学两门课
    pub(crate) async fn seed(storage: &SeaOrmStorage) -> Fixture {
        let room = storage
            .create_classroom(CreateClassroomRequest {
                room_name: "M.1/1".to_string(),
                level_id: None,
            })
            .await
            .unwrap();
        let other_room = storage
            .create_classroom(CreateClassroomRequest {
                room_name: "M.1/2".to_string(),
                level_id: None,
            })
            .await
            .unwrap();
        let student = storage
            .create_student(CreateStudentRequest {
                student_code: "65001".to_string(),
                first_name: "John".to_string(),
                last_name: "Smith".to_string(),
                classroom_id: Some(room.id),
            })
            .await
            .unwrap();
        let teacher = storage
            .create_teacher(CreateTeacherRequest {
                first_name: "Somsak".to_string(),
                last_name: "Rakdee".to_string(),
            })
            .await
            .unwrap();

        let mut subject_ids = Vec::new();
        for (code, name) in [("M101", "Mathematics"), ("S101", "Science")] {
            let subject = storage
                .create_subject(CreateSubjectRequest {
                    subject_code: code.to_string(),
                    subject_name: name.to_string(),
                })
                .await
                .unwrap();
            subject_ids.push(subject.id);
        }

        let own = vec![
            assignment(storage, teacher.id, subject_ids[0], room.id).await,
            assignment(storage, teacher.id, subject_ids[1], room.id).await,
        ];
        let other = assignment(storage, teacher.id, subject_ids[0], other_room.id).await;

        let mut question_ids = Vec::new();
        for text in ["Explains clearly", "Starts on time"] {
            let question = storage
                .create_question(CreateEvaluationQuestionRequest {
                    question_text: text.to_string(),
                })
                .await
                .unwrap();
            question_ids.push(question.id);
        }

        Fixture {
            student,
            own,
            other,
            question_ids,
        }
    }
}
