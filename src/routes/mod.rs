pub mod auth;
pub mod classrooms;
pub mod course_assignments;
pub mod dashboard;
pub mod departments;
pub mod evaluation_answers;
pub mod evaluation_questions;
pub mod evaluations;
pub mod frontend;
pub mod levels;
pub mod students;
pub mod subjects;
pub mod teachers;
pub mod users;

pub use auth::configure_auth_routes;
pub use classrooms::configure_classrooms_routes;
pub use course_assignments::configure_course_assignments_routes;
pub use dashboard::configure_dashboard_routes;
pub use departments::configure_departments_routes;
pub use evaluation_answers::configure_evaluation_answers_routes;
pub use evaluation_questions::configure_evaluation_questions_routes;
pub use evaluations::configure_evaluations_routes;
pub use frontend::configure_frontend_routes;
pub use levels::configure_levels_routes;
pub use students::configure_students_routes;
pub use subjects::configure_subjects_routes;
pub use teachers::configure_teachers_routes;
pub use users::configure_users_routes;
