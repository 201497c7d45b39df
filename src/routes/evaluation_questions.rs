use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::evaluation_questions::requests::{
    CreateEvaluationQuestionRequest, EvaluationQuestionListParams,
    UpdateEvaluationQuestionRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::EvaluationQuestionService;
use crate::utils::SafeIDI64;

static EVALUATION_QUESTION_SERVICE: Lazy<EvaluationQuestionService> =
    Lazy::new(EvaluationQuestionService::new_lazy);

pub async fn list_questions(
    req: HttpRequest,
    query: web::Query<EvaluationQuestionListParams>,
) -> ActixResult<HttpResponse> {
    EVALUATION_QUESTION_SERVICE
        .list_questions(query.into_inner(), &req)
        .await
}

pub async fn get_question(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    EVALUATION_QUESTION_SERVICE.get_question(id.0, &req).await
}

pub async fn create_question(
    req: HttpRequest,
    data: web::Json<CreateEvaluationQuestionRequest>,
) -> ActixResult<HttpResponse> {
    EVALUATION_QUESTION_SERVICE
        .create_question(data.into_inner(), &req)
        .await
}

pub async fn update_question(
    req: HttpRequest,
    id: SafeIDI64,
    data: web::Json<UpdateEvaluationQuestionRequest>,
) -> ActixResult<HttpResponse> {
    EVALUATION_QUESTION_SERVICE
        .update_question(id.0, data.into_inner(), &req)
        .await
}

pub async fn delete_question(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    EVALUATION_QUESTION_SERVICE.delete_question(id.0, &req).await
}

// 学生填写时需要读取评价表，写操作在服务层限制为管理员
pub fn configure_evaluation_questions_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/evaluation-questions")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::all_roles()))
                    .route("", web::get().to(list_questions))
                    .route("", web::post().to(create_question))
                    .route("/{id}", web::get().to(get_question))
                    .route("/{id}", web::put().to(update_question))
                    .route("/{id}", web::delete().to(delete_question)),
            ),
    );
}
