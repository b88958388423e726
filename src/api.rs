use crate::actions;
use crate::error::ApiError;
use crate::models::{AddQuestion, Category, NewQuestion, Question, QuizBody, SearchBody};
use actix_web::{delete, get, post, web, HttpResponse, ResponseError};
use diesel::pg::PgConnection;
use diesel::r2d2::ConnectionManager;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub type DbPool = r2d2::Pool<ConnectionManager<PgConnection>>;

pub const PAGE_SIZE: usize = 10;

#[derive(Deserialize)]
struct PageQuery {
    page: Option<u32>,
}

#[derive(Serialize)]
struct CategoryList {
    success: bool,
    categories: Vec<Category>,
}

#[derive(Serialize)]
struct QuestionPage {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    categories: HashMap<i32, String>,
}

#[derive(Serialize)]
struct DeleteResult {
    success: bool,
    deleted: i32,
    questions: Vec<Question>,
    total_questions: usize,
    categories: HashMap<i32, String>,
}

#[derive(Serialize)]
struct Created {
    success: bool,
    created: i32,
    total_questions: i64,
}

#[derive(Serialize)]
struct CategoryQuestions {
    success: bool,
    current_category: String,
    questions: Vec<Question>,
    total_questions: usize,
}

#[derive(Serialize)]
struct QuizRound {
    success: bool,
    question: Option<Question>,
    previous_questions: Vec<i32>,
}

fn paginate<T>(items: &[T], page: u32) -> &[T] {
    let start = match (page as usize).checked_sub(1) {
        Some(p) => p * PAGE_SIZE,
        None => return &[],
    };
    if start >= items.len() {
        return &[];
    }
    let end = usize::min(start + PAGE_SIZE, items.len());
    &items[start..end]
}

fn category_map(categories: &[Category]) -> HashMap<i32, String> {
    categories
        .iter()
        .map(|c| (c.id, c.type_.clone()))
        .collect()
}

#[get("/categories")]
async fn list_categories(
    pool: web::Data<DbPool>,
    web::Query(query): web::Query<PageQuery>,
) -> Result<HttpResponse, ApiError> {
    let db = web::block(move || pool.get())
        .await
        .map_err(ApiError::internal)?;
    let categories = web::block(move || {
        actions::categories_ordered(&db).map_err(ApiError::internal)
    })
    .await
    .map_err(ApiError::from_blocking)?;
    let page = paginate(&categories, query.page.unwrap_or(1));
    if page.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(HttpResponse::Ok().json(CategoryList {
        success: true,
        categories: page.to_vec(),
    }))
}

#[get("/questions")]
async fn list_questions(
    pool: web::Data<DbPool>,
    web::Query(query): web::Query<PageQuery>,
) -> Result<HttpResponse, ApiError> {
    let db = web::block(move || pool.get())
        .await
        .map_err(ApiError::internal)?;
    let (questions, categories) = web::block(move || {
        let questions = actions::questions_ordered(&db).map_err(ApiError::internal)?;
        let categories = actions::categories_ordered(&db).map_err(ApiError::internal)?;
        Ok((questions, categories))
    })
    .await
    .map_err(ApiError::from_blocking)?;
    let page = paginate(&questions, query.page.unwrap_or(1));
    if page.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(HttpResponse::Ok().json(QuestionPage {
        success: true,
        total_questions: page.len(),
        questions: page.to_vec(),
        categories: category_map(&categories),
    }))
}

#[delete("/questions/{id}")]
async fn delete_question(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let db = web::block(move || pool.get())
        .await
        .map_err(ApiError::internal)?;
    let (questions, categories) = web::block(move || {
        let question = actions::question_by_id(&db, id)
            .map_err(ApiError::unprocessable)?
            .ok_or(ApiError::NotFound)?;
        actions::delete_question(&db, question.id).map_err(ApiError::unprocessable)?;
        let questions = actions::questions_ordered(&db).map_err(ApiError::unprocessable)?;
        let categories = actions::categories_ordered(&db).map_err(ApiError::unprocessable)?;
        Ok((questions, categories))
    })
    .await
    .map_err(ApiError::from_blocking)?;
    let page = paginate(&questions, 1);
    Ok(HttpResponse::Ok().json(DeleteResult {
        success: true,
        deleted: id,
        total_questions: page.len(),
        questions: page.to_vec(),
        categories: category_map(&categories),
    }))
}

#[post("/add")]
async fn add_question(
    pool: web::Data<DbPool>,
    web::Json(body): web::Json<AddQuestion>,
) -> Result<HttpResponse, ApiError> {
    let db = web::block(move || pool.get())
        .await
        .map_err(ApiError::internal)?;
    let (created, total) = web::block(move || {
        // Referential integrity is checked here rather than left to the store.
        actions::category_by_id(&db, body.category)
            .map_err(ApiError::unprocessable)?
            .ok_or(ApiError::Unprocessable)?;
        let new = NewQuestion {
            question: &body.question,
            answer: &body.answer,
            category: body.category,
            difficulty: body.difficulty,
        };
        let created = actions::insert_question(&db, &new).map_err(ApiError::unprocessable)?;
        let total = actions::count_questions(&db).map_err(ApiError::unprocessable)?;
        Ok((created.id, total))
    })
    .await
    .map_err(ApiError::from_blocking)?;
    Ok(HttpResponse::Ok().json(Created {
        success: true,
        created,
        total_questions: total,
    }))
}

#[post("/questions")]
async fn search_questions(
    pool: web::Data<DbPool>,
    web::Query(query): web::Query<PageQuery>,
    web::Json(body): web::Json<SearchBody>,
) -> Result<HttpResponse, ApiError> {
    let db = web::block(move || pool.get())
        .await
        .map_err(ApiError::internal)?;
    let (matches, categories) = web::block(move || {
        let matches =
            actions::search_questions(&db, &body.search_term).map_err(ApiError::internal)?;
        let categories = actions::categories_ordered(&db).map_err(ApiError::internal)?;
        Ok((matches, categories))
    })
    .await
    .map_err(ApiError::from_blocking)?;
    // An empty result set is a successful search, not a missing resource.
    let page = paginate(&matches, query.page.unwrap_or(1));
    Ok(HttpResponse::Ok().json(QuestionPage {
        success: true,
        questions: page.to_vec(),
        total_questions: matches.len(),
        categories: category_map(&categories),
    }))
}

#[get("/categories/{category_id}/questions")]
async fn category_questions(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let category_id = path.into_inner();
    let db = web::block(move || pool.get())
        .await
        .map_err(ApiError::internal)?;
    let (category, questions) = web::block(move || {
        let category = actions::category_by_id(&db, category_id)
            .map_err(ApiError::internal)?
            .ok_or(ApiError::NotFound)?;
        let questions =
            actions::questions_in_category(&db, category_id).map_err(ApiError::internal)?;
        Ok((category, questions))
    })
    .await
    .map_err(ApiError::from_blocking)?;
    Ok(HttpResponse::Ok().json(CategoryQuestions {
        success: true,
        current_category: category.type_,
        total_questions: questions.len(),
        questions,
    }))
}

#[post("/play")]
async fn play_quiz(
    pool: web::Data<DbPool>,
    web::Json(body): web::Json<QuizBody>,
) -> Result<HttpResponse, ApiError> {
    let category_id = body.quiz_category.id;
    let db = web::block(move || pool.get())
        .await
        .map_err(ApiError::internal)?;
    let candidates = web::block(move || {
        if category_id == 0 {
            actions::questions_ordered(&db)
        } else {
            actions::questions_in_category(&db, category_id)
        }
        .map_err(ApiError::internal)
    })
    .await
    .map_err(ApiError::from_blocking)?;
    // Previous questions are echoed back but not excluded from the pool.
    let question = candidates.choose(&mut rand::thread_rng()).cloned();
    Ok(HttpResponse::Ok().json(QuizRound {
        success: true,
        question,
        previous_questions: body.previous_questions,
    }))
}

pub async fn method_not_allowed() -> HttpResponse {
    ApiError::MethodNotAllowed.error_response()
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(list_categories)
        .service(list_questions)
        .service(delete_question)
        .service(add_question)
        .service(search_questions)
        .service(category_questions)
        .service(play_quiz);
}

pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|_, _| ApiError::BadRequest.into())
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|_, _| ApiError::BadRequest.into())
}
