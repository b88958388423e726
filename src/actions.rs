use crate::models::*;
use crate::schema::*;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::QueryResult;

pub fn questions_ordered(conn: &PgConnection) -> QueryResult<Vec<Question>> {
    questions::table.order(questions::id).load(conn)
}

pub fn categories_ordered(conn: &PgConnection) -> QueryResult<Vec<Category>> {
    categories::table.order(categories::id).load(conn)
}

pub fn question_by_id(conn: &PgConnection, id: i32) -> QueryResult<Option<Question>> {
    questions::table.find(id).get_result(conn).optional()
}

pub fn category_by_id(conn: &PgConnection, id: i32) -> QueryResult<Option<Category>> {
    categories::table.find(id).get_result(conn).optional()
}

pub fn questions_in_category(conn: &PgConnection, category_id: i32) -> QueryResult<Vec<Question>> {
    questions::table
        .filter(questions::category.eq(category_id))
        .order(questions::id)
        .load(conn)
}

pub fn search_questions(conn: &PgConnection, term: &str) -> QueryResult<Vec<Question>> {
    questions::table
        .filter(questions::question.ilike(format!("%{}%", term)))
        .order(questions::id)
        .load(conn)
}

pub fn insert_question(conn: &PgConnection, new: &NewQuestion) -> QueryResult<Question> {
    diesel::insert_into(questions::table)
        .values(new)
        .get_result(conn)
}

pub fn insert_category(conn: &PgConnection, name: &str) -> QueryResult<Category> {
    diesel::insert_into(categories::table)
        .values(&NewCategory { type_: name })
        .get_result(conn)
}

pub fn delete_question(conn: &PgConnection, id: i32) -> QueryResult<usize> {
    diesel::delete(questions::table.find(id)).execute(conn)
}

pub fn count_questions(conn: &PgConnection) -> QueryResult<i64> {
    questions::table.count().get_result(conn)
}
