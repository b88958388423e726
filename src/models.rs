use crate::schema::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Queryable, Serialize)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

#[derive(Clone, Debug, Queryable, Serialize)]
pub struct Category {
    pub id: i32,
    #[serde(rename = "type")]
    pub type_: String,
}

#[derive(Insertable)]
#[table_name = "questions"]
pub struct NewQuestion<'a> {
    pub question: &'a str,
    pub answer: &'a str,
    pub category: i32,
    pub difficulty: i32,
}

#[derive(Insertable)]
#[table_name = "categories"]
pub struct NewCategory<'a> {
    pub type_: &'a str,
}

#[derive(Deserialize)]
pub struct AddQuestion {
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchBody {
    pub search_term: String,
}

#[derive(Deserialize)]
pub struct QuizBody {
    pub quiz_category: QuizCategory,
    pub previous_questions: Vec<i32>,
}

#[derive(Deserialize)]
pub struct QuizCategory {
    pub id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_serializes_type_field() {
        let cat = Category {
            id: 1,
            type_: "Science".into(),
        };
        let json = serde_json::to_value(&cat).unwrap();
        assert_eq!(json, serde_json::json!({"id": 1, "type": "Science"}));
    }

    #[test]
    fn search_body_uses_camel_case() {
        let body: SearchBody = serde_json::from_str(r#"{"searchTerm": "World"}"#).unwrap();
        assert_eq!(body.search_term, "World");
        assert!(serde_json::from_str::<SearchBody>("{}").is_err());
    }

    #[test]
    fn quiz_body_shape() {
        let body: QuizBody = serde_json::from_str(
            r#"{"quiz_category": {"id": 0}, "previous_questions": [1, 4, 20]}"#,
        )
        .unwrap();
        assert_eq!(body.quiz_category.id, 0);
        assert_eq!(body.previous_questions, vec![1, 4, 20]);
    }

    #[test]
    fn question_serializes_all_columns() {
        let q = Question {
            id: 5,
            question: "What boxer's original name is Cassius Clay?".into(),
            answer: "Muhammad Ali".into(),
            category: 4,
            difficulty: 1,
        };
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["id"], 5);
        assert_eq!(json["answer"], "Muhammad Ali");
        assert_eq!(json["category"], 4);
        assert_eq!(json["difficulty"], 1);
    }
}
