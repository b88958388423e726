table! {
    categories (id) {
        id -> Int4,
        #[sql_name = "type"]
        type_ -> Text,
    }
}

table! {
    questions (id) {
        id -> Int4,
        question -> Text,
        answer -> Text,
        category -> Int4,
        difficulty -> Int4,
    }
}

joinable!(questions -> categories (category));

allow_tables_to_appear_in_same_query!(categories, questions);
