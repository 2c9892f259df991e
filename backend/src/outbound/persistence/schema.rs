//! Diesel table definitions matching `backend/migrations`.

diesel::table! {
    categories (id) {
        id -> Int8,
        #[sql_name = "type"]
        kind -> Varchar,
    }
}

diesel::table! {
    questions (id) {
        id -> Int8,
        question -> Text,
        answer -> Text,
        category -> Nullable<Int8>,
        difficulty -> Int4,
    }
}

diesel::joinable!(questions -> categories (category));
diesel::allow_tables_to_appear_in_same_query!(categories, questions);
