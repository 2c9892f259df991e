//! Handler tests for the question endpoints.

use super::*;
use crate::domain::ports::{
    CreatedQuestion, DeletedQuestion, MockTriviaCommand, MockTriviaQuery, QuestionListing,
};
use crate::domain::{Category, QUESTIONS_PER_PAGE};
use crate::inbound::http::test_utils::{MockPorts, trivia_app};
use actix_web::http::StatusCode;
use actix_web::test;
use pagination::{Page, PageNumber};
use rstest::rstest;
use serde_json::{Value, json};

fn sample_question(id: i64) -> Question {
    Question::new(
        QuestionId::new(id),
        format!("Question {id}?"),
        format!("Answer {id}"),
        Some(CategoryId::new(1)),
        Difficulty::new(2),
    )
}

fn sample_page(page: PageNumber, total: i64) -> Page<Question> {
    let questions: Vec<Question> = (1..=total).map(sample_question).collect();
    Page::from_slice(page, &questions, QUESTIONS_PER_PAGE)
}

fn with_query(trivia: MockTriviaQuery) -> MockPorts {
    MockPorts {
        trivia,
        ..MockPorts::default()
    }
}

fn with_commands(commands: MockTriviaCommand) -> MockPorts {
    MockPorts {
        commands,
        ..MockPorts::default()
    }
}

async fn call(ports: MockPorts, req: test::TestRequest) -> (StatusCode, Value) {
    let app = test::init_service(trivia_app(ports.into_state())).await;
    let res = test::call_service(&app, req.to_request()).await;
    let status = res.status();
    let body: Value = test::read_body_json(res).await;
    (status, body)
}

#[actix_web::test]
async fn list_questions_returns_page_with_catalogue() {
    let mut trivia = MockTriviaQuery::new();
    trivia
        .expect_list_questions()
        .withf(|page| *page == PageNumber::new(2))
        .times(1)
        .return_once(|page| {
            Ok(QuestionListing {
                page: sample_page(page, 12),
                categories: CategoryCatalogue::from_categories([Category::new(
                    CategoryId::new(1),
                    "Science",
                )]),
            })
        });

    let (status, body) = call(
        with_query(trivia),
        test::TestRequest::get().uri("/questions?page=2"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["total_questions"], json!(12));
    assert_eq!(body["categories"], json!({"1": "Science"}));
    assert_eq!(body["current_category"], Value::Null);
    let ids: Vec<i64> = body["questions"]
        .as_array()
        .expect("questions array")
        .iter()
        .filter_map(|q| q["id"].as_i64())
        .collect();
    assert_eq!(ids, vec![11, 12]);
}

#[rstest]
#[case("/questions?page=abc")]
#[case("/questions?page=0")]
#[case("/questions")]
#[actix_web::test]
async fn invalid_page_falls_back_to_first(#[case] uri: &'static str) {
    let mut trivia = MockTriviaQuery::new();
    trivia
        .expect_list_questions()
        .withf(|page| *page == PageNumber::FIRST)
        .times(1)
        .return_once(|page| {
            Ok(QuestionListing {
                page: sample_page(page, 3),
                categories: CategoryCatalogue::default(),
            })
        });

    let (status, _) = call(with_query(trivia), test::TestRequest::get().uri(uri)).await;

    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn search_term_routes_to_search() {
    let mut trivia = MockTriviaQuery::new();
    trivia
        .expect_search_questions()
        .withf(|term, page| term.as_str() == "title" && *page == PageNumber::FIRST)
        .times(1)
        .return_once(|_, page| Ok(sample_page(page, 2)));
    let mut commands = MockTriviaCommand::new();
    commands.expect_create_question().times(0);
    let ports = MockPorts {
        trivia,
        commands,
        ..MockPorts::default()
    };

    let (status, body) = call(
        ports,
        test::TestRequest::post()
            .uri("/questions")
            .set_json(json!({"searchTerm": "title"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_questions"], json!(2));
    assert_eq!(body["current_category"], Value::Null);
    assert!(body.get("created").is_none());
}

#[actix_web::test]
async fn search_without_matches_is_404() {
    let mut trivia = MockTriviaQuery::new();
    trivia
        .expect_search_questions()
        .times(1)
        .return_once(|_, _| Err(Error::not_found("no questions match the search term")));

    let (status, body) = call(
        with_query(trivia),
        test::TestRequest::post()
            .uri("/questions")
            .set_json(json!({"searchTerm": "zzz"})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], json!(404));
    assert_eq!(body["message"], json!("resource not found"));
    assert!(body["traceId"].is_string());
}

#[actix_web::test]
async fn create_accepts_string_category_from_forms() {
    let mut commands = MockTriviaCommand::new();
    commands
        .expect_create_question()
        .withf(|draft, page| {
            draft.category() == CategoryId::new(3)
                && draft.difficulty() == Difficulty::new(4)
                && *page == PageNumber::FIRST
        })
        .times(1)
        .return_once(|draft, page| {
            Ok(CreatedQuestion {
                question: Question::from_draft(QuestionId::new(24), draft),
                page: sample_page(page, 24),
            })
        });

    let (status, body) = call(
        with_commands(commands),
        test::TestRequest::post().uri("/questions").set_json(json!({
            "question": "Which planet is largest?",
            "answer": "Jupiter",
            "category": "3",
            "difficulty": 4,
            "searchTerm": "   ",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["created"], json!(24));
    assert_eq!(body["total_questions"], json!(24));
    assert_eq!(body["questions"].as_array().map(Vec::len), Some(10));
}

#[rstest]
#[case(json!({"answer": "a", "category": 1, "difficulty": 1}), "question")]
#[case(json!({"question": "q", "category": 1, "difficulty": 1}), "answer")]
#[case(json!({"question": "q", "answer": "a", "difficulty": 1}), "category")]
#[case(json!({"question": "q", "answer": "a", "category": 1}), "difficulty")]
#[case(json!({"question": "q", "answer": "a", "category": "art", "difficulty": 1}), "category")]
#[case(json!({"question": " ", "answer": "a", "category": 1, "difficulty": 1}), "question")]
#[actix_web::test]
async fn incomplete_creation_is_422(#[case] payload: Value, #[case] field: &str) {
    let mut commands = MockTriviaCommand::new();
    commands.expect_create_question().times(0);

    let (status, body) = call(
        with_commands(commands),
        test::TestRequest::post().uri("/questions").set_json(payload),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], json!(422));
    assert_eq!(body["message"], json!("unprocessable"));
    assert_eq!(body["details"]["field"], json!(field));
}

#[actix_web::test]
async fn malformed_json_is_400() {
    let (status, body) = call(
        MockPorts::default(),
        test::TestRequest::post()
            .uri("/questions")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("bad request"));
}

#[actix_web::test]
async fn delete_reports_remaining_total() {
    let mut commands = MockTriviaCommand::new();
    commands
        .expect_delete_question()
        .withf(|id| *id == QuestionId::new(5))
        .times(1)
        .return_once(|id| Ok(DeletedQuestion { id, remaining: 18 }));

    let (status, body) = call(
        with_commands(commands),
        test::TestRequest::delete().uri("/questions/5"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"success": true, "deleted": 5, "total_questions": 18})
    );
}

#[rstest]
#[case(Error::not_found("question 1000 does not exist"), StatusCode::NOT_FOUND)]
#[case(Error::unprocessable("question could not be stored"), StatusCode::UNPROCESSABLE_ENTITY)]
#[actix_web::test]
async fn delete_failures_map_to_status(#[case] error: Error, #[case] expected: StatusCode) {
    let mut commands = MockTriviaCommand::new();
    commands
        .expect_delete_question()
        .times(1)
        .return_once(move |_| Err(error));

    let (status, body) = call(
        with_commands(commands),
        test::TestRequest::delete().uri("/questions/1000"),
    )
    .await;

    assert_eq!(status, expected);
    assert_eq!(body["success"], json!(false));
}

#[actix_web::test]
async fn responses_carry_trace_id_header() {
    let mut trivia = MockTriviaQuery::new();
    trivia
        .expect_list_questions()
        .times(1)
        .return_once(|_| Err(Error::not_found("no questions on page 1")));
    let app = test::init_service(trivia_app(with_query(trivia).into_state())).await;

    let res = test::call_service(&app, test::TestRequest::get().uri("/questions").to_request())
        .await;

    let header = res
        .headers()
        .get(crate::domain::TRACE_ID_HEADER)
        .expect("trace-id header")
        .to_str()
        .expect("ascii header")
        .to_owned();
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["traceId"], json!(header));
}

#[actix_web::test]
async fn unknown_route_uses_error_envelope() {
    let (status, body) = call(
        MockPorts::default(),
        test::TestRequest::get().uri("/answers"),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], json!("resource not found"));
}
