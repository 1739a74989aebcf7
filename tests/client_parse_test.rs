//! End-to-end: a live server rendering errors, read back with the client parsers.

use axum::{middleware, routing::get, Json, Router};
use rest_envelope::apierror::{
    self, error_handler, ApiError, HandlerError, ResponseError, Validator, CONTENT_TYPE_V1,
    ERR_CODE_INTERNAL, ERR_CODE_VALIDATION_FAILED,
};
use rest_envelope::paging::{paging_middleware, PageRequest, Paging};
use tokio::net::TcpListener;

async fn validate() -> Result<&'static str, ApiError> {
    let mut v = Validator::new();
    v.required("amount");
    v.invalid("id", "ID invalid");
    v.into_result()?;
    Ok("valid")
}

async fn boom() -> Result<&'static str, HandlerError> {
    Err(anyhow::anyhow!("boom").into())
}

async fn plain() -> (axum::http::StatusCode, &'static str) {
    (axum::http::StatusCode::BAD_GATEWAY, "upstream went away")
}

async fn echo(Paging(page_request): Paging) -> Json<PageRequest> {
    Json(page_request)
}

async fn spawn_server() -> String {
    let app = Router::new()
        .route("/validate", get(validate))
        .route("/boom", get(boom))
        .route("/plain", get(plain))
        .route("/page", get(echo).layer(middleware::from_fn(paging_middleware)))
        .layer(middleware::from_fn(error_handler));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_parse_validation_error() {
    let base = spawn_server().await;

    let response = reqwest::get(format!("{}/validate", base)).await.unwrap();
    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(
        response.headers()[reqwest::header::CONTENT_TYPE].to_str().unwrap(),
        CONTENT_TYPE_V1
    );

    let err = apierror::parse(response).await;
    assert_eq!(err.status, 400);
    assert_eq!(err.code(), ERR_CODE_VALIDATION_FAILED);
    assert_eq!(err.message(), "Request validation failed");
    assert_eq!(err.fields().len(), 2);
    assert_eq!(err.path, format!("{}/validate", base));
}

#[tokio::test]
async fn test_try_parse_unexpected_error() {
    let base = spawn_server().await;

    let response = reqwest::get(format!("{}/boom", base)).await.unwrap();
    match apierror::try_parse(response).await {
        ResponseError::Api(err) => {
            assert_eq!(err.status, 500);
            assert_eq!(err.code(), ERR_CODE_INTERNAL);
            assert_eq!(err.message(), "boom");
        }
        other => panic!("expected structured error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_try_parse_plain_error() {
    let base = spawn_server().await;

    let response = reqwest::get(format!("{}/plain", base)).await.unwrap();
    match apierror::try_parse(response).await {
        ResponseError::Plain(text) => assert_eq!(text, "upstream went away"),
        other => panic!("expected plain error, got {:?}", other),
    }

    let response = reqwest::get(format!("{}/plain", base)).await.unwrap();
    let err = apierror::parse(response).await;
    assert_eq!(err.status, 502);
    assert_eq!(err.code(), ERR_CODE_INTERNAL);
    assert_eq!(err.message(), "upstream went away");
}

#[tokio::test]
async fn test_paging_over_the_wire() {
    let base = spawn_server().await;

    let response = reqwest::get(format!("{}/page?page=3&page_size=999999", base))
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["page"], 3);
    assert_eq!(body["page_size"], 50);

    let response = reqwest::get(format!("{}/page?page=0", base)).await.unwrap();
    assert_eq!(response.status().as_u16(), 400);
}
