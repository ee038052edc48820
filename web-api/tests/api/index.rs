use super::helper::{INDEX_HTML, test};
use reqwest::StatusCode;

#[tokio::test]
async fn test_index_serves_front_page() {
    test(|helper| async move {
        let response = helper.app.get("/").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.text().await.unwrap(), INDEX_HTML);
    })
    .await;
}

#[tokio::test]
async fn test_static_files_are_served() {
    test(|helper| async move {
        let response = helper.app.get("/static/style.css").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.text().await.unwrap(), "body { margin: 0; }");
    })
    .await;
}

#[tokio::test]
async fn test_missing_static_file_is_not_found() {
    test(|helper| async move {
        let response = helper.app.get("/static/missing.js").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    })
    .await;
}

#[tokio::test]
async fn test_openapi_document_is_served_outside_production() {
    test(|helper| async move {
        let response = helper.app.get("/api-doc/openapi.json").await;
        assert_eq!(response.status(), StatusCode::OK);

        let text = response.text().await.unwrap();
        assert!(text.contains("/search"));
        assert!(text.contains("/ask"));
    })
    .await;
}
