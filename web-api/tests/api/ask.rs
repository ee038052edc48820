use super::helper::test;
use super::test_client::parse;
use reqwest::StatusCode;
use web_api::{error::ErrorDiscriminants, routes::ask::AskResponse};

#[tokio::test]
async fn test_ask_for_position() {
    test(|helper| async move {
        let response = helper
            .app
            .ask("Where is the vessel with imo 1234567")
            .await
            .unwrap();

        assert_eq!(
            response.answer,
            "The vessel with IMO 1234567 is at latitude 10.5 and longitude 20.5."
        );
    })
    .await;
}

#[tokio::test]
async fn test_ask_for_name_by_mmsi() {
    test(|helper| async move {
        let response = helper
            .app
            .ask("What is the name of mmsi 987654321")
            .await
            .unwrap();

        assert_eq!(
            response.answer,
            "The vessel with IMO 7654321 is named ['SEA STAR', 'STAR OF THE SEA']."
        );
    })
    .await;
}

#[tokio::test]
async fn test_ask_without_match() {
    test(|helper| async move {
        let response = helper
            .app
            .ask("Where is the vessel with imo 9999999")
            .await
            .unwrap();

        assert_eq!(
            response.answer,
            "I could not find a vessel matching your query."
        );
    })
    .await;
}

#[tokio::test]
async fn test_ask_summary_lists_all_fields() {
    test(|helper| async move {
        let response = helper.app.ask("Tell me about imo 9000001").await.unwrap();

        assert_eq!(
            response.answer,
            "I found a vessel with the following information:\n\
             - imo: 9000001\n\
             - mmsi: None\n\
             - name: ['NORDSTAR']\n\
             - callsign: not a list\n\
             - flag: DNK\n\
             - last_position_latitude: 58.25\n\
             - last_position_longitude: None\n"
        );
    })
    .await;
}

#[tokio::test]
async fn test_ask_with_missing_question_answers_empty_question() {
    test(|helper| async move {
        let response = helper
            .app
            .post_raw("ask", "application/json", "{}".to_string())
            .await;
        let response: AskResponse = parse(response).await.unwrap();

        assert!(
            response
                .answer
                .starts_with("I found a vessel with the following information:\n- imo: 1234567\n")
        );
    })
    .await;
}

#[tokio::test]
async fn test_ask_does_not_require_json_content_type() {
    test(|helper| async move {
        let response = helper
            .app
            .post_raw(
                "ask",
                "text/plain",
                r#"{"question": "name of imo 1234567"}"#.to_string(),
            )
            .await;
        let response: AskResponse = parse(response).await.unwrap();

        assert_eq!(
            response.answer,
            "The vessel with IMO 1234567 is named ['OCEAN QUEEN']."
        );
    })
    .await;
}

#[tokio::test]
async fn test_ask_with_invalid_json_is_bad_request() {
    test(|helper| async move {
        let response = helper
            .app
            .post_raw("ask", "application/json", "not json".to_string())
            .await;
        let error = parse::<AskResponse>(response).await.unwrap_err();

        assert_eq!(error.status, StatusCode::BAD_REQUEST);
        assert_eq!(error.error, Some(ErrorDiscriminants::InvalidBody));
        assert!(error.description.starts_with("Invalid request body"));
    })
    .await;
}
