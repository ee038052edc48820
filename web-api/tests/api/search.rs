use super::helper::test;
use golden_core::Value;
use reqwest::StatusCode;
use web_api::routes::search::SearchParams;

fn params(imo: Option<&str>, mmsi: Option<&str>, name: Option<&str>) -> SearchParams {
    SearchParams {
        imo: imo.map(ToString::to_string),
        mmsi: mmsi.map(ToString::to_string),
        name: name.map(ToString::to_string),
    }
}

#[tokio::test]
async fn test_search_without_filters_returns_whole_table() {
    test(|helper| async move {
        let response = helper.app.search(SearchParams::default()).await.unwrap();
        assert_eq!(response.results.len(), 3);
    })
    .await;
}

#[tokio::test]
async fn test_search_by_imo_returns_exact_match() {
    test(|helper| async move {
        let response = helper
            .app
            .search(params(Some("1234567"), None, None))
            .await
            .unwrap();

        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].imo(), Some(&Value::Int(1234567)));
    })
    .await;
}

#[tokio::test]
async fn test_search_by_mmsi_matches_list_member() {
    test(|helper| async move {
        let response = helper
            .app
            .search(params(None, Some("257000000"), None))
            .await
            .unwrap();

        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].imo(), Some(&Value::Int(7654321)));
    })
    .await;
}

#[tokio::test]
async fn test_search_by_name_is_case_insensitive() {
    test(|helper| async move {
        let response = helper
            .app
            .search(params(None, None, Some("sTaR")))
            .await
            .unwrap();

        let imos: Vec<_> = response.results.iter().map(|r| r.imo().cloned()).collect();
        assert_eq!(
            imos,
            vec![Some(Value::Int(7654321)), Some(Value::Int(9000001))]
        );
    })
    .await;
}

#[tokio::test]
async fn test_search_with_no_match_returns_empty_results() {
    test(|helper| async move {
        let response = helper
            .app
            .search(params(Some("1234567"), None, Some("star")))
            .await
            .unwrap();

        assert!(response.results.is_empty());
    })
    .await;
}

#[tokio::test]
async fn test_search_ignores_malformed_and_empty_filters() {
    test(|helper| async move {
        let response = helper
            .app
            .search(params(Some("abc"), Some("0"), Some("")))
            .await
            .unwrap();

        assert_eq!(response.results.len(), 3);
    })
    .await;
}

#[tokio::test]
async fn test_search_rows_use_null_and_keep_column_order() {
    test(|helper| async move {
        let response = helper
            .app
            .get_with_params("search", &params(Some("7654321"), None, None))
            .await;
        assert_eq!(response.status(), StatusCode::OK);

        let text = response.text().await.unwrap();
        assert!(text.starts_with("{\"results\":[{\"imo\":7654321,"));
        assert!(text.contains("\"callsign\":null"));
        assert!(text.contains("\"last_position_latitude\":null"));

        let columns = [
            "\"imo\"",
            "\"mmsi\"",
            "\"name\"",
            "\"callsign\"",
            "\"flag\"",
            "\"last_position_latitude\"",
            "\"last_position_longitude\"",
        ];
        let positions: Vec<_> = columns.iter().map(|c| text.find(c).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    })
    .await;
}

#[tokio::test]
async fn test_nan_markers_are_serialized_as_null() {
    test(|helper| async move {
        let response = helper
            .app
            .search(params(Some("9000001"), None, None))
            .await
            .unwrap();

        let record = &response.results[0];
        assert_eq!(record.mmsi(), Some(&Value::Null));
        assert_eq!(record.get("last_position_longitude"), Some(&Value::Null));
        assert_eq!(record.get("last_position_latitude"), Some(&Value::Float(58.25)));
    })
    .await;
}
