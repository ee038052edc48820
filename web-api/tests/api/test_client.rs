use reqwest::{Client, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use web_api::{
    error::{ErrorDiscriminants, ErrorResponse},
    routes::{
        ask::{AskBody, AskResponse},
        search::{SearchParams, SearchResponse},
    },
};

#[derive(Debug, PartialEq, Eq)]
pub struct Error {
    pub error: Option<ErrorDiscriminants>,
    pub status: StatusCode,
    pub description: String,
}

#[derive(Clone)]
pub struct ApiClient {
    address: String,
    client: Client,
}

impl ApiClient {
    pub fn new(address: String) -> ApiClient {
        ApiClient {
            address,
            client: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.address, path.trim_start_matches('/'))
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client.get(self.url(path)).send().await.unwrap()
    }

    pub async fn get_with_params<T: Serialize>(&self, path: &str, params: &T) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .query(params)
            .send()
            .await
            .unwrap()
    }

    pub async fn post_raw(&self, path: &str, content_type: &str, body: String) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .header("content-type", content_type)
            .body(body)
            .send()
            .await
            .unwrap()
    }

    pub async fn search(&self, params: SearchParams) -> Result<SearchResponse, Error> {
        parse(self.get_with_params("search", &params).await).await
    }

    pub async fn ask(&self, question: &str) -> Result<AskResponse, Error> {
        let body = AskBody {
            question: Some(question.to_string()),
        };
        let response = self
            .client
            .post(self.url("ask"))
            .json(&body)
            .send()
            .await
            .unwrap();

        parse(response).await
    }
}

pub async fn parse<O: DeserializeOwned>(response: reqwest::Response) -> Result<O, Error> {
    if response.status().is_success() {
        let text = response.text().await.unwrap();
        match serde_json::from_str::<O>(&text) {
            Ok(v) => Ok(v),
            Err(e) => panic!("failed to deserialize response, err: {e:?}, body: {text}"),
        }
    } else {
        Err(handle_request_failure(response).await)
    }
}

async fn handle_request_failure(response: reqwest::Response) -> Error {
    let status = response.status();
    // Errors raised by actix before reaching a handler do not use our error body.
    let text = response.text().await.unwrap();
    match serde_json::from_str::<ErrorResponse>(&text) {
        Ok(e) => Error {
            error: Some(e.error),
            status,
            description: e.description,
        },
        Err(_) => Error {
            error: None,
            status,
            description: text,
        },
    }
}
