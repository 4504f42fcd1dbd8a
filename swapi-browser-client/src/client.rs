//! swapi.dev HTTP 实现

use async_trait::async_trait;
use reqwest::Client;

use crate::error::Result;
use crate::http_client::{HttpUtils, create_http_client};
use crate::traits::StarWarsApi;
use crate::types::{PaginatedResponse, PeopleListResponse, Person, Planet};

/// 公共 API 根地址
pub const SWAPI_BASE_URL: &str = "https://swapi.dev/api";

/// Star Wars API 客户端
#[derive(Debug, Clone)]
pub struct SwapiClient {
    client: Client,
    base_url: String,
}

impl SwapiClient {
    /// 使用指定根地址创建客户端（末尾的 `/` 会被去掉）
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            client: create_http_client()?,
            base_url,
        })
    }

    /// 根地址
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 人物列表某一页的完整地址
    pub fn people_url(&self, page: u32) -> String {
        format!("{}/people/?page={page}", self.base_url)
    }
}

#[async_trait]
impl StarWarsApi for SwapiClient {
    async fn list_people(&self, page: u32) -> Result<PaginatedResponse<Person>> {
        let url = self.people_url(page);
        let body: PeopleListResponse = HttpUtils::get_json(&self.client, &url).await?;

        log::info!(
            "Loaded people page {page}: {} records, {} total",
            body.results.len(),
            body.count
        );

        Ok(PaginatedResponse::new(body.results, page, body.count))
    }

    async fn get_planet(&self, url: &str) -> Result<Planet> {
        HttpUtils::get_json(&self.client, url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn people_url_uses_page_query() {
        let client = SwapiClient::new(SWAPI_BASE_URL).unwrap();
        assert_eq!(client.people_url(3), "https://swapi.dev/api/people/?page=3");
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = SwapiClient::new("http://127.0.0.1:8080/api/").unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:8080/api");
        assert_eq!(
            client.people_url(1),
            "http://127.0.0.1:8080/api/people/?page=1"
        );
    }
}
