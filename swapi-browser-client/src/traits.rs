use async_trait::async_trait;

use crate::error::Result;
use crate::types::{PaginatedResponse, Person, Planet};

/// Star Wars API Trait
///
/// The seam between the UI and the network. [`SwapiClient`](crate::SwapiClient)
/// is the HTTP implementation; tests substitute in-memory ones.
#[async_trait]
pub trait StarWarsApi: Send + Sync {
    /// 获取指定页的人物列表（页码从 1 开始，每页 [`PAGE_SIZE`](crate::PAGE_SIZE) 条）
    async fn list_people(&self, page: u32) -> Result<PaginatedResponse<Person>>;

    /// 按完整 URI 获取星球（用于跟随 `Person::homeworld`）
    async fn get_planet(&self, url: &str) -> Result<Planet>;
}
