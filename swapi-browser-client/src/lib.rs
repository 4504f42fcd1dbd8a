//! # swapi-browser-client
//!
//! Client for the two Star Wars API endpoints the browser needs: the paged
//! people listing and planet lookup by URI.
//!
//! ## Feature Flags
//!
//! - **`rustls`** *(default)* — Use rustls.
//! - **`native-tls`** — Use the platform's native TLS implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use swapi_browser_client::{StarWarsApi, SwapiClient, SWAPI_BASE_URL};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SwapiClient::new(SWAPI_BASE_URL)?;
//!
//!     let page = client.list_people(1).await?;
//!     println!("page {} of {}", page.page, page.total_pages);
//!
//!     for person in &page.items {
//!         let planet = client.get_planet(&person.homeworld).await?;
//!         println!("{} from {}", person.name, planet.name);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`Result<T, ApiError>`](ApiError). Non-2xx statuses,
//! transport failures and malformed bodies are distinct variants, but there is
//! no retry: callers decide what a failure means.

mod client;
mod error;
mod http_client;
mod traits;
mod types;
mod utils;

pub use client::{SWAPI_BASE_URL, SwapiClient};
pub use error::{ApiError, Result};
pub use traits::StarWarsApi;
pub use types::{
    PAGE_SIZE, PaginatedResponse, PeopleListResponse, Person, Planet, total_pages,
};
pub use utils::image::{PLACEHOLDER_IMAGE_BASE, placeholder_image_url};
