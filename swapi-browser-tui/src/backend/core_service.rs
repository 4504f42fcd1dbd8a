//! 核心服务
//!
//! 在 tokio 运行时上执行 `Command`，
//! 结果通过无界通道送回 UI 主循环

use std::sync::Arc;

use swapi_browser_client::StarWarsApi;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::AbortHandle;

use super::Command;
use crate::message::DataMessage;

/// TUI 核心服务
///
/// 持有 API 客户端与运行时句柄，提供给主循环调用
pub struct CoreService {
    api: Arc<dyn StarWarsApi>,
    runtime: Handle,
    tx: UnboundedSender<DataMessage>,
    rx: UnboundedReceiver<DataMessage>,
    /// 当前详情弹窗的家园星球请求
    homeworld_task: Option<AbortHandle>,
}

impl CoreService {
    /// 创建核心服务实例
    pub fn new(api: Arc<dyn StarWarsApi>, runtime: Handle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            api,
            runtime,
            tx,
            rx,
            homeworld_task: None,
        }
    }

    /// 执行一条命令（立即返回，结果稍后经 `try_recv` 取得）
    pub fn dispatch(&mut self, command: Command) {
        match command {
            Command::LoadPage { page } => self.load_page(page),
            Command::FetchHomeworld { url, ticket } => self.fetch_homeworld(url, ticket),
            Command::CancelHomeworld => self.cancel_homeworld(),
        }
    }

    /// 取出一条已完成的结果（非阻塞）
    pub fn try_recv(&mut self) -> Option<DataMessage> {
        self.rx.try_recv().ok()
    }

    fn load_page(&self, page: u32) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();

        self.runtime.spawn(async move {
            let result = api.list_people(page).await;
            if let Err(e) = &result {
                if e.is_expected() {
                    log::warn!("Failed to load people page {page}: {e}");
                } else {
                    log::error!("Failed to load people page {page}: {e}");
                }
            }
            // 接收端只会在退出时被丢弃
            let _ = tx.send(DataMessage::PageLoaded { page, result });
        });
    }

    fn fetch_homeworld(&mut self, url: String, ticket: u64) {
        self.cancel_homeworld();

        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();

        let task = self.runtime.spawn(async move {
            let result = api.get_planet(&url).await;
            if let Err(e) = &result {
                log::warn!("Error fetching homeworld {url}: {e}");
            }
            let _ = tx.send(DataMessage::HomeworldLoaded { ticket, result });
        });
        self.homeworld_task = Some(task.abort_handle());
    }

    fn cancel_homeworld(&mut self) {
        if let Some(task) = self.homeworld_task.take() {
            if !task.is_finished() {
                log::debug!("Aborting in-flight homeworld request");
            }
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;
    use swapi_browser_client::{ApiError, PaginatedResponse, Person, Planet};
    use tokio::time::timeout;

    use super::*;

    /// 内存中的 API：页码 1..=3 有数据，其余页返回 404
    struct MockApi {
        planet_delay: Duration,
        planet_calls: AtomicUsize,
    }

    impl MockApi {
        fn new(planet_delay: Duration) -> Arc<Self> {
            Arc::new(Self {
                planet_delay,
                planet_calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl StarWarsApi for MockApi {
        async fn list_people(&self, page: u32) -> swapi_browser_client::Result<PaginatedResponse<Person>> {
            if !(1..=3).contains(&page) {
                return Err(ApiError::HttpStatus {
                    status: 404,
                    url: format!("mock://people/?page={page}"),
                });
            }
            let person: Person =
                serde_json::from_value(serde_json::json!({ "name": format!("Person {page}") }))
                    .map_err(|e| ApiError::Parse { detail: e.to_string() })?;
            Ok(PaginatedResponse::new(vec![person], page, 30))
        }

        async fn get_planet(&self, url: &str) -> swapi_browser_client::Result<Planet> {
            self.planet_calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(self.planet_delay).await;
            if url.contains("broken") {
                return Err(ApiError::Network {
                    detail: "connection refused".to_string(),
                });
            }
            Ok(Planet {
                name: "Tatooine".to_string(),
                climate: None,
                terrain: None,
                population: None,
                url: Some(url.to_string()),
            })
        }
    }

    async fn next_message(service: &mut CoreService) -> Option<DataMessage> {
        timeout(Duration::from_secs(2), service.rx.recv()).await.ok().flatten()
    }

    #[tokio::test]
    async fn load_page_delivers_result() {
        let mut service = CoreService::new(MockApi::new(Duration::ZERO), Handle::current());
        service.dispatch(Command::LoadPage { page: 2 });

        match next_message(&mut service).await {
            Some(DataMessage::PageLoaded { page, result }) => {
                assert_eq!(page, 2);
                let resp = result.unwrap();
                assert_eq!(resp.items[0].name, "Person 2");
                assert_eq!(resp.total_pages, 3);
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[tokio::test]
    async fn load_page_failure_is_delivered() {
        let mut service = CoreService::new(MockApi::new(Duration::ZERO), Handle::current());
        service.dispatch(Command::LoadPage { page: 9 });

        match next_message(&mut service).await {
            Some(DataMessage::PageLoaded { page: 9, result: Err(e) }) => {
                assert_eq!(e.to_string(), "Request failed with status code 404");
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[tokio::test]
    async fn homeworld_result_carries_ticket() {
        let mut service = CoreService::new(MockApi::new(Duration::ZERO), Handle::current());
        service.dispatch(Command::FetchHomeworld {
            url: "mock://planets/1/".to_string(),
            ticket: 7,
        });

        match next_message(&mut service).await {
            Some(DataMessage::HomeworldLoaded { ticket, result }) => {
                assert_eq!(ticket, 7);
                assert_eq!(result.unwrap().name, "Tatooine");
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[tokio::test]
    async fn homeworld_failure_is_delivered_as_error() {
        let mut service = CoreService::new(MockApi::new(Duration::ZERO), Handle::current());
        service.dispatch(Command::FetchHomeworld {
            url: "mock://planets/broken/".to_string(),
            ticket: 1,
        });

        let msg = next_message(&mut service).await;
        assert!(
            matches!(msg, Some(DataMessage::HomeworldLoaded { ticket: 1, result: Err(_) })),
            "got {msg:?}"
        );
    }

    #[tokio::test]
    async fn cancel_aborts_in_flight_homeworld() {
        let api = MockApi::new(Duration::from_millis(300));
        let mut service = CoreService::new(api.clone(), Handle::current());

        service.dispatch(Command::FetchHomeworld {
            url: "mock://planets/1/".to_string(),
            ticket: 1,
        });
        tokio::task::yield_now().await;
        service.dispatch(Command::CancelHomeworld);

        let msg = timeout(Duration::from_millis(600), service.rx.recv()).await;
        assert!(msg.is_err(), "aborted request must not report back: {msg:?}");
        assert!(service.homeworld_task.is_none());
    }

    #[tokio::test]
    async fn new_fetch_replaces_previous_one() {
        let api = MockApi::new(Duration::from_millis(100));
        let mut service = CoreService::new(api.clone(), Handle::current());

        service.dispatch(Command::FetchHomeworld {
            url: "mock://planets/1/".to_string(),
            ticket: 1,
        });
        service.dispatch(Command::FetchHomeworld {
            url: "mock://planets/2/".to_string(),
            ticket: 2,
        });

        match next_message(&mut service).await {
            Some(DataMessage::HomeworldLoaded { ticket, .. }) => assert_eq!(ticket, 2),
            other => panic!("unexpected message: {other:?}"),
        }
        let extra = timeout(Duration::from_millis(300), service.rx.recv()).await;
        assert!(extra.is_err(), "first request should have been aborted");
    }

    #[tokio::test]
    async fn cancel_without_request_is_noop() {
        let mut service = CoreService::new(MockApi::new(Duration::ZERO), Handle::current());
        service.dispatch(Command::CancelHomeworld);
        assert!(service.try_recv().is_none());
    }

    #[tokio::test]
    async fn reopening_issues_a_fresh_request() {
        let api = MockApi::new(Duration::ZERO);
        let mut service = CoreService::new(api.clone(), Handle::current());

        for ticket in 1..=2 {
            service.dispatch(Command::FetchHomeworld {
                url: "mock://planets/1/".to_string(),
                ticket,
            });
            assert!(next_message(&mut service).await.is_some());
            service.dispatch(Command::CancelHomeworld);
        }
        assert_eq!(api.planet_calls.load(Ordering::SeqCst), 2);
    }
}
