//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_unless_env {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 预设响应
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
    pub delay: Option<Duration>,
}

impl MockResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
            delay: None,
        }
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            delay: None,
        }
    }
}

/// 本地 HTTP 模拟服务器
///
/// 按 "路径 + 查询串" 匹配预设响应，未匹配返回 404。
/// 每个连接只处理一个请求，响应后关闭。
pub struct MockServer {
    /// 形如 `http://127.0.0.1:PORT/api`
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockServer {
    /// 启动服务器，`routes` 的键形如 `/api/people/?page=1`
    pub async fn start(routes: Vec<(&str, MockResponse)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("绑定本地端口失败");
        let addr = listener.local_addr().expect("读取本地地址失败");

        let routes: Arc<HashMap<String, MockResponse>> = Arc::new(
            routes
                .into_iter()
                .map(|(path, resp)| (path.to_string(), resp))
                .collect(),
        );
        let requests = Arc::new(Mutex::new(Vec::new()));

        let log = requests.clone();
        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    return;
                };
                let routes = routes.clone();
                let log = log.clone();

                tokio::spawn(async move {
                    let mut buf = Vec::new();
                    let mut chunk = [0_u8; 1024];
                    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                        match socket.read(&mut chunk).await {
                            Ok(0) | Err(_) => return,
                            Ok(n) => buf.extend_from_slice(&chunk[..n]),
                        }
                    }

                    let head = String::from_utf8_lossy(&buf);
                    let path = head
                        .lines()
                        .next()
                        .and_then(|line| line.split_whitespace().nth(1))
                        .unwrap_or("/")
                        .to_string();
                    log.lock().expect("请求日志锁中毒").push(path.clone());

                    let resp = routes
                        .get(&path)
                        .cloned()
                        .unwrap_or_else(|| MockResponse::status(404, r#"{"detail":"Not found"}"#));

                    if let Some(delay) = resp.delay {
                        tokio::time::sleep(delay).await;
                    }

                    let raw = format!(
                        "HTTP/1.1 {} MOCK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        resp.status,
                        resp.body.len(),
                        resp.body
                    );
                    let _ = socket.write_all(raw.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        Self {
            base_url: format!("http://{addr}/api"),
            requests,
        }
    }

    /// 服务器的主机部分（用于拼接 homeworld 等绝对地址）
    pub fn origin(&self) -> &str {
        self.base_url.trim_end_matches("/api")
    }

    /// 已收到的请求路径
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().expect("请求日志锁中毒").clone()
    }
}

/// 获取一个当前未被监听的本地地址
pub async fn unused_local_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("绑定本地端口失败");
    let addr = listener.local_addr().expect("读取本地地址失败");
    drop(listener);
    format!("http://{addr}/api")
}

/// 生成一页人物数据的 JSON（奇数位置的人物带物种引用）
pub fn people_page_json(count: u32, names: &[&str]) -> String {
    let results: Vec<serde_json::Value> = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let species: Vec<&str> = if i % 2 == 0 {
                Vec::new()
            } else {
                vec!["https://swapi.dev/api/species/2/"]
            };
            serde_json::json!({
                "name": name,
                "height": "172",
                "mass": "77",
                "birth_year": "19BBY",
                "films": ["https://swapi.dev/api/films/1/"],
                "species": species,
                "homeworld": format!("https://swapi.dev/api/planets/{}/", i + 1),
            })
        })
        .collect();

    serde_json::json!({
        "count": count,
        "next": null,
        "previous": null,
        "results": results,
    })
    .to_string()
}
