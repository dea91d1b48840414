//! HTTP 客户端
//!
//! 基于 `gloo-net` 实现核心的 `HttpClient`。每个请求绑定一个
//! `AbortController`：超时到期，或调用方在响应前丢弃了请求 future
//! (例如健康轮询的竞速超时)，底层 fetch 都会被中止。

use barrest_shell::request::{HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse};
use gloo_net::http::{Request, RequestBuilder};
use gloo_timers::callback::Timeout;
use tracing::debug;
use web_sys::{AbortController, AbortSignal};

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHttpClient;

impl BrowserHttpClient {
    fn builder(req: &HttpRequest) -> RequestBuilder {
        let builder = match req.method {
            HttpMethod::Get => Request::get(&req.url),
            HttpMethod::Post => Request::post(&req.url),
            HttpMethod::Put => Request::put(&req.url),
            HttpMethod::Delete => Request::delete(&req.url),
        };
        req.headers
            .iter()
            .fold(builder, |builder, (key, value)| builder.header(key, value))
    }
}

/// 未完成即被 drop 时中止 fetch
struct AbortOnDrop {
    controller: AbortController,
    finished: bool,
}

impl AbortOnDrop {
    fn new() -> Result<Self, HttpError> {
        let controller =
            AbortController::new().map_err(|e| HttpError::RequestBuildFailed(format!("{:?}", e)))?;
        Ok(Self {
            controller,
            finished: false,
        })
    }

    fn signal(&self) -> AbortSignal {
        self.controller.signal()
    }

    fn finish(&mut self) {
        self.finished = true;
    }
}

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        if !self.finished {
            debug!("aborting unfinished fetch");
            self.controller.abort();
        }
    }
}

#[async_trait::async_trait(?Send)]
impl HttpClient for BrowserHttpClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut guard = AbortOnDrop::new()?;
        let signal = guard.signal();

        let builder = Self::builder(&req).abort_signal(Some(&signal));
        let request = match req.body.as_deref() {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| HttpError::RequestBuildFailed(e.to_string()))?;

        // drop 时自动取消定时器
        let _deadline = req.timeout.map(|timeout| {
            let controller = guard.controller.clone();
            Timeout::new(
                timeout.as_millis().min(u32::MAX as u128) as u32,
                move || controller.abort(),
            )
        });

        let failure = |fallback: HttpError| match req.timeout {
            Some(timeout) if signal.aborted() => HttpError::Timeout(timeout),
            _ => fallback,
        };

        let response = request
            .send()
            .await
            .map_err(|e| failure(HttpError::Network(e.to_string())))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| failure(HttpError::ResponseParseFailed(e.to_string())))?;
        guard.finish();

        debug!(method = req.method.as_str(), url = %req.url, status, "fetch finished");
        Ok(HttpResponse::new(status, body))
    }
}
