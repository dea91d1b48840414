use std::time::Duration;

use barrest_shell::runtime::Runtime;
use futures::future::LocalBoxFuture;

/// 浏览器事件循环上的调度
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserRuntime;

impl Runtime for BrowserRuntime {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }

    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        Box::pin(gloo_timers::future::sleep(duration))
    }

    fn now_millis(&self) -> u64 {
        js_sys::Date::now() as u64
    }
}
