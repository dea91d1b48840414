//! 浏览器存储封装
//!
//! 直接使用 `web_sys::Storage`。存储不可用 (隐私模式、配额已满) 时
//! 读取返回 `None`，写入返回 `false`，不会 panic。

use barrest_shell::storage::KeyValueStore;

/// 两个存储层
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserStorage {
    /// `localStorage`
    Local,
    /// `sessionStorage`，随标签页关闭而清空
    Session,
}

impl BrowserStorage {
    fn storage(&self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        match self {
            BrowserStorage::Local => window.local_storage().ok()?,
            BrowserStorage::Session => window.session_storage().ok()?,
        }
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> bool {
        self.storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }

    fn delete(&self, key: &str) -> bool {
        self.storage()
            .and_then(|s| s.remove_item(key).ok())
            .is_some()
    }
}
