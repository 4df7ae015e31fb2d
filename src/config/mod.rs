//! Configuration module
//!
//! Scalar settings load through `prefer`; the structured volume-filter
//! rules come from a raw read of the config file (see `filter`).

mod filter;

pub use filter::MountRules;

use prefer::Config as PreferConfig;

pub struct Config {
    inner: PreferConfig,
}

impl Config {
    pub async fn load() -> prefer::Result<Self> {
        let inner = prefer::load("diskman/config").await?;
        Ok(Self { inner })
    }

    async fn get_bool(&self, key: &str) -> Option<bool> {
        self.inner
            .get(key)
            .await
            .ok()
            .and_then(|v: prefer::ConfigValue| v.as_bool())
    }

    /// Force colored output on or off. Unset means "only on a tty".
    pub async fn color(&self) -> Option<bool> {
        self.get_bool("color").await
    }

    /// Clear the screen between menus. Unset means "only on a tty".
    pub async fn clear_screen(&self) -> Option<bool> {
        self.get_bool("clear_screen").await
    }

    /// Show dot-prefixed entries in directory listings.
    pub async fn show_hidden(&self) -> bool {
        self.get_bool("show_hidden").await.unwrap_or(false)
    }
}
