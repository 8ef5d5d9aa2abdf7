pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod constants;
pub mod error;
pub mod navigation;
pub mod pages;
pub mod runtime;

#[cfg(test)]
pub mod test_utils;

pub use api::{ApiResponse, AuthApi, HttpAuthApi, Rejection};
pub use app::App;
pub use config::{AuthUiConfig, CONFIG};
pub use error::{AuthUiError, Result};
pub use navigation::{BrowserNavigator, Navigator};
pub use pages::{AuthState, Panel};

#[cfg(target_arch = "wasm32")]
mod entry {
    use std::sync::Arc;

    use wasm_bindgen::prelude::*;

    use crate::{App, BrowserNavigator, HttpAuthApi, CONFIG};

    #[wasm_bindgen(start)]
    pub fn main_js() -> Result<(), JsValue> {
        #[cfg(feature = "develop")]
        {
            console_error_panic_hook::set_once();
            wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
        }

        let config = CONFIG.clone();
        let api = HttpAuthApi::new(&config).map_err(|err| JsValue::from_str(&err.to_string()))?;
        let app = App::new(config, Arc::new(api), Arc::new(BrowserNavigator));

        log::info!("Auth UI mounted");
        dominator::append_dom(&dominator::body(), App::render(app));
        Ok(())
    }
}
