/// Full-page navigation away from the auth screens.
#[cfg_attr(test, mockall::automock)]
pub trait Navigator {
    fn redirect(&self, path: &str);
}

pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn redirect(&self, path: &str) {
        log::info!("Redirecting to {}", path);
        let Some(window) = web_sys::window() else {
            log::warn!("No window to redirect to {}", path);
            return;
        };
        if let Err(err) = window.location().set_href(path) {
            log::warn!("Redirect to {} failed: {:?}", path, err);
        }
    }
}
