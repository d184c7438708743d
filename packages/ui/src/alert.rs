//! Blocking browser dialogs. Off the browser they are logged instead.

#[cfg(target_arch = "wasm32")]
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn alert(message: &str) {
    tracing::warn!("{}", message);
}

/// Ask the user to confirm a destructive action.
#[cfg(target_arch = "wasm32")]
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn confirm(message: &str) -> bool {
    tracing::warn!("{} (auto-confirmed)", message);
    true
}
