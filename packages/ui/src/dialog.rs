//! Blocking user dialogs.

/// Show a blocking alert with the given message.
///
/// On native builds (tests, tooling) the message goes to the log instead.
pub fn alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!("alert: {message}");
    }
}
