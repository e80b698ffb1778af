//! Console logging macros
//!
//! On wasm32 these forward to `web_sys::console`. Native builds (unit and
//! integration tests) compile the calls away so nothing touches imported JS
//! functions outside a browser.

#[cfg(target_arch = "wasm32")]
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {
        web_sys::console::log_1(&format!($($arg)*).into())
    };
}

#[cfg(not(target_arch = "wasm32"))]
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        if false {
            let _ = format!($($arg)*);
        }
    }};
}

#[cfg(target_arch = "wasm32")]
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        web_sys::console::warn_1(&format!($($arg)*).into())
    };
}

#[cfg(not(target_arch = "wasm32"))]
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {{
        if false {
            let _ = format!($($arg)*);
        }
    }};
}
