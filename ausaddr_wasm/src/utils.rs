pub fn set_panic_hook() {
    // Panics show up in the browser console instead of as "unreachable executed".
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
