mod utils;

use wasm_bindgen::prelude::*;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn start() {
    utils::set_panic_hook();
}

#[wasm_bindgen(js_name = ParseLine1)]
pub fn parse_line1(address: Option<String>) -> Option<String> {
    ausaddr_lib::parse_line1(address.as_deref())
}

#[wasm_bindgen(js_name = ParseLine2)]
pub fn parse_line2(address: Option<String>) -> Option<String> {
    ausaddr_lib::parse_line2(address.as_deref())
}

#[wasm_bindgen(js_name = ParseLine3)]
pub fn parse_line3(address: Option<String>) -> Option<String> {
    ausaddr_lib::parse_line3(address.as_deref())
}

#[wasm_bindgen(js_name = ParseCity)]
pub fn parse_city(address: Option<String>) -> Option<String> {
    ausaddr_lib::parse_city(address.as_deref())
}

#[wasm_bindgen(js_name = ParseState)]
pub fn parse_state(address: Option<String>) -> Option<String> {
    ausaddr_lib::parse_state(address.as_deref())
}

#[wasm_bindgen(js_name = ParseZip)]
pub fn parse_zip(address: Option<String>) -> Option<String> {
    ausaddr_lib::parse_zip(address.as_deref())
}
