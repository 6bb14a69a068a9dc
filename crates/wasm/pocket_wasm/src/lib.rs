use wasm_bindgen::prelude::*;

/// Returns the version of the pocket_core package.
#[wasm_bindgen]
pub fn version() -> String {
    pocket_core::version().to_string()
}

/// Greeting for `text`, computed locally with the same rules as `/api/hello`.
#[wasm_bindgen]
pub fn greet(text: Option<String>) -> String {
    pocket_core::hello_world(text.as_deref()).greeting
}
