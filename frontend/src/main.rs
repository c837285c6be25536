//! Entry point for the WASM application

pub fn main() {
    dietitian_site::mount()
}
