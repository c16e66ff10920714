//! Binary entrypoint for the browser-hosted component showcase.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    ui_showcase::mount();
}

#[cfg(not(all(target_arch = "wasm32", feature = "csr")))]
fn main() {
    eprintln!(
        "This binary is intended for the browser/WASM workflow. Build `ui_showcase_app` for wasm32 with the `csr` feature and serve it with `index.html`."
    );
}
