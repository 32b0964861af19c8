//! Binary entrypoint for the browser-hosted portfolio site.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    portfolio_site::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "This binary is intended for the browser/WASM workflow. Build `portfolio_site_app` for wasm32 with the `csr` feature (for example with `trunk serve`)."
    );
}
