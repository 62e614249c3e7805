#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod content;
mod cursor;
mod motion;
mod scope;
mod viewer;

#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
mod server;

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() {
    if let Err(err) = server::run().await {
        eprintln!("folio host failed: {err}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
