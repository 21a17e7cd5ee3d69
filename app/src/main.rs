use dlmm_app::App;
use leptos::prelude::*;
use tracing::Level;
use tracing_subscriber_wasm::MakeConsoleWriter;

const MAX_LEVEL: Level = if cfg!(debug_assertions) {
    Level::DEBUG
} else {
    Level::INFO
};

fn main() {
    console_error_panic_hook::set_once();

    // wasm32 has no clock, so timestamps are off
    tracing_subscriber::fmt()
        .with_writer(MakeConsoleWriter::default().map_trace_level_to(Level::DEBUG))
        .with_max_level(MAX_LEVEL)
        .with_ansi(false)
        .without_time()
        .init();

    mount_to_body(|| view! { <App /> })
}
