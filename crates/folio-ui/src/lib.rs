//! Folio UI - portfolio single-page application

#![allow(clippy::too_many_arguments)]

pub mod api;
pub mod app;
pub mod auth;
pub mod config;
pub mod content;
pub mod gate;
pub mod panels;
pub mod platform;
pub mod routes;
pub mod scene;
pub mod scroll;
pub mod state;
pub mod view;
pub mod viewport;
pub mod widgets;

pub use app::FolioApp;
pub use config::SiteConfig;
pub use routes::RouteTable;
pub use viewport::{ViewportClassifier, ViewportMode};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    tracing::info!("folio-ui {} loaded", env!("CARGO_PKG_VERSION"));

    wasm_bindgen_futures::spawn_local(async {
        let canvas = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("folio_canvas"))
            .and_then(|e| {
                use wasm_bindgen::JsCast;
                e.dyn_into::<web_sys::HtmlCanvasElement>().ok()
            })
            .expect("folio_canvas element missing");

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|cc| Ok(Box::new(FolioApp::new(cc)))),
            )
            .await
            .expect("Failed to start eframe");
    });
}
