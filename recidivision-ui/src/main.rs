//! RecidiVision Web Client
//!
//! Recidivism-risk prediction front end built with Leptos (WASM).
//!
//! # Features
//!
//! - Credential login with the token kept in `localStorage`
//! - Guarded `/login` and `/predict` routes
//! - Prediction form with inline validation
//! - Results modal with probability chart and explanation
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Form rules, the route guard and result presentation come
//! from the `recidivision` core crate; this crate adds the views, browser
//! storage and the gloo-net HTTP client.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
