//! Learning Paths Page Enhancer
//!
//! WebAssembly companion to the server-rendered learning-path pages:
//! toasts, reveal/progress/counter animations, ripples, confetti, form
//! validation, and the enroll and generate-path actions.
//!
//! Layout:
//! - `app`: bootstrap, binds everything once the DOM is ready
//! - `handlers`: enroll button and generate form
//! - `api`: the two backend calls
//! - `components`: Leptos views (toast, skeleton)
//! - `exports`: functions exposed to other page scripts

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod exports;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod validator;
