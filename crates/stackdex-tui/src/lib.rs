//! Interactive TUI for browsing the stack catalog
//!
//! Architecture:
//! - Main thread: event loop, filtering and rendering
//! - Loader thread: reads the catalog document once at startup
//! - Communication via an mpsc channel (catalog result -> main thread)
//!
//! Layout:
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │ Search (/): [____________________]                          │
//! ├─────────────────────┬───────────────────────────────────────┤
//! │ Stacks [4/6]        │ ⚙ Rust (axum) [backend]  cargo        │
//! │                     │ Async HTTP services...                │
//! │ > Rust (axum)       │                                       │
//! │   Go (gRPC)         │ Build                                 │
//! │   Java (Spring)     │   $ cargo build --release             │
//! │   Terraform (AWS)   │ Dockerfile                            │
//! │                     │ ⧉ FROM rust:1.85-slim ...             │
//! ├─────────────────────┴───────────────────────────────────────┤
//! │ type: backend │ tool: any │ /: search  Enter: copy  q: quit │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod app;
mod clipboard;
mod debounce;
mod theme;
mod ui;

pub use app::run;
