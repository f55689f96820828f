//! HTTP front end.
//!
//! Exposes the calculator over three JSON endpoints:
//!
//! | Route            | Operation  |
//! |------------------|------------|
//! | `POST /add`      | `add`      |
//! | `POST /subtract` | `subtract` |
//! | `POST /multiply` | `multiply` |
//!
//! Each accepts `{"firstNumber": int, "secondNumber": int}` and answers
//! `{"result": int}`. A missing operand reads as `0`. Bodies that fail to
//! deserialize are rejected by axum's `Json` extractor with its standard 4xx
//! response.
//!
//! # Usage
//!
//! ```no_run
//! use mega_calculator::{config::ServerConfig, web};
//!
//! # async fn run() -> mega_calculator::Result<()> {
//! web::serve(&ServerConfig::default(), async {
//!     let _ = tokio::signal::ctrl_c().await;
//! })
//! .await?;
//! # Ok(())
//! # }
//! ```

pub mod dto;
pub mod handlers;
pub mod routes;
pub mod server;

pub use routes::router;
pub use server::{serve, serve_listener};
