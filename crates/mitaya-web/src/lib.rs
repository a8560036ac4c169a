//! mitaya-web - Leptos CSR frontend for the Mitaya restaurant site
//!
//! Thin reactive shell over `mitaya-core`: a fragment-based router, an
//! application store provided through context, localStorage persistence for
//! the cart, and the page/component tree.

#![recursion_limit = "512"]

pub mod app;
pub mod components;
pub mod pages;
pub mod router;
pub mod state;
pub mod storage;

pub use app::App;
pub use router::{provide_router, use_router, RouterContext};
pub use state::{provide_app_store, use_app, AppStore};
