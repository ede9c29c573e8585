//! DollarShop: a small image editor core.
//!
//! [`session::Session`] is the entry point. It owns the image buffer, the
//! [`canvas::Viewport`] that maps pointer positions onto it, the brush state,
//! and the status line. Filters and resizes live under [`ops`]; remote photo
//! search under [`remote`].

pub mod canvas;
pub mod cli;
pub mod io;
pub mod logger;
pub mod ops;
pub mod remote;
pub mod session;
pub mod settings;
