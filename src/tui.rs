//! Interactive dashboard.

mod app;
mod screens;

pub use app::run;
