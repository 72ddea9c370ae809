//! Commands - frontend to backend bridge

mod sales;
mod settings;

pub use sales::*;
pub use settings::*;
