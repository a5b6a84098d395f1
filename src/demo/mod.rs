//! Loading the Kitchen API demo endpoints

mod fetch;

pub use fetch::load_background;
