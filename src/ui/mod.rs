pub mod app;
pub mod form;

pub use app::App;
