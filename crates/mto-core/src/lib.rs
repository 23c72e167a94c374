pub mod compose;
pub mod logging;
pub mod opener;
pub mod settings;
