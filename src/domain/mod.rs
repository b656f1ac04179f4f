pub mod constants;
pub mod facility;

pub use facility::*;
