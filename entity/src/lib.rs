mod entities;
pub mod ext;

pub use entities::*;
