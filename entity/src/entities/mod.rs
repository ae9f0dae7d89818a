pub mod prelude;

pub mod member;
pub mod team;
