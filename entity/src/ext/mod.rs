mod member;
mod team;
