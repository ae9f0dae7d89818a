pub use super::member::Entity as Member;
pub use super::team::Entity as Team;
