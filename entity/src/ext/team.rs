use crate::entities::team;
use sea_orm::ActiveValue::{NotSet, Set};

impl team::ActiveModel {
    pub fn new_team(name: &str) -> Self {
        Self {
            id: NotSet,
            name: Set(name.to_owned()),
        }
    }
}
