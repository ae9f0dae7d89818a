use crate::entities::{member, team};
use sea_orm::ActiveValue::{NotSet, Set};

impl member::ActiveModel {
    /// A member that has not been persisted yet, optionally placed in a team.
    pub fn new_member(username: &str, age: i32, team: Option<&team::Model>) -> Self {
        Self {
            id: NotSet,
            username: Set(Some(username.to_owned())),
            age: Set(age),
            team_id: Set(team.map(|t| t.id)),
        }
    }

    /// Moves the member into `team`. The member row owns the foreign key, so
    /// this is the only side that needs saving.
    pub fn change_team(&mut self, team: &team::Model) {
        self.team_id = Set(Some(team.id));
    }
}

impl member::Model {
    pub fn belongs_to(&self, team: &team::Model) -> bool {
        self.team_id == Some(team.id)
    }
}
