use crate::database::{implement_crud_repository, CrudRepository, DbResult};
use entity::{member, team};
use sea_orm::{ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder};

implement_crud_repository!(TeamRepository, team);

impl TeamRepository<'_> {
    pub async fn find_by_name(&self, name: &str) -> DbResult<Option<team::Model>> {
        team::Entity::find()
            .filter(team::Column::Name.eq(name))
            .one(self.db())
            .await
    }

    /// The members of a team. The team does not own the association, this
    /// is the inverse side of `member.team_id`.
    pub async fn find_members(&self, team: &team::Model) -> DbResult<Vec<member::Model>> {
        team.find_related(member::Entity)
            .order_by_asc(member::Column::Id)
            .all(self.db())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::testing;

    #[actix_web::test]
    async fn test_find_members_of_team() {
        let db = testing::database().await;
        let (team_a, team_b) = testing::four_members(&db).await;
        let repository = TeamRepository::new(&db);

        assert_eq!(
            repository.find_by_name("teamB").await.unwrap().as_ref(),
            Some(&team_b)
        );
        assert!(repository.find_by_name("teamC").await.unwrap().is_none());

        let members = repository.find_members(&team_a).await.unwrap();
        let names = members
            .iter()
            .map(|m| m.username.as_deref().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["member1", "member2"]);
    }

    #[actix_web::test]
    async fn test_change_team() {
        let db = testing::database().await;
        let (team_a, team_b) = testing::four_members(&db).await;
        let members = crate::database::MemberRepository::new(&db);
        let member1 = members.find_by_username("member1").await.unwrap().remove(0);

        let mut active: member::ActiveModel = member1.into();
        active.change_team(&team_b);
        let member1 = members.update(active).await.unwrap();
        assert!(member1.belongs_to(&team_b));

        let repository = TeamRepository::new(&db);
        assert_eq!(repository.find_members(&team_a).await.unwrap().len(), 1);
        assert_eq!(repository.find_members(&team_b).await.unwrap().len(), 3);
    }
}
