use crate::database::DbResult;
use entity::{member, team};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, TransactionTrait};

pub const SAMPLE_MEMBERS: i32 = 100;

/// Populates an empty database with two teams and a hundred members,
/// alternating between the teams. Returns false if there was already data.
pub async fn seed(db: &DatabaseConnection) -> DbResult<bool> {
    if member::Entity::find().count(db).await? > 0 {
        log::info!("Database already contains members, not seeding");
        return Ok(false);
    }
    let txn = db.begin().await?;
    let team_a = team::ActiveModel::new_team("teamA").insert(&txn).await?;
    let team_b = team::ActiveModel::new_team("teamB").insert(&txn).await?;
    for i in 0..SAMPLE_MEMBERS {
        let team = if i % 2 == 0 { &team_a } else { &team_b };
        member::ActiveModel::new_member(&format!("member{}", i), i, Some(team))
            .insert(&txn)
            .await?;
    }
    txn.commit().await?;
    log::info!("Seeded {} members", SAMPLE_MEMBERS);
    Ok(true)
}
