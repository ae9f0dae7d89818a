mod condition;
mod member;
mod page;
mod seed;
mod team;

pub use condition::MemberSearchCondition;
pub use member::{MemberRepository, MemberTeamRow};
pub use page::{
    CountStrategy, InvalidSortError, Page, PageOutOfRangeError, PageRequest, Sort, SortBy,
};
pub use seed::seed;
pub use team::TeamRepository;

use async_trait::async_trait;
use migration::{Migrator, MigratorTrait};
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, ModelTrait, PrimaryKeyTrait,
};

pub type DbResult<T> = Result<T, DbErr>;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl From<SortOrder> for sea_orm::Order {
    fn from(s: SortOrder) -> Self {
        match s {
            SortOrder::Ascending => Self::Asc,
            SortOrder::Descending => Self::Desc,
        }
    }
}

/// Opens the connection pool and brings the schema up to date.
pub async fn connect(database_url: &str) -> DbResult<DatabaseConnection> {
    let mut options = ConnectOptions::new(database_url.to_owned());
    options.sqlx_logging_level(log::LevelFilter::Debug);
    let db = Database::connect(options).await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}

#[async_trait(?Send)]
pub trait CrudRepository<E, M, A>
where
    E: EntityTrait<Model = M>,
    M: ModelTrait<Entity = E> + IntoActiveModel<A>,
    A: ActiveModelBehavior + ActiveModelTrait<Entity = E> + Send,
{
    fn db(&self) -> &DatabaseConnection;

    async fn find_by_id(
        &self,
        id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType,
    ) -> DbResult<Option<M>> {
        E::find_by_id(id).one(self.db()).await
    }

    async fn delete<'a>(&self, model: M) -> DbResult<bool>
    where
        M: 'a,
    {
        model.delete(self.db()).await.map(|r| r.rows_affected > 0)
    }

    async fn delete_by_id(
        &self,
        id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType,
    ) -> DbResult<bool> {
        E::delete_by_id(id)
            .exec(self.db())
            .await
            .map(|r| r.rows_affected > 0)
    }

    async fn update<'a>(&self, active_model: A) -> DbResult<M>
    where
        A: 'a,
    {
        active_model.update(self.db()).await
    }

    async fn insert<'a>(&self, active_model: A) -> DbResult<M>
    where
        A: 'a,
    {
        active_model.insert(self.db()).await
    }
}

/// Generates a structure that implements `CrudRepository`
/// # Arguments
/// * `name` - The name of the implementation to generate
/// * `module` - The sea_orm entity module
macro_rules! implement_crud_repository {
    ( $name:ident, $module:ident ) => {
        pub struct $name<'l>(&'l sea_orm::DatabaseConnection);

        impl<'l> $name<'l> {
            pub fn new(connection: &'l sea_orm::DatabaseConnection) -> Self {
                Self(connection)
            }
        }

        impl crate::database::CrudRepository<$module::Entity, $module::Model, $module::ActiveModel>
            for $name<'_>
        {
            fn db(&self) -> &sea_orm::DatabaseConnection {
                &self.0
            }
        }
    };
}
use implement_crud_repository;
