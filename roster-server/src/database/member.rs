use crate::database::{
    implement_crud_repository, CountStrategy, CrudRepository, DbResult, MemberSearchCondition,
    Page, PageRequest, Sort, SortBy, SortOrder,
};
use entity::{member, team};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, EntityTrait, FromQueryResult, Order, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Select,
};

implement_crud_repository!(MemberRepository, member);

/// A member flattened together with its (optional) team.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct MemberTeamRow {
    pub member_id: i32,
    pub username: Option<String>,
    pub age: i32,
    pub team_id: Option<i32>,
    pub team_name: Option<String>,
}

impl MemberRepository<'_> {
    pub async fn find_all(&self) -> DbResult<Vec<member::Model>> {
        member::Entity::find()
            .order_by_asc(member::Column::Id)
            .all(self.db())
            .await
    }

    pub async fn find_by_username(&self, username: &str) -> DbResult<Vec<member::Model>> {
        member::Entity::find()
            .filter(member::Column::Username.eq(username))
            .order_by_asc(member::Column::Id)
            .all(self.db())
            .await
    }

    /// All rows of the member/team join matching `condition`, in id order.
    /// `limit` caps the number of rows returned.
    pub async fn search(
        &self,
        condition: &MemberSearchCondition,
        limit: Option<u64>,
    ) -> DbResult<Vec<MemberTeamRow>> {
        log::debug!("Searching members {:?} (limit {:?})", condition, limit);
        projection(condition)
            .order_by_asc(member::Column::Id)
            .limit(limit)
            .into_model::<MemberTeamRow>()
            .all(self.db())
            .await
    }

    /// Same filter as [`Self::search`] but loads whole entities, fetching
    /// each member's team in the same query.
    pub async fn search_members(
        &self,
        condition: &MemberSearchCondition,
    ) -> DbResult<Vec<(member::Model, Option<team::Model>)>> {
        member::Entity::find()
            .find_also_related(team::Entity)
            .filter(condition.to_condition())
            .order_by_asc(member::Column::Id)
            .all(self.db())
            .await
    }

    pub async fn search_page(
        &self,
        condition: &MemberSearchCondition,
        request: &PageRequest,
        strategy: CountStrategy,
    ) -> DbResult<Page<MemberTeamRow>> {
        log::debug!(
            "Searching members {:?} offset {} size {} sort {} ({:?})",
            condition,
            request.offset(),
            request.size(),
            request.sort,
            strategy
        );
        let content = sorted(projection(condition), request.sort)
            .offset(request.offset())
            .limit(request.size())
            .into_model::<MemberTeamRow>()
            .all(self.db())
            .await?;
        match strategy {
            CountStrategy::Always => {
                let total = self.count(condition).await?;
                Ok(Page::new(content, *request, total))
            }
            CountStrategy::Elide => {
                Page::with_count(content, *request, || self.count(condition)).await
            }
        }
    }

    /// Number of rows matching `condition`. The team table is only joined
    /// when a clause needs it, since every member has at most one team.
    pub async fn count(&self, condition: &MemberSearchCondition) -> DbResult<u64> {
        let mut query = member::Entity::find();
        if condition.needs_team_join() {
            query = query.left_join(team::Entity);
        }
        query
            .filter(condition.to_condition())
            .count(self.db())
            .await
    }

    /// Sets the username of every member younger than `age`.
    pub async fn rename_younger_than(&self, age: i32, username: &str) -> DbResult<u64> {
        member::Entity::update_many()
            .col_expr(member::Column::Username, Expr::value(username))
            .filter(member::Column::Age.lt(age))
            .exec(self.db())
            .await
            .map(|r| r.rows_affected)
    }

    pub async fn add_age(&self, delta: i32) -> DbResult<u64> {
        member::Entity::update_many()
            .col_expr(member::Column::Age, Expr::col(member::Column::Age).add(delta))
            .exec(self.db())
            .await
            .map(|r| r.rows_affected)
    }

    pub async fn delete_older_than(&self, age: i32) -> DbResult<u64> {
        member::Entity::delete_many()
            .filter(member::Column::Age.gt(age))
            .exec(self.db())
            .await
            .map(|r| r.rows_affected)
    }
}

fn projection(condition: &MemberSearchCondition) -> Select<member::Entity> {
    member::Entity::find()
        .select_only()
        .column_as(member::Column::Id, "member_id")
        .column(member::Column::Username)
        .column(member::Column::Age)
        .column_as(team::Column::Id, "team_id")
        .column_as(team::Column::Name, "team_name")
        .left_join(team::Entity)
        .filter(condition.to_condition())
}

/// Orders by the requested property, then by member id so that pages are
/// stable across requests.
fn sorted(select: Select<member::Entity>, sort: Sort) -> Select<member::Entity> {
    let order: Order = sort.order.into();
    let select = match sort.by {
        SortBy::Id => return select.order_by(member::Column::Id, order),
        SortBy::Username => select.order_by(member::Column::Username, order),
        SortBy::Age => select.order_by(member::Column::Age, order),
        SortBy::TeamName => select.order_by(team::Column::Name, order),
    };
    select.order_by(member::Column::Id, SortOrder::Ascending.into())
}
