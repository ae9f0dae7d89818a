use entity::{member, team};
use sea_orm::sea_query::SimpleExpr;
use sea_orm::{ColumnTrait, Condition};

/// Filter on the member/team join. Every field is optional and an absent
/// (or blank) field places no constraint on the result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberSearchCondition {
    pub username: Option<String>,
    pub team_name: Option<String>,
    pub age_goe: Option<i32>,
    pub age_loe: Option<i32>,
}

impl MemberSearchCondition {
    /// The AND of every present clause. With no clauses the condition is
    /// empty and places no constraint on the rows.
    pub fn to_condition(&self) -> Condition {
        Condition::all()
            .add_option(username_eq(self.username.as_deref()))
            .add_option(team_name_eq(self.team_name.as_deref()))
            .add_option(age_goe(self.age_goe))
            .add_option(age_loe(self.age_loe))
    }

    /// Whether any clause references the team table.
    pub fn needs_team_join(&self) -> bool {
        team_name_eq(self.team_name.as_deref()).is_some()
    }

    pub fn is_unconstrained(&self) -> bool {
        self.to_condition().is_empty()
    }

    /// Evaluates the condition against an already loaded row, with the same
    /// semantics as the SQL it generates.
    pub fn matches(&self, username: Option<&str>, age: i32, team_name: Option<&str>) -> bool {
        let text_eq = |wanted: Option<&str>, actual: Option<&str>| match wanted {
            Some(w) if has_text(w) => actual == Some(w),
            _ => true,
        };
        text_eq(self.username.as_deref(), username)
            && text_eq(self.team_name.as_deref(), team_name)
            && self.age_goe.map_or(true, |goe| age >= goe)
            && self.age_loe.map_or(true, |loe| age <= loe)
    }
}

/// True when the string contains at least one non-whitespace character.
fn has_text(s: &str) -> bool {
    !s.trim().is_empty()
}

pub fn username_eq(username: Option<&str>) -> Option<SimpleExpr> {
    username
        .filter(|u| has_text(u))
        .map(|u| member::Column::Username.eq(u))
}

pub fn team_name_eq(team_name: Option<&str>) -> Option<SimpleExpr> {
    team_name
        .filter(|t| has_text(t))
        .map(|t| team::Column::Name.eq(t))
}

pub fn age_goe(age_goe: Option<i32>) -> Option<SimpleExpr> {
    age_goe.map(|age| member::Column::Age.gte(age))
}

pub fn age_loe(age_loe: Option<i32>) -> Option<SimpleExpr> {
    age_loe.map(|age| member::Column::Age.lte(age))
}
