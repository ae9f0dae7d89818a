use crate::database::Sort;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Default, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct MemberSearchParams {
    /// Exact username
    #[serde(default)]
    pub username: Option<String>,
    /// Exact team name
    #[serde(default)]
    pub team_name: Option<String>,
    /// Minimum age (inclusive)
    #[serde(default, deserialize_with = "empty_as_none")]
    pub age_goe: Option<i32>,
    /// Maximum age (inclusive)
    #[serde(default, deserialize_with = "empty_as_none")]
    pub age_loe: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// Zero based page number
    #[serde(default, deserialize_with = "empty_as_none")]
    pub page: Option<u64>,
    /// Rows per page
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(range(min = 1, max = 2000))]
    pub size: Option<u64>,
    /// `property[,asc|desc]` where property is one of id, username, age, teamName
    #[serde(default, deserialize_with = "empty_as_none")]
    #[param(value_type = Option<String>)]
    pub sort: Option<Sort>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemberTeam {
    pub member_id: i32,
    pub username: Option<String>,
    pub age: i32,
    pub team_id: Option<i32>,
    pub team_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemberTeamPage {
    pub content: Vec<MemberTeam>,
    pub total_elements: u64,
    pub total_pages: u64,
    pub number: u64,
    pub size: u64,
    pub number_of_elements: u64,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
    #[schema(value_type = String)]
    pub sort: Sort,
}

/// Binds a missing or blank query parameter to `None`.
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => v.parse().map(Some).map_err(serde::de::Error::custom),
    }
}
