use crate::api::models::*;
use crate::database;

impl From<MemberSearchParams> for database::MemberSearchCondition {
    fn from(params: MemberSearchParams) -> Self {
        Self {
            username: params.username,
            team_name: params.team_name,
            age_goe: params.age_goe,
            age_loe: params.age_loe,
        }
    }
}

impl From<database::MemberTeamRow> for MemberTeam {
    fn from(row: database::MemberTeamRow) -> Self {
        Self {
            member_id: row.member_id,
            username: row.username,
            age: row.age,
            team_id: row.team_id,
            team_name: row.team_name,
        }
    }
}

impl From<database::Page<database::MemberTeamRow>> for MemberTeamPage {
    fn from(page: database::Page<database::MemberTeamRow>) -> Self {
        let page = page.map(MemberTeam::from);
        Self {
            total_elements: page.total,
            total_pages: page.total_pages(),
            number: page.number(),
            size: page.size(),
            number_of_elements: page.content.len() as u64,
            first: page.is_first(),
            last: page.is_last(),
            empty: page.content.is_empty(),
            sort: page.request.sort,
            content: page.content,
        }
    }
}
