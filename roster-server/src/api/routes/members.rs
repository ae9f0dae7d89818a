use crate::api::error::RosterApiError;
use crate::api::models::{MemberSearchParams, MemberTeam, MemberTeamPage, PageParams};
use crate::api::{api_resource, api_scope, JsonResponse};
use crate::database::{CountStrategy, MemberRepository, MemberSearchCondition, PageRequest};
use crate::state::AppState;
use actix_web::web::{Data, ServiceConfig};
use actix_web::{web, HttpResponse};
use actix_web_validator::Query;

pub fn configure(api: &mut ServiceConfig) {
    api.service(
        api_scope("/v1")
            .service(api_resource("/members").route(web::get().to(search)))
            .service(api_resource("/page/member").route(web::get().to(search_page))),
    );
    api.service(
        api_scope("/v2")
            .service(api_resource("/page/member").route(web::get().to(search_page_counted))),
    );
}

/// Search members and their teams
#[utoipa::path(
    get,
    path = "/v1/members",
    tag = "Members",
    operation_id = "SearchMembers",
    params(MemberSearchParams),
    responses(
        (status = 200, description = "Members matching every given filter", body = [MemberTeam]),
        (status = 400, description = "Malformed query parameters"),
        (status = 500, description = "Database failure"),
    ),
)]
pub async fn search(
    state: Data<AppState>,
    params: Query<MemberSearchParams>,
) -> Result<HttpResponse, RosterApiError> {
    let condition = MemberSearchCondition::from(params.into_inner());
    if condition.is_unconstrained() {
        log::debug!(
            "Unconstrained member search, capped at {} rows",
            state.settings.search_limit
        );
    }
    let rows = MemberRepository::new(&state.database)
        .search(&condition, Some(state.settings.search_limit))
        .await?;
    Ok(rows
        .into_iter()
        .map(MemberTeam::from)
        .collect::<Vec<_>>()
        .json_response())
}

/// Search members a page at a time, skipping the count query when possible
#[utoipa::path(
    get,
    path = "/v1/page/member",
    tag = "Members",
    operation_id = "SearchMembersPage",
    params(MemberSearchParams, PageParams),
    responses(
        (status = 200, description = "One page of matching members", body = MemberTeamPage),
        (status = 400, description = "Malformed query parameters"),
        (status = 500, description = "Database failure"),
    ),
)]
pub async fn search_page(
    state: Data<AppState>,
    params: Query<MemberSearchParams>,
    page: Query<PageParams>,
) -> Result<HttpResponse, RosterApiError> {
    paged(&state, params.into_inner(), page.into_inner(), CountStrategy::Elide).await
}

/// Search members a page at a time, always counting the total
#[utoipa::path(
    get,
    path = "/v2/page/member",
    tag = "Members",
    operation_id = "SearchMembersPageCounted",
    params(MemberSearchParams, PageParams),
    responses(
        (status = 200, description = "One page of matching members", body = MemberTeamPage),
        (status = 400, description = "Malformed query parameters"),
        (status = 500, description = "Database failure"),
    ),
)]
pub async fn search_page_counted(
    state: Data<AppState>,
    params: Query<MemberSearchParams>,
    page: Query<PageParams>,
) -> Result<HttpResponse, RosterApiError> {
    paged(&state, params.into_inner(), page.into_inner(), CountStrategy::Always).await
}

async fn paged(
    state: &AppState,
    params: MemberSearchParams,
    page: PageParams,
    strategy: CountStrategy,
) -> Result<HttpResponse, RosterApiError> {
    let condition = MemberSearchCondition::from(params);
    let request = PageRequest::checked(
        page.page.unwrap_or_default(),
        page.size.unwrap_or(state.settings.default_page_size),
    )?
    .sorted(page.sort.unwrap_or_default());
    let result = MemberRepository::new(&state.database)
        .search_page(&condition, &request, strategy)
        .await?;
    Ok(MemberTeamPage::from(result).json_response())
}

#[cfg(test)]
mod tests {
    use crate::api::models::{MemberTeam, MemberTeamPage};
    use crate::api::{configure, testing as api_testing};
    use crate::database::testing;
    use actix_web::http::StatusCode;
    use actix_web::web::Data;
    use actix_web::{test, App};

    macro_rules! app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data(Data::new($state))
                    .configure(configure),
            )
            .await
        };
    }

    fn usernames(rows: &[MemberTeam]) -> Vec<&str> {
        rows.iter().map(|r| r.username.as_deref().unwrap()).collect()
    }

    #[actix_web::test]
    async fn test_search() {
        let state = api_testing::state(1000).await;
        testing::four_members(&state.database).await;
        let app = app!(state);

        let req = test::TestRequest::get()
            .uri("/v1/members?teamName=teamB&ageGoe=35&ageLoe=40")
            .to_request();
        let rows: Vec<MemberTeam> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(usernames(&rows), vec!["member4"]);
        assert_eq!(rows[0].team_name.as_deref(), Some("teamB"));

        let req = test::TestRequest::get()
            .uri("/v1/members?username=&teamName=&ageGoe=&ageLoe=")
            .to_request();
        let rows: Vec<MemberTeam> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(rows.len(), 4);
    }

    #[actix_web::test]
    async fn test_search_is_capped() {
        let state = api_testing::state(3).await;
        testing::four_members(&state.database).await;
        let app = app!(state);

        let req = test::TestRequest::get().uri("/v1/members").to_request();
        let rows: Vec<MemberTeam> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(usernames(&rows), vec!["member1", "member2", "member3"]);
    }

    #[actix_web::test]
    async fn test_search_page() {
        let state = api_testing::state(1000).await;
        testing::four_members(&state.database).await;
        let app = app!(state);

        let req = test::TestRequest::get()
            .uri("/v1/page/member?page=1&size=3&sort=username,desc")
            .to_request();
        let page: MemberTeamPage = test::call_and_read_body_json(&app, req).await;
        assert_eq!(usernames(&page.content), vec!["member1"]);
        assert_eq!(page.total_elements, 4);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.number, 1);
        assert_eq!(page.size, 3);
        assert_eq!(page.number_of_elements, 1);
        assert!(!page.first);
        assert!(page.last);
        assert_eq!(page.sort.to_string(), "username,desc");

        let req = test::TestRequest::get()
            .uri("/v2/page/member?teamName=teamA&size=1")
            .to_request();
        let page: MemberTeamPage = test::call_and_read_body_json(&app, req).await;
        assert_eq!(usernames(&page.content), vec!["member1"]);
        assert_eq!(page.total_elements, 2);
        assert!(page.first);
        assert!(!page.last);
    }

    #[actix_web::test]
    async fn test_search_page_at_last_addressable_offset() {
        let state = api_testing::state(1000).await;
        testing::four_members(&state.database).await;
        let app = app!(state);

        for uri in [
            "/v1/page/member?page=4611686018427387903&size=2",
            "/v2/page/member?page=4611686018427387903&size=2",
        ] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let page: MemberTeamPage = test::call_and_read_body_json(&app, req).await;
            assert!(page.empty, "{}", uri);
            assert_eq!(page.total_elements, 4, "{}", uri);
            assert_eq!(page.number, 4611686018427387903, "{}", uri);
            assert!(page.last, "{}", uri);
        }
    }

    #[actix_web::test]
    async fn test_bad_requests() {
        let state = api_testing::state(1000).await;
        let app = app!(state);

        for uri in [
            "/v1/members?ageGoe=old",
            "/v1/page/member?size=0",
            "/v1/page/member?sort=email",
        ] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", uri);
        }

        let req = test::TestRequest::get()
            .uri("/v1/page/member?page=9223372036854775807&size=2")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post().uri("/v1/members").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);

        let req = test::TestRequest::get().uri("/v1/teams").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
