use crate::api::api_resource;
use actix_web::web::ServiceConfig;
use actix_web::{web, HttpResponse};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(schemas(
        crate::api::models::MemberTeam,
        crate::api::models::MemberTeamPage
    )),
    paths(
        crate::api::routes::members::search,
        crate::api::routes::members::search_page,
        crate::api::routes::members::search_page_counted
    ),
    tags((name = "Members", description = "Dynamic member search"))
)]
struct UtoipaSpec;

/// YAML serialized OpenAPI spec generated from the Utoipa annotations.
pub fn api_yaml() -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(&UtoipaSpec::openapi())
}

/// Serves the OpenAPI spec as JSON
pub fn configure(api: &mut ServiceConfig) {
    api.service(api_resource("/api-doc/openapi.json").route(web::get().to(openapi_json)));
}

async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(UtoipaSpec::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[test]
    fn test_api_spec_lists_routes() {
        let yaml = api_yaml().expect("Unable to serialize api spec");
        for path in ["/v1/members:", "/v1/page/member:", "/v2/page/member:"] {
            assert!(yaml.contains(path), "{} missing from spec", path);
        }
        for operation in ["SearchMembers", "SearchMembersPage", "SearchMembersPageCounted"] {
            assert!(yaml.contains(operation), "{} missing from spec", operation);
        }
        assert!(yaml.contains("MemberTeamPage"));
    }

    #[actix_web::test]
    async fn test_spec_is_served() {
        let app = test::init_service(App::new().configure(configure)).await;
        let req = test::TestRequest::get()
            .uri("/api-doc/openapi.json")
            .to_request();
        let spec: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert!(spec["paths"]["/v1/members"]["get"].is_object());
    }
}
