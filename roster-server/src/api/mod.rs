mod converters;
mod error;
mod models;
mod openapi;
mod routes;

pub use openapi::api_yaml;

use crate::api::error::RosterApiError;
use actix_web::http::StatusCode;
use actix_web::web::ServiceConfig;
use actix_web::{web, HttpResponse};
use http_api_problem::ApiError;
use serde::Serialize;

pub fn configure(api: &mut ServiceConfig) {
    api.app_data(
        actix_web_validator::QueryConfig::default()
            .error_handler(|e, _| RosterApiError::from(e).into()),
    );
    api.configure(routes::configure);
    api.configure(openapi::configure);
    api.service(api_resource("/").route(web::get().to(index)));
}

pub trait JsonResponse {
    fn json_response(self) -> HttpResponse;
}

impl<T: Serialize> JsonResponse for T {
    fn json_response(self) -> HttpResponse {
        HttpResponse::Ok().json(self)
    }
}

fn api_scope(path: &str) -> actix_web::Scope {
    web::scope(path).default_service(web::route().to(|| async {
        ApiError::builder(StatusCode::NOT_FOUND)
            .finish()
            .into_actix_web_response()
    }))
}

fn api_resource(path: &str) -> actix_web::Resource {
    web::resource(path).default_service(web::route().to(|| async {
        ApiError::builder(StatusCode::METHOD_NOT_ALLOWED)
            .finish()
            .into_actix_web_response()
    }))
}

async fn index() -> String {
    "Roster API".to_string()
}

#[cfg(test)]
pub mod testing {
    use crate::database::testing;
    use crate::settings::Settings;
    use crate::state::AppState;
    use std::sync::Arc;

    pub async fn state(search_limit: u64) -> AppState {
        let settings = Settings {
            api_socket: "127.0.0.1:0".parse().unwrap(),
            database_url: "sqlite::memory:".to_string(),
            search_limit,
            default_page_size: 20,
        };
        AppState::new(Arc::new(settings), testing::database().await)
    }
}
