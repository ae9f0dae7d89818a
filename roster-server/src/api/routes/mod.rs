pub mod members;

use actix_web::web::ServiceConfig;

pub fn configure(api: &mut ServiceConfig) {
    members::configure(api);
}
