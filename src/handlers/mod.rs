pub mod pegawai;

use actix_web::{web, HttpResponse};

use crate::db::pegawai::PegawaiStore;
use crate::errors::AppError;

/// Body extraction failures get the same `{"error": ...}` shape as every other failure.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(format!("Invalid request body: {}", err)).into())
}

async fn method_not_allowed() -> Result<HttpResponse, AppError> {
    Err(AppError::MethodNotAllowed("Method not allowed".to_string()))
}

async fn not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound("Not found".to_string()))
}

/// The pegawai routes over store `S`, mounted under the original `/api/pegawai` path and under `/records`.
pub fn routes<S: PegawaiStore + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .default_service(web::to(not_found));

    for prefix in ["/api/pegawai", "/records"] {
        cfg.service(
            web::resource(prefix)
                .route(web::get().to(pegawai::get_pegawai_list::<S>))
                .route(web::post().to(pegawai::create_pegawai::<S>))
                .default_service(web::to(method_not_allowed)),
        )
        .service(
            web::resource(format!("{}/{{id}}", prefix))
                .route(web::get().to(pegawai::get_pegawai::<S>))
                .route(web::put().to(pegawai::update_pegawai::<S>))
                .route(web::delete().to(pegawai::delete_pegawai::<S>))
                .default_service(web::to(method_not_allowed)),
        );
    }
}
