//! Application settings
//!
//! Reads are public. Creating or changing a setting needs a session.

use actix_web::{web, HttpResponse};
use validator::Validate;

use ve_core::domain::value_objects::SettingQuery;
use ve_shared::{ApiResponse, PaginatedResponse};

use crate::app::{AppState, ServiceTypes};
use crate::dto::setting::{SettingListQuery, SettingRequest, SettingResponse};
use crate::handlers::error::ApiError;
use crate::middleware::auth::JwtAuth;

pub fn configure<T: ServiceTypes>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/settings")
            .route(web::get().to(list_settings::<T>))
            .route(web::post().to(add_setting::<T>).wrap(JwtAuth::new())),
    )
    .service(
        web::resource("/settings/{code}")
            .route(web::get().to(get_setting::<T>))
            .route(web::put().to(update_setting::<T>).wrap(JwtAuth::new())),
    );
}

/// Handler for GET /v1/settings
pub async fn list_settings<T: ServiceTypes>(
    state: web::Data<AppState<T>>,
    query: web::Query<SettingListQuery>,
) -> Result<HttpResponse, ApiError> {
    let query = SettingQuery::from(query.into_inner());
    let page = state.setting_service.list(&query).await?;

    let items: Vec<SettingResponse> = page.items.iter().map(SettingResponse::from).collect();
    let body = PaginatedResponse::new(items, page.pagination, page.total);

    Ok(HttpResponse::Ok().json(ApiResponse::success(body)))
}

pub async fn get_setting<T: ServiceTypes>(
    state: web::Data<AppState<T>>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let setting = state.setting_service.get_by_code(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(SettingResponse::from(&setting))))
}

/// Handler for POST /v1/settings (requires JWT)
pub async fn add_setting<T: ServiceTypes>(
    state: web::Data<AppState<T>>,
    request: web::Json<SettingRequest>,
) -> Result<HttpResponse, ApiError> {
    request.validate()?;

    let setting = state.setting_service.add(request.into_inner().into()).await?;
    log::info!("Added setting {} ({})", setting.set_key, setting.setting_code);

    Ok(HttpResponse::Ok().json(ApiResponse::success(SettingResponse::from(&setting))))
}

/// Handler for PUT /v1/settings/{code} (requires JWT)
pub async fn update_setting<T: ServiceTypes>(
    state: web::Data<AppState<T>>,
    path: web::Path<String>,
    request: web::Json<SettingRequest>,
) -> Result<HttpResponse, ApiError> {
    request.validate()?;

    let setting = state
        .setting_service
        .update(&path.into_inner(), request.into_inner().into())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(SettingResponse::from(&setting))))
}
