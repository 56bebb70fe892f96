//! Profile and address book of the signed-in user
//!
//! Every route here sits behind [`JwtAuth`]; the account is always the one
//! named by the session, never by the request.

use actix_web::{web, HttpResponse};
use validator::Validate;

use ve_shared::ApiResponse;

use crate::app::{AppState, ServiceTypes};
use crate::dto::user::{
    UpdatePasswordRequest, UpdateProfileRequest, UserAddressRequest, UserAddressResponse, UserProfileResponse,
};
use crate::handlers::error::ApiError;
use crate::middleware::auth::{AuthContext, JwtAuth};

pub fn configure<T: ServiceTypes>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .wrap(JwtAuth::new())
            .service(
                web::resource("/profile")
                    .route(web::get().to(get_profile::<T>))
                    .route(web::put().to(update_profile::<T>)),
            )
            .route("/update-password", web::put().to(update_password::<T>))
            .service(
                web::resource("/addresses")
                    .route(web::get().to(list_addresses::<T>))
                    .route(web::post().to(add_address::<T>)),
            )
            .service(
                web::resource("/addresses/{code}")
                    .route(web::get().to(get_address::<T>))
                    .route(web::put().to(update_address::<T>))
                    .route(web::delete().to(delete_address::<T>)),
            ),
    );
}

/// Handler for GET /v1/users/profile
pub async fn get_profile<T: ServiceTypes>(
    state: web::Data<AppState<T>>,
    auth: AuthContext,
) -> Result<HttpResponse, ApiError> {
    let account = state.user_service.get_profile(&auth.user_identifier).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(UserProfileResponse::from(&account))))
}

/// Handler for PUT /v1/users/profile
pub async fn update_profile<T: ServiceTypes>(
    state: web::Data<AppState<T>>,
    auth: AuthContext,
    request: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse, ApiError> {
    request.validate()?;

    let account = state
        .user_service
        .update_profile(&auth.user_identifier, request.into_inner().into())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(UserProfileResponse::from(&account))))
}

/// Handler for PUT /v1/users/update-password
pub async fn update_password<T: ServiceTypes>(
    state: web::Data<AppState<T>>,
    auth: AuthContext,
    request: web::Json<UpdatePasswordRequest>,
) -> Result<HttpResponse, ApiError> {
    request.validate()?;

    state
        .auth_service
        .update_password(
            &auth.user_identifier,
            &request.old_password,
            &request.new_password,
            &request.confirm_password,
        )
        .await?;
    log::info!("User {} changed password", auth.user_identifier);

    Ok(HttpResponse::Ok().json(ApiResponse::ok()))
}

pub async fn list_addresses<T: ServiceTypes>(
    state: web::Data<AppState<T>>,
    auth: AuthContext,
) -> Result<HttpResponse, ApiError> {
    let addresses = state.user_service.list_addresses(&auth.user_identifier).await?;
    let body: Vec<UserAddressResponse> = addresses.iter().map(UserAddressResponse::from).collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(body)))
}

pub async fn get_address<T: ServiceTypes>(
    state: web::Data<AppState<T>>,
    auth: AuthContext,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let address = state
        .user_service
        .get_address(&auth.user_identifier, &path.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(UserAddressResponse::from(&address))))
}

pub async fn add_address<T: ServiceTypes>(
    state: web::Data<AppState<T>>,
    auth: AuthContext,
    request: web::Json<UserAddressRequest>,
) -> Result<HttpResponse, ApiError> {
    request.validate()?;

    let address = state
        .user_service
        .add_address(&auth.user_identifier, request.title(), &request.full_address)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(UserAddressResponse::from(&address))))
}

pub async fn update_address<T: ServiceTypes>(
    state: web::Data<AppState<T>>,
    auth: AuthContext,
    path: web::Path<String>,
    request: web::Json<UserAddressRequest>,
) -> Result<HttpResponse, ApiError> {
    request.validate()?;

    let address = state
        .user_service
        .update_address(
            &auth.user_identifier,
            &path.into_inner(),
            request.title(),
            &request.full_address,
        )
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(UserAddressResponse::from(&address))))
}

/// Handler for DELETE /v1/users/addresses/{code}
///
/// The row is soft-deleted and disappears from later reads.
pub async fn delete_address<T: ServiceTypes>(
    state: web::Data<AppState<T>>,
    auth: AuthContext,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    state
        .user_service
        .delete_address(&auth.user_identifier, &path.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok()))
}
