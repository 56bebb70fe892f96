//! Shared fixtures for the HTTP API tests
//!
//! The application is assembled exactly as in production, but over the
//! in-memory repositories and the logging mailer.

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::{body::MessageBody, dev::ServiceResponse, test, web};
use serde_json::Value;

use ve_api::app::Repositories;
use ve_api::{AppState, ServiceTypes};
use ve_core::domain::entities::{Account, VerificationPurpose};
use ve_core::repositories::{
    MockAccountRepository, MockAddressRepository, MockSettingRepository, MockVerificationRepository,
};
use ve_core::services::{BcryptPasswordHasher, PasswordHasher};
use ve_infra::mail::LogMailService;
use ve_shared::config::JwtConfig;
use ve_shared::{AppConfig, CorsConfig};

pub const PASSWORD: &str = "s3cret-pass";

pub struct TestServices;

impl ServiceTypes for TestServices {
    type Accounts = MockAccountRepository;
    type Verifications = MockVerificationRepository;
    type Addresses = MockAddressRepository;
    type Settings = MockSettingRepository;
    type Mailer = LogMailService;
}

pub struct TestContext {
    pub state: web::Data<AppState<TestServices>>,
    pub accounts: MockAccountRepository,
    pub verifications: MockVerificationRepository,
    pub mailer: Arc<LogMailService>,
    pub cors: CorsConfig,
}

pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.auth.jwt = JwtConfig::new("api-test-secret");
    config.auth.bcrypt_cost = 4;
    config.auth.password_change_cost = 4;
    config.mail.web_url = "https://app.example.com/".to_string();
    config
}

pub fn test_context() -> TestContext {
    let accounts = MockAccountRepository::new();
    let verifications = MockVerificationRepository::new(accounts.clone());
    let mailer = Arc::new(LogMailService::new());

    let repositories = Repositories::<TestServices> {
        accounts: Arc::new(accounts.clone()),
        verifications: Arc::new(verifications.clone()),
        addresses: Arc::new(MockAddressRepository::new()),
        settings: Arc::new(MockSettingRepository::new()),
        mailer: mailer.clone(),
    };
    let state = AppState::new(repositories, &test_config(), None).expect("test services");

    TestContext {
        state: web::Data::new(state),
        accounts,
        verifications,
        mailer,
        cors: CorsConfig::default(),
    }
}

/// Seed an account that can log in with [`PASSWORD`]
pub async fn seed_account(ctx: &TestContext, email: &str, verified: bool) -> Account {
    let hash = BcryptPasswordHasher.hash(PASSWORD, 4).expect("hash");
    let mut account = Account::new("Alice", Some("Liddell".to_string()), email, hash);
    account.is_verified = verified;
    ctx.accounts.seed(account).await
}

/// Most recent unused token issued to `email` for `purpose`
pub async fn issued_token(ctx: &TestContext, email: &str, purpose: VerificationPurpose) -> String {
    let mut tokens: Vec<_> = ctx
        .verifications
        .all()
        .await
        .into_iter()
        .filter(|t| t.email == email && t.purpose == purpose && !t.is_used)
        .collect();
    tokens.sort_by_key(|t| t.created_at);
    tokens.pop().expect("a token was issued").token
}

/// Session token for `account`, as the login route would hand out
pub fn bearer(ctx: &TestContext, account: &Account) -> String {
    let credential = ctx
        .state
        .token_service
        .generate(&account.user_identifier, &account.email)
        .expect("session token");
    format!("Bearer {}", credential.token)
}

pub async fn read_json<B: MessageBody>(response: ServiceResponse<B>) -> Value {
    test::read_body_json(response).await
}
