pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::alumni;
pub use modules::auth;
pub use modules::employment;

use crate::alumni::adapter::outgoing::alumni_repository_postgres::AlumniRepositoryPostgres;
use crate::alumni::application::use_cases::{
    browse_alumni::{BrowseAlumniUseCase, IBrowseAlumniUseCase},
    cohort_counts::{CohortCountsUseCase, ICohortCountsUseCase},
    create_alumni::{CreateAlumniUseCase, ICreateAlumniUseCase},
    delete_alumni::{DeleteAlumniUseCase, IDeleteAlumniUseCase},
    get_alumni::{GetAlumniUseCase, IGetAlumniUseCase},
    multi_job_alumni::{IMultiJobAlumniUseCase, MultiJobAlumniUseCase},
    update_alumni::{IUpdateAlumniUseCase, UpdateAlumniUseCase},
};
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::bcrypt_hasher::BcryptHasher;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::auth::application::use_cases::{
    login_user::{ILoginUserUseCase, LoginUserUseCase},
    register_user::{IRegisterUserUseCase, RegisterUserUseCase},
};
use crate::employment::adapter::outgoing::employment_archiver_postgres::EmploymentArchiverPostgres;
use crate::employment::adapter::outgoing::employment_repository_postgres::EmploymentRepositoryPostgres;
use crate::employment::application::use_cases::{
    create_employment::{CreateEmploymentUseCase, ICreateEmploymentUseCase},
    delete_employment::{DeleteEmploymentUseCase, IDeleteEmploymentUseCase},
    discard_employment::{DiscardEmploymentUseCase, IDiscardEmploymentUseCase},
    get_employment::{GetEmploymentUseCase, IGetEmploymentUseCase},
    list_employment::{IListEmploymentUseCase, ListEmploymentUseCase},
    list_own_employment::{IListOwnEmploymentUseCase, ListOwnEmploymentUseCase},
    list_trash::{IListTrashUseCase, ListTrashUseCase},
    purge_employment::{IPurgeEmploymentUseCase, PurgeEmploymentUseCase},
    restore_employment::{IRestoreEmploymentUseCase, RestoreEmploymentUseCase},
    update_employment::{IUpdateEmploymentUseCase, UpdateEmploymentUseCase},
};

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Clone)]
pub struct AppState {
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub register_user_use_case: Arc<dyn IRegisterUserUseCase + Send + Sync>,

    pub browse_alumni_use_case: Arc<dyn IBrowseAlumniUseCase + Send + Sync>,
    pub get_alumni_use_case: Arc<dyn IGetAlumniUseCase + Send + Sync>,
    pub create_alumni_use_case: Arc<dyn ICreateAlumniUseCase + Send + Sync>,
    pub update_alumni_use_case: Arc<dyn IUpdateAlumniUseCase + Send + Sync>,
    pub delete_alumni_use_case: Arc<dyn IDeleteAlumniUseCase + Send + Sync>,
    pub cohort_counts_use_case: Arc<dyn ICohortCountsUseCase + Send + Sync>,
    pub multi_job_alumni_use_case: Arc<dyn IMultiJobAlumniUseCase + Send + Sync>,

    pub list_employment_use_case: Arc<dyn IListEmploymentUseCase + Send + Sync>,
    pub list_own_employment_use_case: Arc<dyn IListOwnEmploymentUseCase + Send + Sync>,
    pub get_employment_use_case: Arc<dyn IGetEmploymentUseCase + Send + Sync>,
    pub create_employment_use_case: Arc<dyn ICreateEmploymentUseCase + Send + Sync>,
    pub update_employment_use_case: Arc<dyn IUpdateEmploymentUseCase + Send + Sync>,
    pub delete_employment_use_case: Arc<dyn IDeleteEmploymentUseCase + Send + Sync>,
    pub discard_employment_use_case: Arc<dyn IDiscardEmploymentUseCase + Send + Sync>,
    pub list_trash_use_case: Arc<dyn IListTrashUseCase + Send + Sync>,
    pub restore_employment_use_case: Arc<dyn IRestoreEmploymentUseCase + Send + Sync>,
    pub purge_employment_use_case: Arc<dyn IPurgeEmploymentUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    dotenvy::dotenv().ok();

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());

    let server_url = format!("{host}:{port}");
    info!("Server run on: {server_url}");

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Signing config is read once here and handed to the token service;
    // nothing downstream touches the environment.
    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let password_hasher = Arc::new(BcryptHasher::new());

    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let login_user_use_case = LoginUserUseCase::new(
        user_repo.clone(),
        password_hasher.clone(),
        Arc::new(jwt_service.clone()),
    );
    let register_user_use_case = RegisterUserUseCase::new(user_repo, password_hasher);

    let alumni_repo = AlumniRepositoryPostgres::new(Arc::clone(&db_arc));
    let browse_alumni_use_case = BrowseAlumniUseCase::new(alumni_repo.clone());
    let get_alumni_use_case = GetAlumniUseCase::new(alumni_repo.clone());
    let create_alumni_use_case = CreateAlumniUseCase::new(alumni_repo.clone());
    let update_alumni_use_case = UpdateAlumniUseCase::new(alumni_repo.clone());
    let delete_alumni_use_case = DeleteAlumniUseCase::new(alumni_repo.clone());
    let cohort_counts_use_case = CohortCountsUseCase::new(alumni_repo.clone());
    let multi_job_alumni_use_case = MultiJobAlumniUseCase::new(alumni_repo);

    let employment_repo = EmploymentRepositoryPostgres::new(Arc::clone(&db_arc));
    let list_employment_use_case = ListEmploymentUseCase::new(employment_repo.clone());
    let list_own_employment_use_case = ListOwnEmploymentUseCase::new(employment_repo.clone());
    let get_employment_use_case = GetEmploymentUseCase::new(employment_repo.clone());
    let create_employment_use_case = CreateEmploymentUseCase::new(employment_repo.clone());
    let update_employment_use_case = UpdateEmploymentUseCase::new(employment_repo.clone());
    let delete_employment_use_case = DeleteEmploymentUseCase::new(employment_repo);

    let archiver = EmploymentArchiverPostgres::new(Arc::clone(&db_arc));
    let discard_employment_use_case = DiscardEmploymentUseCase::new(archiver.clone());
    let list_trash_use_case = ListTrashUseCase::new(archiver.clone());
    let restore_employment_use_case = RestoreEmploymentUseCase::new(archiver.clone());
    let purge_employment_use_case = PurgeEmploymentUseCase::new(archiver);

    let state = AppState {
        login_user_use_case: Arc::new(login_user_use_case),
        register_user_use_case: Arc::new(register_user_use_case),

        browse_alumni_use_case: Arc::new(browse_alumni_use_case),
        get_alumni_use_case: Arc::new(get_alumni_use_case),
        create_alumni_use_case: Arc::new(create_alumni_use_case),
        update_alumni_use_case: Arc::new(update_alumni_use_case),
        delete_alumni_use_case: Arc::new(delete_alumni_use_case),
        cohort_counts_use_case: Arc::new(cohort_counts_use_case),
        multi_job_alumni_use_case: Arc::new(multi_job_alumni_use_case),

        list_employment_use_case: Arc::new(list_employment_use_case),
        list_own_employment_use_case: Arc::new(list_own_employment_use_case),
        get_employment_use_case: Arc::new(get_employment_use_case),
        create_employment_use_case: Arc::new(create_employment_use_case),
        update_employment_use_case: Arc::new(update_employment_use_case),
        delete_employment_use_case: Arc::new(delete_employment_use_case),
        discard_employment_use_case: Arc::new(discard_employment_use_case),
        list_trash_use_case: Arc::new(list_trash_use_case),
        restore_employment_use_case: Arc::new(restore_employment_use_case),
        purge_employment_use_case: Arc::new(purge_employment_use_case),
    };

    let token_provider_arc: Arc<dyn TokenProvider> = Arc::new(jwt_service);
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(crate::shared::api::json_config::custom_json_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    // Alumni; the literal aggregate paths go first so they never match as
    // an {id} segment.
    cfg.service(crate::alumni::adapter::incoming::web::routes::cohort_counts_handler);
    cfg.service(crate::alumni::adapter::incoming::web::routes::multi_job_alumni_handler);
    cfg.service(crate::alumni::adapter::incoming::web::routes::list_alumni_handler);
    cfg.service(crate::alumni::adapter::incoming::web::routes::get_alumni_handler);
    cfg.service(crate::alumni::adapter::incoming::web::routes::create_alumni_handler);
    cfg.service(crate::alumni::adapter::incoming::web::routes::update_alumni_handler);
    cfg.service(crate::alumni::adapter::incoming::web::routes::delete_alumni_handler);
    // Employment; same ordering rule for /trash, /restore, /hard, /rbac.
    cfg.service(crate::employment::adapter::incoming::web::routes::list_trash_handler);
    cfg.service(crate::employment::adapter::incoming::web::routes::list_own_employment_handler);
    cfg.service(crate::employment::adapter::incoming::web::routes::restore_employment_handler);
    cfg.service(crate::employment::adapter::incoming::web::routes::purge_employment_handler);
    cfg.service(crate::employment::adapter::incoming::web::routes::discard_employment_handler);
    cfg.service(crate::employment::adapter::incoming::web::routes::list_employment_handler);
    cfg.service(crate::employment::adapter::incoming::web::routes::get_employment_handler);
    cfg.service(crate::employment::adapter::incoming::web::routes::create_employment_handler);
    cfg.service(crate::employment::adapter::incoming::web::routes::update_employment_handler);
    cfg.service(crate::employment::adapter::incoming::web::routes::delete_employment_handler);
    // API docs
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}")
            .url("/api-docs/openapi.json", crate::api::openapi::ApiDoc::openapi()),
    );
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
