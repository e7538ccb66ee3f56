use super::api::Api;
use super::request::{MatrixQuery, SubmitRequest};
use super::response::MessageResponse;
use crate::config::Config;
use crate::core::palette::Palette;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::web;

/// Names the admin performing a write when `require_admin` is on.
pub const ADMIN_HEADER: &str = "X-Admin-Login";

pub struct Server;

impl Server {
    pub async fn run(cfg: &Config, palette: Palette, bind: &str) -> AppResult<()> {
        // tables must exist before the first request
        let pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;
        drop(pool);

        let api = web::Data::new(Api::new(cfg, palette));
        log::info!(
            "starting HTTP server on {bind} (database {}, admin check {})",
            cfg.database,
            if api.require_admin() { "on" } else { "off" }
        );

        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(api.clone())
                .configure(configure)
        })
        .bind(bind)?
        .run()
        .await?;

        Ok(())
    }
}

/// Route table, shared by [`Server::run`] and tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::InvalidInput(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::InvalidInput(err.to_string()).into()),
    )
    .route("/", web::get().to(root))
        .route("/api/data", web::get().to(data))
        .route("/api/persons", web::get().to(persons))
        .route("/api/subjects", web::get().to(subjects))
        .route("/api/teams", web::get().to(teams))
        .route("/api/matrix", web::get().to(matrix))
        .route("/api/list_all", web::get().to(list_all))
        .route("/api/submit", web::post().to(submit));
}

// Route handlers
async fn root() -> HttpResponse {
    HttpResponse::Ok().content_type("text/plain").body("plan de charge")
}

async fn data(api: web::Data<Api>) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(api.rows().await?))
}

async fn persons(api: web::Data<Api>) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(api.persons().await?))
}

async fn subjects(api: web::Data<Api>) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(api.subjects().await?))
}

async fn teams(api: web::Data<Api>) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(api.teams().await?))
}

async fn matrix(api: web::Data<Api>, query: web::Query<MatrixQuery>) -> AppResult<HttpResponse> {
    let filter = query.into_inner().into_filter()?;
    Ok(HttpResponse::Ok().json(api.matrix(filter).await?))
}

async fn list_all(api: web::Data<Api>) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(api.list_all().await?))
}

async fn submit(
    api: web::Data<Api>,
    req: HttpRequest,
    body: web::Json<SubmitRequest>,
) -> AppResult<HttpResponse> {
    let login = req
        .headers()
        .get(ADMIN_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let entry = body.into_inner().into_entry()?;
    let outcome = api.submit(login, entry).await?;
    log::info!("submit: {}", outcome.message());

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: outcome.message().to_string(),
    }))
}
