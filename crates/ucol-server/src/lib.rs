//! University information site.
//!
//! actix-web frontend over the catalog store and the chat gateway:
//! static institutional pages, a CRUD admin surface for academic
//! programs, and a chat form forwarded to the generative-language
//! service.
//!
//! ## Submodules
//!
//! - [`handlers`] — Route handlers
//! - [`views`] — Inline HTML rendering

pub mod handlers;
pub mod views;

use actix_web::App;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::web;
use ucol_chat::Gateway;
use ucol_chat::Preamble;
use ucol_core::Settings;
use ucol_store::Store;

/// Register the full route table on a service config. Shared between
/// [`run`] and the integration tests.
#[rustfmt::skip]
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::index))
        .route("/vision", web::get().to(handlers::vision))
        .route("/mision", web::get().to(handlers::mision))
        .route("/chat", web::get().to(handlers::chat))
        .route("/predict", web::post().to(handlers::predict))
        .route("/carreras/vista", web::get().to(handlers::carreras_vista))
        .route("/programas", web::get().to(handlers::programas))
        .route("/agregar_programa", web::post().to(handlers::agregar_programa))
        .route("/editar/{id}", web::get().to(handlers::editar_form))
        .route("/editar/{id}", web::post().to(handlers::editar))
        .route("/eliminar/{id}", web::post().to(handlers::eliminar))
        .route("/health", web::get().to(handlers::health));
}

/// Resolve settings, initialize the store schema, and serve until
/// shutdown.
pub async fn run() -> anyhow::Result<()> {
    let settings = Settings::from_env();
    let store = Store::open(&settings.db_path)?;
    store.initialize(&settings.schema_path)?;
    let preamble = Preamble::load(&settings.prompt_path)?;
    let gateway = Gateway::new(
        settings.chat_endpoint.clone(),
        settings.chat_model.clone(),
        settings.api_key.clone(),
        &preamble,
    );
    let store = web::Data::new(store);
    let gateway = web::Data::new(gateway);
    log::info!("starting university site on {}", settings.bind);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .app_data(store.clone())
            .app_data(gateway.clone())
            .configure(routes)
    })
    .bind(&settings.bind)?
    .run()
    .await?;
    Ok(())
}
