use crate::views;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::http::header;
use actix_web::http::header::ContentType;
use actix_web::web;
use serde::Deserialize;
use ucol_chat::Gateway;
use ucol_store::CatalogRepository;
use ucol_store::Mutation;
use ucol_store::Store;
use ucol_store::StoreError;

/// Form payload for creating or editing a program.
#[derive(Debug, Deserialize)]
pub struct ProgramForm {
    pub description: String,
    pub duration: i64,
    pub price: f64,
}

/// Form payload for the chat box.
#[derive(Debug, Deserialize)]
pub struct ChatForm {
    pub prompt: String,
}

fn page(body: String) -> HttpResponse {
    HttpResponse::Ok().content_type(ContentType::html()).body(body)
}

fn redirect(to: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, to))
        .finish()
}

pub async fn health(store: web::Data<Store>) -> impl Responder {
    match store
        .probe()
        .inspect_err(|e| log::error!("health check failed: {}", e))
    {
        Ok(_) => HttpResponse::Ok().body("ok"),
        Err(_) => HttpResponse::ServiceUnavailable().body("store unavailable"),
    }
}

pub async fn index() -> impl Responder {
    page(views::index())
}

pub async fn vision() -> impl Responder {
    page(views::vision())
}

pub async fn mision() -> impl Responder {
    page(views::mision())
}

pub async fn chat() -> impl Responder {
    page(views::chat(None, None))
}

pub async fn predict(gateway: web::Data<Gateway>, form: web::Form<ChatForm>) -> impl Responder {
    let reply = gateway.complete(&form.prompt).await;
    page(views::chat(Some(&form.prompt), Some(&reply)))
}

/// Public read-only listing. Read errors degrade to an empty listing
/// with an operator log line.
pub async fn carreras_vista(store: web::Data<Store>) -> impl Responder {
    let offerings = store.list_offerings().unwrap_or_else(|e| {
        log::error!("listing offerings failed: {}", e);
        Vec::new()
    });
    page(views::carreras(&offerings))
}

/// Admin listing with the store-assigned ids.
pub async fn programas(store: web::Data<Store>) -> impl Responder {
    let programs = store.list_programs().unwrap_or_else(|e| {
        log::error!("listing programs failed: {}", e);
        Vec::new()
    });
    page(views::programas(&programs))
}

pub async fn agregar_programa(
    store: web::Data<Store>,
    form: web::Form<ProgramForm>,
) -> impl Responder {
    match store.insert_program(&form.description, form.duration, form.price) {
        Ok(id) => {
            log::info!("program {} created: {}", id, form.description);
            redirect("/programas")
        }
        Err(StoreError::DuplicateProgram) => HttpResponse::Conflict()
            .content_type(ContentType::html())
            .body("Error: Este programa ya existe. <a href='/programas'>Volver</a>"),
        Err(e) => {
            log::error!("creating program failed: {}", e);
            HttpResponse::InternalServerError().body("Error al agregar el programa.")
        }
    }
}

pub async fn editar_form(store: web::Data<Store>, path: web::Path<i64>) -> impl Responder {
    let id = path.into_inner();
    match store.get_program(id) {
        Ok(Some(program)) => page(views::editar(&program)),
        Ok(None) => HttpResponse::NotFound().body("Carrera no encontrada"),
        Err(e) => {
            log::error!("loading program {} failed: {}", id, e);
            HttpResponse::InternalServerError().body("Error al consultar la carrera")
        }
    }
}

pub async fn editar(
    store: web::Data<Store>,
    path: web::Path<i64>,
    form: web::Form<ProgramForm>,
) -> impl Responder {
    let id = path.into_inner();
    match store.update_program(id, &form.description, form.duration, form.price) {
        Ok(Mutation::Applied) => redirect("/programas"),
        Ok(Mutation::Missing) => HttpResponse::NotFound().body("Carrera no encontrada"),
        Err(e) => {
            log::error!("updating program {} failed: {}", id, e);
            HttpResponse::InternalServerError().body("Error al actualizar la carrera")
        }
    }
}

pub async fn eliminar(store: web::Data<Store>, path: web::Path<i64>) -> impl Responder {
    let id = path.into_inner();
    match store.delete_program(id) {
        Ok(Mutation::Applied) => redirect("/programas"),
        Ok(Mutation::Missing) => HttpResponse::NotFound().body("Carrera no encontrada"),
        Err(e) => {
            log::error!("deleting program {} failed: {}", id, e);
            HttpResponse::InternalServerError().body("Error al eliminar la carrera")
        }
    }
}
