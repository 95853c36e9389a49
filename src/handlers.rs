use crate::generator::{GenerateOutcome, generate};
use crate::share::build_share_link;
use crate::state::AppState;
use crate::types::{GenerateResponse, GenerationRequest, RequestStatus, ShareQuery, ShareResponse};
use actix_web::{HttpResponse, Responder, http::header, web};

pub async fn generate_post(
    state: web::Data<AppState>,
    body: web::Json<GenerationRequest>,
) -> impl Responder {
    log::info!("\n==== Generate Post Request Started ====");
    log::debug!(
        "Description length: {} chars, post length: {}, formality: {}, emojis: {}",
        body.description.chars().count(),
        body.post_length,
        body.formality_level,
        body.include_emojis
    );

    match generate(&state, body.into_inner()).await {
        GenerateOutcome::Succeeded(card) => {
            log::info!("Returning post to client");
            HttpResponse::Ok()
                .insert_header(("Cache-Control", "no-cache"))
                .json(GenerateResponse {
                    status: RequestStatus::Succeeded,
                    card,
                })
        }
        // Details were logged by the generator; the client only learns that it failed.
        GenerateOutcome::Failed(_) => HttpResponse::BadGateway().json(serde_json::json!({
            "status": RequestStatus::Failed,
            "error": "generation failed",
        })),
        GenerateOutcome::Superseded => HttpResponse::Conflict().json(serde_json::json!({
            "error": "Superseded by a newer request"
        })),
    }
}

pub async fn session(state: web::Data<AppState>) -> impl Responder {
    let view = state.session.lock().await.view();
    HttpResponse::Ok().json(view)
}

pub async fn share(state: web::Data<AppState>, query: web::Query<ShareQuery>) -> impl Responder {

    let url = match state.session.lock().await.post() {
        Some(post) => build_share_link(&post.text),
        _none => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": "No post generated yet"
            }));
        }
    };

    if query.open {
        HttpResponse::SeeOther()
            .insert_header((header::LOCATION, url))
            .finish()
    } else {
        HttpResponse::Ok().json(ShareResponse { url })
    }
}

pub async fn effects(state: web::Data<AppState>) -> impl Responder {
    let effects = state.session.lock().await.drain_effects();
    HttpResponse::Ok().json(effects)
}

pub async fn health(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "completionUrl": state.config.completion_url
    }))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/generate").route(web::post().to(generate_post)))
        .service(web::resource("/session").route(web::get().to(session)))
        .service(web::resource("/share").route(web::get().to(share)))
        .service(web::resource("/effects").route(web::get().to(effects)))
        .service(web::resource("/health").route(web::get().to(health)));
}
