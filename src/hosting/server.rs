use crate::Error;
use crate::dto::*;
use crate::session::Manager;
use crate::tree::Branch;
use crate::tree::Record;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;
use tokio::sync::Mutex;

type Shared = web::Data<Mutex<Manager>>;

pub struct Server;

impl Server {
    pub async fn run(manager: Manager, addr: &str) -> Result<(), std::io::Error> {
        let state = web::Data::new(Mutex::new(manager));
        log::info!("starting hosting server on {}", addr);
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(state.clone())
                .configure(routes)
        })
        .workers(crate::WORKERS)
        .bind(addr)?
        .run()
        .await
    }
}

/// Mounts the API under `/api`, with JSON errors for bad bodies and unknown paths.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|e, _| {
        let body = HttpResponse::BadRequest().json(ApiMessage::fail(e.to_string()));
        actix_web::error::InternalError::from_response(e, body).into()
    }))
    .service(
        web::scope("/api")
            .route("/game/start", web::post().to(start))
            .route("/game/answer", web::post().to(answer))
            .route("/game/guess-result", web::post().to(verdict))
            .route("/game/learn", web::post().to(learn))
            .route("/game/end", web::post().to(end))
            .route("/tree/display", web::get().to(display))
            .route("/tree/path", web::get().to(path))
            .route("/tree/data", web::get().to(data))
            .route("/stats", web::get().to(stats))
            .route("/animals", web::get().to(animals))
            .route("/health", web::get().to(health)),
    )
    .default_service(web::to(missing));
}

/// Picks the status for a failed manager call.
/// Engine refusals are the client's doing; anything else is ours.
fn refuse(e: anyhow::Error) -> HttpResponse {
    let body = ApiMessage::fail(e.to_string());
    match e.downcast_ref::<Error>() {
        Some(Error::AlreadyGuessing | Error::StillAsking) => HttpResponse::Conflict().json(body),
        Some(Error::EmptyItem | Error::EmptyQuestion) => HttpResponse::BadRequest().json(body),
        Some(_) | None => {
            log::error!("request failed: {:#}", e);
            HttpResponse::InternalServerError().json(body)
        }
    }
}

fn yes_or_no(text: &str) -> Result<Branch, HttpResponse> {
    Branch::try_from(text).map_err(|_| {
        HttpResponse::BadRequest().json(ApiMessage::fail(
            "Invalid answer. Please answer with yes or no.",
        ))
    })
}

async fn start(manager: Shared) -> impl Responder {
    let progress = manager.lock().await.start();
    HttpResponse::Ok().json(ApiStart::from(progress))
}

async fn answer(manager: Shared, body: web::Json<SubmitAnswer>) -> impl Responder {
    let branch = match yes_or_no(&body.answer) {
        Ok(branch) => branch,
        Err(response) => return response,
    };
    match manager.lock().await.answer(branch) {
        Ok(progress) => HttpResponse::Ok().json(ApiProgress::from(progress)),
        Err(e) => refuse(e),
    }
}

async fn verdict(manager: Shared, body: web::Json<SubmitGuessResult>) -> impl Responder {
    match manager
        .lock()
        .await
        .verdict(body.was_correct, &body.actual_animal)
    {
        Ok(()) => HttpResponse::Ok().json(ApiMessage::ok("Guess result recorded")),
        Err(e) => refuse(e),
    }
}

async fn learn(manager: Shared, body: web::Json<TeachAnimal>) -> impl Responder {
    if body.new_animal.trim().is_empty() || body.question.trim().is_empty() {
        return HttpResponse::BadRequest()
            .json(ApiMessage::fail("Animal name and question are required"));
    }
    let branch = match yes_or_no(&body.answer_for_new) {
        Ok(branch) => branch,
        Err(response) => return response,
    };
    match manager
        .lock()
        .await
        .teach(&body.new_animal, &body.question, branch)
    {
        Ok(ref round) => HttpResponse::Ok().json(ApiLearned::from(round)),
        Err(e) => refuse(e),
    }
}

async fn end(manager: Shared) -> impl Responder {
    match manager.lock().await.finish() {
        Ok(ref round) => HttpResponse::Ok().json(ApiEnd::from(round)),
        Err(e) => refuse(e),
    }
}

async fn display(manager: Shared) -> impl Responder {
    let tree = manager.lock().await.game().display();
    HttpResponse::Ok().json(ApiTreeText {
        success: true,
        tree,
    })
}

async fn path(manager: Shared) -> impl Responder {
    let path = manager.lock().await.path();
    HttpResponse::Ok().json(ApiPath {
        success: true,
        path,
    })
}

async fn data(manager: Shared) -> impl Responder {
    let tree = Record::from(manager.lock().await.game());
    HttpResponse::Ok().json(ApiTreeData {
        success: true,
        tree,
    })
}

async fn stats(manager: Shared) -> impl Responder {
    let report = manager.lock().await.report();
    HttpResponse::Ok().json(ApiStats::from(report))
}

async fn animals(manager: Shared) -> impl Responder {
    let animals = manager.lock().await.items();
    HttpResponse::Ok().json(ApiAnimals::from(animals))
}

async fn health() -> impl Responder {
    HttpResponse::Ok().json(ApiHealth::default())
}

async fn missing() -> impl Responder {
    HttpResponse::NotFound().json(ApiMessage::fail("Endpoint not found"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use serde_json::Value;
    use serde_json::json;

    /// a whole round over HTTP: start, answer to a guess, miss, teach
    #[actix_web::test]
    async fn round_over_http() {
        let dir = tempfile::tempdir().expect("temp dir");
        let state = web::Data::new(Mutex::new(Manager::open(dir.path())));
        let app = test::init_service(App::new().app_data(state.clone()).configure(routes)).await;

        let req = test::TestRequest::post().uri("/api/game/start").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["question"], "Is it a mammal?");

        let mut guess = Value::Null;
        for _ in 0..8 {
            let req = test::TestRequest::post()
                .uri("/api/game/answer")
                .set_json(json!({ "answer": "yes" }))
                .to_request();
            let body: Value = test::call_and_read_body_json(&app, req).await;
            if body["reached_guess"] == true {
                guess = body["guess"].clone();
                break;
            }
        }
        assert_eq!(guess, "Whale");

        let req = test::TestRequest::post()
            .uri("/api/game/answer")
            .set_json(json!({ "answer": "no" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let req = test::TestRequest::post()
            .uri("/api/game/guess-result")
            .set_json(json!({ "was_correct": false, "actual_animal": "Orca" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::post()
            .uri("/api/game/learn")
            .set_json(json!({
                "new_animal": "Orca",
                "question": "Is it black and white?",
                "answer_for_new": "oui",
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["tree_updated"], true);

        let req = test::TestRequest::get().uri("/api/animals").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["count"], 24);

        let req = test::TestRequest::get().uri("/api/stats").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["statistics"]["games"]["total"], 1);
        assert_eq!(body["statistics"]["tree"]["leaf_count"], 24);
        assert_eq!(body["statistics"]["tree"]["total_nodes"], 47);
    }

    /// bad words, blank fields and unknown paths are refused as JSON
    #[actix_web::test]
    async fn refusals() {
        let dir = tempfile::tempdir().expect("temp dir");
        let state = web::Data::new(Mutex::new(Manager::open(dir.path())));
        let app = test::init_service(App::new().app_data(state).configure(routes)).await;

        let req = test::TestRequest::post()
            .uri("/api/game/answer")
            .set_json(json!({ "answer": "maybe" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri("/api/game/learn")
            .set_json(json!({ "new_animal": " ", "question": "Q?", "answer_for_new": "yes" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri("/api/game/learn")
            .set_json(json!({ "new_animal": "Orca", "question": "Q?", "answer_for_new": "yes" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let req = test::TestRequest::get().uri("/api/nowhere").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "healthy");
    }
}
