mod support;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::{SocketAddr, TcpListener};
use std::sync::{Arc, Mutex};

use base::setting::Api;
use common::fetch::{AnalyticsApi, ApiError, Client, ReleaseApi};
use common::form::FormState;
use common::notify::Recorder;
use common::Dashboard;
use entity::{NewRelease, ReleaseStatus, ReleaseType, StatusUpdate};

/// Captures what the client sent and replays canned answers.
#[derive(Clone)]
struct Backend {
    queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
    bodies: Arc<Mutex<Vec<Value>>>,
    create_reply: Arc<Mutex<(StatusCode, Value)>>,
}

impl Default for Backend {
    fn default() -> Self {
        Self {
            queries: Arc::default(),
            bodies: Arc::default(),
            create_reply: Arc::new(Mutex::new((
                StatusCode::CREATED,
                json!({"id": 7, "status": "created"}),
            ))),
        }
    }
}

async fn list_releases(
    State(backend): State<Backend>,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    let status = query.get("status").cloned();
    backend.queries.lock().unwrap().push(query);
    let all = json!([
        {"id": 2, "title": "Night Dreams", "artist_name": "DJ Alex", "release_type": "single",
         "status": "pending", "release_date": "2025-11-05", "genre": "House", "track_count": 1,
         "cover_url": null, "upc": null},
        {"id": 1, "title": "First Album", "artist_name": "Andrey Volkov", "release_type": "album",
         "status": "published", "release_date": null, "genre": "Rock", "track_count": 9,
         "cover_url": null, "upc": "0123"}
    ]);
    let releases: Vec<Value> = all
        .as_array()
        .unwrap()
        .iter()
        .filter(|r| status.as_deref().map_or(true, |s| r["status"] == s))
        .cloned()
        .collect();
    Json(json!({ "releases": releases }))
}

async fn create_release(
    State(backend): State<Backend>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    backend.bodies.lock().unwrap().push(body);
    let (status, reply) = backend.create_reply.lock().unwrap().clone();
    (status, Json(reply))
}

async fn update_status(State(backend): State<Backend>, Json(body): Json<Value>) -> Json<Value> {
    backend.bodies.lock().unwrap().push(body);
    Json(json!({"status": "updated"}))
}

async fn analytics(
    State(backend): State<Backend>,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    backend.queries.lock().unwrap().push(query);
    Json(json!({
        "analytics": [
            {"date": "2025-11-03", "platform": "Spotify", "country": "RU", "streams": 22100},
            {"release_id": 1, "streams": 50}
        ],
        "financials": [
            {"id": 1, "amount": 12.5, "platform": "Spotify", "period_start": "2025-10-01",
             "period_end": "2025-10-31", "status": "pending", "release_title": "First Album"}
        ],
        "summary": {"total_streams": 22150, "balance": 3.5, "total_paid": 0}
    }))
}

async fn broken() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "<html>upstream crashed</html>")
}

fn serve(backend: Backend) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.set_nonblocking(true).unwrap();
    let addr = listener.local_addr().unwrap();
    let app = Router::new()
        .route(
            "/releases",
            get(list_releases).post(create_release).put(update_status),
        )
        .route("/analytics", get(analytics))
        .route("/broken", get(broken).post(broken))
        .with_state(backend);
    tokio::spawn(async move {
        axum::Server::from_tcp(listener)
            .unwrap()
            .serve(app.into_make_service())
            .await
            .unwrap();
    });
    addr
}

fn api(addr: SocketAddr, releases: &str) -> Api {
    Api {
        releases_url: url::Url::parse(&format!("http://{}/{}", addr, releases)).unwrap(),
        analytics_url: url::Url::parse(&format!("http://{}/analytics", addr)).unwrap(),
        user_id: support::USER_ID,
        timeout: Some(10),
    }
}

fn new_release(genre: &str) -> NewRelease {
    NewRelease {
        title: "Winter Tapes".to_string(),
        artist_name: "Andrey Volkov".to_string(),
        release_type: ReleaseType::Ep,
        genre: genre.to_string(),
        release_date: None,
        user_id: support::USER_ID,
    }
}

#[tokio::test]
async fn fetches_releases_for_the_user() {
    let backend = Backend::default();
    let addr = serve(backend.clone());
    let client = Client::new(&api(addr, "releases")).unwrap();

    let releases = client.fetch_releases(1, None).await.unwrap();
    assert_eq!(releases.len(), 2);
    assert_eq!(releases[0].title, "Night Dreams");
    assert_eq!(releases[1].upc.as_deref(), Some("0123"));

    let pending = client
        .fetch_releases(1, Some(ReleaseStatus::Pending))
        .await
        .unwrap();
    assert_eq!(pending.len(), 1);

    let queries = backend.queries.lock().unwrap().clone();
    assert_eq!(queries[0].get("user_id").map(String::as_str), Some("1"));
    assert_eq!(queries[0].get("status"), None);
    assert_eq!(queries[1].get("status").map(String::as_str), Some("pending"));
}

#[tokio::test]
async fn creation_posts_the_draft_with_user_id() {
    let backend = Backend::default();
    let addr = serve(backend.clone());
    let client = Client::new(&api(addr, "releases")).unwrap();

    let created = client.create_release(&new_release("Lo-fi")).await.unwrap();
    assert_eq!(created.map(|c| c.id), Some(7));

    let body = backend.bodies.lock().unwrap()[0].clone();
    assert_eq!(
        body,
        json!({
            "title": "Winter Tapes",
            "artist_name": "Andrey Volkov",
            "release_type": "ep",
            "genre": "Lo-fi",
            "release_date": null,
            "user_id": 1
        })
    );
}

#[tokio::test]
async fn error_body_message_is_kept() {
    let backend = Backend::default();
    *backend.create_reply.lock().unwrap() =
        (StatusCode::BAD_REQUEST, json!({"error": "Genre required"}));
    let addr = serve(backend.clone());
    let client = Client::new(&api(addr, "releases")).unwrap();

    let err = client.create_release(&new_release("")).await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 400, .. }));
    assert_eq!(err.server_message(), Some("Genre required"));
}

#[tokio::test]
async fn unparseable_error_body_has_no_message() {
    let addr = serve(Backend::default());
    let client = Client::new(&api(addr, "broken")).unwrap();

    let err = client.create_release(&new_release("Pop")).await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 500, .. }));
    assert_eq!(err.server_message(), None);
    assert!(client.fetch_releases(1, None).await.is_err());
}

#[tokio::test]
async fn success_with_unexpected_reply_still_counts() {
    let backend = Backend::default();
    *backend.create_reply.lock().unwrap() = (StatusCode::OK, json!("ok"));
    let addr = serve(backend);
    let client = Client::new(&api(addr, "releases")).unwrap();

    assert_eq!(client.create_release(&new_release("Pop")).await.unwrap(), None);
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = Client::new(&api(addr, "releases")).unwrap();

    let err = client.fetch_analytics(1).await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}

#[tokio::test]
async fn status_update_is_sent_as_put() {
    let backend = Backend::default();
    let addr = serve(backend.clone());
    let client = Client::new(&api(addr, "releases")).unwrap();

    client
        .update_status(&StatusUpdate {
            id: 2,
            status: ReleaseStatus::Published,
        })
        .await
        .unwrap();
    assert_eq!(
        backend.bodies.lock().unwrap()[0],
        json!({"id": 2, "status": "published"})
    );
}

#[tokio::test]
async fn dashboard_over_http() {
    let backend = Backend::default();
    *backend.create_reply.lock().unwrap() =
        (StatusCode::BAD_REQUEST, json!({"error": "Genre required"}));
    let addr = serve(backend.clone());
    let client = Arc::new(Client::new(&api(addr, "releases")).unwrap());
    let recorder = Arc::new(Recorder::default());
    let mut dash = Dashboard::with_client(
        support::user(),
        support::USER_ID,
        client,
        recorder.clone(),
    );

    dash.mount().await;
    assert_eq!(dash.releases().len(), 2);
    assert_eq!(dash.streams_for_release(1), 50);
    assert_eq!(dash.pending_payment_total(), 12.5);
    assert_eq!(backend.queries.lock().unwrap().len(), 2);

    dash.open_release_form();
    {
        let draft = dash.form_mut().draft_mut();
        draft.title = "Winter Tapes".to_string();
        draft.artist_name = "Andrey Volkov".to_string();
        draft.genre = "Lo-fi".to_string();
    }
    assert!(dash.submit_release().await.is_err());
    assert_eq!(dash.form().state(), FormState::Editing);
    assert_eq!(dash.form().draft().genre, "Lo-fi");
    assert_eq!(recorder.last().unwrap().description, "Genre required");
    assert_eq!(backend.queries.lock().unwrap().len(), 2);

    *backend.create_reply.lock().unwrap() =
        (StatusCode::CREATED, json!({"id": 3, "status": "created"}));
    assert_eq!(dash.submit_release().await.unwrap().map(|c| c.id), Some(3));
    assert_eq!(dash.form().state(), FormState::Closed);
    assert_eq!(backend.queries.lock().unwrap().len(), 4);
    assert_eq!(backend.bodies.lock().unwrap()[1]["user_id"], 1);
}
