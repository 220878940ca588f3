//! In-process stand-in for the hh.ru API.
//!
//! Counts hits per route and records what was asked for, so tests can assert
//! on request counts and query strings. Each route's response status can be
//! flipped at runtime.

#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU16, AtomicU32, AtomicUsize, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

use axum::{
    extract::{Query, State},
    http::{header::USER_AGENT, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use hh_vacancies::{ClientConfig, HhClient};
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub struct MockApi {
    pub pages: AtomicU32,
    pub dictionaries_status: AtomicU16,
    pub areas_status: AtomicU16,
    pub vacancies_status: AtomicU16,

    pub dictionaries_hits: AtomicUsize,
    pub areas_hits: AtomicUsize,
    pub vacancies_hits: AtomicUsize,

    pub vacancy_queries: Mutex<Vec<HashMap<String, String>>>,
    pub area_queries: Mutex<Vec<HashMap<String, String>>>,
    pub user_agents: Mutex<Vec<String>>,
}

impl MockApi {
    fn new(pages: u32) -> Self {
        Self {
            pages: AtomicU32::new(pages),
            dictionaries_status: AtomicU16::new(200),
            areas_status: AtomicU16::new(200),
            vacancies_status: AtomicU16::new(200),
            dictionaries_hits: AtomicUsize::new(0),
            areas_hits: AtomicUsize::new(0),
            vacancies_hits: AtomicUsize::new(0),
            vacancy_queries: Mutex::new(Vec::new()),
            area_queries: Mutex::new(Vec::new()),
            user_agents: Mutex::new(Vec::new()),
        }
    }

    pub fn hits(&self) -> (usize, usize, usize) {
        (
            self.dictionaries_hits.load(Ordering::SeqCst),
            self.areas_hits.load(Ordering::SeqCst),
            self.vacancies_hits.load(Ordering::SeqCst),
        )
    }

    pub fn requested_pages(&self) -> Vec<u32> {
        self.vacancy_queries
            .lock()
            .unwrap()
            .iter()
            .map(|q| q["page"].parse().unwrap())
            .collect()
    }

    fn record_agent(&self, headers: &HeaderMap) {
        if let Some(agent) = headers.get(USER_AGENT).and_then(|v| v.to_str().ok()) {
            self.user_agents.lock().unwrap().push(agent.to_string());
        }
    }
}

type Api = Arc<MockApi>;

fn respond(status: &AtomicU16, body: Value) -> Response {
    let status = StatusCode::from_u16(status.load(Ordering::SeqCst)).unwrap();
    if status.is_success() {
        (status, Json(body)).into_response()
    } else {
        (status, "mock failure").into_response()
    }
}

async fn dictionaries(State(api): State<Api>, headers: HeaderMap) -> Response {
    api.dictionaries_hits.fetch_add(1, Ordering::SeqCst);
    api.record_agent(&headers);
    respond(
        &api.dictionaries_status,
        json!({
            "experience": [
                {"id": "noExperience", "name": "Нет опыта"},
                {"id": "between1And3", "name": "От 1 года до 3 лет"},
                {"id": "3", "name": "От 3 до 6 лет"}
            ],
            "currency": [{"code": "RUR", "abbr": "₽", "rate": 1.0}]
        }),
    )
}

async fn areas(
    State(api): State<Api>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    api.areas_hits.fetch_add(1, Ordering::SeqCst);
    api.record_agent(&headers);
    api.area_queries.lock().unwrap().push(query);
    respond(
        &api.areas_status,
        json!([
            {
                "name": "Россия",
                "areas": [
                    {"id": "1", "name": "Москва", "areas": []},
                    {"id": "2019", "name": "Московская область", "areas": [
                        {"id": "2034", "name": "Химки", "areas": []}
                    ]}
                ]
            },
            {
                "id": "40",
                "name": "Казахстан",
                "areas": [{"id": "160", "name": "Алматы", "areas": []}]
            }
        ]),
    )
}

async fn vacancies(
    State(api): State<Api>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    api.vacancies_hits.fetch_add(1, Ordering::SeqCst);
    api.record_agent(&headers);
    let page: u32 = query.get("page").and_then(|p| p.parse().ok()).unwrap_or(0);
    api.vacancy_queries.lock().unwrap().push(query);

    let pages = api.pages.load(Ordering::SeqCst);
    respond(
        &api.vacancies_status,
        json!({
            "pages": pages,
            "page": page,
            "per_page": 2,
            "found": pages * 2,
            "items": [
                {"id": format!("{page}-a"), "name": "Python-разработчик"},
                {"id": format!("{page}-b"), "name": "Backend engineer"}
            ]
        }),
    )
}

/// Starts the mock on a random local port and returns its base URL.
pub async fn spawn(pages: u32) -> (String, Api) {
    let api = Arc::new(MockApi::new(pages));
    let app = Router::new()
        .route("/dictionaries", get(dictionaries))
        .route("/areas", get(areas))
        .route("/vacancies", get(vacancies))
        .with_state(api.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await });

    (format!("http://{addr}"), api)
}

pub fn client(base_url: &str) -> HhClient {
    client_with_delay(base_url, Duration::ZERO)
}

pub fn client_with_delay(base_url: &str, page_delay: Duration) -> HhClient {
    HhClient::new(ClientConfig {
        base_url: base_url.to_string(),
        user_agent: "hh-vacancies-tests/1.0".to_string(),
        page_delay,
    })
    .unwrap()
}
