//! Test doubles.
//!
//! `MemoryBackend` behaves like the practice server for the calls the console
//! makes: assigns ids on create, replaces by id on update, answers every
//! failure with 500. `StubServer` is a real HTTP listener that records what
//! `ApiClient` sends and answers with canned responses.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use crate::api::{CreateApi, DeleteApi, ListApi, UpdateApi};
use crate::error::{ApiError, ApiResult};
use crate::models::{Document, Enrollment, Entity, Location, Practice, Provider, Scoped, Task, TaskStatus};

#[derive(Default)]
pub struct MemoryBackend {
    practices: RefCell<Vec<Practice>>,
    locations: RefCell<Vec<Location>>,
    providers: RefCell<Vec<Provider>>,
    enrollments: RefCell<Vec<Enrollment>>,
    tasks: RefCell<Vec<Task>>,
    documents: RefCell<Vec<Document>>,
    next_id: Cell<u64>,
    calls: Cell<usize>,
    fail_next: Cell<bool>,
}

/// Maps a record type to its table
pub trait Stored: Entity {
    fn table(backend: &MemoryBackend) -> &RefCell<Vec<Self>>;
}

impl Stored for Practice {
    fn table(backend: &MemoryBackend) -> &RefCell<Vec<Self>> {
        &backend.practices
    }
}

impl Stored for Location {
    fn table(backend: &MemoryBackend) -> &RefCell<Vec<Self>> {
        &backend.locations
    }
}

impl Stored for Provider {
    fn table(backend: &MemoryBackend) -> &RefCell<Vec<Self>> {
        &backend.providers
    }
}

impl Stored for Enrollment {
    fn table(backend: &MemoryBackend) -> &RefCell<Vec<Self>> {
        &backend.enrollments
    }
}

impl Stored for Task {
    fn table(backend: &MemoryBackend) -> &RefCell<Vec<Self>> {
        &backend.tasks
    }
}

impl Stored for Document {
    fn table(backend: &MemoryBackend) -> &RefCell<Vec<Self>> {
        &backend.documents
    }
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next call answer 500
    pub fn fail_next(&self) {
        self.fail_next.set(true);
    }

    /// Number of calls that reached the backend
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn practices(&self) -> Vec<Practice> {
        self.practices.borrow().clone()
    }

    pub fn seed_task(&self, practice_id: &str, message: &str, status: TaskStatus) -> Task {
        let task = Task {
            id: self.assign_id(Task::NOUN),
            practice_id: practice_id.to_string(),
            message: message.to_string(),
            status,
        };
        self.tasks.borrow_mut().push(task.clone());
        task
    }

    pub fn seed_document(&self, practice_id: &str, file_name: &str) -> Document {
        let document = Document {
            id: self.assign_id(Document::NOUN),
            practice_id: practice_id.to_string(),
            file_name: file_name.to_string(),
            storage_path: format!("uploads/{}", file_name),
        };
        self.documents.borrow_mut().push(document.clone());
        document
    }

    fn assign_id(&self, noun: &str) -> String {
        let n = self.next_id.get() + 1;
        self.next_id.set(n);
        format!("{}-{}", noun, n)
    }

    fn enter(&self) -> ApiResult<()> {
        self.calls.set(self.calls.get() + 1);
        if self.fail_next.replace(false) {
            return Err(ApiError::Status { status: 500, message: "Internal Server Error".to_string() });
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl<T: Stored + Scoped> ListApi<T> for MemoryBackend {
    async fn list(&self, practice_id: &str) -> ApiResult<Vec<T>> {
        self.enter()?;
        Ok(T::table(self)
            .borrow()
            .iter()
            .filter(|row| row.practice_id() == practice_id)
            .cloned()
            .collect())
    }
}

#[async_trait(?Send)]
impl<T: Stored> CreateApi<T> for MemoryBackend {
    async fn create(&self, record: &T) -> ApiResult<String> {
        self.enter()?;
        let id = self.assign_id(T::NOUN);
        T::table(self).borrow_mut().push(record.clone().with_id(id.clone()));
        Ok(id)
    }
}

#[async_trait(?Send)]
impl<T: Stored> UpdateApi<T> for MemoryBackend {
    async fn update(&self, record: &T) -> ApiResult<()> {
        self.enter()?;
        let mut table = T::table(self).borrow_mut();
        match table.iter_mut().find(|row| row.id() == record.id()) {
            Some(row) => {
                *row = record.clone();
                Ok(())
            }
            None => Err(ApiError::Status { status: 500, message: format!("{} not found", T::NOUN) }),
        }
    }
}

#[async_trait(?Send)]
impl<T: Stored> DeleteApi<T> for MemoryBackend {
    async fn delete(&self, id: &str) -> ApiResult<()> {
        self.enter()?;
        T::table(self).borrow_mut().retain(|row| row.id() != id);
        Ok(())
    }
}

// ========================
// HTTP stub
// ========================

/// One request as it reached the stub
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl Recorded {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Local listener answering queued `(status, body)` pairs in order; `200 {}`
/// once the queue is empty
pub struct StubServer {
    pub base: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl StubServer {
    pub async fn start(responses: Vec<(u16, &str)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let queue: VecDeque<(u16, String)> = responses.into_iter().map(|(s, b)| (s, b.to_string())).collect();
        let queue = Arc::new(Mutex::new(queue));

        let seen = requests.clone();
        tokio::spawn(async move {
            while let Ok((mut stream, _)) = listener.accept().await {
                let Some(request) = read_request(&mut stream).await else { continue };
                seen.lock().unwrap().push(request);
                let (status, body) = queue.lock().unwrap().pop_front().unwrap_or((200, "{}".to_string()));
                let reply = format!(
                    "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = stream.write_all(reply.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });

        Self { base: format!("http://127.0.0.1:{}", port), requests }
    }

    pub fn client(&self) -> crate::api::ApiClient {
        crate::api::ApiClient::new(crate::config::ApiConfig::new(self.base.clone()))
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

async fn read_request(stream: &mut TcpStream) -> Option<Recorded> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    let head_end = loop {
        if let Some(pos) = find(&buf, b"\r\n\r\n") {
            break pos;
        }
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
    };

    let head = String::from_utf8_lossy(&buf[..head_end]).into_owned();
    let mut lines = head.split("\r\n");
    let mut request_line = lines.next()?.split_whitespace();
    let method = request_line.next()?.to_string();
    let path = request_line.next()?.to_string();
    let headers: Vec<(String, String)> = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .collect();
    let header = |name: &str| headers.iter().find(|(k, _)| k.eq_ignore_ascii_case(name)).map(|(_, v)| v.clone());

    let mut body = buf[head_end + 4..].to_vec();
    if header("transfer-encoding").is_some_and(|v| v.eq_ignore_ascii_case("chunked")) {
        while find(&body, b"0\r\n\r\n").is_none() {
            let n = stream.read(&mut chunk).await.ok()?;
            if n == 0 {
                break;
            }
            body.extend_from_slice(&chunk[..n]);
        }
        body = dechunk(&body);
    } else {
        let length: usize = header("content-length").and_then(|v| v.parse().ok()).unwrap_or(0);
        while body.len() < length {
            let n = stream.read(&mut chunk).await.ok()?;
            if n == 0 {
                break;
            }
            body.extend_from_slice(&chunk[..n]);
        }
    }

    Some(Recorded { method, path, headers, body })
}

fn dechunk(raw: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    let mut rest = raw;
    while let Some(line_end) = find(rest, b"\r\n") {
        let size = usize::from_str_radix(String::from_utf8_lossy(&rest[..line_end]).trim(), 16).unwrap_or(0);
        if size == 0 {
            break;
        }
        let start = line_end + 2;
        out.extend_from_slice(&rest[start..start + size]);
        rest = &rest[start + size + 2..];
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_documents_scoped_to_practice_and_deletable() {
        let api = MemoryBackend::new();
        let consent = api.seed_document("p1", "consent.pdf");
        api.seed_document("p2", "other.pdf");

        let docs = ListApi::<Document>::list(&api, "p1").await.unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].file_name, "consent.pdf");

        DeleteApi::<Document>::delete(&api, &consent.id).await.unwrap();
        let docs = ListApi::<Document>::list(&api, "p1").await.unwrap();
        assert!(docs.is_empty());
    }

    #[tokio::test]
    async fn test_failure_is_one_shot() {
        let api = MemoryBackend::new();
        api.fail_next();
        assert!(ListApi::<Location>::list(&api, "p1").await.is_err());
        assert!(ListApi::<Location>::list(&api, "p1").await.is_ok());
        assert_eq!(api.calls(), 2);
    }
}

#[cfg(test)]
mod stub_tests {
    use super::*;

    #[test]
    fn test_dechunk() {
        assert_eq!(dechunk(b"5\r\nhello\r\n6\r\n world\r\n0\r\n\r\n"), b"hello world".to_vec());
    }

    #[tokio::test]
    async fn test_stub_records_and_answers_in_order() {
        let server = StubServer::start(vec![(201, r#"{"ok":true}"#)]).await;
        let http = reqwest::Client::new();

        let first = http.post(format!("{}/echo", server.base)).body("ping").send().await.unwrap();
        assert_eq!(first.status().as_u16(), 201);
        let second = http.get(format!("{}/again", server.base)).send().await.unwrap();
        assert_eq!(second.text().await.unwrap(), "{}");

        let seen = server.requests();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].method, "POST");
        assert_eq!(seen[0].path, "/echo");
        assert_eq!(seen[0].body_text(), "ping");
        assert_eq!(seen[1].method, "GET");
    }
}
