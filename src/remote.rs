// ============================================================================
// REMOTE PHOTO SEARCH: random-photo lookup, download, background worker
// ============================================================================

use image::RgbImage;
use serde::Deserialize;
use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::Duration;
use thiserror::Error;

use crate::io::{self, IoError};
use crate::settings::AppSettings;

pub const DEFAULT_API_BASE: &str = "https://api.unsplash.com";
pub const CAPTION_MAX_CHARS: usize = 100;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("enter a search term first")]
    EmptyQuery,
    #[error("no photo-search access key configured (set unsplash_access_key or UNSPLASH_ACCESS_KEY)")]
    MissingAccessKey,
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("server answered HTTP {0}")]
    Status(u16),
    #[error("unexpected response: {0}")]
    Malformed(String),
    #[error("downloaded file is not an image: {0}")]
    Decode(#[source] IoError),
    #[error("fetch worker stopped without a result")]
    WorkerLost,
}

/// Normalized metadata for one remote photo.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhotoRecord {
    pub url: String,
    pub author: String,
    pub description: String,
    pub link: String,
}

#[derive(Deserialize)]
struct ApiPhoto {
    urls: Option<ApiUrls>,
    user: Option<ApiUser>,
    description: Option<String>,
    alt_description: Option<String>,
    links: Option<ApiLinks>,
}

#[derive(Deserialize)]
struct ApiUrls {
    regular: Option<String>,
}

#[derive(Deserialize)]
struct ApiUser {
    name: Option<String>,
}

#[derive(Deserialize)]
struct ApiLinks {
    html: Option<String>,
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|v| !v.trim().is_empty())
}

impl PhotoRecord {
    /// Normalize a `/photos/random` payload.
    pub fn from_api_json(text: &str) -> Result<Self, FetchError> {
        let photo: ApiPhoto =
            serde_json::from_str(text).map_err(|e| FetchError::Malformed(e.to_string()))?;
        let url = photo
            .urls
            .and_then(|u| non_empty(u.regular))
            .ok_or_else(|| FetchError::Malformed("missing urls.regular".into()))?;
        let author = non_empty(photo.user.and_then(|u| u.name)).unwrap_or_else(|| "Unknown".into());
        let description = non_empty(photo.description)
            .or_else(|| non_empty(photo.alt_description))
            .unwrap_or_else(|| "No description".into());
        let link = photo.links.and_then(|l| l.html).unwrap_or_default();
        Ok(Self { url, author, description, link })
    }

    /// One-line credit: author plus the description, shortened past 100 chars.
    pub fn caption(&self) -> String {
        let description = if self.description.chars().count() > CAPTION_MAX_CHARS {
            let head: String = self.description.chars().take(CAPTION_MAX_CHARS - 3).collect();
            format!("{head}...")
        } else {
            self.description.clone()
        };
        format!("By {} | {}", self.author, description)
    }
}

/// A downloaded, decoded photo and where it came from.
#[derive(Clone, Debug)]
pub struct FetchedImage {
    pub query: String,
    pub image: RgbImage,
    pub record: PhotoRecord,
}

pub type FetchResult = Result<FetchedImage, FetchError>;

/// Blocking client for the photo-search API.
#[derive(Clone, Debug)]
pub struct PhotoSearchClient {
    http: reqwest::blocking::Client,
    base_url: String,
    access_key: String,
}

impl PhotoSearchClient {
    pub fn new(access_key: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let access_key = access_key.into();
        if access_key.trim().is_empty() {
            return Err(FetchError::MissingAccessKey);
        }
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("dollarshop/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: DEFAULT_API_BASE.to_string(),
            access_key,
        })
    }

    pub fn from_settings(settings: &AppSettings) -> Result<Self, FetchError> {
        let key = settings.access_key().ok_or(FetchError::MissingAccessKey)?;
        let client = Self::new(key, Duration::from_secs(settings.fetch_timeout_secs.max(1)))?;
        Ok(client.with_base_url(settings.photo_api_base.as_str()))
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Metadata of a random landscape photo matching `query`.
    pub fn random_photo(&self, query: &str) -> Result<PhotoRecord, FetchError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(FetchError::EmptyQuery);
        }
        let resp = self
            .http
            .get(format!("{}/photos/random", self.base_url))
            .header("Authorization", format!("Client-ID {}", self.access_key))
            .query(&[
                ("query", query),
                ("orientation", "landscape"),
                ("content_filter", "high"),
            ])
            .send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        let text = resp.text()?;
        PhotoRecord::from_api_json(&text)
    }

    pub fn download_image(&self, url: &str) -> Result<RgbImage, FetchError> {
        let resp = self.http.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        let bytes = resp.bytes()?;
        io::decode_image(&bytes).map_err(FetchError::Decode)
    }

    /// Look up a photo and download it.
    pub fn fetch(&self, query: &str) -> FetchResult {
        let record = self.random_photo(query)?;
        log::info!("Photo search '{}' -> {} by {}", query.trim(), record.url, record.author);
        let image = self.download_image(&record.url)?;
        log::info!("Downloaded {}x{} image", image.width(), image.height());
        Ok(FetchedImage {
            query: query.trim().to_string(),
            image,
            record,
        })
    }
}

/// One background fetch. The result is delivered exactly once.
pub struct FetchWorker {
    query: String,
    rx: mpsc::Receiver<FetchResult>,
    handle: Option<JoinHandle<()>>,
}

impl FetchWorker {
    pub fn spawn(client: PhotoSearchClient, query: &str) -> Self {
        let (tx, rx) = mpsc::channel();
        let owned = query.to_string();
        let handle = std::thread::spawn(move || {
            let result = client.fetch(&owned);
            if let Err(e) = &result {
                log::warn!("Photo search '{}' failed: {}", owned, e);
            }
            let _ = tx.send(result);
        });
        Self {
            query: query.to_string(),
            rx,
            handle: Some(handle),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Non-blocking poll, for callers that keep their own event loop.
    pub fn try_result(&mut self) -> Option<FetchResult> {
        match self.rx.try_recv() {
            Ok(result) => {
                self.join();
                Some(result)
            }
            Err(mpsc::TryRecvError::Empty) => None,
            Err(mpsc::TryRecvError::Disconnected) => {
                self.join();
                Some(Err(FetchError::WorkerLost))
            }
        }
    }

    /// Block until the worker reports.
    pub fn wait(mut self) -> FetchResult {
        let result = self.rx.recv().unwrap_or(Err(FetchError::WorkerLost));
        self.join();
        result
    }

    fn join(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageEncoder, Rgb};
    use std::io::{Read, Write};
    use std::net::{TcpListener, TcpStream};

    struct Reply {
        status: &'static str,
        content_type: &'static str,
        body: Vec<u8>,
    }

    fn bind() -> (TcpListener, String) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        (listener, base)
    }

    fn read_head(stream: &mut TcpStream) -> String {
        let mut head = Vec::new();
        let mut byte = [0u8; 1];
        while !head.ends_with(b"\r\n\r\n") {
            match stream.read(&mut byte) {
                Ok(1) => head.push(byte[0]),
                _ => break,
            }
        }
        String::from_utf8_lossy(&head).into_owned()
    }

    /// Answer one connection per reply, in order. With a `gate`, the first
    /// answer is held back until the gate fires. Returns the request heads.
    fn serve(
        listener: TcpListener,
        replies: Vec<Reply>,
        mut gate: Option<mpsc::Receiver<()>>,
    ) -> JoinHandle<Vec<String>> {
        std::thread::spawn(move || {
            let mut heads = Vec::new();
            for reply in replies {
                let (mut stream, _) = listener.accept().unwrap();
                heads.push(read_head(&mut stream));
                if let Some(gate) = gate.take() {
                    let _ = gate.recv();
                }
                let head = format!(
                    "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                    reply.status,
                    reply.content_type,
                    reply.body.len()
                );
                stream.write_all(head.as_bytes()).unwrap();
                stream.write_all(&reply.body).unwrap();
            }
            heads
        })
    }

    fn photo_json(base: &str) -> Vec<u8> {
        format!(r#"{{"urls":{{"regular":"{base}/img/1"}},"user":{{"name":"Ada"}},"description":"Lake"}}"#)
            .into_bytes()
    }

    fn png_bytes(img: &RgbImage) -> Vec<u8> {
        let mut out = Vec::new();
        image::codecs::png::PngEncoder::new(&mut out)
            .write_image(img.as_raw(), img.width(), img.height(), image::ColorType::Rgb8)
            .unwrap();
        out
    }

    /// Loopback client that ignores any proxy configured in the environment.
    fn client_for(base: &str) -> PhotoSearchClient {
        PhotoSearchClient {
            http: reqwest::blocking::Client::builder()
                .no_proxy()
                .timeout(Duration::from_secs(5))
                .build()
                .unwrap(),
            base_url: base.to_string(),
            access_key: "key".to_string(),
        }
    }

    #[test]
    fn full_payload_is_normalized() {
        let json = r#"{
            "urls": {"regular": "https://img.example/r.jpg", "full": "x"},
            "user": {"name": "Ada"},
            "description": "Mountains at dawn",
            "alt_description": "ignored",
            "links": {"html": "https://example/p/1"}
        }"#;
        let rec = PhotoRecord::from_api_json(json).unwrap();
        assert_eq!(
            rec,
            PhotoRecord {
                url: "https://img.example/r.jpg".into(),
                author: "Ada".into(),
                description: "Mountains at dawn".into(),
                link: "https://example/p/1".into(),
            }
        );
    }

    #[test]
    fn missing_fields_get_fallbacks() {
        let rec = PhotoRecord::from_api_json(r#"{"urls":{"regular":"u"},"alt_description":"alt"}"#).unwrap();
        assert_eq!(rec.author, "Unknown");
        assert_eq!(rec.description, "alt");
        assert_eq!(rec.link, "");

        let rec = PhotoRecord::from_api_json(r#"{"urls":{"regular":"u"},"description":null}"#).unwrap();
        assert_eq!(rec.description, "No description");
    }

    #[test]
    fn payload_without_url_is_malformed() {
        assert!(matches!(
            PhotoRecord::from_api_json(r#"{"user":{"name":"x"}}"#),
            Err(FetchError::Malformed(_))
        ));
        assert!(matches!(PhotoRecord::from_api_json("[1,2"), Err(FetchError::Malformed(_))));
    }

    #[test]
    fn caption_truncates_long_descriptions() {
        let mut rec = PhotoRecord {
            url: "u".into(),
            author: "Bo".into(),
            description: "d".repeat(100),
            link: String::new(),
        };
        assert_eq!(rec.caption(), format!("By Bo | {}", "d".repeat(100)));
        rec.description = "é".repeat(101);
        assert_eq!(rec.caption(), format!("By Bo | {}...", "é".repeat(97)));
    }

    #[test]
    fn settings_pick_key_and_endpoint() {
        let settings = AppSettings {
            unsplash_access_key: "abc".into(),
            photo_api_base: "http://mirror.example/".into(),
            ..AppSettings::default()
        };
        let client = PhotoSearchClient::from_settings(&settings).unwrap();
        assert_eq!(client.base_url, "http://mirror.example");
        assert_eq!(client.access_key, "abc");
    }

    #[test]
    fn empty_key_is_rejected() {
        assert!(matches!(
            PhotoSearchClient::new("  ", Duration::from_secs(1)),
            Err(FetchError::MissingAccessKey)
        ));
    }

    #[test]
    fn empty_query_fails_before_any_request() {
        let client = PhotoSearchClient::new("key", Duration::from_secs(1))
            .unwrap()
            .with_base_url("http://127.0.0.1:9/");
        let worker = FetchWorker::spawn(client, "   ");
        assert_eq!(worker.query(), "   ");
        assert!(matches!(worker.wait(), Err(FetchError::EmptyQuery)));
    }

    #[test]
    fn unreachable_server_is_a_network_error() {
        let client = client_for("http://127.0.0.1:9");
        assert!(matches!(client.fetch("cats"), Err(FetchError::Network(_))));
    }

    #[test]
    fn http_error_status_is_reported() {
        let (listener, base) = bind();
        let server = serve(
            listener,
            vec![Reply { status: "403 Forbidden", content_type: "text/plain", body: b"Rate Limit Exceeded".to_vec() }],
            None,
        );
        let err = client_for(&base).fetch("mountain lake").unwrap_err();
        assert!(matches!(err, FetchError::Status(403)), "{err}");

        let heads = server.join().unwrap();
        assert!(heads[0].starts_with("GET /photos/random?query=mountain+lake&orientation=landscape&content_filter=high "));
        assert!(heads[0].to_ascii_lowercase().contains("authorization: client-id key"));
    }

    #[test]
    fn undecodable_download_is_a_decode_error() {
        let (listener, base) = bind();
        let server = serve(
            listener,
            vec![
                Reply { status: "200 OK", content_type: "application/json", body: photo_json(&base) },
                Reply { status: "200 OK", content_type: "image/jpeg", body: b"not really a jpeg".to_vec() },
            ],
            None,
        );
        let err = client_for(&base).fetch("lake").unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)), "{err}");
        let heads = server.join().unwrap();
        assert!(heads[1].starts_with("GET /img/1 "));
    }

    #[test]
    fn worker_is_polled_without_blocking() {
        let (listener, base) = bind();
        let (gate_tx, gate_rx) = mpsc::channel();
        let photo = RgbImage::from_pixel(3, 2, Rgb([200, 100, 50]));
        let server = serve(
            listener,
            vec![
                Reply { status: "200 OK", content_type: "application/json", body: photo_json(&base) },
                Reply { status: "200 OK", content_type: "image/png", body: png_bytes(&photo) },
            ],
            Some(gate_rx),
        );

        let mut worker = FetchWorker::spawn(client_for(&base), "lake");
        // The server holds its first answer, so nothing can be ready yet.
        assert!(worker.try_result().is_none());
        gate_tx.send(()).unwrap();

        let mut result = None;
        for _ in 0..500 {
            result = worker.try_result();
            if result.is_some() {
                break;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        let fetched = result.expect("worker never reported").unwrap();
        assert_eq!(fetched.query, "lake");
        assert_eq!(fetched.image, photo);
        assert_eq!(fetched.record.author, "Ada");
        assert_eq!(fetched.record.caption(), "By Ada | Lake");

        // The one result has been taken; the finished worker reports nothing more.
        assert!(matches!(worker.try_result(), Some(Err(FetchError::WorkerLost))));
        server.join().unwrap();
    }
}
