pub(crate) mod error;

use std::fs;
use std::path::Path;
use std::time::Duration;

use airprobe_readings::SourceLocation;
use reqwest::blocking::Client;
use tracing::debug;

use crate::load::error::LoadError;
use crate::load::error::Result;

/// Obtains the raw CSV text of a source location.
pub(crate) trait Loader {
    fn load(&self, location: &SourceLocation) -> Result<String>;
}

/// Loads `http://` and `https://` locations over HTTP and anything else
/// from the file system. Every call makes a single attempt.
pub(crate) struct SourceLoader {
    client: Client,
}

impl SourceLoader {
    const HTTP_SCHEMES: [&str; 2] = ["http://", "https://"];
    const FILE_SCHEME: &str = "file://";

    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    fn fetch(&self, url: &str) -> Result<String> {
        debug!(url, "fetching sensor readings");

        let response = self.client.get(url).send()?;

        match response.status() {
            status if status.is_success() => Ok(response.text()?),
            status_code => {
                let message = response.text().unwrap_or_default();
                let error = LoadError::Response {
                    status_code,
                    message,
                };
                Err(error)
            }
        }
    }

    fn read(path: &Path) -> Result<String> {
        debug!(path = %path.display(), "reading sensor readings");

        fs::read_to_string(path).map_err(|error| LoadError::Io {
            path: path.to_path_buf(),
            error,
        })
    }
}

impl Loader for SourceLoader {
    fn load(&self, location: &SourceLocation) -> Result<String> {
        let location = location.as_str();

        if is_http(location) {
            self.fetch(location)
        } else {
            let path = location.strip_prefix(Self::FILE_SCHEME).unwrap_or(location);
            Self::read(Path::new(path))
        }
    }
}

fn is_http(location: &str) -> bool {
    SourceLoader::HTTP_SCHEMES.iter().any(|scheme| {
        location
            .get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use std::io::Write;
    use std::net::TcpListener;
    use std::thread;

    const CSV: &str = "pm2_5,co,nh3,temperature,humidity\n10,1,0.5,22,40\n";

    fn loader() -> SourceLoader {
        let client = Client::builder()
            .no_proxy()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        SourceLoader::with_client(client)
    }

    // Serves a single HTTP response on a local port and returns its URL.
    fn serve_once(status_line: &'static str, body: &'static str) -> String {
        serve_truncated(status_line, body, body.len())
    }

    // Like `serve_once`, but announces `content_length` bytes and closes the
    // connection after `body`.
    fn serve_truncated(status_line: &'static str, body: &'static str, content_length: usize) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let address = listener.local_addr().unwrap();

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buffer = [0u8; 1024];

            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let read = stream.read(&mut buffer).unwrap();
                if read == 0 {
                    break;
                }
                request.extend_from_slice(&buffer[..read]);
            }

            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: text/csv\r\nContent-Length: {content_length}\r\nConnection: close\r\n\r\n{body}"
            );
            stream.write_all(response.as_bytes()).unwrap();
        });

        format!("http://{address}/readings.csv")
    }

    #[test]
    fn detect_http_locations() {
        assert!(is_http("http://example.com/data.csv"));
        assert!(is_http("HTTPS://example.com/data.csv"));
        assert!(!is_http("data/http.csv"));
        assert!(!is_http("file:///tmp/data.csv"));
        assert!(!is_http("µ"));
    }

    #[test]
    fn load_file() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("readings.csv");
        fs::write(&path, CSV)?;

        let text = loader().load(&SourceLocation::new(&path.display().to_string()))?;
        assert_eq!(CSV, text);

        let url = format!("file://{}", path.display());
        let text = loader().load(&SourceLocation::new(&url))?;
        assert_eq!(CSV, text);

        Ok(())
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = loader().load(&SourceLocation::new("/nonexistent/readings.csv"));

        assert!(matches!(result, Err(LoadError::Io { ref path, .. }) if path == Path::new("/nonexistent/readings.csv")));
    }

    #[test]
    fn load_over_http() -> std::result::Result<(), LoadError> {
        let url = serve_once("200 OK", CSV);

        let text = loader().load(&SourceLocation::new(&url))?;

        assert_eq!(CSV, text);
        Ok(())
    }

    #[test]
    fn error_status_is_a_response_error() {
        let url = serve_once("404 Not Found", "no such file");

        let result = loader().load(&SourceLocation::new(&url));

        match result {
            Err(LoadError::Response {
                status_code,
                message,
            }) => {
                assert_eq!(reqwest::StatusCode::NOT_FOUND, status_code);
                assert_eq!("no such file", message);
            }
            result => panic!("unexpected result: {result:?}"),
        }
    }

    #[test]
    fn error_status_survives_a_truncated_body() {
        let url = serve_truncated("503 Service Unavailable", "busy", 64);

        let result = loader().load(&SourceLocation::new(&url));

        match result {
            Err(LoadError::Response { status_code, .. }) => {
                assert_eq!(reqwest::StatusCode::SERVICE_UNAVAILABLE, status_code);
            }
            result => panic!("unexpected result: {result:?}"),
        }
    }
}
