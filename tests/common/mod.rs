use std::process::{Child, Command, Stdio};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde_json::{json, Value};

static SERVER: OnceLock<TestServer> = OnceLock::new();

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    #[allow(dead_code)]
    child: Child,
}

impl TestServer {
    fn spawn() -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        // Spawn the already-built binary to keep start fast during tests
        // Assumes debug profile; adjust if you run tests with --release
        let mut cmd = Command::new("target/debug/quill-api");
        cmd.env("QUILL_API_PORT", port.to_string())
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        // Inherit environment so the server can see DATABASE_URL from .env (loaded by the server)
        let child = cmd.spawn().context("failed to spawn server binary")?;

        Ok(Self { port, base_url, child })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            let url = format!("{}/health", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                // Consider server ready on any non-404 response
                if resp.status() == StatusCode::OK
                    || resp.status() == StatusCode::SERVICE_UNAVAILABLE
                {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        anyhow::bail!(
            "server did not become ready on {} within {:?}",
            self.base_url,
            timeout
        )
    }
}

pub async fn ensure_server() -> Result<&'static TestServer> {
    let server = SERVER.get_or_init(|| TestServer::spawn().expect("failed to spawn server binary"));
    server.wait_ready(Duration::from_secs(10)).await?;
    Ok(server)
}

/// A handle that will not collide across test runs against a shared database
pub fn unique_handle(prefix: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("clock before epoch")
        .as_nanos();
    format!("{}_{}", prefix, nanos)
}

/// Register a fresh user and log them in; returns (bearer token, user id)
#[allow(dead_code)]
pub async fn register_and_login(base_url: &str, handle: &str) -> Result<(String, String)> {
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/auth/register", base_url))
        .json(&json!({ "handle": handle, "password": "correct horse" }))
        .send()
        .await?;
    anyhow::ensure!(
        res.status() == StatusCode::CREATED,
        "register failed: {}",
        res.status()
    );
    let body: Value = res.json().await?;
    let user_id = body["data"]["id"]
        .as_str()
        .context("register response missing id")?
        .to_string();

    let res = client
        .post(format!("{}/auth/login", base_url))
        .json(&json!({ "handle": handle, "password": "correct horse" }))
        .send()
        .await?;
    anyhow::ensure!(
        res.status() == StatusCode::OK,
        "login failed: {}",
        res.status()
    );
    let body: Value = res.json().await?;
    let token = body["data"]["token"]
        .as_str()
        .context("login response missing token")?
        .to_string();

    Ok((token, user_id))
}

/// Create a post as the given token holder; returns the post id
#[allow(dead_code)]
pub async fn create_post(base_url: &str, token: &str, text: &str) -> Result<String> {
    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/posts", base_url))
        .bearer_auth(token)
        .json(&json!({ "text_content": text }))
        .send()
        .await?;
    anyhow::ensure!(
        res.status() == StatusCode::CREATED,
        "create post failed: {}",
        res.status()
    );
    let body: Value = res.json().await?;
    body["data"]["id"]
        .as_str()
        .map(str::to_string)
        .context("create response missing id")
}
