use std::{
    fs,
    future::IntoFuture,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Result};
use axum::{Router, http::header, routing::get};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;
use tokio::{
    net::TcpListener,
    runtime::{self, Runtime},
};

mod generate;

const BIN_NAME: &str = "sheetlocales";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Stop config discovery at the temp project
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn generate_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("generate");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}

/// Minimal stand-in for the Google Sheets API.
///
/// Serves canned JSON bodies by request path (query string ignored); any other
/// path gets axum's 404. The server stops when this value is dropped.
pub struct FakeSheetsApi {
    url: String,
    _runtime: Runtime,
}

impl FakeSheetsApi {
    pub fn start(routes: &[(&str, &str)]) -> Result<Self> {
        let runtime = runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;

        let router: Router = routes
            .iter()
            .fold(Router::new(), |router, (path, body)| {
                let body = body.to_string();
                router.route(
                    path,
                    get(move || async move { ([(header::CONTENT_TYPE, "application/json")], body) }),
                )
            });

        let listener = runtime.block_on(TcpListener::bind("127.0.0.1:0"))?;
        let url = format!("http://{}/v4/spreadsheets/", listener.local_addr()?);
        runtime.spawn(axum::serve(listener, router).into_future());

        Ok(Self {
            url,
            _runtime: runtime,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}
