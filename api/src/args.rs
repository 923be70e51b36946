use std::{net::IpAddr, path::PathBuf, time::Duration};

use clap::Parser;
use pawplan_core::domain::common::{LLMConfig, PawPlanConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "pawplan-api", version, about = "Pet meal plan API backed by Ollama")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    #[arg(long, env = "SERVER_PORT", default_value_t = 8443)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/api`.
    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(long, env = "SSL_KEYFILE")]
    pub ssl_keyfile: PathBuf,

    #[arg(long, env = "SSL_CERTFILE")]
    pub ssl_certfile: PathBuf,
}

impl ServerArgs {
    /// Fails unless both TLS files exist on disk.
    pub fn ensure_tls_files(&self) -> Result<(), anyhow::Error> {
        for (name, path) in [
            ("SSL_KEYFILE", &self.ssl_keyfile),
            ("SSL_CERTFILE", &self.ssl_certfile),
        ] {
            if !path.is_file() {
                anyhow::bail!("{} points to a missing file: {}", name, path.display());
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long, env = "OLLAMA_URL", default_value = "http://localhost:11434")]
    pub ollama_url: String,

    #[arg(long, env = "OLLAMA_MODEL", default_value = "mistral:7b")]
    pub ollama_model: String,

    #[arg(long, env = "OLLAMA_TIMEOUT_SECS", default_value_t = 30)]
    pub ollama_timeout_secs: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "RUST_LOG", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON")]
    pub json: bool,
}

impl From<Args> for PawPlanConfig {
    fn from(args: Args) -> Self {
        Self {
            llm: LLMConfig {
                ollama_url: args.llm.ollama_url,
                ollama_model: args.llm.ollama_model,
                timeout: Duration::from_secs(args.llm.ollama_timeout_secs),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BIN: &str = "pawplan-api";

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from([
            BIN,
            "--ssl-keyfile",
            "key.pem",
            "--ssl-certfile",
            "cert.pem",
            "--host",
            "0.0.0.0",
            "--port",
            "8443",
            "--ollama-url",
            "http://localhost:11434",
            "--ollama-model",
            "mistral:7b",
            "--ollama-timeout-secs",
            "30",
        ])
        .unwrap();

        let config = PawPlanConfig::from(args.clone());

        assert_eq!(args.server.port, 8443);
        assert_eq!(args.server.host.to_string(), "0.0.0.0");
        assert_eq!(config.llm.ollama_url, "http://localhost:11434");
        assert_eq!(config.llm.ollama_model, "mistral:7b");
        assert_eq!(config.llm.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_allowed_origins_split_on_commas() {
        let args = Args::try_parse_from([
            BIN,
            "--ssl-keyfile",
            "key.pem",
            "--ssl-certfile",
            "cert.pem",
            "--allowed-origins",
            "http://localhost:3000,https://pawplan.example",
        ])
        .unwrap();

        assert_eq!(
            args.server.allowed_origins,
            vec!["http://localhost:3000", "https://pawplan.example"]
        );
    }

    #[test]
    fn test_missing_tls_files_are_rejected() {
        let args = Args::try_parse_from([
            BIN,
            "--ssl-keyfile",
            "/nonexistent/key.pem",
            "--ssl-certfile",
            "/nonexistent/cert.pem",
        ])
        .unwrap();

        let err = args.server.ensure_tls_files().unwrap_err();

        assert!(err.to_string().contains("SSL_KEYFILE"));
    }
}
