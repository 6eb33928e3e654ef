use crate::infra::config::{Config, Transport};
use crate::infra::mcp::QuranSvc;
use crate::infra::runtime::session::SessionRegistry;

pub async fn run_server(cfg: Config) -> anyhow::Result<()> {
    cfg.validate()?;
    tracing::info!(
        transport = %cfg.transport,
        host = %cfg.host,
        port = cfg.port,
        base_url = %cfg.api.base_url,
        "BOOT quran-mcp"
    );

    let svc = QuranSvc::from_config(&cfg.api)?;

    match cfg.transport {
        Transport::Stdio => crate::infra::runtime::mcp_transport::serve_stdio(svc).await,
        Transport::Sse => {
            let app = crate::infra::http_app::build_app(svc, SessionRegistry::default());
            let listener = tokio::net::TcpListener::bind((cfg.host.as_str(), cfg.port)).await?;
            tracing::info!(addr = %listener.local_addr()?, endpoint = crate::infra::http_app::MCP_PATH, "listening");
            axum::serve(listener, app).await?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn zero_port_sse_fails_before_binding() {
        let cfg = Config {
            transport: Transport::Sse,
            port: 0,
            ..Config::default()
        };
        let err = run_server(cfg).await.unwrap_err();
        assert!(err.to_string().contains("PORT cannot be 0"));
    }

    #[tokio::test]
    async fn bad_base_url_is_a_startup_error() {
        let mut cfg = Config::default();
        cfg.api.base_url = "not a url".into();
        assert!(run_server(cfg).await.is_err());
    }
}
