use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    quran_mcp::infra::logging::init();
    quran_mcp::cli::run().await
}
