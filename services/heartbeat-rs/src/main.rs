use std::io::{self, Write};

use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use heartbeat::{Config, Emitter, Result};

#[tokio::main]
async fn main() {
    dotenv().ok();

    // Logs nach stderr, stdout gehört den Statuszeilen
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        error!("heartbeat stopped: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = Config::load()?;
    info!(?config, "config loaded");

    print_banner(&mut io::stdout().lock(), &config.project)?;
    Emitter::stdio().run(&config).await
}

fn print_banner<W: Write>(out: &mut W, project: &str) -> io::Result<()> {
    writeln!(out, "🚀 Starting heartbeat application...")?;
    writeln!(out, "📁 Project: {}", project)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_names_the_project() {
        let mut out = Vec::new();
        print_banner(&mut out, "demo").unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "🚀 Starting heartbeat application...\n📁 Project: demo\n"
        );
    }
}
