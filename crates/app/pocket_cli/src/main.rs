// Import and re-export the `error` module
pub use self::error::{Error, Result};
mod error;

use clap::Parser;
use cli::{Cli, Commands};
use pocket_api_client::{ApiClient, ClientConfig, FormPhase, HelloForm};

mod cli;
mod logging;

fn main() -> Result<()> {
    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> Result<()> {
    logging::init()?;

    let args = Cli::parse();

    match &args.command {
        Commands::Version => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        }
        Commands::Hello { text, base_url } => {
            let greeting = hello(text, base_url.as_deref())?;
            println!("{greeting}");
        }
    }

    Ok(())
}

/// Submit `text` through the greeting form and return the rendered greeting.
fn hello(text: &str, base_url: Option<&str>) -> Result<String> {
    let config = match base_url {
        Some(url) => ClientConfig::new(url)?,
        None => ClientConfig::from_env()?,
    };
    let client = ApiClient::new(config);
    log::debug!("requesting greeting from {}", client.config().base_url);

    let mut form = HelloForm::new();
    form.set_input(text);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let phase = runtime.block_on(form.submit(&client));

    match (phase, form.response(), form.error()) {
        (FormPhase::Success, Some(resp), _) => Ok(resp.greeting.clone()),
        (_, _, Some(message)) => Err(Error::Custom(message.to_string())),
        _ => Err(Error::Custom(format!("unexpected form state: {phase:?}"))),
    }
}
