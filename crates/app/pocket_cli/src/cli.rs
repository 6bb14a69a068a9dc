use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "pocket", version, about = "Pocket Joe command-line client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the CLI name and version.
    Version,

    /// Ask the backend for a greeting.
    Hello {
        /// Text to greet; empty greets the world.
        #[arg(long, short, default_value = "")]
        text: String,

        /// Backend base URL [default: $POCKET_API_URL, else http://localhost:8000].
        #[arg(long)]
        base_url: Option<String>,
    },
}
