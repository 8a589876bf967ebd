use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Returns the version string, including the git hash for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "todoz", bin_name = "todoz", version = get_version())]
#[command(about = "A small persisted to-do list", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding todos.json and config.json
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a task
    #[command(alias = "a")]
    Add {
        /// Task text (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// List tasks
    #[command(alias = "ls")]
    List {
        /// Which tasks to show: all, active or completed
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// Mark a task done, or active again
    #[command(alias = "t")]
    Toggle {
        /// Task id as shown by `list`
        id: String,
    },

    /// Delete a task
    #[command(alias = "rm")]
    Delete {
        /// Task id as shown by `list`
        id: String,
    },

    /// Remove all completed tasks
    Clear,

    /// Get or set configuration
    Config {
        /// Configuration key (storage-key, seed-samples, default-filter)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

/// Logs go to stderr. `TODOZ_LOG` takes an `EnvFilter` directive and wins
/// over `--verbose`.
pub fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("TODOZ_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "todoz=debug,info"
        } else {
            "todoz=warn,error"
        })
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .try_init();
}
