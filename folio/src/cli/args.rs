//! CLI argument definitions

use clap::Parser;

use crate::config::DEFAULT_API_URL;
use crate::domain::Tab;

#[derive(Parser)]
#[command(
    name = "folio",
    about = "Browse a developer profile served by the profile API",
    after_help = "\
EXAMPLES:
    folio                                        Interactive viewer against localhost:5000
    folio --api-url https://profile.example.com  Use another API server
    folio --headless --skill React               Print projects tagged React and exit
    folio --headless --search rust               Print global search results and exit"
)]
pub struct Args {
    /// Profile API base URL
    #[arg(long, value_name = "URL", env = "PROFILE_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Request timeout in seconds (transport default if omitted)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Print the selected panel as plain text instead of starting the TUI
    #[arg(long)]
    pub headless: bool,

    /// Panel to print in headless mode (defaults to the panel the last action opened)
    #[arg(long, value_enum, requires = "headless")]
    pub tab: Option<Tab>,

    /// Filter projects by this skill before printing
    #[arg(long, requires = "headless")]
    pub skill: Option<String>,

    /// Run a global search before printing
    #[arg(long, value_name = "QUERY", requires = "headless")]
    pub search: Option<String>,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}
