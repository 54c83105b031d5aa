use clap::Parser;

#[derive(Parser)]
#[command(name = "userdump")]
#[command(about = "Fetch a remote user collection and dump it to stdout", version)]
#[command(after_help = "EXAMPLES:
    userdump                                      Fetch from jsonplaceholder
    userdump --base-url http://localhost:8080/    Fetch from a local server
    userdump --monitor                            Echo HTTP traffic to stderr")]
pub struct Cli {
    /// Base URL of the user service
    #[arg(long)]
    pub base_url: Option<String>,

    /// Echo request and response traffic to stderr
    #[arg(long)]
    pub monitor: bool,

    /// Show the full error chain on failure
    #[arg(long, short)]
    pub verbose: bool,
}
