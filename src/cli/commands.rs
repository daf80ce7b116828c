use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "reveal", about = concat!("reveal v", env!("CARGO_PKG_VERSION"), " - a to-do list you can swipe"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Task snapshot file
    #[arg(long, global = true, default_value = "tasks.json")]
    pub tasks: String,

    /// Config file
    #[arg(long, global = true, default_value = "reveal.toml")]
    pub config: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List tasks
    List,
    /// Add a task
    Add(AddArgs),
    /// Change a task's text
    Edit(EditArgs),
    /// Check or uncheck a task
    Toggle(IdArgs),
    /// Delete a task
    Delete(IdArgs),
    /// Show where a released row would settle
    Settle(SettleArgs),
    /// Replay a gesture script and print the resulting reveal commands
    Replay(ReplayArgs),
}

#[derive(Args)]
pub struct AddArgs {
    /// Task text
    pub text: String,
}

#[derive(Args)]
pub struct EditArgs {
    /// Task ID
    pub id: String,
    /// New text
    pub text: String,
    /// Also set the checkbox (true/false)
    #[arg(long)]
    pub checked: Option<bool>,
}

#[derive(Args)]
pub struct IdArgs {
    /// Task ID
    pub id: String,
}

#[derive(Args)]
pub struct SettleArgs {
    /// Offset at release
    #[arg(allow_negative_numbers = true)]
    pub offset: f32,
    /// Width of the hidden action region
    #[arg(allow_negative_numbers = true)]
    pub width: f32,
}

#[derive(Args)]
pub struct ReplayArgs {
    /// Path to a TOML gesture script
    pub script: String,
}
