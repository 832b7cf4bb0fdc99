mod cmd;
mod logging;
mod system;
mod tui;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "vclip", version, about = "Send clipped notes with generated frontmatter to Obsidian")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print a summary
    Doctor,

    /// Print the frontmatter generated from a set of properties
    Frontmatter(FrontmatterArgs),

    /// Render a note from a template and send it to Obsidian
    Send(SendArgs),

    /// Manage the variable include/exclude lists
    Vars(VarsArgs),
}

#[derive(Debug, Args)]
pub struct FrontmatterArgs {
    /// JSON or YAML file holding a list of properties
    #[arg(long, conflicts_with = "template")]
    pub properties: Option<PathBuf>,

    /// Use the properties of this template
    #[arg(long)]
    pub template: Option<String>,

    /// Captured variable (e.g. --var title="My Note"); repeatable
    #[arg(long = "var", value_parser = parse_key_val)]
    pub vars: Vec<(String, String)>,
}

#[derive(Debug, Args)]
pub struct SendArgs {
    /// Template to render
    #[arg(long)]
    pub template: String,

    /// File holding the note body ("-" reads stdin)
    #[arg(long)]
    pub body: Option<PathBuf>,

    /// Note name (defaults to the template's note name)
    #[arg(long)]
    pub name: Option<String>,

    /// Destination folder (defaults to the template's path)
    #[arg(long)]
    pub path: Option<String>,

    /// Vault name (defaults to the template's vault, then the first vault)
    #[arg(long)]
    pub vault: Option<String>,

    /// Write behavior: create, append, prepend, overwrite, append-daily, prepend-daily
    #[arg(long)]
    pub behavior: Option<String>,

    /// Captured variable (e.g. --var title="My Note"); repeatable
    #[arg(long = "var", value_parser = parse_key_val)]
    pub vars: Vec<(String, String)>,
}

#[derive(Debug, Args)]
pub struct VarsArgs {
    #[command(subcommand)]
    pub command: VarsCommand,
}

#[derive(Debug, Args)]
pub struct ListSelector {
    /// Edit the exclude list instead of the include list
    #[arg(long)]
    pub exclude: bool,

    /// Edit the lists of this template instead of the global settings
    #[arg(long)]
    pub template: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum VarsCommand {
    /// Print the entries of a list
    List(ListSelector),

    /// Append an entry (surrounding whitespace is trimmed)
    Add {
        #[command(flatten)]
        selector: ListSelector,
        value: String,
    },

    /// Remove the first entry equal to the value
    Remove {
        #[command(flatten)]
        selector: ListSelector,
        value: String,
    },

    /// Edit a list interactively
    Edit(ListSelector),
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s.find('=').ok_or_else(|| format!("invalid KEY=value: no `=` found in `{s}`"))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

fn main() {
    let cli = Cli::parse();
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Doctor => cmd::doctor::run(config),
        Commands::Frontmatter(args) => cmd::frontmatter::run(config, &args),
        Commands::Send(args) => cmd::send::run(config, &args),
        Commands::Vars(args) => match args.command {
            VarsCommand::Edit(selector) => {
                if let Err(e) = tui::run(config, &selector) {
                    eprintln!("Error: {e:?}");
                    std::process::exit(1);
                }
            }
            other => cmd::vars::run(config, other),
        },
    }
}
