use std::io::Read;
use std::path::Path;
use std::{fs, io};

use vaultclip_core::dispatch::{ContentRoute, DispatchOptions, NoteBehavior, NoteDispatcher, OpenRoute};
use vaultclip_core::frontmatter::{compose_note, generate_frontmatter};
use vaultclip_core::vars::render_placeholders;

use super::{load_settings, variables_from_pairs};
use crate::SendArgs;
use crate::system::{OpenerChannel, StdoutNavigator, SystemClipboard};

pub fn run(config: Option<&Path>, args: &SendArgs) {
    let settings = load_settings(config, "send");

    let Some(template) = settings.template(&args.template) else {
        eprintln!("Template not found: {}", args.template);
        eprintln!("Available templates:");
        for t in &settings.templates {
            eprintln!("  - {}", t.name);
        }
        std::process::exit(1);
    };

    let behavior = match args.behavior.as_deref().map(str::parse::<NoteBehavior>) {
        None => template.behavior,
        Some(Ok(b)) => b,
        Some(Err(e)) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    let body = match read_body(args.body.as_deref()) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Failed to read note body: {e}");
            std::process::exit(1);
        }
    };

    let vars = variables_from_pairs(&args.vars);
    let frontmatter =
        generate_frontmatter(&template.properties, Some(&vars), &settings.frontmatter_context());
    let content = compose_note(&frontmatter, &body);

    let note_name = render_placeholders(args.name.as_deref().unwrap_or(&template.note_name), &vars);
    let path = args.path.as_deref().unwrap_or(&template.path);
    let vault = args
        .vault
        .as_deref()
        .or(template.vault.as_deref())
        .or(settings.default_vault());

    let dispatcher = NoteDispatcher::new(
        SystemClipboard,
        OpenerChannel,
        StdoutNavigator,
        DispatchOptions::from(&settings),
    );

    let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to start runtime: {e}");
            std::process::exit(1);
        }
    };
    let report = runtime
        .block_on(dispatcher.save_to_obsidian(&content, &note_name, path, vault, behavior));

    println!("OK   vclip send");
    println!("template: {}", template.name);
    println!("behavior: {behavior}");
    println!(
        "content:  {}",
        match report.content {
            ContentRoute::Clipboard => "clipboard",
            ContentRoute::Inline => "inline",
        }
    );
    println!(
        "opened:   {}",
        match report.opened_by {
            OpenRoute::Channel => "opener",
            OpenRoute::Navigator => "manual",
        }
    );
}

fn read_body(path: Option<&Path>) -> io::Result<String> {
    match path {
        None => Ok(String::new()),
        Some(p) if p == Path::new("-") => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(p) => fs::read_to_string(p),
    }
}
