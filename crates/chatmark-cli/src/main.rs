use anyhow::{Context, Result, bail};
use chatmark_config::Config;
use chatmark_engine::{Transcript, format_with, parse};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "chatmark", version, about = "Render chatbot markdown replies as safe HTML")]
struct Cli {
    /// Config file to use instead of ~/.config/chatmark/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Format one reply. Reads stdin when no file is given.
    Format {
        input: Option<PathBuf>,

        /// Print the parsed document as JSON instead of HTML
        #[arg(long)]
        json: bool,
    },
    /// Render a JSON transcript of messages as chat bubbles.
    Transcript { file: PathBuf },
    /// Write a config file holding the defaults.
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let output = match &cli.command {
        Command::Format { input, json } => {
            let config = load_config(cli.config.as_deref())?;
            let text = read_input(input.as_deref())?;
            format_command(&text, &config, *json)?
        }
        Command::Transcript { file } => {
            let config = load_config(cli.config.as_deref())?;
            transcript_command(file, &config)?
        }
        Command::InitConfig { force } => {
            let path = cli.config.clone().unwrap_or_else(Config::config_path);
            init_config(&path, *force)?;
            format!("Wrote {}", path.display())
        }
    };
    println!("{output}");
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = Config::load_or_default(path).context("loading config")?;
    log::debug!("Using {config:?}");
    Ok(config)
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading stdin")?;
            Ok(text)
        }
    }
}

fn format_command(text: &str, config: &Config, json: bool) -> Result<String> {
    if json {
        let doc = parse(text, &config.format);
        Ok(serde_json::to_string_pretty(&doc)?)
    } else {
        Ok(format_with(text, &config.format))
    }
}

fn transcript_command(file: &Path, config: &Config) -> Result<String> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("reading transcript {}", file.display()))?;
    let transcript: Transcript = serde_json::from_str(&raw)
        .with_context(|| format!("parsing transcript {}", file.display()))?;
    log::info!("Rendering {} messages", transcript.len());
    Ok(transcript.render_html(&config.format, &config.transcript))
}

fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("{} already exists, pass --force to overwrite", path.display());
    }
    Config::default()
        .save_to_path(path)
        .with_context(|| format!("writing {}", path.display()))
}
