use std::io::{self, BufRead, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use strkey_core::{
    find_root, localize_selection, lookup, InputPrompt, LocalizerConfig, Outcome, ReplacementSink,
    SelectionProvider,
};

/// Replace selected literal text with a localization key reference
#[derive(Debug, Parser)]
#[command(name = "strkey", version)]
pub struct Cli {
    /// Config file (JSON, or YAML by extension); defaults to the user config dir
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve or create a key for the selection and print the replacement text
    Localize(LocalizeArgs),
    /// Print the key holding a value, if any
    Lookup {
        /// File inside the project
        #[arg(long)]
        file: PathBuf,
        value: String,
    },
    /// Print the project root above a path
    Root { path: PathBuf },
    /// Print the effective configuration as JSON
    ShowConfig,
}

#[derive(Debug, Args)]
pub struct LocalizeArgs {
    /// File shown in the editor's active view
    #[arg(long)]
    pub file: PathBuf,
    /// Selected text; read from stdin when omitted
    #[arg(long)]
    pub selection: Option<String>,
    /// Key to use for a new value instead of prompting
    #[arg(long)]
    pub key: Option<String>,
    /// Print the outcome as JSON instead of the bare replacement
    #[arg(long)]
    pub json: bool,
}

/// Editor stand-in: selection from args or stdin, prompt on the terminal,
/// replacement captured for stdout.
pub struct TerminalHost<R> {
    file: PathBuf,
    selection: Option<String>,
    preset_key: Option<String>,
    input: R,
    replacement: Option<String>,
}

impl<R: BufRead> TerminalHost<R> {
    pub fn new(file: PathBuf, selection: Option<String>, preset_key: Option<String>, input: R) -> Self {
        Self {
            file,
            selection,
            preset_key,
            input,
            replacement: None,
        }
    }

    pub fn replacement(&self) -> Option<&str> {
        self.replacement.as_deref()
    }
}

impl<R> SelectionProvider for TerminalHost<R> {
    fn active_file(&self) -> Option<PathBuf> {
        Some(self.file.clone())
    }

    fn selection(&self) -> Option<String> {
        self.selection.clone()
    }
}

impl<R> ReplacementSink for TerminalHost<R> {
    fn replace_selection(&mut self, text: &str) {
        self.replacement = Some(text.to_string());
    }
}

impl<R: BufRead> InputPrompt for TerminalHost<R> {
    fn ask(&mut self, label: &str, default: &str) -> Option<String> {
        if let Some(key) = self.preset_key.take() {
            return Some(key);
        }

        eprint!("{label}: ");
        let _ = io::stderr().flush();

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            // EOF or an empty answer dismisses the prompt
            Ok(0) => None,
            Ok(_) => {
                let answer = line.trim_end_matches(['\r', '\n']);
                if answer.trim().is_empty() && default.is_empty() {
                    None
                } else if answer.trim().is_empty() {
                    Some(default.to_string())
                } else {
                    Some(answer.to_string())
                }
            }
            Err(err) => {
                log::warn!("could not read key from terminal: {}", err);
                None
            }
        }
    }
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .format_timestamp_millis()
        .init();
}

fn load_config(explicit: Option<&Path>) -> Result<LocalizerConfig> {
    Ok(LocalizerConfig::load_or_default(explicit)?)
}

fn run_localize(config: &LocalizerConfig, args: LocalizeArgs) -> Result<()> {
    let stdin = io::stdin();
    let piped_without_key = args.selection.is_none() && args.key.is_none();
    let (selection, prompt_input): (Option<String>, Box<dyn BufRead>) = match args.selection {
        Some(text) => (Some(text), Box::new(stdin.lock())),
        None => {
            let mut text = String::new();
            stdin
                .lock()
                .read_to_string(&mut text)
                .context("Failed to read selection from stdin")?;
            // stdin is spent; new keys then need --key
            (Some(text), Box::new(io::empty()))
        }
    };

    let mut host = TerminalHost::new(args.file, selection, args.key, prompt_input);
    let outcome = localize_selection(&mut host, config)?;
    check_outcome(&outcome, piped_without_key)?;

    if args.json {
        println!("{}", serde_json::to_string(&outcome)?);
        return Ok(());
    }

    match outcome {
        Outcome::Reused { ref key, .. } => log::info!("reused existing key {}", key),
        Outcome::Added { ref key, ref store_path, .. } => {
            log::info!("added key {} to {}", key, store_path.display())
        }
        Outcome::Cancelled => log::warn!("no key entered; selection left unchanged"),
    }
    if let Some(text) = host.replacement() {
        println!("{text}");
    }
    Ok(())
}

/// With the selection piped in there is nobody to answer the prompt, so a
/// cancellation there means a new value arrived without `--key`.
fn check_outcome(outcome: &Outcome, piped_without_key: bool) -> Result<()> {
    if piped_without_key && matches!(outcome, Outcome::Cancelled) {
        anyhow::bail!("no key stored for the selection; a new value needs --key when the selection is read from stdin");
    }
    Ok(())
}

pub fn run() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Localize(args) => run_localize(&config, args),
        Command::Lookup { file, value } => {
            match lookup(&config, &file, &value)? {
                Some(key) => println!("{key}"),
                None => log::info!("no entry holds {:?}", value),
            }
            Ok(())
        }
        Command::Root { path } => {
            let root = find_root(&path, &config.store.marker_path(), config.walk.max_depth)?;
            println!("{}", root.display());
            Ok(())
        }
        Command::ShowConfig => {
            println!("{}", config.to_json()?);
            Ok(())
        }
    }
}
