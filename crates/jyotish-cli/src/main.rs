//! `jyotish` — terminal chat REPL for the JyotishAI engine.
//!
//! # Usage
//!
//! ```
//! jyotish --lang nepali --rules-dir data/rules
//! jyotish --no-llm                      # fully offline, canned fallbacks
//! jyotish --config ~/.config/jyotish/config.toml
//! ```
//!
//! Type `2004-06-11, career?` for a prediction, anything else for general
//! chat, `/clear` to wipe the session, `/quit` to exit.

mod backend;

use std::{
  io::Write,
  path::PathBuf,
  str::FromStr,
};

use anyhow::{Context, Result};
use backend::{OllamaClient, OllamaConfig};
use clap::Parser;
use jyotish_core::language::Language;
use jyotish_engine::{ChatBackend, Engine, NullBackend, SelectionMode, Session};
use jyotish_rules::TemplatePool;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "jyotish", about = "Chat REPL for the JyotishAI engine")]
struct Args {
  /// Path to a TOML config file (lang, rules_dir, ollama_url, model).
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Response language: english or nepali.
  #[arg(long, env = "JYOTISH_LANG")]
  lang: Option<String>,

  /// Directory of rule files (<category>.txt, one template per line).
  #[arg(long, value_name = "DIR")]
  rules_dir: Option<PathBuf>,

  /// Base URL of the Ollama server (default: http://localhost:11434).
  #[arg(long, env = "JYOTISH_OLLAMA_URL")]
  ollama_url: Option<String>,

  /// Ollama model name (default: llama3.2:1b).
  #[arg(long, env = "JYOTISH_MODEL")]
  model: Option<String>,

  /// Skip the LLM entirely; general chat gets the canned default reply.
  #[arg(long)]
  no_llm: bool,

  /// Draw narrative templates from fresh entropy instead of the birth-date
  /// seed (the original variety, at the cost of reproducible replies).
  #[arg(long)]
  entropy: bool,
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default)]
struct ConfigFile {
  #[serde(default)]
  lang:       String,
  #[serde(default)]
  rules_dir:  String,
  #[serde(default)]
  ollama_url: String,
  #[serde(default)]
  model:      String,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn")),
    )
    .with_writer(std::io::stderr)
    .init();

  let args = Args::parse();

  // Load config file if provided.
  let file_cfg: ConfigFile = if let Some(path) = &args.config {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")?
  } else {
    ConfigFile::default()
  };

  // CLI flags override config file, which overrides defaults.
  let language = args
    .lang
    .or_else(|| (!file_cfg.lang.is_empty()).then(|| file_cfg.lang.clone()))
    .map(|s| Language::from_str(&s))
    .transpose()
    .context("parsing --lang")?
    .unwrap_or_default();

  let rules_dir = args.rules_dir.or_else(|| {
    (!file_cfg.rules_dir.is_empty())
      .then(|| PathBuf::from(file_cfg.rules_dir.clone()))
  });

  let pool = match &rules_dir {
    Some(dir) => TemplatePool::with_rules_dir(language, dir),
    None => TemplatePool::builtin(language),
  };

  let mode = if args.entropy {
    SelectionMode::Entropy
  } else {
    SelectionMode::Seeded
  };

  tracing::info!(
    %language,
    ?rules_dir,
    no_llm = args.no_llm,
    "starting jyotish"
  );

  if args.no_llm {
    let engine =
      Engine::new(NullBackend, pool, language).with_selection_mode(mode);
    run_repl(engine).await
  } else {
    let ollama = OllamaConfig {
      base_url: args
        .ollama_url
        .or_else(|| {
          (!file_cfg.ollama_url.is_empty())
            .then(|| file_cfg.ollama_url.clone())
        })
        .unwrap_or_else(|| OllamaConfig::default().base_url),
      model:    args
        .model
        .or_else(|| {
          (!file_cfg.model.is_empty()).then(|| file_cfg.model.clone())
        })
        .unwrap_or_else(|| OllamaConfig::default().model),
    };
    let client =
      OllamaClient::new(ollama).context("building Ollama client")?;
    let engine =
      Engine::new(client, pool, language).with_selection_mode(mode);
    run_repl(engine).await
  }
}

// ─── REPL ─────────────────────────────────────────────────────────────────────

async fn run_repl<B: ChatBackend>(engine: Engine<B>) -> Result<()> {
  let mut session = Session::new(engine.language());

  println!("JyotishAI — offline Vedic chat ({})", engine.language());
  if let Some(welcome) = session.messages().first() {
    println!("jyotish> {}\n", welcome.content);
  }

  let stdin = std::io::stdin();
  loop {
    print!("you> ");
    std::io::stdout().flush().context("flushing prompt")?;

    let mut line = String::new();
    let read = stdin.read_line(&mut line).context("reading stdin")?;
    if read == 0 {
      break; // EOF
    }

    let input = line.trim();
    match input {
      "" => continue,
      "/quit" | "/exit" => break,
      "/clear" => {
        session.clear();
        println!("jyotish> (chat cleared)\n");
        continue;
      }
      _ => {}
    }

    let reply = engine.respond(&mut session, input).await;
    println!("jyotish> {reply}\n");
  }

  Ok(())
}
