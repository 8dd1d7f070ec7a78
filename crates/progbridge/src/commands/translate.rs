//! Translate command - convert a program between vendor dialects.

use crate::config::ProgbridgeConfig;
use anyhow::Context;
use clap::Args;
use progbridge_translate::{Domain, Translation, decode_lossy, translate};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Banner timestamp format for generated PLC programs.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Translate command arguments
#[derive(Args)]
pub struct TranslateArgs {
    /// Input program file, use - for stdin
    pub input: PathBuf,

    /// Program domain (robot, plc)
    #[arg(long)]
    pub domain: Domain,

    /// Source dialect (e.g. ABB, Omron)
    #[arg(short, long)]
    pub from: String,

    /// Target dialect (e.g. FANUC, Inovance)
    #[arg(short, long)]
    pub to: String,

    /// Output file
    #[arg(short, long, conflicts_with = "out_dir")]
    pub output: Option<PathBuf>,

    /// Write `<stem>_<From>to<To>.<ext>` into this directory
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

/// Where the generated text goes.
#[derive(Debug, PartialEq)]
enum Destination {
    File(PathBuf),
    Stdout,
}

pub fn run(args: &TranslateArgs, config: &ProgbridgeConfig) -> anyhow::Result<()> {
    let bytes = read_input(&args.input)?;
    let source = decode_lossy(&bytes);

    let mut options = config.translate_options();
    if options.plc.timestamp {
        options.plc.generated_at = Some(chrono::Local::now().format(TIMESTAMP_FORMAT).to_string());
    }

    let translation = translate(args.domain, &args.from, &args.to, &source, &options)?;

    match destination(args, config, &translation) {
        Destination::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            std::fs::write(&path, &translation.text)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote translation");
        }
        Destination::Stdout => println!("{}", translation.text),
    }
    Ok(())
}

fn read_input(input: &Path) -> anyhow::Result<Vec<u8>> {
    let mut bytes = Vec::new();
    if input.as_os_str() == "-" {
        std::io::stdin()
            .read_to_end(&mut bytes)
            .context("failed to read stdin")?;
    } else {
        bytes = std::fs::read(input).with_context(|| format!("failed to read {}", input.display()))?;
    }
    Ok(bytes)
}

fn destination(args: &TranslateArgs, config: &ProgbridgeConfig, translation: &Translation) -> Destination {
    if let Some(path) = &args.output {
        return Destination::File(path.clone());
    }
    match args.out_dir.as_ref().or(config.output.dir.as_ref()) {
        Some(dir) => {
            let name = args
                .input
                .file_name()
                .and_then(|n| n.to_str())
                .filter(|n| *n != "-")
                .unwrap_or("stdin");
            Destination::File(dir.join(translation.file_name(name)))
        }
        None => Destination::Stdout,
    }
}
