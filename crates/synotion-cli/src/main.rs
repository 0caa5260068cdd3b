use anyhow::{Context, Result, bail};
use serde::Serialize;
use std::{
    env, fs,
    io::{self, Write},
    path::{Path, PathBuf},
    process,
};
use synotion_engine::{Block, Conversion, Frontmatter, TitleSource, convert};

const USAGE: &str =
    "<file.md> [--title-from first-heading|filename] [--title TEXT] [--summary]";

#[derive(Debug, PartialEq)]
struct Args {
    file: PathBuf,
    title: TitleSource,
    summary: bool,
}

impl Args {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut file = None;
        let mut title_from = TitleSource::default();
        let mut custom_title = None;
        let mut summary = false;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--title-from" => {
                    let value = args.next().context("--title-from needs a value")?;
                    title_from = value.parse()?;
                }
                "--title" => {
                    custom_title = Some(args.next().context("--title needs a value")?);
                }
                "--summary" => summary = true,
                flag if flag.starts_with("--") => bail!("unknown option '{flag}'"),
                path => {
                    if file.replace(PathBuf::from(path)).is_some() {
                        bail!("only one input file may be given");
                    }
                }
            }
        }

        Ok(Self {
            file: file.context("no input file given")?,
            title: custom_title.map_or(title_from, TitleSource::Custom),
            summary,
        })
    }
}

/// The page as it would be sent to the workspace: resolved title, metadata
/// and top-level children.
#[derive(Serialize)]
struct Page<'a> {
    title: String,
    frontmatter: &'a Frontmatter,
    children: &'a [Block],
}

impl<'a> Page<'a> {
    fn new(conversion: &'a Conversion, source: &TitleSource, file: &Path) -> Self {
        Self {
            title: conversion.title_or(source, Some(file)),
            frontmatter: &conversion.frontmatter,
            children: &conversion.blocks,
        }
    }
}

fn run(args: &Args, out: &mut impl Write) -> Result<()> {
    let markdown = fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read '{}'", args.file.display()))?;
    let conversion = convert(&markdown)
        .with_context(|| format!("Failed to convert '{}'", args.file.display()))?;
    log::info!(
        "Converted {} into {} block(s)",
        args.file.display(),
        conversion.blocks.len()
    );

    if args.summary {
        for line in summary_lines(&conversion.blocks) {
            writeln!(out, "{line}")?;
        }
    } else {
        let page = Page::new(&conversion, &args.title, &args.file);
        serde_json::to_writer_pretty(&mut *out, &page)?;
        writeln!(out)?;
    }
    Ok(())
}

fn summary_lines(blocks: &[Block]) -> Vec<String> {
    blocks
        .iter()
        .map(|block| {
            let text = block.plain_text().replace('\n', " / ");
            format!("{:<20} {text}", block.type_name())
                .trim_end()
                .to_string()
        })
        .collect()
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let mut argv = env::args();
    let program = argv.next().unwrap_or_else(|| "synotion".to_string());

    let args = match Args::parse(argv) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Usage: {program} {USAGE}");
            process::exit(1);
        }
    };

    if let Err(e) = run(&args, &mut io::stdout().lock()) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
    Ok(())
}
