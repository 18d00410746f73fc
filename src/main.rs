// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recruitline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Recruitline CLI entrypoint.
//!
//! By default this runs the interactive note editor on a data folder. `--search` and `--render`
//! run a single query headlessly and print the result to stdout.

use std::error::Error;
use std::fs::File;
use std::sync::{Arc, Mutex};

use recruitline::model::{CandidateId, EntityKey, Mention, SearchCatalog, UserId};
use recruitline::query::{rank, CandidateSource, StaticCandidateSource};
use recruitline::render::{MentionRenderer, NameMatchRenderer, RenderOptions, Segment};
use recruitline::store::{demo_dataset, DataFolder, Dataset};
use recruitline::text::{char_offset, text_len};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_ENV: &str = "RECRUITLINE_LOG";
const DEFAULT_LOG_FILTER: &str = "recruitline=info";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<data-dir>] [--log-file <path>]\n  {program} [--data <dir>] [--log-file <path>]\n  {program} --demo [--log-file <path>]\n  {program} [<data-dir> | --demo] --search <query>\n  {program} --render <text> [--mention <name>=<kind>:<id>]...\n\nThe data folder holds users.json (required), candidates.json, vacancies.json and\ntalent-pools.json. If data-dir/--data is omitted, the current working directory is used.\n--demo uses the built-in demo data and cannot be combined with data-dir/--data.\n\n--search prints ranked global search results; --render prints the segments of a note.\nThe two cannot be combined. Each --mention commits `@name` to the note's ledger before\nrendering; kind is `user` or `candidate`.\n\nLogs are filtered by {LOG_ENV} (default `{DEFAULT_LOG_FILTER}`). Headless modes log to\nstderr; the TUI only logs when --log-file is given."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    demo: bool,
    data_dir: Option<String>,
    search: Option<String>,
    render: Option<String>,
    mentions: Vec<(String, EntityKey)>,
    log_file: Option<String>,
}

impl CliOptions {
    fn is_headless(&self) -> bool {
        self.search.is_some() || self.render.is_some()
    }
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--data" => {
                if options.data_dir.is_some() {
                    return Err(());
                }
                options.data_dir = Some(args.next().ok_or(())?);
            }
            "--search" => {
                if options.search.is_some() {
                    return Err(());
                }
                options.search = Some(args.next().ok_or(())?);
            }
            "--render" => {
                if options.render.is_some() {
                    return Err(());
                }
                options.render = Some(args.next().ok_or(())?);
            }
            "--mention" => {
                let value = args.next().ok_or(())?;
                options.mentions.push(parse_mention(&value)?);
            }
            "--log-file" => {
                if options.log_file.is_some() {
                    return Err(());
                }
                options.log_file = Some(args.next().ok_or(())?);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.data_dir.is_some() {
                    return Err(());
                }
                options.data_dir = Some(arg);
            }
        }
    }

    if options.demo && options.data_dir.is_some() {
        return Err(());
    }

    if options.search.is_some() && options.render.is_some() {
        return Err(());
    }

    if !options.mentions.is_empty() && options.render.is_none() {
        return Err(());
    }

    Ok(options)
}

/// `Lisa Bakker=user:u1` or `Noah Linden=candidate:c4`.
fn parse_mention(value: &str) -> Result<(String, EntityKey), ()> {
    let (name, target) = value.rsplit_once('=').ok_or(())?;
    let (kind, id) = target.split_once(':').ok_or(())?;
    let name = name.trim();
    if name.is_empty() {
        return Err(());
    }
    let key = match kind {
        "user" => EntityKey::User(UserId::new(id).map_err(|_| ())?),
        "candidate" => EntityKey::Candidate(CandidateId::new(id).map_err(|_| ())?),
        _ => return Err(()),
    };
    Ok((name.to_owned(), key))
}

fn init_tracing(options: &CliOptions) -> Result<(), Box<dyn Error>> {
    let filter = || {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    };

    if let Some(path) = &options.log_file {
        let file = File::create(path)?;
        tracing_subscriber::registry()
            .with(filter())
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .try_init()?;
    } else if options.is_headless() {
        tracing_subscriber::registry()
            .with(filter())
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()?;
    }

    Ok(())
}

/// One tab-separated line per ranked result: kind, title, subtitle, url.
fn search_lines(query: &str, catalog: &SearchCatalog) -> Vec<String> {
    rank(query, catalog)
        .into_iter()
        .map(|result| {
            let kind = result.kind.label();
            format!("{kind}\t{}\t{}\t{}", result.title, result.subtitle, result.url)
        })
        .collect()
}

/// Builds the ledger for `--mention` flags, anchored at the first `@name` in `text`.
fn ledger_for(text: &str, mentions: &[(String, EntityKey)]) -> Vec<Mention> {
    mentions
        .iter()
        .filter_map(|(name, target)| {
            let mention_text = format!("@{name}");
            let start_index = char_offset(text, text.find(&mention_text)?);
            Some(Mention {
                target: target.clone(),
                name: name.as_str().into(),
                start_index,
                end_index: start_index + text_len(&mention_text),
            })
        })
        .collect()
}

/// Tokens without a matching `--mention` come out unresolved.
fn render_lines(text: &str, mentions: &[(String, EntityKey)]) -> Vec<String> {
    let renderer = NameMatchRenderer::new(RenderOptions { mark_unknown: true });
    renderer
        .render(text, &ledger_for(text, mentions))
        .iter()
        .map(|segment| match segment {
            Segment::Plain(text) => format!("plain\t{text:?}"),
            Segment::Mention(span) => match span.kind() {
                Some(kind) => format!("mention\t@{}\t{}", span.name, kind.as_str()),
                None => format!("mention\t@{}\tunresolved", span.name),
            },
        })
        .collect()
}

type Loaded = (Dataset, Arc<dyn CandidateSource>);

fn load_dataset(options: &CliOptions) -> Result<Loaded, Box<dyn Error>> {
    if options.demo {
        let dataset = demo_dataset();
        let source: Arc<dyn CandidateSource> =
            Arc::new(StaticCandidateSource::new(dataset.catalog.candidates.clone()));
        return Ok((dataset, source));
    }

    let dir = options.data_dir.clone().unwrap_or_else(|| ".".to_owned());
    let folder = DataFolder::new(dir);
    let dataset = folder.load()?;
    Ok((dataset, Arc::new(folder)))
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "recruitline".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        init_tracing(&options)?;

        if let Some(text) = &options.render {
            for line in render_lines(text, &options.mentions) {
                println!("{line}");
            }
            return Ok(());
        }

        let (dataset, source) = load_dataset(&options)?;

        if let Some(query) = &options.search {
            let lines = search_lines(query, &dataset.catalog);
            tracing::info!(query = %query, results = lines.len(), "global search");
            for line in lines {
                println!("{line}");
            }
            return Ok(());
        }

        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
        let handle = runtime.handle().clone();
        runtime
            .block_on(async move {
                tokio::task::spawn_blocking(move || {
                    recruitline::tui::run(dataset, source, handle).map_err(|err| err.to_string())
                })
                .await
            })
            .map_err(|err| err.to_string())??;
        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("recruitline: {err}");
        std::process::exit(1);
    }
}
