use std::{env, io::Write, path::PathBuf};

use color_eyre::{Section, eyre::eyre};
use libsiteconfig::{
    config::SITE,
    export::{to_json, write_json},
};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: site-config [--pretty] [--out <path>]";

#[derive(Debug, PartialEq, Eq)]
struct Args {
    pretty: bool,
    out: Option<PathBuf>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = parse_args(env::args().skip(1))?;

    match args.out {
        Some(path) => {
            write_json(&SITE, &path, args.pretty)?;
        }
        None => {
            let json = to_json(&SITE, args.pretty)?;
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").with_note(|| "While writing to stdout")?;
        }
    }

    Ok(())
}

fn parse_args(mut raw: impl Iterator<Item = String>) -> color_eyre::Result<Args> {
    let mut args = Args {
        pretty: false,
        out: None,
    };

    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "--pretty" => args.pretty = true,
            "--out" => {
                if args.out.is_some() {
                    return Err(eyre!("--out given more than once")).suggestion(USAGE);
                }
                let path = raw
                    .next()
                    .ok_or_else(|| eyre!("--out requires a path"))
                    .suggestion(USAGE)?;
                if path.starts_with("--") {
                    return Err(eyre!("--out requires a path, got flag {path:?}"))
                        .suggestion(USAGE);
                }
                args.out = Some(PathBuf::from(path));
            }
            other => {
                return Err(eyre!("unrecognised argument {other:?}")).suggestion(USAGE);
            }
        }
    }

    Ok(args)
}

#[cfg(test)]
mod tests;
