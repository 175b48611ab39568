mod output;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use log::info;

use crate::output::{Format, Options};

const USAGE: &str = "Usage: skate-ladder <snapshot.json> [--flip] [--light] [--layout]";

fn main() -> Result<()> {
    env_logger::init();

    let mut path = None;
    let mut options = Options::default();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--flip" => options.flip = true,
            "--light" => options.dark = false,
            "--layout" => options.format = Format::LayoutJson,
            flag if flag.starts_with("--") => bail!("unknown flag {flag}\n{USAGE}"),
            _ if path.is_none() => path = Some(PathBuf::from(&arg)),
            _ => bail!("unexpected argument {arg}\n{USAGE}"),
        }
    }
    let Some(path) = path else {
        eprintln!("{USAGE}");
        std::process::exit(1);
    };

    let data = std::fs::read(&path).with_context(|| format!("reading {}", path.display()))?;
    let rendered = output::render(&data, &options)?;
    info!("rendered {} ({} bytes)", path.display(), rendered.len());

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.write_all(b"\n")?;
    Ok(())
}
