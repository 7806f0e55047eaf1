use std::path::PathBuf;

use anyhow::{bail, Context};
use cabinetkit::{
    compile_file, init_logging, load_settings, view_to_json, CabinetDocument, TechView,
    BUILD_DATE, VERSION,
};
use tracing::info;

const USAGE: &str = "\
Usage: cabinetkit [OPTIONS] <FILE.cbt>
       cabinetkit --new <FILE.cbt>

Options:
  --view <plan|elevation|section>  Technical view to print (default from settings)
  --all                            Print the whole compiled scene
  --settings <FILE>                Settings file (.toml or .json)
  --new <FILE>                     Write the default cabinet document
  --version                        Print version information
  --help                           Print this message";

#[derive(Debug, Default)]
struct Args {
    file: Option<PathBuf>,
    view: Option<TechView>,
    all: bool,
    settings: Option<PathBuf>,
    new: Option<PathBuf>,
}

fn parse_view(name: &str) -> anyhow::Result<TechView> {
    match name {
        "plan" => Ok(TechView::Plan),
        "elevation" => Ok(TechView::Elevation),
        "section" => Ok(TechView::Section),
        other => bail!("Unknown view '{}'", other),
    }
}

fn parse_args() -> anyhow::Result<Option<Args>> {
    let mut args = Args::default();
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                println!("{}", USAGE);
                return Ok(None);
            }
            "--version" | "-V" => {
                println!("cabinetkit {} (built {})", VERSION, BUILD_DATE);
                return Ok(None);
            }
            "--view" => {
                let name = iter.next().context("--view needs a value")?;
                args.view = Some(parse_view(&name)?);
            }
            "--all" => args.all = true,
            "--settings" => {
                args.settings = Some(iter.next().context("--settings needs a value")?.into());
            }
            "--new" => {
                args.new = Some(iter.next().context("--new needs a value")?.into());
            }
            flag if flag.starts_with("--") => bail!("Unknown option '{}'\n\n{}", flag, USAGE),
            file => args.file = Some(file.into()),
        }
    }
    Ok(Some(args))
}

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let Some(args) = parse_args()? else {
        return Ok(());
    };

    if let Some(path) = args.new {
        CabinetDocument::default().save_to_file(&path)?;
        info!("Wrote default cabinet to {}", path.display());
        return Ok(());
    }

    let Some(file) = args.file else {
        bail!("No cabinet file given\n\n{}", USAGE);
    };

    let settings = load_settings(args.settings.as_deref())?;
    let compiled = compile_file(&file, &settings)?;
    info!(
        "Compiled {}: {} mm tall, {} views",
        file.display(),
        compiled.total_height,
        compiled.views.len()
    );

    let json = if args.all {
        compiled.to_json()?
    } else {
        let view = args.view.unwrap_or(settings.viewport.initial_view);
        view_to_json(&compiled, view, &settings.viewport)?
    };
    println!("{}", json);

    Ok(())
}
