use std::collections::BTreeMap;
use std::io::Write;

use anyhow::{Context, Result};
use argh::FromArgs;
use reactor_engine::assets::{AssetStore, ShaderStage};
use reactor_engine::logging::{LoggingConfig, init_logging};

/// Inspect the shader bundle embedded in reactor-engine.
#[derive(FromArgs)]
struct Args {
    /// log engine internals at debug level
    #[argh(switch, short = 'v')]
    verbose: bool,

    #[argh(subcommand)]
    command: Command,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum Command {
    List(ListCmd),
    Cat(CatCmd),
    Stat(StatCmd),
}

/// Print embedded paths matching a glob pattern, in build order.
#[derive(FromArgs)]
#[argh(subcommand, name = "list")]
struct ListCmd {
    /// glob pattern, e.g. "shaders/*" or "**/*.frag"; matches everything when omitted
    #[argh(positional, default = "String::new()")]
    pattern: String,
}

/// Write the exact bytes of one asset to stdout.
#[derive(FromArgs)]
#[argh(subcommand, name = "cat")]
struct CatCmd {
    /// asset path, e.g. "shaders/basic.vert"
    #[argh(positional)]
    path: String,
}

/// Summarize the bundle: asset count, total size, assets per shader stage.
#[derive(FromArgs)]
#[argh(subcommand, name = "stat")]
struct StatCmd {}

fn main() -> Result<()> {
    let args: Args = argh::from_env();

    init_logging(if args.verbose {
        LoggingConfig::verbose()
    } else {
        LoggingConfig::default()
    });

    let store = AssetStore::embedded();
    let mut out = std::io::stdout().lock();

    match args.command {
        Command::List(cmd) => {
            for path in store.list(&cmd.pattern) {
                writeln!(out, "{path}")?;
            }
        }
        Command::Cat(cmd) => {
            let bytes = store
                .open(&cmd.path)
                .with_context(|| format!("cannot read {:?} from the embedded bundle", cmd.path))?;
            out.write_all(bytes)?;
        }
        Command::Stat(StatCmd {}) => {
            let mut stages: BTreeMap<String, usize> = BTreeMap::new();
            let mut total = 0usize;

            for asset in store.iter() {
                total += asset.len();
                let stage = ShaderStage::from_path(asset.path())
                    .map_or_else(|| "other".to_owned(), |s| s.to_string());
                *stages.entry(stage).or_default() += 1;
            }

            writeln!(out, "assets: {}", store.len())?;
            writeln!(out, "bytes:  {total}")?;
            for (stage, count) in &stages {
                writeln!(out, "  {stage:<6} {count}")?;
            }
        }
    }

    out.flush()?;
    log::debug!("probe finished");
    Ok(())
}
