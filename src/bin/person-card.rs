use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "person-card", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Mount the built-in demo cards.
    Show(ShowArgs),
    /// Shape-check and render props from a JSON file.
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct ShowArgs {
    /// Output format.
    #[arg(long, value_enum, default_value_t = FormatChoice::Text)]
    format: FormatChoice,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input props JSON: one object or an array of objects.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value_t = FormatChoice::Text)]
    format: FormatChoice,

    /// Fail on any shape warning instead of rendering anyway.
    #[arg(long)]
    strict: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatChoice {
    Text,
    Html,
}

impl From<FormatChoice> for person_card::OutputFormat {
    fn from(choice: FormatChoice) -> Self {
        match choice {
            FormatChoice::Text => person_card::OutputFormat::Text,
            FormatChoice::Html => person_card::OutputFormat::Html,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Show(args) => cmd_show(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_props_json(path: &Path) -> anyhow::Result<serde_json::Value> {
    let f = File::open(path).with_context(|| format!("open props '{}'", path.display()))?;
    let r = BufReader::new(f);
    let props: serde_json::Value =
        serde_json::from_reader(r).with_context(|| "parse props JSON")?;
    Ok(props)
}

fn mount_stdout(
    root: &person_card::Root,
    format: person_card::OutputFormat,
) -> anyhow::Result<()> {
    let mut sink = person_card::WriterSink::new(std::io::stdout().lock());
    root.mount(&mut sink, format)?;
    Ok(())
}

fn cmd_show(args: ShowArgs) -> anyhow::Result<()> {
    let root = person_card::demo::page()?;
    mount_stdout(&root, args.format.into())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let input = read_props_json(&args.in_path)?;
    let opts = person_card::RenderOpts {
        format: args.format.into(),
        strict: args.strict,
    };
    let nodes = person_card::render_all(&input, &opts)
        .with_context(|| format!("render props from '{}'", args.in_path.display()))?;
    let root: person_card::Root = nodes.into_iter().collect();
    mount_stdout(&root, opts.format)
}
