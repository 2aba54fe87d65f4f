mod prompt;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use arith_drill_gen::practice_engine::courses;
use arith_drill_gen::{
    course, generate_problems, normalize, viewer, worksheet, DocumentFormat, GenerateRequest,
    WorksheetLayout, DEFAULT_QUOTA,
};
use clap::{Parser, ValueEnum};
use prompt::{Prompter, Selection};
use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Engine(#[from] arith_drill_gen::Error),
    #[error("input error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Html,
    Text,
}

impl From<FormatArg> for DocumentFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Html => DocumentFormat::Html,
            FormatArg::Text => DocumentFormat::Text,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "arith-drill", version, about = "Arithmetic practice sheet generator")]
struct Cli {
    /// Course key (see --list). Prompted for when course, min, or max is missing.
    #[arg(long)]
    course: Option<u8>,
    /// Smallest operand.
    #[arg(long, allow_hyphen_values = true)]
    min: Option<i64>,
    /// Largest operand (raised to at least 10).
    #[arg(long, allow_hyphen_values = true)]
    max: Option<i64>,
    /// Number of distinct problems to generate.
    #[arg(long, default_value_t = DEFAULT_QUOTA)]
    quota: usize,
    /// Seed for a reproducible sheet.
    #[arg(long)]
    seed: Option<u64>,
    /// Problems per row.
    #[arg(long, default_value_t = 4)]
    per_row: usize,
    /// Rows per page.
    #[arg(long, default_value_t = 13)]
    rows_per_page: usize,
    /// Output document format.
    #[arg(long, value_enum, default_value = "html")]
    format: FormatArg,
    /// Directory the worksheet is written into.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
    /// Do not open the worksheet after writing it.
    #[arg(long, default_value_t = false)]
    no_open: bool,
    /// Print the problem set as JSON and skip rendering. Needs --course,
    /// --min, and --max so no prompt text lands on stdout.
    #[arg(long, requires_all = ["course", "min", "max"])]
    json: bool,
    /// List courses and exit.
    #[arg(long, default_value_t = false)]
    list: bool,
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("arith_drill_gen=warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn select(cli: &Cli) -> Result<Selection, CliError> {
    match (cli.course, cli.min, cli.max) {
        (Some(key), Some(min), Some(max)) => {
            let chosen = course(key)?;
            normalize(min, max)?;
            Ok(Selection { course: chosen, min, max })
        }
        _ => {
            let stdin = io::stdin();
            Ok(Prompter::new(stdin.lock(), io::stdout()).select()?)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, CliError> {
    if cli.list {
        for (key, name) in courses::courses() {
            println!("{key}. {name}");
        }
        return Ok(ExitCode::SUCCESS);
    }

    let layout = WorksheetLayout {
        per_row: cli.per_row,
        rows_per_page: cli.rows_per_page,
        format: cli.format.into(),
    };
    layout.validate()?;

    let selection = select(&cli)?;
    let mut request = GenerateRequest::new(selection.course.key, selection.min, selection.max)
        .with_quota(cli.quota);
    request.rng_seed = cli.seed;

    let set = generate_problems(&request)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&set)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "\nYour selection: [{}] min: {} max: {}",
        set.course_name,
        set.range.min(),
        set.range.max()
    );
    println!("Generated problems:");
    println!("== {} problems ==", set.len());
    println!("{}", set.problems().join("  "));

    let now = chrono::Local::now();
    let path = match worksheet::write_worksheet(&set, &layout, &cli.out_dir, &now) {
        Ok(path) => path,
        Err(err) => {
            eprintln!("failed to write worksheet: {err}");
            return Ok(ExitCode::FAILURE);
        }
    };
    println!("Output file: {}", path.display());

    if !cli.no_open {
        if let Err(err) = viewer::open_in_viewer(&path) {
            eprintln!("warning: {err}");
        }
    }

    Ok(ExitCode::SUCCESS)
}
