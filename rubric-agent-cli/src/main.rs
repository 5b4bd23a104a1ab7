//! rubric-agent binary: parse the teacher input, run the grading pipeline, print the results.

use clap::Parser;
use rubric_agent_cli::{resolve_input, run_and_render, RunOptions};

#[derive(Parser, Debug)]
#[command(name = "rubric-agent")]
#[command(about = "Rubric generator: parse a teacher request, build a rubric, optionally grade a submission")]
struct Args {
    /// Teacher input (also accepted as positional words)
    #[arg(short, long, value_name = "TEXT")]
    message: Option<String>,

    /// Read the teacher input from a file
    #[arg(short, long, value_name = "FILE", conflicts_with = "message")]
    file: Option<String>,

    /// Save checkpoints under this thread id
    #[arg(long, value_name = "ID")]
    thread_id: Option<String>,

    /// Maximum node + router calls (overrides STEP_BUDGET)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    step_budget: Option<u32>,

    /// Model name (overrides OPENAI_MODEL)
    #[arg(long, value_name = "MODEL")]
    model: Option<String>,

    /// Print the final state as JSON
    #[arg(long)]
    json: bool,

    /// Print progress as each step completes
    #[arg(long)]
    stream: bool,

    /// Debug logging and per-node enter/exit lines
    #[arg(short, long)]
    verbose: bool,

    /// Positional words: teacher input (when -m/--message and -f/--file are not used)
    #[arg(trailing_var_arg = true)]
    rest: Vec<String>,
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "info,rubric_agent=debug,rubric_agent_cli=debug"
    } else {
        "warn"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let input = match resolve_input(args.message.as_deref(), args.file.as_deref(), &args.rest) {
        Ok(i) => i,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let options = RunOptions {
        thread_id: args.thread_id.clone(),
        step_budget: args.step_budget.map(|n| n as usize),
        model: args.model.clone(),
        json: args.json,
        stream: args.stream,
        verbose: args.verbose,
    };

    match run_and_render(&input, &options).await {
        Ok(out) => println!("{}", out),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
