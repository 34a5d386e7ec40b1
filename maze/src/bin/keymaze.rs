// CLI for solving key mazes from files, stdin or the built-in demo set

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use keymaze_maze::{
    format_actions, Direction, Maze, MazeError, MazeProblem, MazeState, DEMO_MAZES,
};
use keymaze_search::error::SearchError;
use keymaze_search::policy::SearchPolicy;
use keymaze_search::solver::{solve, Solution, SolveError};

#[derive(Parser, Debug)]
#[command(name = "keymaze")]
#[command(about = "Solve a grid maze by walking to its key, then to a goal", long_about = None)]
struct Args {
    /// Maze file; reads stdin when omitted
    #[arg(conflicts_with = "demo")]
    maze_file: Option<PathBuf>,

    /// Solve the built-in demo mazes instead
    #[arg(long)]
    demo: bool,

    /// JSON file with search budgets
    #[arg(long, value_name = "FILE")]
    policy: Option<PathBuf>,

    /// Maximum node expansions per leg
    #[arg(long)]
    max_expansions: Option<u64>,

    /// Maximum path depth per leg
    #[arg(long)]
    max_depth: Option<u32>,

    /// Wall-clock limit per leg, in milliseconds
    #[arg(long)]
    time_limit_ms: Option<u64>,

    /// Print the solution report as canonical JSON
    #[arg(long)]
    json: bool,

    /// Print the maze with the path drawn in
    #[arg(long)]
    render: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Maze(#[from] MazeError),

    #[error(transparent)]
    Policy(#[from] SearchError),

    #[error(transparent)]
    Solve(#[from] SolveError),
}

impl CliError {
    fn exit_code(&self) -> ExitCode {
        match self {
            Self::Solve(e) if e.is_no_solution() => ExitCode::from(1),
            _ => ExitCode::from(2),
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn read_text(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.display().to_string(),
        source,
    })
}

fn read_stdin() -> Result<String, CliError> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .map_err(|source| CliError::Io {
            path: "<stdin>".into(),
            source,
        })?;
    Ok(text)
}

/// File budgets first, then individual flags on top.
fn load_policy(args: &Args) -> Result<SearchPolicy, CliError> {
    let mut policy = match &args.policy {
        Some(path) => SearchPolicy::from_json_str(&read_text(path)?)?,
        None => SearchPolicy::default(),
    };
    if let Some(n) = args.max_expansions {
        policy.max_expansions = n;
    }
    if let Some(n) = args.max_depth {
        policy.max_depth = n;
    }
    if args.time_limit_ms.is_some() {
        policy.time_limit_ms = args.time_limit_ms;
    }
    policy.validate()?;
    debug!(?policy, "policy loaded");
    Ok(policy)
}

fn solution_json(solution: &Solution<MazeState, Direction>) -> serde_json::Value {
    let mut value = solution.to_json_value();
    if let serde_json::Value::Object(map) = &mut value {
        map.insert("digest".into(), solution.digest().into());
        map.insert("solved".into(), true.into());
    }
    value
}

fn error_json(err: &SolveError) -> serde_json::Value {
    serde_json::json!({
        "error": err.to_string(),
        "no_solution": err.is_no_solution(),
        "solved": false,
    })
}

fn print_solution(
    maze: &Maze,
    solution: &Solution<MazeState, Direction>,
    args: &Args,
) -> Result<(), CliError> {
    if args.json {
        println!("{}", solution_json(solution));
    } else {
        println!("{}", format_actions(&solution.actions));
    }
    if args.render {
        println!("{}", maze.render_path(maze.initial(), &solution.actions)?);
    }
    Ok(())
}

fn run_single(args: &Args, policy: &SearchPolicy) -> Result<(), CliError> {
    let text = match &args.maze_file {
        Some(path) => read_text(path)?,
        None => read_stdin()?,
    };
    let maze: Maze = text.parse()?;
    let problem = MazeProblem::new(maze);

    match solve(&problem, policy) {
        Ok(solution) => print_solution(problem.maze(), &solution, args),
        Err(err) => {
            if args.json {
                println!("{}", error_json(&err));
            } else if err.is_no_solution() {
                println!("no solution");
            }
            Err(err.into())
        }
    }
}

/// Every demo is attempted. Unsolvable demos are an expected outcome; any
/// other failure makes the whole run fail.
fn run_demos(args: &Args, policy: &SearchPolicy) -> Result<(), CliError> {
    let mut first_failure: Option<CliError> = None;
    for demo in DEMO_MAZES {
        let problem = demo.problem()?;
        match solve(&problem, policy) {
            Ok(solution) => {
                if args.json {
                    println!("{}: {}", demo.name, solution_json(&solution));
                } else {
                    println!("{}: {}", demo.name, format_actions(&solution.actions));
                }
                if args.render {
                    let maze = problem.maze();
                    println!("{}", maze.render_path(maze.initial(), &solution.actions)?);
                }
            }
            Err(err) if err.is_no_solution() => {
                if args.json {
                    println!("{}: {}", demo.name, error_json(&err));
                } else {
                    println!("{}: no solution", demo.name);
                }
            }
            Err(err) => {
                println!("{}: {err}", demo.name);
                if first_failure.is_none() {
                    first_failure = Some(err.into());
                }
            }
        }
    }
    first_failure.map_or(Ok(()), Err)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let result = load_policy(&args).and_then(|policy| {
        if args.demo {
            run_demos(&args, &policy)
        } else {
            run_single(&args, &policy)
        }
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if !matches!(&err, CliError::Solve(e) if e.is_no_solution()) {
                eprintln!("keymaze: {err}");
            }
            err.exit_code()
        }
    }
}
