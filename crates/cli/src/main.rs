use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use maze::api::{parse_ascii, solve, Orientation, Outcome, SearchCfg};
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

#[derive(Parser)]
#[command(name = "maze")]
#[command(about = "Turn-weighted maze solver")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve a text maze and print the minimal cost and the optimal-cell count
    Solve {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value_t = 1)]
        move_cost: u64,
        #[arg(long, default_value_t = 1000)]
        turn_cost: u64,
        /// Initial facing at the start cell (up/right/down/left or ^ > v <)
        #[arg(long, default_value = "right")]
        facing: Orientation,
        /// Optional JSON result path; a provenance sidecar is written next to it
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

/// JSON shape written by `solve --out`.
#[derive(Debug, Serialize)]
struct SolveRecord {
    reachable: bool,
    cost: Option<u64>,
    cell_count: Option<usize>,
    /// `[x, y]` pairs in row-major order.
    cells: Vec<[i32; 2]>,
}

impl From<&Outcome> for SolveRecord {
    fn from(outcome: &Outcome) -> Self {
        match outcome {
            Outcome::Reached { cost, cells } => {
                let mut pairs: Vec<[i32; 2]> = cells.iter().map(|c| [c.x, c.y]).collect();
                pairs.sort_by_key(|&[x, y]| (y, x));
                Self {
                    reachable: true,
                    cost: Some(*cost),
                    cell_count: Some(cells.len()),
                    cells: pairs,
                }
            }
            Outcome::NoPath => Self {
                reachable: false,
                cost: None,
                cell_count: None,
                cells: Vec::new(),
            },
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Solve {
            input,
            move_cost,
            turn_cost,
            facing,
            out,
        } => {
            let cfg = SearchCfg {
                move_cost,
                turn_cost,
                start_facing: facing,
            };
            run_solve(&input, cfg, out.as_deref())
        }
        Action::Report => report(),
    }
}

fn run_solve(input: &Path, cfg: SearchCfg, out: Option<&Path>) -> Result<()> {
    tracing::info!(input = %input.display(), ?cfg, "solve");
    let text = std::fs::read_to_string(input)
        .with_context(|| format!("reading {}", input.display()))?;
    let grid = parse_ascii(&text).with_context(|| format!("parsing {}", input.display()))?;
    tracing::info!(
        width = grid.width(),
        height = grid.height(),
        open = grid.open_cells(),
        "maze_loaded"
    );
    let outcome = solve(&grid, cfg).context("searching maze")?;

    match &outcome {
        Outcome::Reached { cost, cells } => {
            tracing::info!(cost, cells = cells.len(), "solved");
            println!("{cost}");
            println!("{}", cells.len());
        }
        Outcome::NoPath => {
            tracing::info!("no_path");
            println!("no path");
        }
    }

    if let Some(out) = out {
        write_record(out, &SolveRecord::from(&outcome))?;
        let params = json!({
            "input": input.to_string_lossy(),
            "move_cost": cfg.move_cost,
            "turn_cost": cfg.turn_cost,
            "facing": cfg.start_facing.to_string(),
        });
        let prov = provenance::write_sidecar(out, provenance::Payload::new(params))?;
        tracing::info!(out = %out.display(), provenance = %prov.display(), "written");
    }
    Ok(())
}

fn write_record(out: &Path, record: &SolveRecord) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(record)?)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "version": maze::VERSION,
        "defaults": {
            "move_cost": SearchCfg::default().move_cost,
            "turn_cost": SearchCfg::default().turn_cost,
            "facing": SearchCfg::default().start_facing.to_string(),
        },
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn solve_writes_record_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("maze.txt");
        fs::write(&input, ".....\nS.#.E\n.....\n").unwrap();
        let out = dir.path().join("results/maze.json");
        run_solve(&input, SearchCfg::default(), Some(&out)).unwrap();

        let rec: serde_json::Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(rec["reachable"], true);
        assert_eq!(rec["cost"], 3006);
        assert_eq!(rec["cell_count"], 13);
        assert_eq!(rec["cells"].as_array().unwrap().len(), 13);
        assert_eq!(rec["cells"][0], json!([0, 0]));
        assert!(dir.path().join("results/maze.provenance.json").exists());
    }

    #[test]
    fn unreachable_exit_is_not_an_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("walled.txt");
        fs::write(&input, "S#E\n").unwrap();
        let out = dir.path().join("walled.json");
        run_solve(&input, SearchCfg::default(), Some(&out)).unwrap();
        let rec: serde_json::Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(rec["reachable"], false);
        assert!(rec["cost"].is_null());
    }

    #[test]
    fn configuration_errors_carry_context() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("no_exit.txt");
        fs::write(&input, "S..\n").unwrap();
        let err = run_solve(&input, SearchCfg::default(), None).unwrap_err();
        assert!(format!("{err:#}").contains("no exit marker"));

        let missing = dir.path().join("missing.txt");
        let err = run_solve(&missing, SearchCfg::default(), None).unwrap_err();
        assert!(format!("{err:#}").contains("reading"));
    }

    #[test]
    fn cli_parses_solve_flags() {
        let cmd = Cmd::try_parse_from([
            "maze", "solve", "--input", "m.txt", "--turn-cost", "7", "--facing", "^",
        ])
        .unwrap();
        match cmd.action {
            Action::Solve {
                turn_cost,
                move_cost,
                facing,
                out,
                ..
            } => {
                assert_eq!((move_cost, turn_cost), (1, 7));
                assert_eq!(facing, Orientation::Up);
                assert!(out.is_none());
            }
            Action::Report => panic!("expected solve"),
        }
    }
}
