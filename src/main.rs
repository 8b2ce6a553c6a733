use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

use tableopt::infrastructure::{read_workbook, render_table, write_table};
use tableopt::{build_model, run, AppConfig, InputTables, SolverBackend, SolverFactory};

#[derive(Parser)]
#[command(name = "tableopt")]
#[command(about = "Solve linear programs described as Variables/Objective/Constraints tables", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build and solve the model, then emit the result table
    Solve {
        /// JSON workbook with Variables, Objective and Constraints sheets
        workbook: PathBuf,
        /// Write the result table here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Solver backend (auto, microlp, cbc, highs); overrides TABLEOPT_SOLVER
        #[arg(short, long)]
        solver: Option<SolverBackend>,
    },
    /// Validate the tables and assemble the model without solving
    Check {
        /// JSON workbook with Variables, Objective and Constraints sheets
        workbook: PathBuf,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    if let Err(e) = execute(cli.command) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn execute(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Solve {
            workbook,
            output,
            solver,
        } => {
            let mut config = AppConfig::from_env()?;
            if let Some(backend) = solver {
                config = config.with_backend(backend);
            }

            let tables = InputTables::from_workbook(&read_workbook(&workbook)?)?;
            let solver = SolverFactory::create_solver(&config.solver)?;
            log::info!("Solving {} with {}", workbook.display(), solver.name());

            let outcome = run(&tables, solver.as_ref())?;
            let stats = &outcome.result.statistics;
            log::info!(
                "Status: {} ({} variables, {} constraints, {:.1} ms)",
                outcome.result.status,
                stats.num_variables,
                stats.num_constraints,
                stats.solve_time_ms
            );

            for (name, value) in outcome.record.iter() {
                match value {
                    Some(v) => println!("{} = {}", name, v),
                    None => println!("{} = -", name),
                }
            }

            let table = outcome.record.to_table();
            match output {
                Some(path) => {
                    write_table(&path, &table)?;
                    log::info!("Results written to {}", path.display());
                }
                None => println!("{}", render_table(&table)?),
            }

            if !outcome.result.is_optimal() {
                log::warn!("{}", outcome.result.message);
            }
            Ok(())
        }
        Commands::Check { workbook } => {
            let tables = InputTables::from_workbook(&read_workbook(&workbook)?)?;
            let model = build_model(&tables)?;
            println!(
                "OK: {} variables ({} integer), {} objective terms, {} constraints",
                model.num_variables(),
                model.num_integer_variables(),
                model.objective.terms.len(),
                model.num_constraints()
            );
            Ok(())
        }
    }
}
