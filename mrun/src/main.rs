//! CLI front-end for [`mrun`]: loads a MIPS-I subset assembly source file and either
//! steps it to completion or prints its machine-code conversion, mirroring the teacher's
//! `vex` binary but with a modernized derive-based argument parser.

use clap::Parser;
use mips_core::DelegateSink;
use mrun::Orchestrator;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(version, about = "Assemble and single-step a MIPS-I subset program")]
struct Args {
    /// Assembly source file to load.
    source: PathBuf,

    /// Print each instruction's 32-bit machine code instead of running it.
    #[arg(long)]
    convert: bool,

    /// Maximum number of steps to execute before stopping.
    #[arg(long, default_value_t = 10_000)]
    max_steps: usize,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let source = match std::fs::read_to_string(&args.source) {
        Ok(text) => text,
        Err(err) => {
            log::error!("failed to read {}: {}", args.source.display(), err);
            return ExitCode::FAILURE;
        }
    };

    let mut orchestrator = Orchestrator::new();
    orchestrator.load(&source);

    if args.convert {
        for (source, encoded) in orchestrator.machine_code() {
            match encoded {
                Ok(bits) => println!("{source:<40} {bits}"),
                Err(err) => println!("{source:<40} error: {err}"),
            }
        }
        return ExitCode::SUCCESS;
    }

    let mut sink = DelegateSink::new(
        |pc| log::debug!("pc -> 0x{:08X}", pc),
        |message| println!("{message}"),
    );

    for _ in 0..args.max_steps {
        if orchestrator.finished() {
            break;
        }
        if orchestrator.step(&mut sink).is_err() {
            log::error!("step failed: program not loaded");
            return ExitCode::FAILURE;
        }
    }

    for (name, _, value) in orchestrator.register_values() {
        println!("{name:>5} = 0x{value:08X}");
    }

    ExitCode::SUCCESS
}
