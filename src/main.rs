use std::fs;

use clap::Parser;
use fridgescript::vm::machine::{DEFAULT_MAX_STEPS, Machine, StepOutcome};

/// fridgescript is an easy to use, domain-specific scripting language for
/// controlling a simulated refrigerator.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells fridgescript to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Treats the input as fridge assembly instead of source code.
    #[arg(short, long)]
    asm: bool,

    /// Compiles the script and prints the generated assembly instead of
    /// running it.
    #[arg(short, long)]
    emit_asm: bool,

    /// Logs every executed instruction to stderr.
    #[arg(short, long)]
    trace: bool,

    /// The maximum number of instructions to execute before giving up.
    #[arg(long, default_value_t = DEFAULT_MAX_STEPS)]
    max_steps: usize,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents.clone()
    };

    if let Err(e) = run(&args, &script) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Compiles and executes the script per the command-line flags, printing
/// collected output and a final-state summary.
fn run(args: &Args, script: &str) -> Result<(), Box<dyn std::error::Error>> {
    let program = if args.asm {
        fridgescript::vm::asm::parse(script)?
    } else {
        fridgescript::compile(script)?
    };

    if args.emit_asm {
        print!("{program}");
        return Ok(());
    }

    let mut machine = Machine::new(program)?;

    if args.trace {
        loop {
            if machine.steps() >= args.max_steps {
                return Err(Box::new(
                    fridgescript::error::RuntimeError::StepLimitExceeded { limit: args.max_steps },
                ));
            }
            let Some(instr) = machine.current_instr() else {
                break;
            };
            eprintln!("[{}] {instr}", machine.pc());
            if machine.step()? == StepOutcome::Halted {
                break;
            }
        }
    } else {
        machine.run(args.max_steps)?;
    }

    for line in &machine.output {
        println!("{line}");
    }

    println!("Temperature: {} C", machine.fridge.temp);
    println!("Mode: {}", machine.fridge.mode);
    println!("Items: [{}]", machine.fridge.items.join(", "));
    println!("Steps executed: {}", machine.steps());

    Ok(())
}
