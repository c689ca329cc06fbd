// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Three commands are supported:
//   1. `predict` — one-shot screening from flags
//   2. `form`    — interactive session (the reference system's
//                  edit / Predict / Clear form, as a prompt loop)
//   3. `fields`  — prints the field table
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the commands submodule
pub mod commands;

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use commands::{Commands, FormArgs, PredictArgs};

use crate::application::screen_use_case::ScreenUseCase;
use crate::domain::decision::{DecisionMessage, Severity};
use crate::domain::error::ScreenError;
use crate::domain::field_spec::{spec_for, Field, FieldKind, FIELD_SPECS};
use crate::domain::session::{Phase, SessionState};

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "diabetes-screen",
    version = "0.1.0",
    about = "Screens eight medical measurements through a frozen classifier \
             and reports a diabetes verdict."
)]
pub struct Cli {
    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    /// This keeps the CLI layer thin — it only routes, never computes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Predict(args) => Self::run_predict(args),
            Commands::Form(args)    => Self::run_form(args),
            Commands::Fields        => Self::run_fields(),
        }
    }

    /// Handles the `predict` subcommand: one submission, one verdict.
    fn run_predict(args: PredictArgs) -> Result<()> {
        let use_case = ScreenUseCase::load(&args.artifacts.model, args.artifacts.scaler.clone())?;
        match use_case.screen(&args.raw_values()) {
            Ok(msg) => print_verdict(&msg),
            Err(err) => report_recoverable(&err)?,
        }
        Ok(())
    }

    /// Handles the `form` subcommand: an interactive session over
    /// stdin, mirroring the reference form's three interactions.
    fn run_form(args: FormArgs) -> Result<()> {
        let use_case = ScreenUseCase::load(&args.artifacts.model, args.artifacts.scaler.clone())?;
        let mut session = SessionState::new(&FIELD_SPECS);

        println!("Diabetes screening form. Commands:");
        println!("  set <field> <value>   edit one measurement");
        println!("  show                  print current values");
        println!("  predict               run the screening");
        println!("  clear                 reset all fields to defaults");
        println!("  quit                  leave");

        let stdin = io::stdin();
        loop {
            print!("> ");
            io::stdout().flush()?;
            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                break; // EOF ends the session
            }
            if !handle_form_line(line.trim(), &mut session, &use_case)? {
                break;
            }
        }
        Ok(())
    }

    /// Handles the `fields` subcommand.
    fn run_fields() -> Result<()> {
        println!(
            "{:<26} {:<8} {:>8} {:>8} {:>6} {:>8}",
            "field", "kind", "min", "max", "step", "default",
        );
        for spec in &FIELD_SPECS {
            let kind = match spec.kind {
                FieldKind::Integer => "int",
                FieldKind::Real    => "real",
            };
            println!(
                "{:<26} {:<8} {:>8} {:>8} {:>6} {:>8}",
                spec.field.name(), kind, spec.min, spec.max, spec.step, spec.default,
            );
        }
        Ok(())
    }
}

/// One iteration of the form loop. Returns false to quit.
fn handle_form_line(
    line:     &str,
    session:  &mut SessionState,
    use_case: &ScreenUseCase,
) -> Result<bool> {
    let mut parts = line.split_whitespace();
    match parts.next() {
        None => {}
        Some("quit") | Some("exit") => return Ok(false),
        Some("set") => {
            let (name, value) = (parts.next(), parts.next());
            match (name, value) {
                (Some(name), Some(value)) => match Field::parse(name) {
                    Some(field) => match value.parse::<f64>() {
                        Ok(v) => {
                            session.set(field, v);
                            println!("  {} = {v}", spec_for(field).label);
                        }
                        Err(_) => println!("'{value}' is not a number"),
                    },
                    None => {
                        let err = ScreenError::UnknownField { name: name.to_string() };
                        println!("{err}");
                    }
                },
                _ => println!("usage: set <field> <value>"),
            }
        }
        Some("show") => {
            for field in Field::ALL {
                println!("  {:<26} {}", field.name(), session.get(field));
            }
            if session.phase() == Phase::Submitted {
                println!("  (already screened — edit a field or clear to start over)");
            }
        }
        Some("predict") => {
            match use_case.screen(&session.raw_values()) {
                Ok(msg) => {
                    session.mark_submitted();
                    print_verdict(&msg);
                }
                Err(err) => report_recoverable(&err)?,
            }
        }
        Some("clear") => session.reset(&FIELD_SPECS),
        Some(other) => println!("unknown command '{other}' (try set/show/predict/clear/quit)"),
    }
    Ok(true)
}

/// Render one of the two fixed verdicts with its severity tag.
fn print_verdict(msg: &DecisionMessage) {
    match msg.severity {
        Severity::Warning => println!("WARNING: {}", msg.text),
        Severity::Success => println!("OK: {}", msg.text),
    }
}

/// Recoverable errors re-prompt; anything else propagates and
/// ends the process.
fn report_recoverable(err: &ScreenError) -> Result<()> {
    if err.is_recoverable() {
        match err {
            ScreenError::Inference { .. } => {
                // The user gets a generic message; the detail
                // goes to the log.
                tracing::error!("inference failure: {err}");
                println!("The screening could not be completed. Please try again.");
            }
            _ => println!("{err}"),
        }
        Ok(())
    } else {
        Err(anyhow::anyhow!(err.to_string()))
    }
}
