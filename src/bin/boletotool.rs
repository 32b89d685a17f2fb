use clap::{Parser, Subcommand};
use rust_boleto::input::InputBuffer;
use rust_boleto::lookup::CompanyTable;
use rust_boleto::pipeline::{decode_batch, summarize};
use rust_boleto::tools::{format_record, load_names, outcome_summary, read_lines, replay_keys};
use rust_boleto::{ValidationOutcome, decode_with, normalize_line};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "boletotool", version, about = "RustBoleto CLI tools")]
struct Cli {
    /// Extra company names (`id<TAB>name` per line)
    #[arg(long, global = true)]
    companies: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode and verify one digitable line
    Decode {
        line: String,
        #[arg(long)]
        json: bool,
    },
    /// Show how a digit string renders in the masked field
    Mask { digits: String },
    /// Replay key names (`0`-`9`, Backspace, Delete, ArrowLeft...) into the field
    Type {
        #[arg(required = true)]
        keys: Vec<String>,
    },
    /// Decode every line of a file
    Batch {
        file: PathBuf,
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let names = match load_names(cli.companies.as_deref()) {
        Ok(names) => names,
        Err(err) => {
            eprintln!("Failed to load company table: {}", err);
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Command::Decode { line, json } => decode_cmd(&line, json, &names),
        Command::Mask { digits } => mask_cmd(&digits),
        Command::Type { keys } => type_cmd(&keys, &names),
        Command::Batch { file, json } => batch_cmd(&file, json, &names),
    }
}

fn print_outcome(outcome: &ValidationOutcome, json: bool) {
    if json {
        match serde_json::to_string_pretty(outcome) {
            Ok(text) => println!("{}", text),
            Err(err) => eprintln!("Failed to serialize outcome: {}", err),
        }
        return;
    }
    println!("{}", outcome_summary(outcome));
    if let Some(record) = outcome.record() {
        println!("{}", format_record(record));
    }
}

fn decode_cmd(line: &str, json: bool, names: &CompanyTable) -> ExitCode {
    let outcome = decode_with(&normalize_line(line), names);
    print_outcome(&outcome, json);
    if outcome.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn mask_cmd(digits: &str) -> ExitCode {
    let mut buffer = InputBuffer::new();
    let accepted = buffer.type_str(digits);
    println!("accepted: {} digits", accepted);
    println!("masked:   [{}]", buffer.masked());
    println!("hint:     [{}]", buffer.hint());
    println!("complete: {}", buffer.is_complete());
    ExitCode::SUCCESS
}

fn type_cmd(keys: &[String], names: &CompanyTable) -> ExitCode {
    let mut buffer = InputBuffer::new();
    for step in replay_keys(&mut buffer, keys) {
        match step.result {
            Ok(effect) => println!("{:>10}  {:?}  [{}]", step.key, effect, step.masked),
            Err(err) => println!("{:>10}  rejected: {}", step.key, err),
        }
    }
    println!("digits: {} ({}/48)", buffer.digits(), buffer.len());
    if buffer.is_complete() {
        let outcome = decode_with(buffer.digits(), names);
        print_outcome(&outcome, false);
    }
    ExitCode::SUCCESS
}

fn batch_cmd(file: &Path, json: bool, names: &CompanyTable) -> ExitCode {
    let lines = match read_lines(file) {
        Ok(lines) => lines,
        Err(err) => {
            eprintln!("Failed to read {}: {}", file.display(), err);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();
    let outcomes = decode_batch(&lines, names);
    let elapsed = start.elapsed();

    if json {
        match serde_json::to_string_pretty(&outcomes) {
            Ok(text) => println!("{}", text),
            Err(err) => {
                eprintln!("Failed to serialize outcomes: {}", err);
                return ExitCode::FAILURE;
            }
        }
    } else {
        for (line, outcome) in lines.iter().zip(&outcomes) {
            println!("{}  {}", line, outcome_summary(outcome));
        }
    }

    let summary = summarize(&outcomes);
    eprintln!(
        "{} lines, {} valid, {} invalid ({:.2}%) in {:.2?}",
        summary.total,
        summary.valid,
        summary.invalid(),
        summary.valid_ratio() * 100.0,
        elapsed
    );
    ExitCode::SUCCESS
}
