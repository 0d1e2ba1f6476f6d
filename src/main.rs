use clap::{Arg, ArgAction, Command};
use snol::{repl, runner, Evaluator, ReplOptions, Termination};
use std::fs;
use std::path::Path;

fn main() {
    let matches = Command::new("snol")
        .about("An interpreter for SNOL, a tiny language of integer and float variables")
        .arg(
            Arg::new("file")
                .help("The script file to execute, one statement per line")
                .value_name("FILE")
                .index(1),
        )
        .arg(
            Arg::new("interactive")
                .short('i')
                .long("interactive")
                .help("Start the interactive console (after FILE, if given)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Do not print the banner, prompts or exit message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Print error reports without colors")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let options = ReplOptions {
        quiet: matches.get_flag("quiet"),
        color: !matches.get_flag("no-color"),
    };

    let mut evaluator = Evaluator::new();

    if let Some(file_path) = matches.get_one::<String>("file") {
        let termination = run_file(file_path, &mut evaluator, options.color);
        if !matches.get_flag("interactive") || termination == Termination::Exit {
            return;
        }
    }

    repl::start_with(evaluator, options);
}

fn run_file(path: &str, evaluator: &mut Evaluator, color: bool) -> Termination {
    let path = Path::new(path);

    if !path.exists() {
        eprintln!("Error: File '{}' not found", path.display());
        std::process::exit(1);
    }

    match fs::read_to_string(path) {
        Ok(source) => {
            let filename = path.display().to_string();
            runner::run(&source, Some(&filename), evaluator, color)
        }
        Err(e) => {
            eprintln!("Error reading file '{}': {}", path.display(), e);
            std::process::exit(1);
        }
    }
}
