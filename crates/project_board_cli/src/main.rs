//! Interactive terminal shell for the project board.
//!
//! # Responsibility
//! - Drive the core form and list views from stdin/stdout.
//! - Print both lists after every accepted project and alerts to stderr.
//!
//! Enter `:q` at any prompt, or close stdin, to exit.

use log::info;
use project_board_core::config::LOG_LEVEL_ENV;
use project_board_core::{
    init_logging, FormField, ListKind, LogSettings, MemoryForm, MemoryList, ProjectInput,
    ProjectList, ProjectState, SubmitEvent, SubmitOutcome,
};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

const QUIT_COMMAND: &str = ":q";
const CLI_DEFAULT_LOG_LEVEL: &str = "warn";

fn main() -> ExitCode {
    if let Err(err) = start_logging() {
        eprintln!("project-board: {err}");
        return ExitCode::from(2);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    match run(stdin.lock(), stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("project-board: {err}");
            ExitCode::FAILURE
        }
    }
}

fn start_logging() -> Result<(), String> {
    let mut settings = LogSettings::from_env().map_err(|err| err.to_string())?;
    // Stderr is shared with alerts; stay quiet unless asked otherwise.
    if std::env::var_os(LOG_LEVEL_ENV).is_none() {
        settings.level = CLI_DEFAULT_LOG_LEVEL.to_string();
    }
    init_logging(&settings)
}

fn run(mut input: impl BufRead, mut out: impl Write) -> io::Result<()> {
    let state = ProjectState::new();
    let mut form = ProjectInput::new(MemoryForm::new(), state.clone());
    let lists: Vec<ProjectList<MemoryList>> = ListKind::ALL
        .into_iter()
        .map(|kind| ProjectList::new(kind, MemoryList::new(), &state))
        .collect();

    writeln!(out, "project-board {}", project_board_core::core_version())?;
    loop {
        for field in FormField::ALL {
            write!(out, "{}: ", field.id())?;
            out.flush()?;
            let Some(line) = read_line(&mut input)? else {
                info!("event=cli_exit module=cli status=ok reason=eof");
                return Ok(());
            };
            if line == QUIT_COMMAND {
                info!("event=cli_exit module=cli status=ok reason=quit");
                return Ok(());
            }
            form.host_mut().set(field, line);
        }

        match form.submit_handler(&mut SubmitEvent::new()) {
            SubmitOutcome::Added(project) => {
                writeln!(out, "added {}", project.id())?;
                for list in &lists {
                    print_list(&mut out, list)?;
                }
            }
            SubmitOutcome::Rejected => {
                for alert in form.host_mut().take_alerts() {
                    eprintln!("{alert}");
                }
            }
        }
    }
}

fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn print_list(out: &mut impl Write, list: &ProjectList<MemoryList>) -> io::Result<()> {
    list.with_host(|host| {
        writeln!(out, "{}", host.heading().unwrap_or_default())?;
        for item in host.items() {
            writeln!(out, "  - {item}")?;
        }
        Ok(())
    })
}
