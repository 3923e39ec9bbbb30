use clap::Parser;
use lessonboard::cli::commands::Cli;
use lessonboard::cli::handlers;
use lessonboard::io::logging::init_logging;
use lessonboard::session::Session;

fn main() {
    let cli = Cli::parse();

    let mut session = match Session::open(cli.data_dir.as_deref()) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };
    // Held until exit so buffered log lines reach the file
    let log_guard = init_logging(&session.config.log, &session.data_dir);

    let result = match cli.command {
        // No subcommand → launch TUI
        None => lessonboard::tui::run(session),
        Some(_) => handlers::dispatch(cli, &mut session),
    };
    drop(log_guard);
    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
