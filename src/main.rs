use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use zipsh::{run_session, ArchiveFs, EditorReader, Shell, ShellOptions};

#[derive(Parser)]
#[command(name = "zipsh")]
#[command(about = "A shell emulator running on the contents of an archive")]
#[command(version)]
struct Cli {
    /// Host name shown in the prompt
    hostname: String,

    /// Archive on the host file system (zip, tar or tar.gz)
    archive: PathBuf,

    /// Script to run first, named as an entry inside the archive
    startup_script: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Logs go to stderr so they never interleave with shell output (RUST_LOG)
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            if e.print().is_err() {
                eprintln!("{}", e);
            }
            std::process::exit(1);
        }
    };

    let fs = match ArchiveFs::open(&cli.archive) {
        Ok(fs) => fs,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let mut shell = Shell::new(Arc::new(fs), ShellOptions {
        hostname: Some(cli.hostname),
        ..Default::default()
    });

    let mut reader = match EditorReader::new() {
        Ok(reader) => reader,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let mut stdout = std::io::stdout();
    if let Err(e) = run_session(&mut shell, &cli.startup_script, &mut reader, &mut stdout).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
