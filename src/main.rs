use std::io::{self, Write};
use std::path::PathBuf;

use env_logger::Builder;
use log::{debug, error, LevelFilter};
use structopt::StructOpt;

use fs_wrappers::exceptions::ReadTextError;
use fs_wrappers::{FileAccessor, LogFacadeLogger, Logger, RealFileAccessor, TextFileReader};

#[derive(Debug, StructOpt)]
#[structopt(name = "fs-wrappers")]
struct Opt {
    #[structopt(help = "Files to read and print", value_name = "FILES", required = true)]
    files: Vec<PathBuf>,

    #[structopt(short = "v", long = "verbose", help = "Print debug information")]
    verbose: bool,
}

/// Prints each file to `out`; the first unreadable file ends the run.
fn print_files<F, L, W>(
    reader: &TextFileReader<F, L>,
    files: &[PathBuf],
    out: &mut W,
) -> Result<(), ReadTextError>
where
    F: FileAccessor + ?Sized,
    L: Logger + ?Sized,
    W: Write,
{
    for path in files {
        debug!("reading {}", path.display());
        let content = reader
            .read_text(path)
            .map_err(|e| ReadTextError::ReadFailed(path.clone(), e))?;
        out.write_all(content.as_bytes())?;
    }
    out.flush()?;
    Ok(())
}

fn main() -> Result<(), ReadTextError> {
    let opt = Opt::from_args();
    if opt.verbose {
        Builder::new().filter(None, LevelFilter::Debug).init();
    } else {
        Builder::new().filter(None, LevelFilter::Info).init();
    }

    let logger = LogFacadeLogger::new("fs_wrappers::reader");
    let reader = TextFileReader::new(&RealFileAccessor, &logger);
    let stdout = io::stdout();

    if let Err(e) = print_files(&reader, &opt.files, &mut stdout.lock()) {
        error!("{}\n\nExiting.", e);
        std::process::exit(1);
    }

    Ok(())
}
