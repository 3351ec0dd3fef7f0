use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

use farasa::Dictionary;

use clap::{error::ErrorKind, CommandFactory, Parser};

#[derive(Parser, Debug)]
#[clap(
    name = "compile",
    about = "A program to compile the segmentation tables into a binary model."
)]
struct Args {
    /// Directory of the raw tables (wordCount.json, roots.txt, ...).
    #[clap(short = 'd', long, env = "FARASA_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// File to which the binary model is output.
    #[clap(short = 'o', long)]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let Some(data_dir) = args.data_dir else {
        Args::command()
            .error(
                ErrorKind::MissingRequiredArgument,
                "--data-dir or FARASA_DATA_DIR must be specified.",
            )
            .exit();
    };

    eprintln!("Loading the tables in {:?}...", &data_dir);
    let start = Instant::now();
    let dict = Dictionary::from_dir(&data_dir)?;
    eprintln!("{} seconds", start.elapsed().as_secs_f64());

    eprintln!("Writing the binary model...: {:?}", &args.output);
    let mut wtr = BufWriter::new(File::create(&args.output)?);
    let num_bytes = dict.write(&mut wtr)?;
    eprintln!(
        "{:.3} MiB",
        num_bytes as f64 / (1024.0 * 1024.0)
    );

    Ok(())
}
