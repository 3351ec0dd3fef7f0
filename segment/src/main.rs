use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use farasa::buckwalter::{from_buckwalter, to_buckwalter};
use farasa::segmenter::worker::Worker;
use farasa::{Dictionary, Normalizer, Scheme, SegmentCache, Segmenter, Tokenizer};

use clap::Parser;
use rayon::prelude::*;

#[derive(Parser, Debug)]
#[clap(
    name = "segment",
    about = "Segments Arabic words into prefixes, a stem, and suffixes."
)]
struct Args {
    /// Compiled model made by the compile command.
    #[clap(short = 'i', long, conflicts_with = "data_dir")]
    model: Option<PathBuf>,

    /// Directory of the raw tables.
    #[clap(short = 'd', long, env = "FARASA_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Output scheme (plain or atb).
    #[clap(short = 's', long, default_value = "plain")]
    scheme: String,

    /// Keeps the letters as segmented instead of normalizing them.
    #[clap(long)]
    no_normalize: bool,

    /// Prints the N best segmentations of every word with their scores.
    #[clap(short = 'n', long, default_value = "1")]
    num_solutions: usize,

    /// Reads and writes words in Buckwalter transliteration.
    #[clap(long)]
    buckwalter: bool,

    /// Disables the precomputed tokenizations of frequent words.
    #[clap(long)]
    no_known_tokenizations: bool,

    /// JSON object of words and segmentations to start the cache with.
    #[clap(long)]
    cache: Option<PathBuf>,

    /// Input file. Reads stdin if not given.
    #[clap(long)]
    input: Option<PathBuf>,

    /// Output file. Writes stdout if not given.
    #[clap(short = 'o', long)]
    output: Option<PathBuf>,
}

fn load_dictionary(args: &Args) -> Result<Dictionary, Box<dyn Error>> {
    if let Some(model) = &args.model {
        eprintln!("Loading the model {}...", model.display());
        return Ok(Dictionary::read(BufReader::new(File::open(model)?))?);
    }
    if let Some(dir) = &args.data_dir {
        eprintln!("Loading the tables in {}...", dir.display());
        return Ok(Dictionary::from_dir(dir)?);
    }
    Err("either --model or --data-dir (or FARASA_DATA_DIR) must be given".into())
}

fn segment_word(worker: &mut Worker<'_>, cache: &SegmentCache, word: &str) -> String {
    cache.get_or_insert_with(word, || {
        worker.reset_word(word);
        worker.segment(1);
        worker
            .best()
            .map_or_else(|| word.to_string(), |best| best.segmentation().marked())
    })
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let scheme: Scheme = args.scheme.parse()?;

    let start = Instant::now();
    let dict = load_dictionary(&args)?;
    let segmenter = Segmenter::new(dict).use_known_tokenizations(!args.no_known_tokenizations);
    let cache = match &args.cache {
        Some(path) => SegmentCache::from_json_reader(BufReader::new(File::open(path)?))?,
        None => SegmentCache::new(),
    };
    let tokenizer = Tokenizer::new();
    let normalizer = Normalizer::new();
    let normalizer_opt = (!args.no_normalize).then_some(&normalizer);
    eprintln!(
        "Ready to segment :) ({:.3} seconds, {} cached words)",
        start.elapsed().as_secs_f64(),
        cache.len()
    );

    let rdr: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };
    let mut wtr: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    for line in rdr.lines() {
        let line = line?;
        let words = if args.buckwalter {
            tokenizer.tokenize(&from_buckwalter(&line))
        } else {
            tokenizer.tokenize(&line)
        };

        if args.num_solutions > 1 {
            let mut worker = segmenter.new_worker();
            for word in &words {
                worker.reset_word(word);
                worker.segment(args.num_solutions);
                for scored in worker.results().iter().rev() {
                    let rendered = scheme.render(scored.segmentation(), normalizer_opt);
                    writeln!(
                        wtr,
                        "{}\t{}\t{}",
                        word,
                        transliterate(rendered, args.buckwalter),
                        scored.score()
                    )?;
                }
            }
            writeln!(wtr, "EOS")?;
            continue;
        }

        let rendered: Vec<String> = words
            .par_iter()
            .map_init(
                || segmenter.new_worker(),
                |worker, word| {
                    let marked = segment_word(worker, &cache, word);
                    let rendered = scheme.render_marked(&marked, normalizer_opt);
                    transliterate(rendered, args.buckwalter)
                },
            )
            .collect();
        writeln!(wtr, "{}", rendered.join(" "))?;
    }
    wtr.flush()?;

    Ok(())
}

fn transliterate(s: String, buckwalter: bool) -> String {
    if buckwalter {
        to_buckwalter(&s)
    } else {
        s
    }
}
