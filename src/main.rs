use clap::Parser;
use log::{error, info};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use ticker_resolver::{
    join_article_text, Error, ReferenceData, TickerExtractor, DEFAULT_EXTRACTOR_CONFIG,
};

#[derive(Parser)]
#[command(name = "ticker-resolver-cli")]
#[command(about = "Print the tracked ticker symbols a news article is about")]
struct Args {
    /// Article title
    #[arg(short, long)]
    title: Option<String>,

    /// Article summary
    #[arg(short, long)]
    description: Option<String>,

    /// Article body; read from stdin when no field is given
    #[arg(short, long)]
    content: Option<String>,

    /// Directory holding tracked_securities.csv, manual_aliases.csv and
    /// executives.csv, instead of the embedded reference data
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Print the result as a JSON array
    #[arg(long)]
    json: bool,

    /// Print what each tier found and the entity mention report
    #[arg(long)]
    explain: bool,
}

fn load_reference_data(data_dir: Option<&Path>) -> Result<ReferenceData, Error> {
    match data_dir {
        Some(data_dir) => {
            info!("Loading reference data from {}", data_dir.display());

            ReferenceData::from_csv_strings(
                &fs::read_to_string(data_dir.join("tracked_securities.csv"))?,
                &fs::read_to_string(data_dir.join("manual_aliases.csv"))?,
                &fs::read_to_string(data_dir.join("executives.csv"))?,
            )
        }
        #[cfg(feature = "embed-bytes")]
        None => ReferenceData::embedded(),
        #[cfg(not(feature = "embed-bytes"))]
        None => Err(Error::ParserError(
            "No embedded reference data; pass --data-dir".to_string(),
        )),
    }
}

fn main() {
    #[cfg(feature = "logger-support")]
    env_logger::init();

    let args = Args::parse();

    let extractor = match load_reference_data(args.data_dir.as_deref()).and_then(
        |reference_data| TickerExtractor::new(&reference_data, DEFAULT_EXTRACTOR_CONFIG),
    ) {
        Ok(extractor) => extractor,
        Err(e) => {
            error!("Failed to initialize ticker extractor: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let mut content = args.content;

    if args.title.is_none() && args.description.is_none() && content.is_none() {
        let mut input = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut input) {
            error!("Failed to read from stdin: {}", e);
            std::process::exit(1);
        }
        content = Some(input);
    }

    let ticker_symbols = extractor.extract_tickers(
        args.title.as_deref(),
        args.description.as_deref(),
        content.as_deref(),
    );

    if args.explain {
        let text = join_article_text(&[
            args.title.as_deref(),
            args.description.as_deref(),
            content.as_deref(),
        ]);

        for (matcher_name, matched) in extractor.extract_by_matcher(&text) {
            println!("[{}] {:?}", matcher_name, matched);
        }

        for mention in extractor.entity_mentions(&text) {
            println!(
                "[mention] {:?} {:?} ({:?}) -> {:?}",
                mention.kind, mention.name, mention.confidence, mention.tickers
            );
        }
    }

    if args.json {
        match serde_json::to_string(&ticker_symbols) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("Failed to serialize result: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        for ticker_symbol in ticker_symbols {
            println!("{}", ticker_symbol);
        }
    }
}
