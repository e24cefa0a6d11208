//! phraserank CLI
//!
//! Loads an embedding table and a phrase corpus, builds the index, and
//! runs one query from the command line.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use phraserank::embedding::{text_format, DEFAULT_LEXICAL_DIM};
use phraserank::{EmbeddingLookup, LexicalLookup, RankResult, SearchEngine};

/// CLI configuration
struct Config {
    /// Text-format embedding table; lexical fallback when absent
    embeddings: Option<PathBuf>,
    /// Corpus file, one phrase per line
    corpus: PathBuf,
    /// Number of results to return
    top: usize,
    /// Dimension of the lexical fallback vectors
    lexical_dim: usize,
    /// Emit results as a JSON array instead of TSV
    json: bool,
    /// The query text
    query: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            embeddings: None,
            corpus: PathBuf::from("corpus.txt"),
            top: 10,
            lexical_dim: DEFAULT_LEXICAL_DIM,
            json: false,
            query: String::new(),
        }
    }
}

fn parse_args() -> Config {
    let args: Vec<String> = std::env::args().collect();
    let mut config = Config::default();
    let mut query_words: Vec<String> = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--embeddings" | "-e" => {
                if i + 1 < args.len() {
                    config.embeddings = Some(PathBuf::from(&args[i + 1]));
                    i += 2;
                } else {
                    eprintln!("error: --embeddings requires a value");
                    process::exit(1);
                }
            }
            "--corpus" | "-c" => {
                if i + 1 < args.len() {
                    config.corpus = PathBuf::from(&args[i + 1]);
                    i += 2;
                } else {
                    eprintln!("error: --corpus requires a value");
                    process::exit(1);
                }
            }
            "--top" | "-n" => {
                if i + 1 < args.len() {
                    config.top = args[i + 1].parse().unwrap_or_else(|_| {
                        eprintln!("error: invalid result count: {}", args[i + 1]);
                        process::exit(1);
                    });
                    i += 2;
                } else {
                    eprintln!("error: --top requires a value");
                    process::exit(1);
                }
            }
            "--lexical-dim" => {
                if i + 1 < args.len() {
                    config.lexical_dim = args[i + 1].parse().unwrap_or_else(|_| {
                        eprintln!("error: invalid dimension: {}", args[i + 1]);
                        process::exit(1);
                    });
                    i += 2;
                } else {
                    eprintln!("error: --lexical-dim requires a value");
                    process::exit(1);
                }
            }
            "--json" => {
                config.json = true;
                i += 1;
            }
            "--help" | "-h" => {
                println!("phraserank - semantic phrase retrieval");
                println!();
                println!("USAGE:");
                println!("    phraserank [OPTIONS] <QUERY>...");
                println!();
                println!("OPTIONS:");
                println!("    -e, --embeddings <FILE>   Word-embedding table in word2vec/GloVe text format");
                println!("                              [default: deterministic lexical fallback]");
                println!("    -c, --corpus <FILE>       Phrase corpus, one phrase per line [default: corpus.txt]");
                println!("    -n, --top <N>             Number of results [default: 10]");
                println!("        --lexical-dim <D>     Fallback vector dimension [default: {DEFAULT_LEXICAL_DIM}]");
                println!("        --json                Print results as a JSON array");
                println!("    -h, --help                Print help information");
                process::exit(0);
            }
            arg if arg.starts_with('-') => {
                eprintln!("error: unknown argument: {arg}");
                process::exit(1);
            }
            word => {
                query_words.push(word.to_string());
                i += 1;
            }
        }
    }

    config.query = query_words.join(" ");
    if config.query.is_empty() {
        eprintln!("error: no query given (try --help)");
        process::exit(1);
    }

    config
}

fn read_corpus(path: &Path) -> std::io::Result<Vec<String>> {
    let text = fs::read_to_string(path)?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect())
}

fn run(config: &Config) -> RankResult<()> {
    let lookup: Arc<dyn EmbeddingLookup> = match &config.embeddings {
        Some(path) => Arc::new(text_format::load_text(path)?),
        None => Arc::new(LexicalLookup::new(config.lexical_dim)),
    };

    let corpus = read_corpus(&config.corpus)?;
    let engine = SearchEngine::build(lookup, corpus);
    let results = engine.search(&config.query, config.top)?;

    if config.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        for hit in &results {
            println!("{:.4}\t{}", hit.score, hit.phrase);
        }
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = parse_args();
    if let Err(err) = run(&config) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}
