use line_fixture::search::shorten;
use line_fixture::{verify_sorted, Error, Searcher};
use log::error;
use std::io::{self, BufRead};
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(name = "find")]
/// Find the first line >= term in a sorted file
struct Config {
    /// File to search
    #[structopt(short = "f", long, parse(from_os_str))]
    file: PathBuf,
    /// Search term, `-` reads it from stdin
    #[structopt(short = "t", long)]
    term: String,
    /// Check the file is sorted before searching
    #[structopt(long)]
    verify: bool,
}

fn find(conf: &Config) -> line_fixture::Result<Option<Vec<u8>>> {
    let term = if conf.term == "-" {
        let mut line = String::new();
        io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| Error::Io {
                path: PathBuf::from("<stdin>"),
                source: e,
            })?;
        line.trim_end_matches(|c: char| c == '\n' || c == '\r').to_string()
    } else {
        conf.term.clone()
    };

    if conf.verify {
        verify_sorted(&conf.file)?;
    }
    let mut searcher = Searcher::open(&conf.file)?;
    searcher.find_line(term.as_bytes())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let conf: Config = Config::from_args();

    match find(&conf) {
        Ok(line) => {
            let line = line.unwrap_or_default();
            println!("Result: {}", shorten(&String::from_utf8_lossy(&line)));
        }
        Err(e) => {
            error!("failed to find line: {}", e);
            std::process::exit(1);
        }
    }
}
