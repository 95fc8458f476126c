use line_fixture::{run, Request};
use log::error;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(name = "generator")]
/// Generate a file of random fixed-length lines and sort it
struct Config {
    /// Total file size (e.g., 10GB, 1MB)
    total_size: String,
    /// Size of each line (e.g., 10MB, 512KB)
    line_size: String,
    /// Seed for the random generator, for reproducible files
    #[structopt(long)]
    seed: Option<u64>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let conf: Config = Config::from_args();

    let mut rng = match conf.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let request = Request::new(conf.total_size, conf.line_size);
    if let Err(e) = run(Path::new("."), &request, &mut rng) {
        error!("{}", e);
        std::process::exit(1);
    }
}
