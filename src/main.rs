mod art;
mod canvas;
mod cli_app;
mod error;
mod geometry;
mod imagery;

fn main() {
    let config = cli_app::parse_args();
    if let Err(err) = art::generate_collection(&config) {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}
