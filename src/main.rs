use std::{env, path::PathBuf, process};

mod logging;

fn get_file_name() -> Option<PathBuf> {
    env::args().nth(1).map(PathBuf::from)
}

fn main() {
    logging::setup_logging();

    let file_name = match get_file_name() {
        Some(file_name) => file_name,
        None => {
            eprintln!("You must provide the name of the file to process");
            eprintln!("Example usage: movie_query movies_sample_1.csv");
            process::exit(1);
        }
    };

    if let Err(e) = movie_query::run(&file_name) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
