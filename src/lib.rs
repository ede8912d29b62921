use std::{io, path::Path};

pub mod error;
pub mod loaders;
pub mod model;
pub mod queries;
pub mod shell;

pub use error::{MovieError, ParseError, Result};
pub use loaders::csv_reader::CsvReader;
pub use model::{dataset::MovieDataset, movie::MovieRecord};
pub use queries::movie_queries::{LanguageMatch, MovieQueries, QueryOutcome, TopRatedMovie};
pub use shell::Shell;

pub fn run(file_name: &Path) -> Result<()> {
    let dataset = CsvReader::load_movies_from_csv(file_name)?;
    println!(
        "Processed file {} and parsed data for {} movies\n",
        file_name.display(),
        dataset.len()
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(&dataset, stdin.lock(), stdout.lock()).run()
}
