use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

use csv::{ReaderBuilder, Terminator};

use crate::{
    error::{MovieError, Result},
    model::{dataset::MovieDataset, movie::MovieRecord},
};

const HEADER_LINES: u64 = 1;

pub struct CsvReader {}

impl CsvReader {
    pub fn load_movies_from_csv(file_name: impl AsRef<Path>) -> Result<MovieDataset> {
        let file_name = file_name.as_ref();
        log::info!("Loading movies from {}", file_name.display());

        let file = File::open(file_name)?;
        let dataset = CsvReader::load_movies_from_reader(file)?;

        log::info!(
            "Loaded {} movies from {}",
            dataset.len(),
            file_name.display()
        );
        Ok(dataset)
    }

    /// Reads the header line, then one movie per non-blank line. The first malformed line
    /// aborts the whole load.
    pub fn load_movies_from_reader<R: Read>(source: R) -> Result<MovieDataset> {
        let mut source = BufReader::new(source);

        // The header is always the first physical line, even when it is blank.
        let mut header = vec![];
        source.read_until(b'\n', &mut header)?;
        log::debug!("Skipped header: {:?}", String::from_utf8_lossy(&header).trim_end());

        // Only commas separate fields and only `\n` ends a record; quotes and stray `\r`
        // are ordinary characters.
        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .terminator(Terminator::Any(b'\n'))
            .from_reader(source);

        let mut movies = vec![];
        for result in rdr.records() {
            let record = result.map_err(|err| MovieError::from(err).shift_line(HEADER_LINES))?;
            if CsvReader::is_blank(&record) {
                continue;
            }

            let line = record.position().map(|p| p.line()).unwrap_or(0) + HEADER_LINES;
            let movie = MovieRecord::from_csv_record(&record)
                .map_err(|source| MovieError::Parse { line, source })?;

            log::debug!("Parsed movie on line {}: {:?}", line, movie);
            movies.push(movie);
        }

        Ok(MovieDataset::new(movies))
    }

    fn is_blank(record: &csv::StringRecord) -> bool {
        record.len() <= 1 && record.iter().all(|field| field.trim().is_empty())
    }
}
