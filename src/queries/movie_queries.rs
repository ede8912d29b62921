use std::collections::HashMap;

use crate::model::movie::MovieRecord;

/// Result of a filtering query. `NotFound` is reported instead of an empty `Found`, so
/// callers can tell "nothing matched" apart from a listing.
#[derive(Debug, PartialEq)]
pub enum QueryOutcome<T> {
    Found(Vec<T>),
    NotFound,
}

impl<T> QueryOutcome<T> {
    fn from_matches(matches: Vec<T>) -> Self {
        if matches.is_empty() {
            QueryOutcome::NotFound
        } else {
            QueryOutcome::Found(matches)
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, QueryOutcome::NotFound)
    }
}

#[derive(Debug, PartialEq)]
pub struct TopRatedMovie<'a> {
    pub year: i32,
    pub rating: f32,
    pub title: &'a str,
}

#[derive(Debug, PartialEq)]
pub struct LanguageMatch<'a> {
    pub year: i32,
    pub title: &'a str,
}

pub struct MovieQueries {}

impl MovieQueries {
    pub fn movies_by_year(movies: &[MovieRecord], year: i32) -> QueryOutcome<&str> {
        let titles: Vec<&str> = movies
            .iter()
            .filter(|movie| movie.year == year)
            .map(|movie| movie.title.as_str())
            .collect();

        log::debug!("{} movies released in {}", titles.len(), year);
        QueryOutcome::from_matches(titles)
    }

    /// One winner per year, listed in file order of the winners. Higher rating wins; equal
    /// ratings go to the lexicographically smaller title.
    pub fn top_rated_per_year(movies: &[MovieRecord]) -> Vec<TopRatedMovie<'_>> {
        let mut best_per_year: HashMap<i32, &MovieRecord> = HashMap::new();
        for movie in movies {
            best_per_year
                .entry(movie.year)
                .and_modify(|best| {
                    if MovieQueries::outranks(movie, *best) {
                        *best = movie;
                    }
                })
                .or_insert(movie);
        }

        // Identical (rating, title) pairs within a year all count as winners.
        let winners: Vec<TopRatedMovie> = movies
            .iter()
            .filter(|movie| {
                let best = best_per_year[&movie.year];
                movie.rating == best.rating && movie.title == best.title
            })
            .map(|movie| TopRatedMovie {
                year: movie.year,
                rating: movie.rating,
                title: movie.title.as_str(),
            })
            .collect();

        log::debug!(
            "{} top rated movies across {} years",
            winners.len(),
            best_per_year.len()
        );
        winners
    }

    pub fn movies_by_language<'a>(
        movies: &'a [MovieRecord],
        lang: &str,
    ) -> QueryOutcome<LanguageMatch<'a>> {
        let matches: Vec<LanguageMatch> = movies
            .iter()
            .filter(|movie| movie.is_in_language(lang))
            .map(|movie| LanguageMatch {
                year: movie.year,
                title: movie.title.as_str(),
            })
            .collect();

        log::debug!("{} movies available in {}", matches.len(), lang);
        QueryOutcome::from_matches(matches)
    }

    fn outranks(challenger: &MovieRecord, current: &MovieRecord) -> bool {
        challenger.rating > current.rating
            || (challenger.rating == current.rating && challenger.title < current.title)
    }
}
