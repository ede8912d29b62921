use crate::{
    model::movie::MovieRecord,
    queries::movie_queries::{LanguageMatch, MovieQueries, QueryOutcome, TopRatedMovie},
};

/// Every movie read from one source file, in file order. Never mutated after loading.
#[derive(Debug, Default)]
pub struct MovieDataset {
    movies: Vec<MovieRecord>,
}

impl MovieDataset {
    pub fn new(movies: Vec<MovieRecord>) -> Self {
        MovieDataset { movies }
    }

    pub fn movies(&self) -> &[MovieRecord] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn movies_by_year(&self, year: i32) -> QueryOutcome<&str> {
        MovieQueries::movies_by_year(&self.movies, year)
    }

    pub fn top_rated_per_year(&self) -> Vec<TopRatedMovie<'_>> {
        MovieQueries::top_rated_per_year(&self.movies)
    }

    pub fn movies_by_language(&self, lang: &str) -> QueryOutcome<LanguageMatch<'_>> {
        MovieQueries::movies_by_language(&self.movies, lang)
    }
}
