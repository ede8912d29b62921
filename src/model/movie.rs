use crate::error::ParseError;

const LANGUAGE_SEPARATORS: [char; 3] = ['[', ';', ']'];

#[derive(Debug, Clone, PartialEq)]
pub struct MovieRecord {
    pub title: String,
    pub year: i32,
    pub raw_languages: String,
    pub rating: f32,
    languages: Vec<String>,
}

impl MovieRecord {
    /// Parses one `title,year,languages,rating` line. The trailing newline, if any, is
    /// stripped and the rating runs to the end of the line.
    pub fn from_line(line: &str) -> Result<MovieRecord, ParseError> {
        let line = line.trim_end_matches(['\n', '\r']);
        let mut fields = line.splitn(4, ',');

        MovieRecord::from_fields(
            fields.next(),
            fields.next(),
            fields.next(),
            fields.next().map(|rating| rating.to_string()),
        )
    }

    /// Builds a record from a row split on every comma. Anything past the fourth column is
    /// glued back onto the rating, so the result matches `from_line`.
    pub fn from_csv_record(record: &csv::StringRecord) -> Result<MovieRecord, ParseError> {
        let rating = if record.len() > 3 {
            let rating = record.iter().skip(3).collect::<Vec<_>>().join(",");
            Some(rating.trim_end_matches('\r').to_string())
        } else {
            None
        };

        MovieRecord::from_fields(record.get(0), record.get(1), record.get(2), rating)
    }

    fn from_fields(
        title: Option<&str>,
        year: Option<&str>,
        raw_languages: Option<&str>,
        rating: Option<String>,
    ) -> Result<MovieRecord, ParseError> {
        let title = title.ok_or(ParseError::MissingField("title"))?;
        let year = year.ok_or(ParseError::MissingField("year"))?;
        let raw_languages = raw_languages.ok_or(ParseError::MissingField("languages"))?;
        let rating = rating.ok_or(ParseError::MissingField("rating"))?;

        if title.is_empty() {
            return Err(ParseError::EmptyTitle);
        }

        Ok(MovieRecord {
            title: title.to_string(),
            year: MovieRecord::parse_year(year)?,
            raw_languages: raw_languages.to_string(),
            rating: MovieRecord::parse_rating(&rating)?,
            languages: MovieRecord::split_languages(raw_languages),
        })
    }

    fn parse_year(field: &str) -> Result<i32, ParseError> {
        field
            .trim()
            .parse::<i32>()
            .map_err(|_| ParseError::InvalidYear(field.to_string()))
    }

    fn parse_rating(field: &str) -> Result<f32, ParseError> {
        match field.trim().parse::<f32>() {
            Ok(rating) if rating.is_finite() => Ok(rating),
            _ => Err(ParseError::InvalidRating(field.to_string())),
        }
    }

    fn split_languages(raw_languages: &str) -> Vec<String> {
        raw_languages
            .split(LANGUAGE_SEPARATORS)
            .filter(|token| !token.is_empty())
            .map(|token| token.to_lowercase())
            .collect()
    }

    /// Language tokens, lowercased, in the order they appear in the raw field.
    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    /// Case-insensitive match against any single language token.
    pub fn is_in_language(&self, lang: &str) -> bool {
        let lang = lang.to_lowercase();
        self.languages.iter().any(|token| *token == lang)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_line() {
        let movie = MovieRecord::from_line("Inception,2010,[English;French],8.8\n").unwrap();

        assert_eq!(movie.title, "Inception");
        assert_eq!(movie.year, 2010);
        assert_eq!(movie.raw_languages, "[English;French]");
        assert_eq!(movie.rating, 8.8);
        assert_eq!(movie.languages(), &["english", "french"]);
    }

    #[test]
    fn strips_crlf_terminator() {
        let movie = MovieRecord::from_line("Memento,2000,[English],8.4\r\n").unwrap();

        assert_eq!(movie.rating, 8.4);
    }

    #[test]
    fn rating_keeps_everything_after_third_comma() {
        let err = MovieRecord::from_line("Odd,1999,[English],7.0,extra").unwrap_err();

        assert_eq!(err, ParseError::InvalidRating("7.0,extra".to_string()));
    }

    #[test]
    fn rejects_line_with_three_fields() {
        let err = MovieRecord::from_line("Memento,2000,[English]").unwrap_err();

        assert_eq!(err, ParseError::MissingField("rating"));
    }

    #[test]
    fn rejects_non_numeric_year() {
        let err = MovieRecord::from_line("Memento,two thousand,[English],8.4").unwrap_err();

        assert_eq!(err, ParseError::InvalidYear("two thousand".to_string()));
    }

    #[test]
    fn rejects_non_numeric_or_nan_rating() {
        assert!(matches!(
            MovieRecord::from_line("Memento,2000,[English],great"),
            Err(ParseError::InvalidRating(_))
        ));
        assert!(matches!(
            MovieRecord::from_line("Memento,2000,[English],NaN"),
            Err(ParseError::InvalidRating(_))
        ));
    }

    #[test]
    fn rejects_empty_title() {
        let err = MovieRecord::from_line(",2000,[English],8.4").unwrap_err();

        assert_eq!(err, ParseError::EmptyTitle);
    }

    #[test]
    fn matches_languages_ignoring_case() {
        let movie = MovieRecord::from_line("Inception,2010,[English;French],8.8").unwrap();

        assert!(movie.is_in_language("english"));
        assert!(movie.is_in_language("French"));
        assert!(movie.is_in_language("ENGLISH"));
        assert!(!movie.is_in_language("Spanish"));
        assert!(!movie.is_in_language("Eng"));
    }

    #[test]
    fn empty_language_list_matches_nothing() {
        let movie = MovieRecord::from_line("Silent,1920,[],6.1").unwrap();

        assert!(movie.languages().is_empty());
        assert!(!movie.is_in_language(""));
        assert!(!movie.is_in_language("English"));
    }

    #[test]
    fn csv_record_parses_like_line() {
        let record = csv::StringRecord::from(vec!["Odd", "1999", "[English]", "7", "5"]);
        let from_record = MovieRecord::from_csv_record(&record).unwrap_err();
        let from_line = MovieRecord::from_line("Odd,1999,[English],7,5").unwrap_err();

        assert_eq!(from_record, from_line);
    }
}
