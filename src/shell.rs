use std::io::{BufRead, Write};

use crate::{
    error::Result,
    model::dataset::MovieDataset,
    queries::movie_queries::QueryOutcome,
};

const MENU: &str = "1. Show movies released in the specified year\n\
                    2. Show highest rated movie for each year\n\
                    3. Show the title and year of release of all movies in a specific language\n\
                    4. Exit from the program\n\n\
                    Enter a choice from 1 to 4: ";

pub struct Shell<'a, R, W> {
    dataset: &'a MovieDataset,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(dataset: &'a MovieDataset, input: R, output: W) -> Self {
        Shell {
            dataset,
            input,
            output,
        }
    }

    /// Shows the menu until the user picks exit or input runs out.
    pub fn run(&mut self) -> Result<()> {
        loop {
            write!(self.output, "{}", MENU)?;
            let choice = match self.prompt_line()? {
                Some(choice) => choice,
                None => return Ok(()),
            };

            match choice.as_str() {
                "1" => self.list_movies_by_year()?,
                "2" => self.list_top_rated_per_year()?,
                "3" => self.list_movies_by_language()?,
                "4" => return Ok(()),
                other => {
                    log::warn!("Unrecognized menu choice: {:?}", other);
                    writeln!(self.output, "You entered an incorrect choice. Try again.\n")?;
                }
            }
        }
    }

    fn list_movies_by_year(&mut self) -> Result<()> {
        write!(
            self.output,
            "Enter the year for which you want to see movies: "
        )?;
        let input = match self.prompt_line()? {
            Some(input) => input,
            None => return Ok(()),
        };

        let year = match input.parse::<i32>() {
            Ok(year) => year,
            Err(_) => {
                writeln!(self.output, "'{}' is not a valid year.\n", input)?;
                return Ok(());
            }
        };

        match self.dataset.movies_by_year(year) {
            QueryOutcome::Found(titles) => {
                for title in titles {
                    writeln!(self.output, "{}", title)?;
                }
            }
            QueryOutcome::NotFound => writeln!(
                self.output,
                "No data about movies released in the year {}",
                year
            )?,
        }
        writeln!(self.output)?;
        Ok(())
    }

    fn list_top_rated_per_year(&mut self) -> Result<()> {
        for top in self.dataset.top_rated_per_year() {
            writeln!(self.output, "{}, {:.1}, {}", top.year, top.rating, top.title)?;
        }
        writeln!(self.output)?;
        Ok(())
    }

    fn list_movies_by_language(&mut self) -> Result<()> {
        write!(
            self.output,
            "Enter the language for which you want to see movies: "
        )?;
        let lang = match self.prompt_line()? {
            Some(lang) => lang,
            None => return Ok(()),
        };

        if lang.is_empty() {
            writeln!(self.output, "Please enter a language.\n")?;
            return Ok(());
        }

        match self.dataset.movies_by_language(&lang) {
            QueryOutcome::Found(matches) => {
                for movie in matches {
                    writeln!(self.output, "{} {}", movie.year, movie.title)?;
                }
            }
            QueryOutcome::NotFound => {
                writeln!(self.output, "No data about movies released in {}", lang)?
            }
        }
        writeln!(self.output)?;
        Ok(())
    }

    /// Next trimmed input line, or `None` at end of input.
    fn prompt_line(&mut self) -> Result<Option<String>> {
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
