use chrono::Utc;

use crate::models::movie::{CreateMovie, Movie, ReadMovie, UpdateMovie};

/// A validated `CreateMovie` always carries a release date; the default only
/// covers projections of unvalidated input.
impl From<CreateMovie> for Movie {
    fn from(input: CreateMovie) -> Self {
        Movie {
            id: 0,
            title: input.title,
            genre: input.genre,
            director: input.director,
            release_date: input.release_date.unwrap_or_default(),
            duration: input.duration,
            description: input.description,
        }
    }
}

impl From<&Movie> for ReadMovie {
    fn from(movie: &Movie) -> Self {
        ReadMovie {
            id: movie.id,
            title: movie.title.clone(),
            genre: movie.genre.clone(),
            director: movie.director.clone(),
            release_date: movie.release_date,
            duration: movie.duration,
            description: movie.description.clone(),
            query_time: Utc::now(),
        }
    }
}

impl From<&Movie> for UpdateMovie {
    fn from(movie: &Movie) -> Self {
        UpdateMovie {
            title: movie.title.clone(),
            genre: movie.genre.clone(),
            director: movie.director.clone(),
            release_date: Some(movie.release_date),
            duration: movie.duration,
            description: movie.description.clone(),
        }
    }
}

impl UpdateMovie {
    /// Overwrite the mutable fields of `movie`, leaving `id` untouched.
    ///
    /// An absent `release_date` keeps the stored one.
    pub fn apply_to(&self, movie: &mut Movie) {
        movie.title.clone_from(&self.title);
        movie.genre.clone_from(&self.genre);
        movie.director.clone_from(&self.director);
        if let Some(release_date) = self.release_date {
            movie.release_date = release_date;
        }
        movie.duration = self.duration;
        movie.description.clone_from(&self.description);
    }
}
