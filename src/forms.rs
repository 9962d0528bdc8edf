use std::collections::BTreeMap;

use crate::entities::movie;

pub const REQUIRED: &str = "This field is required.";
pub const NOT_AN_INTEGER: &str = "Enter a whole number.";

/// Raw movie fields as submitted by the browser.
///
/// Every field defaults to empty so a missing input surfaces as a "required"
/// error instead of a rejected request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MovieForm {
    pub title: String,
    pub actor1_name: String,
    pub actor2_name: String,
    pub director_name: String,
    pub genre: String,
    pub release_year: String,
}

/// A movie that passed validation and is ready to be stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MovieInput {
    pub title: String,
    pub actor1_name: String,
    pub actor2_name: String,
    pub director_name: String,
    pub genre: String,
    pub release_year: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    fn insert(&mut self, field: &'static str, message: &'static str) {
        self.0.insert(field, message);
    }
}

impl MovieForm {
    pub fn validate(&self) -> Result<MovieInput, FieldErrors> {
        let mut errors = FieldErrors::default();

        let title = check("title", required_text(&self.title), &mut errors);
        let actor1_name = check("actor1_name", required_text(&self.actor1_name), &mut errors);
        let actor2_name = check("actor2_name", required_text(&self.actor2_name), &mut errors);
        let director_name =
            check("director_name", required_text(&self.director_name), &mut errors);
        let genre = check("genre", required_text(&self.genre), &mut errors);
        let release_year = check("release_year", required_int(&self.release_year), &mut errors);

        match (title, actor1_name, actor2_name, director_name, genre, release_year) {
            (
                Some(title),
                Some(actor1_name),
                Some(actor2_name),
                Some(director_name),
                Some(genre),
                Some(release_year),
            ) => Ok(MovieInput {
                title,
                actor1_name,
                actor2_name,
                director_name,
                genre,
                release_year,
            }),
            _ => Err(errors),
        }
    }
}

/// Binds urlencoded pairs. Unknown keys are ignored and a repeated key keeps
/// its last value.
impl FromIterator<(String, String)> for MovieForm {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut form = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "title" => &mut form.title,
                "actor1_name" => &mut form.actor1_name,
                "actor2_name" => &mut form.actor2_name,
                "director_name" => &mut form.director_name,
                "genre" => &mut form.genre,
                "release_year" => &mut form.release_year,
                _ => continue,
            };
            *slot = value;
        }
        form
    }
}

impl From<&movie::Model> for MovieForm {
    fn from(m: &movie::Model) -> Self {
        Self {
            title: m.title.clone(),
            actor1_name: m.actor1_name.clone(),
            actor2_name: m.actor2_name.clone(),
            director_name: m.director_name.clone(),
            genre: m.genre.clone(),
            release_year: m.release_year.to_string(),
        }
    }
}

fn check<T>(
    field: &'static str,
    result: Result<T, &'static str>,
    errors: &mut FieldErrors,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(message) => {
            errors.insert(field, message);
            None
        }
    }
}

fn required_text(raw: &str) -> Result<String, &'static str> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(REQUIRED);
    }
    Ok(value.to_string())
}

fn required_int(raw: &str) -> Result<i32, &'static str> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(REQUIRED);
    }
    let value = strip_zero_fraction(value);
    let digits = remove_digit_separators(value).ok_or(NOT_AN_INTEGER)?;
    digits.parse().map_err(|_| NOT_AN_INTEGER)
}

/// "2021.", "2021.0" and "2021.00" are whole numbers.
fn strip_zero_fraction(value: &str) -> &str {
    match value.trim_end_matches('0').strip_suffix('.') {
        Some(whole) => whole.trim_end(),
        None => value,
    }
}

/// Underscores are accepted only between digits, as in "2_021".
fn remove_digit_separators(value: &str) -> Option<String> {
    let unsigned = value.strip_prefix(['+', '-']).unwrap_or(value);
    if !value.contains('_') {
        return Some(value.to_string());
    }
    let well_placed = unsigned
        .split('_')
        .all(|group| !group.is_empty() && group.bytes().all(|b| b.is_ascii_digit()));
    well_placed.then(|| value.replace('_', ""))
}
