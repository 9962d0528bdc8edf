use axum::http::StatusCode;
use maud::{DOCTYPE, Markup, html};

use crate::{
    entities::movie,
    forms::{FieldErrors, MovieForm},
};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

const INPUT_CLASS: &str = "mt-1 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500";
const BUTTON_CLASS: &str =
    "rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700";

/// Form inputs in display order: (name, label).
const FIELDS: [(&str, &str); 6] = [
    ("title", "Title"),
    ("actor1_name", "Lead actor"),
    ("actor2_name", "Supporting actor"),
    ("director_name", "Director"),
    ("genre", "Genre"),
    ("release_year", "Release year"),
];

pub fn movie_list_page(movies: &[movie::Model]) -> String {
    page(
        "Movies",
        html! {
            div class="flex items-center justify-between" {
                h1 class="text-3xl font-bold text-gray-900" { "Movies" }
                a class=(BUTTON_CLASS) href="/create/" { "Add movie" }
            }

            @if movies.is_empty() {
                div class="mt-8 bg-white shadow rounded-lg p-8" {
                    p class="text-gray-600" { "No movies yet." }
                }
            } @else {
                div class="mt-8 overflow-x-auto bg-white shadow rounded-lg" {
                    table class="min-w-full divide-y divide-gray-200 text-sm" {
                        thead class="bg-gray-50 text-left font-semibold text-gray-700" {
                            tr {
                                th class="px-4 py-3" { "Title" }
                                th class="px-4 py-3" { "Actors" }
                                th class="px-4 py-3" { "Director" }
                                th class="px-4 py-3" { "Genre" }
                                th class="px-4 py-3" { "Year" }
                                th class="px-4 py-3" {}
                            }
                        }
                        tbody class="divide-y divide-gray-100 text-gray-700" {
                            @for movie in movies {
                                (movie_row(movie))
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn movie_form_page(heading: &str, form: &MovieForm, errors: &FieldErrors) -> String {
    page(
        heading,
        html! {
            div class="bg-white shadow rounded-lg p-8" {
                h1 class="text-2xl font-bold text-gray-900" { (heading) }

                form class="mt-6 space-y-5" method="post" {
                    @for (name, label) in FIELDS {
                        (field(name, label, form_value(form, name), errors.get(name)))
                    }

                    div class="flex items-center gap-4" {
                        button class=(BUTTON_CLASS) type="submit" { "Save" }
                        a class="text-sm text-gray-600 hover:text-gray-800" href="/" { "Cancel" }
                    }
                }
            }
        },
    )
}

pub fn confirm_delete_page(movie: &movie::Model) -> String {
    page(
        "Delete movie",
        html! {
            div class="bg-white shadow rounded-lg p-8" {
                h1 class="text-2xl font-bold text-gray-900" { "Delete movie" }
                p class="mt-4 text-gray-700" {
                    "Are you sure you want to delete \"" (movie.to_string()) "\"?"
                }
                form class="mt-6 flex items-center gap-4" method="post" {
                    button class="rounded-md bg-red-600 px-4 py-2 font-semibold text-white hover:bg-red-700" type="submit" { "Delete" }
                    a class="text-sm text-gray-600 hover:text-gray-800" href="/" { "Cancel" }
                }
            }
        },
    )
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    page(
        status.canonical_reason().unwrap_or("Error"),
        html! {
            div class="bg-white shadow rounded-lg p-8" {
                h1 class="text-2xl font-bold text-gray-900" { (status.as_u16()) " " (status.canonical_reason().unwrap_or("Error")) }
                p class="mt-4 text-gray-700" { (message) }
                a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href="/" { "Back to movies" }
            }
        },
    )
}

fn page(title: &str, body: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src=(TAILWIND_CDN) {}
            }
            body class="min-h-screen bg-gray-50" {
                main class="max-w-4xl mx-auto px-6 py-12" { (body) }
            }
        }
    }
    .into_string()
}

fn movie_row(movie: &movie::Model) -> Markup {
    html! {
        tr {
            td class="px-4 py-3 font-medium text-gray-900" { (movie.title) }
            td class="px-4 py-3" { (movie.actor1_name) ", " (movie.actor2_name) }
            td class="px-4 py-3" { (movie.director_name) }
            td class="px-4 py-3" { (movie.genre) }
            td class="px-4 py-3" { (movie.release_year) }
            td class="px-4 py-3 text-right whitespace-nowrap" {
                a class="text-blue-600 hover:text-blue-800" href=(format!("/{}/update/", movie.id)) { "Edit" }
                " · "
                a class="text-red-600 hover:text-red-800" href=(format!("/{}/delete/", movie.id)) { "Delete" }
            }
        }
    }
}

fn field(name: &str, label: &str, value: &str, error: Option<&str>) -> Markup {
    html! {
        div {
            label class="block text-sm font-medium text-gray-700" for=(name) { (label) }
            @if name == "release_year" {
                input class=(INPUT_CLASS) type="number" name=(name) id=(name) value=(value) required;
            } @else {
                input class=(INPUT_CLASS) type="text" name=(name) id=(name) value=(value) required;
            }
            @if let Some(error) = error {
                p class="mt-1 text-sm text-red-600" { (error) }
            }
        }
    }
}

fn form_value<'a>(form: &'a MovieForm, name: &str) -> &'a str {
    match name {
        "title" => &form.title,
        "actor1_name" => &form.actor1_name,
        "actor2_name" => &form.actor2_name,
        "director_name" => &form.director_name,
        "genre" => &form.genre,
        "release_year" => &form.release_year,
        _ => "",
    }
}
