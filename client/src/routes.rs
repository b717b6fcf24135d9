//! In-app URL builders for the route table in `app.rs`.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

fn encode(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

pub const HOME: &str = "/";
pub const CREATE: &str = "/create";
pub const TAGS: &str = "/tags";
pub const SEARCH: &str = "/search";
pub const PLUGINS: &str = "/plugins";

pub fn page_path(slug: &str) -> String {
    format!("/page/{}", encode(slug))
}

pub fn edit_path(slug: &str) -> String {
    format!("/edit/{}", encode(slug))
}

pub fn tag_path(name: &str) -> String {
    format!("/tag/{}", encode(name))
}

/// Search route, with a keyword prefilled when `q` is non-blank.
pub fn search_path(q: &str) -> String {
    let q = q.trim();
    if q.is_empty() { SEARCH.to_owned() } else { format!("{SEARCH}?q={}", encode(q)) }
}
