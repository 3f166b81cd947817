//! Shared fixtures for the end-to-end tests.

#![allow(dead_code)]

use cinegraph::{ActorRecord, Graph, MovieRecord};

/// Install a fmt subscriber once so `RUST_LOG`-style output shows up
/// under `cargo test -- --nocapture`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Two actors sharing one movie:
///
/// ```text
/// A (80) ── M1 (2017, $100) ── B (55) ── M2 (2016, $200)
/// ```
pub fn two_actor_graph() -> Graph {
    init_tracing();
    let actors = vec![
        ("A".to_string(), ActorRecord::new("A").with_age(80).with_movies(["M1"])),
        ("B".to_string(), ActorRecord::new("B").with_age(55).with_movies(["M1", "M2"])),
    ];
    let movies = vec![
        (
            "M1".to_string(),
            MovieRecord::new("M1").with_year(2017).with_gross(100.0).with_actors(["A", "B"]),
        ),
        (
            "M2".to_string(),
            MovieRecord::new("M2").with_year(2016).with_gross(200.0).with_actors(["B"]),
        ),
    ];
    Graph::from_records(actors, movies)
}

/// A small slice of the scraped dataset, in the scraped layout.
pub const SCRAPED_SAMPLE: &str = r#"[
  {
    "Morgan Freeman": {"json_class": "Actor", "name": "Morgan Freeman", "age": 80, "total_gross": 300,
                       "url": "https://en.wikipedia.org/wiki/Morgan_Freeman",
                       "movies": ["Momentum", "Ted 2", "London Has Fallen", "Now You See Me 2", "Going In Style"]},
    "John Slattery":  {"json_class": "Actor", "name": "John Slattery", "age": 55, "total_gross": 400,
                       "url": "https://en.wikipedia.org/wiki/John_Slattery",
                       "movies": ["Ted 2", "Ant-Man", "Spotlight", "Captain America: Civil War", "Going In Style"]},
    "Bruce Willis":   {"json_class": "Actor", "name": "Bruce Willis", "age": 61, "total_gross": 500,
                       "movies": ["The Kid"]}
  },
  {
    "Going In Style":   {"json_class": "Movie", "name": "Going In Style", "year": 2017, "box_office": 84900000.0,
                         "wiki_page": "https://en.wikipedia.org/wiki/Going_in_Style_(2017_film)",
                         "country": ["United States"], "lang": ["English"],
                         "actors": ["Morgan Freeman", "Michael Caine", "Alan Arkin", "Joey King", "John Slattery"]},
    "Now You See Me 2": {"json_class": "Movie", "name": "Now You See Me 2", "year": 2016, "box_office": 334900000.0,
                         "wiki_page": "https://en.wikipedia.org/wiki/Now_You_See_Me_2",
                         "country": ["United States"], "lang": ["English"],
                         "actors": ["Jesse Eisenberg", "Mark Ruffalo", "Woody Harrelson", "Dave Franco", "Daniel Radcliffe"]},
    "The Kid":          {"json_class": "Movie", "name": "The Kid", "year": 2000, "box_office": 110317580,
                         "wiki_page": "https://en.wikipedia.org/wiki/The_Kid_(2000_film)",
                         "country": ["United States"], "lang": ["English", "French"],
                         "actors": ["Bruce Willis", "Spencer Breslin"]},
    "Harry & Son":      {"json_class": "Movie", "name": "Harry & Son", "year": 1984, "box_office": 4500000,
                         "wiki_page": "https://en.wikipedia.org/wiki/Harry_%26_Son",
                         "country": ["United States"], "lang": ["English"],
                         "actors": ["Paul Newman"]}
  }
]"#;
