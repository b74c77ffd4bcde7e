//! Example: fetch a movie with appended sub-resources
//!
//! Run with: cargo run --package tmdb --example fetch_movie -- 550
//!
//! Needs `TMDB_API_KEY` in the environment or in a `.env` file.
//!
//! This example shows how to:
//! 1. Build a client from the environment
//! 2. Request a movie summary with credits, releases and videos inlined
//! 3. Resolve a poster URL through the configuration endpoint

use std::time::Instant;

use tmdb::entities::{AppendToResponse, AppendToResponseItem};
use tmdb::Tmdb;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_env_filter("info").init();

    let id: i32 = std::env::args()
        .nth(1)
        .map(|arg| arg.parse())
        .transpose()?
        .unwrap_or(550);

    let tmdb = Tmdb::from_env()?;

    println!("=== TMDb Movie Example ===\n");

    let append = AppendToResponse::new([
        AppendToResponseItem::Credits,
        AppendToResponseItem::Releases,
        AppendToResponseItem::Videos,
    ]);

    let start = Instant::now();
    let movie = tmdb.movies().summary(id, None, Some(&append)).await?;
    println!("Fetched movie {} in {:?}\n", id, start.elapsed());

    println!("Title: {}", movie.title.as_deref().unwrap_or("?"));
    if let Some(date) = movie.release_date {
        println!("  Released: {}", date);
    }
    if let Some(runtime) = movie.runtime {
        println!("  Runtime: {} min", runtime);
    }

    if let Some(credits) = &movie.credits {
        println!("\nTop billed cast:");
        for (i, cast) in credits.cast.iter().take(5).enumerate() {
            println!(
                "  {}. {} as {}",
                i + 1,
                cast.name.as_deref().unwrap_or("?"),
                cast.character.as_deref().unwrap_or("?")
            );
        }
        for director in credits.crew_with_job("Director") {
            println!("  Directed by {}", director.name.as_deref().unwrap_or("?"));
        }
    }

    if let Some(releases) = &movie.releases {
        println!("\nReleases: {} countries", releases.countries.len());
    }

    if let Some(trailer) = movie
        .videos
        .as_ref()
        .and_then(|v| v.results.iter().find_map(|video| video.youtube_url()))
    {
        println!("Trailer: {}", trailer);
    }

    if let Some(poster) = &movie.poster_path {
        let config = tmdb.configuration().configuration().await?;
        println!("Poster: {}", config.images.image_url("w500", poster, true));
    }

    Ok(())
}
