use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use entities::{
    AppendToResponse, AppendToResponseItem, BaseMovie, BasePerson, Movie, MovieId, PersonId,
};
use std::time::Instant;
use tmdb::{MovieSearch, PersonSearch, Tmdb, TvSearch};
use tracing::debug;

/// tmdb-cli - Query The Movie Database from the terminal
#[derive(Parser)]
#[command(name = "tmdb-cli")]
#[command(
    about = "Look up movies, people and search results on TMDb",
    long_about = "Look up movies, people and search results on TMDb.\n\n\
                  Reads TMDB_API_KEY (and optionally TMDB_LANGUAGE, TMDB_BASE_URL, \
                  TMDB_TIMEOUT_SECS) from the environment or a .env file."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a movie, optionally with appended sub-resources
    Movie {
        /// TMDb movie id
        id: MovieId,

        /// ISO 639-1 language for translated fields
        #[arg(long)]
        language: Option<String>,

        /// Sub-resources to inline, comma separated (credits,videos,...)
        #[arg(long, value_delimiter = ',')]
        append: Vec<AppendToResponseItem>,
    },

    /// Show a person and their best known movies
    Person {
        /// TMDb person id
        id: PersonId,
    },

    /// List popular movies (or people)
    Popular {
        /// List people instead of movies
        #[arg(long)]
        people: bool,

        /// Result page, starting at 1
        #[arg(long)]
        page: Option<u32>,
    },

    /// Search TMDb
    Search {
        /// What to search for
        #[arg(value_enum)]
        kind: SearchKind,

        /// Search text
        query: String,

        /// Result page, starting at 1
        #[arg(long)]
        page: Option<u32>,
    },

    /// Show the API configuration (image base URLs and sizes)
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SearchKind {
    Movie,
    Person,
    Tv,
    Company,
    Collection,
    Keyword,
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; the variables may come from the shell
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let tmdb = Tmdb::from_env().context("Failed to configure the TMDb client")?;

    let start = Instant::now();
    match cli.command {
        Commands::Movie {
            id,
            language,
            append,
        } => handle_movie(&tmdb, id, language.as_deref(), append).await?,
        Commands::Person { id } => handle_person(&tmdb, id).await?,
        Commands::Popular { people, page } => handle_popular(&tmdb, people, page).await?,
        Commands::Search { kind, query, page } => handle_search(&tmdb, kind, &query, page).await?,
        Commands::Config => handle_config(&tmdb).await?,
    }
    debug!(elapsed_ms = start.elapsed().as_millis() as u64, "command finished");

    Ok(())
}

/// Handle the 'movie' command
async fn handle_movie(
    tmdb: &Tmdb,
    id: MovieId,
    language: Option<&str>,
    append: Vec<AppendToResponseItem>,
) -> Result<()> {
    let append: AppendToResponse = append.into_iter().collect();
    let movie = tmdb
        .movies()
        .summary(id, language, Some(&append))
        .await
        .with_context(|| format!("Failed to fetch movie {}", id))?;

    print_movie(&movie);
    Ok(())
}

/// Handle the 'person' command
async fn handle_person(tmdb: &Tmdb, id: PersonId) -> Result<()> {
    let person = tmdb
        .people()
        .summary(id)
        .await
        .with_context(|| format!("Failed to fetch person {}", id))?;

    let name = person.name.as_deref().unwrap_or("(unnamed)");
    println!("{}", format!("{} [{}]", name, person.id).bold().blue());
    if let Some(department) = &person.known_for_department {
        println!("{}Known for: {}", "• ".green(), department);
    }
    if let Some(birthday) = person.birthday {
        let place = person.place_of_birth.as_deref().unwrap_or("unknown place");
        println!("{}Born: {} in {}", "• ".green(), birthday, place);
    }
    if let Some(deathday) = person.deathday {
        println!("{}Died: {}", "• ".green(), deathday);
    }
    if let Some(imdb_id) = &person.imdb_id {
        println!("{}IMDb: https://www.imdb.com/name/{}", "• ".green(), imdb_id);
    }
    if !person.also_known_as.is_empty() {
        println!("{}Also known as: {}", "• ".green(), person.also_known_as.join(", "));
    }

    let credits = tmdb.people().movie_credits(id, None).await?;
    let mut cast: Vec<_> = credits.cast.iter().collect();
    cast.sort_by(|a, b| b.release_date.cmp(&a.release_date));

    println!("\n{} ({} movies):", "Movie credits".bold(), cast.len());
    for credit in cast.iter().take(10) {
        let year = credit
            .release_date
            .map(|d| d.format("%Y").to_string())
            .unwrap_or_else(|| "----".to_string());
        println!(
            "  {} {} as {}",
            year.cyan(),
            credit.display_title().unwrap_or("?"),
            credit.character.as_deref().unwrap_or("?")
        );
    }
    Ok(())
}

/// Handle the 'popular' command
async fn handle_popular(tmdb: &Tmdb, people: bool, page: Option<u32>) -> Result<()> {
    if people {
        let results = tmdb.people().popular(page).await?;
        println!(
            "{}",
            format!("Popular people (page {} of {}):", results.page, results.total_pages)
                .bold()
                .blue()
        );
        print_people(&results.results);
    } else {
        let results = tmdb.movies().popular(page, None).await?;
        println!(
            "{}",
            format!("Popular movies (page {} of {}):", results.page, results.total_pages)
                .bold()
                .blue()
        );
        print_movies(&results.results);
    }
    Ok(())
}

/// Handle the 'search' command
async fn handle_search(tmdb: &Tmdb, kind: SearchKind, query: &str, page: Option<u32>) -> Result<()> {
    let search = tmdb.search();
    let header = |total: u32| {
        println!(
            "{}",
            format!("Search results for '{}' ({} found):", query, total)
                .bold()
                .blue()
        );
    };

    match kind {
        SearchKind::Movie => {
            let mut params = MovieSearch::new(query);
            params.page = page;
            let results = search.movie(&params).await?;
            header(results.total_results);
            print_movies(&results.results);
        }
        SearchKind::Person => {
            let mut params = PersonSearch::new(query);
            params.page = page;
            let results = search.person(&params).await?;
            header(results.total_results);
            print_people(&results.results);
        }
        SearchKind::Tv => {
            let mut params = TvSearch::new(query);
            params.page = page;
            let results = search.tv(&params).await?;
            header(results.total_results);
            for show in &results.results {
                let year = show
                    .first_air_date
                    .map(|d| d.format("%Y").to_string())
                    .unwrap_or_else(|| "----".to_string());
                println!(
                    "{}: {} ({})",
                    show.id.to_string().green(),
                    show.name.as_deref().unwrap_or("?"),
                    year
                );
            }
        }
        SearchKind::Company => {
            let results = search.company(query, page).await?;
            header(results.total_results);
            for company in &results.results {
                println!(
                    "{}: {} {}",
                    company.id.to_string().green(),
                    company.name.as_deref().unwrap_or("?"),
                    company.origin_country.as_deref().unwrap_or("")
                );
            }
        }
        SearchKind::Collection => {
            let results = search.collection(query, page, None).await?;
            header(results.total_results);
            for collection in &results.results {
                println!(
                    "{}: {}",
                    collection.id.to_string().green(),
                    collection.name.as_deref().unwrap_or("?")
                );
            }
        }
        SearchKind::Keyword => {
            let results = search.keyword(query, page).await?;
            header(results.total_results);
            for keyword in &results.results {
                println!("{}: {}", keyword.id.to_string().green(), keyword.name);
            }
        }
    }
    Ok(())
}

/// Handle the 'config' command
async fn handle_config(tmdb: &Tmdb) -> Result<()> {
    let config = tmdb.configuration().configuration().await?;
    let images = &config.images;

    println!("{}", "TMDb configuration:".bold().blue());
    println!("{}Image base URL: {}", "• ".green(), images.base_url);
    println!("{}Secure base URL: {}", "• ".green(), images.secure_base_url);
    println!("{}Poster sizes: {}", "• ".cyan(), images.poster_sizes.join(", "));
    println!("{}Backdrop sizes: {}", "• ".cyan(), images.backdrop_sizes.join(", "));
    println!("{}Profile sizes: {}", "• ".cyan(), images.profile_sizes.join(", "));
    println!("{}Logo sizes: {}", "• ".cyan(), images.logo_sizes.join(", "));
    println!("{}Still sizes: {}", "• ".cyan(), images.still_sizes.join(", "));
    println!("{}Change keys: {}", "• ".cyan(), config.change_keys.len());
    Ok(())
}

/// Print a movie summary plus whatever sub-resources were appended
fn print_movie(movie: &Movie) {
    let title = movie.title.as_deref().unwrap_or("(untitled)");
    let year = movie
        .release_date
        .map(|d| d.format("%Y").to_string())
        .unwrap_or_else(|| "----".to_string());
    println!("{}", format!("{} ({}) [{}]", title, year, movie.id).bold().blue());

    if let Some(tagline) = movie.tagline.as_deref().filter(|t| !t.is_empty()) {
        println!("  {}", tagline.italic());
    }
    if !movie.genres.is_empty() {
        let genres = movie
            .genres
            .iter()
            .map(|g| g.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        println!("{}Genres: {}", "• ".green(), genres);
    }
    if let Some(runtime) = movie.runtime.filter(|r| *r > 0) {
        println!("{}Runtime: {} min", "• ".green(), runtime);
    }
    if let Some(budget) = movie.budget.filter(|b| *b > 0) {
        println!("{}Budget: ${}", "• ".green(), budget);
    }
    if let Some(revenue) = movie.revenue.filter(|r| *r > 0) {
        println!("{}Revenue: ${}", "• ".green(), revenue);
    }
    if let (Some(average), Some(count)) = (movie.vote_average, movie.vote_count) {
        println!("{}Rating: {:.1} ({} votes)", "• ".green(), average, count);
    }
    if let Some(collection) = &movie.belongs_to_collection {
        println!(
            "{}Collection: {}",
            "• ".green(),
            collection.name.as_deref().unwrap_or("?")
        );
    }
    if let Some(overview) = movie.overview.as_deref().filter(|o| !o.is_empty()) {
        println!("\n{}", overview);
    }

    if let Some(credits) = &movie.credits {
        println!("\n{}", "Cast:".bold());
        for cast in credits.cast.iter().take(10) {
            println!(
                "  {} as {}",
                cast.name.as_deref().unwrap_or("?"),
                cast.character.as_deref().unwrap_or("?")
            );
        }
        for director in credits.crew_with_job("Director") {
            println!("  Directed by {}", director.name.as_deref().unwrap_or("?"));
        }
    }
    if let Some(titles) = &movie.alternative_titles {
        println!("\n{}", "Alternative titles:".bold());
        for title in &titles.titles {
            println!(
                "  {} {}",
                title.iso_3166_1.as_deref().unwrap_or("--").cyan(),
                title.title.as_deref().unwrap_or("?")
            );
        }
    }
    if let Some(keywords) = &movie.keywords {
        let names = keywords
            .keywords
            .iter()
            .map(|k| k.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        println!("\n{} {}", "Keywords:".bold(), names);
    }
    if let Some(releases) = &movie.releases {
        println!("\n{}", "Releases:".bold());
        for release in &releases.countries {
            let date = release
                .release_date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "unknown".to_string());
            println!(
                "  {} {} {}",
                release.iso_3166_1.as_deref().unwrap_or("--").cyan(),
                date,
                release.certification.as_deref().unwrap_or("")
            );
        }
    }
    if let Some(videos) = &movie.videos {
        println!("\n{}", "Videos:".bold());
        for video in &videos.results {
            let url = video.youtube_url().unwrap_or_default();
            println!(
                "  [{}] {} {}",
                video.video_type.as_deref().unwrap_or("?"),
                video.name.as_deref().unwrap_or("?"),
                url
            );
        }
    }
    if let Some(translations) = &movie.translations {
        let languages = translations
            .translations
            .iter()
            .filter_map(|t| t.iso_639_1.as_deref())
            .collect::<Vec<_>>()
            .join(", ");
        println!("\n{} {}", "Translations:".bold(), languages);
    }
    if let Some(ids) = &movie.external_ids {
        println!("\n{}", "External ids:".bold());
        let sites = [
            ("IMDb", &ids.imdb_id),
            ("Wikidata", &ids.wikidata_id),
            ("Facebook", &ids.facebook_id),
            ("Instagram", &ids.instagram_id),
            ("Twitter", &ids.twitter_id),
        ];
        for (site, id) in sites {
            if let Some(id) = id {
                println!("  {} {}", site.cyan(), id);
            }
        }
    }
    if let Some(images) = &movie.images {
        println!(
            "\n{} {} backdrops, {} posters",
            "Images:".bold(),
            images.backdrops.len(),
            images.posters.len()
        );
    }
    if let Some(similar) = &movie.similar {
        println!("\n{}", "Similar movies:".bold());
        print_movies(&similar.results);
    }
    if let Some(reviews) = &movie.reviews {
        println!("\n{} {} reviews", "Reviews:".bold(), reviews.total_results);
        for review in reviews.results.iter().take(3) {
            println!("  by {}", review.author.as_deref().unwrap_or("?"));
        }
    }
    if let Some(lists) = &movie.lists {
        println!("\n{} on {} lists", "Lists:".bold(), lists.total_results);
    }
}

fn print_movies(movies: &[BaseMovie]) {
    for (i, movie) in movies.iter().enumerate() {
        let year = movie
            .release_date
            .map(|d| d.format("%Y").to_string())
            .unwrap_or_else(|| "----".to_string());
        println!(
            "{}. {} ({}) [{}] - Rating: {:.1}",
            (i + 1).to_string().green(),
            movie.title.as_deref().unwrap_or("?"),
            year,
            movie.id,
            movie.vote_average.unwrap_or(0.0)
        );
    }
}

fn print_people(people: &[BasePerson]) {
    for (i, person) in people.iter().enumerate() {
        let known_for = person
            .known_for
            .iter()
            .filter_map(|m| m.display_title())
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "{}. {} [{}] {}",
            (i + 1).to_string().green(),
            person.name.as_deref().unwrap_or("?"),
            person.id,
            known_for
        );
    }
}
