use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use swatch_engine::{DiverseSampler, PaletteMatcher, TrialOptimizer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use swatchpick::api;
use swatchpick::export::{format_color_array, format_id_array};
use swatchpick::models::AppConfig;
use swatchpick::server;
use swatchpick::services::{load_library, RasterSource};

#[derive(Parser)]
#[command(name = "swatchpick")]
#[command(about = "Swatchpick - pick representative colors and match them to a reference palette")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Sample colors from an image file and print them as a JSON array
    Sample {
        /// Image file (PNG, JPEG, GIF, BMP or WebP)
        image: PathBuf,

        /// Number of colors (default from configuration)
        #[arg(short, long)]
        count: Option<usize>,

        /// RNG seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,

        /// Single pass instead of best-of-N trials
        #[arg(long)]
        trials_off: bool,

        /// Initial ΔE76 threshold
        #[arg(long)]
        min_delta_e: Option<f64>,

        /// Minimum spacing between points in pixels
        #[arg(long)]
        min_pixel_distance: Option<f64>,

        /// Candidate draws per point (max 100)
        #[arg(long)]
        attempts: Option<u32>,

        /// Border kept free of points in pixels
        #[arg(long)]
        margin: Option<f64>,

        /// Also match the sampled colors against the reference library
        #[arg(short, long = "match")]
        match_library: bool,
    },
    /// Match hex colors against the reference library
    Match {
        /// Colors as #RRGGBB
        #[arg(required = true)]
        colors: Vec<String>,
    },
    /// Print the reference library
    Library,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Swatchpick API",
        description = "Perceptual color sampling and reference palette matching",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(
        api::handle_sample,
        api::handle_match,
        api::handle_library,
        api::handle_reload,
    ),
    components(schemas(
        api::SampleRequest,
        api::SampleResponse,
        api::SamplePointDto,
        api::MatchRequest,
        api::MatchResponse,
        api::ColorMatchDto,
        api::LibraryResponse,
        api::LibraryEntryDto,
        api::ReloadResponse,
    )),
    tags(
        (name = "Sampling", description = "Color sampling from images"),
        (name = "Palette", description = "Reference library and matching")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) => run_server().await,
        Some(Commands::Sample {
            image,
            count,
            seed,
            trials_off,
            min_delta_e,
            min_pixel_distance,
            attempts,
            margin,
            match_library,
        }) => {
            init_cli_logging();
            let options = SampleOptions {
                count,
                seed,
                trials_off,
                min_delta_e,
                min_pixel_distance,
                attempts,
                margin,
                match_library,
            };
            run_sample_command(&image, options)
        }
        Some(Commands::Match { colors }) => {
            init_cli_logging();
            run_match_command(&colors)
        }
        Some(Commands::Library) => {
            init_cli_logging();
            run_library_command()
        }
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Minimal logging for CLI
fn init_cli_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "swatchpick=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

fn load_matcher(config: &AppConfig) -> anyhow::Result<PaletteMatcher> {
    match &config.library {
        Some(path) => {
            let entries = load_library(path)
                .map_err(|e| anyhow::anyhow!("Failed to load library {}: {e}", path.display()))?;
            Ok(PaletteMatcher::new(entries))
        }
        None => Ok(PaletteMatcher::canonical()),
    }
}

struct SampleOptions {
    count: Option<usize>,
    seed: Option<u64>,
    trials_off: bool,
    min_delta_e: Option<f64>,
    min_pixel_distance: Option<f64>,
    attempts: Option<u32>,
    margin: Option<f64>,
    match_library: bool,
}

/// Sample an image file (no server needed)
fn run_sample_command(image: &PathBuf, options: SampleOptions) -> anyhow::Result<()> {
    let config = AppConfig::from_env();
    let source = RasterSource::open(image)
        .map_err(|e| anyhow::anyhow!("Failed to open {}: {e}", image.display()))?;

    let mut sampling = config.sampling.to_config();
    if let Some(v) = options.min_delta_e {
        sampling = sampling.min_delta_e(v);
    }
    if let Some(v) = options.min_pixel_distance {
        sampling = sampling.min_pixel_distance(v);
    }
    if let Some(v) = options.attempts {
        sampling = sampling.attempts_per_point(v);
    }
    if let Some(v) = options.margin {
        sampling = sampling.margin(v);
    }

    let count = options.count.unwrap_or(config.sampling.default_count);
    let seed = options.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    let (width, height) = source.display_size();
    tracing::debug!(count, seed, width, height, "Sampling image");

    let points = if options.trials_off {
        DiverseSampler::new(sampling).sample(&source, count, width, height, &mut rng)
    } else {
        TrialOptimizer::new(sampling)
            .run(&source, rng, count, width, height, &[])
            .unwrap_or_default()
    };

    let hexes: Vec<&str> = points.iter().map(|p| p.hex.as_str()).collect();
    println!("{}", format_color_array(&hexes));

    if options.match_library {
        let matcher = load_matcher(&config)?;
        let result = matcher.match_all(&hexes);
        println!("{}", format_id_array(&result.id_array));
    }

    Ok(())
}

fn run_match_command(colors: &[String]) -> anyhow::Result<()> {
    let config = AppConfig::from_env();
    let matcher = load_matcher(&config)?;
    let result = matcher.match_all(colors);

    if result.len() < colors.len() {
        tracing::warn!(
            skipped = colors.len() - result.len(),
            "Some colors could not be parsed"
        );
    }
    for m in &result.matches {
        println!(
            "{} -> {:>4} {} (ΔE {:.2})",
            m.original_hex, m.matched_id, m.matched_hex, m.distance
        );
    }
    println!("{}", format_id_array(&result.id_array));
    Ok(())
}

fn run_library_command() -> anyhow::Result<()> {
    let config = AppConfig::from_env();
    let matcher = load_matcher(&config)?;
    for entry in matcher.library() {
        println!("{:>4}  {}", entry.id, entry.hex);
    }
    Ok(())
}

fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    // Read environment variables
    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();

    // Header
    println!("Swatchpick v{VERSION}");
    println!("Perceptual color sampling and reference palette matching\n");

    // Environment variables section
    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    // Configuration section
    let config_source = match config_file {
        Some(ref path) if PathBuf::from(path).exists() => path.to_string(),
        Some(_) => "defaults (file not found)".to_string(),
        None => "defaults".to_string(),
    };
    println!("\nConfiguration: {config_source}");

    let library = match &config_file {
        Some(_) => AppConfig::from_env().library,
        None => None,
    };
    match library {
        Some(path) => println!("  Library: {}", path.display()),
        None => println!("  Library: built-in ({} colors)", swatch_engine::CANONICAL_LIBRARY.len()),
    }

    // Commands section
    println!("\nCommands:");
    println!("  swatchpick serve     Start the HTTP server");
    println!("  swatchpick sample    Sample colors from an image file");
    println!("  swatchpick match     Match colors to the reference library");
    println!("  swatchpick library   Print the reference library");
    println!("\nRun 'swatchpick --help' for more details.");
}

async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "swatchpick=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let config = AppConfig::from_env();

    tracing::info!(
        default_count = config.sampling.default_count,
        library = ?config.library.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "built-in".to_string()),
        "Configuration loaded"
    );

    // Create application state using shared server module
    let state = server::create_app_state(&config)?;

    // Warm the matcher cache before accepting requests
    let entries = state.palette.reload().await?;
    tracing::info!(entries, "Reference library ready");

    // Build router: start with shared API routes, add production-only routes
    let app = server::build_router(state)
        // OpenAPI documentation (production only)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Swatchpick server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
