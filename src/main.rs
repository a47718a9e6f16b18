//! bedtime-stories - Main entry point

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::CommandFactory;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use bedtime_stories::cli::{Cli, Commands, ProfileCommands};
use bedtime_stories::{
    output, read_request_interactively, request_from_args, resolve_language_answer, ChildProfile,
    StoryRequest, TemplateBank,
};

/// Initialize the logger with appropriate settings
///
/// Logs go to stderr so stories on stdout stay clean. RUST_LOG overrides the
/// default level.
fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();
}

/// Main application entry point
fn main() {
    let cli = Cli::parse_args();
    init_logger(cli.verbose);
    info!("bedtime-stories starting up");

    if let Err(e) = run(cli) {
        eprintln!("✗ {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut rng = match cli.seed {
        Some(seed) => {
            debug!(seed, "Using seeded random source");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    match cli.command {
        None => {
            info!("No command specified, asking interactively");
            let request = ask_for_request()?;
            tell(&request, 1, cli.json, &mut rng)
        }
        Some(Commands::Tell {
            name,
            interests,
            language,
            profile,
            count,
        }) => {
            let request = match (profile, name) {
                (Some(path), _) => load_valid_profile(&path)?.to_request(),
                (None, Some(name)) => {
                    request_from_args(&name, interests.as_deref(), language.as_deref())
                }
                (None, None) => ask_for_request()?,
            };
            tell(&request, count, cli.json, &mut rng)
        }
        Some(Commands::Profile { action }) => run_profile_command(action),
        Some(Commands::Templates { language, stage }) => {
            let language = resolve_language_answer(language.as_deref().unwrap_or_default());
            let bank = TemplateBank::for_language(language);
            print!("{}", output::format_templates(bank, stage));
            Ok(())
        }
        Some(Commands::Completions { shell }) => {
            let mut command = Cli::command();
            clap_complete::generate(shell, &mut command, "bedtime-stories", &mut io::stdout());
            Ok(())
        }
    }
}

/// Ask for name, interests and language on the terminal
fn ask_for_request() -> Result<StoryRequest> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let request = read_request_interactively(&mut stdin.lock(), &mut stdout)
        .context("Failed to read answers")?;
    // Separate the prompts from the story
    writeln!(stdout)?;
    Ok(request)
}

/// Compose and print `count` stories
fn tell(request: &StoryRequest, count: u32, json: bool, rng: &mut StdRng) -> Result<()> {
    info!(count, language = %request.language, "Telling stories");
    let stories: Vec<_> = (0..count).map(|_| request.compose(rng)).collect();

    let rendered = if json {
        output::format_json(&stories)?
    } else {
        output::format_text(&stories)
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", rendered.trim_end())?;
    Ok(())
}

fn load_valid_profile(path: &Path) -> Result<ChildProfile> {
    info!("Loading profile: {:?}", path);
    let profile = ChildProfile::load_from_file(path)?;
    profile
        .validate()
        .with_context(|| format!("Invalid profile {:?}", path))?;
    Ok(profile)
}

fn run_profile_command(action: ProfileCommands) -> Result<()> {
    match action {
        ProfileCommands::Save {
            name,
            interests,
            language,
            path,
        } => {
            let request = request_from_args(&name, interests.as_deref(), language.as_deref());
            let profile = ChildProfile::from(&request);
            profile.validate()?;
            profile.save_to_file(&path)?;
            info!("Profile saved to {:?}", path);
            println!("✓ Profile saved: {:?}", path);
        }
        ProfileCommands::Show { path } => {
            let profile = ChildProfile::load_from_file(&path)?;
            println!("{}", serde_json::to_string_pretty(&profile)?);
        }
        ProfileCommands::Validate { path } => {
            load_valid_profile(&path)?;
            println!("✓ Profile is valid: {:?}", path);
        }
    }
    Ok(())
}
