/// CLI argument parsing and command handling.
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::db::SqliteStore;
use crate::generator::DataGenerator;
use crate::i18n;
use crate::palette::{ColorRole, get_palette};
use crate::settings::Settings;
use crate::types::{ColorScheme, ThemePreference};

#[derive(Parser)]
#[command(
    name = "revio",
    version,
    about = "Revio - A terminal front-end for a product review social app"
)]
pub struct Cli {
    /// Database file holding the saved preferences
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,
    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show or set the theme preference (system, light, dark)
    Theme { preference: Option<ThemePreference> },
    /// Show or set the interface language
    Language { code: Option<String> },
    /// Print the palette in effect, or the one for --scheme
    Palette {
        #[arg(long)]
        scheme: Option<ColorScheme>,
        /// Print a single role, e.g. brandAccentColor
        #[arg(long)]
        role: Option<String>,
    },
    /// Print generated posts
    Posts { count: usize },
    /// Print generated products
    Products { count: usize },
}

/// Execute a CLI command against the given preference store.
pub fn run(command: Command, store: &SqliteStore, settings: &mut Settings) -> Result<()> {
    match command {
        Command::Theme { preference } => handle_theme(preference, store, settings),
        Command::Language { code } => handle_language(code, store, settings),
        Command::Palette { scheme, role } => handle_palette(scheme, role, settings),
        Command::Posts { count } => handle_posts(count),
        Command::Products { count } => handle_products(count),
    }
    Ok(())
}

fn handle_theme(preference: Option<ThemePreference>, store: &SqliteStore, settings: &mut Settings) {
    if let Some(preference) = preference {
        if !settings.set_theme_preference(store, preference) {
            println!("Could not save the theme; it applies to this run only.");
        }
    }
    let terminal = settings
        .system_scheme()
        .map_or("unknown", ColorScheme::as_str);
    println!(
        "theme: {} (resolves to {}, terminal reports {terminal})",
        settings.theme_preference(),
        settings.actual_theme()
    );
}

fn handle_language(code: Option<String>, store: &SqliteStore, settings: &mut Settings) {
    if let Some(code) = code {
        let code = code.trim();
        if code.is_empty() {
            println!("Language code is empty; nothing changed.");
        } else {
            if !i18n::is_supported(code) {
                println!("No dictionary for '{code}', English text will be used.");
            }
            if !settings.set_language_preference(store, code) {
                println!("Could not save the language; it applies to this run only.");
            }
        }
    }
    println!("language: {}", settings.language());
}

fn handle_palette(scheme: Option<ColorScheme>, role: Option<String>, settings: &Settings) {
    let palette = get_palette(scheme.unwrap_or_else(|| settings.actual_theme()));
    if let Some(name) = role {
        match ColorRole::from_name(&name) {
            Some(role) => println!("{}", palette.color(role)),
            None => println!("Unknown color role '{name}'."),
        }
        return;
    }
    println!("# {} palette", palette.scheme());
    for (name, value) in palette.entries() {
        println!("{name:<18} {value}");
    }
}

fn handle_posts(count: usize) {
    let mut generator = DataGenerator::new();
    for post in generator.generate_posts(count) {
        println!("{:<10} {:.2}  {}", post.id, post.rating, post.title);
    }
}

fn handle_products(count: usize) {
    let mut generator = DataGenerator::new();
    for product in generator.generate_products(count) {
        println!(
            "{:<12} {:<20} {:<14} {} ({})",
            product.id,
            product.name,
            product.category.as_str(),
            product.rating,
            product.number_of_ratings
        );
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_theme_preference() {
        let cli = Cli::try_parse_from(["revio", "theme", "dark"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Theme {
                preference: Some(ThemePreference::Dark)
            })
        ));
    }

    #[test]
    fn rejects_unknown_theme_and_negative_counts() {
        assert!(Cli::try_parse_from(["revio", "theme", "sepia"]).is_err());
        assert!(Cli::try_parse_from(["revio", "posts", "-3"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["revio", "palette", "--scheme", "dark", "--db", "x.db", "-v"])
            .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.db, Some(PathBuf::from("x.db")));
        assert!(matches!(
            cli.command,
            Some(Command::Palette {
                scheme: Some(ColorScheme::Dark),
                role: None,
            })
        ));
    }

    #[test]
    fn theme_command_persists() {
        let dir = tempfile::tempdir().unwrap();
        let store = SqliteStore::new(dir.path().join("revio.db"));
        let mut settings = Settings::load(&store, None);
        run(
            Command::Theme {
                preference: Some(ThemePreference::Dark),
            },
            &store,
            &mut settings,
        )
        .unwrap();
        assert_eq!(
            Settings::load(&store, None).theme_preference(),
            ThemePreference::Dark
        );
    }
}
