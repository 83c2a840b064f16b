//! Settings screen for the theme preference, as a terminal command.
//!
//! ```text
//! tiktrack-theme get
//! tiktrack-theme set dark
//! tiktrack-theme show --appearance light
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use console::style;
use tracing_subscriber::EnvFilter;

use tiktrack_theme::{
    Appearance, AppearanceSource, FileStorage, FixedAppearance, ResolvedTheme, SystemAppearance,
    ThemePreference, ThemeStore,
};

#[derive(Debug, Parser)]
#[command(name = "tiktrack-theme", version, about = "Show or change the display theme")]
struct Cli {
    /// Storage file to use instead of the default in the user config dir.
    #[arg(long, global = true, value_name = "PATH")]
    storage: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the saved preference.
    Get,
    /// Save a new preference (system, light or dark).
    Set { preference: String },
    /// Print the resolved theme and its palette.
    Show {
        /// Pretend the platform reports this appearance.
        #[arg(long, value_enum)]
        appearance: Option<AppearanceArg>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AppearanceArg {
    Light,
    Dark,
}

impl From<AppearanceArg> for Appearance {
    fn from(arg: AppearanceArg) -> Self {
        match arg {
            AppearanceArg::Light => Appearance::Light,
            AppearanceArg::Dark => Appearance::Dark,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let storage = match cli.storage {
        Some(path) => FileStorage::new(path),
        None => FileStorage::open_default().context("locating theme storage")?,
    };

    match cli.command {
        Command::Get => {
            let store = ThemeStore::open(storage, SystemAppearance);
            println!("{}", store.preference());
        }
        Command::Set { preference } => {
            let mut store = ThemeStore::open(storage, SystemAppearance);
            store
                .set_preference_str(&preference)
                .with_context(|| format!("cannot set theme to '{}'", preference))?;
            let pref = store.preference();
            println!("{} {}", style(pref).bold(), style(pref.description()).dim());
        }
        Command::Show { appearance } => {
            let platform = match appearance {
                Some(arg) => FixedAppearance::new(Some(arg.into())),
                None => FixedAppearance::new(SystemAppearance.appearance()),
            };
            let store = ThemeStore::open(storage, platform);
            print_theme(&store.theme());
        }
    }

    Ok(())
}

fn print_theme(theme: &ResolvedTheme) {
    println!("preference   {}", theme.preference);
    println!("dark         {}", theme.is_dark);
    println!("status bar   {}", theme.status_bar_style());
    println!();

    for (role, color) in theme.palette.iter() {
        let swatch = theme.palette.swatch(role).apply_to("    ");
        let name = theme.palette.style(role).apply_to(format!("{:<16}", role.name()));
        println!("{} {} {}", swatch, name, color);
    }
}
