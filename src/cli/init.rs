//! Init command implementation

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};

use crate::cli::GlobalOptions;
use crate::config::{Config, ProviderConfig};
use crate::error::Result;

/// Interactively set provider keys and collection settings.
///
/// Existing values are kept when a prompt is left empty.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}", "Welcome to geobrief!".bold().green());
    println!("Let's set up your provider keys. Leave a key empty to keep the current one.\n");

    let mut config = Config::load_at(opts.config_ref()).unwrap_or_default();
    let theme = ColorfulTheme::default();

    prompt_key(&theme, "apilayer geo (countries)", &mut config.providers.country)?;
    prompt_key(&theme, "apilayer fixer (currency)", &mut config.providers.currency)?;
    prompt_key(&theme, "OpenWeatherMap", &mut config.providers.weather)?;
    prompt_key(&theme, "NewsAPI", &mut config.providers.news)?;

    config.collect.region = Input::with_theme(&theme)
        .with_prompt("Region")
        .default(config.collect.region.clone())
        .interact_text()?;

    config.collect.base_currency = Input::with_theme(&theme)
        .with_prompt("Base currency")
        .default(config.collect.base_currency.clone())
        .validate_with(|input: &String| -> std::result::Result<(), &str> {
            if !input.is_empty() && input.chars().all(|c| c.is_ascii_alphabetic()) {
                Ok(())
            } else {
                Err("use a currency code such as rub or eur")
            }
        })
        .interact_text()?;

    config.validate()?;
    config.save_at(opts.config_ref())?;

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - Fill the cache", "geobrief collect".cyan());
    println!("  {} - Briefing for one country", "geobrief report <COUNTRY>".cyan());

    Ok(())
}

fn prompt_key(theme: &ColorfulTheme, provider: &str, slot: &mut ProviderConfig) -> Result<()> {
    let status = if slot.api_key.is_some() {
        "set".green()
    } else {
        "not set".yellow()
    };
    let key: String = Password::with_theme(theme)
        .with_prompt(format!("{} API key [{}]", provider, status))
        .allow_empty_password(true)
        .interact()?;

    let key = key.trim();
    if !key.is_empty() {
        slot.api_key = Some(key.to_string());
    }
    Ok(())
}
