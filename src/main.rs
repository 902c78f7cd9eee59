use anyhow::Result;
use clap::Parser;
use log::info;

use calc_builder::cli::commands::{BrandSubcommands, OptionSubcommands, SettingsSubcommands};
use calc_builder::cli::{Cli, Commands};
use calc_builder::commands::{brand, calculator, element, estimate, option, settings};
use calc_builder::config::Config;
use calc_builder::export::Exporter;
use calc_builder::store::SqliteStore;
use calc_builder::ui::prompts::text_input;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger to file (truncate on each run)
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("calc-builder.log")?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    let cli = Cli::parse();
    info!("Starting calc-builder");

    // Config-only commands never touch the database
    let command = match cli.command {
        Commands::Settings(settings_cmd) => {
            return match settings_cmd.command {
                SettingsSubcommands::Show => settings::show_command().await,
                SettingsSubcommands::Get { name } => settings::get_command(name).await,
                SettingsSubcommands::Set { name, value } => settings::set_command(name, value).await,
                SettingsSubcommands::Reset { name } => settings::reset_command(name).await,
                SettingsSubcommands::ResetAll { force } => settings::reset_all_command(force).await,
            };
        }
        Commands::Brand(brand_cmd) => {
            return match brand_cmd.command {
                BrandSubcommands::Show => brand::show_command().await,
                BrandSubcommands::Set { name, value } => brand::set_command(name, value).await,
                BrandSubcommands::Logo { file } => brand::logo_command(file).await,
                BrandSubcommands::ClearLogo => brand::clear_logo_command().await,
            };
        }
        Commands::Palette => return element::palette_command().await,
        other => other,
    };

    let config = Config::load()?;
    let store = SqliteStore::open(&config.database_path()?).await?;
    let exporter = Exporter::new();

    match command {
        Commands::List => calculator::list_command(&store).await,
        Commands::New { name, description } => {
            let name = match name {
                Some(name) => name,
                None => text_input("Calculator name", Some("Untitled Calculator"))?,
            };
            calculator::new_command(&store, name, description).await.map(drop)
        }
        Commands::Show { id } => calculator::show_command(&store, &config, id).await,
        Commands::Add {
            id,
            element_type,
            group,
            label,
            properties,
        } => element::add_command(&store, id, element_type, group, label, properties)
            .await
            .map(drop),
        Commands::Move { id, element, group } => element::move_command(&store, id, element, group).await,
        Commands::Remove { id, element } => element::remove_command(&store, id, element).await,
        Commands::Set { id, element, key, value } => element::set_command(&store, id, element, key, value).await,
        Commands::Option(option_cmd) => match option_cmd.command {
            OptionSubcommands::Add { id, element } => option::add_command(&store, id, element).await.map(drop),
            OptionSubcommands::Set {
                id,
                element,
                index,
                key,
                value,
            } => option::set_command(&store, id, element, index, key, value).await,
            OptionSubcommands::Remove { id, element, index } => {
                option::remove_command(&store, id, element, index).await
            }
            OptionSubcommands::Image {
                id,
                element,
                index,
                file,
            } => option::image_command(&store, id, element, index, file).await,
        },
        Commands::Rename { id, name, description } => {
            calculator::rename_command(&store, id, name, description).await
        }
        Commands::Quote { id, values } => estimate::quote_command(&store, &config, id, values).await.map(drop),
        Commands::Preview { id, page, values } => {
            estimate::preview_command(&store, &config, id, page, values).await
        }
        Commands::Export {
            id,
            format,
            output,
            values,
        } => estimate::export_command(&store, &config, &exporter, id, format, output, values)
            .await
            .map(drop),
        Commands::Publish { id } => calculator::publish_command(&store, id).await,
        Commands::Unpublish { id } => calculator::unpublish_command(&store, id).await,
        Commands::Share { id } => calculator::share_command(&store, &config, id).await.map(drop),
        Commands::Info => calculator::info_command(&store, &config).await,
        Commands::Open { path } => calculator::open_command(&store, &config, path).await,
        Commands::Delete { id, force } => calculator::delete_command(&store, id, force).await.map(drop),
        Commands::Settings(_) | Commands::Brand(_) | Commands::Palette => Ok(()),
    }
}
