use clap::Parser;
use colored::*;
use dexcli::api::DexApi;
use dexcli::commands::{CmdMessage, CmdResult, MessageLevel};
use dexcli::config::DexConfig;
use dexcli::error::{DexError, Result};
use dexcli::loader::Loader;
use dexcli::model::Pokemon;
use directories::ProjectDirs;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config_dir = resolve_config_dir();
    let config = DexConfig::load(&config_dir).unwrap_or_default();

    match cli.command {
        Some(Commands::Name { ref query, json }) => {
            let api = open_dex(&cli, &config)?;
            handle_lookup(api.find_by_name(query)?, json)
        }
        Some(Commands::Id { ref query, json }) => {
            let api = open_dex(&cli, &config)?;
            handle_lookup(api.find_by_id(query)?, json)
        }
        Some(Commands::List { json }) => {
            let api = open_dex(&cli, &config)?;
            handle_list(&api, json)
        }
        Some(Commands::Config { key, value }) => handle_config(&config_dir, config, key, value),
        None => {
            let api = open_dex(&cli, &config)?;
            run_prompt_loop(&api)
        }
    }
}

fn resolve_config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("DEXCLI_HOME") {
        return PathBuf::from(dir);
    }
    ProjectDirs::from("com", "dexcli", "dexcli")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Load the dataset exactly once, applying CLI overrides on top of the
/// config file. Skipped rows are reported on stderr so they never mix with
/// query output.
fn open_dex(cli: &Cli, config: &DexConfig) -> Result<DexApi> {
    let dataset = cli.dataset.clone().unwrap_or_else(|| config.dataset.clone());
    let capacity = cli.capacity.unwrap_or(config.capacity);

    let outcome = Loader::new(&dataset)
        .with_capacity(capacity)
        .strict(cli.strict || config.strict)
        .load()?;

    for row in &outcome.skipped {
        eprintln!(
            "{}",
            format!("Warning: skipped line {}: {}", row.line, row.reason).yellow()
        );
    }

    Ok(DexApi::new(outcome.dex))
}

fn handle_lookup(result: CmdResult, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&result.records)?);
        return Ok(());
    }
    for pokemon in &result.records {
        println!("{}", pokemon.info_block());
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(api: &DexApi, json: bool) -> Result<()> {
    let result = api.list()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result.records)?);
        return Ok(());
    }
    print_table(&result.records);
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(
    config_dir: &Path,
    mut config: DexConfig,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    match (key.as_deref(), value) {
        (None, _) => {
            println!("dataset = {}", config.dataset.display());
            println!("capacity = {}", config.capacity);
            println!("strict = {}", config.strict);
        }
        (Some("dataset"), None) => println!("dataset = {}", config.dataset.display()),
        (Some("dataset"), Some(v)) => {
            config.dataset = PathBuf::from(v);
            config.save(config_dir)?;
        }
        (Some("capacity"), None) => println!("capacity = {}", config.capacity),
        (Some("capacity"), Some(v)) => {
            config.capacity = v
                .parse()
                .map_err(|_| DexError::Config(format!("capacity must be a number, got {:?}", v)))?;
            config.save(config_dir)?;
        }
        (Some("strict"), None) => println!("strict = {}", config.strict),
        (Some("strict"), Some(v)) => {
            config.strict = v
                .parse()
                .map_err(|_| DexError::Config(format!("strict must be true or false, got {:?}", v)))?;
            config.save(config_dir)?;
        }
        (Some(other), _) => println!("Unknown config key: {}", other),
    }
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 78;
const ID_WIDTH: usize = 6;
const NAME_WIDTH: usize = 14;
const TYPING_WIDTH: usize = 18;

fn print_table(records: &[Pokemon]) {
    for pokemon in records {
        let id = format!("#{:<width$}", pokemon.id, width = ID_WIDTH - 1);
        let name = pad_to_width(&pokemon.name, NAME_WIDTH);
        let typing = pad_to_width(&pokemon.typing(), TYPING_WIDTH);
        let remaining = LINE_WIDTH - ID_WIDTH - NAME_WIDTH - TYPING_WIDTH - 3;
        let classification = truncate_to_width(&pokemon.classification, remaining);

        println!(
            "{} {} {} {}",
            id,
            name.bold(),
            typing.cyan(),
            classification.dimmed()
        );
    }
}

fn pad_to_width(s: &str, width: usize) -> String {
    let truncated = truncate_to_width(s, width);
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

// ---- Interactive prompt loop ----

/// One step of the prompt loop. Searching carries the user's query;
/// Displaying carries the resolved record; Exited is terminal.
enum ReplState {
    Prompting,
    Searching(SearchQuery),
    Displaying(Pokemon),
    Exited,
}

enum SearchQuery {
    Name(String),
    Id(String),
}

fn run_prompt_loop(api: &DexApi) -> Result<()> {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut state = ReplState::Prompting;

    loop {
        state = match state {
            ReplState::Prompting => prompt_for_query(&mut input)?,
            ReplState::Searching(query) => search(api, query)?,
            ReplState::Displaying(pokemon) => display_and_confirm(&mut input, &pokemon)?,
            ReplState::Exited => break,
        };
    }
    Ok(())
}

fn prompt_for_query<R: BufRead>(input: &mut R) -> Result<ReplState> {
    println!("\nWelcome to the Pokedex!");
    println!("Would you like to search by name or number?");

    let choice = match read_line(input)? {
        Some(choice) => choice,
        None => return Ok(ReplState::Exited),
    };

    if choice.eq_ignore_ascii_case("name") {
        println!("Please enter the name of the Pokemon.");
        match read_line(input)? {
            Some(query) => Ok(ReplState::Searching(SearchQuery::Name(query))),
            None => Ok(ReplState::Exited),
        }
    } else if choice.eq_ignore_ascii_case("number") {
        println!("Please enter the number of the Pokemon.");
        match read_line(input)? {
            Some(query) => Ok(ReplState::Searching(SearchQuery::Id(query))),
            None => Ok(ReplState::Exited),
        }
    } else {
        println!("{}", "Invalid input. Enter \"name\" or \"number\".".yellow());
        Ok(ReplState::Prompting)
    }
}

fn search(api: &DexApi, query: SearchQuery) -> Result<ReplState> {
    let result = match query {
        SearchQuery::Name(q) => api.find_by_name(&q)?,
        SearchQuery::Id(q) => match api.find_by_id(&q) {
            Ok(result) => result,
            Err(DexError::InvalidId(_)) => {
                println!(
                    "{}",
                    "Invalid Pokemon ID. The ID must be a number. Please try again.".red()
                );
                return Ok(ReplState::Prompting);
            }
            Err(e) => return Err(e),
        },
    };

    match result.records.into_iter().next() {
        Some(pokemon) => Ok(ReplState::Displaying(pokemon)),
        None => {
            println!("{}", "Pokemon not found. Please try again.".yellow());
            Ok(ReplState::Prompting)
        }
    }
}

fn display_and_confirm<R: BufRead>(input: &mut R, pokemon: &Pokemon) -> Result<ReplState> {
    println!("\n{}", pokemon.info_block());
    println!("\nWould you like to continue? (Y/N)");

    match read_line(input)? {
        Some(answer) if answer.eq_ignore_ascii_case("n") => {
            println!("Thank you for using the Pokedex.");
            Ok(ReplState::Exited)
        }
        Some(_) => Ok(ReplState::Prompting),
        None => Ok(ReplState::Exited),
    }
}

/// Read one trimmed line from the prompt. `None` means EOF, which ends the
/// session cleanly.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim().to_string()))
}
