use anyhow::{Context, Result};
use medquiz_markup_config::Config;
use medquiz_markup_engine::{compile, io};
use std::io::{Read, Write};
use std::path::PathBuf;
use std::{env, fs, process};

const USAGE: &str = "\
Usage:
  {bin} compile [FILE]   compile FILE (or stdin) to HTML
  {bin} bank <FILE>      render every question in a bank file
  {bin} list [DIR]       list bank files under DIR or the configured banks_path
  {bin} init <DIR>       save DIR as banks_path in the user config";

#[derive(Debug, PartialEq)]
enum Command {
    Compile(Option<PathBuf>),
    Bank(PathBuf),
    List(Option<PathBuf>),
    Init(PathBuf),
}

fn parse_args(args: &[String]) -> Option<Command> {
    let rest: Vec<&str> = args.iter().skip(1).map(String::as_str).collect();
    match rest.as_slice() {
        ["compile"] => Some(Command::Compile(None)),
        ["compile", file] => Some(Command::Compile(Some(PathBuf::from(*file)))),
        ["bank", file] => Some(Command::Bank(PathBuf::from(*file))),
        ["list"] => Some(Command::List(None)),
        ["list", dir] => Some(Command::List(Some(PathBuf::from(*dir)))),
        ["init", dir] => Some(Command::Init(PathBuf::from(*dir))),
        _ => None,
    }
}

fn usage(bin: &str) -> String {
    USAGE.replace("{bin}", bin)
}

fn run_compile(file: Option<PathBuf>) -> Result<()> {
    let text = match file {
        Some(path) => fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let html = compile(&text);
    log::debug!("Compiled {} bytes into {} bytes", text.len(), html.len());
    std::io::stdout().write_all(html.as_bytes())?;
    Ok(())
}

fn run_bank(path: PathBuf) -> Result<()> {
    let bank = io::load_bank(&path)?;
    let mut stdout = std::io::stdout().lock();

    writeln!(stdout, "<h1>{}</h1>", compile(&bank.title))?;
    for question in bank.render() {
        stdout.write_all(question.to_html().as_bytes())?;
    }
    Ok(())
}

fn run_list(dir: Option<PathBuf>) -> Result<()> {
    let config_path = Config::default_path();
    if dir.is_none() {
        log::info!("Using banks_path from {}", config_path.display());
    }
    let banks_path = Config::resolve_banks_path(dir, &config_path)?;

    for file in io::scan_bank_files(&banks_path)? {
        match io::load_bank(&file) {
            Ok(bank) => println!(
                "{}\t{}\t{} questions",
                file.display(),
                bank.title,
                bank.questions.len()
            ),
            Err(e) => log::warn!("Skipping {}: {e}", file.display()),
        }
    }
    Ok(())
}

fn run_init(dir: PathBuf) -> Result<()> {
    let banks_path = fs::canonicalize(&dir)
        .with_context(|| format!("Banks directory {} is not accessible", dir.display()))?;
    let config_path = Config::default_path();

    Config { banks_path }.write(&config_path)?;
    println!("Wrote {}", config_path.display());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let bin = args.first().map(String::as_str).unwrap_or("medquiz-markup");

    let Some(command) = parse_args(&args) else {
        eprintln!("{}", usage(bin));
        process::exit(1);
    };

    match command {
        Command::Compile(file) => run_compile(file),
        Command::Bank(path) => run_bank(path),
        Command::List(dir) => run_list(dir),
        Command::Init(dir) => run_init(dir),
    }
}
