use anyhow::{Context, Result};
use relative_path::RelativePath;
use rubrica_config::Config;
use rubrica_engine::{AreaQuestions, io, parse, rubric_rows};
use std::{env, path::PathBuf, process};
use tracing_subscriber::EnvFilter;

fn usage(program: &str) -> ! {
    eprintln!("Usage: {program} <area> [document-path] [--json]");
    eprintln!();
    eprintln!("Without a document path the area is looked up in the config file");
    eprintln!("at {}", Config::config_path().display());
    process::exit(1);
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("rubrica-cli");

    let mut json = false;
    let mut positional = Vec::new();
    for arg in &args[1..] {
        match arg.as_str() {
            "--json" => json = true,
            flag if flag.starts_with("--") => {
                eprintln!("Error: unknown flag '{flag}'");
                usage(program);
            }
            value => positional.push(value.to_string()),
        }
    }

    let (area, document_arg) = match positional.as_slice() {
        [area] => (area.clone(), None),
        [area, path] => (area.clone(), Some(PathBuf::from(path))),
        _ => usage(program),
    };

    let content = match document_arg {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read document '{}'", path.display()))?,
        None => read_from_config(&area, program)?,
    };

    let parsed = parse(&content, &area)?;

    if json {
        let rows = rubric_rows(&parsed);
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print_summary(&parsed);
    }

    Ok(())
}

/// Resolves the area's document through the config file: documents root plus
/// the per-area filename mapping.
fn read_from_config(area: &str, program: &str) -> Result<String> {
    let config_path = Config::config_path();
    let config = match Config::load() {
        Ok(Some(config)) => config,
        Ok(None) => {
            eprintln!("Error: no document path provided and no config file found");
            usage(program);
        }
        Err(e) => {
            eprintln!("Error: failed to load config file: {e}");
            usage(program);
        }
    };

    if let Err(e) = io::validate_docs_dir(&config.docs_root) {
        eprintln!(
            "Error: documents root '{}' from config file '{}' is invalid: {e}",
            config.docs_root.display(),
            config_path.display()
        );
        process::exit(1);
    }

    let Some(filename) = config.documents.get(area) else {
        eprintln!(
            "Error: area '{area}' has no document mapped in config file '{}'",
            config_path.display()
        );
        process::exit(1);
    };

    io::read_document(RelativePath::new(filename), &config.docs_root)
        .with_context(|| format!("failed to read document for area '{area}'"))
}

fn print_summary(parsed: &AreaQuestions) {
    println!(
        "Área '{}': {} acciones, {} secciones",
        parsed.area,
        parsed.acciones.len(),
        parsed.total_sections
    );

    let mut current_objetivo = None;
    for accion in &parsed.acciones {
        if current_objetivo != Some(accion.objetivo_number) {
            current_objetivo = Some(accion.objetivo_number);
            println!();
            println!("OBJETIVO {}: {}", accion.objetivo_number, accion.objetivo_title);
        }
        let questions: usize = accion
            .sections
            .iter()
            .map(|section| section.questions.len())
            .sum();
        let levels: usize = accion
            .sections
            .iter()
            .map(|section| section.levels.len())
            .sum();
        println!(
            "  ACCIÓN {}: {} ({} secciones, {} preguntas, {} niveles)",
            accion.accion_number,
            accion.accion_description,
            accion.sections.len(),
            questions,
            levels
        );
    }
}
