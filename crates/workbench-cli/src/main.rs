//! Workbench CLI - interactive DIY project tracker

use clap::Parser;
use rust_decimal::Decimal;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::path::PathBuf;
use tracing::info;
use workbench_core::config::Config;
use workbench_core::project::{Project, ProjectPatch, ProjectService, ProjectValidator};
use workbench_core::storage::{Database, DatabaseConfig};

#[derive(Parser)]
#[command(name = "workbench")]
#[command(author, version, about = "Track DIY projects, their materials and steps", long_about = None)]
struct Cli {
    /// Path to the SQLite database (overrides configuration)
    #[arg(long)]
    database: Option<PathBuf>,

    /// Quiet mode (minimal output)
    #[arg(short, long)]
    quiet: bool,
}

const OPERATIONS: &[&str] = &[
    "1) Add a project",
    "2) List projects",
    "3) Select a project",
    "4) Update project details",
    "5) Delete a project",
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("workbench=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    let db_path = cli.database.clone().unwrap_or_else(|| config.database_path());
    info!(path = %db_path.display(), "Opening database");

    let db = Database::new(
        DatabaseConfig::with_path(db_path).max_connections(config.database.max_connections),
    )
    .await?;
    let service = ProjectService::new(&db);

    let result = run_menu(&service, cli.quiet).await;
    db.close().await;
    result
}

async fn run_menu(service: &ProjectService, quiet: bool) -> anyhow::Result<()> {
    let mut editor = DefaultEditor::new()?;
    // The current selection lives here and is passed to handlers explicitly
    let mut current: Option<Project> = None;

    if !quiet {
        println!("workbench - DIY project tracker");
    }

    loop {
        println!("\nSelect an operation (press Enter to quit):");
        for operation in OPERATIONS {
            println!("{}", operation);
        }

        let Some(input) = read_line(&mut editor, "Selection: ")? else {
            break;
        };
        if input.is_empty() {
            break;
        }

        let outcome = match input.as_str() {
            "1" => add_project(service, &mut editor).await,
            "2" => list_projects(service).await,
            "3" => select_project(service, &mut editor, &mut current).await,
            "4" => update_project(service, &mut editor, &mut current).await,
            "5" => delete_project(service, &mut editor, &mut current).await,
            other => {
                println!("\n{} is not a valid selection. Try again.", other);
                Ok(())
            }
        };

        if let Err(err) = outcome {
            println!("\nError: {} Try again.", err);
        }
    }

    if !quiet {
        println!("\nExiting.");
    }
    Ok(())
}

async fn add_project(service: &ProjectService, editor: &mut DefaultEditor) -> anyhow::Result<()> {
    let Some(name) = prompt_string(editor, "Enter the project name: ")? else {
        println!("A project name is required.");
        return Ok(());
    };
    let estimated_hours =
        prompt_decimal(editor, "Enter the estimated hours: ")?.unwrap_or(Decimal::ZERO);
    let actual_hours = prompt_decimal(editor, "Enter the actual hours: ")?.unwrap_or(Decimal::ZERO);
    let difficulty = prompt_int(editor, "Enter the project difficulty (1-5): ")?.unwrap_or(1);
    let notes = prompt_string(editor, "Enter the project notes: ")?;

    let mut project = Project::new(name, estimated_hours, actual_hours, difficulty);
    if let Some(notes) = notes {
        project = project.with_notes(notes);
    }
    ProjectValidator::validate(&project)?;

    let created = service.add_project(project).await?;

    println!("\nYou have successfully created project:");
    print_project(&created);
    Ok(())
}

async fn list_projects(service: &ProjectService) -> anyhow::Result<()> {
    let projects = service.fetch_all_projects().await?;

    if projects.is_empty() {
        println!("\nNo projects found.");
        return Ok(());
    }

    println!("\nProjects:");
    for project in &projects {
        println!("  {}: {}", project.project_id, project.project_name);
    }
    Ok(())
}

async fn select_project(
    service: &ProjectService,
    editor: &mut DefaultEditor,
    current: &mut Option<Project>,
) -> anyhow::Result<()> {
    let projects = service.fetch_all_projects().await?;

    if projects.is_empty() {
        println!("\nNo projects found.");
        return Ok(());
    }

    println!("\nAvailable projects:");
    for project in &projects {
        println!("  {}: {}", project.project_id, project.project_name);
    }

    let Some(id) = prompt_int(editor, "Enter the ID of the project you want to select: ")? else {
        return Ok(());
    };

    match projects.into_iter().find(|p| p.project_id == id) {
        Some(project) => {
            println!("\nYou have selected project:");
            print_project(&project);
            print_children(&project);
            *current = Some(project);
        }
        None => println!("Invalid project ID. Please try again."),
    }
    Ok(())
}

async fn update_project(
    service: &ProjectService,
    editor: &mut DefaultEditor,
    current: &mut Option<Project>,
) -> anyhow::Result<()> {
    let Some(selected) = current.as_ref() else {
        println!("\nPlease select a project first.");
        return Ok(());
    };

    println!("\nCurrent project details:");
    print_project(selected);
    println!();

    // Blank answers keep the current value; the merge happens here, before
    // the storage layer ever sees the project.
    let patch = ProjectPatch {
        project_name: prompt_string(
            editor,
            "Enter the new project name (or leave blank to keep current value): ",
        )?,
        estimated_hours: prompt_decimal(
            editor,
            "Enter the new estimated hours (or leave blank to keep current value): ",
        )?,
        actual_hours: prompt_decimal(
            editor,
            "Enter the new actual hours (or leave blank to keep current value): ",
        )?,
        difficulty: prompt_int(
            editor,
            "Enter the new difficulty (1-5, or leave blank to keep current value): ",
        )?,
        notes: prompt_string(
            editor,
            "Enter the new project notes (or leave blank to keep current value): ",
        )?,
    };

    let updated = selected.merged_with(patch);
    ProjectValidator::validate(&updated)?;
    service.update_project_details(&updated).await?;

    // Reread the project to pick up the stored state
    *current = service.fetch_project_by_id(updated.project_id).await?;

    if let Some(project) = current.as_ref() {
        println!("\nProject details updated:");
        print_project(project);
    }
    Ok(())
}

async fn delete_project(
    service: &ProjectService,
    editor: &mut DefaultEditor,
    current: &mut Option<Project>,
) -> anyhow::Result<()> {
    let projects = service.fetch_all_projects().await?;

    if projects.is_empty() {
        println!("\nNo projects found.");
        return Ok(());
    }

    println!("\nProjects:");
    for project in &projects {
        println!("  {}: {}", project.project_id, project.project_name);
    }

    let Some(id) = prompt_int(editor, "Enter the ID of the project you want to delete: ")? else {
        return Ok(());
    };

    service.delete_project(id).await?;

    if current.as_ref().is_some_and(|p| p.project_id == id) {
        *current = None;
    }

    println!("\nProject with ID={} has been deleted.", id);
    Ok(())
}

fn print_project(project: &Project) {
    println!("  ID: {}", project.project_id);
    println!("  Name: {}", project.project_name);
    println!("  Estimated hours: {}", project.estimated_hours);
    println!("  Actual hours: {}", project.actual_hours);
    println!("  Difficulty: {}", project.difficulty);
    println!("  Notes: {}", project.notes.as_deref().unwrap_or(""));
}

fn print_children(project: &Project) {
    if !project.materials.is_empty() {
        println!("  Materials:");
        for material in &project.materials {
            println!(
                "    {} (x{}, {} each)",
                material.material_name, material.num_required, material.cost
            );
        }
    }
    if !project.steps.is_empty() {
        println!("  Steps:");
        for step in &project.steps {
            println!("    {}. {}", step.step_order, step.step_text);
        }
    }
    if !project.categories.is_empty() {
        println!("  Categories:");
        for category in &project.categories {
            println!("    {}", category.category_name);
        }
    }
}

/// Read one trimmed line; `None` means end of input (Ctrl-D / Ctrl-C)
fn read_line(editor: &mut DefaultEditor, prompt: &str) -> anyhow::Result<Option<String>> {
    match editor.readline(prompt) {
        Ok(line) => Ok(Some(line.trim().to_string())),
        Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// Prompt for a string; blank input means "no value"
fn prompt_string(editor: &mut DefaultEditor, prompt: &str) -> anyhow::Result<Option<String>> {
    let Some(input) = read_line(editor, prompt)? else {
        return Ok(None);
    };
    if input.is_empty() {
        Ok(None)
    } else {
        Ok(Some(input))
    }
}

/// Prompt for a decimal, re-asking until the input parses or is left blank
fn prompt_decimal(editor: &mut DefaultEditor, prompt: &str) -> anyhow::Result<Option<Decimal>> {
    loop {
        let Some(input) = prompt_string(editor, prompt)? else {
            return Ok(None);
        };
        match input.parse::<Decimal>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => println!("Invalid input. Please enter a valid decimal number."),
        }
    }
}

/// Prompt for an integer, re-asking until the input parses or is left blank
fn prompt_int(editor: &mut DefaultEditor, prompt: &str) -> anyhow::Result<Option<i64>> {
    loop {
        let Some(input) = prompt_string(editor, prompt)? else {
            return Ok(None);
        };
        match input.parse::<i64>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => println!("Invalid input. Please enter a valid integer."),
        }
    }
}
