//! Project Suite CLI - project portfolio dashboard in the terminal

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use projectsuite_core::clock::{self, SharedClock};
use projectsuite_core::config::Config;
use projectsuite_core::domain::projects::{
    DateRange, FilterCriteria, NewProject, Project, ProjectCategory, ProjectEvent, ProjectId,
    ProjectPriority, ProjectService, ProjectStatus, Selector, ViewType,
};
use projectsuite_core::storage::ExportDocument;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "projectsuite")]
#[command(author, version, about = "Project portfolio dashboard", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Export document to use as the working set
    #[arg(long, global = true, env = "PROJECTSUITE_DATA")]
    data: Option<PathBuf>,

    /// Pin today's date (YYYY-MM-DD)
    #[arg(long, global = true, env = "PROJECTSUITE_TODAY")]
    today: Option<NaiveDate>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create a new project
    New {
        /// Project title
        title: String,
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start: Option<String>,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        end: Option<String>,
        /// Category (Design, Development, Infrastructure, Research, Marketing)
        #[arg(short, long)]
        category: Option<String>,
        /// Priority (high, medium, low)
        #[arg(short, long, default_value = "medium")]
        priority: ProjectPriority,
        /// Budget amount
        #[arg(short, long, default_value_t = 0.0)]
        budget: f64,
        /// Free-text description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Team member (repeatable)
        #[arg(short = 'm', long = "member")]
        members: Vec<String>,
    },

    /// Manage projects
    Projects {
        #[command(subcommand)]
        action: ProjectAction,
    },

    /// Show analytics and recent notifications
    Dashboard {
        /// Number of notifications to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show visible projects on a timeline
    Timeline {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Show visible projects grouped by status
    Kanban {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Export all projects as JSON
    Export {
        /// Output file (defaults to projects_export_<date>.json in export.directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ProjectAction {
    /// List visible projects
    List {
        #[command(flatten)]
        filters: FilterArgs,
        /// View mode (archive also lists archived projects)
        #[arg(long)]
        view: Option<ViewType>,
    },
    /// Show project details
    Show { id: ProjectId },
    /// Toggle the starred flag
    Star { id: ProjectId },
    /// Toggle the archived flag
    Archive { id: ProjectId },
    /// Set progress (clamped to 0-100)
    Progress {
        id: ProjectId,
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Get a configuration value
    Get { key: String },
    /// Set a configuration value
    Set { key: String, value: String },
    /// List all configuration values
    List,
    /// Reset configuration to defaults
    Reset,
    /// Show config file path
    Path,
}

/// Filter selectors shared by the listing commands
#[derive(Args, Debug, Clone, Default)]
struct FilterArgs {
    /// Status (active, planning, completed, on-hold or all)
    #[arg(long, default_value = "all")]
    status: Selector<ProjectStatus>,
    /// Priority (high, medium, low or all)
    #[arg(long, default_value = "all")]
    priority: Selector<ProjectPriority>,
    /// Category or all
    #[arg(long, default_value = "all")]
    category: Selector<ProjectCategory>,
    /// Date range (accepted, not applied)
    #[arg(long, default_value = "all")]
    date_range: DateRange,
    /// Search title, description, tags and team members
    #[arg(short, long, default_value = "")]
    search: String,
}

impl FilterArgs {
    fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            status: self.status,
            priority: self.priority,
            category: self.category,
            date_range: self.date_range,
        }
    }
}

/// Loaded working set plus where to write it back
struct Workspace {
    service: ProjectService,
    config: Config,
    clock: SharedClock,
    data_file: Option<PathBuf>,
}

impl Workspace {
    fn open(cli: &Cli) -> anyhow::Result<Self> {
        let config = Config::load()?;
        let clock = match cli.today {
            Some(day) => clock::fixed_on(day),
            None => clock::system(),
        };
        let data_file = cli.data.clone().or_else(|| config.data.file.clone());

        let service = match &data_file {
            Some(path) if path.exists() => {
                let document = ExportDocument::read_from(path)
                    .with_context(|| format!("Failed to load data file: {}", path.display()))?;
                debug!(path = %path.display(), projects = document.projects.len(), "Loaded data file");
                ProjectService::with_projects(clock.clone(), document.projects)
            }
            _ if config.data.seed_demo => ProjectService::seeded(clock.clone()),
            _ => ProjectService::new(clock.clone()),
        };

        Ok(Self {
            service,
            config,
            clock,
            data_file,
        })
    }

    /// Write the collection back to the data file, if there is one
    fn save(&self) -> anyhow::Result<()> {
        if let Some(path) = &self.data_file {
            let document = ExportDocument::new(self.service.projects().to_vec(), self.clock.now());
            document
                .write_to(path)
                .with_context(|| format!("Failed to write data file: {}", path.display()))?;
            info!(path = %path.display(), "Saved data file");
        }
        Ok(())
    }
}

fn init_tracing(quiet: bool) -> anyhow::Result<()> {
    let directive = if quiet {
        "projectsuite_core=warn"
    } else {
        "projectsuite_core=info"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(directive.parse()?),
        )
        .init();
    Ok(())
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    if let Err(e) = init_tracing(cli.quiet) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            if let Some(hint) = e
                .downcast_ref::<projectsuite_core::Error>()
                .and_then(|core| core.suggestion())
            {
                eprintln!("Hint: {hint}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let format = cli.format;
    let quiet = cli.quiet;

    match &cli.command {
        Commands::Config { action } => cmd_config(action, quiet),

        Commands::New {
            title,
            start,
            end,
            category,
            priority,
            budget,
            description,
            members,
        } => {
            let input = NewProject {
                title: title.clone(),
                description: description.clone(),
                start_date: start.clone().unwrap_or_default(),
                end_date: end.clone().unwrap_or_default(),
                priority: *priority,
                category: category.clone().unwrap_or_default(),
                budget: *budget,
                team_members: members.clone(),
            };
            let mut workspace = Workspace::open(&cli)?;
            cmd_new(&mut workspace, &input, format, quiet)
        }

        Commands::Projects { action } => {
            let mut workspace = Workspace::open(&cli)?;
            cmd_projects(&mut workspace, action, format, quiet)
        }

        Commands::Dashboard { limit } => {
            let workspace = Workspace::open(&cli)?;
            let limit = limit.unwrap_or(workspace.config.dashboard.recent_notifications);
            cmd_dashboard(&workspace, limit, format)
        }

        Commands::Timeline { filters } => {
            let workspace = Workspace::open(&cli)?;
            cmd_timeline(&workspace, filters, format)
        }

        Commands::Kanban { filters } => {
            let workspace = Workspace::open(&cli)?;
            cmd_kanban(&workspace, filters, format)
        }

        Commands::Export { output } => {
            let mut workspace = Workspace::open(&cli)?;
            cmd_export(&mut workspace, output.as_deref(), format, quiet)
        }
    }
}

// ============================================================================
// Command Implementations
// ============================================================================

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_event(event: &ProjectEvent, format: OutputFormat, quiet: bool) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => print_json(event),
        OutputFormat::Text => {
            if !quiet {
                println!("{}: {}", event.headline(), event.message());
            }
            Ok(())
        }
    }
}

fn cmd_new(
    workspace: &mut Workspace,
    input: &NewProject,
    format: OutputFormat,
    quiet: bool,
) -> anyhow::Result<()> {
    let event = workspace.service.create_project(input)?;
    workspace.save()?;

    print_event(&event, format, quiet)?;
    if format == OutputFormat::Text && !quiet {
        if let Some(project) = workspace.service.get(event.project_id) {
            println!("  ID: {}", project.id);
            println!("  Status: {}", project.status);
            println!("  Category: {}", project.category);
        }
    }
    Ok(())
}

fn project_line(project: &Project) -> String {
    format!(
        "  {:>3} {} {} [{}] {} / {} - {}%",
        project.id,
        if project.starred { "*" } else { " " },
        project.title,
        project.status,
        project.priority,
        project.category,
        project.progress,
    )
}

fn cmd_projects(
    workspace: &mut Workspace,
    action: &ProjectAction,
    format: OutputFormat,
    quiet: bool,
) -> anyhow::Result<()> {
    match action {
        ProjectAction::List { filters, view } => {
            let view = view.unwrap_or(workspace.config.view.default);
            let result = workspace
                .service
                .query(&filters.criteria(), &filters.search, view);
            match format {
                OutputFormat::Json => print_json(&result)?,
                OutputFormat::Text => {
                    if result.projects.is_empty() {
                        if !quiet {
                            println!("No projects found.");
                        }
                    } else {
                        if !quiet {
                            println!("Projects:");
                        }
                        for p in &result.projects {
                            let archived = if p.archived { " [archived]" } else { "" };
                            println!("{}{}", project_line(p), archived);
                        }
                    }
                }
            }
        }
        ProjectAction::Show { id } => {
            let today = workspace.clock.today();
            let project = workspace
                .service
                .get(*id)
                .ok_or(projectsuite_core::Error::ProjectNotFound(*id))?;
            match format {
                OutputFormat::Json => print_json(project)?,
                OutputFormat::Text => print_project(project, today),
            }
        }
        ProjectAction::Star { id } => {
            let event = workspace.service.toggle_star(*id)?;
            workspace.save()?;
            print_event(&event, format, quiet)?;
        }
        ProjectAction::Archive { id } => {
            let event = workspace.service.toggle_archive(*id)?;
            workspace.save()?;
            print_event(&event, format, quiet)?;
        }
        ProjectAction::Progress { id, value } => {
            let clamped = (*value).clamp(0, 100) as u32;
            let event = workspace.service.update_progress(*id, clamped)?;
            workspace.save()?;
            print_event(&event, format, quiet)?;
        }
    }
    Ok(())
}

fn print_project(p: &Project, today: NaiveDate) {
    println!("Project: {}", p.title);
    println!("  ID: {}", p.id);
    if !p.description.is_empty() {
        println!("  Description: {}", p.description);
    }
    println!("  Status: {}", p.status.label());
    println!("  Priority: {}", p.priority);
    println!("  Category: {}", p.category);
    println!("  Schedule: {} -> {}", p.start_date, p.end_date);
    println!("  Progress: {}%", p.progress);
    println!(
        "  Budget: {:.0} spent of {:.0} ({:.1}%)",
        p.spent,
        p.budget,
        p.budget_utilization()
    );
    println!(
        "  Tasks: {}/{} ({:.0}%)",
        p.completed_tasks,
        p.tasks,
        p.task_completion()
    );
    if !p.team_members.is_empty() {
        println!("  Team: {}", p.team_members.join(", "));
    }
    if !p.tags.is_empty() {
        println!("  Tags: {}", p.tags.join(", "));
    }
    println!("  Last activity: {}", p.last_activity);
    let mut flags = Vec::new();
    if p.starred {
        flags.push("starred");
    }
    if p.archived {
        flags.push("archived");
    }
    if p.is_overdue(today) {
        flags.push("overdue");
    }
    if p.is_over_budget() {
        flags.push("over budget");
    }
    if !flags.is_empty() {
        println!("  Flags: {}", flags.join(", "));
    }
}

fn cmd_dashboard(workspace: &Workspace, limit: usize, format: OutputFormat) -> anyhow::Result<()> {
    let dashboard = workspace.service.dashboard(limit);
    if format == OutputFormat::Json {
        return print_json(&dashboard);
    }

    let a = &dashboard.analytics;
    println!("Dashboard ({})", workspace.clock.today());
    println!("  Active projects: {} (avg progress {}%)", a.active_projects, a.avg_progress);
    println!(
        "  Completed: {} (on-time {:.1}%)",
        a.completed_projects, a.on_time_completion
    );
    println!(
        "  Budget: {:.0} spent of {:.0} ({:.1}%)",
        a.total_spent, a.total_budget, a.budget_utilization
    );
    println!("  Overdue: {}", a.overdue_projects);

    if !dashboard.notifications.is_empty() {
        println!("\nRecent notifications:");
        for n in &dashboard.notifications {
            println!("  [{}] {}  {}", n.kind, n.timestamp, n.message);
        }
    }
    Ok(())
}

fn cmd_timeline(workspace: &Workspace, filters: &FilterArgs, format: OutputFormat) -> anyhow::Result<()> {
    let entries = workspace
        .service
        .timeline(&filters.criteria(), &filters.search);
    match format {
        OutputFormat::Json => print_json(&entries)?,
        OutputFormat::Text => {
            if entries.is_empty() {
                println!("No projects found.");
            }
            for e in &entries {
                println!(
                    "  {:>3} {}  {} -> {}  {}  {}%",
                    e.id, e.title, e.start_date, e.end_date, e.status, e.progress
                );
            }
        }
    }
    Ok(())
}

fn cmd_kanban(workspace: &Workspace, filters: &FilterArgs, format: OutputFormat) -> anyhow::Result<()> {
    let board = workspace.service.kanban(&filters.criteria(), &filters.search);
    match format {
        OutputFormat::Json => print_json(&board)?,
        OutputFormat::Text => {
            for column in &board.columns {
                println!("{} ({})", column.label, column.count());
                for p in &column.projects {
                    println!("{}", project_line(p));
                }
            }
        }
    }
    Ok(())
}

fn cmd_export(
    workspace: &mut Workspace,
    output: Option<&Path>,
    format: OutputFormat,
    quiet: bool,
) -> anyhow::Result<()> {
    let document = workspace.service.export_document();
    let path = match output {
        Some(path) => {
            document.write_to(path)?;
            path.to_path_buf()
        }
        None => document.export_to_dir(&workspace.config.export.directory)?,
    };

    match format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "path": path.display().to_string(),
            "projects": document.projects.len(),
            "exportDate": document.export_date,
            "version": document.version,
        }))?,
        OutputFormat::Text => {
            if !quiet {
                println!("Data exported: Project data has been exported successfully.");
                println!("  File: {}", path.display());
                println!("  Projects: {}", document.projects.len());
            }
        }
    }
    Ok(())
}

fn cmd_config(action: &ConfigAction, quiet: bool) -> anyhow::Result<()> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            let value = config.get(key)?;
            println!("{}", value);
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(key, value)?;
            config.save()?;
            if !quiet {
                println!("Set {} = {}", key, value);
            }
        }
        ConfigAction::List => {
            let config = Config::load()?;
            let items = config.list()?;
            for (key, value) in items {
                println!("{} = {}", key, value);
            }
        }
        ConfigAction::Reset => {
            Config::reset()?;
            if !quiet {
                println!("Configuration reset to defaults.");
            }
        }
        ConfigAction::Path => {
            let path = Config::config_path()?;
            println!("{}", path.display());
        }
    }
    Ok(())
}
