//! Charm-style CLI prompts using cliclack

use crate::answers::{Answers, DEFAULT_DOCKER_TAG, DEFAULT_DOMAIN};
use crate::exec::{apply, check};
use crate::plan::{resolve, OsSecretSource};
use crate::summary;
use anyhow::Result;
use std::path::PathBuf;

/// CLI arguments for a scaffolding run
#[derive(Debug, Clone, Default)]
pub struct RunArgs {
    /// Rails application root to scaffold; defaults to the current directory
    pub directory: Option<PathBuf>,
}

/// Run the scaffolder with interactive prompts
pub async fn run(args: RunArgs) -> Result<()> {
    cliclack::intro("Jam Jar")?;

    // Step 1: Locate the Rails application root
    let project_root = resolve_project_root(&args)?;
    let app_name = project_root
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("app")
        .to_string();
    cliclack::log::info(format!("Scaffolding {}", project_root.display()))?;

    // Step 2: Check the host environment
    check_environment()?;

    // Step 3: Collect answers
    let answers = collect_answers(&app_name)?;

    if answers.use_docker {
        let docker = check::check_docker();
        if !docker.available {
            cliclack::log::warning(
                "docker was not found on PATH; the image build will fail unless \
                 the docker service is available",
            )?;
        }
    }

    // Step 4: Resolve the plan
    let mut secrets = OsSecretSource;
    let plan = resolve(&answers, &app_name, &mut secrets);
    let files = plan.iter().filter(|d| d.as_file().is_some()).count();
    let commands = plan.len() - files;
    cliclack::log::info(format!(
        "Planned {files} file changes and {commands} commands"
    ))?;

    // Step 5: Apply it
    apply::apply_plan(&project_root, &plan).await?;
    println!();
    cliclack::log::success("Project scaffolded")?;

    // Step 6: Show next steps
    print_whats_next(&answers)?;

    Ok(())
}

fn resolve_project_root(args: &RunArgs) -> Result<PathBuf> {
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let path = match &args.directory {
        Some(dir) if dir.is_absolute() => dir.clone(),
        Some(dir) => current_dir.join(dir),
        None => current_dir,
    };

    if !path.join("config").join("application.rb").exists() {
        anyhow::bail!(
            "{} does not look like a Rails application root (config/application.rb not found). \
             Generate the app first: rails new <name>",
            path.display()
        );
    }

    Ok(path)
}

fn check_environment() -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Checking environment...");

    match check::check_host() {
        Ok(tools) => {
            let detected: Vec<String> = tools.iter().map(|t| t.to_string()).collect();
            spinner.stop(format!("Detected: {}", detected.join(", ")));
            Ok(())
        }
        Err(e) => {
            spinner.stop("Environment check failed");
            cliclack::log::error(format!("{}", e))?;
            anyhow::bail!("Please fix the host environment and try again.");
        }
    }
}

fn collect_answers(app_name: &str) -> Result<Answers> {
    let default_db = app_name.to_lowercase().replace('-', "_");

    let database_name: String = cliclack::input("What should we call the database?")
        .placeholder(default_db.as_str())
        .default_input(default_db.as_str())
        .interact()?;

    let use_ember: bool = cliclack::confirm("Use an Ember frontend (ember-rails)?")
        .initial_value(false)
        .interact()?;

    let use_auth: bool = cliclack::confirm("Add user authentication with Devise?")
        .initial_value(false)
        .interact()?;

    let use_docker: bool = cliclack::confirm(
        "Set up with docker? Make sure the docker service is currently available if yes.",
    )
    .initial_value(false)
    .interact()?;

    let (domain, tag) = if use_docker {
        let domain: String =
            cliclack::input("What domain name should we configure the nginx container with?")
                .placeholder(DEFAULT_DOMAIN)
                .default_input(DEFAULT_DOMAIN)
                .interact()?;

        let tag: String = cliclack::input("What should the docker image be tagged as?")
            .placeholder(DEFAULT_DOCKER_TAG)
            .default_input(DEFAULT_DOCKER_TAG)
            .interact()?;

        (Some(domain), Some(tag))
    } else {
        (None, None)
    };

    Ok(Answers::new(
        database_name,
        use_ember,
        use_auth,
        use_docker,
        domain,
        tag,
    ))
}

fn print_whats_next(answers: &Answers) -> Result<()> {
    let steps = summary::whats_next(answers);

    println!();
    println!("  What next?");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    println!();
    cliclack::outro("You have a Jam Jar, now Add Jam!")?;

    Ok(())
}
