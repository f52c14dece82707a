//! go-app-gen's main application entry point.
//! Parses arguments, assembles the project configuration and drives the generator.

use go_app_gen::{
    cli::{
        get_args, output_dir, prepare_project_dir, project_config, version_info, Args, Command,
        CreateArgs,
    },
    error::{default_error_handler, Result},
    generator::{GenerationReport, Generator},
    logger::init_logger,
    post_process::SystemRunner,
    prompt::{prompt_project_config, DialoguerPrompter, Prompter},
    renderer::MiniJinjaRenderer,
    settings::{load_settings, settings_dirs},
    store::TemplateStore,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Create(create_args) => create(create_args, args.verbose),
        Command::Version => {
            println!("{}", version_info());
            Ok(())
        }
    }
}

/// Creates a project.
///
/// # Flow
/// 1. Loads the settings file
/// 2. Builds the configuration from flags or interactive answers
/// 3. Validates it and prepares the project directory
/// 4. Generates the project and runs the post-processing steps
fn create(args: CreateArgs, verbose: bool) -> Result<()> {
    let settings = load_settings(&settings_dirs())?;
    let prompt = DialoguerPrompter::new();

    let (config, output_root) = if args.interactive {
        println!("Welcome to go-app-gen! Let's create your Go application step by step.");
        prompt_project_config(&prompt, &args, &settings)?
    } else {
        (project_config(&args, &settings)?, output_dir(&args, &settings))
    };
    config.validate()?;

    let interactive_prompt = args.interactive.then_some(&prompt as &dyn Prompter);
    prepare_project_dir(&output_root, &config.app_name, args.force, interactive_prompt)?;

    let local_store;
    let store = match &args.templates {
        Some(dir) => {
            local_store = TemplateStore::from_dir(dir)?;
            &local_store
        }
        None => TemplateStore::embedded(),
    };
    let renderer = MiniJinjaRenderer::new();
    let runner = SystemRunner::new(verbose);

    let report = Generator::new(&output_root, store, &renderer, &runner)
        .with_post_processing(!args.skip_post_process)
        .generate(&config)?;

    print_summary(&report, &config.module_name, &config.app_name);
    Ok(())
}

fn print_summary(report: &GenerationReport, module_name: &str, app_name: &str) {
    if let Some(post_process) = &report.post_process {
        for warning in &post_process.warnings {
            println!("WARNING: {warning}");
            if let Some(hint) = &warning.hint {
                println!("   {hint}");
            }
        }
    }

    println!(
        "Successfully created project '{app_name}' in {} ({} files)",
        report.project_dir.display(),
        report.files.len()
    );
    println!("Project structure generated with module: {module_name}");
    println!();
    println!("Next steps:");
    println!("  cd {app_name}");
    if report.post_process.is_none() {
        println!("  go mod init {module_name} && go mod tidy");
    }
    println!("  make up      # Start the development environment");
    println!("  make help    # See all available commands");
}
