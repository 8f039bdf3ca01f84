use clap::Parser;
use omnitree::application::ConvertService;
use omnitree::cli::{format_report, init_tracing, Cli};
use omnitree::error::OmniTreeError;
use omnitree::infrastructure::{OutputTree, SqliteSource};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_level());

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), OmniTreeError> {
    let settings = cli.settings()?;

    // Validate the output root before touching the database
    let tree = OutputTree::new(settings.output.clone())?;
    let source = SqliteSource::open(&settings.database)?;

    let service = ConvertService::new(source, tree, settings.archive);
    let report = service.execute()?;

    if !cli.quiet {
        print!("{}", format_report(&report, &settings.output));
    }

    Ok(())
}
