use std::io::{Error, ErrorKind, Write};
use std::path::PathBuf;

use clap::Parser;
use env_logger::Builder;
use log::{error, info};

use job_model::job::Job;
use job_model::resources::JobResources;
use job_model::script::Script;

#[derive(Parser, Debug)]
#[command(about, long_about = None)]
/// Builds job description from resources config and script file and prints it as JSON
struct Args {
    /// Path to YAML file with job resources (default resources are used if not set)
    #[arg(short, long)]
    resources: Option<PathBuf>,

    /// Path to script file executed by the job
    #[arg(short, long)]
    script: PathBuf,

    /// Script name used instead of the file name
    #[arg(long)]
    name: Option<String>,

    /// Path to produced JSON file (printed to stdout if not set)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn invalid_input(message: String) -> Error {
    error!("{}", message);
    Error::new(ErrorKind::InvalidInput, message)
}

fn main() -> std::io::Result<()> {
    Builder::from_default_env()
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();

    let args = Args::parse();

    let resources = match &args.resources {
        Some(path) => JobResources::from_file(path).map_err(invalid_input)?,
        None => JobResources::default(),
    };
    let mut script = Script::from_file(&args.script).map_err(invalid_input)?;
    if let Some(name) = args.name {
        script.name = name;
    }
    info!(
        "Job script {}: {} cores, {} GB RAM, {} GB disk",
        script.name,
        resources.min_cores(),
        resources.min_ram(),
        resources.disk_size()
    );

    let job = Job::new(resources, script);
    let json = serde_json::to_string_pretty(&job)?;
    match args.output {
        Some(path) => std::fs::File::create(path)?.write_all(json.as_bytes()),
        None => writeln!(std::io::stdout(), "{}", json),
    }
}
