use clap::{Parser, Subcommand};
use maven_tree::{config, index, output};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let hash = env!("GIT_HASH");
    if hash.is_empty() {
        env!("CARGO_PKG_VERSION")
    } else {
        // Called once, while building the CLI
        Box::leak(format!("{} ({hash})", env!("CARGO_PKG_VERSION")).into_boxed_str())
    }
}

#[derive(Parser)]
#[command(name = "maven-tree")]
#[command(about = "Index a static Maven repository for a browsable site")]
#[command(long_about = "\
Index a static Maven repository for a browsable site

Reads the repository directory, infers groupId/artifactId/version from the
directory layout, and writes a JSON tree plus one file manifest per version.

Repository structure:

  repository/
  └── com/example/                 # Group segments → groupId com.example
      └── foo/                     # Artifact (has version subdirectories)
          ├── 1.0.0/               # Version (contains a .pom)
          │   ├── foo-1.0.0.pom
          │   ├── foo-1.0.0.jar
          │   └── foo-1.0.0.jar.sha1
          └── 2.0.0/
              └── foo-2.0.0.pom

Output:

  public/tree-data/tree.json                   # Whole hierarchy
  public/tree-data/com_example_foo_1.0.0.json  # Files of one version

Hidden entries and README.md are ignored. Run 'maven-tree gen-config' to
print a documented maven-tree.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Project directory holding maven-tree.toml and the repository
    #[arg(long, default_value = ".", global = true)]
    project: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the repository and write tree data (the default)
    Generate(GenerateArgs),
    /// Scan the repository and print what would be indexed
    Check,
    /// Print a stock maven-tree.toml with all options documented
    GenConfig,
}

#[derive(clap::Args, Clone, Default)]
struct GenerateArgs {
    /// Delete manifests of versions no longer in the repository
    #[arg(long)]
    prune: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli
        .command
        .unwrap_or(Command::Generate(GenerateArgs::default()))
    {
        Command::Generate(args) => {
            let mut generator_config = config::load_config(&cli.project)?;
            generator_config.prune_stale |= args.prune;
            let report = index::run(&cli.project, &generator_config)?;
            output::print_generate_output(&report);
        }
        Command::Check => {
            let generator_config = config::load_config(&cli.project)?;
            let root = generator_config.repository_path(&cli.project);
            println!("==> Checking {}", root.display());
            let repo_index = index::build(&root, &generator_config.root_label)?;
            output::print_tree_output(&repo_index);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
