use anyhow::Result;
use clap::{Parser, Subcommand};
use librarian::areas::catalog::SortKey;
use librarian::areas::repository::Repository;
use librarian::artifacts::record::filter::RecordFilter;
use librarian::artifacts::record::size_unit::SizeUnit;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "librarian",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Track, tag and compare a working set of files",
    long_about = "Keeps a catalog of files you care about, lets you tag and filter them, \
    and reports where the content of two files starts to differ from either end.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        long,
        global = true,
        env = "LIBRARIAN_ROOT",
        help = "Directory paths are resolved against (defaults to the current directory)"
    )]
    root: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        env = "LIBRARIAN_CATALOG",
        help = "Catalog file (defaults to .librarian.json in the root)"
    )]
    catalog: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "add",
        about = "Track files",
        long_about = "This command adds files to the catalog. Directories are expanded recursively."
    )]
    Add {
        #[arg(index = 1, required = true, help = "Files or directories to track")]
        paths: Vec<String>,
    },
    #[command(name = "tag", about = "Tag tracked files")]
    Tag {
        #[arg(index = 1, help = "The tag to add")]
        tag: String,
        #[arg(index = 2, required = true, help = "Tracked files to tag")]
        paths: Vec<String>,
    },
    #[command(
        name = "list",
        about = "List tracked files",
        long_about = "This command lists tracked files. All given filters must match."
    )]
    List {
        #[arg(long, help = "Only files carrying this tag")]
        tag: Option<String>,
        #[arg(long, help = "Only files whose name contains this text")]
        name: Option<String>,
        #[arg(long, help = "Only files whose content contains this text")]
        content: Option<String>,
        #[arg(short, long, help = "Match name and content case-insensitively")]
        ignore_case: bool,
        #[arg(long, value_parser = parse_sort_key, help = "Sort the catalog by name or size first")]
        sort: Option<SortKey>,
    },
    #[command(
        name = "compare",
        about = "Compare the content of two tracked files",
        long_about = "This command reports whether two tracked files are identical, match in content \
        but differ in size, or differ, with the first different line from each end."
    )]
    Compare {
        #[arg(index = 1)]
        this: String,
        #[arg(index = 2)]
        other: String,
        #[arg(long, help = "Treat empty lines as content instead of skipping them")]
        keep_empty_lines: bool,
    },
    #[command(name = "size", about = "Print the size of a tracked file")]
    Size {
        #[arg(index = 1)]
        path: String,
        #[arg(short, long, default_value = "b", help = "Unit: b, kb, mb or gb")]
        unit: SizeUnit,
    },
    #[command(name = "status", about = "Summarize the tracked files")]
    Status,
}

fn parse_sort_key(value: &str) -> Result<SortKey> {
    match value {
        "name" => Ok(SortKey::Name),
        "size" => Ok(SortKey::Size),
        other => anyhow::bail!("unknown sort key: {other}"),
    }
}

fn main() -> Result<()> {
    librarian::logging::init_logging()?;

    let cli = Cli::parse();

    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };
    let mut repository = Repository::new(&root, cli.catalog, Box::new(std::io::stdout()))?;

    match cli.command {
        Commands::Add { paths } => repository.add(&paths)?,
        Commands::Tag { tag, paths } => repository.tag(&tag, &paths)?,
        Commands::List {
            tag,
            name,
            content,
            ignore_case,
            sort,
        } => {
            let filter = RecordFilter {
                tag,
                name,
                content,
                ignore_case,
            };
            repository.list(&filter, sort)?
        }
        Commands::Compare {
            this,
            other,
            keep_empty_lines,
        } => repository.compare(&this, &other, !keep_empty_lines)?,
        Commands::Size { path, unit } => repository.size(&path, unit)?,
        Commands::Status => repository.status()?,
    }

    Ok(())
}
