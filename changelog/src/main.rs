//! Interactive tool to create unreleased changelog entries.
//!
//! Entries are YAML files stored in `releases/unreleased/` under the git root
//! (the superproject root when run inside a submodule).

use std::error::Error as _;

use anyhow::{Context, Result};
use changelog::core::category::Category;
use changelog::core::validate::{validate_category, validate_title};
use changelog::create::{NewEntryOutcome, NewEntryRequest, create_entry};
use changelog::exit_codes;
use changelog::io::config::{ChangelogConfig, load_config};
use changelog::io::editor::{CommandEditor, Editor, Passthrough};
use changelog::io::git::{Git, GitEnv};
use changelog::io::project::Project;
use changelog::io::prompt::TerminalPrompter;
use changelog::logging;
use clap::Parser;
use clap::error::ErrorKind;

#[derive(Parser)]
#[command(
    name = "changelog",
    version,
    about = "Create unreleased changelog entries",
    long_about = "Create unreleased changelog entries.\n\n\
        Missing title or category are asked for interactively. The entry is \
        opened in your editor for a final review, then stored in \
        releases/unreleased/ under the git root. Run it inside a submodule to \
        file the entry in the superproject."
)]
struct Cli {
    /// Title for the changelog entry.
    #[arg(short, long, value_parser = validate_title)]
    title: Option<String>,

    /// The category of the change, by number (1-8) or name.
    #[arg(short, long, value_parser = validate_category)]
    category: Option<Category>,

    /// Author of the change.
    #[arg(long)]
    author: Option<String>,

    /// Pull request the change came from.
    #[arg(long, visible_alias = "pr")]
    pull_request: Option<String>,

    /// Free-form notes for the release manager.
    #[arg(long)]
    notes: Option<String>,

    /// Do not generate an entry. Print to the standard output instead.
    #[arg(long)]
    dry_run: bool,

    /// Force to replace an existing entry.
    #[arg(long)]
    overwrite: bool,

    /// Open entry in the default editor.
    #[arg(long, overrides_with = "no_editor")]
    editor: bool,

    /// Do not open the editor.
    #[arg(long, overrides_with = "editor")]
    no_editor: bool,
}

impl Cli {
    fn open_editor(&self, config: &ChangelogConfig) -> bool {
        if self.no_editor {
            false
        } else if self.editor {
            true
        } else {
            config.open_editor
        }
    }

    fn request(&self) -> NewEntryRequest {
        NewEntryRequest {
            title: self.title.clone(),
            category: self.category,
            author: self.author.clone(),
            pull_request: self.pull_request.clone(),
            notes: self.notes.clone(),
            dry_run: self.dry_run,
            overwrite: self.overwrite,
        }
    }
}

fn main() {
    logging::init();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match value_error_line(&err) {
            Some(line) => {
                eprintln!("{line}");
                std::process::exit(exit_codes::INVALID_INPUT);
            }
            None => err.exit(),
        },
    };
    let code = match run(&cli) {
        Ok(()) => exit_codes::OK,
        Err(err) => {
            eprintln!("Error: {err:#}");
            exit_codes::for_error(&err)
        }
    };
    std::process::exit(code);
}

/// One-line report for a flag value rejected by our own validators.
///
/// Other clap errors (unknown flags, `--help`) keep clap's own output.
fn value_error_line(err: &clap::Error) -> Option<String> {
    if err.kind() != ErrorKind::ValueValidation {
        return None;
    }
    err.source().map(|cause| format!("Error: {cause}"))
}

fn run(cli: &Cli) -> Result<()> {
    let cwd = std::env::current_dir().context("read current directory")?;
    let git = Git::new(cwd, GitEnv::from_process());
    let project = Project::discover(&git)?;
    let config = load_config(&project.config_path)?;

    let editor: Box<dyn Editor> = if cli.open_editor(&config) {
        Box::new(CommandEditor::resolve(config.editor.as_deref())?)
    } else {
        Box::new(Passthrough)
    };
    let mut prompter = TerminalPrompter::stdio();

    match create_entry(&project, &cli.request(), &mut prompter, editor.as_ref())? {
        NewEntryOutcome::Written { filename, .. } => {
            println!("Changelog entry '{filename}' created");
        }
        NewEntryOutcome::DryRun { content } => print!("{content}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_flags() {
        let cli = Cli::parse_from([
            "changelog",
            "-t",
            " new change ",
            "-c",
            "1",
            "--overwrite",
            "--no-editor",
        ]);
        assert_eq!(cli.title.as_deref(), Some("new change"));
        assert_eq!(cli.category, Some(Category::Added));
        assert!(cli.overwrite);
        assert!(!cli.open_editor(&ChangelogConfig::default()));
    }

    #[test]
    fn category_by_name() {
        let cli = Cli::parse_from(["changelog", "--category", "Security"]);
        assert_eq!(cli.category, Some(Category::Security));
    }

    #[test]
    fn invalid_flag_values_are_usage_errors() {
        for args in [
            vec!["changelog", "--title", " "],
            vec!["changelog", "--category", "42"],
            vec!["changelog", "--category", "bogus"],
        ] {
            let err = Cli::try_parse_from(args).err().expect("parse error");
            assert_eq!(err.exit_code(), exit_codes::INVALID_INPUT);
        }
    }

    #[test]
    fn rejected_values_are_reported_on_one_line() {
        let err = Cli::try_parse_from(["changelog", "--title", " "])
            .err()
            .expect("parse error");
        assert_eq!(
            value_error_line(&err).as_deref(),
            Some("Error: title cannot be empty")
        );

        let err = Cli::try_parse_from(["changelog", "-c", "42"])
            .err()
            .expect("parse error");
        assert_eq!(
            value_error_line(&err).as_deref(),
            Some("Error: category index 42 is out of range 1..8")
        );

        let err = Cli::try_parse_from(["changelog", "--bogus"])
            .err()
            .expect("parse error");
        assert_eq!(value_error_line(&err), None);
    }

    #[test]
    fn editor_flags_override_config() {
        let config = ChangelogConfig {
            editor: None,
            open_editor: false,
        };
        let cli = Cli::parse_from(["changelog", "--editor"]);
        assert!(cli.open_editor(&config));
        let cli = Cli::parse_from(["changelog"]);
        assert!(!cli.open_editor(&config));
        let cli = Cli::parse_from(["changelog", "--editor", "--no-editor"]);
        assert!(!cli.open_editor(&ChangelogConfig::default()));
    }

    #[test]
    fn pr_alias() {
        let cli = Cli::parse_from(["changelog", "--pr", "12"]);
        assert_eq!(cli.pull_request.as_deref(), Some("12"));
    }
}
