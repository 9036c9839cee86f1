// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use std::path::{Path, PathBuf};

use console::style;
use tracing::debug;

use crate::cli::{Cli, CommitArgs, Commands};
use crate::config::{AppPaths, Config, ConfigStore};
use crate::error::{Error, Result};
use crate::services::{
    catalog::EmojiCatalog,
    git::{GitService, Vcs},
    history::HistoryStore,
    orchestrator::{
        CommitOptions, CommitOrchestrator, NextAction, PushOutcome, PushReport, RemotePull,
        RemotesDiff,
    },
    prompt::{Answer, Prompter, TerminalPrompter, TextRequest},
    setup,
    wizard::{WizardEngine, WizardInput},
};

/// Result of one pass through the commit loop.
enum Flow {
    Committed,
    /// Nothing to commit in the working copy
    Idle,
    /// Dry run printed its message
    Stop,
}

pub struct App {
    cli: Cli,
    paths: AppPaths,
    store: ConfigStore,
}

impl App {
    pub fn new(cli: Cli) -> Result<Self> {
        let paths = AppPaths::discover()?;
        let store = ConfigStore::new(paths.config_file());
        debug!(root = %paths.root().display(), "app directory");
        Ok(Self { cli, paths, store })
    }

    pub async fn run(&mut self) -> Result<()> {
        match self.cli.command.take() {
            None => self.commit(CommitArgs::default()).await,
            Some(Commands::Commit(args)) => self.commit(args).await,
            Some(Commands::Config) => self.configure(),
            Some(Commands::Info) => {
                self.info();
                Ok(())
            }
            Some(Commands::Start) => self.start().await,
            Some(Commands::Completions { shell }) => {
                let mut cmd = <Cli as clap::CommandFactory>::command();
                clap_complete::generate(shell, &mut cmd, "commoji", &mut std::io::stdout());
                Ok(())
            }
        }
    }

    // ─── Commit ───

    async fn commit(&self, args: CommitArgs) -> Result<()> {
        let config = self.store.load_effective();
        debug!(?config, "config loaded");
        let mut history =
            HistoryStore::open(self.paths.history_file(), config.enable_history);
        let mut prompter = TerminalPrompter::new();

        if !args.remote.is_empty() && !args.push {
            self.print_warning("Ignoring --remote because --push is not set");
        }

        loop {
            match self
                .commit_once(&args, &config, &mut history, &mut prompter)
                .await
            {
                Ok(Flow::Stop) => return Ok(()),
                Ok(Flow::Committed | Flow::Idle) => {}
                Err(Error::NoFilesSelected) => {
                    self.print_info("No file selected, nothing to commit.");
                }
                Err(Error::NothingStaged) if args.keep_alive => {
                    eprintln!("{:?}", miette::Report::new(Error::NothingStaged));
                }
                Err(e) => return Err(e),
            }

            if !args.keep_alive {
                break;
            }
            if self.what_now(&args, &mut prompter).await? == NextAction::Quit {
                break;
            }
            eprintln!();
        }

        eprintln!("\nDone 🥳");
        Ok(())
    }

    async fn commit_once(
        &self,
        args: &CommitArgs,
        config: &Config,
        history: &mut HistoryStore,
        prompter: &mut TerminalPrompter,
    ) -> Result<Flow> {
        // A dry run only formats a message, so it may run outside a repository.
        let git = match GitService::discover(&args.repo) {
            Ok(git) => Some(git),
            Err(Error::NotAGitRepo { .. }) if args.dry => None,
            Err(e) => return Err(e),
        };

        let status = match &git {
            Some(git) => git.status().await?,
            None => Default::default(),
        };
        let repo: Option<PathBuf> = git.as_ref().map(|g| g.work_dir().to_path_buf());

        if git.is_some() && !args.dry {
            if status.is_clean() {
                self.print_info("Nothing to commit.");
                return Ok(Flow::Idle);
            }
            CommitOrchestrator::<GitService>::preflight(&status, &args.files, args.add)?;
            if !status.staged.is_empty() {
                self.print_staged(&status.staged);
            }
        }

        let candidates = if args.add && args.files.is_empty() {
            status.stageable()
        } else {
            Vec::new()
        };
        if args.add && !status.staged.is_empty() && !candidates.is_empty() {
            self.print_info("Stage is not empty: selected files are added to it");
        }

        let catalog = if args.simple {
            EmojiCatalog::conventional()
        } else {
            EmojiCatalog::resolve(config.emoji_set, Some(&self.paths.custom_emojis_file()))
        };
        if catalog.is_empty() {
            return Err(Error::Config("No emojis available to choose from".into()));
        }
        debug!(count = catalog.len(), "emoji catalog");
        let input = WizardInput {
            files: candidates,
            emojis: history.ranked_emojis(catalog.entries(), repo.as_deref()),
            simple: args.simple,
            staged: !status.staged.is_empty(),
            repo: repo.as_deref(),
        };

        eprintln!("\n{}", style("Commit details:").green().underlined());
        eprintln!(
            "{}\n",
            style("Press Ctrl+C to go back to the previous step").dim()
        );
        let draft = WizardEngine::new(config, history).run(prompter, &input)?;

        let Some(git) = git.filter(|_| !args.dry) else {
            println!("{}", draft.message(config.capitalize_title));
            return Ok(Flow::Stop);
        };

        // FILES are relative to where commoji was started; git runs from the work tree.
        let cwd = std::env::current_dir()?;
        let options = CommitOptions {
            explicit_files: git.relative_paths(&cwd, &args.files),
            sign: args.sign,
            push: args.push,
            remotes: args.remote.clone(),
            capitalize_title: config.capitalize_title,
            repo: repo.unwrap_or_else(|| git.work_dir().to_path_buf()),
        };
        let outcome = CommitOrchestrator::new(&git)
            .finish(&draft, &options, history, prompter)
            .await?;

        eprintln!(
            "{} Committed {}: {}",
            style("✓").green().bold(),
            style(&outcome.id).yellow(),
            outcome.message.lines().next().unwrap_or_default(),
        );

        if let Some(report) = outcome.push {
            self.print_push_report(&report);
            report.into_result()?;
        }
        Ok(Flow::Committed)
    }

    /// Keep-alive menu. Pushing or syncing shows the menu again afterwards.
    async fn what_now(
        &self,
        args: &CommitArgs,
        prompter: &mut TerminalPrompter,
    ) -> Result<NextAction> {
        let git = GitService::discover(&args.repo).ok();

        loop {
            let diff = match &git {
                Some(git) => CommitOrchestrator::new(git)
                    .remotes_diff()
                    .await
                    .unwrap_or_default(),
                None => RemotesDiff::default(),
            };

            eprintln!("\n🔄 {}\n", style("Ready to commit again").underlined());
            self.print_remotes_diff(&diff);

            let actions = diff.choices();
            let labels: Vec<String> = actions.iter().map(|a| a.label().to_string()).collect();
            let action = match prompter.select("What do you want to do now?", &labels, 0)? {
                Answer::Value(i) => actions.get(i).copied().unwrap_or(NextAction::Quit),
                Answer::Interrupted => NextAction::Quit,
            };

            let (NextAction::PushAndCommitAgain | NextAction::SyncAndCommitAgain, Some(git)) =
                (action, &git)
            else {
                return Ok(action);
            };

            eprintln!();
            let orchestrator = CommitOrchestrator::new(git);
            if action == NextAction::SyncAndCommitAgain {
                let pulls = orchestrator.pull(&args.remote, prompter).await?;
                self.print_pull_results(&pulls);
            }
            let report = orchestrator.push(&args.remote, prompter).await?;
            self.print_push_report(&report);
        }
    }

    // ─── Config / Info / Start ───

    fn configure(&self) -> Result<()> {
        let current = self.store.load();
        let mut prompter = TerminalPrompter::new();
        eprintln!(
            "{}",
            style(format!(
                "Config will be saved in {}",
                self.store.path().display()
            ))
            .dim()
        );

        let updated = setup::edit_config(&mut prompter, &current)?;
        self.store.save(&updated)?;

        let custom = self.paths.custom_emojis_file();
        if EmojiCatalog::write_template(&custom)? {
            self.print_info(&format!(
                "Add your own emojis in {}",
                custom.display()
            ));
        }

        eprintln!("{} Config updated", style("✓").green().bold());
        Ok(())
    }

    fn info(&self) {
        let config = self.store.load();

        println!("{}", style("commoji info:").green().bold().underlined());
        println!("  version      : {}", env!("CARGO_PKG_VERSION"));
        println!("  app path     : {}", self.paths.root().display());
        println!("  config       : {}", self.store.path().display());
        let history = self.paths.history_file();
        if history.exists() {
            println!("  history      : {}", history.display());
        }
        println!(
            "  custom emojis: {}",
            self.paths.custom_emojis_file().display()
        );

        println!();
        println!("{}", style("Current configuration:").bold().underlined());
        let lines = config.describe();
        let width = lines.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
        for (key, value) in lines {
            println!("  {key:width$}: {value}");
        }
    }

    async fn start(&self) -> Result<()> {
        let config = self.store.load();
        let (mut args, ask_repo) = CommitArgs::from_config(&config);

        if ask_repo {
            let mut prompter = TerminalPrompter::new();
            let answer = prompter.text(TextRequest {
                prompt: "Path to the git repository",
                mandatory: true,
                suggestions: &[],
                initial: Some("."),
            })?;
            match answer {
                Answer::Value(repo) => args.repo = PathBuf::from(repo),
                Answer::Interrupted => return Err(Error::UserAbort),
            }
        }

        self.print_status(&format!("Running: {}", args.command_line()));
        eprintln!();
        self.commit(args).await
    }

    // ─── Output Helpers ───

    fn print_staged(&self, staged: &[String]) {
        let plural = if staged.len() == 1 { "" } else { "s" };
        eprintln!(
            "{}",
            style(format!(
                "Currently {} staged file{plural} for commit:",
                staged.len()
            ))
            .green()
        );
        for file in staged {
            eprintln!("  {}", style(format!("- {}", display_path(file))).dim());
        }
    }

    fn print_remotes_diff(&self, diff: &RemotesDiff) {
        let lines = diff.lines();
        let Some((header, rest)) = lines.split_first() else {
            return;
        };
        eprintln!("{}", style(header).green().underlined());
        for line in rest {
            if line.starts_with("ahead") {
                eprintln!("{}", style(line).magenta());
            } else {
                eprintln!("{}", style(line).yellow());
            }
        }
        eprintln!();
    }

    fn print_pull_results(&self, pulls: &[RemotePull]) {
        for pull in pulls {
            match &pull.error {
                None => eprintln!(
                    "{} Pulled from {}",
                    style("✓").green().bold(),
                    pull.remote
                ),
                Some(reason) => eprintln!(
                    "{} could not pull from {}: {}",
                    style("error:").red().bold(),
                    pull.remote,
                    reason
                ),
            }
        }
    }

    fn print_push_report(&self, report: &PushReport) {
        for result in &report.results {
            match &result.outcome {
                PushOutcome::Pushed => eprintln!(
                    "{} Pushed to {}",
                    style("✓").green().bold(),
                    result.remote
                ),
                PushOutcome::PushedWithUpstream => eprintln!(
                    "{} Pushed to {} (upstream branch created)",
                    style("✓").green().bold(),
                    result.remote
                ),
                PushOutcome::Skipped => {
                    self.print_info(&format!("Skipped remote {}", result.remote));
                }
                PushOutcome::Failed(reason) => eprintln!(
                    "{} could not push to {}: {}",
                    style("error:").red().bold(),
                    result.remote,
                    reason
                ),
            }
        }
    }

    fn print_status(&self, msg: &str) {
        eprintln!("{} {}", style("→").cyan(), msg);
    }

    fn print_info(&self, msg: &str) {
        eprintln!("{} {}", style("info:").cyan(), msg);
    }

    fn print_warning(&self, msg: &str) {
        eprintln!("{} {}", style("warning:").yellow().bold(), msg);
    }
}

fn display_path(path: &str) -> String {
    Path::new(path).display().to_string()
}
