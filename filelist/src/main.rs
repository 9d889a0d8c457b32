use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result as AnyResult;
use clap::CommandFactory;
use clap::error::ErrorKind;
use tap::Tap;
use tracing::debug;
use tracing::info;

use filelist::FileList;
use filelist::SuffixFilter;
use ino_result::ResultExt;

/// Exit status for bad invocations, distinct from runtime failures.
const USAGE_EXIT_CODE: i32 = 2;

/// Argument count, program name excluded, with and without `-n`.
const ARGC_REQUIRED: usize = 6;
const ARGC_WITH_SAMPLE: usize = 8;

/// Collect files under a directory by the suffix of their name,
/// optionally pick a random sample of them, and write their paths
/// relative to the directory into a file list.
#[derive(clap::Parser, Debug)]
#[command(version)]
struct CliOpts {
    /// File root directory.
    #[arg(long, short = 'd', value_name = "ROOTDIR")]
    rootdir: PathBuf,

    /// File name filter, e.g. "*.png". The first character is
    /// dropped and the rest is matched as a plain suffix.
    #[arg(long, short = 'f', value_name = "FILTER")]
    filter: SuffixFilter,

    /// Output file name.
    #[arg(long, short = 'o', visible_alias = "output", value_name = "FILELIST")]
    filelist: PathBuf,

    /// Number of files to randomly sample, 0 takes all.
    #[arg(long = "sample_num", short = 'n', value_name = "SAMPLE_NUM")]
    #[arg(default_value_t = 0, allow_hyphen_values = true)]
    #[arg(value_parser = parse_sample_num)]
    sample_num: usize,
}

#[derive(thiserror::Error, Debug)]
enum UsageError {
    #[error("Expected 6 or 8 arguments, got {0}")]
    ArgCount(usize),

    #[error(transparent)]
    Clap(#[from] clap::Error),
}

fn parse_sample_num(s: &str) -> Result<usize, String> {
    let num: i64 = s.parse().map_err(|e| format!("{e}"))?;
    usize::try_from(num).map_err(|_| format!("must be >= 0, got {num}"))
}

impl CliOpts {
    /// Parse `args`, the first item being the program name.
    fn try_parse_args<I, T>(args: I) -> Result<Self, UsageError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

        let argc = args.len().saturating_sub(1);
        if argc != ARGC_REQUIRED && argc != ARGC_WITH_SAMPLE {
            return Err(UsageError::ArgCount(argc));
        }

        <Self as clap::Parser>::try_parse_from(args).map_err(UsageError::from)
    }

    /// Parse the process arguments, printing usage and exiting
    /// if they are no good.
    fn parse() -> Self {
        match Self::try_parse_args(std::env::args_os()) {
            Ok(it) => it,
            Err(UsageError::Clap(err))
                if matches!(
                    err.kind(),
                    ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
                ) =>
            {
                err.exit()
            }
            Err(err) => {
                if !matches!(err, UsageError::ArgCount(_)) {
                    eprintln!("{err}");
                }
                println!("{}", Self::command().render_help());
                std::process::exit(USAGE_EXIT_CODE)
            }
        }
    }
}

struct App;

impl App {
    #[tracing::instrument(name = "app_run_with", skip_all)]
    fn run_with(cliopts: CliOpts) -> AnyResult<()> {
        let CliOpts {
            rootdir,
            filter,
            filelist,
            sample_num,
        } = cliopts;

        debug!(?rootdir, suffix = filter.suffix(), "Collect files");

        let filters = std::slice::from_ref(&filter);
        let mut list = FileList::lookup(&rootdir, filters).with_context(|| {
            format!(r#"Failed to collect files under "{}""#, rootdir.display())
        })?;

        debug!(sample_num, "Sample files");

        list.random_sample(sample_num, &mut rand::rng())
            .context("Failed to sample files")?;

        debug!(?filelist, "Write file list");

        list.store(&filelist).with_context(|| {
            format!(r#"Failed to write file list "{}""#, filelist.display())
        })?;

        info!(count = list.len(), "Wrote {}", filelist.display());

        Ok(())
    }
}

fn main() {
    ino_tracing::init_tracing_subscriber();

    let cliopts = CliOpts::parse().tap(|it| debug!(?it));

    App::run_with(cliopts).print_error_exit_process();
}
