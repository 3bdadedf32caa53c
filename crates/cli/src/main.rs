use std::io::{stderr, stdin};
use std::process::ExitCode;

use clap::Parser;
use instance_picker_core::boundary::{ItemSource, SelectionSink};
use instance_picker_core::catalog::Catalog;
use instance_picker_core::config;
use instance_picker_core::error::Result;
use instance_picker_core::file_handling::YamlItemFile;
use instance_picker_core::selector::{SelectionResult, Session};
use log::{debug, info};

use instance_picker_cli::cli_args::Args;
use instance_picker_cli::output::KeyPrinter;
use instance_picker_cli::selector::{self, colors, SelectorOptions};

/// Load the items and build the read-only catalog
fn initialize_catalog(args: &Args) -> Result<Catalog> {
    let items_path = config::get_items_path(&args.items_path);
    debug!("Items path: `{}`", items_path);

    let source = YamlItemFile::new(items_path);
    Catalog::from_fetched(source.fetch()?)
}

/// Ask before going anywhere near a scary environment
fn confirm_scary(args: &Args) -> Result<bool> {
    if !args.scary {
        return Ok(true);
    }

    let question = format!("`{}` looks scary, do you want to continue?", args.title);
    selector::confirm(&mut stdin().lock(), &mut stderr(), &question)
}

fn execute() -> Result<()> {
    let args = Args::parse();

    let options = SelectorOptions {
        title: args.title.clone(),
        preview_title: args.preview_title.clone(),
        show_search_hint: !args.no_search_hint,
        highlight_color: colors::highlight_color(&args.highlight_color, args.scary)?,
    };

    let catalog = initialize_catalog(&args)?;
    let mut sink = KeyPrinter::stdout();

    if !confirm_scary(&args)? {
        info!("Scary environment declined");
        return sink.deliver(&SelectionResult::Cancelled);
    }

    let mut session = Session::new(catalog, args.placeholder.clone());

    let result = if args.no_interactive {
        session.commit_first();
        session.into_result().unwrap_or(SelectionResult::Cancelled)
    } else {
        selector::prompt_for_selection(&mut session, &options)?
    };

    sink.deliver(&result)
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
