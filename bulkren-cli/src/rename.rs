use anyhow::Result;
use bulkren_core::{
    check_inputs_exist, rename_operation, write_preview, Config, OutputFormatter, Preview,
    RenameParams, RenameResult,
};
use std::io;

use crate::cli::{Cli, OutputFormat};

pub fn handle_rename(cli: Cli, config: &Config) -> Result<()> {
    check_inputs_exist(&cli.files)?;

    let on_failure = cli.on_error.map_or(config.defaults.on_error, Into::into);
    let preview: Preview = cli
        .preview
        .map_or(config.defaults.preview_format, Into::into);
    let json_output = cli.output == Some(OutputFormat::Json);
    // Without --no-color the table preview checks for a terminal itself
    let use_color = cli.no_color.then_some(false);

    let params = RenameParams {
        pattern: cli.pattern,
        replacement: cli.replacement,
        dry_run: cli.dry_run,
        files: cli.files,
    };

    // JSON results and non-plain previews replace the dry-run lines
    let (plan, report) = if params.dry_run && (json_output || preview != Preview::Plain) {
        let (plan, report) = rename_operation(&params, on_failure, &mut io::sink())?;
        if !json_output {
            write_preview(&plan, preview, use_color)?;
        }
        (plan, report)
    } else {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        rename_operation(&params, on_failure, &mut out)?
    };

    let outcome = report.ensure_success();

    if let Some(format) = cli.output {
        let result = RenameResult::new(plan, report);
        println!("{}", result.format(format.into()).trim_end());
    } else {
        for failure in &report.failures {
            eprintln!(
                "Failed: {} --> {}: {}",
                failure.from.display(),
                failure.to.display(),
                failure.message
            );
        }
    }

    outcome?;
    Ok(())
}
