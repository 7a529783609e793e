use crate::args::ScanArgs;
use crate::context::ExecutionContext;
use crate::presentation::presenters;
use anyhow::Result;
use logsig_scanner::{ScanOptions, ScanSummary, load_all};
use tracing::info;

pub fn handle(ctx: &ExecutionContext, args: ScanArgs) -> Result<()> {
    let mut checks = ctx.compile_checks()?;

    let files = ctx.locator().discover()?;
    info!(
        dir = %ctx.log_dir().display(),
        files = files.len(),
        order = %ctx.order(),
        "discovered log files"
    );

    let options = ScanOptions {
        decompress: ctx.config.decompress && !args.no_decompress,
    };
    let run = load_all(&files, &mut checks, options);

    let escalate_above = args.escalate_above.unwrap_or(ctx.config.escalate_above);
    let summary = ScanSummary::from_checks(&checks, escalate_above);

    let view_model = presenters::present_scan_report(ctx.log_dir(), &run, &summary);
    ctx.render(view_model)
}
