use crate::context::ExecutionContext;
use crate::presentation::presenters;
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    // Compile first so a broken configured pattern is reported here too.
    ctx.compile_checks()?;

    let view_model = presenters::present_check_list(ctx.config_path(), &ctx.check_specs());
    ctx.render(view_model)
}
