use crate::context::ExecutionContext;
use crate::presentation::presenters;
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let files = ctx.locator().discover()?;
    let view_model = presenters::present_file_list(ctx.log_dir(), ctx.order(), &files);
    ctx.render(view_model)
}
