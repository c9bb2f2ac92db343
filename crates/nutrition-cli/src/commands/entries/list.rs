use nutrition_core::EntryFilter;

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::helpers::{
    parse_date, parse_last_days, parse_meal_type, parse_optional_date, parse_output_format,
};
use crate::output::print_entry_list;

fn build_filter(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<EntryFilter> {
    let mut filter = EntryFilter::new();
    if let Some(ref date) = args.date {
        filter = filter.on(parse_date(date)?);
    }
    if let Some(ref last) = args.last {
        let today = ctx.today()?;
        filter = filter.since(parse_last_days(last, today)?).until(today);
    }
    if let Some(since) = parse_optional_date(args.since.as_deref())? {
        filter = filter.since(since);
    }
    if let Some(until) = parse_optional_date(args.until.as_deref())? {
        filter = filter.until(until);
    }
    if let Some(ref meal) = args.meal {
        filter = filter.meal_type(parse_meal_type(meal)?);
    }
    if let Some(ref query) = args.search {
        filter = filter.search(query.clone());
    }
    if let Some(limit) = args.limit {
        filter = filter.limit(limit);
    }
    Ok(filter)
}

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let format = parse_output_format(args.format.as_deref())?;
    let filter = build_filter(ctx, args)?;
    let session = ctx.open_session()?;
    let entries = session.ledger().filter(&filter);

    let ui_ctx = ctx.ui_context(args.json, args.format.as_deref());
    print_entry_list(&ui_ctx, &entries, format, ctx.quiet())
}
