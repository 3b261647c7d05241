//! Implementation of the `cadence coverage` command.
//!
//! Shows how many existing library topics touch each service area and the
//! resulting planning priority.

use crate::context::LibraryContext;
use crate::coverage::{CoverageReport, analyze_coverage};
use crate::error::Result;
use crate::library::get_existing_topics;

/// Execute the `cadence coverage` command.
pub fn cmd_coverage(ctx: &LibraryContext) -> Result<()> {
    let (topic_count, report) = library_coverage(ctx)?;

    println!("Existing topics: {}", topic_count);
    println!("Service areas:   {}", report.len());
    println!();
    println!("{:<14} {:>6}  {}", "AREA", "COUNT", "PRIORITY");
    for entry in report.iter() {
        println!(
            "{:<14} {:>6}  {}",
            entry.area, entry.record.count, entry.record.priority
        );
    }

    Ok(())
}

/// Scan the library and analyse its coverage.
pub(crate) fn library_coverage(ctx: &LibraryContext) -> Result<(usize, CoverageReport)> {
    let config = ctx.load_config()?;
    let existing = get_existing_topics(&ctx.root, &config.meta_glob)?;
    let report = analyze_coverage(&config.service_area_catalog(), &existing);
    Ok((existing.len(), report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coverage::Priority;
    use crate::test_support::{create_test_library, write_meta};

    #[test]
    fn test_coverage_of_library() {
        let (_temp, ctx) = create_test_library();
        let titles = [
            "Panic Attacks 101",
            "Social Anxiety",
            "Worry Less",
            "Panic at Work",
        ];
        for (i, title) in titles.iter().enumerate() {
            let path = format!("blogs/published/post{}_meta.json", i);
            write_meta(&ctx, &path, title, &[]);
        }

        let (count, report) = library_coverage(&ctx).unwrap();

        assert_eq!(count, 4);
        let anxiety = report.get("anxiety").unwrap();
        assert_eq!(anxiety.count, 4);
        assert_eq!(anxiety.priority, Priority::Medium);
        assert_eq!(report.get("trauma").unwrap().priority, Priority::High);

        cmd_coverage(&ctx).unwrap();
    }

    #[test]
    fn test_coverage_uses_configured_areas() {
        let (_temp, ctx) = create_test_library();
        std::fs::write(
            ctx.config_path(),
            "service_areas:\n  - name: grief\n    keywords: [grief]\n    topics: [Grief Basics]\n",
        )
        .unwrap();
        write_meta(&ctx, "a_meta.json", "Grief and the Holidays", &["#grief"]);

        let (count, report) = library_coverage(&ctx).unwrap();
        assert_eq!(count, 2);
        assert_eq!(report.len(), 1);
        assert_eq!(report.get("grief").unwrap().count, 2);
    }

    #[test]
    fn test_empty_library_is_all_high() {
        let (_temp, ctx) = create_test_library();
        let (count, report) = library_coverage(&ctx).unwrap();

        assert_eq!(count, 0);
        assert_eq!(report.len(), 7);
        assert!(report.iter().all(|e| e.record.priority == Priority::High));
    }
}
