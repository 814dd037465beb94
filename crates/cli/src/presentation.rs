// crates/cli/src/presentation.rs
use crate::error::Result;
use crate::options::OutputFormat;
use detect_indent_engine::report::{FileReport, RunResult, Summary};
use detect_indent_engine::verdict::Verdict;

pub fn print_results(result: &RunResult, format: OutputFormat) -> Result<()> {
    // Binary files carry no verdict worth printing.
    let reports: Vec<&FileReport> = result.reports.iter().filter(|r| !r.binary).collect();

    match format {
        OutputFormat::Text => print_text(&reports, result.summary.as_ref()),
        OutputFormat::Json => print_json(&reports, result.summary.as_ref())?,
        OutputFormat::Jsonl => print_jsonl(&reports, result.summary.as_ref())?,
    }
    Ok(())
}

fn print_text(reports: &[&FileReport], summary: Option<&Summary>) {
    if let Some(summary) = summary {
        println!("{}", render_verdict(&summary.verdict, summary.fallback));
        return;
    }
    for r in reports {
        println!(
            "{}: {}",
            r.path.display(),
            render_verdict(&r.verdict, r.fallback)
        );
    }
}

fn render_verdict(verdict: &Verdict, fallback: bool) -> String {
    if fallback {
        format!("{verdict} (default)")
    } else {
        verdict.to_string()
    }
}

fn print_json(reports: &[&FileReport], summary: Option<&Summary>) -> Result<()> {
    if let Some(summary) = summary {
        println!("{}", serde_json::to_string_pretty(summary)?);
    } else {
        println!("{}", serde_json::to_string_pretty(reports)?);
    }
    Ok(())
}

fn print_jsonl(reports: &[&FileReport], summary: Option<&Summary>) -> Result<()> {
    for r in reports {
        let mut v = serde_json::to_value(r)?;
        if let Some(obj) = v.as_object_mut() {
            obj.insert("type".to_string(), "file".into());
        }
        println!("{}", serde_json::to_string(&v)?);
    }

    if let Some(summary) = summary {
        let mut v = serde_json::to_value(summary)?;
        if let Some(obj) = v.as_object_mut() {
            obj.insert("type".to_string(), "summary".into());
            obj.insert("version".to_string(), crate::VERSION.into());
        }
        println!("{}", serde_json::to_string(&v)?);
    }
    Ok(())
}
