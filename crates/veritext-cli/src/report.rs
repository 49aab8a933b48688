//! Standalone HTML report for a comparison run.
//!
//! Renders the summary stat cards, the implemented-texts table (with
//! per-required found/missing detail and the implementation rate), and the
//! unimplemented-texts table.

use chrono::Local;
use veritext_core::{Comparison, MatchResult, MatchStatus};

const STYLE: &str = r#"
body { font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; margin: 0; padding: 20px; background-color: #f5f5f5; }
.container { max-width: 1400px; margin: 0 auto; background: white; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); overflow: hidden; }
.header { background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; padding: 30px; text-align: center; }
.header h1 { margin: 0; font-size: 2.5em; font-weight: 300; }
.header p { margin: 10px 0 0 0; opacity: 0.9; }
.stats { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 20px; padding: 30px; background: #f8f9fa; }
.stat-card { background: white; padding: 20px; border-radius: 8px; text-align: center; box-shadow: 0 2px 5px rgba(0,0,0,0.1); }
.stat-number { font-size: 2em; font-weight: bold; color: #667eea; }
.stat-label { color: #666; margin-top: 5px; }
.content { padding: 30px; }
.section { margin-bottom: 40px; }
.section h2 { color: #333; border-bottom: 2px solid #667eea; padding-bottom: 10px; margin-bottom: 20px; }
table { width: 100%; border-collapse: collapse; margin-top: 20px; }
th, td { padding: 12px 15px; border-bottom: 1px solid #eee; text-align: left; vertical-align: top; }
th { background: #f8f9fa; }
.text-detail { background: #f8f9fa; padding: 8px; border-radius: 4px; margin: 2px 0; font-size: 0.9em; }
.found-text { color: #28a745; }
.missing-text { color: #dc3545; }
.spec-id { background: #667eea; color: white; padding: 2px 6px; border-radius: 3px; font-size: 0.8em; font-weight: bold; }
.status-complete { color: #28a745; font-weight: bold; }
.status-partial { color: #ffc107; font-weight: bold; }
.status-missing { color: #dc3545; font-weight: bold; }
"#;

/// Render a comparison as a self-contained HTML document.
pub fn render(comparison: &Comparison) -> String {
    let summary = comparison.summary();
    let generated = Local::now().format("%Y-%m-%d %H:%M:%S");

    let mut html = String::with_capacity(16 * 1024);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    html.push_str("<title>Design Text Check Report</title>\n");
    html.push_str(&format!("<style>{STYLE}</style>\n</head>\n<body>\n"));
    html.push_str("<div class=\"container\">\n");

    html.push_str(&format!(
        "<div class=\"header\">\n<h1>Design Text Check Report</h1>\n<p>Generated {generated}</p>\n</div>\n"
    ));

    html.push_str("<div class=\"stats\">\n");
    stat_card(&mut html, summary.total, "Specification records");
    stat_card(&mut html, summary.complete, "Fully implemented");
    stat_card(&mut html, summary.partial, "Partially implemented");
    stat_card(&mut html, summary.missing, "Not implemented");
    html.push_str("</div>\n");

    html.push_str("<div class=\"content\">\n");
    matched_section(&mut html, &comparison.matched);
    issues_section(&mut html, &comparison.issues);
    html.push_str("</div>\n</div>\n</body>\n</html>\n");
    html
}

fn stat_card(html: &mut String, number: usize, label: &str) {
    html.push_str(&format!(
        "<div class=\"stat-card\"><div class=\"stat-number\">{number}</div><div class=\"stat-label\">{label}</div></div>\n"
    ));
}

fn matched_section(html: &mut String, matched: &[MatchResult]) {
    html.push_str("<div class=\"section\">\n<h2>Implemented texts</h2>\n<table>\n");
    html.push_str(
        "<thead><tr><th>ID</th><th>Record</th><th>Required</th><th>Found</th><th>Rate</th><th>Status</th></tr></thead>\n<tbody>\n",
    );
    for result in matched {
        html.push_str("<tr>");
        html.push_str(&format!(
            "<td><span class=\"spec-id\">{}</span></td>",
            escape(&result.spec_id)
        ));
        html.push_str(&format!("<td><strong>{}</strong></td>", escape(&result.spec_name)));

        html.push_str("<td>");
        for text in &result.required_texts {
            html.push_str(&format!("<div class=\"text-detail\">{}</div>", escape(text)));
        }
        html.push_str("</td>");

        html.push_str("<td>");
        for found in &result.found {
            html.push_str(&format!(
                "<div class=\"text-detail found-text\">&#10003; {}</div>",
                escape(&found.found)
            ));
        }
        for missing in &result.missing {
            html.push_str(&format!(
                "<div class=\"text-detail missing-text\">&#10007; {}</div>",
                escape(missing)
            ));
        }
        html.push_str("</td>");

        html.push_str(&format!(
            "<td>{:.1}%</td>",
            result.implementation_rate * 100.0
        ));
        let status = status_label(result.status);
        html.push_str(&format!(
            "<td><span class=\"status-{}\">{}</span></td>",
            status_class(result.status),
            status
        ));
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>\n</div>\n");
}

fn issues_section(html: &mut String, issues: &[MatchResult]) {
    html.push_str("<div class=\"section\">\n<h2>Unimplemented texts</h2>\n<table>\n");
    html.push_str(
        "<thead><tr><th>ID</th><th>Record</th><th>Required</th></tr></thead>\n<tbody>\n",
    );
    for result in issues {
        html.push_str("<tr>");
        html.push_str(&format!(
            "<td><span class=\"spec-id\">{}</span></td>",
            escape(&result.spec_id)
        ));
        html.push_str(&format!("<td><strong>{}</strong></td>", escape(&result.spec_name)));
        html.push_str("<td>");
        for text in &result.required_texts {
            html.push_str(&format!(
                "<div class=\"text-detail missing-text\">&#10007; {}</div>",
                escape(text)
            ));
        }
        html.push_str("</td>");
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>\n</div>\n");
}

fn status_label(status: MatchStatus) -> &'static str {
    match status {
        MatchStatus::Complete => "complete",
        MatchStatus::Partial => "partial",
        MatchStatus::Missing => "missing",
    }
}

fn status_class(status: MatchStatus) -> &'static str {
    status_label(status)
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
