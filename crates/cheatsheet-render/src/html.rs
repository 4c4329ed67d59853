//! HTML renderer
//!
//! Produces one self-contained HTML document with the stylesheet embedded
//! in a `<style>` block. The output only depends on the catalog.

use cheatsheet_catalog::{
    AgentEntry, Catalog, CommandEntry, Detail, FlagLayout, HookSection, Inline, Phase,
    ScopeSection, SectionId,
};

use crate::style::STYLESHEET;

/// HTML cheatsheet renderer
pub struct HtmlRenderer {
    output: String,
    depth: usize,
}

impl HtmlRenderer {
    /// Create a new renderer
    pub fn new() -> Self {
        Self {
            output: String::new(),
            depth: 0,
        }
    }

    /// Render the full HTML document
    pub fn render(&mut self, catalog: &Catalog) -> String {
        self.output.clear();
        self.depth = 0;

        self.line("<!DOCTYPE html>");
        self.open("<html lang=\"en\">");
        self.open("<head>");
        self.line("<meta charset=\"UTF-8\">");
        self.line(&format!("<title>{}</title>", escape_html(&catalog.title())));
        self.line(&format!("<style>{}</style>", STYLESHEET));
        self.close("</head>");
        self.open("<body>");

        self.render_header(catalog);
        self.render_toc(catalog);

        for id in catalog.sections() {
            match id {
                SectionId::Scope => self.render_scope(&catalog.scope),
                SectionId::Reference => self.render_reference(catalog),
                SectionId::Patterns => self.render_patterns(catalog),
                SectionId::Hooks => self.render_hooks(&catalog.hooks),
                phase_id => {
                    if let Some(phase) = catalog.phase(*phase_id) {
                        self.render_phase(phase);
                    }
                }
            }
        }

        self.open("<div class=\"footer\">");
        for line in catalog.footer {
            self.line(&format!(
                "<p><strong>{}:</strong> {}</p>",
                escape_html(line.label),
                escape_html(line.text)
            ));
        }
        self.close("</div>");

        self.close("</body>");
        self.close("</html>");

        std::mem::take(&mut self.output)
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.output.push_str("    ");
        }
        self.output.push_str(text);
        self.output.push('\n');
    }

    fn open(&mut self, tag: &str) {
        self.line(tag);
        self.depth += 1;
    }

    fn close(&mut self, tag: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.line(tag);
    }

    fn render_header(&mut self, catalog: &Catalog) {
        self.open("<div class=\"header\">");
        self.line(&format!("<h1>{}</h1>", escape_html(catalog.plugin)));
        self.line(&format!(
            "<div class=\"version\">Plugin Version {}</div>",
            escape_html(catalog.version)
        ));
        self.line(&format!(
            "<div class=\"description\">{}</div>",
            escape_html(catalog.description)
        ));
        self.close("</div>");
    }

    fn render_toc(&mut self, catalog: &Catalog) {
        self.open("<div class=\"toc\">");
        self.line("<h2>Table of Contents</h2>");
        self.open("<ul>");
        for id in catalog.sections() {
            self.line(&format!(
                "<li><a href=\"#{}\">{}</a></li>",
                id.anchor(),
                escape_html(id.title())
            ));
        }
        self.close("</ul>");
        self.close("</div>");
    }

    fn section_heading(&mut self, id: SectionId, title: &str) {
        self.line(&format!(
            "<h1 id=\"{}\">{}</h1>",
            id.anchor(),
            escape_html(title)
        ));
    }

    fn render_phase(&mut self, phase: &Phase) {
        let theme = format!("phase-section phase-{}", phase.id.anchor());

        self.section_heading(phase.id, phase.id.title());
        self.line(&format!(
            "<p><strong>When to use:</strong> {}</p>",
            escape_html(phase.when_to_use)
        ));

        self.open(&format!("<div class=\"{}\">", theme));
        self.line("<div class=\"phase-title\">Commands</div>");
        for command in phase.commands {
            self.render_command(command);
        }
        self.close("</div>");

        if !phase.agents.is_empty() {
            self.open(&format!("<div class=\"{}\">", theme));
            self.line(&format!(
                "<div class=\"phase-title\">{}</div>",
                escape_html(&phase.agents_title())
            ));
            for agent in phase.agents {
                self.render_agent(agent);
            }
            self.close("</div>");
        }
    }

    fn render_command(&mut self, command: &CommandEntry) {
        self.open("<div class=\"command-block\">");
        self.line(&format!(
            "<div class=\"command-name\">{}</div>",
            command_span(&command.signature())
        ));
        self.line(&format!(
            "<div class=\"command-description\"><strong>Purpose:</strong> {}</div>",
            escape_html(command.purpose)
        ));
        for detail in command.details {
            match detail {
                Detail::Flags => self.render_flags(command),
                other => self.render_detail(other),
            }
        }
        self.close("</div>");
    }

    fn render_flags(&mut self, command: &CommandEntry) {
        match command.flag_layout {
            FlagLayout::Inline => {
                let flags: Vec<String> = command
                    .flags
                    .iter()
                    .map(|f| format!("{} - {}", command_span(f.name), escape_html(f.effect)))
                    .collect();
                self.line(&format!(
                    "<p><strong>Flags:</strong> {}</p>",
                    flags.join(", ")
                ));
            }
            FlagLayout::List => {
                self.line("<p><strong>Flags:</strong></p>");
                self.open("<ul>");
                for flag in command.flags {
                    self.line(&format!(
                        "<li>{} - {}</li>",
                        command_span(flag.name),
                        escape_html(flag.effect)
                    ));
                }
                self.close("</ul>");
            }
        }
    }

    fn render_detail(&mut self, detail: &Detail) {
        match detail {
            Detail::Bullets { label, items } => {
                self.line(&format!(
                    "<p><strong>{}:</strong></p>",
                    escape_html(label)
                ));
                self.open("<ul>");
                for item in *items {
                    self.line(&format!("<li>{}</li>", inlines(item)));
                }
                self.close("</ul>");
            }
            Detail::Labeled { label, text } => {
                self.line(&format!(
                    "<p><strong>{}:</strong> {}</p>",
                    escape_html(label),
                    inlines(text)
                ));
            }
            Detail::Text(text) => self.line(&format!("<p>{}</p>", inlines(text))),
            Detail::Flags => {}
        }
    }

    fn render_agent(&mut self, agent: &AgentEntry) {
        self.open("<div class=\"agent-block\">");
        self.line(&format!(
            "<div class=\"agent-name\">{}</div>",
            escape_html(agent.name)
        ));
        self.line(&format!(
            "<p><strong>Invoked by:</strong> {}</p>",
            command_span(&agent.invocation())
        ));
        self.line(&format!(
            "<p><strong>Purpose:</strong> {}</p>",
            escape_html(agent.purpose)
        ));
        for detail in agent.details {
            self.render_detail(detail);
        }
        self.close("</div>");
    }

    fn render_scope(&mut self, scope: &ScopeSection) {
        let title = format!("{}: {}", SectionId::Scope.title(), scope.subtitle);
        self.section_heading(SectionId::Scope, &title);
        self.callout("Important:", scope.intro);

        self.line(&format!("<h2>{}</h2>", escape_html(scope.table_title)));
        let rows: Vec<Vec<String>> = scope
            .rows
            .iter()
            .map(|row| {
                vec![
                    format!("<strong>{}</strong>", escape_html(row.scope)),
                    inline(&row.location),
                    escape_html(row.purpose),
                    escape_html(row.when_to_use),
                ]
            })
            .collect();
        self.table(&["Scope", "Location", "Purpose", "When to Use"], &rows);

        self.line(&format!("<h2>{}</h2>", escape_html(scope.hierarchy_title)));
        self.line(&format!(
            "<div class=\"scope-diagram\">{}</div>",
            escape_html(scope.hierarchy)
        ));
        self.callout("Key Concept:", scope.key_concept);
    }

    fn callout(&mut self, title: &str, body: &str) {
        self.open("<div class=\"callout\">");
        self.line(&format!(
            "<div class=\"callout-title\">{}</div>",
            escape_html(title)
        ));
        self.line(&format!("<p>{}</p>", escape_html(body)));
        self.close("</div>");
    }

    fn table(&mut self, headers: &[&str], rows: &[Vec<String>]) {
        self.open("<table>");
        self.open("<thead>");
        self.open("<tr>");
        for header in headers {
            self.line(&format!("<th>{}</th>", escape_html(header)));
        }
        self.close("</tr>");
        self.close("</thead>");
        self.open("<tbody>");
        for row in rows {
            self.open("<tr>");
            for cell in row {
                self.line(&format!("<td>{}</td>", cell));
            }
            self.close("</tr>");
        }
        self.close("</tbody>");
        self.close("</table>");
    }

    fn render_reference(&mut self, catalog: &Catalog) {
        self.section_heading(SectionId::Reference, SectionId::Reference.title());

        self.line("<h2>All Slash Commands</h2>");
        let commands: Vec<Vec<String>> = catalog
            .command_rows()
            .iter()
            .map(|row| {
                let flags = if row.key_flags.is_empty() {
                    "(none)".to_string()
                } else {
                    row.key_flags.join(", ")
                };
                vec![
                    command_span(row.command),
                    escape_html(row.purpose),
                    escape_html(&flags),
                ]
            })
            .collect();
        self.table(&["Command", "Purpose", "Key Flags"], &commands);

        self.line("<h2>All Agents</h2>");
        let agents: Vec<Vec<String>> = catalog
            .agents()
            .map(|agent| {
                vec![
                    escape_html(agent.name),
                    escape_html(agent.invoked_by),
                    escape_html(agent.summary),
                ]
            })
            .collect();
        self.table(&["Agent", "Invoked By", "Purpose"], &agents);

        self.line("<h2>Key Configuration Files</h2>");
        let files: Vec<Vec<String>> = catalog
            .reference
            .config_files
            .iter()
            .map(|row| {
                vec![
                    escape_html(row.label),
                    escape_html(row.description),
                    escape_html(row.detail),
                ]
            })
            .collect();
        self.table(&["File", "Purpose", "Contains"], &files);
    }

    fn render_patterns(&mut self, catalog: &Catalog) {
        self.section_heading(SectionId::Patterns, SectionId::Patterns.title());
        for pattern in catalog.patterns {
            self.line(&format!("<h3>{}</h3>", escape_html(pattern.title)));
            self.pre(pattern.code);
        }
    }

    // <pre> content is written unindented so whitespace survives.
    fn pre(&mut self, code: &str) {
        self.line(&format!("<pre>{}</pre>", escape_html(code)));
    }

    fn render_hooks(&mut self, hooks: &HookSection) {
        self.section_heading(SectionId::Hooks, SectionId::Hooks.title());
        self.line(&format!(
            "<p><strong>Purpose:</strong> {}</p>",
            escape_html(hooks.purpose)
        ));

        self.open("<div class=\"callout\">");
        self.line(&format!(
            "<div class=\"callout-title\">Default Configuration ({}):</div>",
            escape_html(hooks.settings_path)
        ));
        self.pre(&hooks.settings_json());
        self.close("</div>");

        self.line("<p><strong>What Happens:</strong></p>");
        self.open("<ul>");
        for command in hooks.commands {
            self.line(&format!(
                "<li>{} - {}</li>",
                command_span(command.command),
                escape_html(command.effect)
            ));
        }
        self.close("</ul>");

        self.line("<p><strong>Example Outputs:</strong></p>");
        for outcome in hooks.outcomes {
            self.line(&format!("<p>{}:</p>", escape_html(outcome.label)));
            self.pre(outcome.output);
        }
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the catalog to a self-contained HTML document
pub fn render_html(catalog: &Catalog) -> String {
    HtmlRenderer::new().render(catalog)
}

/// Escape text for use in HTML element content and attribute values
pub fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn command_span(text: &str) -> String {
    format!("<span class=\"command\">{}</span>", escape_html(text))
}

fn inline(inline: &Inline) -> String {
    match inline {
        Inline::Text(s) => escape_html(s),
        Inline::Strong(s) => format!("<strong>{}</strong>", escape_html(s)),
        Inline::Code(s) => command_span(s),
    }
}

fn inlines(items: &[Inline]) -> String {
    items.iter().map(inline).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cheatsheet_catalog::catalog;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a < b & c"), "a &lt; b &amp; c");
        assert_eq!(escape_html("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(escape_html("plugin's"), "plugin&#39;s");
        assert_eq!(escape_html("✓ valid"), "✓ valid");
    }

    #[test]
    fn test_inline_formatting() {
        let rich = [
            Inline::Strong("company"),
            Inline::Text(" - Root level"),
            Inline::Code("--global"),
        ];
        assert_eq!(
            inlines(&rich),
            "<strong>company</strong> - Root level<span class=\"command\">--global</span>"
        );
    }

    #[test]
    fn test_document_shell() {
        let html = render_html(catalog());
        assert!(html.starts_with("<!DOCTYPE html>\n"));
        assert!(html.contains("<title>Role Context Manager - Cheatsheet</title>"));
        assert!(html.contains("<style>"));
        assert!(html.contains("size: A4;"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_header_and_version() {
        let html = render_html(catalog());
        assert!(html.contains("<div class=\"version\">Plugin Version 1.3.0</div>"));
    }

    #[test]
    fn test_phase_themes() {
        let html = render_html(catalog());
        for theme in ["setup", "configuration", "daily", "maintenance"] {
            assert!(
                html.contains(&format!("class=\"phase-section phase-{}\"", theme)),
                "missing theme {}",
                theme
            );
        }
    }

    #[test]
    fn test_command_signature_rendered() {
        let html = render_html(catalog());
        assert!(html.contains(
            "<div class=\"command-name\"><span class=\"command\">/set-role [role-name] [--global|--project]</span></div>"
        ));
    }

    #[test]
    fn test_pre_blocks_are_not_indented() {
        let html = render_html(catalog());
        assert!(html.contains("<pre>/init-org-template --global\n/set-role software-engineer"));
    }

    #[test]
    fn test_renderer_reuse_is_stable() {
        let mut renderer = HtmlRenderer::new();
        let first = renderer.render(catalog());
        let second = renderer.render(catalog());
        assert_eq!(first, second);
    }

    #[test]
    fn test_footer_uses_bold_labels() {
        let html = render_html(catalog());
        assert!(html.contains(
            "<p><strong>Generated with:</strong> Claude Code • Role Context Manager Plugin v1.3.0</p>"
        ));
    }
}
