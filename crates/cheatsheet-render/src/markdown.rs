//! Markdown renderer
//!
//! Mirrors the HTML section structure with headings, pipe tables and
//! fenced code blocks.
//!
//! # Example
//!
//! ```
//! use cheatsheet_catalog::catalog;
//! use cheatsheet_render::render_markdown;
//!
//! let md = render_markdown(catalog());
//! assert!(md.contains("\n## Quick Reference\n"));
//! ```

use cheatsheet_catalog::{
    AgentEntry, Catalog, CommandEntry, Detail, FlagLayout, HookSection, Inline, Phase,
    ScopeSection, SectionId,
};

const RULE: &str = "---";

/// Markdown cheatsheet renderer
///
/// Output is assembled as a list of blocks joined by blank lines.
pub struct MarkdownRenderer {
    blocks: Vec<String>,
}

impl MarkdownRenderer {
    /// Create a new renderer
    pub fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    /// Render the full Markdown document
    pub fn render(&mut self, catalog: &Catalog) -> String {
        self.blocks.clear();

        self.push(format!("# {}", catalog.title()));
        self.push(format!(
            "**Plugin Version:** {}\n**Description:** {}",
            catalog.version, catalog.description
        ));

        self.push(RULE);
        self.push("## Table of Contents");
        let toc: Vec<String> = catalog
            .sections()
            .iter()
            .map(|id| format!("- [{}](#{})", id.title(), slugify(id.title())))
            .collect();
        self.push(toc.join("\n"));

        for id in catalog.sections() {
            self.push(RULE);
            self.push(format!("## {}", id.title()));
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

        self.push(RULE);
        for line in catalog.footer {
            self.push(format!("**{}:** {}", line.label, line.text));
        }

        let mut output = self.blocks.join("\n\n");
        output.push('\n');
        self.blocks.clear();
        output
    }

    fn push(&mut self, block: impl Into<String>) {
        self.blocks.push(block.into());
    }

    fn render_phase(&mut self, phase: &Phase) {
        self.push(format!("**When to use:** {}", phase.when_to_use));
        self.push("### Commands");

        for (i, command) in phase.commands.iter().enumerate() {
            if i > 0 {
                self.push(RULE);
            }
            self.render_command(command);
        }

        if phase.agents.is_empty() {
            return;
        }

        self.push(RULE);
        self.push(format!("### {}", phase.agents_title()));
        let named = phase.agents.len() > 1;
        for (i, agent) in phase.agents.iter().enumerate() {
            if i > 0 {
                self.push(RULE);
            }
            if named {
                self.push(format!("#### {}", agent.name));
            }
            self.render_agent(agent);
        }
    }

    fn render_command(&mut self, command: &CommandEntry) {
        self.push(format!("#### `{}`", command.signature()));
        self.push(format!("**Purpose:** {}", command.purpose));
        for detail in command.details {
            match detail {
                Detail::Flags => self.render_flags(command),
                other => self.render_detail(other),
            }
        }
    }

    fn render_flags(&mut self, command: &CommandEntry) {
        match command.flag_layout {
            FlagLayout::Inline => {
                let flags: Vec<String> = command
                    .flags
                    .iter()
                    .map(|f| format!("`{}` - {}", f.name, f.effect))
                    .collect();
                self.push(format!("**Flags:** {}", flags.join(", ")));
            }
            FlagLayout::List => {
                let mut block = String::from("**Flags:**");
                for flag in command.flags {
                    block.push_str(&format!("\n- `{}` - {}", flag.name, flag.effect));
                }
                self.push(block);
            }
        }
    }

    fn render_detail(&mut self, detail: &Detail) {
        match detail {
            Detail::Bullets { label, items } => {
                let mut block = format!("**{}:**", label);
                for item in *items {
                    block.push_str("\n- ");
                    block.push_str(&inlines(item));
                }
                self.push(block);
            }
            Detail::Labeled { label, text } => {
                self.push(format!("**{}:** {}", label, inlines(text)));
            }
            Detail::Text(text) => self.push(inlines(text)),
            Detail::Flags => {}
        }
    }

    fn render_agent(&mut self, agent: &AgentEntry) {
        self.push(format!("**Invoked by:** `{}`", agent.invocation()));
        self.push(format!("**Purpose:** {}", agent.purpose));
        for detail in agent.details {
            self.render_detail(detail);
        }
    }

    fn render_scope(&mut self, scope: &ScopeSection) {
        self.push(format!("### {}", scope.subtitle));
        self.push(format!("> **Important:** {}", scope.intro));

        self.push(format!("### {}", scope.table_title));
        let rows: Vec<Vec<String>> = scope
            .rows
            .iter()
            .map(|row| {
                vec![
                    format!("**{}**", row.scope),
                    inline(&row.location),
                    row.purpose.to_string(),
                    row.when_to_use.to_string(),
                ]
            })
            .collect();
        self.push(table(&["Scope", "Location", "Purpose", "When to Use"], &rows));

        self.push(format!("### {}", scope.hierarchy_title));
        self.push(fence("", scope.hierarchy));
        self.push(format!("> **Key Concept:** {}", scope.key_concept));
    }

    fn render_reference(&mut self, catalog: &Catalog) {
        self.push("### All Slash Commands");
        let commands: Vec<Vec<String>> = catalog
            .command_rows()
            .iter()
            .map(|row| {
                let flags = if row.key_flags.is_empty() {
                    "(none)".to_string()
                } else {
                    row.key_flags
                        .iter()
                        .map(|f| format!("`{}`", f))
                        .collect::<Vec<_>>()
                        .join(", ")
                };
                vec![format!("`{}`", row.command), row.purpose.to_string(), flags]
            })
            .collect();
        self.push(table(&["Command", "Purpose", "Key Flags"], &commands));

        self.push("### All Agents");
        let agents: Vec<Vec<String>> = catalog
            .agents()
            .map(|agent| {
                vec![
                    agent.name.to_string(),
                    format!("`{}`", agent.invoked_by),
                    agent.summary.to_string(),
                ]
            })
            .collect();
        self.push(table(&["Agent", "Invoked By", "Purpose"], &agents));

        self.push("### Key Configuration Files");
        let files: Vec<Vec<String>> = catalog
            .reference
            .config_files
            .iter()
            .map(|row| {
                vec![
                    format!("`{}`", row.label),
                    row.description.to_string(),
                    row.detail.to_string(),
                ]
            })
            .collect();
        self.push(table(&["File", "Purpose", "Contains"], &files));
    }

    fn render_patterns(&mut self, catalog: &Catalog) {
        for pattern in catalog.patterns {
            self.push(format!("### {}", pattern.title));
            self.push(fence(pattern.language, pattern.code));
        }
    }

    fn render_hooks(&mut self, hooks: &HookSection) {
        self.push(format!("**Purpose:** {}", hooks.purpose));

        self.push("### Default Configuration");
        self.push(format!("`{}`:", hooks.settings_path));
        self.push(fence("json", &hooks.settings_json()));

        self.push("### What Happens");
        let commands: Vec<String> = hooks
            .commands
            .iter()
            .map(|c| format!("- `{}` - {}", c.command, c.effect))
            .collect();
        self.push(commands.join("\n"));

        self.push("### Example Outputs");
        for outcome in hooks.outcomes {
            self.push(format!("{}:\n{}", outcome.label, fence("", outcome.output)));
        }
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the catalog to Markdown
pub fn render_markdown(catalog: &Catalog) -> String {
    MarkdownRenderer::new().render(catalog)
}

/// GitHub-style heading anchor, e.g. `SessionStart Hook` -> `sessionstart-hook`
pub fn slugify(title: &str) -> String {
    title
        .chars()
        .filter_map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                Some(c.to_lowercase().collect::<String>())
            } else if c == ' ' {
                Some("-".to_string())
            } else {
                None
            }
        })
        .collect()
}

fn inline(inline: &Inline) -> String {
    match inline {
        Inline::Text(s) => s.to_string(),
        Inline::Strong(s) => format!("**{}**", s),
        Inline::Code(s) => format!("`{}`", s),
    }
}

fn inlines(items: &[Inline]) -> String {
    items.iter().map(inline).collect()
}

fn fence(language: &str, code: &str) -> String {
    format!("```{}\n{}\n```", language, code)
}

fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut output = format!("| {} |", headers.join(" | "));
    output.push_str("\n|");
    for header in headers {
        output.push_str(&"-".repeat(header.len() + 2));
        output.push('|');
    }
    for row in rows {
        let cells: Vec<String> = row.iter().map(|cell| cell.replace('|', "\\|")).collect();
        output.push_str(&format!("\n| {} |", cells.join(" | ")));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use cheatsheet_catalog::catalog;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Initial Setup Phase"), "initial-setup-phase");
        assert_eq!(slugify("SessionStart Hook"), "sessionstart-hook");
        assert_eq!(slugify("Agents: A & B"), "agents-a--b");
    }

    #[test]
    fn test_table_layout() {
        let rows = vec![vec!["a".to_string(), "b|c".to_string()]];
        let rendered = table(&["One", "Two"], &rows);
        assert_eq!(rendered, "| One | Two |\n|-----|-----|\n| a | b\\|c |");
    }

    #[test]
    fn test_fence() {
        assert_eq!(fence("bash", "ls"), "```bash\nls\n```");
    }

    #[test]
    fn test_first_line_is_title() {
        let md = render_markdown(catalog());
        assert_eq!(md.lines().next(), Some("# Role Context Manager - Cheatsheet"));
        assert!(md.ends_with(".3.0\n"));
    }

    #[test]
    fn test_single_agent_has_no_named_subheading() {
        let md = render_markdown(catalog());
        assert!(md.contains("### Agent: Template Setup Assistant\n\n**Invoked by:** `/init-org-template`"));
        assert!(md.contains("### Agents: Framework Validator & Template Sync\n\n#### Framework Validator"));
    }

    #[test]
    fn test_inline_and_list_flags() {
        let md = render_markdown(catalog());
        assert!(md.contains("**Flags:** `--reset` - Reset to defaults, clearing customizations"));
        assert!(md.contains("**Flags:**\n- `--quick` - Essential checks only\n- `--fix`"));
    }

    #[test]
    fn test_hook_settings_block() {
        let md = render_markdown(catalog());
        assert!(md.contains("```json\n{\n  \"hooks\": {\n    \"SessionStart\": ["));
    }

    #[test]
    fn test_no_blank_line_runs() {
        let md = render_markdown(catalog());
        assert!(!md.contains("\n\n\n"));
    }

    #[test]
    fn test_footer_uses_bold_labels() {
        let md = render_markdown(catalog());
        assert!(md.contains("**For more information:** Visit the plugin repository"));
        assert!(md.ends_with("**Generated with:** Claude Code • Role Context Manager Plugin v1.3.0\n"));
    }

    #[test]
    fn test_command_table_order() {
        let md = render_markdown(catalog());
        let guide = md.find("| `/create-role-guide` | Create custom role guide | (none) |");
        let validate = md.find("| `/validate-setup` |");
        assert!(guide.is_some() && validate.is_some());
        assert!(guide < validate);
    }
}
