//! Catalog to Typst markup transpiler
//!
//! Emits a complete Typst document. Catalog text never goes through Typst
//! markup parsing: every run of text is written as an escaped string
//! literal (`#"..."`) so characters like `*`, `_`, `#`, `~` or `--` print
//! as written.

use cheatsheet_catalog::{
    AgentEntry, Catalog, CommandEntry, Detail, FlagLayout, HookSection, Inline, Phase,
    ScopeSection, SectionId,
};

const PREAMBLE: &str = r##"#let primary = rgb("#2c5282")
#let muted = rgb("#4a5568")
#let accent = rgb("#3182ce")
#let rule = rgb("#e2e8f0")
#let code-bg = rgb("#2d3748")
#let code-fg = rgb("#e2e8f0")

#set page(
  paper: "a4",
  margin: 0.75in,
  footer: context align(center, text(size: 9pt, fill: muted)[Page #counter(page).display() of #counter(page).final().first()]),
)
#set text(size: 11pt, fill: rgb("#1a202c"), font: ("Segoe UI", "Arial", "Liberation Sans", "DejaVu Sans", "Libertinus Serif"))
#set par(leading: 0.75em)
#show strong: set text(fill: primary)

#show heading.where(level: 1): it => {
  pagebreak(weak: true)
  block(width: 100%, stroke: (top: 2pt + rule), inset: (top: 12pt), below: 16pt, text(size: 24pt, weight: "bold", fill: primary, it.body))
}
#show heading.where(level: 2): it => block(above: 20pt, below: 10pt, text(size: 18pt, weight: "bold", fill: primary, it.body))
#show heading.where(level: 3): it => block(above: 14pt, below: 8pt, text(size: 14pt, weight: "bold", fill: muted, it.body))

#let cmd(body) = box(fill: code-bg, inset: (x: 4pt, y: 0pt), outset: (y: 3pt), radius: 3pt, text(fill: code-fg, size: 9pt, raw(body)))
#let panel(fill, stroke-color, body) = block(width: 100%, fill: fill, stroke: (left: 4pt + stroke-color), inset: 14pt, radius: 6pt, below: 18pt, body)
#let panel-title(body) = text(size: 16pt, weight: "bold", fill: primary, body)
#let command-block(body) = block(width: 100%, breakable: false, above: 14pt, below: 14pt, body)
#let agent-block(body) = block(width: 100%, fill: rgb("#f7fafc"), stroke: (left: 3pt + accent), inset: 10pt, radius: 4pt, breakable: false, body)
#let callout(title, body) = block(width: 100%, fill: rgb("#ebf8ff"), stroke: (left: 4pt + accent), inset: 10pt, radius: 4pt, breakable: false)[
  #text(weight: "bold", fill: primary, title)

  #body
]
#let code(body) = block(width: 100%, fill: code-bg, inset: 10pt, radius: 4pt, text(fill: code-fg, size: 9pt, raw(block: true, body)))
#let diagram(body) = block(width: 100%, fill: rgb("#f7fafc"), stroke: 2pt + rule, inset: 14pt, radius: 6pt, breakable: false, text(size: 8pt, raw(block: true, body)))
#let data-table(columns, ..cells) = table(
  columns: columns,
  stroke: (x, y) => (bottom: 1pt + rule),
  inset: 7pt,
  fill: (x, y) => if y == 0 { primary } else if calc.even(y) { rgb("#f7fafc") } else { none },
  ..cells,
)
#let th(body) = text(fill: white, weight: "bold", body)
"##;

/// Transpiler for converting the catalog to Typst markup
pub struct Transpiler;

impl Transpiler {
    /// Transpile the catalog to a complete Typst document
    pub fn transpile(catalog: &Catalog) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "#set document(title: {})\n",
            string_literal(&catalog.title())
        ));
        output.push_str(PREAMBLE);
        output.push('\n');

        output.push_str(&Self::transpile_header(catalog));
        output.push_str(&Self::transpile_toc(catalog));

        for id in catalog.sections() {
            let section = match id {
                SectionId::Scope => Self::transpile_scope(&catalog.scope),
                SectionId::Reference => Self::transpile_reference(catalog),
                SectionId::Patterns => Self::transpile_patterns(catalog),
                SectionId::Hooks => Self::transpile_hooks(&catalog.hooks),
                phase_id => catalog
                    .phase(*phase_id)
                    .map(Self::transpile_phase)
                    .unwrap_or_default(),
            };
            output.push_str(&section);
        }

        output.push_str(&Self::transpile_footer(catalog));
        output
    }

    fn transpile_header(catalog: &Catalog) -> String {
        let mut output = String::from("#align(center)[\n");
        output.push_str(&format!(
            "  #text(size: 28pt, weight: \"bold\", fill: primary, {})\n\n",
            string_literal(catalog.plugin)
        ));
        output.push_str(&format!(
            "  #text(size: 12pt, fill: muted, {})\n\n",
            string_literal(&format!("Plugin Version {}", catalog.version))
        ));
        output.push_str(&format!(
            "  #emph({})\n",
            string_literal(catalog.description)
        ));
        output.push_str("]\n");
        output.push_str("#line(length: 100%, stroke: 3pt + primary)\n\n");
        output
    }

    fn transpile_toc(catalog: &Catalog) -> String {
        let mut output = String::from(
            "#block(width: 100%, fill: rgb(\"#f7fafc\"), stroke: 1pt + rule, inset: 14pt, radius: 6pt)[\n",
        );
        output.push_str("  #text(size: 16pt, weight: \"bold\", fill: primary, \"Table of Contents\")\n\n");
        output.push_str("  #columns(2, gutter: 30pt)[\n");
        for id in catalog.sections() {
            output.push_str(&format!(
                "    #link(<{}>, text(fill: accent, {}))\n\n",
                id.anchor(),
                string_literal(id.title())
            ));
        }
        output.push_str("  ]\n]\n\n");
        output
    }

    fn heading(level: u8, id: Option<SectionId>, title: &str) -> String {
        let label = id
            .map(|id| format!("<{}>", id.anchor()))
            .unwrap_or_default();
        format!(
            "#heading(level: {}, {}){}\n\n",
            level,
            string_literal(title),
            label
        )
    }

    fn transpile_phase(phase: &Phase) -> String {
        let (fill, stroke) = phase_colors(phase.id);
        let mut output = Self::heading(1, Some(phase.id), phase.id.title());
        output.push_str(&format!(
            "{}\n\n",
            markup(&[Inline::Strong("When to use:"), Inline::Text(" "), Inline::Text(phase.when_to_use)])
        ));

        output.push_str(&format!(
            "#panel(rgb(\"{}\"), rgb(\"{}\"))[\n#panel-title(\"Commands\")\n\n",
            fill, stroke
        ));
        for command in phase.commands {
            output.push_str(&Self::transpile_command(command));
        }
        output.push_str("]\n\n");

        if !phase.agents.is_empty() {
            output.push_str(&format!(
                "#panel(rgb(\"{}\"), rgb(\"{}\"))[\n#panel-title({})\n\n",
                fill,
                stroke,
                string_literal(&phase.agents_title())
            ));
            for agent in phase.agents {
                output.push_str(&Self::transpile_agent(agent));
            }
            output.push_str("]\n\n");
        }

        output
    }

    fn transpile_command(command: &CommandEntry) -> String {
        let mut body = format!("#cmd({})\n\n", string_literal(&command.signature()));
        body.push_str(&labeled("Purpose", &[Inline::Text(command.purpose)]));
        for detail in command.details {
            match detail {
                Detail::Flags => body.push_str(&Self::transpile_flags(command)),
                other => body.push_str(&transpile_detail(other)),
            }
        }
        format!("#command-block[\n{}]\n\n", body)
    }

    fn transpile_flags(command: &CommandEntry) -> String {
        match command.flag_layout {
            FlagLayout::Inline => {
                let mut parts = vec![Inline::Strong("Flags:"), Inline::Text(" ")];
                for (i, flag) in command.flags.iter().enumerate() {
                    if i > 0 {
                        parts.push(Inline::Text(", "));
                    }
                    parts.push(Inline::Code(flag.name));
                    parts.push(Inline::Text(" - "));
                    parts.push(Inline::Text(flag.effect));
                }
                format!("{}\n\n", markup(&parts))
            }
            FlagLayout::List => {
                let mut output = format!("{}\n", markup(&[Inline::Strong("Flags:")]));
                for flag in command.flags {
                    output.push_str(&format!(
                        "- {}\n",
                        markup(&[Inline::Code(flag.name), Inline::Text(" - "), Inline::Text(flag.effect)])
                    ));
                }
                output.push('\n');
                output
            }
        }
    }

    fn transpile_agent(agent: &AgentEntry) -> String {
        let mut body = format!(
            "#text(weight: \"bold\", fill: primary, {})\n\n",
            string_literal(agent.name)
        );
        body.push_str(&format!(
            "{}\n\n",
            markup(&[Inline::Strong("Invoked by:"), Inline::Text(" ")])
                + &format!("#cmd({})", string_literal(&agent.invocation()))
        ));
        body.push_str(&labeled("Purpose", &[Inline::Text(agent.purpose)]));
        for detail in agent.details {
            body.push_str(&transpile_detail(detail));
        }
        format!("#agent-block[\n{}]\n\n", body)
    }

    fn transpile_scope(scope: &ScopeSection) -> String {
        let title = format!("{}: {}", SectionId::Scope.title(), scope.subtitle);
        let mut output = Self::heading(1, Some(SectionId::Scope), &title);
        output.push_str(&callout("Important:", scope.intro));

        output.push_str(&Self::heading(2, None, scope.table_title));
        let rows: Vec<Vec<String>> = scope
            .rows
            .iter()
            .map(|row| {
                vec![
                    content(&[Inline::Strong(row.scope)]),
                    content(&[row.location]),
                    content(&[Inline::Text(row.purpose)]),
                    content(&[Inline::Text(row.when_to_use)]),
                ]
            })
            .collect();
        output.push_str(&table(&["Scope", "Location", "Purpose", "When to Use"], &rows));

        output.push_str(&Self::heading(2, None, scope.hierarchy_title));
        output.push_str(&format!("#diagram({})\n\n", string_literal(scope.hierarchy)));
        output.push_str(&callout("Key Concept:", scope.key_concept));
        output
    }

    fn transpile_reference(catalog: &Catalog) -> String {
        let mut output = Self::heading(1, Some(SectionId::Reference), SectionId::Reference.title());

        output.push_str(&Self::heading(2, None, "All Slash Commands"));
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
                    format!("[#cmd({})]", string_literal(row.command)),
                    content(&[Inline::Text(row.purpose)]),
                    format!("[#{}]", string_literal(&flags)),
                ]
            })
            .collect();
        output.push_str(&table(&["Command", "Purpose", "Key Flags"], &commands));

        output.push_str(&Self::heading(2, None, "All Agents"));
        let agents: Vec<Vec<String>> = catalog
            .agents()
            .map(|agent| {
                vec![
                    content(&[Inline::Text(agent.name)]),
                    content(&[Inline::Text(agent.invoked_by)]),
                    content(&[Inline::Text(agent.summary)]),
                ]
            })
            .collect();
        output.push_str(&table(&["Agent", "Invoked By", "Purpose"], &agents));

        output.push_str(&Self::heading(2, None, "Key Configuration Files"));
        let files: Vec<Vec<String>> = catalog
            .reference
            .config_files
            .iter()
            .map(|row| {
                vec![
                    content(&[Inline::Text(row.label)]),
                    content(&[Inline::Text(row.description)]),
                    content(&[Inline::Text(row.detail)]),
                ]
            })
            .collect();
        output.push_str(&table(&["File", "Purpose", "Contains"], &files));
        output
    }

    fn transpile_patterns(catalog: &Catalog) -> String {
        let mut output = Self::heading(1, Some(SectionId::Patterns), SectionId::Patterns.title());
        for pattern in catalog.patterns {
            output.push_str(&Self::heading(3, None, pattern.title));
            output.push_str(&format!("#code({})\n\n", string_literal(pattern.code)));
        }
        output
    }

    fn transpile_hooks(hooks: &HookSection) -> String {
        let mut output = Self::heading(1, Some(SectionId::Hooks), SectionId::Hooks.title());
        output.push_str(&labeled("Purpose", &[Inline::Text(hooks.purpose)]));

        output.push_str(&format!(
            "#callout({}, code({}))\n\n",
            string_literal(&format!("Default Configuration ({}):", hooks.settings_path)),
            string_literal(&hooks.settings_json())
        ));

        output.push_str(&format!("{}\n", markup(&[Inline::Strong("What Happens:")])));
        for command in hooks.commands {
            output.push_str(&format!(
                "- {}\n",
                markup(&[Inline::Code(command.command), Inline::Text(" - "), Inline::Text(command.effect)])
            ));
        }
        output.push('\n');

        output.push_str(&format!("{}\n\n", markup(&[Inline::Strong("Example Outputs:")])));
        for outcome in hooks.outcomes {
            output.push_str(&format!("{}\n\n", markup(&[Inline::Text(outcome.label), Inline::Text(":")])));
            output.push_str(&format!("#code({})\n\n", string_literal(outcome.output)));
        }
        output
    }

    fn transpile_footer(catalog: &Catalog) -> String {
        let mut output = String::from("#v(40pt)\n#line(length: 100%, stroke: 2pt + rule)\n");
        output.push_str("#align(center, text(size: 9pt, fill: muted)[\n");
        for line in catalog.footer {
            output.push_str(&format!("  {}", labeled(line.label, &[Inline::Text(line.text)])));
        }
        output.push_str("])\n");
        output
    }
}

/// Background and accent colours for a phase panel
fn phase_colors(id: SectionId) -> (&'static str, &'static str) {
    match id {
        SectionId::Setup => ("#ebf8ff", "#3182ce"),
        SectionId::Daily => ("#f0fff4", "#38a169"),
        SectionId::Maintenance => ("#fffaf0", "#dd6b20"),
        _ => ("#f7fafc", "#4a5568"),
    }
}

fn transpile_detail(detail: &Detail) -> String {
    match detail {
        Detail::Bullets { label, items } => {
            let mut output = format!("#strong({})\n", string_literal(&format!("{}:", label)));
            for item in *items {
                output.push_str(&format!("- {}\n", markup(item)));
            }
            output.push('\n');
            output
        }
        Detail::Labeled { label, text } => labeled(label, text),
        Detail::Text(text) => format!("{}\n\n", markup(text)),
        Detail::Flags => String::new(),
    }
}

fn labeled(label: &str, text: &[Inline]) -> String {
    format!(
        "#strong({})#\" \"{}\n\n",
        string_literal(&format!("{}:", label)),
        markup(text)
    )
}

fn callout(title: &str, body: &str) -> String {
    format!(
        "#callout({}, {})\n\n",
        string_literal(title),
        string_literal(body)
    )
}

fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut output = format!("#data-table({},\n", headers.len());
    let header_cells: Vec<String> = headers
        .iter()
        .map(|h| format!("th({})", string_literal(h)))
        .collect();
    output.push_str(&format!("  table.header({}),\n", header_cells.join(", ")));
    for row in rows {
        output.push_str(&format!("  {},\n", row.join(", ")));
    }
    output.push_str(")\n\n");
    output
}

/// A run of inlines as markup, each element an embedded expression
fn markup(inlines: &[Inline]) -> String {
    inlines
        .iter()
        .map(|inline| match inline {
            Inline::Text(s) => format!("#{}", string_literal(s)),
            Inline::Strong(s) => format!("#strong({})", string_literal(s)),
            Inline::Code(s) => format!("#cmd({})", string_literal(s)),
        })
        .collect()
}

/// A run of inlines as a content block usable in code position
fn content(inlines: &[Inline]) -> String {
    format!("[{}]", markup(inlines))
}

/// Quote a string as a Typst string literal
fn string_literal(s: &str) -> String {
    let mut literal = String::with_capacity(s.len() + 2);
    literal.push('"');
    for c in s.chars() {
        match c {
            '\\' => literal.push_str("\\\\"),
            '"' => literal.push_str("\\\""),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            _ => literal.push(c),
        }
    }
    literal.push('"');
    literal
}
