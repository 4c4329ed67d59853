//! Catalog entry types
//!
//! These types describe the structure of the cheatsheet. Instances live in
//! static memory and are never mutated.

use serde_json::{json, Map, Value};

use crate::inline::{Inline, Rich};

/// Top-level sections of the cheatsheet, in document order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Setup,
    Configuration,
    Daily,
    Maintenance,
    Scope,
    Reference,
    Patterns,
    Hooks,
}

impl SectionId {
    /// Every section in the order it appears in the document
    pub const ALL: [SectionId; 8] = [
        SectionId::Setup,
        SectionId::Configuration,
        SectionId::Daily,
        SectionId::Maintenance,
        SectionId::Scope,
        SectionId::Reference,
        SectionId::Patterns,
        SectionId::Hooks,
    ];

    /// Element id used for in-document links
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Setup => "setup",
            SectionId::Configuration => "configuration",
            SectionId::Daily => "daily",
            SectionId::Maintenance => "maintenance",
            SectionId::Scope => "scope",
            SectionId::Reference => "reference",
            SectionId::Patterns => "patterns",
            SectionId::Hooks => "hooks",
        }
    }

    /// Section heading, also used as the table of contents label
    pub fn title(self) -> &'static str {
        match self {
            SectionId::Setup => "Initial Setup Phase",
            SectionId::Configuration => "Configuration Phase",
            SectionId::Daily => "Daily Usage Phase",
            SectionId::Maintenance => "Maintenance Phase",
            SectionId::Scope => "Understanding Scope",
            SectionId::Reference => "Quick Reference",
            SectionId::Patterns => "Common Patterns",
            SectionId::Hooks => "SessionStart Hook",
        }
    }

    /// Zero-based position within the document
    pub fn position(self) -> usize {
        SectionId::ALL
            .iter()
            .position(|id| *id == self)
            .unwrap_or_default()
    }

    /// Whether this section describes a lifecycle phase
    pub fn is_phase(self) -> bool {
        matches!(
            self,
            SectionId::Setup | SectionId::Configuration | SectionId::Daily | SectionId::Maintenance
        )
    }
}

/// A command flag and what it does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flag {
    pub name: &'static str,
    pub effect: &'static str,
}

/// How a command's flags are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagLayout {
    /// One comma-separated paragraph
    Inline,
    /// A bullet per flag
    List,
}

/// A block of detail text under a command or agent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detail {
    /// A bold label followed by a bullet list
    Bullets {
        label: &'static str,
        items: &'static [Rich],
    },
    /// A bold label followed by text on the same line
    Labeled { label: &'static str, text: Rich },
    /// A plain paragraph
    Text(Rich),
    /// Position of the command's flag list
    Flags,
}

/// A slash command provided by the plugin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandEntry {
    /// Command name including the leading slash
    pub name: &'static str,
    /// Argument synopsis shown after the name (may be empty)
    pub args: &'static str,
    /// Whether the command accepts `--global|--project`
    pub scoped: bool,
    /// Purpose sentence shown under the command
    pub purpose: &'static str,
    /// Short purpose used in the quick-reference table
    pub summary: &'static str,
    pub flags: &'static [Flag],
    pub flag_layout: FlagLayout,
    pub details: &'static [Detail],
}

impl CommandEntry {
    /// Full syntax signature, e.g. `/set-role [role-name] [--global|--project]`
    pub fn signature(&self) -> String {
        let mut signature = self.name.to_string();
        if !self.args.is_empty() {
            signature.push(' ');
            signature.push_str(self.args);
        }
        if self.scoped {
            signature.push_str(" [--global|--project]");
        }
        signature
    }

    /// Flags listed in the quick-reference table
    ///
    /// A command's own flags win; scoped commands without their own flags
    /// advertise the scope flags.
    pub fn key_flags(&self) -> Vec<&'static str> {
        if !self.flags.is_empty() {
            self.flags.iter().map(|f| f.name).collect()
        } else if self.scoped {
            vec!["--global", "--project"]
        } else {
            Vec::new()
        }
    }
}

/// An agent that a command delegates to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentEntry {
    pub name: &'static str,
    /// Name of the invoking command
    pub invoked_by: &'static str,
    /// Arguments shown with the invoking command (may be empty)
    pub invoked_args: &'static str,
    pub purpose: &'static str,
    /// Short purpose used in the quick-reference table
    pub summary: &'static str,
    pub details: &'static [Detail],
}

impl AgentEntry {
    /// The invoking command as displayed, e.g. `/create-role-guide [role-name]`
    pub fn invocation(&self) -> String {
        if self.invoked_args.is_empty() {
            self.invoked_by.to_string()
        } else {
            format!("{} {}", self.invoked_by, self.invoked_args)
        }
    }
}

/// A lifecycle phase section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phase {
    pub id: SectionId,
    pub when_to_use: &'static str,
    pub commands: &'static [CommandEntry],
    pub agents: &'static [AgentEntry],
}

impl Phase {
    /// Heading for the agent block, e.g. `Agents: Framework Validator & Template Sync`
    pub fn agents_title(&self) -> String {
        let names: Vec<&str> = self.agents.iter().map(|a| a.name).collect();
        match names.len() {
            0 => String::new(),
            1 => format!("Agent: {}", names[0]),
            _ => format!("Agents: {}", names.join(" & ")),
        }
    }
}

/// One row of the scope table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeRow {
    pub scope: &'static str,
    pub location: Inline,
    pub purpose: &'static str,
    pub when_to_use: &'static str,
}

/// The scope explanation section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeSection {
    pub subtitle: &'static str,
    pub intro: &'static str,
    pub table_title: &'static str,
    pub rows: &'static [ScopeRow],
    pub hierarchy_title: &'static str,
    /// ASCII box diagram of configuration precedence
    pub hierarchy: &'static str,
    pub key_concept: &'static str,
}

/// A (label, description, detail) triple for quick-reference tables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceRow {
    pub label: &'static str,
    pub description: &'static str,
    pub detail: &'static str,
}

/// Static parts of the quick-reference section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceSection {
    /// Row order of the slash command table, by command name
    pub command_order: &'static [&'static str],
    pub config_files: &'static [ReferenceRow],
}

/// A row of the derived slash command table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRow {
    pub command: &'static str,
    pub purpose: &'static str,
    pub key_flags: Vec<&'static str>,
}

/// A usage pattern with a code sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub title: &'static str,
    pub language: &'static str,
    pub code: &'static str,
}

/// A command run by the SessionStart hook
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HookCommand {
    pub command: &'static str,
    pub effect: &'static str,
}

/// Example console output of the hook
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HookOutcome {
    pub label: &'static str,
    pub output: &'static str,
}

/// The SessionStart hook section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HookSection {
    pub purpose: &'static str,
    /// Settings file that holds the hook configuration
    pub settings_path: &'static str,
    /// Hook event name
    pub event: &'static str,
    pub commands: &'static [HookCommand],
    pub outcomes: &'static [HookOutcome],
}

impl HookSection {
    /// Pretty-printed `settings.json` fragment configuring the hook
    pub fn settings_json(&self) -> String {
        let commands: Vec<Value> = self
            .commands
            .iter()
            .map(|c| Value::String(c.command.to_string()))
            .collect();
        let mut events = Map::new();
        events.insert(self.event.to_string(), Value::Array(commands));
        let settings = json!({ "hooks": events });
        format!("{:#}", settings)
    }
}

/// The complete cheatsheet content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalog {
    /// Plugin name shown in the header
    pub plugin: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub phases: &'static [Phase],
    pub scope: ScopeSection,
    pub reference: ReferenceSection,
    pub patterns: &'static [Pattern],
    pub hooks: HookSection,
    pub footer: &'static [FooterLine],
}

/// A bold label followed by its text, e.g. `Generated with: ...`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterLine {
    pub label: &'static str,
    pub text: &'static str,
}

impl Catalog {
    /// Document title, e.g. `Role Context Manager - Cheatsheet`
    pub fn title(&self) -> String {
        format!("{} - Cheatsheet", self.plugin)
    }

    /// Sections in document order
    pub fn sections(&self) -> &'static [SectionId] {
        &SectionId::ALL
    }

    /// Look up the phase for a section id
    pub fn phase(&self, id: SectionId) -> Option<&'static Phase> {
        self.phases.iter().find(|p| p.id == id)
    }

    /// Every command, in phase order
    pub fn commands(&self) -> impl Iterator<Item = &'static CommandEntry> {
        self.phases.iter().flat_map(|p| p.commands.iter())
    }

    /// Every agent, in phase order
    pub fn agents(&self) -> impl Iterator<Item = &'static AgentEntry> {
        self.phases.iter().flat_map(|p| p.agents.iter())
    }

    /// Find a command by name (with leading slash)
    pub fn command(&self, name: &str) -> Option<&'static CommandEntry> {
        self.commands().find(|c| c.name == name)
    }

    /// Rows of the "All Slash Commands" table
    ///
    /// Follows `reference.command_order`; commands it does not name are
    /// appended in phase order so every command gets exactly one row.
    pub fn command_rows(&self) -> Vec<CommandRow> {
        let ordered = self
            .reference
            .command_order
            .iter()
            .filter_map(|name| self.command(name));
        let rest = self
            .commands()
            .filter(|c| !self.reference.command_order.contains(&c.name));
        ordered
            .chain(rest)
            .map(|c| CommandRow {
                command: c.name,
                purpose: c.summary,
                key_flags: c.key_flags(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCOPED: CommandEntry = CommandEntry {
        name: "/set-role",
        args: "[role-name]",
        scoped: true,
        purpose: "Set your current role",
        summary: "Set your current role",
        flags: &[],
        flag_layout: FlagLayout::Inline,
        details: &[],
    };

    #[test]
    fn test_signature_with_scope() {
        assert_eq!(
            SCOPED.signature(),
            "/set-role [role-name] [--global|--project]"
        );
    }

    #[test]
    fn test_signature_bare() {
        let cmd = CommandEntry {
            name: "/show-role-context",
            args: "",
            scoped: false,
            ..SCOPED
        };
        assert_eq!(cmd.signature(), "/show-role-context");
        assert!(cmd.key_flags().is_empty());
    }

    #[test]
    fn test_key_flags_prefer_own_flags() {
        let cmd = CommandEntry {
            flags: &[Flag {
                name: "--quick",
                effect: "Essential checks only",
            }],
            ..SCOPED
        };
        assert_eq!(cmd.key_flags(), vec!["--quick"]);
        assert_eq!(SCOPED.key_flags(), vec!["--global", "--project"]);
    }

    #[test]
    fn test_agents_title() {
        const A: AgentEntry = AgentEntry {
            name: "Framework Validator",
            invoked_by: "/validate-setup",
            invoked_args: "",
            purpose: "",
            summary: "",
            details: &[],
        };
        const B: AgentEntry = AgentEntry {
            name: "Template Sync",
            invoked_by: "/sync-template",
            ..A
        };
        let one = Phase {
            id: SectionId::Maintenance,
            when_to_use: "",
            commands: &[],
            agents: &[A],
        };
        let two = Phase {
            agents: &[A, B],
            ..one
        };
        assert_eq!(one.agents_title(), "Agent: Framework Validator");
        assert_eq!(
            two.agents_title(),
            "Agents: Framework Validator & Template Sync"
        );
    }

    #[test]
    fn test_section_positions() {
        for (i, id) in SectionId::ALL.iter().enumerate() {
            assert_eq!(id.position(), i);
        }
        assert!(SectionId::Daily.is_phase());
        assert!(!SectionId::Hooks.is_phase());
    }

    #[test]
    fn test_settings_json_is_valid() {
        let hooks = HookSection {
            purpose: "",
            settings_path: ".claude/settings.json",
            event: "SessionStart",
            commands: &[HookCommand {
                command: "/validate-setup --quiet",
                effect: "",
            }],
            outcomes: &[],
        };
        let json = hooks.settings_json();
        let parsed: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["hooks"]["SessionStart"][0], "/validate-setup --quiet");
        assert!(json.contains("\n  \"hooks\""));
    }
}
